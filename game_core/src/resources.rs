use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn record_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment(Side::Left);
        assert_eq!(score.left, 1);
        score.increment(Side::Left);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0, "Only the scoring side changes");
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        score.increment(Side::Right);
        assert_eq!(score.get(Side::Right), 1);
        assert_eq!(score.get(Side::Left), 0);
    }

    #[test]
    fn test_score_has_winner_left() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Left);
        }
        assert_eq!(
            score.has_winner(11),
            Some(Side::Left),
            "Left player should win at 11"
        );
    }

    #[test]
    fn test_score_has_winner_right() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Right);
        }
        assert_eq!(
            score.has_winner(11),
            Some(Side::Right),
            "Right player should win at 11"
        );
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment(Side::Left);
            score.increment(Side::Right);
        }
        assert_eq!(score.has_winner(11), None, "No winner below threshold");
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 11, right: 4 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.record_point(Side::Left);
        events.record_point(Side::Right);
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..10 {
            assert_eq!(a.0.gen::<u32>(), b.0.gen::<u32>());
        }
    }
}
