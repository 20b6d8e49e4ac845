use glam::Vec2;

use crate::{Aabb, Config, GameRng};

/// Which half of the field a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), config.paddle_start_y()),
            size: Vec2::new(config.paddle_width, config.paddle_height),
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddleIntent {
    #[default]
    Stop,
    Up,
    Down,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical direction in screen space (-1 = up, 0 = stop, 1 = down)
    pub fn dir(self) -> f32 {
        match self {
            PaddleIntent::Stop => 0.0,
            PaddleIntent::Up => -1.0,
            PaddleIntent::Down => 1.0,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub size: f32,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, size: f32, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }

    /// Move the ball so its centre sits on `center`, keeping its velocity
    pub fn recenter(&mut self, center: Vec2) {
        self.pos = center - Vec2::splat(self.size / 2.0);
    }

    /// Reset ball to center with a random serve angle and direction
    pub fn serve(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.recenter(config.center());

        // Whole degrees in [-max_angle, max_angle]
        let max_angle = config.max_angle.abs();
        let degrees = rng.0.gen_range(-max_angle..=max_angle);
        let angle = (degrees as f32).to_radians();
        self.vel = Vec2::new(angle.cos(), angle.sin()) * config.ball_speed;

        // Pick the serving direction
        if rng.0.gen_bool(0.5) {
            self.vel.x = -self.vel.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_starts_centred() {
        let config = Config::new();
        let left = Paddle::new(Side::Left, &config);
        let right = Paddle::new(Side::Right, &config);
        assert_eq!(left.pos, Vec2::new(15.0, 210.0));
        assert_eq!(right.pos, Vec2::new(615.0, 210.0));
        assert_eq!(left.rect().size(), Vec2::new(10.0, 60.0));
    }

    #[test]
    fn test_intent_direction() {
        assert_eq!(PaddleIntent::new(), PaddleIntent::Stop);
        assert_eq!(PaddleIntent::Up.dir(), -1.0);
        assert_eq!(PaddleIntent::Down.dir(), 1.0);
        assert_eq!(PaddleIntent::Stop.dir(), 0.0);
    }

    #[test]
    fn test_ball_recenter_keeps_velocity() {
        let config = Config::new();
        let mut ball = Ball::new(Vec2::new(3.0, 7.0), config.ball_size, Vec2::new(-8.0, 2.0));
        ball.recenter(config.center());
        assert_eq!(ball.rect().center(), config.center());
        assert_eq!(ball.vel, Vec2::new(-8.0, 2.0));
    }

    #[test]
    fn test_serve_speed_and_angle() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, config.ball_size, Vec2::ZERO);
        let max_angle = (config.max_angle as f32).to_radians();

        for _ in 0..200 {
            ball.serve(&config, &mut rng);
            assert!(
                (ball.vel.length() - config.ball_speed).abs() < 1e-4,
                "Serve speed should be {}, got {}",
                config.ball_speed,
                ball.vel.length()
            );
            let angle = (ball.vel.y / ball.vel.x.abs()).atan();
            assert!(
                angle.abs() <= max_angle + 1e-4,
                "Serve angle {} exceeds limit",
                angle.to_degrees()
            );
            assert_eq!(ball.rect().center(), config.center(), "Serve starts at centre");
        }
    }

    #[test]
    fn test_serve_picks_both_directions() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, config.ball_size, Vec2::ZERO);
        let mut left = 0;
        let mut right = 0;

        for _ in 0..200 {
            ball.serve(&config, &mut rng);
            if ball.vel.x < 0.0 {
                left += 1;
            } else {
                right += 1;
            }
        }
        assert!(left > 50 && right > 50, "left={} right={}", left, right);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }
}
