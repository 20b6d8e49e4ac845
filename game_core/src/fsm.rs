//! Game State Machine
//!
//! Decides whether the simulation runs, waits for the next serve, or shows
//! the end of a match.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FsmState {
    /// Match concluded; scores frozen until the next key press.
    #[default]
    Over,
    /// Between points; any key press serves.
    Stopped,
    /// Live simulation.
    Running,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    KeyPressed,
    PointScored,
    MatchWon,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

impl TransitionResult {
    /// A successful key press that left Over or Stopped, i.e. the ball must be served
    pub fn is_serve(&self) -> bool {
        self.success && self.action == GameAction::KeyPressed
    }

    /// A serve that also begins a fresh match
    pub fn is_new_match(&self) -> bool {
        self.is_serve() && self.from_state == FsmState::Over
    }
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Over, GameAction::KeyPressed) => Some(FsmState::Running),
            (FsmState::Stopped, GameAction::KeyPressed) => Some(FsmState::Running),
            (FsmState::Running, GameAction::PointScored) => Some(FsmState::Stopped),
            (FsmState::Running, GameAction::MatchWon) => Some(FsmState::Over),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if the simulation should advance
    pub fn is_running(&self) -> bool {
        self.state == FsmState::Running
    }

    /// Check if in game over state
    pub fn is_game_over(&self) -> bool {
        self.state == FsmState::Over
    }
}
