/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const WINDOW_HEIGHT: f32 = 480.0;

    // Walls
    pub const BOUNDARY_THICKNESS: f32 = 5.0;
    pub const NET_WIDTH: f32 = 10.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_OFFSET: f32 = 10.0; // gap between side wall and paddle
    pub const PADDLE_SPEED: f32 = 10.0; // pixels per tick

    // Ball
    pub const BALL_SIZE: f32 = 9.0;
    pub const BALL_SPEED: f32 = 8.0; // pixels per tick
    pub const MAX_ANGLE: i32 = 30; // degrees either side of horizontal

    // Score
    pub const MAX_SCORE: u8 = 11;
    pub const SCORE_POS_Y: f32 = 30.0;

    // Loop
    pub const TICK_RATE: u32 = 30;
}
