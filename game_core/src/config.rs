use std::time::Duration;

use glam::Vec2;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub boundary_thickness: f32,
    pub net_width: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub max_angle: i32,
    pub max_score: u8,
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            boundary_thickness: Params::BOUNDARY_THICKNESS,
            net_width: Params::NET_WIDTH,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_offset: Params::PADDLE_OFFSET,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            max_angle: Params::MAX_ANGLE,
            max_score: Params::MAX_SCORE,
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre of the play-field
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.window_width / 2.0, self.window_height / 2.0)
    }

    /// Get X position of a paddle's left edge based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.boundary_thickness + self.paddle_offset,
            Side::Right => {
                self.window_width - self.boundary_thickness - self.paddle_offset - self.paddle_width
            }
        }
    }

    /// Y position of a vertically centred paddle's top edge
    pub fn paddle_start_y(&self) -> f32 {
        self.window_height / 2.0 - self.paddle_height / 2.0
    }

    /// Top-left corner of a ball centred in the field
    pub fn ball_start(&self) -> Vec2 {
        self.center() - Vec2::splat(self.ball_size / 2.0)
    }

    /// Centre of the score text for a side
    pub fn score_position(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => self.window_width / 4.0,
            Side::Right => self.window_width * 3.0 / 4.0,
        };
        Vec2::new(x, Params::SCORE_POS_Y)
    }

    /// Wall-clock length of one simulation tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }
}
