//! Software presenter drawing a game snapshot into a `pixels` frame buffer

mod draw;
mod glyphs;

use draw::{Canvas, BLACK, WHITE};

use game_core::{Config, FsmState, Side, Snapshot};
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Font pixels per glyph pixel
pub const TEXT_SCALE: u32 = 3;

/// Centred banner, words split either side of the net
pub const GAME_OVER_TEXT: &str = "GAME     OVER";

pub struct Renderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Frame buffer of `width` x `height` pixels, scaled to fill the window
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn draw(&mut self, snapshot: &Snapshot, config: &Config) {
        let mut canvas = Canvas::new(self.pixels.frame_mut(), self.width, self.height);
        draw_snapshot(&mut canvas, snapshot, config);
    }

    pub fn present(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

/// Black background, white rectangles, both scores, and the banner when the match is over
pub fn draw_snapshot(canvas: &mut Canvas, snapshot: &Snapshot, config: &Config) {
    canvas.clear(BLACK);

    for rect in snapshot.rects() {
        canvas.fill_rect(rect, WHITE);
    }

    for side in [Side::Left, Side::Right] {
        let text = snapshot.score.get(side).to_string();
        canvas.draw_text(&text, config.score_position(side), TEXT_SCALE, WHITE);
    }

    if snapshot.state == FsmState::Over {
        canvas.draw_text(GAME_OVER_TEXT, config.center(), TEXT_SCALE, WHITE);
    }
}
