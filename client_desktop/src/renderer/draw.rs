use game_core::Aabb;
use glam::Vec2;

use super::glyphs::{glyph, is_set, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

pub type Color = [u8; 4];

pub const BLACK: Color = [0x00, 0x00, 0x00, 0xff];
pub const WHITE: Color = [0xff, 0xff, 0xff, 0xff];

/// RGBA8 frame buffer view
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Fill a rectangle, rounded to whole pixels and clipped to the canvas
    pub fn fill_rect(&mut self, rect: Aabb, color: Color) {
        let x0 = to_pixel(rect.min.x, self.width);
        let x1 = to_pixel(rect.max.x, self.width);
        let y0 = to_pixel(rect.min.y, self.height);
        let y1 = to_pixel(rect.max.y, self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize * 4;
        for y in y0..y1 {
            let row = &mut self.frame[y * stride + x0 * 4..y * stride + x1 * 4];
            for pixel in row.chunks_exact_mut(4) {
                pixel.copy_from_slice(&color);
            }
        }
    }

    /// Draw `text` centred on `center`, each font pixel `scale` screen pixels wide
    ///
    /// Characters the font lacks leave a gap.
    pub fn draw_text(&mut self, text: &str, center: Vec2, scale: u32, color: Color) {
        let size = text_size(text, scale);
        let origin = center - size / 2.0;
        let cell = Vec2::splat(scale as f32);

        for (i, c) in text.chars().enumerate() {
            let Some(bitmap) = glyph(c) else {
                continue;
            };
            let left = origin.x + (i as u32 * GLYPH_ADVANCE * scale) as f32;

            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if is_set(bitmap, col, row) {
                        let pos = Vec2::new(
                            left + (col * scale) as f32,
                            origin.y + (row * scale) as f32,
                        );
                        self.fill_rect(Aabb::from_pos_size(pos, cell), color);
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut color = [0; 4];
        color.copy_from_slice(&self.frame[i..i + 4]);
        Some(color)
    }
}

/// Pixel extent of `text` at `scale`
pub fn text_size(text: &str, scale: u32) -> Vec2 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return Vec2::ZERO;
    }
    // No trailing spacing column after the last glyph
    let width = (chars * GLYPH_ADVANCE - 1) * scale;
    Vec2::new(width as f32, (GLYPH_HEIGHT * scale) as f32)
}

fn to_pixel(coord: f32, limit: u32) -> usize {
    coord.round().clamp(0.0, limit as f32) as usize
}
