//! 5x7 bitmap font covering the digits and the banner letters

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Glyph width plus one column of spacing
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// One row per byte, leftmost column in bit 4
type Glyph = [u8; GLYPH_HEIGHT as usize];

const DIGITS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

const BLANK: Glyph = [0; GLYPH_HEIGHT as usize];
const LETTER_A: Glyph = [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001];
const LETTER_E: Glyph = [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111];
const LETTER_G: Glyph = [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111];
const LETTER_M: Glyph = [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001];
const LETTER_O: Glyph = [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110];
const LETTER_R: Glyph = [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001];
const LETTER_V: Glyph = [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100];

/// Bitmap for `c`, or `None` if the font does not cover it
pub fn glyph(c: char) -> Option<&'static Glyph> {
    match c.to_ascii_uppercase() {
        ' ' => Some(&BLANK),
        'A' => Some(&LETTER_A),
        'E' => Some(&LETTER_E),
        'G' => Some(&LETTER_G),
        'M' => Some(&LETTER_M),
        'O' => Some(&LETTER_O),
        'R' => Some(&LETTER_R),
        'V' => Some(&LETTER_V),
        d => d
            .to_digit(10)
            .and_then(|n| DIGITS.get(n as usize)),
    }
}

/// Whether the pixel at (`col`, `row`) is lit
pub fn is_set(glyph: &Glyph, col: u32, row: u32) -> bool {
    col < GLYPH_WIDTH
        && glyph
            .get(row as usize)
            .is_some_and(|bits| (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1)
}
