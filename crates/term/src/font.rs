//! Block font for score text.
//!
//! Glyphs are 3x5 dot bitmaps. Only digits have shapes; any other character
//! renders as a blank glyph of the same size.

use arrayvec::ArrayVec;

use crate::core::TextImage;
use crate::types::Rgb;

pub const GLYPH_COLS: i32 = 3;
pub const GLYPH_ROWS: i32 = 5;

/// Longest string a [`GlyphText`] holds; extra characters are dropped.
pub const MAX_GLYPHS: usize = 16;

/// Rows of each digit, most significant bit on the left.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Whether dot (`col`, `row`) of glyph `ch` is lit.
pub fn glyph_dot(ch: char, col: i32, row: i32) -> bool {
    if !(0..GLYPH_COLS).contains(&col) || !(0..GLYPH_ROWS).contains(&row) {
        return false;
    }
    match ch.to_digit(10) {
        Some(d) => DIGITS[d as usize][row as usize] & (1 << (GLYPH_COLS - 1 - col)) != 0,
        None => false,
    }
}

/// Rendered text: glyphs plus dot size in surface pixels.
///
/// Glyphs are separated by one blank dot column, and the whole box is
/// painted (lit dots in `fg`, everything else in `bg`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphText {
    pub glyphs: ArrayVec<char, MAX_GLYPHS>,
    pub dot_w: i32,
    pub dot_h: i32,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl GlyphText {
    pub fn new(text: &str, dot_w: i32, dot_h: i32, fg: Rgb, bg: Rgb) -> Self {
        Self {
            glyphs: text.chars().take(MAX_GLYPHS).collect(),
            dot_w: dot_w.max(1),
            dot_h: dot_h.max(1),
            fg,
            bg,
        }
    }

    /// Width in dots, including gaps between glyphs.
    pub fn dot_cols(&self) -> i32 {
        match self.glyphs.len() as i32 {
            0 => 0,
            n => n * (GLYPH_COLS + 1) - 1,
        }
    }

    /// Whether dot column `col` (over the whole text) on `row` is lit.
    pub fn lit(&self, col: i32, row: i32) -> bool {
        let glyph = col / (GLYPH_COLS + 1);
        let within = col % (GLYPH_COLS + 1);
        self.glyphs
            .get(glyph as usize)
            .map(|ch| glyph_dot(*ch, within, row))
            .unwrap_or(false)
    }
}

impl TextImage for GlyphText {
    fn width(&self) -> i32 {
        self.dot_cols() * self.dot_w
    }

    fn height(&self) -> i32 {
        GLYPH_ROWS * self.dot_h
    }
}
