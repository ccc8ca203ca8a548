//! Bitmap Text Layout
//!
//! A 5x7 bitmap font drawn with filled rectangles. Instead of drawing
//! directly, the font lays text out as a list of pixel rects so any
//! [`Surface`](crate::surface::Surface) can fill them in one batch.

use sdl2::rect::{Point, Rect};

/// Glyph width in font pixels (without spacing)
const GLYPH_WIDTH: u32 = 5;

/// Glyph height in font pixels
const GLYPH_HEIGHT: u32 = 7;

/// Horizontal advance per character: 5 pixels + 1 spacing
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// A fixed-size handle onto the built-in bitmap font
///
/// `scale` is the edge length of one font pixel on screen, so a scale of 7
/// gives 35x49 pixel glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    /// Creates a font at the given scale (clamped to at least 1)
    pub fn new(scale: u32) -> Self {
        BitmapFont {
            scale: scale.max(1),
        }
    }

    #[allow(dead_code)] // Reserved for layouts that size boxes around text
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Size of the rendered text in screen pixels
    ///
    /// The trailing spacing column after the last glyph is not counted.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return (0, 0);
        }
        let width = (chars * GLYPH_ADVANCE - 1) * self.scale;
        (width, GLYPH_HEIGHT * self.scale)
    }

    /// Lays out `text` with its top-left corner at (`x`, `y`)
    pub fn layout(&self, text: &str, x: i32, y: i32) -> Vec<Rect> {
        let pixel_size = self.scale as i32;
        let char_width = (GLYPH_ADVANCE * self.scale) as i32;
        let mut rects = Vec::new();

        for (i, c) in text.chars().enumerate() {
            let char_x = x + i as i32 * char_width;

            for (row, pattern_row) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH as i32 {
                    if (pattern_row >> (GLYPH_WIDTH as i32 - 1 - col)) & 1 == 1 {
                        rects.push(Rect::new(
                            char_x + col * pixel_size,
                            y + row as i32 * pixel_size,
                            self.scale,
                            self.scale,
                        ));
                    }
                }
            }
        }

        rects
    }

    /// Lays out `text` so its bounding box is centered on `center`
    pub fn layout_centered(&self, text: &str, center: Point) -> Vec<Rect> {
        let (width, height) = self.measure(text);
        self.layout(
            text,
            center.x() - (width / 2) as i32,
            center.y() - (height / 2) as i32,
        )
    }
}

/// 5x7 bitmap patterns (1 = pixel on, 0 = pixel off), case-insensitive
fn glyph(c: char) -> [u8; GLYPH_HEIGHT as usize] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => [0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111], // Full block for unknown

    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_single_glyph() {
        let font = BitmapFont::new(1);
        assert_eq!(font.measure("A"), (5, 7));
    }

    #[test]
    fn test_measure_scales_and_skips_trailing_space() {
        let font = BitmapFont::new(5);
        // 4 glyphs * 6 columns - 1 trailing column = 23 font pixels
        assert_eq!(font.measure("PLAY"), (23 * 5, 35));
        assert_eq!(font.measure(""), (0, 0));
    }

    #[test]
    fn test_zero_scale_clamped() {
        assert_eq!(BitmapFont::new(0).scale(), 1);
    }

    #[test]
    fn test_space_has_no_pixels() {
        let font = BitmapFont::new(2);
        assert!(font.layout("   ", 0, 0).is_empty());
    }

    #[test]
    fn test_layout_is_case_insensitive() {
        let font = BitmapFont::new(3);
        assert_eq!(font.layout("movementum", 10, 20), font.layout("MOVEMENTUM", 10, 20));
    }

    #[test]
    fn test_unknown_char_is_full_block() {
        let font = BitmapFont::new(1);
        assert_eq!(font.layout("#", 0, 0).len(), 35);
    }

    #[test]
    fn test_layout_centered_bounds() {
        let font = BitmapFont::new(5);
        let center = Point::new(400, 500);
        let rects = font.layout_centered("PLAY", center);
        let (width, height) = font.measure("PLAY");

        let left = rects.iter().map(|r| r.left()).min().unwrap();
        let right = rects.iter().map(|r| r.right()).max().unwrap();
        let top = rects.iter().map(|r| r.top()).min().unwrap();
        let bottom = rects.iter().map(|r| r.bottom()).max().unwrap();

        assert_eq!(left, 400 - (width / 2) as i32);
        assert_eq!(top, 500 - (height / 2) as i32);
        assert!(right - left <= width as i32);
        assert_eq!(bottom - top, height as i32);
    }

    #[test]
    fn test_pixels_are_scale_sized() {
        let font = BitmapFont::new(4);
        for rect in font.layout("P", 0, 0) {
            assert_eq!((rect.width(), rect.height()), (4, 4));
            assert_eq!(rect.x() % 4, 0);
            assert_eq!(rect.y() % 4, 0);
        }
    }
}
