//! Built-in 5x7 bitmap glyphs for tick labels.
//!
//! The plot only ever labels numeric tick values, so the glyph set covers
//! digits, the minus sign, and the decimal point. Glyphs are stored as
//! seven row masks with bit 4 as the leftmost column, and scale by integer
//! pixel replication so text stays crisp at any size.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Glyph cell width in pixels at scale 1.
const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in pixels at scale 1.
const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance between glyphs at scale 1 (cell plus one gap column).
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Row masks for one glyph, top row first.
type Glyph = [u8; 7];

const DIGIT_0: Glyph = [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110];
const DIGIT_1: Glyph = [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110];
const DIGIT_2: Glyph = [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111];
const DIGIT_3: Glyph = [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110];
const DIGIT_4: Glyph = [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010];
const DIGIT_5: Glyph = [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110];
const DIGIT_6: Glyph = [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110];
const DIGIT_7: Glyph = [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000];
const DIGIT_8: Glyph = [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110];
const DIGIT_9: Glyph = [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100];
const MINUS: Glyph = [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000];
const DOT: Glyph = [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100];

fn glyph(c: char) -> Option<&'static Glyph> {
    match c {
        '0' => Some(&DIGIT_0),
        '1' => Some(&DIGIT_1),
        '2' => Some(&DIGIT_2),
        '3' => Some(&DIGIT_3),
        '4' => Some(&DIGIT_4),
        '5' => Some(&DIGIT_5),
        '6' => Some(&DIGIT_6),
        '7' => Some(&DIGIT_7),
        '8' => Some(&DIGIT_8),
        '9' => Some(&DIGIT_9),
        '-' => Some(&MINUS),
        '.' => Some(&DOT),
        _ => None,
    }
}

/// Pixel width of `text` at the given integer scale.
///
/// Unknown characters still occupy a cell so label alignment is stable.
#[must_use]
pub fn text_width(text: &str, size: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    (count * GLYPH_ADVANCE - 1) * size.max(1)
}

/// Pixel height of any text at the given integer scale.
#[must_use]
pub fn text_height(size: u32) -> u32 {
    GLYPH_HEIGHT * size.max(1)
}

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// `size` is an integer magnification of the 5x7 cell. Characters without
/// a glyph (the label set is digits, minus, dot) advance without drawing.
/// Pixels outside the framebuffer are clipped.
pub fn draw_text(fb: &mut Framebuffer, x: i32, y: i32, text: &str, size: u32, color: Rgba) {
    let size = size.max(1) as i32;
    let mut pen_x = x;

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, &mask) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if mask & (1u8 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    let px = pen_x + col as i32 * size;
                    let py = y + row as i32 * size;
                    for dy in 0..size {
                        for dx in 0..size {
                            let fx = px + dx;
                            let fy = py + dy;
                            if fx >= 0 && fy >= 0 {
                                fb.set_pixel(fx as u32, fy as u32, color);
                            }
                        }
                    }
                }
            }
        }
        pen_x += GLYPH_ADVANCE as i32 * size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_canvas(w: u32, h: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(w, h).unwrap();
        fb.clear(Rgba::WHITE);
        fb
    }

    fn inked_pixels(fb: &Framebuffer) -> usize {
        (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get_pixel(x, y) == Some(Rgba::BLACK))
            .count()
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("0", 1), 5);
        assert_eq!(text_width("-1.5", 1), 23);
        assert_eq!(text_width("0", 2), 10);
    }

    #[test]
    fn test_text_height() {
        assert_eq!(text_height(1), 7);
        assert_eq!(text_height(3), 21);
    }

    #[test]
    fn test_draw_text_marks_pixels() {
        let mut fb = white_canvas(40, 12);
        draw_text(&mut fb, 1, 1, "8", 1, Rgba::BLACK);

        assert!(inked_pixels(&fb) > 0);
        // '8' has its middle bar at glyph row 3
        assert_eq!(fb.get_pixel(3, 4), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_text_minus_is_single_bar() {
        let mut fb = white_canvas(10, 10);
        draw_text(&mut fb, 0, 0, "-", 1, Rgba::BLACK);
        // Bar occupies glyph row 3 only
        assert_eq!(fb.get_pixel(0, 3), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(4, 3), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(2, 0), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(2, 6), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_text_scaling_multiplies_coverage() {
        let mut small = white_canvas(20, 20);
        let mut large = white_canvas(40, 40);
        draw_text(&mut small, 0, 0, "7", 1, Rgba::BLACK);
        draw_text(&mut large, 0, 0, "7", 2, Rgba::BLACK);

        assert_eq!(inked_pixels(&large), 4 * inked_pixels(&small));
    }

    #[test]
    fn test_draw_text_unknown_char_advances() {
        let mut fb = white_canvas(40, 12);
        // 'x' has no glyph; the '1' after it must land one advance over
        draw_text(&mut fb, 0, 0, "x1", 1, Rgba::BLACK);
        assert_eq!(fb.get_pixel(8, 0), Some(Rgba::BLACK));
        // Nothing in the first cell
        for x in 0..5 {
            for y in 0..7 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::WHITE));
            }
        }
    }

    #[test]
    fn test_draw_text_clips_at_edges() {
        let mut fb = white_canvas(10, 10);
        draw_text(&mut fb, -3, -3, "0", 1, Rgba::BLACK);
        draw_text(&mut fb, 8, 8, "0", 1, Rgba::BLACK);
        // No panic; some pixels may land in-bounds
    }
}
