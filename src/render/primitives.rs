//! Primitive rendering functions.
//!
//! Implements rasterization algorithms for the shapes the plot needs:
//! line segments for grid and axes, filled circles for data points, and
//! filled squares for centroids. All primitives clip to the framebuffer.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Draw a line using Bresenham's algorithm.
///
/// Endpoints may lie outside the framebuffer; out-of-bounds pixels are
/// skipped.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a filled circle using the midpoint algorithm.
///
/// A zero radius degenerates to a single pixel.
pub fn draw_circle(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius <= 0 {
        if radius == 0 && cx >= 0 && cy >= 0 {
            fb.set_pixel(cx as u32, cy as u32, color);
        }
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        // Horizontal spans cover all eight octants
        horizontal_span(fb, cx - x, cx + x, cy + y, color);
        horizontal_span(fb, cx - x, cx + x, cy - y, color);
        horizontal_span(fb, cx - y, cx + y, cy + x, color);
        horizontal_span(fb, cx - y, cx + y, cy - x, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Draw a filled square centered on `(cx, cy)` with the given half-width.
pub fn draw_square(fb: &mut Framebuffer, cx: i32, cy: i32, half_width: i32, color: Rgba) {
    if half_width < 0 {
        return;
    }
    for y in (cy - half_width)..=(cy + half_width) {
        horizontal_span(fb, cx - half_width, cx + half_width, y, color);
    }
}

/// Fill the pixels of one clipped horizontal span.
#[inline]
fn horizontal_span(fb: &mut Framebuffer, x1: i32, x2: i32, y: i32, color: Rgba) {
    if y < 0 || y >= fb.height() as i32 {
        return;
    }

    let x_start = x1.max(0) as u32;
    let x_end = (x2 + 1).clamp(0, fb.width() as i32) as u32;

    if x_start < x_end {
        fb.fill_rect(x_start, y as u32, x_end - x_start, 1, color);
    }
}
