//! Rasterization of primitive shapes and text.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: fast non-antialiased line drawing
//! - **Midpoint Circle**: filled circle rendering via horizontal spans
//! - **Bitmap glyphs**: fixed 5x7 font for numeric tick labels

mod font;
mod primitives;

pub use font::{draw_text, text_height, text_width};
pub use primitives::{draw_circle, draw_line, draw_square};
