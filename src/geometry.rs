//! Geometric primitives.
//!
//! Provides the data-space point type shared by the dataset and the
//! renderer.

/// A 2D point with floating-point coordinates.
///
/// Represents either a data sample or a cluster centroid; there is no
/// identity beyond position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(1.5, -2.5);
        assert!((p.x - 1.5).abs() < f32::EPSILON);
        assert!((p.y + 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_point_origin() {
        assert_eq!(Point::ORIGIN, Point::new(0.0, 0.0));
    }
}
