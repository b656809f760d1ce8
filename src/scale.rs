//! Scale functions and the data-to-screen viewport mapping.
//!
//! [`LinearScale`] maps a continuous domain to a continuous range.
//! [`Viewport`] derives the symmetric data-space domain from a dataset, and
//! [`PlotMapping`] combines both per-axis scales into the single affine map
//! shared by every drawn element (grid lines, axes, labels, markers), so
//! all of them stay geometrically consistent.

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `domain` min and max are equal.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain(
                "Domain min and max cannot be equal".to_string(),
            ));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Transform a domain value to a range value.
    #[must_use]
    pub fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Get the domain extent.
    #[must_use]
    pub fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    /// Get the range extent.
    #[must_use]
    pub fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Symmetric data-space viewport derived from a dataset.
///
/// The domain is `[-max_x, max_x] x [-max_y, max_y]`: the ceiling of the
/// largest absolute coordinate magnitude per axis across data points and
/// centroids combined, so both share one scale and relative distances stay
/// visually comparable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Half-extent of the X domain. Always >= [`Viewport::MIN_EXTENT`].
    pub max_x: f32,
    /// Half-extent of the Y domain. Always >= [`Viewport::MIN_EXTENT`].
    pub max_y: f32,
}

impl Viewport {
    /// Smallest allowed half-extent. An empty or all-zero dataset falls
    /// back to this so the mapping never divides by zero.
    pub const MIN_EXTENT: f32 = 1.0;

    /// Number of grid intervals per half-axis.
    const GRID_DIVISIONS: f32 = 4.0;

    /// Derive the viewport from a dataset.
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut max_x = 0.0_f32;
        let mut max_y = 0.0_f32;

        for p in dataset.data_points.iter().chain(dataset.centroids.iter()) {
            max_x = max_x.max(p.x.abs());
            max_y = max_y.max(p.y.abs());
        }

        Self {
            max_x: max_x.ceil().max(Self::MIN_EXTENT),
            max_y: max_y.ceil().max(Self::MIN_EXTENT),
        }
    }

    /// Grid line spacing along X, in data units.
    #[must_use]
    pub fn grid_step_x(&self) -> f32 {
        self.max_x / Self::GRID_DIVISIONS
    }

    /// Grid line spacing along Y, in data units.
    #[must_use]
    pub fn grid_step_y(&self) -> f32 {
        self.max_y / Self::GRID_DIVISIONS
    }

    /// Whether a point lies within the viewport domain.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x.abs() <= self.max_x && y.abs() <= self.max_y
    }
}

/// The affine forward map from data space to screen space.
///
/// `screen_x(x) = margin + (x + max_x) * scale_x` and
/// `screen_y(y) = height - margin - (y + max_y) * scale_y`, with
/// `scale_x = (width - 2*margin) / (2*max_x)` and `scale_y` analogous. Y is
/// flipped because data-space "up" is positive while screen space grows
/// downward. Scales are independent per axis: the aspect ratio of plotted
/// shapes is not preserved unless `max_x/max_y` matches the canvas.
#[derive(Debug, Clone, Copy)]
pub struct PlotMapping {
    viewport: Viewport,
    x: LinearScale,
    y: LinearScale,
}

impl PlotMapping {
    /// Build the mapping for a canvas of `width` x `height` pixels with a
    /// fixed pixel `margin` on all sides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the usable drawing area
    /// `(width - 2*margin) x (height - 2*margin)` is not positive.
    pub fn new(viewport: Viewport, width: u32, height: u32, margin: u32) -> Result<Self> {
        if width <= 2 * margin || height <= 2 * margin {
            return Err(Error::InvalidDimensions { width, height });
        }

        let m = margin as f32;
        let x = LinearScale::new(
            (-viewport.max_x, viewport.max_x),
            (m, width as f32 - m),
        )?;
        let y = LinearScale::new(
            (-viewport.max_y, viewport.max_y),
            (height as f32 - m, m),
        )?;

        Ok(Self { viewport, x, y })
    }

    /// The viewport this mapping was built from.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Map a data-space X coordinate to a screen-space pixel X.
    #[must_use]
    pub fn screen_x(&self, x: f32) -> f32 {
        self.x.scale(x)
    }

    /// Map a data-space Y coordinate to a screen-space pixel Y.
    #[must_use]
    pub fn screen_y(&self, y: f32) -> f32 {
        self.y.scale(y)
    }

    /// Recover the data-space X coordinate of a screen-space pixel X.
    #[must_use]
    pub fn data_x(&self, sx: f32) -> f32 {
        self.x.invert(sx)
    }

    /// Recover the data-space Y coordinate of a screen-space pixel Y.
    #[must_use]
    pub fn data_y(&self, sy: f32) -> f32 {
        self.y.invert(sy)
    }
}
