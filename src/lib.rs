//! # Clusterplot
//!
//! A minimal viewer for 2-D point clouds with k-means cluster centroids.
//!
//! Reads a line-oriented text file holding data points and centroids (as
//! produced by an external k-means computation) and renders them on a
//! Cartesian-coordinate canvas: data points as filled circles, centroids as
//! filled squares, with grid lines, axes, and numeric tick labels,
//! auto-scaled to a symmetric viewport that fits the data's value range.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clusterplot::prelude::*;
//!
//! let dataset = Dataset::load("clusters.txt")?;
//! let frame = ClusterPlot::new()
//!     .dimensions(800, 600)
//!     .to_framebuffer(&dataset)?;
//! PngEncoder::write_to_file(&frame, "clusters.png")?;
//! ```
//!
//! Rendering is a pure function of the dataset and canvas geometry:
//! identical inputs always produce pixel-identical frames.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (data-space points).
pub mod geometry;

/// Scale functions and the data-to-screen viewport mapping.
pub mod scale;

// ============================================================================
// Data Modules
// ============================================================================

/// Dataset model and text-format loader.
pub mod dataset;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of primitive shapes and text.
pub mod render;

/// Plot types (the cluster scatter plot).
pub mod plots;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for clusterplot operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use clusterplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::dataset::Dataset;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Point;
    pub use crate::output::PngEncoder;
    pub use crate::plots::ClusterPlot;
    pub use crate::scale::{LinearScale, PlotMapping, Viewport};
}
