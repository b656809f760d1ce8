//! Plot types.
//!
//! The one plot this crate draws: a cluster scatter plot of data points
//! and k-means centroids on an auto-scaled Cartesian grid.

mod cluster;

pub use cluster::ClusterPlot;
