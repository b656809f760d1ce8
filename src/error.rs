//! Error types for clusterplot operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in clusterplot operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or plot.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A line of the input file failed to parse.
    #[error("malformed line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number of the offending line.
        line: usize,
        /// What failed to parse.
        reason: String,
    },

    /// The file ended before the declared number of entries was read.
    #[error("truncated input: expected {expected} {what} lines, found {found}")]
    TruncatedInput {
        /// What kind of entry was being read.
        what: &'static str,
        /// Declared count.
        expected: usize,
        /// Lines actually present.
        found: usize,
    },

    /// Storage for the declared number of entries could not be allocated.
    #[error("cannot allocate storage for {count} {what}")]
    AllocationFailure {
        /// What kind of entry was being allocated.
        what: &'static str,
        /// Declared count.
        count: usize,
    },

    /// Scale domain error (e.g., zero-width domain).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),
}
