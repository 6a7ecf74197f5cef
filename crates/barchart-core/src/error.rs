// File: crates/barchart-core/src/error.rs
// Summary: Error types for chart mutations and drawing-surface failures.

use thiserror::Error;

/// Result alias used across the core crate.
pub type ChartResult<T> = Result<T, ChartError>;

/// Failure reported by a [`DrawSurface`](crate::surface::DrawSurface) backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// The backing surface cannot be allocated or used at all.
    #[error("surface unavailable: {0}")]
    Unavailable(String),
    /// A single draw primitive failed.
    #[error("{op} failed: {reason}")]
    Primitive { op: &'static str, reason: String },
}

impl SurfaceError {
    pub fn primitive(op: &'static str, reason: impl Into<String>) -> Self {
        Self::Primitive { op, reason: reason.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// The handle passed at construction cannot serve as a drawing surface.
    #[error("invalid drawing surface: {0}")]
    InvalidSurface(String),
    /// Data handed to `set_data` is not an array or holds incomparable values.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Headline is not a string.
    #[error("invalid headline: {0}")]
    InvalidHeadline(String),
    /// Geometry requested for a chart without entries.
    #[error("geometry requested for an empty dataset")]
    EmptyDataset,
    /// A width or height that is not a positive integer that fits in a u32.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    #[error("invalid color: {0}")]
    InvalidColor(String),
    /// A draw primitive failed mid-render; the next mutation renders again from scratch.
    #[error("render failed: {0}")]
    Surface(#[from] SurfaceError),
}
