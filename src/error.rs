//! Error types for the labeling engine.

use thiserror::Error;

/// The crate-wide error type.
///
/// Structural problems are surfaced through these variants and always before
/// any feature row is mutated. Per-point resolution misses (out-of-bounds,
/// background, unknown patch label) are expected data variability, not
/// errors; they are counted in `PropagationSummary` instead.
#[derive(Error, Debug)]
pub enum LabelError {
    /// The header cannot map physical coordinates into voxel index space,
    /// or the volume has a degenerate shape.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A table violates its structural contract (e.g. duplicate patch label).
    #[error("schema error: {0}")]
    Schema(String),

    /// PNG encoding failed while writing a QC projection image.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LabelError>;
