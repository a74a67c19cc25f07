//! Error types for profloc.

use thiserror::Error;

/// Result alias for profloc operations.
pub type Result<T> = std::result::Result<T, ProfLocError>;

/// Errors that can occur when building or querying a reference locator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfLocError {
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// A flat buffer length disagrees with its declared shape.
    #[error("buffer length {got} does not match shape requiring {needed}")]
    BufferSizeMismatch {
        /// Number of elements the shape requires.
        needed: usize,
        /// Number of elements supplied.
        got: usize,
    },
    /// Profile/mask shapes disagree, or the zone count disagrees with the
    /// sampler's declared count. The locator is never created in this state.
    #[error(
        "construction mismatch: profiles {profiles:?}, masks {masks:?}, sampler zones {zones}"
    )]
    ConstructionMismatch {
        /// Shape of the profile array.
        profiles: [usize; 4],
        /// Shape of the mask array.
        masks: [usize; 4],
        /// Zone count declared by the sampler.
        zones: usize,
    },
    /// A zone index outside `[0, zones)` was supplied. Never clamped.
    #[error("zone index {index} out of range for {zones} zones")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of zones available.
        zones: usize,
    },
    /// A coordinate cannot be resolved to any zone under the active sampler.
    #[error("coordinate {coord:?} outside the sampler domain")]
    OutOfDomain {
        /// The offending detector coordinate.
        coord: [f64; 3],
    },
    /// An observed profile/mask does not match the stored reference shape.
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Shape of the stored reference zone.
        expected: [usize; 3],
        /// Shape of the supplied array.
        got: [usize; 3],
    },
    /// Correlation is undefined: fewer than 2 jointly valid voxels, or a
    /// zero-variance side.
    #[error("correlation undefined over {valid} jointly valid voxels")]
    InsufficientOverlap {
        /// Number of voxels valid in both masks.
        valid: usize,
    },
}
