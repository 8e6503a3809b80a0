//! Error types for color operations.

use thiserror::Error;

/// Error type for color operations.
///
/// Numeric inputs (positions, alphas, components) are clamped rather than
/// rejected everywhere in this crate; the only failure mode is structural.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OpsError {
    /// A gradient needs at least two stops to define a segment.
    #[error("degenerate gradient: {0} stops (need at least 2)")]
    DegenerateGradient(usize),
}

/// Result type for color operations.
pub type OpsResult<T> = Result<T, OpsError>;
