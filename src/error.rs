//! Error types for lattice operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when building or evaluating geometry.
///
/// Degenerate rasterizer inputs (a line whose endpoints coincide, a circle of radius zero) are not
/// errors: they produce degenerate output instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A curve was evaluated with fewer than the two control points needed to define it.
    #[error("Insufficient control points: a curve needs at least 2, found {found}")]
    InsufficientControlPoints {
        /// Number of control points that were supplied.
        found: usize,
    },

    /// The inputs cannot describe any geometry at all (e.g. a grid with a single line).
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}
