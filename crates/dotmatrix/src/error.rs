//! Errors when addressing or drawing on a matrix

use thiserror::Error;

/// An error when accessing a pixel or drawing a shape
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The pixel is outside of `[0, width) × [0, height)`
    #[error("Out of bounds: ({x}, {y})")]
    OutOfBounds {
        /// The requested column
        x: i32,
        /// The requested row
        y: i32,
    },
    /// A display was supplied that does not have the requested size
    #[error("Display is {}x{}, but the matrix needs to be {}x{}", found.0, found.1, expected.0, expected.1)]
    DimensionMismatch {
        /// The requested `(width, height)`
        expected: (u32, u32),
        /// The `(width, height)` of the display
        found: (u32, u32),
    },
    /// Less than two points were given to define a curve
    #[error("Need at least two points to define a curve, got {0}")]
    InsufficientControlPoints(usize),
}

/// Type alias for convenience
pub type MatrixResult<T> = Result<T, MatrixError>;
