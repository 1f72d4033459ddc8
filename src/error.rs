use crate::order::LoopOrder;
use thiserror::Error;

/// Everything that can go wrong building or combining matrices.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A dimension string that is negative or not an integer.
    #[error("invalid dimension {input:?}: {reason}")]
    InvalidDimension { input: String, reason: String },
    /// `n * n` elements overflow or the allocator refused them.
    #[error("cannot allocate a matrix of {elements} elements")]
    OutOfMemory { elements: usize },
    /// Operands of one operation have different dimensions.
    #[error("{op}: dimension mismatch, expected {expected}x{expected}, got {got}x{got}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        got: usize,
    },
    /// An adopted buffer is not `dim * dim` long.
    #[error("buffer of {len} elements does not hold a {dim}x{dim} matrix")]
    BufferLength { dim: usize, len: usize },
    /// A loop-order name other than the six permutations of `ijk`.
    #[error("unknown loop order {0:?}, expected one of ijk, ikj, jik, jki, kij, kji")]
    InvalidLoopOrder(String),
    /// A (row, col) outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {dim}x{dim} matrix")]
    IndexOutOfBounds { row: usize, col: usize, dim: usize },
    /// A kernel's product differs from the definition of A * B by more
    /// than the allowed scaled error.
    #[error("{order} disagrees with the definition: scaled error {error:e} exceeds {tolerance:e}")]
    Disagreement {
        order: LoopOrder,
        error: f64,
        tolerance: f64,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Parses a matrix dimension from its command-line form.
///
/// Accepts any non-negative integer, including `0` (the empty matrix).
pub fn parse_dimension(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return Err(MatrixError::InvalidDimension {
            input: input.to_string(),
            reason: "dimension must not be negative".to_string(),
        });
    }
    trimmed
        .parse::<usize>()
        .map_err(|e| MatrixError::InvalidDimension {
            input: input.to_string(),
            reason: e.to_string(),
        })
}
