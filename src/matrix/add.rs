//! Elementwise matrix addition.

use super::{SquareMatrix, ensure_same_dim};
use crate::error::Result;

/// Elementwise sum: C = A + B
///
/// Every output element is written, so C need not be zeroed first.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten
/// * `n` - Dimension of all three matrices
pub fn add_into(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    for i in 0..n {
        for j in 0..n {
            c[i * n + j] = a[i * n + j] + b[i * n + j];
        }
    }
}

/// Checked form of [`add_into`] over [`SquareMatrix`] operands.
pub fn add(a: &SquareMatrix, b: &SquareMatrix, c: &mut SquareMatrix) -> Result<()> {
    ensure_same_dim("add", a.dim(), b.dim())?;
    ensure_same_dim("add", a.dim(), c.dim())?;
    let n = a.dim();
    add_into(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
    Ok(())
}
