//! Cross-kernel agreement against the textbook definition.

use super::{LoopOrder, multiply_into};
use crate::error::{MatrixError, Result};
use crate::matrix::{SquareMatrix, ensure_same_dim};
use log::debug;

/// Worst scaled difference between `c` and the definition of A * B.
///
/// Each element's difference is divided by `max(1, |expected|)`, so large
/// products are compared relatively and values near zero absolutely.
/// Elements are recomputed on the fly; no reference matrix is allocated.
/// Matching NaNs and matching infinities count as equal, any other NaN
/// gives an infinite error.
pub fn product_error(a: &SquareMatrix, b: &SquareMatrix, c: &SquareMatrix) -> Result<f64> {
    ensure_same_dim("product_error", a.dim(), b.dim())?;
    ensure_same_dim("product_error", a.dim(), c.dim())?;
    let n = a.dim();
    let (a, b, c) = (a.as_slice(), b.as_slice(), c.as_slice());

    let mut worst = 0.0f64;
    for i in 0..n {
        for j in 0..n {
            let expected: f64 = (0..n).map(|k| a[i * n + k] * b[k * n + j]).sum();
            let got = c[i * n + j];
            if expected == got || (expected.is_nan() && got.is_nan()) {
                continue;
            }
            let err = (got - expected).abs() / expected.abs().max(1.0);
            if err.is_nan() {
                return Ok(f64::INFINITY);
            }
            worst = worst.max(err);
        }
    }
    Ok(worst)
}

/// Runs every order in `orders` into `c` and checks it against the
/// definition of A * B.
///
/// i-j-k is always checked as well, so every selected order agrees with
/// the i-j-k product to within twice `tolerance`. Returns the worst error
/// seen, or [`MatrixError::Disagreement`] for the first order beyond
/// `tolerance`. `c` holds the last product computed.
pub fn check_agreement(
    a: &SquareMatrix,
    b: &SquareMatrix,
    orders: &[LoopOrder],
    c: &mut SquareMatrix,
    tolerance: f64,
) -> Result<f64> {
    let mut worst = 0.0f64;
    let checked = std::iter::once(LoopOrder::Ijk).chain(
        orders
            .iter()
            .copied()
            .filter(|&o| o != LoopOrder::Ijk),
    );
    for order in checked {
        multiply_into(order, a, b, c)?;
        let err = product_error(a, b, c)?;
        debug!("{}: scaled error {:e}", order, err);
        if !(err <= tolerance) {
            return Err(MatrixError::Disagreement {
                order,
                error: err,
                tolerance,
            });
        }
        worst = worst.max(err);
    }
    Ok(worst)
}
