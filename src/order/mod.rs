//! The six loop orders for square matrix multiplication.
//!
//! Every kernel computes the same C += A × B over row-major slices; they
//! differ only in how the (i, j, k) loops nest, and therefore in which
//! operand the innermost loop walks with stride 1 and which with stride n.
//!
//! The raw kernels accumulate into C. [`multiply_into`] and [`multiply`]
//! zero C first, so all six orders produce C = A × B and can be swapped
//! freely.

pub mod check;
pub mod ijk;
pub mod ikj;
pub mod jik;
pub mod jki;
pub mod kij;
pub mod kji;

use crate::error::{MatrixError, Result};
use crate::matrix::{SquareMatrix, ensure_same_dim};
use log::debug;
use std::fmt;
use std::str::FromStr;

pub use check::{check_agreement, product_error};
pub use ijk::matmul_ijk;
pub use ikj::matmul_ikj;
pub use jik::matmul_jik;
pub use jki::matmul_jki;
pub use kij::matmul_kij;
pub use kji::matmul_kji;

/// Signature shared by all raw kernels: `(a, b, c, n)`, C += A * B.
pub type Kernel = fn(&[f64], &[f64], &mut [f64], usize);

/// Nesting order of the i (row of C), j (column of C) and k (reduction)
/// loops, outermost first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum LoopOrder {
    Ijk,
    Ikj,
    Jik,
    Jki,
    Kij,
    Kji,
}

impl LoopOrder {
    pub const ALL: [LoopOrder; 6] = [
        LoopOrder::Ijk,
        LoopOrder::Ikj,
        LoopOrder::Jik,
        LoopOrder::Jki,
        LoopOrder::Kij,
        LoopOrder::Kji,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LoopOrder::Ijk => "ijk",
            LoopOrder::Ikj => "ikj",
            LoopOrder::Jik => "jik",
            LoopOrder::Jki => "jki",
            LoopOrder::Kij => "kij",
            LoopOrder::Kji => "kji",
        }
    }

    pub fn kernel(self) -> Kernel {
        match self {
            LoopOrder::Ijk => matmul_ijk,
            LoopOrder::Ikj => matmul_ikj,
            LoopOrder::Jik => matmul_jik,
            LoopOrder::Jki => matmul_jki,
            LoopOrder::Kij => matmul_kij,
            LoopOrder::Kji => matmul_kji,
        }
    }

    /// How the innermost loop walks (A, B, C).
    pub fn access_pattern(self) -> AccessPattern {
        use Access::*;
        match self {
            LoopOrder::Ijk | LoopOrder::Jik => AccessPattern {
                a: RowWise,
                b: ColumnWise,
                c: Fixed,
            },
            LoopOrder::Ikj | LoopOrder::Kij => AccessPattern {
                a: Fixed,
                b: RowWise,
                c: RowWise,
            },
            LoopOrder::Jki | LoopOrder::Kji => AccessPattern {
                a: ColumnWise,
                b: Fixed,
                c: ColumnWise,
            },
        }
    }
}

impl fmt::Display for LoopOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoopOrder {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        LoopOrder::ALL
            .into_iter()
            .find(|o| o.name() == wanted)
            .ok_or_else(|| MatrixError::InvalidLoopOrder(s.to_string()))
    }
}

/// How a kernel's innermost loop touches one operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// Stride 1 along a row.
    RowWise,
    /// Stride n down a column.
    ColumnWise,
    /// Loop-invariant, held in a register.
    Fixed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AccessPattern {
    pub a: Access,
    pub b: Access,
    pub c: Access,
}

impl AccessPattern {
    /// Number of operands walked with stride n in the innermost loop.
    pub(crate) fn strided_streams(&self) -> usize {
        [self.a, self.b, self.c]
            .iter()
            .filter(|&&x| x == Access::ColumnWise)
            .count()
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Access::RowWise => "row-wise",
            Access::ColumnWise => "column-wise",
            Access::Fixed => "fixed",
        })
    }
}

impl fmt::Display for AccessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={}, B={}, C={}; {} strided",
            self.a,
            self.b,
            self.c,
            self.strided_streams()
        )
    }
}

/// C = A * B using the given loop order.
///
/// C is zero-filled before the kernel runs, so whatever it held before is
/// discarded.
pub fn multiply_into(
    order: LoopOrder,
    a: &SquareMatrix,
    b: &SquareMatrix,
    c: &mut SquareMatrix,
) -> Result<()> {
    ensure_same_dim("multiply", a.dim(), b.dim())?;
    ensure_same_dim("multiply", a.dim(), c.dim())?;
    let n = a.dim();

    debug!("multiply {}x{} with {} order", n, n, order);
    c.fill(0.0);
    (order.kernel())(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
    Ok(())
}

/// Returns A * B in a freshly allocated matrix.
pub fn multiply(order: LoopOrder, a: &SquareMatrix, b: &SquareMatrix) -> Result<SquareMatrix> {
    ensure_same_dim("multiply", a.dim(), b.dim())?;
    let mut c = SquareMatrix::zeros(a.dim())?;
    multiply_into(order, a, b, &mut c)?;
    Ok(c)
}

/// C(i, j) = Σ_k A(i, k) · B(k, j), written straight from the definition.
///
/// Used as the yardstick the loop-order kernels are checked against.
pub fn reference_product(a: &SquareMatrix, b: &SquareMatrix) -> Result<SquareMatrix> {
    ensure_same_dim("reference_product", a.dim(), b.dim())?;
    let n = a.dim();
    let (a, b) = (a.as_slice(), b.as_slice());
    SquareMatrix::from_fn(n, |i, j| {
        (0..n).map(|k| a[i * n + k] * b[k * n + j]).sum()
    })
}
