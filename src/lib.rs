//! Dense matrix multiplication in six loop orders.
//!
//! The product C = A × B needs three nested loops over i (rows of C),
//! j (columns of C) and k (the reduction). All six ways of nesting them
//! do the same arithmetic, but for row-major storage they touch memory
//! very differently: i-k-j streams rows of B and C, while j-k-i and k-j-i
//! walk two columns with stride N on every inner iteration. This crate
//! implements all six so the effect of spatial locality can be measured.
//!
//! ## Usage
//!
//! ```
//! use loopmat::{LoopOrder, SquareMatrix, multiply};
//!
//! let a = SquareMatrix::pattern(3).unwrap(); // a[i][j] = i + j
//! let c = multiply(LoopOrder::Kji, &a, &a).unwrap();
//!
//! assert_eq!(c.as_slice(), &[5.0, 8.0, 11.0,
//!                            8.0, 14.0, 20.0,
//!                            11.0, 20.0, 29.0]);
//! ```
//!
//! The raw kernels in [`order`] work on plain slices and accumulate
//! (C += A × B); [`multiply`] and [`multiply_into`] zero C first.
//!
//! ## What's inside
//!
//! - [`SquareMatrix`]: owned N×N row-major buffer that knows its dimension
//! - `matmul_{ijk,ikj,jik,jki,kij,kji}` kernels and [`LoopOrder`] dispatch
//! - elementwise addition and the `i + j` initializer
//! - a small timing harness used by the `loopmat` binary

pub mod error;
pub mod matrix;
pub mod order;
pub mod timing;

pub use error::{MatrixError, Result, parse_dimension};
pub use matrix::SquareMatrix;
pub use order::{LoopOrder, check_agreement, multiply, multiply_into, reference_product};
