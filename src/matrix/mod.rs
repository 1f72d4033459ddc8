//! Square, row-major, double-precision matrices.
//!
//! Element (r, c) of an N×N matrix lives at offset `r * N + c`. The
//! dimension is stored next to the buffer so operations can check that
//! their operands agree instead of trusting a separately passed `N`.

pub mod add;
pub mod init;

use crate::error::{MatrixError, Result};
use log::trace;

/// An owned N×N matrix of `f64` in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    data: Vec<f64>,
    dim: usize,
}

impl SquareMatrix {
    /// Allocates a zero-filled N×N matrix.
    ///
    /// Fails with [`MatrixError::OutOfMemory`] when `n * n` overflows or the
    /// allocator refuses the request. Nothing is written in that case.
    pub fn zeros(n: usize) -> Result<Self> {
        let elements = n
            .checked_mul(n)
            .ok_or(MatrixError::OutOfMemory { elements: usize::MAX })?;
        elements
            .checked_mul(std::mem::size_of::<f64>())
            .ok_or(MatrixError::OutOfMemory { elements })?;

        let mut data = Vec::new();
        data.try_reserve_exact(elements)
            .map_err(|_| MatrixError::OutOfMemory { elements })?;
        data.resize(elements, 0.0);

        trace!("allocated {}x{} matrix ({} elements)", n, n, elements);
        Ok(Self { data, dim: n })
    }

    /// Allocates an N×N matrix with element (i, j) set to `i + j`.
    pub fn pattern(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n)?;
        m.init_pattern();
        Ok(m)
    }

    /// Wraps an existing row-major buffer.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        match n.checked_mul(n) {
            Some(len) if len == data.len() => Ok(Self { data, dim: n }),
            _ => Err(MatrixError::BufferLength {
                dim: n,
                len: data.len(),
            }),
        }
    }

    /// Builds a matrix from a closure evaluated at every (row, col).
    pub fn from_fn<F>(n: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut m = Self::zeros(n)?;
        for i in 0..n {
            for j in 0..n {
                m.data[i * n + j] = f(i, j);
            }
        }
        Ok(m)
    }

    /// Overwrites every element with `i + j`.
    pub fn init_pattern(&mut self) {
        init::init_pattern(&mut self.data, self.dim);
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.dim || col >= self.dim {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                dim: self.dim,
            });
        }
        Ok(row * self.dim + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Borrows one row as a contiguous slice.
    pub fn row(&self, row: usize) -> Result<&[f64]> {
        if row >= self.dim {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col: 0,
                dim: self.dim,
            });
        }
        let start = row * self.dim;
        Ok(&self.data[start..start + self.dim])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Sum of two matrices as a new matrix.
    pub fn add(&self, other: &SquareMatrix) -> Result<SquareMatrix> {
        ensure_same_dim("add", self.dim, other.dim)?;
        let mut out = SquareMatrix::zeros(self.dim)?;
        add::add(self, other, &mut out)?;
        Ok(out)
    }

    /// Largest absolute elementwise difference between two matrices.
    ///
    /// NaN in either operand propagates into the result.
    pub fn max_abs_diff(&self, other: &SquareMatrix) -> Result<f64> {
        ensure_same_dim("max_abs_diff", self.dim, other.dim)?;
        let mut worst = 0.0f64;
        for (x, y) in self.data.iter().zip(&other.data) {
            let d = (x - y).abs();
            if d.is_nan() {
                return Ok(f64::NAN);
            }
            worst = worst.max(d);
        }
        Ok(worst)
    }
}

pub(crate) fn ensure_same_dim(op: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(MatrixError::DimensionMismatch { op, expected, got });
    }
    Ok(())
}

impl std::fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.dim {
            let row = &self.data[i * self.dim..(i + 1) * self.dim];
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>10.3}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
