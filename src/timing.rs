//! Wall-clock timing of the loop-order kernels.

use crate::error::Result;
use crate::matrix::SquareMatrix;
use crate::matrix::add;
use crate::order::{LoopOrder, multiply_into};
use log::{debug, trace};
use std::time::{Duration, Instant};

/// Average timing of one kernel over several runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub order: LoopOrder,
    pub dim: usize,
    pub iterations: usize,
    pub avg_ms: f64,
    pub gflops: f64,
}

impl Measurement {
    /// Speedup of `self` relative to `baseline` (baseline time / own time).
    pub fn speedup_over(&self, baseline: &Measurement) -> f64 {
        if self.avg_ms > 0.0 {
            baseline.avg_ms / self.avg_ms
        } else {
            f64::INFINITY
        }
    }
}

/// Floating point operations in one N×N×N multiply (one mul + one add each).
pub fn flop_count(n: usize) -> f64 {
    2.0 * (n as f64).powi(3)
}

/// GFLOPS achieved by a run of `flops` operations taking `secs` seconds.
pub fn gflops(flops: f64, secs: f64) -> f64 {
    if secs > 0.0 && flops > 0.0 {
        flops / secs / 1e9
    } else {
        0.0
    }
}

/// Time `order` on C = A * B.
///
/// One untimed warmup run, then `iterations` timed runs, all writing into
/// the caller's `c`. Each run zero-fills C inside [`multiply_into`], so
/// every run does the full multiplication and C ends up holding A * B.
/// `iterations` of zero is treated as one.
pub fn measure(
    order: LoopOrder,
    a: &SquareMatrix,
    b: &SquareMatrix,
    c: &mut SquareMatrix,
    iterations: usize,
) -> Result<Measurement> {
    let iterations = iterations.max(1);

    // Warmup
    multiply_into(order, a, b, c)?;

    let mut total = Duration::ZERO;
    for run in 0..iterations {
        let start = Instant::now();
        multiply_into(order, a, b, c)?;
        let elapsed = start.elapsed();
        trace!("{} run {}: {:?}", order, run, elapsed);
        total += elapsed;
    }

    let avg = total.as_secs_f64() / iterations as f64;
    let m = Measurement {
        order,
        dim: a.dim(),
        iterations,
        avg_ms: avg * 1000.0,
        gflops: gflops(flop_count(a.dim()), avg),
    };
    debug!("{}: {:.3} ms, {:.2} GFLOPS", order, m.avg_ms, m.gflops);
    Ok(m)
}

/// Average time in milliseconds of C = A + B over `iterations` runs.
pub fn measure_add(
    a: &SquareMatrix,
    b: &SquareMatrix,
    c: &mut SquareMatrix,
    iterations: usize,
) -> Result<f64> {
    let iterations = iterations.max(1);
    add::add(a, b, c)?;

    let start = Instant::now();
    for _ in 0..iterations {
        add::add(a, b, c)?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}
