//! Benchmark runner for the loop-order kernels.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::{debug, info};
use loopmat::timing::{Measurement, measure, measure_add};
use loopmat::{LoopOrder, SquareMatrix, check_agreement, multiply_into};

/// Largest scaled elementwise error tolerated between a kernel's product
/// and the definition of A * B.
const VERIFY_TOLERANCE: f64 = 1e-9;

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let n = cli.n;
    let orders = cli.selected_orders();
    let iterations = cli.iterations as usize;
    debug!("cli: {:?}", cli);

    // All three buffers up front, before any is initialized or anything printed.
    let mut a = SquareMatrix::zeros(n).with_context(|| format!("allocating A ({n}x{n})"))?;
    let mut b = SquareMatrix::zeros(n).with_context(|| format!("allocating B ({n}x{n})"))?;
    let mut c = SquareMatrix::zeros(n).with_context(|| format!("allocating C ({n}x{n})"))?;
    a.init_pattern();
    b.init_pattern();

    println!("=== Loop Order Benchmark ===\n");
    println!("Matrix: {}×{}, {} timed run(s) per order", n, n, iterations);
    println!("{}", "-".repeat(80));

    let mut results: Vec<Measurement> = Vec::with_capacity(orders.len());
    for &order in &orders {
        let m = measure(order, &a, &b, &mut c, iterations)
            .with_context(|| format!("running {order} kernel"))?;
        results.push(m);
    }
    print_results(&results);

    if cli.add {
        let ms = measure_add(&a, &b, &mut c, iterations).context("running matrix addition")?;
        println!("\nAddition (C = A + B): {:8.3} ms", ms);
    }

    if cli.verify {
        let worst = check_agreement(&a, &b, &orders, &mut c, VERIFY_TOLERANCE)?;
        println!(
            "\nverify: all {} order(s) agree (worst scaled error {:e})",
            orders.len(),
            worst
        );
        info!("verification passed");
    }

    if cli.print {
        let first = orders.first().copied().unwrap_or(LoopOrder::Ijk);
        multiply_into(first, &a, &b, &mut c)?;
        println!("\nC = A × B ({}):\n{}", first, c);
    }

    Ok(())
}

fn print_results(results: &[Measurement]) {
    let Some(baseline) = results.first() else {
        return;
    };
    for (i, m) in results.iter().enumerate() {
        println!(
            "{}. {:4} {:10.3} ms  {:7.3} GFLOPS  ({:.2}×)  [{}]",
            i + 1,
            m.order.name(),
            m.avg_ms,
            m.gflops,
            m.speedup_over(baseline),
            m.order.access_pattern()
        );
    }
    println!("{}", "-".repeat(80));
    println!("Speedup relative to {}. Higher is better.", baseline.order);
}
