use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use loopmat::matrix::add::add_into;
use loopmat::{LoopOrder, SquareMatrix};
use std::hint::black_box;

fn bench_loop_orders(c: &mut Criterion) {
    for &n in &[64, 128, 256] {
        let a = SquareMatrix::pattern(n).unwrap();
        let b = SquareMatrix::pattern(n).unwrap();
        let mut out = vec![0.0f64; n * n];

        let mut group = c.benchmark_group(format!("matmul_{}", n));
        group.throughput(Throughput::Elements((2 * n * n * n) as u64));
        for order in LoopOrder::ALL {
            let kernel = order.kernel();
            group.bench_with_input(BenchmarkId::from_parameter(order), &order, |bench, _| {
                bench.iter(|| {
                    out.fill(0.0);
                    kernel(black_box(a.as_slice()), black_box(b.as_slice()), &mut out, n);
                });
            });
        }
        group.finish();
    }
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("madd");
    for &n in &[64, 256, 1024] {
        let a = SquareMatrix::pattern(n).unwrap();
        let b = SquareMatrix::pattern(n).unwrap();
        let mut out = vec![0.0f64; n * n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| add_into(black_box(a.as_slice()), black_box(b.as_slice()), &mut out, n));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_loop_orders, bench_add);
criterion_main!(benches);
