use approx::assert_relative_eq;
use loopmat::matrix::add::add_into;
use loopmat::matrix::init::init_pattern;
use loopmat::order::{matmul_ijk, matmul_ikj, matmul_jik, matmul_jki, matmul_kij, matmul_kji};
use loopmat::{LoopOrder, MatrixError, SquareMatrix, multiply, multiply_into, reference_product};

fn assert_matrices_equal(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            (expected[i] - actual[i]).abs() < 1e-8,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

fn sample(n: usize, modulus: usize, offset: usize) -> SquareMatrix {
    SquareMatrix::from_fn(n, |i, j| ((i * n + j + offset) % modulus) as f64).unwrap()
}

// ============================================================
// Initializer and addition
// ============================================================

#[test]
fn test_init_pattern_all_sizes() {
    for n in [0, 1, 2, 5, 33] {
        let m = SquareMatrix::pattern(n).unwrap();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(m.get(i, j).unwrap(), (i + j) as f64);
            }
        }
    }
}

#[test]
fn test_init_pattern_on_raw_buffer() {
    let mut m = vec![7.0; 4];
    init_pattern(&mut m, 2);
    assert_eq!(m, vec![0.0, 1.0, 1.0, 2.0]);
}

#[test]
fn test_add_elementwise() {
    for n in [1, 3, 16, 31] {
        let a = sample(n, 7, 0);
        let b = sample(n, 11, 3);
        let c = a.add(&b).unwrap();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(
                    c.get(i, j).unwrap(),
                    a.get(i, j).unwrap() + b.get(i, j).unwrap()
                );
            }
        }
    }
}

#[test]
fn test_add_empty() {
    let mut c: Vec<f64> = Vec::new();
    add_into(&[], &[], &mut c, 0);
    assert!(c.is_empty());

    let z = SquareMatrix::zeros(0).unwrap();
    assert!(z.add(&z).unwrap().is_empty());
}

// ============================================================
// Concrete products
// ============================================================

#[test]
fn test_pattern_2x2_all_orders() {
    let a = SquareMatrix::pattern(2).unwrap();
    let b = SquareMatrix::pattern(2).unwrap();
    for order in LoopOrder::ALL {
        let c = multiply(order, &a, &b).unwrap();
        assert_eq!(c.as_slice(), &[1.0, 2.0, 2.0, 5.0], "{}", order);
    }
}

#[test]
fn test_pattern_3x3_all_orders() {
    let a = SquareMatrix::pattern(3).unwrap();
    let b = SquareMatrix::pattern(3).unwrap();
    let expected = [5.0, 8.0, 11.0, 8.0, 14.0, 20.0, 11.0, 20.0, 29.0];
    for order in LoopOrder::ALL {
        let c = multiply(order, &a, &b).unwrap();
        assert_eq!(c.as_slice(), &expected, "{}", order);
    }
}

#[test]
fn test_non_symmetric_operands() {
    // A * B != B * A here, so swapping an operand for the other is caught.
    let a = SquareMatrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = SquareMatrix::from_vec(2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    for order in LoopOrder::ALL {
        let c = multiply(order, &a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0], "{}", order);
    }
}

#[test]
fn test_1x1_is_scalar_product() {
    let a = SquareMatrix::from_vec(1, vec![3.5]).unwrap();
    let b = SquareMatrix::from_vec(1, vec![-2.0]).unwrap();
    for order in LoopOrder::ALL {
        assert_eq!(multiply(order, &a, &b).unwrap().as_slice(), &[-7.0]);
    }
}

#[test]
fn test_empty_matrices() {
    let a = SquareMatrix::zeros(0).unwrap();
    for order in LoopOrder::ALL {
        let c = multiply(order, &a, &a).unwrap();
        assert_eq!(c.dim(), 0);
        assert!(c.is_empty());
    }
}

// ============================================================
// Cross-kernel agreement
// ============================================================

#[test]
fn test_all_orders_match_definition() {
    let test_sizes = [2, 3, 4, 5, 7, 8, 13, 16, 31, 64];

    for n in test_sizes {
        let a = sample(n, 10, 0);
        let b = sample(n, 13, 5);
        let expected = reference_product(&a, &b).unwrap();

        for order in LoopOrder::ALL {
            let c = multiply(order, &a, &b).unwrap();
            assert_matrices_equal(
                expected.as_slice(),
                c.as_slice(),
                &format!("{}_size_{}", order, n),
            );
        }
    }
}

#[test]
fn test_all_orders_match_ijk_with_fractions() {
    let n = 37;
    let a = SquareMatrix::from_fn(n, |i, j| ((i * 7 + j * 3) as f64).sin()).unwrap();
    let b = SquareMatrix::from_fn(n, |i, j| ((i + 2 * j) as f64 * 0.01).cos()).unwrap();
    let baseline = multiply(LoopOrder::Ijk, &a, &b).unwrap();

    for order in LoopOrder::ALL {
        let c = multiply(order, &a, &b).unwrap();
        for (x, y) in baseline.as_slice().iter().zip(c.as_slice()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_raw_kernels_from_zero() {
    let kernels: [(&str, fn(&[f64], &[f64], &mut [f64], usize)); 6] = [
        ("ijk", matmul_ijk),
        ("ikj", matmul_ikj),
        ("jik", matmul_jik),
        ("jki", matmul_jki),
        ("kij", matmul_kij),
        ("kji", matmul_kji),
    ];

    let n = 9;
    let mut a = vec![0.0; n * n];
    init_pattern(&mut a, n);
    let b: Vec<f64> = (0..n * n).map(|i| (i % 4) as f64).collect();

    let mut expected = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                expected[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }

    for (name, kernel) in kernels {
        let mut c = vec![0.0; n * n];
        kernel(&a, &b, &mut c, n);
        assert_matrices_equal(&expected, &c, name);
    }
}

// ============================================================
// Accumulation and zero-fill
// ============================================================

#[test]
fn test_raw_kernels_accumulate() {
    let n = 16;
    let a = sample(n, 10, 0);
    let b = sample(n, 10, 1);
    let product = reference_product(&a, &b).unwrap();

    for order in LoopOrder::ALL {
        let mut c = vec![5.0; n * n];
        (order.kernel())(a.as_slice(), b.as_slice(), &mut c, n);
        let expected: Vec<f64> = product.as_slice().iter().map(|v| v + 5.0).collect();
        assert_matrices_equal(&expected, &c, &format!("accumulate_{}", order));
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let n = 12;
    let a = SquareMatrix::pattern(n).unwrap();
    let b = sample(n, 9, 2);

    for order in LoopOrder::ALL {
        let mut c = SquareMatrix::zeros(n).unwrap();
        multiply_into(order, &a, &b, &mut c).unwrap();
        let first = c.clone();
        multiply_into(order, &a, &b, &mut c).unwrap();
        assert_eq!(first, c, "{} must not accumulate across calls", order);

        let fresh = multiply(order, &a, &b).unwrap();
        assert_eq!(first, fresh);
    }
}

// ============================================================
// IEEE-754 propagation and errors
// ============================================================

#[test]
fn test_nan_and_inf_propagate() {
    let a = SquareMatrix::from_vec(2, vec![f64::NAN, 0.0, 1.0, f64::INFINITY]).unwrap();
    let b = SquareMatrix::from_vec(2, vec![1.0, 1.0, 1.0, 2.0]).unwrap();
    for order in LoopOrder::ALL {
        let c = multiply(order, &a, &b).unwrap();
        assert!(c.get(0, 0).unwrap().is_nan(), "{}", order);
        assert!(c.get(0, 1).unwrap().is_nan(), "{}", order);
        assert_eq!(c.get(1, 0).unwrap(), f64::INFINITY, "{}", order);
        assert_eq!(c.get(1, 1).unwrap(), f64::INFINITY, "{}", order);
    }

    // inf * 0 is NaN
    let inf = SquareMatrix::from_vec(1, vec![f64::INFINITY]).unwrap();
    let zero = SquareMatrix::zeros(1).unwrap();
    for order in LoopOrder::ALL {
        assert!(multiply(order, &inf, &zero).unwrap().as_slice()[0].is_nan());
    }
}

#[test]
fn test_dimension_mismatch_is_reported() {
    let a = SquareMatrix::pattern(4).unwrap();
    let b = SquareMatrix::pattern(5).unwrap();
    for order in LoopOrder::ALL {
        assert!(matches!(
            multiply(order, &a, &b),
            Err(MatrixError::DimensionMismatch { expected: 4, got: 5, .. })
        ));
    }
    assert!(a.add(&b).is_err());
}

#[test]
fn test_oversized_allocation_fails_cleanly() {
    assert!(matches!(
        SquareMatrix::zeros(usize::MAX),
        Err(MatrixError::OutOfMemory { .. })
    ));
    assert!(SquareMatrix::pattern(usize::MAX).is_err());
}
