/// Matrix multiplication using i-k-j loop order: C += A * B
///
/// A(i, k) is hoisted out of the innermost loop, which then streams a row
/// of B and a row of C (both stride 1). This is the most cache-friendly of
/// the six orders for row-major storage.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into
/// * `n` - Dimension of all three matrices
pub fn matmul_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    for i in 0..n {
        for k in 0..n {
            let r = a[i * n + k];
            for j in 0..n {
                c[i * n + j] += r * b[k * n + j];
            }
        }
    }
}
