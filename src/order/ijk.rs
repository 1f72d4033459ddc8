/// Matrix multiplication using i-j-k loop order: C += A * B
///
/// This is the textbook triple loop. Each (i, j) keeps its own running
/// sum, so C is touched once per element. The innermost loop walks a row
/// of A sequentially but a column of B with stride `n`, which misses the
/// cache on every step for large matrices.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into
/// * `n` - Dimension of all three matrices
pub fn matmul_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] += sum;
        }
    }
}
