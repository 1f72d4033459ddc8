/// Matrix multiplication using k-i-j loop order: C += A * B
///
/// Like i-k-j, the innermost loop streams rows of B and C. The outer loop
/// over k means all of C is revisited `n` times, so it only stays fast
/// while C fits in cache.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into
/// * `n` - Dimension of all three matrices
pub fn matmul_kij(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    for k in 0..n {
        for i in 0..n {
            let r = a[i * n + k];
            for j in 0..n {
                c[i * n + j] += r * b[k * n + j];
            }
        }
    }
}
