/// Matrix multiplication using k-j-i loop order: C += A * B
///
/// Column-oriented like j-k-i: the innermost loop walks columns of A and C
/// with stride `n` while B(k, j) stays in a register.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into
/// * `n` - Dimension of all three matrices
pub fn matmul_kji(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    for k in 0..n {
        for j in 0..n {
            let r = b[k * n + j];
            for i in 0..n {
                c[i * n + j] += a[i * n + k] * r;
            }
        }
    }
}
