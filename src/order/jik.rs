/// Matrix multiplication using j-i-k loop order: C += A * B
///
/// Same dot-product inner loop as i-j-k (row of A, column of B), but the
/// output is produced one column at a time. Performance is close to i-j-k.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into
/// * `n` - Dimension of all three matrices
pub fn matmul_jik(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    for j in 0..n {
        for i in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] += sum;
        }
    }
}
