/// Matrix multiplication using j-k-i loop order: C += A * B
///
/// B(k, j) is hoisted; the innermost loop walks a column of A and a column
/// of C, both with stride `n`. Two strided streams per iteration make this
/// the slowest order on large row-major matrices.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into
/// * `n` - Dimension of all three matrices
pub fn matmul_jki(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    for j in 0..n {
        for k in 0..n {
            let r = b[k * n + j];
            for i in 0..n {
                c[i * n + j] += a[i * n + k] * r;
            }
        }
    }
}
