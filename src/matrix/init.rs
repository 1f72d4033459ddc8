/// Fill an N×N row-major matrix with the value `i + j` at (i, j).
///
/// Deterministic, so every run (and every kernel) sees the same operands.
///
/// # Arguments
///
/// * `mat` - Matrix (n × n), row-major; at least `n * n` elements
/// * `n` - Dimension of the matrix
///
/// # Example
///
/// ```
/// use loopmat::matrix::init::init_pattern;
///
/// let mut m = vec![0.0; 9];
/// init_pattern(&mut m, 3);
///
/// assert_eq!(m, vec![0.0, 1.0, 2.0,
///                    1.0, 2.0, 3.0,
///                    2.0, 3.0, 4.0]);
/// ```
pub fn init_pattern(mat: &mut [f64], n: usize) {
    for i in 0..n {
        for j in 0..n {
            mat[i * n + j] = (i + j) as f64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_values() {
        let n = 17;
        let mut m = vec![-1.0; n * n];
        init_pattern(&mut m, n);
        for i in 0..n {
            for j in 0..n {
                assert_eq!(m[i * n + j], (i + j) as f64, "at ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_pattern_empty() {
        let mut m: Vec<f64> = Vec::new();
        init_pattern(&mut m, 0);
        assert!(m.is_empty());
    }
}
