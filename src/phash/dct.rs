//! Two-dimensional type-II DCT used by the perceptual-hash fingerprinter.
//!
//! Separable: a 1-D DCT-II along each axis in turn is equivalent to the
//! full 2-D transform, O(n^3) instead of O(n^4).

use std::f64::consts::PI;

/// `1/sqrt(2)` for `k == 0`, `1` otherwise.
fn c(k: usize) -> f64 {
    if k == 0 {
        std::f64::consts::FRAC_1_SQRT_2
    } else {
        1.0
    }
}

/// 1-D DCT-II, including the `C(k)` factor but not the final `1/4` scale
/// (applied once, after both passes, by [`dct2d`]).
fn dct_1d(input: &[f64]) -> Vec<f64> {
    let n = input.len();
    let mut output = vec![0.0f64; n];
    for (k, out) in output.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (x, &value) in input.iter().enumerate() {
            sum += value * (PI * (2.0 * x as f64 + 1.0) * k as f64 / (2.0 * n as f64)).cos();
        }
        *out = c(k) * sum;
    }
    output
}

/// 2-D type-II DCT over a square `n x n` matrix (row-major), scaled by `1/4`.
pub fn dct2d(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = matrix.len();
    debug_assert!(matrix.iter().all(|row| row.len() == n), "matrix must be square");

    // Pass 1: DCT along each row (transforms the y axis).
    let rows_transformed: Vec<Vec<f64>> = matrix.iter().map(|row| dct_1d(row)).collect();

    // Pass 2: DCT along each column (transforms the x axis) by
    // transposing, transforming rows again, and transposing back.
    let mut columns: Vec<Vec<f64>> = vec![vec![0.0; n]; n];
    for (x, row) in rows_transformed.iter().enumerate() {
        for (v, &value) in row.iter().enumerate() {
            columns[v][x] = value;
        }
    }
    let columns_transformed: Vec<Vec<f64>> = columns.iter().map(|col| dct_1d(col)).collect();

    let mut result = vec![vec![0.0; n]; n];
    for (v, row) in columns_transformed.iter().enumerate() {
        for (u, &value) in row.iter().enumerate() {
            result[u][v] = value * 0.25;
        }
    }
    result
}
