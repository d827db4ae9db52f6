//! Dense matrix helpers
//!
//! System matrices are stored as `ndarray::Array2` in column-major (Fortran)
//! memory order, so that a column scan during pivot search walks contiguous
//! memory. Indexing is always `[[row, col]]` regardless of layout.

use crate::traits::RealField;
use ndarray::{Array2, ShapeBuilder};

/// Create an `n x n` zero matrix with column-major layout
pub fn column_major_zeros<T: RealField>(n: usize) -> Array2<T> {
    Array2::zeros((n, n).f())
}

/// Largest absolute residual `max_i |(A x - b)_i|`
///
/// Returns `None` when the dimensions do not agree.
#[cfg(test)]
pub(crate) fn max_residual<T: RealField>(
    a: &Array2<T>,
    x: &ndarray::Array1<T>,
    b: &ndarray::Array1<T>,
) -> Option<T> {
    if a.ncols() != x.len() || a.nrows() != b.len() {
        return None;
    }

    let worst = a
        .rows()
        .into_iter()
        .zip(b.iter())
        .map(|(row, &bi)| {
            let ax = row
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&aij, &xj)| acc + aij * xj);
            (ax - bi).abs()
        })
        .fold(T::zero(), T::max);

    Some(worst)
}

/// Half-bandwidth of a square matrix: the largest `|i - j|` with `A[i, j] != 0`
pub fn bandwidth<T: RealField>(a: &Array2<T>) -> usize {
    a.indexed_iter()
        .filter(|(_, v)| !v.is_zero())
        .map(|((i, j), _)| i.abs_diff(j))
        .max()
        .unwrap_or(0)
}
