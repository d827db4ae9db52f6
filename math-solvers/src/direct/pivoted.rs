//! Generalized pivoted elimination
//!
//! Solves a dense square system `A x = b` that may be singular.
//!
//! Columns are processed in order. For column `k` the pivot is the row with
//! the largest `|A[i, k]|` among rows not yet used as a pivot; the first such
//! row wins ties and an all-zero candidate set means the column has no pivot.
//! A pivot row is normalized and column `k` is eliminated from every unused
//! row. Back-substitution then walks the elimination steps from last to
//! first. A step that never received a pivot leaves a free variable, which
//! is set to zero and reported as a consistent or inconsistent singularity.
//!
//! The order of every floating-point operation is fixed: changing the pivot
//! tie-break or the elimination order changes the bits of the result.

use super::SolveStatus;
use crate::traits::RealField;
use log::debug;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur before elimination starts
#[derive(Error, Debug)]
pub enum DirectError {
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Result of [`pivoted_solve`]
#[derive(Debug, Clone)]
pub struct DirectSolution<T: RealField> {
    /// Solution vector; free variables are zero
    pub values: Array1<T>,
    /// Most severe singularity encountered
    pub status: SolveStatus,
    /// 1-based equations whose column had no pivot, ascending
    pub singular_equations: Vec<usize>,
    /// For each row, the 1-based elimination step that used it as pivot (0 if unused)
    pub pivots: Vec<usize>,
}

/// Solve `A x = b`, consuming both `A` and `b` as scratch space
///
/// Singular systems do not fail: see [`DirectSolution::status`].
pub fn pivoted_solve<T: RealField>(
    mut a: Array2<T>,
    mut b: Array1<T>,
) -> Result<DirectSolution<T>, DirectError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(DirectError::NotSquare {
            rows: n,
            cols: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(DirectError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let mut pivots = vec![0usize; n];

    // Forward elimination
    for k in 0..n {
        let mut max_val = T::zero();
        let mut max_row = None;

        for (i, _) in pivots.iter().enumerate().filter(|(_, step)| **step == 0) {
            let val = a[[i, k]].abs();
            if max_val < val {
                max_val = val;
                max_row = Some(i);
            }
        }

        let Some(p) = max_row else {
            continue;
        };

        pivots[p] = k + 1;
        let pivot = a[[p, k]];
        for j in (k + 1)..n {
            a[[p, j]] /= pivot;
        }
        b[p] /= pivot;
        a[[p, k]] = T::one();

        for i in 0..n {
            if pivots[i] != 0 {
                continue;
            }
            let mult = a[[i, k]];
            for j in (k + 1)..n {
                let update = mult * a[[p, j]];
                a[[i, j]] -= update;
            }
            let update = mult * b[p];
            b[i] -= update;
            a[[i, k]] = T::zero();
        }
    }

    // Row that served as pivot for each step
    let mut step_rows = vec![None; n];
    for (row, &step) in pivots.iter().enumerate() {
        if step != 0 {
            step_rows[step - 1] = Some(row);
        }
    }

    // Back substitution, last step first
    let mut x = Array1::zeros(n);
    let mut status = SolveStatus::Ok;
    let mut singular_equations = Vec::new();

    for j in (0..n).rev() {
        match step_rows[j] {
            None => {
                x[j] = T::zero();
                let found = if b[j] == T::zero() {
                    SolveStatus::ConsistentSingular
                } else {
                    SolveStatus::InconsistentSingular
                };
                debug!("pivoted_solve: {} at equation {}", found, j + 1);
                status = status.max(found);
                singular_equations.push(j + 1);
            }
            Some(row) => {
                let xj = b[row];
                x[j] = xj;
                for i in 0..n {
                    if i != row {
                        let update = a[[i, j]] * xj;
                        b[i] -= update;
                    }
                }
            }
        }
    }
    singular_equations.reverse();

    Ok(DirectSolution {
        values: x,
        status,
        singular_equations,
        pivots,
    })
}
