//! Dirichlet (essential) boundary conditions
//!
//! Implements u = 0 at boundary nodes by replacing their equations with
//! identity rows: `A[i, :] = e_i`, `b[i] = 0`.

use crate::assembly::LinearSystem;
use ndarray::Array1;

/// Replace the equations of `nodes` with identity rows and zero right-hand sides
pub fn apply_homogeneous_dirichlet(system: &mut LinearSystem, nodes: &[usize]) {
    for &node in nodes {
        system.matrix.row_mut(node).fill(0.0);
        system.matrix[[node, node]] = 1.0;
        system.rhs[node] = 0.0;
    }
}

/// Set the solution at `nodes` to exactly zero
///
/// Pivoting can route a boundary unknown through interior rows, leaving a
/// rounding-level value instead of 0. Returns the largest magnitude that
/// was overwritten.
pub fn enforce_homogeneous_dirichlet(values: &mut Array1<f64>, nodes: &[usize]) -> f64 {
    let mut defect = 0.0_f64;
    for &node in nodes {
        defect = defect.max(values[node].abs());
        values[node] = 0.0;
    }
    defect
}
