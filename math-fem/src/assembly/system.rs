//! Global linear system assembly
//!
//! Builds the dense N x N matrix and N-vector for the whole mesh. Interior
//! rows come from [`assemble_node_row`]; rows 0 and N-1 are identity rows
//! carrying the homogeneous Dirichlet conditions.

use super::element::{NodeRow, assemble_node_row};
use super::{AssemblyError, BvpCoefficients};
use crate::boundary::apply_homogeneous_dirichlet;
use crate::mesh::Mesh1d;
use crate::quadrature::QuadratureRule;
use log::debug;
use ndarray::{Array1, Array2};
use solvers::{DirectError, DirectSolution, bandwidth, column_major_zeros, pivoted_solve};

/// Assembled system `A u = b`
#[derive(Debug, Clone)]
pub struct LinearSystem {
    /// Dense system matrix, column-major
    pub matrix: Array2<f64>,
    /// Right-hand side vector
    pub rhs: Array1<f64>,
}

impl LinearSystem {
    /// Zero system of dimension `n`
    pub fn zeros(n: usize) -> Self {
        Self {
            matrix: column_major_zeros(n),
            rhs: Array1::zeros(n),
        }
    }

    /// Number of unknowns
    pub fn dim(&self) -> usize {
        self.rhs.len()
    }

    /// Write row `i` into columns i-1, i, i+1 and the right-hand side
    pub fn set_node_row(&mut self, i: usize, row: &NodeRow) {
        self.matrix[[i, i - 1]] = row.left;
        self.matrix[[i, i]] = row.diag;
        self.matrix[[i, i + 1]] = row.right;
        self.rhs[i] = row.rhs;
    }

    /// Largest `|i - j|` over non-zero entries
    pub fn bandwidth(&self) -> usize {
        bandwidth(&self.matrix)
    }

    /// True when every non-zero lies on the three central diagonals
    pub fn is_tridiagonal(&self) -> bool {
        self.bandwidth() <= 1
    }

    /// Solve the system, consuming it
    pub fn solve(self) -> Result<DirectSolution<f64>, DirectError> {
        pivoted_solve(self.matrix, self.rhs)
    }
}

/// Assemble the full system using the 2-point Gauss rule
pub fn assemble_system<A, C, F>(
    mesh: &Mesh1d,
    coeffs: &BvpCoefficients<A, C, F>,
) -> Result<LinearSystem, AssemblyError>
where
    A: Fn(f64) -> f64,
    C: Fn(f64) -> f64,
    F: Fn(f64) -> f64,
{
    assemble_system_with_rule(mesh, coeffs, &QuadratureRule::gauss_2())
}

/// Assemble the full system with a given quadrature rule
pub fn assemble_system_with_rule<A, C, F>(
    mesh: &Mesh1d,
    coeffs: &BvpCoefficients<A, C, F>,
    rule: &QuadratureRule,
) -> Result<LinearSystem, AssemblyError>
where
    A: Fn(f64) -> f64,
    C: Fn(f64) -> f64,
    F: Fn(f64) -> f64,
{
    let n = mesh.num_nodes();
    let mut system = LinearSystem::zeros(n);

    for i in mesh.interior_nodes() {
        let row = assemble_node_row(mesh, i, coeffs, rule)?;
        system.set_node_row(i, &row);
    }

    apply_homogeneous_dirichlet(&mut system, &[0, n - 1]);

    debug!(
        "Assembled {}x{} system ({} interior rows, {}-point rule)",
        n,
        n,
        n - 2,
        rule.num_points()
    );

    Ok(system)
}
