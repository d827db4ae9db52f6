//! FEM solver for the 1D two-point boundary value problem
//!
//! Solves
//!
//! ```text
//! -(a(x) u'(x))' + c(x) u(x) = f(x),  0 < x < 1,  u(0) = u(1) = 0
//! ```
//!
//! with piecewise-linear elements on a caller-supplied mesh. The dense
//! system is solved by the generalized pivoted elimination of the
//! `solvers` crate, so a degenerate system yields a best-effort solution
//! and a [`SolveStatus`] instead of an error.

use crate::assembly::{AssemblyError, BvpCoefficients, assemble_system_with_rule};
use crate::basis::interpolate;
use crate::boundary::enforce_homogeneous_dirichlet;
use crate::mesh::{Mesh1d, MeshError};
use crate::quadrature::QuadratureRule;
use log::{info, warn};
use ndarray::Array1;
use solvers::{DirectError, SolveStatus};
use std::time::Instant;
use thiserror::Error;

/// Solver errors
///
/// These are precondition violations. Singular systems are reported
/// through [`BvpSolution::status`] instead.
#[derive(Debug, Error)]
pub enum BvpError {
    #[error("Invalid mesh: {0}")]
    Mesh(#[from] MeshError),
    #[error("Assembly failed: {0}")]
    Assembly(#[from] AssemblyError),
    #[error("Direct solver failed: {0}")]
    Solver(#[from] DirectError),
}

/// Solution of a boundary value problem
#[derive(Debug, Clone)]
pub struct BvpSolution {
    /// Mesh the problem was solved on
    pub mesh: Mesh1d,
    /// Finite element coefficients, equal to the approximate u at each node
    pub values: Array1<f64>,
    /// Status reported by the direct solver
    pub status: SolveStatus,
    /// 1-based equations without a pivot (empty when `status` is ok)
    pub singular_equations: Vec<usize>,
    /// Largest rounding-level boundary value replaced by the exact zero
    pub dirichlet_defect: f64,
}

impl BvpSolution {
    /// Number of nodal values
    pub fn num_nodes(&self) -> usize {
        self.values.len()
    }

    /// Evaluate the piecewise-linear approximation at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.values.as_slice() {
            Some(values) => interpolate(&self.mesh, values, x),
            None => interpolate(&self.mesh, &self.values.to_vec(), x),
        }
    }

    /// Largest nodal error `max_i |u_i - exact(x_i)|`
    pub fn max_nodal_error<E>(&self, exact: E) -> f64
    where
        E: Fn(f64) -> f64,
    {
        self.mesh
            .nodes()
            .iter()
            .zip(self.values.iter())
            .map(|(&x, &u)| (u - exact(x)).abs())
            .fold(0.0, f64::max)
    }
}

/// Solve `-(a u')' + c u = f` on `mesh` with `u(0) = u(1) = 0`
///
/// N is `mesh.num_nodes()`. The returned values satisfy `u[0] = u[N-1] = 0`
/// exactly.
pub fn solve_bvp<A, C, F>(a: A, c: C, f: F, mesh: &Mesh1d) -> Result<BvpSolution, BvpError>
where
    A: Fn(f64) -> f64,
    C: Fn(f64) -> f64,
    F: Fn(f64) -> f64,
{
    solve_bvp_with(&BvpCoefficients::new(a, c, f), mesh)
}

/// Same as [`solve_bvp`] with the coefficients already bundled
pub fn solve_bvp_with<A, C, F>(
    coeffs: &BvpCoefficients<A, C, F>,
    mesh: &Mesh1d,
) -> Result<BvpSolution, BvpError>
where
    A: Fn(f64) -> f64,
    C: Fn(f64) -> f64,
    F: Fn(f64) -> f64,
{
    solve_bvp_with_rule(coeffs, mesh, &QuadratureRule::gauss_2())
}

/// Same as [`solve_bvp_with`] integrating with `rule` instead of the 2-point rule
pub fn solve_bvp_with_rule<A, C, F>(
    coeffs: &BvpCoefficients<A, C, F>,
    mesh: &Mesh1d,
    rule: &QuadratureRule,
) -> Result<BvpSolution, BvpError>
where
    A: Fn(f64) -> f64,
    C: Fn(f64) -> f64,
    F: Fn(f64) -> f64,
{
    let start = Instant::now();
    let n = mesh.num_nodes();

    let system = assemble_system_with_rule(mesh, coeffs, rule)?;
    let assembly_time = start.elapsed();

    let direct = system.solve()?;
    let mut values = direct.values;
    let dirichlet_defect = enforce_homogeneous_dirichlet(&mut values, &[0, n - 1]);

    info!(
        "[FEM1D] {} nodes, h = {:.3e}, assembly {:.3}ms, total {:.3}ms, boundary defect {:.1e}",
        n,
        mesh.max_element_width(),
        assembly_time.as_secs_f64() * 1000.0,
        start.elapsed().as_secs_f64() * 1000.0,
        dirichlet_defect
    );

    if direct.status.is_singular() {
        warn!(
            "[FEM1D] {} at equations {:?}",
            direct.status, direct.singular_equations
        );
    }

    Ok(BvpSolution {
        mesh: mesh.clone(),
        values,
        status: direct.status,
        singular_equations: direct.singular_equations,
        dirichlet_defect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::uniform_mesh;
    use approx::assert_relative_eq;

    #[test]
    fn test_poisson_constant_forcing() {
        // -u'' = 1 has u = x(1-x)/2; P1 is nodally exact for constant a, c = 0
        let mesh = uniform_mesh(9).expect("valid mesh");
        let sol = solve_bvp(|_| 1.0, |_| 0.0, |_| 1.0, &mesh).expect("well posed");

        assert!(sol.status.is_ok());
        for (&x, &u) in mesh.nodes().iter().zip(sol.values.iter()) {
            assert_relative_eq!(u, 0.5 * x * (1.0 - x), epsilon = 1e-13);
        }
    }

    #[test]
    fn test_boundary_values_exact() {
        let mesh = uniform_mesh(21).expect("valid mesh");
        let sol = solve_bvp(
            |x: f64| 1.0 + x * x,
            |x| x,
            |x: f64| (3.0 * x).cos(),
            &mesh,
        )
        .expect("well posed");

        assert_eq!(sol.values[0], 0.0);
        assert_eq!(sol.values[sol.num_nodes() - 1], 0.0);
        assert!(sol.dirichlet_defect < 1e-12);
    }

    #[test]
    fn test_two_node_mesh() {
        let mesh = uniform_mesh(2).expect("valid mesh");
        let sol = solve_bvp(|_| 1.0, |_| 0.0, |_| 1.0, &mesh).expect("well posed");
        assert_eq!(sol.values.to_vec(), vec![0.0, 0.0]);
        assert!(sol.status.is_ok());
    }

    #[test]
    fn test_evaluate_between_nodes() {
        let mesh = uniform_mesh(3).expect("valid mesh");
        let sol = solve_bvp(|_| 1.0, |_| 0.0, |_| 1.0, &mesh).expect("well posed");
        assert_relative_eq!(sol.evaluate(0.5), 0.125, epsilon = 1e-15);
        assert_relative_eq!(sol.evaluate(0.25), 0.0625, epsilon = 1e-15);
    }

    #[test]
    fn test_higher_order_rule_removes_load_error() {
        // With a = 1, c = 0 the nodal error comes only from integrating f
        let exact = |x: f64| x * (1.0 - x) * x.exp();
        let coeffs = BvpCoefficients::new(|_| 1.0, |_| 0.0, |x: f64| x * (x + 3.0) * x.exp());
        let mesh = uniform_mesh(11).expect("valid mesh");

        let two = solve_bvp_with(&coeffs, &mesh).expect("well posed");
        let same = solve_bvp_with_rule(&coeffs, &mesh, &QuadratureRule::gauss_2()).expect("well posed");
        let five = solve_bvp_with_rule(&coeffs, &mesh, &QuadratureRule::new(5)).expect("well posed");

        assert_eq!(two.values, same.values);
        let e2 = two.max_nodal_error(exact);
        let e5 = five.max_nodal_error(exact);
        assert!(e5 < 1e-12, "5-point error {:e}", e5);
        assert!(e5 < e2);
    }

    #[test]
    fn test_max_nodal_error() {
        let mesh = uniform_mesh(5).expect("valid mesh");
        let sol = solve_bvp(|_| 1.0, |_| 0.0, |_| 1.0, &mesh).expect("well posed");
        assert!(sol.max_nodal_error(|x| 0.5 * x * (1.0 - x)) < 1e-14);
        assert!(sol.max_nodal_error(|_| 1.0) >= 1.0);
    }

    #[test]
    fn test_negative_diffusion_fails_fast() {
        let mesh = uniform_mesh(5).expect("valid mesh");
        let err = solve_bvp(|_| -1.0, |_| 0.0, |_| 1.0, &mesh).unwrap_err();
        assert!(matches!(err, BvpError::Assembly(_)));
        assert!(err.to_string().contains("Diffusion coefficient"));
    }
}
