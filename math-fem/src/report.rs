//! Comparison tables and convergence studies against exact solutions

use std::fmt;

use serde::Serialize;

use crate::mesh::{Mesh1d, uniform_mesh};
use crate::problems::BenchmarkProblem;
use crate::quadrature::QuadratureRule;
use crate::solver::{BvpError, BvpSolution};
use solvers::SolveStatus;

/// One node of a comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub index: usize,
    pub x: f64,
    pub u: f64,
    pub exact: f64,
    pub error: f64,
}

/// Nodal values of a computed solution next to an exact one
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
    pub status: SolveStatus,
}

impl ComparisonTable {
    pub fn new(mesh: &Mesh1d, solution: &BvpSolution, exact: impl Fn(f64) -> f64) -> Self {
        let rows = mesh
            .nodes()
            .iter()
            .zip(solution.values.iter())
            .enumerate()
            .map(|(index, (&x, &u))| {
                let exact = exact(x);
                ComparisonRow {
                    index,
                    x,
                    u,
                    exact,
                    error: (u - exact).abs(),
                }
            })
            .collect();

        Self {
            rows,
            status: solution.status,
        }
    }

    /// Largest nodal error
    pub fn max_error(&self) -> f64 {
        self.rows.iter().map(|r| r.error).fold(0.0, f64::max)
    }

    /// Root mean square of the nodal errors
    pub fn rms_error(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.rows.iter().map(|r| r.error * r.error).sum();
        (sum / self.rows.len() as f64).sqrt()
    }
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     I    X         U         Uexact    Error")?;
        writeln!(f)?;
        for row in &self.rows {
            writeln!(
                f,
                "  {:4}  {:8.6}  {:14.6}  {:14.6} {:14.6e}",
                row.index, row.x, row.u, row.exact, row.error
            )?;
        }
        Ok(())
    }
}

/// One refinement level of a convergence study
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvergenceLevel {
    pub nodes: usize,
    /// Largest element width
    pub h: f64,
    pub max_error: f64,
    /// Observed order relative to the previous level
    pub order: Option<f64>,
}

/// Error behaviour of a problem over a sequence of meshes
#[derive(Debug, Clone, Serialize)]
pub struct ConvergenceStudy {
    pub problem_id: usize,
    pub levels: Vec<ConvergenceLevel>,
}

impl ConvergenceStudy {
    /// Solve `problem` on uniform meshes with the given node counts
    pub fn run(problem: &BenchmarkProblem, node_counts: &[usize]) -> Result<Self, BvpError> {
        Self::run_with_rule(problem, node_counts, &QuadratureRule::gauss_2())
    }

    /// Same as [`ConvergenceStudy::run`] integrating with `rule`
    pub fn run_with_rule(
        problem: &BenchmarkProblem,
        node_counts: &[usize],
        rule: &QuadratureRule,
    ) -> Result<Self, BvpError> {
        let meshes = node_counts
            .iter()
            .map(|&n| uniform_mesh(n))
            .collect::<Result<Vec<_>, _>>()?;
        Self::run_on_meshes_with_rule(problem, &meshes, rule)
    }

    /// Solve `problem` on each mesh in turn, e.g. a refinement sequence
    pub fn run_on_meshes(problem: &BenchmarkProblem, meshes: &[Mesh1d]) -> Result<Self, BvpError> {
        Self::run_on_meshes_with_rule(problem, meshes, &QuadratureRule::gauss_2())
    }

    pub fn run_on_meshes_with_rule(
        problem: &BenchmarkProblem,
        meshes: &[Mesh1d],
        rule: &QuadratureRule,
    ) -> Result<Self, BvpError> {
        let mut levels: Vec<ConvergenceLevel> = Vec::with_capacity(meshes.len());

        for mesh in meshes {
            let solution = problem.solve_with_rule(mesh, rule)?;
            let max_error = solution.max_nodal_error(problem.exact);
            let h = mesh.max_element_width();
            let order = levels
                .last()
                .and_then(|prev| observed_order(prev.h, prev.max_error, h, max_error));
            levels.push(ConvergenceLevel {
                nodes: mesh.num_nodes(),
                h,
                max_error,
                order,
            });
        }

        Ok(Self {
            problem_id: problem.id,
            levels,
        })
    }

    /// Order measured between the last two levels
    pub fn final_order(&self) -> Option<f64> {
        self.levels.last().and_then(|l| l.order)
    }
}

impl fmt::Display for ConvergenceStudy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     N    H             Max error       Order")?;
        writeln!(f)?;
        for level in &self.levels {
            match level.order {
                Some(order) => writeln!(
                    f,
                    "  {:4}  {:12.6e}  {:14.6e}  {:6.3}",
                    level.nodes, level.h, level.max_error, order
                )?,
                None => writeln!(
                    f,
                    "  {:4}  {:12.6e}  {:14.6e}       -",
                    level.nodes, level.h, level.max_error
                )?,
            }
        }
        Ok(())
    }
}

fn observed_order(h_prev: f64, e_prev: f64, h: f64, e: f64) -> Option<f64> {
    if e_prev <= 0.0 || e <= 0.0 || h_prev == h {
        return None;
    }
    let order = (e_prev / e).ln() / (h_prev / h).ln();
    order.is_finite().then_some(order)
}
