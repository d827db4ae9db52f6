//! Reference problems with known exact solutions
//!
//! Every problem has the exact solution `u(x) = x(1-x)eˣ`; the forcing term
//! is manufactured from the chosen a(x) and c(x). Problem 5 has a diffusion
//! coefficient with a kink at x = 1/3.

use crate::assembly::BvpCoefficients;
use crate::mesh::Mesh1d;
use crate::quadrature::QuadratureRule;
use crate::solver::{BvpError, BvpSolution, solve_bvp, solve_bvp_with_rule};

/// Scalar function of one variable
pub type ScalarFn = fn(f64) -> f64;

/// A boundary value problem with a known solution
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkProblem {
    /// 1-based identifier
    pub id: usize,
    pub name: &'static str,
    /// Human readable formulas, one per line
    pub description: &'static [&'static str],
    pub a: ScalarFn,
    pub c: ScalarFn,
    pub f: ScalarFn,
    pub exact: ScalarFn,
}

impl BenchmarkProblem {
    /// Number of built-in problems
    pub const COUNT: usize = 5;

    /// All built-in problems, in id order
    pub fn all() -> [BenchmarkProblem; Self::COUNT] {
        [
            BenchmarkProblem {
                id: 1,
                name: "constant diffusion",
                description: &[
                    "a(x) = 1.0",
                    "c(x) = 0.0",
                    "f(x) = x * (x + 3) * exp(x)",
                    "u(x) = x * (1 - x) * exp(x)",
                ],
                a: unit_diffusion,
                c: no_reaction,
                f: forcing_poisson,
                exact: exact_solution,
            },
            BenchmarkProblem {
                id: 2,
                name: "constant reaction",
                description: &[
                    "a(x) = 1.0",
                    "c(x) = 2.0",
                    "f(x) = x * (5 - x) * exp(x)",
                    "u(x) = x * (1 - x) * exp(x)",
                ],
                a: unit_diffusion,
                c: constant_reaction,
                f: forcing_constant_reaction,
                exact: exact_solution,
            },
            BenchmarkProblem {
                id: 3,
                name: "linear reaction",
                description: &[
                    "a(x) = 1.0",
                    "c(x) = 2.0 * x",
                    "f(x) = - x * (2 * x * x - 3 * x - 3) * exp(x)",
                    "u(x) = x * (1 - x) * exp(x)",
                ],
                a: unit_diffusion,
                c: linear_reaction,
                f: forcing_linear_reaction,
                exact: exact_solution,
            },
            BenchmarkProblem {
                id: 4,
                name: "variable diffusion",
                description: &[
                    "a(x) = 1.0 + x * x",
                    "c(x) = 0.0",
                    "f(x) = (x + 3 x^2 + 5 x^3 + x^4) * exp(x)",
                    "u(x) = x * (1 - x) * exp(x)",
                ],
                a: quadratic_diffusion,
                c: no_reaction,
                f: forcing_quadratic_diffusion,
                exact: exact_solution,
            },
            BenchmarkProblem {
                id: 5,
                name: "kinked diffusion",
                description: &[
                    "a(x) = 1.0 + x * x  for x <= 1/3",
                    "     = 7/9 + x      for 1/3 < x",
                    "c(x) = 0.0",
                    "f(x) = (x + 3 x^2 + 5 x^3 + x^4) * exp(x)  for x <= 1/3",
                    "     = (-1 + 10/3 x + 43/9 x^2 + x^3) * exp(x)  for 1/3 < x",
                    "u(x) = x * (1 - x) * exp(x)",
                ],
                a: kinked_diffusion,
                c: no_reaction,
                f: forcing_kinked_diffusion,
                exact: exact_solution,
            },
        ]
    }

    /// Look up a built-in problem by its 1-based id
    pub fn by_id(id: usize) -> Option<BenchmarkProblem> {
        Self::all().into_iter().find(|p| p.id == id)
    }

    /// Solve this problem on `mesh`
    pub fn solve(&self, mesh: &Mesh1d) -> Result<BvpSolution, BvpError> {
        solve_bvp(self.a, self.c, self.f, mesh)
    }

    /// Solve this problem on `mesh`, integrating with `rule`
    pub fn solve_with_rule(&self, mesh: &Mesh1d, rule: &QuadratureRule) -> Result<BvpSolution, BvpError> {
        solve_bvp_with_rule(&self.coefficients(), mesh, rule)
    }

    pub fn coefficients(&self) -> BvpCoefficients<ScalarFn, ScalarFn, ScalarFn> {
        BvpCoefficients::new(self.a, self.c, self.f)
    }
}

pub fn exact_solution(x: f64) -> f64 {
    x * (1.0 - x) * x.exp()
}

fn unit_diffusion(_x: f64) -> f64 {
    1.0
}

fn quadratic_diffusion(x: f64) -> f64 {
    1.0 + x * x
}

fn kinked_diffusion(x: f64) -> f64 {
    if x <= 1.0 / 3.0 {
        1.0 + x * x
    } else {
        x + 7.0 / 9.0
    }
}

fn no_reaction(_x: f64) -> f64 {
    0.0
}

fn constant_reaction(_x: f64) -> f64 {
    2.0
}

fn linear_reaction(x: f64) -> f64 {
    2.0 * x
}

fn forcing_poisson(x: f64) -> f64 {
    x * (x + 3.0) * x.exp()
}

fn forcing_constant_reaction(x: f64) -> f64 {
    x * (5.0 - x) * x.exp()
}

fn forcing_linear_reaction(x: f64) -> f64 {
    -x * (2.0 * x * x - 3.0 * x - 3.0) * x.exp()
}

fn forcing_quadratic_diffusion(x: f64) -> f64 {
    (x + 3.0 * x * x + 5.0 * x * x * x + x * x * x * x) * x.exp()
}

fn forcing_kinked_diffusion(x: f64) -> f64 {
    if x <= 1.0 / 3.0 {
        forcing_quadratic_diffusion(x)
    } else {
        (-1.0 + (10.0 / 3.0) * x + (43.0 / 9.0) * x * x + x * x * x) * x.exp()
    }
}
