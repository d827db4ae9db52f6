//! Linear finite element solver for two-point boundary value problems
//!
//! Solves
//!
//! ```text
//! -(a(x) u'(x))' + c(x) u(x) = f(x)   on [0, 1]
//! u(0) = u(1) = 0
//! ```
//!
//! with piecewise linear (hat) basis functions on an arbitrary node
//! sequence, two-point Gauss–Legendre quadrature and a dense pivoted solver
//! that reports singular equations instead of failing.
//!
//! # Features
//!
//! - **Meshes**: uniform, mapped and uniformly refined node sequences
//! - **Assembly**: node-by-node tridiagonal Galerkin rows
//! - **Boundary conditions**: homogeneous Dirichlet at both ends
//! - **Validation**: five reference problems with exact solutions,
//!   comparison tables and convergence studies
//!
//! # Example
//!
//! ```
//! use math_bvp_fem::{mesh, solve_bvp};
//!
//! let mesh = mesh::uniform_mesh(11).unwrap();
//! let solution = solve_bvp(|_| 1.0, |_| 0.0, |_| 2.0, &mesh).unwrap();
//!
//! // u(x) = x(1-x) is reproduced at the nodes
//! assert!((solution.values[5] - 0.25).abs() < 1e-12);
//! assert!(solution.status.is_ok());
//! ```

pub mod assembly;
pub mod basis;
pub mod boundary;
pub mod config;
pub mod mesh;
pub mod problems;
pub mod quadrature;
pub mod report;
pub mod solver;

pub use config::{ConfigError, DriverConfig};
pub use mesh::{Mesh1d, MeshError};
pub use problems::BenchmarkProblem;
pub use report::{ComparisonTable, ConvergenceStudy};
pub use solver::{BvpError, BvpSolution, solve_bvp, solve_bvp_with, solve_bvp_with_rule};
pub use solvers::SolveStatus;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
