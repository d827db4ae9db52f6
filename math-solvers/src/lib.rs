//! Dense direct solvers for small finite element systems
//!
//! This crate provides the linear algebra used by the 1D finite element
//! solver: dense column-major matrices and a pivoted elimination that keeps
//! going on singular systems and reports what it found instead of failing.
//!
//! # Features
//!
//! - **Generalized direct solver**: partial pivoting restricted to unused rows,
//!   consistent/inconsistent singularity detection
//! - **Dense helpers**: column-major allocation, residual and bandwidth checks
//! - **Generic Scalar Types**: Works with f64 and f32
//!
//! # Example
//!
//! ```ignore
//! use math_bvp_solvers::{pivoted_solve, SolveStatus};
//! use ndarray::array;
//!
//! let a = array![[2.0, -1.0], [-1.0, 2.0]];
//! let b = array![1.0, 1.0];
//! let solution = pivoted_solve(a, b)?;
//! assert_eq!(solution.status, SolveStatus::Ok);
//! ```

pub mod dense;
pub mod direct;
pub mod traits;

// Re-export main types
pub use dense::{bandwidth, column_major_zeros};
pub use direct::{DirectError, DirectSolution, SolveStatus, pivoted_solve};
pub use traits::RealField;
