//! Finite element basis functions
//!
//! Implements the piecewise-linear hat functions used by the 1D solver.

mod lagrange;

pub use lagrange::*;
