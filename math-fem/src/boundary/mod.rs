//! Boundary condition handling for finite element problems
//!
//! Only homogeneous Dirichlet (essential) conditions are supported:
//! `u = 0` at both ends of the interval.

mod dirichlet;

pub use dirichlet::*;
