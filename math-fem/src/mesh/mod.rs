//! Mesh types and generators for FEM
//!
//! This module provides the 1D mesh data structure, generators for the unit
//! interval and uniform refinement.

mod generators;
mod refinement;
mod types;

pub use generators::*;
pub use refinement::*;
pub use types::*;
