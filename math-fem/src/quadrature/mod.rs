//! Numerical quadrature rules for finite element integration
//!
//! Provides Gauss-Legendre rules on [-1, 1] and their affine map onto
//! physical elements.

mod gauss;
mod rules;

pub use gauss::*;
pub use rules::*;
