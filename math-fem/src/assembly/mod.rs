//! Finite element system assembly
//!
//! Assembles the Galerkin system for
//!
//! ```text
//! -(a(x) u')' + c(x) u = f(x),  u(0) = u(1) = 0
//! ```
//!
//! Row i of the system is the weak form `∫ a·u'·V_i' + c·u·V_i dx = ∫ f·V_i dx`
//! restricted to the support of the hat V_i.

mod element;
mod system;

pub use element::*;
pub use system::*;

use thiserror::Error;

/// Coefficient functions a (diffusion), c (reaction) and f (forcing)
///
/// Any `Fn(f64) -> f64` works: closures, `fn` items or function pointers.
#[derive(Debug, Clone, Copy)]
pub struct BvpCoefficients<A, C, F> {
    pub a: A,
    pub c: C,
    pub f: F,
}

impl<A, C, F> BvpCoefficients<A, C, F>
where
    A: Fn(f64) -> f64,
    C: Fn(f64) -> f64,
    F: Fn(f64) -> f64,
{
    pub fn new(a: A, c: C, f: F) -> Self {
        Self { a, c, f }
    }

    /// Evaluate a(x), rejecting values that make the problem ill-posed
    pub fn diffusion(&self, x: f64) -> Result<f64, AssemblyError> {
        let value = (self.a)(x);
        if value > 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(AssemblyError::NonPositiveDiffusion { x, value })
        }
    }

    #[inline]
    pub fn reaction(&self, x: f64) -> f64 {
        (self.c)(x)
    }

    #[inline]
    pub fn forcing(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Assembly errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssemblyError {
    #[error("Diffusion coefficient must be positive and finite: a({x}) = {value}")]
    NonPositiveDiffusion { x: f64, value: f64 },
}
