//! Core traits for dense linear algebra
//!
//! - [`RealField`]: scalar types accepted by the direct solvers

use num_traits::{Float, NumAssign};
use std::fmt::{Debug, Display};

/// Trait for real scalar types that can be used in the dense solvers.
///
/// Blanket-implemented for every `Float` with assignment operators, which
/// in practice means `f64` and `f32`.
pub trait RealField: Float + NumAssign + Debug + Display + 'static {}

impl<T> RealField for T where T: Float + NumAssign + Debug + Display + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    fn halve<T: RealField>(x: T) -> T {
        let mut y = x;
        y /= T::one() + T::one();
        y
    }

    #[test]
    fn test_real_field_f64_and_f32() {
        assert_eq!(halve(3.0_f64), 1.5);
        assert_eq!(halve(3.0_f32), 1.5);
    }
}
