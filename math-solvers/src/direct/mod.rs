//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`pivoted_solve`]: elimination with partial pivoting over unused rows,
//!   tolerant of singular systems

mod pivoted;

pub use pivoted::{DirectError, DirectSolution, pivoted_solve};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a direct solve
///
/// Singular outcomes are not failures: the solver still returns a vector in
/// which every free variable is set to zero. Variants are ordered by
/// severity, so `max` picks the worst of several outcomes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// Every column had a pivot
    #[default]
    Ok,
    /// A column had no pivot and the matching right-hand side was zero
    ConsistentSingular,
    /// A column had no pivot and the matching right-hand side was non-zero
    InconsistentSingular,
}

impl SolveStatus {
    /// Numeric error code: 0 (ok), 1 (consistent), 2 (inconsistent)
    pub fn code(&self) -> u8 {
        match self {
            SolveStatus::Ok => 0,
            SolveStatus::ConsistentSingular => 1,
            SolveStatus::InconsistentSingular => 2,
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == SolveStatus::Ok
    }

    pub fn is_singular(&self) -> bool {
        !self.is_ok()
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Ok => write!(f, "ok"),
            SolveStatus::ConsistentSingular => write!(f, "consistent singularity"),
            SolveStatus::InconsistentSingular => write!(f, "inconsistent singularity"),
        }
    }
}
