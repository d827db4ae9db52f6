//! Mesh generators for the unit interval
//!
//! Provides evenly spaced and mapped (graded) node distributions.

use super::types::{Mesh1d, MeshError};

/// `n` evenly spaced values from `lo` to `hi` inclusive
///
/// Uses `x_i = ((n-1-i)·lo + i·hi) / (n-1)` so both end points are
/// reproduced exactly. A single value is placed at the midpoint.
pub fn even_spaced(n: usize, lo: f64, hi: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.5 * (lo + hi)],
        _ => {
            let denom = (n - 1) as f64;
            (0..n)
                .map(|i| ((n - 1 - i) as f64 * lo + i as f64 * hi) / denom)
                .collect()
        }
    }
}

/// Uniform mesh of `n` nodes on [0, 1]
pub fn uniform_mesh(n: usize) -> Result<Mesh1d, MeshError> {
    Mesh1d::new(even_spaced(n, 0.0, 1.0))
}

/// Mesh of `n` nodes obtained by mapping uniform nodes through `map`
///
/// `map` should be strictly increasing with `map(0) = 0` and `map(1) = 1`;
/// the result is validated like any other mesh.
pub fn mapped_mesh<M>(n: usize, map: M) -> Result<Mesh1d, MeshError>
where
    M: Fn(f64) -> f64,
{
    Mesh1d::new(even_spaced(n, 0.0, 1.0).into_iter().map(map).collect())
}
