//! Piecewise-linear (P1) Lagrange basis functions in 1D
//!
//! The basis function V_j is the "hat" that equals 1 at node j, 0 at every
//! other node, and is linear on each element. It is supported on
//! `[x[j-1], x[j+1]]`.

use crate::mesh::Mesh1d;

/// Values and derivatives of V_{i-1}, V_i, V_{i+1} at one point
///
/// Index 0 is the left neighbour, 1 the node itself, 2 the right neighbour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HatTriple {
    pub values: [f64; 3],
    pub derivatives: [f64; 3],
}

/// Hats overlapping node i at `xq` in the left sub-interval `[xl, xm]`
///
/// V_{i-1} falls from 1 to 0, V_i rises from 0 to 1, V_{i+1} vanishes.
#[inline]
pub fn hats_on_left(xl: f64, xm: f64, xq: f64) -> HatTriple {
    HatTriple {
        values: [(xm - xq) / (xm - xl), (xq - xl) / (xm - xl), 0.0],
        derivatives: [-1.0 / (xm - xl), 1.0 / (xm - xl), 0.0],
    }
}

/// Hats overlapping node i at `xq` in the right sub-interval `[xm, xr]`
///
/// V_{i-1} vanishes, V_i falls from 1 to 0, V_{i+1} rises from 0 to 1.
#[inline]
pub fn hats_on_right(xm: f64, xr: f64, xq: f64) -> HatTriple {
    HatTriple {
        values: [0.0, (xr - xq) / (xr - xm), (xq - xm) / (xr - xm)],
        derivatives: [0.0, -1.0 / (xr - xm), 1.0 / (xr - xm)],
    }
}

/// Evaluate V_j at `x`
pub fn hat(mesh: &Mesh1d, j: usize, x: f64) -> f64 {
    let xj = mesh.node(j);
    if j > 0 {
        let xl = mesh.node(j - 1);
        if x >= xl && x <= xj {
            return (x - xl) / (xj - xl);
        }
    }
    if j + 1 < mesh.num_nodes() {
        let xr = mesh.node(j + 1);
        if x >= xj && x <= xr {
            return (xr - x) / (xr - xj);
        }
    }
    0.0
}

/// Evaluate `Σ_j coefficients[j] · V_j(x)`
///
/// Points outside the mesh evaluate to 0.
pub fn interpolate(mesh: &Mesh1d, coefficients: &[f64], x: f64) -> f64 {
    let nodes = mesh.nodes();
    let n = nodes.len();
    if x < nodes[0] || x > nodes[n - 1] {
        return 0.0;
    }

    // First node strictly right of x, clamped to the last element
    let right = nodes.partition_point(|&node| node <= x).clamp(1, n - 1);
    let left = right - 1;
    coefficients[left] * hat(mesh, left, x) + coefficients[right] * hat(mesh, right, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::uniform_mesh;
    use approx::assert_relative_eq;

    #[test]
    fn test_left_partition_of_unity() {
        let h = hats_on_left(0.2, 0.5, 0.3);
        assert_relative_eq!(h.values.iter().sum::<f64>(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(h.derivatives.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
        assert_eq!(h.values[2], 0.0);
    }

    #[test]
    fn test_right_partition_of_unity() {
        let h = hats_on_right(0.5, 0.9, 0.8);
        assert_relative_eq!(h.values.iter().sum::<f64>(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(h.derivatives.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
        assert_eq!(h.values[0], 0.0);
    }

    #[test]
    fn test_hats_at_nodes() {
        let l = hats_on_left(0.0, 0.5, 0.5);
        assert_eq!(l.values, [0.0, 1.0, 0.0]);
        let r = hats_on_right(0.5, 1.0, 0.5);
        assert_eq!(r.values, [0.0, 1.0, 0.0]);
        assert_relative_eq!(l.derivatives[1], 2.0);
        assert_relative_eq!(r.derivatives[1], -2.0);
    }

    #[test]
    fn test_hat_kronecker() {
        let mesh = uniform_mesh(5).expect("valid mesh");
        for j in 0..mesh.num_nodes() {
            for i in 0..mesh.num_nodes() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(hat(&mesh, j, mesh.node(i)), expected, epsilon = 1e-15);
            }
        }
        assert_relative_eq!(hat(&mesh, 1, 0.375), 0.5, epsilon = 1e-15);
        assert_eq!(hat(&mesh, 1, 0.9), 0.0);
    }

    #[test]
    fn test_interpolate_is_piecewise_linear() {
        let mesh = Mesh1d::new(vec![0.0, 0.25, 1.0]).expect("valid mesh");
        let u = [0.0, 1.0, 0.0];
        assert_relative_eq!(interpolate(&mesh, &u, 0.25), 1.0);
        assert_relative_eq!(interpolate(&mesh, &u, 0.125), 0.5, epsilon = 1e-15);
        assert_relative_eq!(interpolate(&mesh, &u, 0.625), 0.5, epsilon = 1e-15);
        assert_eq!(interpolate(&mesh, &u, 1.0), 0.0);
        assert_eq!(interpolate(&mesh, &u, 1.5), 0.0);
    }
}
