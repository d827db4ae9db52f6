//! Element assembly for one interior node
//!
//! Row i couples node i to its neighbours i-1 and i+1 through the two
//! elements `[x[i-1], x[i]]` and `[x[i], x[i+1]]`. Both are integrated with
//! the same quadrature rule; for each quadrature point the left element is
//! visited before the right one.

use super::{AssemblyError, BvpCoefficients};
use crate::basis::{HatTriple, hats_on_left, hats_on_right};
use crate::mesh::Mesh1d;
use crate::quadrature::{PhysicalPoint, QuadratureRule};

/// Coefficients of row i: columns i-1, i, i+1 and the right-hand side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeRow {
    pub left: f64,
    pub diag: f64,
    pub right: f64,
    pub rhs: f64,
}

impl NodeRow {
    /// Add the integrand of all four entries at one quadrature point
    fn accumulate<A, C, F>(
        &mut self,
        point: PhysicalPoint,
        hats: &HatTriple,
        coeffs: &BvpCoefficients<A, C, F>,
    ) -> Result<(), AssemblyError>
    where
        A: Fn(f64) -> f64,
        C: Fn(f64) -> f64,
        F: Fn(f64) -> f64,
    {
        let wq = point.weight;
        let axq = coeffs.diffusion(point.x)?;
        let cxq = coeffs.reaction(point.x);
        let fxq = coeffs.forcing(point.x);

        let [vl, vm, vr] = hats.values;
        let [vlp, vmp, vrp] = hats.derivatives;

        self.left += wq * (axq * vlp * vmp + cxq * vl * vm);
        self.diag += wq * (axq * vmp * vmp + cxq * vm * vm);
        self.right += wq * (axq * vrp * vmp + cxq * vr * vm);
        self.rhs += wq * (fxq * vm);

        Ok(())
    }
}

/// Integrate the weak form over the support of V_i for interior node `i`
///
/// # Panics
/// If `i` is not an interior node of `mesh`.
pub fn assemble_node_row<A, C, F>(
    mesh: &Mesh1d,
    i: usize,
    coeffs: &BvpCoefficients<A, C, F>,
    rule: &QuadratureRule,
) -> Result<NodeRow, AssemblyError>
where
    A: Fn(f64) -> f64,
    C: Fn(f64) -> f64,
    F: Fn(f64) -> f64,
{
    assert!(
        mesh.interior_nodes().contains(&i),
        "node {} is not interior to a mesh of {} nodes",
        i,
        mesh.num_nodes()
    );

    let xl = mesh.node(i - 1);
    let xm = mesh.node(i);
    let xr = mesh.node(i + 1);

    let mut row = NodeRow::default();

    for q in 0..rule.num_points() {
        let point = rule.map_point(q, xl, xm);
        row.accumulate(point, &hats_on_left(xl, xm, point.x), coeffs)?;

        let point = rule.map_point(q, xm, xr);
        row.accumulate(point, &hats_on_right(xm, xr, point.x), coeffs)?;
    }

    Ok(row)
}
