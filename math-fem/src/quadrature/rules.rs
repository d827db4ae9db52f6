//! Quadrature rules mapped onto physical elements

use super::gauss::{GAUSS_2_POINT, QuadraturePoint, gauss_legendre_1d};

/// A quadrature point on a physical interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalPoint {
    /// Physical coordinate
    pub x: f64,
    /// Weight including the Jacobian (xr - xl) / 2
    pub weight: f64,
}

/// Quadrature rule on the reference interval [-1, 1]
#[derive(Debug, Clone)]
pub struct QuadratureRule {
    /// Number of Gauss points
    pub order: usize,
    /// Quadrature points and weights
    pub points: Vec<QuadraturePoint>,
}

impl QuadratureRule {
    /// Gauss-Legendre rule with `order` points
    pub fn new(order: usize) -> Self {
        let points = gauss_legendre_1d(order);
        Self {
            order: points.len(),
            points,
        }
    }

    /// The fixed 2-point rule used for element assembly
    pub fn gauss_2() -> Self {
        Self {
            order: 2,
            points: GAUSS_2_POINT.to_vec(),
        }
    }

    /// Number of quadrature points
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Iterator over quadrature points
    pub fn iter(&self) -> impl Iterator<Item = &QuadraturePoint> {
        self.points.iter()
    }

    /// Map point `q` onto `[xl, xr]`
    ///
    /// `x = ((1 - t)·xl + (1 + t)·xr) / 2`, `w = weight·(xr - xl) / 2`.
    #[inline]
    pub fn map_point(&self, q: usize, xl: f64, xr: f64) -> PhysicalPoint {
        let qp = &self.points[q];
        PhysicalPoint {
            x: ((1.0 - qp.xi) * xl + (1.0 + qp.xi) * xr) / 2.0,
            weight: qp.weight * (xr - xl) / 2.0,
        }
    }

    /// All points of the rule mapped onto `[xl, xr]`
    pub fn map_to_interval(&self, xl: f64, xr: f64) -> impl Iterator<Item = PhysicalPoint> + '_ {
        (0..self.points.len()).map(move |q| self.map_point(q, xl, xr))
    }

    /// Integrate `g` over `[xl, xr]`
    pub fn integrate<G>(&self, xl: f64, xr: f64, g: G) -> f64
    where
        G: Fn(f64) -> f64,
    {
        self.map_to_interval(xl, xr).map(|p| p.weight * g(p.x)).sum()
    }
}

impl Default for QuadratureRule {
    fn default() -> Self {
        Self::gauss_2()
    }
}
