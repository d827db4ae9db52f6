//! Gauss-Legendre quadrature points and weights
//!
//! Points and weights on the reference interval [-1, 1]. The 2-point rule
//! used by the assembler is a fixed table; other orders are computed from
//! the roots of the Legendre polynomials.

use std::f64::consts::PI;

/// Positive abscissa of the 2-point Gauss-Legendre rule, 1/√3
#[allow(clippy::excessive_precision)]
pub const GAUSS_2_ABSCISSA: f64 = 0.577350269189625764509148780502;

/// The 2-point rule used for every element: exact for polynomials up to degree 3
pub const GAUSS_2_POINT: [QuadraturePoint; 2] = [
    QuadraturePoint::new(-GAUSS_2_ABSCISSA, 1.0),
    QuadraturePoint::new(GAUSS_2_ABSCISSA, 1.0),
];

/// Largest number of points accepted from configuration
pub const MAX_QUADRATURE_ORDER: usize = 10;

const NEWTON_MAX_ITERATIONS: usize = 100;

/// A single quadrature point with weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraturePoint {
    /// Reference coordinate in [-1, 1]
    pub xi: f64,
    /// Integration weight
    pub weight: f64,
}

impl QuadraturePoint {
    pub const fn new(xi: f64, weight: f64) -> Self {
        Self { xi, weight }
    }
}

/// 1D Gauss-Legendre quadrature on [-1, 1] with `order` points
///
/// Points are sorted by abscissa. Order 0 is treated as 1.
pub fn gauss_legendre_1d(order: usize) -> Vec<QuadraturePoint> {
    match order {
        0 | 1 => vec![QuadraturePoint::new(0.0, 2.0)],
        2 => GAUSS_2_POINT.to_vec(),
        n => legendre_roots(n),
    }
}

/// P_n(x) and P_n'(x) by the three-term recurrence
fn legendre(n: usize, x: f64) -> (f64, f64) {
    let mut p_prev = 1.0;
    let mut p = x;
    for k in 2..=n {
        let k = k as f64;
        let next = ((2.0 * k - 1.0) * x * p - (k - 1.0) * p_prev) / k;
        p_prev = p;
        p = next;
    }
    let dp = n as f64 * (x * p - p_prev) / (x * x - 1.0);
    (p, dp)
}

fn legendre_roots(n: usize) -> Vec<QuadraturePoint> {
    let mut points = Vec::with_capacity(n);

    for i in 0..n / 2 {
        let mut x = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
        for _ in 0..NEWTON_MAX_ITERATIONS {
            let (p, dp) = legendre(n, x);
            let dx = p / dp;
            x -= dx;
            if dx.abs() < 1e-15 {
                break;
            }
        }
        let (_, dp) = legendre(n, x);
        let weight = 2.0 / ((1.0 - x * x) * dp * dp);
        points.push(QuadraturePoint::new(-x, weight));
        points.push(QuadraturePoint::new(x, weight));
    }

    if n % 2 == 1 {
        let (_, dp) = legendre(n, 0.0);
        points.push(QuadraturePoint::new(0.0, 2.0 / (dp * dp)));
    }

    points.sort_by(|a, b| a.xi.total_cmp(&b.xi));
    points
}
