//! Mesh type for 1D finite element analysis
//!
//! A mesh is an ordered list of node coordinates on [0, 1]. Element `e`
//! spans `[x[e], x[e + 1]]`.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

/// Absolute tolerance used when checking that the mesh spans [0, 1]
pub const ENDPOINT_TOLERANCE: f64 = 1e-12;

/// Mesh validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("Mesh needs at least {min} nodes, got {got}")]
    TooFewNodes { min: usize, got: usize },
    #[error("Node {index} is not finite: {value}")]
    NonFiniteNode { index: usize, value: f64 },
    #[error("Nodes must be strictly increasing: x[{index}] = {left} is not below x[{next}] = {right}")]
    NotStrictlyIncreasing {
        index: usize,
        next: usize,
        left: f64,
        right: f64,
    },
    #[error("Mesh must span [0, 1], got [{first}, {last}]")]
    BadEndpoints { first: f64, last: f64 },
}

/// Strictly increasing node coordinates with `x[0] = 0` and `x[N-1] = 1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Mesh1d {
    nodes: Vec<f64>,
}

impl Mesh1d {
    /// Smallest accepted node count (a single element, no interior node)
    pub const MIN_NODES: usize = 2;

    /// Create a mesh, checking node count, ordering and endpoints
    pub fn new(nodes: Vec<f64>) -> Result<Self, MeshError> {
        if nodes.len() < Self::MIN_NODES {
            return Err(MeshError::TooFewNodes {
                min: Self::MIN_NODES,
                got: nodes.len(),
            });
        }

        if let Some((index, &value)) = nodes.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(MeshError::NonFiniteNode { index, value });
        }

        if let Some(index) = nodes.windows(2).position(|w| w[0] >= w[1]) {
            return Err(MeshError::NotStrictlyIncreasing {
                index,
                next: index + 1,
                left: nodes[index],
                right: nodes[index + 1],
            });
        }

        let first = nodes[0];
        let last = nodes[nodes.len() - 1];
        if first.abs() > ENDPOINT_TOLERANCE || (last - 1.0).abs() > ENDPOINT_TOLERANCE {
            return Err(MeshError::BadEndpoints { first, last });
        }

        Ok(Self { nodes })
    }

    /// Number of nodes N
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements (N - 1)
    pub fn num_elements(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Node coordinates
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, i: usize) -> f64 {
        self.nodes[i]
    }

    /// Indices of interior nodes (1..N-1)
    pub fn interior_nodes(&self) -> Range<usize> {
        1..self.nodes.len() - 1
    }

    /// Width of element `e`
    pub fn element_width(&self, e: usize) -> f64 {
        self.nodes[e + 1] - self.nodes[e]
    }

    /// Largest element width (the mesh size h)
    pub fn max_element_width(&self) -> f64 {
        self.elements().map(|(l, r)| r - l).fold(0.0, f64::max)
    }

    /// Iterator over element end points `(x_left, x_right)`
    pub fn elements(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

impl TryFrom<Vec<f64>> for Mesh1d {
    type Error = MeshError;

    fn try_from(nodes: Vec<f64>) -> Result<Self, Self::Error> {
        Mesh1d::new(nodes)
    }
}

impl From<Mesh1d> for Vec<f64> {
    fn from(mesh: Mesh1d) -> Self {
        mesh.nodes
    }
}
