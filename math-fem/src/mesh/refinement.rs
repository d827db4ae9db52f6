//! Mesh refinement (h-refinement)
//!
//! Uniform bisection: every element is split at its midpoint, halving h.
//! Used to build sequences of nested meshes for convergence studies.

use super::types::{Mesh1d, MeshError};

/// Split every element of `mesh` at its midpoint
///
/// A mesh of N nodes becomes one of 2N - 1 nodes. Existing nodes keep
/// their coordinates. Fails when an element is too narrow to split, i.e.
/// its midpoint rounds onto one of its end points.
pub fn refine_uniform(mesh: &Mesh1d) -> Result<Mesh1d, MeshError> {
    let mut nodes = Vec::with_capacity(2 * mesh.num_elements() + 1);
    for (left, right) in mesh.elements() {
        nodes.push(left);
        nodes.push(0.5 * (left + right));
    }
    nodes.push(mesh.node(mesh.num_nodes() - 1));

    Mesh1d::new(nodes)
}

/// `mesh` followed by `levels` successive uniform refinements
pub fn refinement_sequence(mesh: &Mesh1d, levels: usize) -> Result<Vec<Mesh1d>, MeshError> {
    let mut meshes = Vec::with_capacity(levels + 1);
    meshes.push(mesh.clone());
    for _ in 0..levels {
        let next = refine_uniform(&meshes[meshes.len() - 1])?;
        meshes.push(next);
    }
    Ok(meshes)
}
