//! Body mesh for the instanced particles.
//!
//! Each particle renders the same tiny icosahedron, flat-shaded. The radius
//! comes from the configuration; changing it swaps the mesh buffer, nothing
//! else.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::particles::MIN_RADIUS;

/// One mesh vertex: position plus flat face normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

// 20 faces over the canonical 12-vertex ordering
const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Flat-shaded icosahedron of the given radius as a triangle list.
///
/// 20 faces, 60 vertices; every vertex sits on the sphere of `radius`.
/// Non-positive radii clamp the same way particle generation does.
pub fn icosahedron(radius: f32) -> Vec<Vertex> {
    let radius = radius.max(MIN_RADIUS);

    // Golden ratio
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let corners = [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ]
    .map(|v| v.normalize() * radius);

    let mut vertices = Vec::with_capacity(FACES.len() * 3);
    for [a, b, c] in FACES {
        let (va, vb, vc) = (corners[a], corners[b], corners[c]);
        // Faces are equilateral, so the normalized centroid is the face normal
        let normal = ((va + vb + vc) / 3.0).normalize();
        for v in [va, vb, vc] {
            vertices.push(Vertex {
                position: v.to_array(),
                normal: normal.to_array(),
            });
        }
    }
    vertices
}
