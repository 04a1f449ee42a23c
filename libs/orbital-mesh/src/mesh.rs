//! # Quad Mesh
//!
//! Vertex positions plus quadrilateral faces, indexed from zero in memory.
//! The OBJ writer shifts indices to one-based on output.

use crate::error::MeshError;
use glam::{DMat3, DVec3};

/// A quadrilateral mesh.
///
/// # Example
///
/// ```rust
/// use orbital_mesh::QuadMesh;
/// use glam::DVec3;
///
/// let mut mesh = QuadMesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// let d = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_quad([a, b, c, d]);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadMesh {
    vertices: Vec<DVec3>,
    quads: Vec<[u32; 4]>,
    /// Vertex count at the time each quad was added
    emitted: Vec<u32>,
}

impl QuadMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, quad_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            quads: Vec::with_capacity(quad_count),
            emitted: Vec::with_capacity(quad_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of quads.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a quad by vertex indices, corners in winding order.
    pub fn add_quad(&mut self, quad: [u32; 4]) {
        self.quads.push(quad);
        self.emitted.push(self.vertices.len() as u32);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the quads.
    #[inline]
    pub fn quads(&self) -> &[[u32; 4]] {
        &self.quads
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or two zero vectors for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Applies a linear map to every vertex.
    pub fn transform(&mut self, matrix: &DMat3) {
        for v in &mut self.vertices {
            *v = *matrix * *v;
        }
    }

    /// Validates face indices.
    ///
    /// Checks:
    /// - every index is below the vertex count
    /// - no quad references a vertex added after the quad itself
    ///
    /// Coincident or collapsed corners are allowed; a zero wall radius
    /// legitimately produces them.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len() as u32;

        for (face, (quad, &emitted)) in self.quads.iter().zip(&self.emitted).enumerate() {
            if let Some(&index) = quad.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {face} references vertex {index} of {vertex_count}"
                )));
            }
            if let Some(&index) = quad.iter().find(|&&i| i >= emitted) {
                return Err(MeshError::invalid_topology(format!(
                    "face {face} references vertex {index} before it was written"
                )));
            }
        }

        Ok(())
    }
}
