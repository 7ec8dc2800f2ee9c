//! # Mesh Data Structure
//!
//! Triangle mesh with vertices, indices, and an optional uniform color.
//! All geometry uses f64; conversion to f32 happens at the rendering
//! boundary, not here.

use glam::DVec3;

/// A triangle mesh for one or more cabinet parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    vertices: Vec<DVec3>,
    /// Triangle indices (3 per triangle).
    triangles: Vec<[u32; 3]>,
    /// Optional per-vertex colors (RGBA).
    colors: Option<Vec<[f32; 4]>>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            colors: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            colors: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
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

    /// Adds a triangle from three vertex indices.
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Vertex positions.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Triangle index triples.
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Per-vertex colors, if any were set.
    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    /// Assigns one color to every vertex.
    pub fn set_uniform_color(&mut self, color: [f32; 4]) {
        self.colors = Some(vec![color; self.vertices.len()]);
    }

    /// Translates every vertex by the given offset.
    pub fn translate(&mut self, offset: DVec3) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Appends another mesh, remapping its indices.
    pub fn merge(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        for [a, b, c] in &other.triangles {
            self.triangles.push([a + base, b + base, c + base]);
        }
        if let Some(other_colors) = &other.colors {
            let colors = self
                .colors
                .get_or_insert_with(|| vec![[1.0, 1.0, 1.0, 1.0]; base as usize]);
            colors.extend_from_slice(other_colors);
        } else if let Some(colors) = &mut self.colors {
            colors.extend(std::iter::repeat([1.0, 1.0, 1.0, 1.0]).take(other.vertices.len()));
        }
    }

    /// Axis-aligned bounding box (min, max). Zero boxes for empty meshes.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for v in &self.vertices {
            min = min.min(*v);
            max = max.max(*v);
        }
        if self.vertices.is_empty() {
            (DVec3::ZERO, DVec3::ZERO)
        } else {
            (min, max)
        }
    }
}
