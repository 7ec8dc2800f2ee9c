//! # Cuboid Primitive
//!
//! Axis-aligned box mesh, the solid behind every panel, band, and front.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned box with its minimum corner at `origin`.
///
/// # Arguments
///
/// * `size` - Extents along X/Y/Z, all positive
/// * `origin` - Minimum corner
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use cabinet_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::new(0.6, 0.018, 0.51), DVec3::ZERO).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cuboid(size: DVec3, origin: DVec3) -> Result<Mesh, MeshError> {
    if size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cuboid size must be positive: {:?}",
            size
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);

    let min = origin;
    let max = origin + size;

    // Bottom face (y = min.y)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));

    // Top face (y = max.y)
    let v4 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // 12 triangles, counter-clockwise winding for outward normals

    // Bottom (facing -Y)
    mesh.add_triangle(v0, v1, v2);
    mesh.add_triangle(v0, v2, v3);

    // Top (facing +Y)
    mesh.add_triangle(v4, v7, v6);
    mesh.add_triangle(v4, v6, v5);

    // Back (facing -Z)
    mesh.add_triangle(v0, v4, v5);
    mesh.add_triangle(v0, v5, v1);

    // Front (facing +Z)
    mesh.add_triangle(v3, v2, v6);
    mesh.add_triangle(v3, v6, v7);

    // Left (facing -X)
    mesh.add_triangle(v0, v3, v7);
    mesh.add_triangle(v0, v7, v4);

    // Right (facing +X)
    mesh.add_triangle(v1, v5, v6);
    mesh.add_triangle(v1, v6, v2);

    Ok(mesh)
}
