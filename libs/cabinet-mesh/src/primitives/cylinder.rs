//! # Cylinder Primitive
//!
//! Y-up cylinder mesh for the adjustable feet.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a cylinder standing along +Y from `origin` (bottom center).
///
/// # Arguments
///
/// * `radius` - Cylinder radius, positive
/// * `height` - Height along Y, positive
/// * `segments` - Segments around the circumference, at least 3
/// * `origin` - Bottom center of the axis
///
/// # Example
///
/// ```rust
/// use cabinet_mesh::primitives::create_cylinder;
/// use glam::DVec3;
///
/// let leg = create_cylinder(0.02, 0.1, 16, DVec3::ZERO).unwrap();
/// assert!(!leg.is_empty());
/// ```
pub fn create_cylinder(
    radius: f64,
    height: f64,
    segments: u32,
    origin: DVec3,
) -> Result<Mesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {}",
            height
        )));
    }
    if radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {}",
            radius
        )));
    }
    if segments < MIN_SEGMENTS {
        return Err(MeshError::TooFewSegments {
            count: segments,
            min: MIN_SEGMENTS,
        });
    }

    let mut mesh = Mesh::with_capacity((2 * segments + 2) as usize, (4 * segments) as usize);

    // Ring vertices, bottom then top
    let bottom: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * f64::from(j) / f64::from(segments);
            mesh.add_vertex(origin + DVec3::new(radius * theta.cos(), 0.0, radius * theta.sin()))
        })
        .collect();
    let top: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * f64::from(j) / f64::from(segments);
            mesh.add_vertex(
                origin + DVec3::new(radius * theta.cos(), height, radius * theta.sin()),
            )
        })
        .collect();

    let bottom_center = mesh.add_vertex(origin);
    let top_center = mesh.add_vertex(origin + DVec3::new(0.0, height, 0.0));

    for j in 0..segments as usize {
        let next = (j + 1) % segments as usize;

        // Side quad (two triangles)
        mesh.add_triangle(bottom[j], bottom[next], top[next]);
        mesh.add_triangle(bottom[j], top[next], top[j]);

        // Caps
        mesh.add_triangle(bottom_center, bottom[next], bottom[j]);
        mesh.add_triangle(top_center, top[j], top[next]);
    }

    Ok(mesh)
}
