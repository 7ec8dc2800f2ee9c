//! # Model Tessellation
//!
//! Turns a `CabinetModel` into per-part triangle meshes. Parts stay in
//! separate per-group lists, index-aligned with the model, so the scene
//! assembler can attach pick metadata per front and restyle roles without
//! touching geometry.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{create_cuboid, create_cylinder};
use cabinet_geometry::{CabinetModel, EdgeBand, FrontGroup, Leg, Panel, PanelRole};
use config::constants::LEG_SEGMENTS;

/// Flat decor tint per panel role (RGBA).
fn role_color(role: PanelRole) -> [f32; 4] {
    match role {
        PanelRole::Back => [0.82, 0.78, 0.72, 1.0],
        PanelRole::Shelf => [0.88, 0.84, 0.78, 1.0],
        PanelRole::Traverse => [0.80, 0.74, 0.66, 1.0],
        PanelRole::SidePanel | PanelRole::Blenda => [0.90, 0.88, 0.85, 1.0],
        _ => [0.85, 0.80, 0.73, 1.0],
    }
}

const BAND_COLOR: [f32; 4] = [0.55, 0.45, 0.35, 1.0];
const FRONT_COLOR: [f32; 4] = [0.93, 0.92, 0.89, 1.0];
const HANDLE_COLOR: [f32; 4] = [0.35, 0.35, 0.38, 1.0];
const LEG_COLOR: [f32; 4] = [0.30, 0.30, 0.30, 1.0];

/// Tessellated cabinet, one mesh list per part group.
///
/// `fronts` is index-aligned with `CabinetModel::fronts` (and empty when
/// the model's `show_fronts` hint is off).
#[derive(Debug, Clone, Default)]
pub struct CabinetMeshes {
    pub panels: Vec<Mesh>,
    pub bands: Vec<Mesh>,
    pub fronts: Vec<Mesh>,
    pub legs: Vec<Mesh>,
}

impl CabinetMeshes {
    /// Total triangle count across every group.
    pub fn triangle_count(&self) -> usize {
        [&self.panels, &self.bands, &self.fronts, &self.legs]
            .into_iter()
            .flatten()
            .map(Mesh::triangle_count)
            .sum()
    }
}

fn panel_mesh(panel: &Panel) -> Result<Mesh, MeshError> {
    let mut mesh = create_cuboid(panel.dims, panel.pos)?;
    mesh.set_uniform_color(role_color(panel.role));
    Ok(mesh)
}

fn band_mesh(band: &EdgeBand) -> Result<Mesh, MeshError> {
    let mut mesh = create_cuboid(band.dims, band.pos)?;
    mesh.set_uniform_color(BAND_COLOR);
    Ok(mesh)
}

/// One front in its closed pose, handle merged in. The per-frame
/// `FrontPose` transform is applied by the scene assembler, not baked
/// into the mesh.
fn front_mesh(front: &FrontGroup) -> Result<Mesh, MeshError> {
    let mut mesh = create_cuboid(front.dims, front.closed_min_corner())?;
    mesh.set_uniform_color(FRONT_COLOR);
    if let Some(handle) = &front.handle {
        let mut bar = create_cuboid(handle.dims, handle.pos)?;
        bar.set_uniform_color(HANDLE_COLOR);
        mesh.merge(&bar);
    }
    Ok(mesh)
}

fn leg_mesh(leg: &Leg) -> Result<Mesh, MeshError> {
    let mut mesh = create_cylinder(leg.radius, leg.height, LEG_SEGMENTS, leg.pos)?;
    mesh.set_uniform_color(LEG_COLOR);
    Ok(mesh)
}

/// Tessellates every part of a cabinet model.
pub fn model_to_meshes(model: &CabinetModel) -> Result<CabinetMeshes, MeshError> {
    let mut meshes = CabinetMeshes::default();
    for panel in &model.panels {
        meshes.panels.push(panel_mesh(panel)?);
    }
    for band in &model.bands {
        meshes.bands.push(band_mesh(band)?);
    }
    if model.show_fronts {
        for front in &model.fronts {
            meshes.fronts.push(front_mesh(front)?);
        }
    }
    for leg in &model.legs {
        meshes.legs.push(leg_mesh(leg)?);
    }
    Ok(meshes)
}
