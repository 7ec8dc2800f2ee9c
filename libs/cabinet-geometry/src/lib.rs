//! # Cabinet Geometry
//!
//! The parametric carcass geometry engine: a pure function that turns a
//! declarative cabinet specification into a complete solid-part model,
//! plus the open/close animation controller that drives it.
//!
//! ## Architecture
//!
//! ```text
//! CabinetSpec → carcass rule table → panels
//!             → traverse builder   → top structure
//!             → edge-band placer   → bands
//!             → front layout       → doors/drawers (+ divider)
//!             → leg placer         → feet
//!                                  ⇒ CabinetModel
//! ```
//!
//! The same `build_cabinet` call backs the live 3D preview, the main
//! scene, and the technical drawing, so all three stay consistent by
//! construction.
//!
//! ## Example
//!
//! ```rust
//! use cabinet_geometry::build_cabinet;
//! use cabinet_spec::CabinetSpec;
//!
//! let model = build_cabinet(&CabinetSpec::default()).unwrap();
//! assert_eq!(model.fronts.len(), 1);
//! assert_eq!(model.open_states.len(), model.fronts.len());
//! ```

pub mod animation;
pub mod bands;
pub mod carcass;
pub mod error;
pub mod extensions;
pub mod front;
pub mod legs;
pub mod model;
pub mod traverse;

pub use animation::{AnimationController, FrontPose};
pub use carcass::{envelope_depth, rule_for, ConstructionRule, SideReduction};
pub use error::BuildError;
pub use front::{front_opening, FrontLayout, Opening};
pub use model::{
    CabinetModel, EdgeBand, FrontGroup, FrontKind, Handle, HingeSide, Leg, Panel, PanelRole,
};

use cabinet_spec::CabinetSpec;
use config::constants::EPSILON;

/// Validates the spec's scalar inputs. Fail fast: no partial model.
fn validate(spec: &CabinetSpec) -> Result<(), BuildError> {
    for (name, value) in [
        ("width", spec.width),
        ("height", spec.height),
        ("depth", spec.depth),
    ] {
        if value <= EPSILON {
            return Err(BuildError::dimensions(format!(
                "{name} must be positive, got {value}"
            )));
        }
    }
    if spec.board_thickness <= EPSILON {
        return Err(BuildError::thickness(format!(
            "board thickness must be positive, got {}",
            spec.board_thickness
        )));
    }
    if spec.back_thickness <= EPSILON {
        return Err(BuildError::thickness(format!(
            "back thickness must be positive, got {}",
            spec.back_thickness
        )));
    }
    Ok(())
}

/// Builds the complete solid-part model for a cabinet specification.
///
/// Pure and synchronous: the same spec always yields the same model, and
/// no state is kept between calls. Animation state in the returned model
/// starts closed; callers that want continuity across rebuilds carry an
/// [`AnimationController`] over.
///
/// # Errors
///
/// Fails on non-positive dimensions or thicknesses, traverses that do not
/// fit the carcass, and front layouts the opening cannot hold.
pub fn build_cabinet(spec: &CabinetSpec) -> Result<CabinetModel, BuildError> {
    validate(spec)?;

    let rule = carcass::rule_for(spec.carcass);

    let mut panels = carcass::build_carcass(spec, &rule);
    panels.extend(traverse::build_top(spec, &rule)?);

    let layout = front::build_fronts(spec, &rule)?;
    if let Some(divider) = layout.divider {
        panels.push(divider);
    }
    panels.extend(extensions::build_extensions(spec, &layout.opening));

    let bands = if spec.display.show_edges {
        bands::place_bands(&panels, &spec.banding)
    } else {
        Vec::new()
    };

    let legs = legs::place_legs(spec);
    let front_count = layout.fronts.len();

    Ok(CabinetModel {
        panels,
        bands,
        fronts: layout.fronts,
        legs,
        open_states: vec![false; front_count],
        open_progress: vec![0.0; front_count],
        open_speed: spec.open_speed,
        hangers: legs::hanger_count(spec),
        gaps: spec.gaps,
        board_thickness: spec.board_thickness,
        front_heights: layout.heights,
        show_fronts: spec.display.show_fronts,
    })
}

#[cfg(test)]
mod tests;
