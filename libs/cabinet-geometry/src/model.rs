//! # Cabinet Model
//!
//! The solid-part output model. All parts are axis-aligned records with
//! fully resolved dimensions and positions, ready for a primitive factory
//! (box/cylinder) to turn into scene geometry.
//!
//! ## Conventions
//!
//! - Units: meters. Axes: X = width (left→right), Y = height (up),
//!   Z = depth (back→front).
//! - Positions are the part's **minimum corner**; `dims` extends positive
//!   along each axis.
//! - The carcass occupies `0..height` in Y; legs extend below into
//!   negative Y.

use cabinet_spec::{Edge, Gaps};
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// PANELS
// =============================================================================

/// Structural role of a panel within the cabinet.
///
/// Roles are the stable keys a scene assembler uses for materials and pick
/// metadata; nothing is ever stashed on render objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelRole {
    LeftSide,
    RightSide,
    Top,
    Bottom,
    Back,
    Shelf,
    Divider,
    Traverse,
    /// Extra decor panel outside the carcass.
    SidePanel,
    /// Filler strip beside the fronts.
    Blenda,
}

impl PanelRole {
    /// Whether this panel belongs to the carcass proper (counted in the
    /// carcass bounding box) rather than being an add-on.
    pub fn is_carcass(self) -> bool {
        !matches!(self, PanelRole::SidePanel | PanelRole::Blenda)
    }
}

/// An axis-aligned solid panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub role: PanelRole,
    /// Extents along X/Y/Z.
    pub dims: DVec3,
    /// Minimum corner.
    pub pos: DVec3,
}

impl Panel {
    pub fn new(role: PanelRole, dims: DVec3, pos: DVec3) -> Self {
        Self { role, dims, pos }
    }

    /// Maximum corner of the panel.
    pub fn max_corner(&self) -> DVec3 {
        self.pos + self.dims
    }
}

// =============================================================================
// EDGE BANDS
// =============================================================================

/// A thin edge-banding strip on one face of a parent panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeBand {
    /// Role of the panel this strip belongs to.
    pub parent: PanelRole,
    /// Which logical edge of the parent is banded.
    pub edge: Edge,
    pub dims: DVec3,
    pub pos: DVec3,
}

// =============================================================================
// FRONTS
// =============================================================================

/// Door leaf or drawer face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrontKind {
    Door,
    Drawer,
}

/// Which vertical edge of a door carries its hinges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HingeSide {
    Left,
    Right,
}

impl HingeSide {
    /// Sign of the opening rotation about the vertical pivot axis.
    ///
    /// With Y up and Z toward the viewer, a left-hinged leaf swings open
    /// through a negative Y rotation, a right-hinged leaf through a
    /// positive one.
    pub fn rotation_sign(self) -> f64 {
        match self {
            HingeSide::Left => -1.0,
            HingeSide::Right => 1.0,
        }
    }
}

/// Handle bar geometry on a front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    pub dims: DVec3,
    /// Minimum corner, in cabinet coordinates, closed pose.
    pub pos: DVec3,
}

/// One door leaf or drawer front with its kinematic anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontGroup {
    /// Stable index; animation state and pick metadata key off this.
    pub index: usize,
    pub kind: FrontKind,
    /// Front panel extents (thickness along Z).
    pub dims: DVec3,
    /// Door: pivot point at the hinge edge (bottom of the leaf, back face
    /// plane). Drawer: slide origin, the closed-pose minimum corner.
    pub origin: DVec3,
    /// Hinge side, doors only.
    pub hinge: Option<HingeSide>,
    /// Signed slide travel in meters, drawers only. Negative: the drawer
    /// moves toward +Z when opening.
    pub slide_distance: Option<f64>,
    /// Handle geometry, when enabled.
    pub handle: Option<Handle>,
}

impl FrontGroup {
    /// Minimum corner of the front panel in its closed pose.
    ///
    /// Doors pivot about `origin`; the leaf extends away from the hinge.
    pub fn closed_min_corner(&self) -> DVec3 {
        match self.hinge {
            Some(HingeSide::Right) => self.origin - DVec3::new(self.dims.x, 0.0, 0.0),
            _ => self.origin,
        }
    }
}

// =============================================================================
// LEGS
// =============================================================================

/// One cylindrical adjustable foot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub radius: f64,
    pub height: f64,
    /// Bottom center of the leg axis.
    pub pos: DVec3,
}

// =============================================================================
// CABINET MODEL
// =============================================================================

/// The complete solid-part model of one cabinet.
///
/// Produced fresh and synchronously on every spec change. `open_states`
/// and `open_progress` are indexed 1:1 with `fronts` and start closed;
/// the caller carries animation state across rebuilds if it wants
/// continuity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetModel {
    pub panels: Vec<Panel>,
    pub bands: Vec<EdgeBand>,
    pub fronts: Vec<FrontGroup>,
    pub legs: Vec<Leg>,
    /// Per-front open target, indexed 1:1 with `fronts`.
    pub open_states: Vec<bool>,
    /// Per-front animation progress in [0, 1], indexed 1:1 with `fronts`.
    pub open_progress: Vec<f64>,
    /// Per-cabinet animation approach factor, picked up by controllers
    /// seeded from this model.
    pub open_speed: f64,
    /// Wall hangers fitted (pricing input, never drawn).
    pub hangers: u32,
    /// The reveals the technical drawing renderer needs.
    pub gaps: Gaps,
    /// Uniform board thickness of this cabinet.
    pub board_thickness: f64,
    /// Resolved front heights, bottom-up (drawer mode) or the single door
    /// row height (door mode).
    pub front_heights: Vec<f64>,
    /// Scene-assembler hint: whether front panels should be rendered.
    pub show_fronts: bool,
}

impl CabinetModel {
    /// Union bounding box of the carcass panels (fronts, legs, and add-on
    /// panels excluded). `None` when the carcass has no panels at all.
    pub fn carcass_bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut bounds: Option<(DVec3, DVec3)> = None;
        for panel in self.panels.iter().filter(|p| p.role.is_carcass()) {
            let (min, max) = (panel.pos, panel.max_corner());
            bounds = Some(match bounds {
                None => (min, max),
                Some((lo, hi)) => (lo.min(min), hi.max(max)),
            });
        }
        bounds
    }

    /// Panels with the given role.
    pub fn panels_with_role(&self, role: PanelRole) -> impl Iterator<Item = &Panel> {
        self.panels.iter().filter(move |p| p.role == role)
    }

    /// Total solid-part count (panels + bands + fronts + legs).
    pub fn part_count(&self) -> usize {
        self.panels.len() + self.bands.len() + self.fronts.len() + self.legs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_max_corner() {
        let panel = Panel::new(
            PanelRole::Bottom,
            DVec3::new(0.6, 0.018, 0.5),
            DVec3::new(0.0, 0.0, 0.0),
        );
        assert_eq!(panel.max_corner(), DVec3::new(0.6, 0.018, 0.5));
    }

    #[test]
    fn test_hinge_rotation_signs_are_opposite() {
        assert_eq!(
            HingeSide::Left.rotation_sign(),
            -HingeSide::Right.rotation_sign()
        );
    }

    #[test]
    fn test_closed_min_corner_right_hinge() {
        let front = FrontGroup {
            index: 0,
            kind: FrontKind::Door,
            dims: DVec3::new(0.4, 0.7, 0.018),
            origin: DVec3::new(0.58, 0.0, 0.512),
            hinge: Some(HingeSide::Right),
            slide_distance: None,
            handle: None,
        };
        // The leaf extends away from the hinge, toward the left
        assert_eq!(front.closed_min_corner().x, 0.58 - 0.4);
    }

    #[test]
    fn test_addon_roles_excluded_from_carcass() {
        assert!(!PanelRole::SidePanel.is_carcass());
        assert!(!PanelRole::Blenda.is_carcass());
        assert!(PanelRole::Back.is_carcass());
    }
}
