//! # Edge-Band Placer
//!
//! Emits thin ABS strips flush against the flagged faces of a panel. One
//! strip per true flag, placed per physical edge of the panel — never
//! duplicated onto neighbouring panels.

use crate::model::{EdgeBand, Panel, PanelRole};
use cabinet_spec::{BandingSpec, Edge, EdgeFlags};
use config::constants::BAND_THICKNESS;

/// Axis index and outward sign for an edge. The single lookup every band
/// placement goes through: front/right/top offset positive, back/left/
/// bottom negative.
pub fn offset_for_edge(edge: Edge) -> (usize, f64) {
    match edge {
        Edge::Front => (2, 1.0),
        Edge::Back => (2, -1.0),
        Edge::Left => (0, -1.0),
        Edge::Right => (0, 1.0),
        Edge::Top => (1, 1.0),
        Edge::Bottom => (1, -1.0),
    }
}

/// The banding strip for one edge of one panel.
fn band_for_edge(panel: &Panel, edge: Edge) -> EdgeBand {
    let (axis, sign) = offset_for_edge(edge);
    let mut dims = panel.dims;
    dims[axis] = BAND_THICKNESS;
    let mut pos = panel.pos;
    pos[axis] = if sign > 0.0 {
        panel.pos[axis] + panel.dims[axis]
    } else {
        panel.pos[axis] - BAND_THICKNESS
    };
    EdgeBand {
        parent: panel.role,
        edge,
        dims,
        pos,
    }
}

/// All strips requested by a panel's flag set.
pub fn bands_for_panel(panel: &Panel, flags: EdgeFlags) -> Vec<EdgeBand> {
    Edge::ALL
        .iter()
        .filter(|edge| flags.get(**edge))
        .map(|edge| band_for_edge(panel, *edge))
        .collect()
}

/// The flag set a banding spec assigns to a panel role. Roles without a
/// configurable set (dividers, add-ons) are never banded.
pub fn flags_for_role(banding: &BandingSpec, role: PanelRole) -> EdgeFlags {
    match role {
        PanelRole::LeftSide => banding.left_side,
        PanelRole::RightSide => banding.right_side,
        PanelRole::Shelf => banding.shelf,
        PanelRole::Traverse => banding.traverse,
        PanelRole::Back => banding.back,
        PanelRole::Top => banding.top_panel,
        PanelRole::Bottom => banding.bottom_panel,
        PanelRole::Divider | PanelRole::SidePanel | PanelRole::Blenda => EdgeFlags::default(),
    }
}

/// Strips for every panel in the set, per the banding spec.
pub fn place_bands(panels: &[Panel], banding: &BandingSpec) -> Vec<EdgeBand> {
    panels
        .iter()
        .flat_map(|panel| bands_for_panel(panel, flags_for_role(banding, panel.role)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::EPSILON;
    use glam::DVec3;

    fn side_panel() -> Panel {
        Panel::new(
            PanelRole::LeftSide,
            DVec3::new(0.018, 0.72, 0.53),
            DVec3::new(0.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_no_flags_no_bands() {
        assert!(bands_for_panel(&side_panel(), EdgeFlags::default()).is_empty());
    }

    #[test]
    fn test_front_band_matches_panel_face() {
        let panel = side_panel();
        let bands = bands_for_panel(&panel, EdgeFlags::FRONT_ONLY);
        assert_eq!(bands.len(), 1);
        let band = &bands[0];
        // In-plane dimensions equal the panel's, thickness is fixed
        assert_eq!(band.dims.x, panel.dims.x);
        assert_eq!(band.dims.y, panel.dims.y);
        assert_eq!(band.dims.z, BAND_THICKNESS);
        // Flush against the front face, extending outward
        assert!((band.pos.z - panel.max_corner().z).abs() < EPSILON);
    }

    #[test]
    fn test_negative_edges_offset_backward() {
        let panel = side_panel();
        let flags = EdgeFlags {
            bottom: true,
            ..EdgeFlags::default()
        };
        let band = bands_for_panel(&panel, flags)[0];
        assert!((band.pos.y - (panel.pos.y - BAND_THICKNESS)).abs() < EPSILON);
        assert_eq!(band.dims.y, BAND_THICKNESS);
    }

    #[test]
    fn test_strip_count_equals_flag_count() {
        let flags = EdgeFlags {
            front: true,
            top: true,
            bottom: true,
            ..EdgeFlags::default()
        };
        assert_eq!(bands_for_panel(&side_panel(), flags).len(), flags.count());
    }

    #[test]
    fn test_banding_is_per_panel_not_duplicated() {
        let panels = vec![
            side_panel(),
            Panel::new(
                PanelRole::RightSide,
                DVec3::new(0.018, 0.72, 0.53),
                DVec3::new(0.582, 0.0, 0.0),
            ),
            Panel::new(
                PanelRole::Bottom,
                DVec3::new(0.564, 0.018, 0.51),
                DVec3::new(0.018, 0.0, 0.0),
            ),
        ];
        let banding = BandingSpec {
            left_side: EdgeFlags::FRONT_ONLY,
            right_side: EdgeFlags::FRONT_ONLY,
            ..BandingSpec::default()
        };
        let bands = place_bands(&panels, &banding);
        // One strip per side panel, none on the bottom
        assert_eq!(bands.len(), 2);
        assert!(bands.iter().all(|b| b.parent != PanelRole::Bottom));
    }
}
