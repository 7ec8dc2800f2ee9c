//! # Carcass Builder
//!
//! Computes side/top/bottom/back panel dimensions and offsets from the
//! construction rule table. Each carcass variant is one table row; panel
//! math reads the row, never the variant tag.

use crate::model::{Panel, PanelRole};
use cabinet_spec::{BackPanelStyle, BottomPanelStyle, CabinetSpec, CarcassType};
use config::constants::FRONT_REVEAL;
use glam::DVec3;

// =============================================================================
// CONSTRUCTION RULE TABLE
// =============================================================================

/// Which board thicknesses are removed from the side panels, and where the
/// remaining side sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideReduction {
    /// Sides span the full height.
    None,
    /// Sides shortened under a full-width top.
    Top,
    /// Sides shortened on a full-width bottom.
    Bottom,
    /// Sides shortened between full-width top and bottom.
    Both,
}

impl SideReduction {
    /// Number of board thicknesses removed from the side height.
    pub fn board_count(self) -> u32 {
        match self {
            SideReduction::None => 0,
            SideReduction::Top | SideReduction::Bottom => 1,
            SideReduction::Both => 2,
        }
    }

    /// Whether the side is lifted off the floor plane by one board.
    pub fn lifts_side(self) -> bool {
        matches!(self, SideReduction::Bottom | SideReduction::Both)
    }
}

/// One row of the construction rule table.
///
/// The three derived quantities of spec'd carcass behavior: how the sides
/// are shortened, which horizontals span the full outer width, and whether
/// the horizontals run forward flush with the front plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructionRule {
    pub side_reduction: SideReduction,
    /// Top panel spans the full width (sides sit under it) instead of
    /// running between the sides.
    pub top_spans_width: bool,
    /// Bottom panel spans the full width (sides sit on it).
    pub bottom_spans_width: bool,
    /// Extend top/bottom depth by one board thickness plus the front
    /// reveal, so their front edge is flush with the fronts.
    pub flush_front: bool,
}

impl ConstructionRule {
    /// Height removed from the front opening for this construction, in
    /// meters: one board thickness per shortened side end.
    pub fn front_height_reduction(&self, board_thickness: f64) -> f64 {
        f64::from(self.side_reduction.board_count()) * board_thickness
    }
}

/// The rule row for a carcass variant. Adding a variant means adding one
/// row here, nothing else.
pub fn rule_for(carcass: CarcassType) -> ConstructionRule {
    match carcass {
        CarcassType::FullSides => ConstructionRule {
            side_reduction: SideReduction::None,
            top_spans_width: false,
            bottom_spans_width: false,
            flush_front: false,
        },
        CarcassType::FullHorizontals => ConstructionRule {
            side_reduction: SideReduction::Both,
            top_spans_width: true,
            bottom_spans_width: true,
            flush_front: false,
        },
        CarcassType::FullBottom => ConstructionRule {
            side_reduction: SideReduction::Bottom,
            top_spans_width: false,
            bottom_spans_width: true,
            flush_front: false,
        },
        CarcassType::FullTop => ConstructionRule {
            side_reduction: SideReduction::Top,
            top_spans_width: true,
            bottom_spans_width: false,
            flush_front: false,
        },
        CarcassType::FlushFrontBase => ConstructionRule {
            side_reduction: SideReduction::None,
            top_spans_width: false,
            bottom_spans_width: false,
            flush_front: true,
        },
        CarcassType::FlushFrontHorizontals => ConstructionRule {
            side_reduction: SideReduction::Both,
            top_spans_width: true,
            bottom_spans_width: true,
            flush_front: true,
        },
    }
}

// =============================================================================
// SHARED SPANS
// =============================================================================

/// Total depth of the cabinet envelope: body depth, front panel, reveal.
pub fn envelope_depth(spec: &CabinetSpec) -> f64 {
    spec.depth + spec.board_thickness + FRONT_REVEAL
}

/// X origin and width of a horizontal panel, per its span rule.
pub(crate) fn horizontal_span(spec: &CabinetSpec, spans_width: bool) -> (f64, f64) {
    if spans_width {
        (0.0, spec.width)
    } else {
        (spec.board_thickness, spec.width - 2.0 * spec.board_thickness)
    }
}

/// Z origin and depth of a horizontal panel: body depth, or the full
/// envelope for flush-front constructions.
pub(crate) fn horizontal_depth(spec: &CabinetSpec, rule: &ConstructionRule) -> (f64, f64) {
    if rule.flush_front {
        (0.0, envelope_depth(spec))
    } else {
        (0.0, spec.depth)
    }
}

// =============================================================================
// CARCASS PANELS
// =============================================================================

/// Builds sides, bottom, back, and shelves. The top structure (slab or
/// traverses) is built by the traverse module.
pub fn build_carcass(spec: &CabinetSpec, rule: &ConstructionRule) -> Vec<Panel> {
    let t = spec.board_thickness;
    let tb = spec.back_thickness;
    let (w, h) = (spec.width, spec.height);
    let depth = envelope_depth(spec);

    let mut panels = Vec::new();

    // Sides always span the full depth envelope; the fronts sit inset
    // between them behind a 2 mm reveal.
    let side_h = h - f64::from(rule.side_reduction.board_count()) * t;
    let side_y = if rule.side_reduction.lifts_side() { t } else { 0.0 };
    let side_dims = DVec3::new(t, side_h, depth);
    panels.push(Panel::new(
        PanelRole::LeftSide,
        side_dims,
        DVec3::new(0.0, side_y, 0.0),
    ));
    panels.push(Panel::new(
        PanelRole::RightSide,
        side_dims,
        DVec3::new(w - t, side_y, 0.0),
    ));

    if spec.bottom_panel == BottomPanelStyle::Full {
        let (x, bw) = horizontal_span(spec, rule.bottom_spans_width);
        let (z, d) = horizontal_depth(spec, rule);
        panels.push(Panel::new(
            PanelRole::Bottom,
            DVec3::new(bw, t, d),
            DVec3::new(x, 0.0, z),
        ));
    }

    match spec.back_panel {
        BackPanelStyle::Full => {
            panels.push(Panel::new(
                PanelRole::Back,
                DVec3::new(w, h, tb),
                DVec3::ZERO,
            ));
        }
        BackPanelStyle::Split => {
            let half = DVec3::new(w, h / 2.0, tb);
            panels.push(Panel::new(PanelRole::Back, half, DVec3::ZERO));
            panels.push(Panel::new(
                PanelRole::Back,
                half,
                DVec3::new(0.0, h / 2.0, 0.0),
            ));
        }
        BackPanelStyle::None => {}
    }

    // Shelves sit between the sides, clear of the back sheet, evenly
    // spaced over the interior height.
    let shelf_dims = DVec3::new(w - 2.0 * t, t, spec.depth - tb);
    let interior_h = h - 2.0 * t;
    for i in 1..=spec.shelves {
        let y_center = t + f64::from(i) * interior_h / f64::from(spec.shelves + 1);
        panels.push(Panel::new(
            PanelRole::Shelf,
            shelf_dims,
            DVec3::new(t, y_center - t / 2.0, tb),
        ));
    }

    panels
}
