//! # Traverse Builder
//!
//! Builds the top structure of the carcass: a solid slab, one or two
//! stiffening traverses, or nothing. Traverses replace the top panel to
//! save material or clear space for a range hood or sink.

use crate::carcass::{envelope_depth, horizontal_depth, horizontal_span, ConstructionRule};
use crate::error::BuildError;
use crate::model::{Panel, PanelRole};
use cabinet_spec::{CabinetSpec, TopPanelSpec, TraverseOrientation, TraverseSpec};
use glam::DVec3;

/// Which carcass edge a traverse hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraverseEnd {
    Front,
    Back,
}

/// One traverse panel at the given end of the carcass top.
///
/// Vertical rails stand upright, flush with the top edge, one board thick
/// along Z. Horizontal rails lie flat at the very top, one board thick
/// along Y. The offset is measured inward from the front plane (which
/// honors the flush-front extension) or from the inside face of the back
/// sheet.
fn build_traverse(
    spec: &CabinetSpec,
    rule: &ConstructionRule,
    tr: &TraverseSpec,
    end: TraverseEnd,
) -> Result<Panel, BuildError> {
    let t = spec.board_thickness;
    let (x, w) = horizontal_span(spec, rule.top_spans_width);

    let (dims, z_extent) = match tr.orientation {
        TraverseOrientation::Vertical => (DVec3::new(w, tr.width, t), t),
        TraverseOrientation::Horizontal => (DVec3::new(w, t, tr.width), tr.width),
    };

    if tr.offset < 0.0 || tr.width <= 0.0 {
        return Err(BuildError::traverse(format!(
            "offset must be non-negative and width positive, got offset={}, width={}",
            tr.offset, tr.width
        )));
    }
    if tr.offset + z_extent > spec.depth {
        return Err(BuildError::traverse(format!(
            "traverse does not fit the carcass depth: offset={} + extent={} > depth={}",
            tr.offset, z_extent, spec.depth
        )));
    }

    let front_plane = if rule.flush_front {
        envelope_depth(spec)
    } else {
        spec.depth
    };
    let z = match end {
        TraverseEnd::Front => front_plane - tr.offset - z_extent,
        TraverseEnd::Back => spec.back_thickness + tr.offset,
    };
    let y = match tr.orientation {
        TraverseOrientation::Vertical => spec.height - tr.width,
        TraverseOrientation::Horizontal => spec.height - t,
    };

    Ok(Panel::new(PanelRole::Traverse, dims, DVec3::new(x, y, z)))
}

/// Builds the top structure for the configured top panel variant.
pub fn build_top(spec: &CabinetSpec, rule: &ConstructionRule) -> Result<Vec<Panel>, BuildError> {
    match &spec.top_panel {
        TopPanelSpec::Full => {
            let t = spec.board_thickness;
            let (x, w) = horizontal_span(spec, rule.top_spans_width);
            let (z, d) = horizontal_depth(spec, rule);
            Ok(vec![Panel::new(
                PanelRole::Top,
                DVec3::new(w, t, d),
                DVec3::new(x, spec.height - t, z),
            )])
        }
        TopPanelSpec::None => Ok(Vec::new()),
        TopPanelSpec::FrontTraverse { traverse } => {
            Ok(vec![build_traverse(spec, rule, traverse, TraverseEnd::Front)?])
        }
        TopPanelSpec::BackTraverse { traverse } => {
            Ok(vec![build_traverse(spec, rule, traverse, TraverseEnd::Back)?])
        }
        TopPanelSpec::TwoTraverses { front, back } => Ok(vec![
            build_traverse(spec, rule, front, TraverseEnd::Front)?,
            build_traverse(spec, rule, back, TraverseEnd::Back)?,
        ]),
    }
}
