//! # Side Panel Extender
//!
//! Optional add-ons outside the carcass: decor side panels covering the
//! whole cabinet flank (legs included), and blenda filler strips closing
//! the visual gap beside the fronts.

use crate::carcass::envelope_depth;
use crate::front::Opening;
use crate::model::{Panel, PanelRole};
use cabinet_spec::{CabinetSpec, SideExtension};
use glam::DVec3;

/// Which flank an extension hangs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flank {
    Left,
    Right,
}

fn build_side(
    spec: &CabinetSpec,
    opening: &Opening,
    ext: &SideExtension,
    flank: Flank,
    out: &mut Vec<Panel>,
) {
    let t = spec.board_thickness;

    if ext.panel {
        // Decor panel covers carcass and legs, full envelope depth
        let dims = DVec3::new(t, spec.height + spec.leg_height, envelope_depth(spec));
        let x = match flank {
            Flank::Left => -t,
            Flank::Right => spec.width,
        };
        out.push(Panel::new(
            PanelRole::SidePanel,
            dims,
            DVec3::new(x, -spec.leg_height, 0.0),
        ));
    }

    if let Some(width) = ext.blenda {
        if width > 0.0 {
            // Filler strip beside the fronts, on the front plane
            let dims = DVec3::new(width, opening.height, t);
            let x = match flank {
                Flank::Left => -width,
                Flank::Right => spec.width,
            };
            out.push(Panel::new(
                PanelRole::Blenda,
                dims,
                DVec3::new(x, opening.y, opening.face_z),
            ));
        }
    }
}

/// Builds all configured side extensions.
pub fn build_extensions(spec: &CabinetSpec, opening: &Opening) -> Vec<Panel> {
    let mut panels = Vec::new();
    build_side(spec, opening, &spec.extensions.left, Flank::Left, &mut panels);
    build_side(spec, opening, &spec.extensions.right, Flank::Right, &mut panels);
    panels
}
