//! # Front Layout Engine
//!
//! Partitions the front opening into door leaves or drawer fronts, builds
//! their pivot/slide anchors and handles, and the optional center divider.
//!
//! Fronts are inset between the side panels: their back face sits one
//! reveal ahead of the carcass body front plane, their front face flush
//! with the side panels' front edges.

use crate::carcass::ConstructionRule;
use crate::error::BuildError;
use crate::model::{FrontGroup, FrontKind, Handle, HingeSide, Panel, PanelRole};
use cabinet_spec::{CabinetSpec, DividerPosition, FrontMode};
use config::constants::{
    EPSILON, FRONT_REVEAL, HANDLE_DEPTH, HANDLE_HEIGHT, HANDLE_WIDTH, MAX_SLIDE_DISTANCE, MM,
};
use glam::DVec3;

/// Distance from a door's free edge (or a drawer's top edge) to its
/// handle.
const HANDLE_EDGE_INSET: f64 = 0.03;

// =============================================================================
// OPENING
// =============================================================================

/// The usable front area after gaps and construction reductions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opening {
    /// Left edge, in cabinet X.
    pub x: f64,
    /// Bottom edge, in cabinet Y.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Z plane of the fronts' back faces: body depth plus the reveal.
    pub face_z: f64,
}

/// Computes the front opening for a spec and its construction rule.
///
/// The opening height loses one board thickness per shortened side end
/// (spanning horizontals sit where the fronts would otherwise reach).
pub fn front_opening(spec: &CabinetSpec, rule: &ConstructionRule) -> Opening {
    let t = spec.board_thickness;
    let lift = if rule.side_reduction.lifts_side() { t } else { 0.0 };
    Opening {
        x: t + spec.gaps.left,
        y: lift + spec.gaps.bottom,
        width: spec.width - 2.0 * t - spec.gaps.left - spec.gaps.right,
        height: spec.height - rule.front_height_reduction(t) - spec.gaps.top - spec.gaps.bottom,
        face_z: spec.depth + FRONT_REVEAL,
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// The resolved front layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontLayout {
    pub fronts: Vec<FrontGroup>,
    /// Center divider panel, present only behind 3- or 4-door fronts.
    pub divider: Option<Panel>,
    /// Resolved front heights, bottom-up.
    pub heights: Vec<f64>,
    pub opening: Opening,
}

/// Splits a height into `n` equal integer-millimeter parts; the last part
/// absorbs the rounding remainder.
fn equal_mm_split(total: f64, n: usize) -> Vec<f64> {
    let total_mm = (total / MM).round() as i64;
    let base = total_mm / n as i64;
    let mut heights = vec![base as f64 * MM; n];
    heights[n - 1] = (total_mm - base * (n as i64 - 1)) as f64 * MM;
    heights
}

fn drawer_handle(opening: &Opening, t: f64, y: f64, height: f64, width: f64) -> Handle {
    let bar_w = HANDLE_WIDTH.min(0.8 * width);
    Handle {
        dims: DVec3::new(bar_w, HANDLE_HEIGHT, HANDLE_DEPTH),
        pos: DVec3::new(
            opening.x + (width - bar_w) / 2.0,
            y + height - HANDLE_EDGE_INSET,
            opening.face_z + t,
        ),
    }
}

fn door_handle(
    opening: &Opening,
    t: f64,
    left_x: f64,
    door_w: f64,
    door_h: f64,
    hinge: HingeSide,
) -> Handle {
    let bar_h = HANDLE_WIDTH.min(0.8 * door_h);
    // The bar sits near the free edge, clear of the pivot axis
    let x = match hinge {
        HingeSide::Left => left_x + door_w - HANDLE_EDGE_INSET - HANDLE_HEIGHT,
        HingeSide::Right => left_x + HANDLE_EDGE_INSET,
    };
    Handle {
        dims: DVec3::new(HANDLE_HEIGHT, bar_h, HANDLE_DEPTH),
        pos: DVec3::new(x, opening.y + (door_h - bar_h) / 2.0, opening.face_z + t),
    }
}

fn build_drawers(
    spec: &CabinetSpec,
    opening: &Opening,
    count: u32,
    explicit: Option<&Vec<f64>>,
) -> Result<FrontLayout, BuildError> {
    if count == 0 {
        return Err(BuildError::fronts("drawer count must be at least 1"));
    }
    let n = count as usize;
    let t = spec.board_thickness;

    // An explicit height list only counts when its length matches;
    // otherwise it is silently ignored in favor of an equal split. The
    // last entry is recomputed either way: the stack must fill the
    // opening exactly, with the top drawer absorbing any difference.
    let heights = match explicit {
        Some(hs) if hs.len() == n => {
            let used: f64 = hs[..n - 1].iter().sum();
            let last = opening.height - used;
            if last <= EPSILON {
                return Err(BuildError::fronts(format!(
                    "explicit drawer heights leave no room for the last front: \
                     {used} of {} already used",
                    opening.height
                )));
            }
            let mut hs = hs.clone();
            hs[n - 1] = last;
            hs
        }
        _ => equal_mm_split(opening.height, n),
    };

    let slide = -MAX_SLIDE_DISTANCE.min(spec.depth);
    let mut fronts = Vec::with_capacity(n);
    let mut y = opening.y;
    for (i, &h) in heights.iter().enumerate() {
        let handle = spec
            .display
            .show_handles
            .then(|| drawer_handle(opening, t, y, h, opening.width));
        fronts.push(FrontGroup {
            index: i,
            kind: FrontKind::Drawer,
            dims: DVec3::new(opening.width, h, t),
            origin: DVec3::new(opening.x, y, opening.face_z),
            hinge: None,
            slide_distance: Some(slide),
            handle,
        });
        y += h;
    }

    Ok(FrontLayout {
        fronts,
        divider: None,
        heights,
        opening: *opening,
    })
}

fn build_doors(
    spec: &CabinetSpec,
    opening: &Opening,
    requested: u32,
    divider_pos: Option<DividerPosition>,
) -> Result<FrontLayout, BuildError> {
    let n = requested.max(1) as usize;
    let t = spec.board_thickness;
    let door_w = (opening.width - (n as f64 - 1.0) * spec.gaps.between) / n as f64;
    if door_w <= EPSILON {
        return Err(BuildError::fronts(format!(
            "opening width {} cannot hold {} door leaves",
            opening.width, n
        )));
    }
    let door_h = opening.height;

    let mut fronts = Vec::with_capacity(n);
    for i in 0..n {
        let left_x = opening.x + i as f64 * (door_w + spec.gaps.between);
        // First half of the leaves hinge left, the remainder right
        let hinge = if (i as f64) < n as f64 / 2.0 {
            HingeSide::Left
        } else {
            HingeSide::Right
        };
        let pivot_x = match hinge {
            HingeSide::Left => left_x,
            HingeSide::Right => left_x + door_w,
        };
        let handle = spec
            .display
            .show_handles
            .then(|| door_handle(opening, t, left_x, door_w, door_h, hinge));
        fronts.push(FrontGroup {
            index: i,
            kind: FrontKind::Door,
            dims: DVec3::new(door_w, door_h, t),
            origin: DVec3::new(pivot_x, opening.y, opening.face_z),
            hinge: Some(hinge),
            slide_distance: None,
            handle,
        });
    }

    let divider = divider_panel(spec, opening, n, divider_pos);

    Ok(FrontLayout {
        fronts,
        divider,
        heights: vec![door_h],
        opening: *opening,
    })
}

/// The center divider behind 3- or 4-door fronts: centered for 4 leaves,
/// at the caller-selected 1/3 or 2/3 split for 3 leaves.
fn divider_panel(
    spec: &CabinetSpec,
    opening: &Opening,
    door_count: usize,
    position: Option<DividerPosition>,
) -> Option<Panel> {
    let split = match door_count {
        3 => match position.unwrap_or(DividerPosition::Left) {
            DividerPosition::Left => opening.width / 3.0,
            DividerPosition::Right => 2.0 * opening.width / 3.0,
        },
        4 => opening.width / 2.0,
        _ => return None,
    };
    let t = spec.board_thickness;
    Some(Panel::new(
        PanelRole::Divider,
        DVec3::new(t, spec.height - 2.0 * t, spec.depth - spec.back_thickness),
        DVec3::new(opening.x + split - t / 2.0, t, spec.back_thickness),
    ))
}

/// Partitions the front opening per the configured front mode.
pub fn build_fronts(spec: &CabinetSpec, rule: &ConstructionRule) -> Result<FrontLayout, BuildError> {
    let opening = front_opening(spec, rule);
    if opening.width <= EPSILON || opening.height <= EPSILON {
        return Err(BuildError::fronts(format!(
            "front opening is not positive: {} x {}",
            opening.width, opening.height
        )));
    }
    match &spec.front {
        FrontMode::Drawers { count, heights } => {
            build_drawers(spec, &opening, *count, heights.as_ref())
        }
        FrontMode::Doors { count, divider } => build_doors(spec, &opening, *count, *divider),
    }
}
