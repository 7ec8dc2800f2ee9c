//! # Engine Scenario Tests
//!
//! End-to-end properties of `build_cabinet` across the whole parameter
//! space: bounding-box contract, front partitioning, divider rules,
//! banding counts, and the animation model.

use crate::{build_cabinet, AnimationController, BuildError, FrontKind, PanelRole};
use approx::assert_relative_eq;
use cabinet_spec::{
    BandingSpec, CabinetSpec, CarcassType, DividerPosition, EdgeFlags, FrontMode, Gaps,
    TopPanelSpec,
};
use config::constants::{EPSILON, FRONT_REVEAL, MM};

const ALL_CARCASS_TYPES: [CarcassType; 6] = [
    CarcassType::FullSides,
    CarcassType::FullHorizontals,
    CarcassType::FullBottom,
    CarcassType::FullTop,
    CarcassType::FlushFrontBase,
    CarcassType::FlushFrontHorizontals,
];

#[test]
fn test_carcass_bounding_box_for_every_variant() {
    for carcass in ALL_CARCASS_TYPES {
        for (w, h, d) in [(0.6, 0.72, 0.51), (1.0, 0.9, 0.5), (0.45, 2.1, 0.56)] {
            let spec = CabinetSpec {
                width: w,
                height: h,
                depth: d,
                carcass,
                ..CabinetSpec::default()
            };
            let model = build_cabinet(&spec).unwrap();
            let (min, max) = model.carcass_bounding_box().unwrap();
            let size = max - min;
            assert_relative_eq!(size.x, w, epsilon = EPSILON);
            assert_relative_eq!(size.y, h, epsilon = EPSILON);
            assert_relative_eq!(
                size.z,
                d + spec.board_thickness + FRONT_REVEAL,
                epsilon = EPSILON
            );
            assert_relative_eq!(min.x, 0.0, epsilon = EPSILON);
            assert_relative_eq!(min.y, 0.0, epsilon = EPSILON);
        }
    }
}

#[test]
fn test_front_count_matches_mode() {
    let doors = CabinetSpec {
        front: FrontMode::Doors {
            count: 2,
            divider: None,
        },
        ..CabinetSpec::default()
    };
    assert_eq!(build_cabinet(&doors).unwrap().fronts.len(), 2);

    let drawers = CabinetSpec {
        front: FrontMode::Drawers {
            count: 4,
            heights: None,
        },
        ..CabinetSpec::default()
    };
    let model = build_cabinet(&drawers).unwrap();
    assert_eq!(model.fronts.len(), 4);
    assert!(model.fronts.iter().all(|f| f.kind == FrontKind::Drawer));
}

#[test]
fn test_animation_state_indexed_one_to_one() {
    let spec = CabinetSpec {
        front: FrontMode::Drawers {
            count: 3,
            heights: None,
        },
        ..CabinetSpec::default()
    };
    let model = build_cabinet(&spec).unwrap();
    assert_eq!(model.open_states.len(), model.fronts.len());
    assert_eq!(model.open_progress.len(), model.fronts.len());
    assert!(model.open_states.iter().all(|&s| !s));
    assert!(model.open_progress.iter().all(|&p| p == 0.0));
}

#[test]
fn test_drawer_heights_sum_to_front_height() {
    for carcass in ALL_CARCASS_TYPES {
        let spec = CabinetSpec {
            carcass,
            front: FrontMode::Drawers {
                count: 3,
                heights: None,
            },
            ..CabinetSpec::default()
        };
        let model = build_cabinet(&spec).unwrap();
        let available = spec.height
            - crate::rule_for(carcass).front_height_reduction(spec.board_thickness)
            - spec.gaps.top
            - spec.gaps.bottom;
        let total: f64 = model.front_heights.iter().sum();
        assert!(
            (total - available).abs() <= MM + EPSILON,
            "{carcass:?}: {total} vs {available}"
        );
    }
}

#[test]
fn test_divider_iff_three_or_four_doors() {
    for (front, expected) in [
        (
            FrontMode::Doors {
                count: 2,
                divider: None,
            },
            false,
        ),
        (
            FrontMode::Doors {
                count: 3,
                divider: Some(DividerPosition::Right),
            },
            true,
        ),
        (
            FrontMode::Doors {
                count: 4,
                divider: None,
            },
            true,
        ),
        (
            FrontMode::Drawers {
                count: 4,
                heights: None,
            },
            false,
        ),
    ] {
        let spec = CabinetSpec {
            width: 1.6,
            front,
            ..CabinetSpec::default()
        };
        let model = build_cabinet(&spec).unwrap();
        let dividers = model.panels_with_role(PanelRole::Divider).count();
        assert_eq!(dividers, usize::from(expected));
    }
}

#[test]
fn test_front_banding_adds_exactly_one_strip() {
    let plain = CabinetSpec {
        shelves: 0,
        ..CabinetSpec::default()
    };
    let banded = CabinetSpec {
        banding: BandingSpec {
            left_side: EdgeFlags::FRONT_ONLY,
            ..BandingSpec::default()
        },
        ..plain.clone()
    };
    let without = build_cabinet(&plain).unwrap();
    let with = build_cabinet(&banded).unwrap();
    assert_eq!(without.bands.len(), 0);
    assert_eq!(with.bands.len(), 1);

    let band = &with.bands[0];
    let side = with
        .panels_with_role(PanelRole::LeftSide)
        .next()
        .unwrap();
    // In-plane dimensions equal the side panel's, thickness is the band's
    assert_relative_eq!(band.dims.x, side.dims.x, epsilon = EPSILON);
    assert_relative_eq!(band.dims.y, side.dims.y, epsilon = EPSILON);
    assert_relative_eq!(band.dims.z, config::constants::BAND_THICKNESS, epsilon = EPSILON);
}

#[test]
fn test_show_edges_off_suppresses_bands() {
    let mut spec = CabinetSpec {
        banding: BandingSpec {
            left_side: EdgeFlags::ALL,
            right_side: EdgeFlags::ALL,
            ..BandingSpec::default()
        },
        ..CabinetSpec::default()
    };
    assert_eq!(build_cabinet(&spec).unwrap().bands.len(), 12);
    spec.display.show_edges = false;
    assert!(build_cabinet(&spec).unwrap().bands.is_empty());
}

#[test]
fn test_two_drawer_scenario() {
    // width=1, height=0.9, depth=0.5, drawers=2, top/bottom gaps zero:
    // exactly 2 drawer groups one reveal ahead of the body front, and a
    // 5-panel carcass (two sides, top, bottom, back).
    let spec = CabinetSpec {
        width: 1.0,
        height: 0.9,
        depth: 0.5,
        shelves: 0,
        front: FrontMode::Drawers {
            count: 2,
            heights: None,
        },
        gaps: Gaps {
            top: 0.0,
            bottom: 0.0,
            ..Gaps::default()
        },
        ..CabinetSpec::default()
    };
    let model = build_cabinet(&spec).unwrap();

    assert_eq!(model.fronts.len(), 2);
    for front in &model.fronts {
        assert_eq!(front.kind, FrontKind::Drawer);
        assert_relative_eq!(front.origin.z, spec.depth + FRONT_REVEAL, epsilon = EPSILON);
    }
    assert_eq!(model.panels.len(), 5);
    for role in [
        PanelRole::LeftSide,
        PanelRole::RightSide,
        PanelRole::Top,
        PanelRole::Bottom,
        PanelRole::Back,
    ] {
        assert_eq!(model.panels_with_role(role).count(), 1, "{role:?}");
    }
}

#[test]
fn test_three_door_divider_scenario() {
    let spec = CabinetSpec {
        width: 1.2,
        front: FrontMode::Doors {
            count: 3,
            divider: Some(DividerPosition::Left),
        },
        ..CabinetSpec::default()
    };
    let model = build_cabinet(&spec).unwrap();
    let divider = model.panels_with_role(PanelRole::Divider).next().unwrap();
    let rule = crate::rule_for(spec.carcass);
    let opening = crate::front_opening(&spec, &rule);
    let center = divider.pos.x + divider.dims.x / 2.0;
    assert_relative_eq!(
        center - opening.x,
        opening.width / 3.0,
        epsilon = EPSILON
    );
}

#[test]
fn test_top_panel_none_drops_the_slab() {
    let spec = CabinetSpec {
        top_panel: TopPanelSpec::None,
        ..CabinetSpec::default()
    };
    let model = build_cabinet(&spec).unwrap();
    assert_eq!(model.panels_with_role(PanelRole::Top).count(), 0);
    assert_eq!(model.panels_with_role(PanelRole::Traverse).count(), 0);
}

#[test]
fn test_invalid_dimensions_fail_fast() {
    for (w, h, d) in [(0.0, 0.7, 0.5), (0.6, -0.1, 0.5), (0.6, 0.7, 0.0)] {
        let spec = CabinetSpec {
            width: w,
            height: h,
            depth: d,
            ..CabinetSpec::default()
        };
        assert!(matches!(
            build_cabinet(&spec),
            Err(BuildError::InvalidDimensions(_))
        ));
    }
}

#[test]
fn test_build_is_deterministic() {
    let spec = CabinetSpec {
        front: FrontMode::Doors {
            count: 4,
            divider: None,
        },
        shelves: 2,
        ..CabinetSpec::default()
    };
    assert_eq!(build_cabinet(&spec).unwrap(), build_cabinet(&spec).unwrap());
}

#[test]
fn test_open_speed_flows_into_seeded_controller() {
    let spec = CabinetSpec {
        open_speed: 1.0,
        ..CabinetSpec::default()
    };
    let model = build_cabinet(&spec).unwrap();
    let mut anim = AnimationController::from_model(&model);
    anim.request_toggle(0);
    // Approach factor 1.0 reaches the target in a single tick
    anim.tick(&model.fronts);
    assert!(anim.is_settled());
    assert_eq!(anim.progress(), &[1.0]);
}

#[test]
fn test_controller_round_trips_through_model() {
    let spec = CabinetSpec {
        front: FrontMode::Drawers {
            count: 2,
            heights: None,
        },
        ..CabinetSpec::default()
    };
    let mut model = build_cabinet(&spec).unwrap();
    let mut anim = AnimationController::from_model(&model);
    anim.request_toggle(1);
    for _ in 0..200 {
        anim.tick(&model.fronts);
    }
    anim.write_back(&mut model);
    assert_eq!(model.open_states, vec![false, true]);
    assert_eq!(model.open_progress, vec![0.0, 1.0]);
}
