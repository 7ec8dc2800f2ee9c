//! # Spec Tests

use crate::*;

#[test]
fn test_default_spec_is_base_single_door() {
    let spec = CabinetSpec::default();
    assert_eq!(spec.family, Family::Base);
    assert_eq!(spec.carcass, CarcassType::FullSides);
    assert_eq!(spec.front.front_count(), 1);
    assert!(spec.width > 0.0 && spec.height > 0.0 && spec.depth > 0.0);
}

#[test]
fn test_family_hardware_split() {
    assert!(Family::Base.stands_on_floor());
    assert!(Family::Tall.stands_on_floor());
    assert!(Family::Wall.wall_mounted());
    assert!(Family::Pawlacz.wall_mounted());
}

#[test]
fn test_door_count_clamps_to_one() {
    let mode = FrontMode::Doors {
        count: 0,
        divider: None,
    };
    assert_eq!(mode.front_count(), 1);
}

#[test]
fn test_drawer_count_is_literal() {
    let mode = FrontMode::Drawers {
        count: 3,
        heights: None,
    };
    assert_eq!(mode.front_count(), 3);
}

#[test]
fn test_edge_flags_count() {
    assert_eq!(EdgeFlags::default().count(), 0);
    assert!(!EdgeFlags::default().any());
    assert_eq!(EdgeFlags::ALL.count(), 6);
    assert_eq!(EdgeFlags::FRONT_ONLY.count(), 1);
    assert!(EdgeFlags::FRONT_ONLY.get(Edge::Front));
    assert!(!EdgeFlags::FRONT_ONLY.get(Edge::Back));
}

#[test]
fn test_spec_deserializes_from_ui_json() {
    let json = r#"{
        "width": 1.0,
        "height": 0.9,
        "depth": 0.5,
        "family": "base",
        "carcass": "fullSides",
        "front": { "mode": "drawers", "count": 2 },
        "gaps": { "top": 0.0, "bottom": 0.0 }
    }"#;
    let spec: CabinetSpec = serde_json::from_str(json).unwrap();
    assert_eq!(spec.width, 1.0);
    assert_eq!(
        spec.front,
        FrontMode::Drawers {
            count: 2,
            heights: None
        }
    );
    // Omitted fields fall back to stock defaults
    assert_eq!(spec.board_thickness, config::constants::DEFAULT_BOARD_THICKNESS);
    assert_eq!(spec.back_panel, BackPanelStyle::Full);
    // Partial gaps keep the defaults for the unnamed sides
    assert_eq!(spec.gaps.top, 0.0);
    assert!(spec.gaps.left > 0.0);
}

#[test]
fn test_unknown_carcass_variant_is_rejected() {
    let json = r#"{
        "width": 1.0, "height": 0.9, "depth": 0.5,
        "carcass": "type7"
    }"#;
    assert!(serde_json::from_str::<CabinetSpec>(json).is_err());
}

#[test]
fn test_top_panel_variants_round_trip() {
    let top = TopPanelSpec::TwoTraverses {
        front: TraverseSpec::default(),
        back: TraverseSpec {
            orientation: TraverseOrientation::Horizontal,
            offset: 0.01,
            width: 0.1,
        },
    };
    let json = serde_json::to_string(&top).unwrap();
    let back: TopPanelSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(top, back);
}

#[test]
fn test_front_mode_tag_is_exclusive() {
    // A payload cannot be both doors and drawers: the tag picks one arm.
    let json = r#"{ "mode": "doors", "count": 3, "divider": "left" }"#;
    let mode: FrontMode = serde_json::from_str(json).unwrap();
    assert_eq!(
        mode,
        FrontMode::Doors {
            count: 3,
            divider: Some(DividerPosition::Left)
        }
    );
}
