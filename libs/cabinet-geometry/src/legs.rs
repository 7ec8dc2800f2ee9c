//! # Leg Placer
//!
//! Four cylindrical adjustable feet under floor-standing cabinets.
//! Wall-mounted families get wall hangers instead (a count for pricing,
//! nothing drawn).

use crate::model::Leg;
use cabinet_spec::CabinetSpec;
use config::constants::{HANGER_COUNT, LEG_RADIUS};
use glam::DVec3;

/// Places the four corner feet, one inset a board thickness plus a leg
/// radius (plus the configured extra offset) from each plan corner. Empty
/// for wall-mounted families or zero leg height.
pub fn place_legs(spec: &CabinetSpec) -> Vec<Leg> {
    if !spec.family.stands_on_floor() || spec.leg_height <= 0.0 {
        return Vec::new();
    }
    let inset = spec.board_thickness + LEG_RADIUS + spec.leg_offset;
    let xs = [inset, spec.width - inset];
    let zs = [inset, spec.depth - inset];
    let mut legs = Vec::with_capacity(4);
    for &x in &xs {
        for &z in &zs {
            legs.push(Leg {
                radius: LEG_RADIUS,
                height: spec.leg_height,
                pos: DVec3::new(x, -spec.leg_height, z),
            });
        }
    }
    legs
}

/// Hanger count for the cabinet's family: two for wall-mounted cabinets,
/// zero otherwise.
pub fn hanger_count(spec: &CabinetSpec) -> u32 {
    if spec.family.wall_mounted() {
        HANGER_COUNT
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinet_spec::Family;
    use config::constants::EPSILON;

    #[test]
    fn test_base_cabinet_gets_four_legs() {
        let spec = CabinetSpec::default();
        let legs = place_legs(&spec);
        assert_eq!(legs.len(), 4);
        for leg in &legs {
            assert_eq!(leg.height, spec.leg_height);
            assert_eq!(leg.radius, LEG_RADIUS);
            assert!((leg.pos.y - (-spec.leg_height)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_corner_inset() {
        let spec = CabinetSpec::default();
        let legs = place_legs(&spec);
        let inset = spec.board_thickness + LEG_RADIUS;
        assert!(legs
            .iter()
            .any(|l| (l.pos.x - inset).abs() < EPSILON && (l.pos.z - inset).abs() < EPSILON));
        assert!(legs
            .iter()
            .any(|l| (l.pos.x - (spec.width - inset)).abs() < EPSILON
                && (l.pos.z - (spec.depth - inset)).abs() < EPSILON));
    }

    #[test]
    fn test_zero_leg_height_disables_legs() {
        let spec = CabinetSpec {
            leg_height: 0.0,
            ..CabinetSpec::default()
        };
        assert!(place_legs(&spec).is_empty());
    }

    #[test]
    fn test_wall_family_gets_hangers_not_legs() {
        let spec = CabinetSpec {
            family: Family::Wall,
            ..CabinetSpec::default()
        };
        assert!(place_legs(&spec).is_empty());
        assert_eq!(hanger_count(&spec), 2);
        assert_eq!(hanger_count(&CabinetSpec::default()), 0);
    }
}
