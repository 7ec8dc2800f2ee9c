//! # Cabinet Spec Crate
//!
//! Declarative cabinet specification types for the geometry pipeline.
//!
//! ## Architecture
//!
//! ```text
//! JSON (configuration UI) → cabinet-spec (CabinetSpec) → cabinet-geometry
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cabinet_spec::{CabinetSpec, FrontMode};
//!
//! let spec = CabinetSpec {
//!     width: 0.8,
//!     front: FrontMode::Doors { count: 2, divider: None },
//!     ..CabinetSpec::default()
//! };
//! assert!(spec.family.stands_on_floor());
//! ```
//!
//! ## Design Principles
//!
//! - **Fully Resolved**: All values are concrete numbers in meters, no
//!   expressions or unit strings
//! - **Unrepresentable Invalid States**: doors XOR drawers is enforced by
//!   the `FrontMode` enum, never by runtime checks
//! - **Serde Round-Trip**: every field serializes to the camelCase JSON the
//!   configuration UI produces

pub mod spec;

pub use spec::{
    BackPanelStyle, BandingSpec, BottomPanelStyle, CabinetSpec, CarcassType, DisplayFlags,
    DividerPosition, Edge, EdgeFlags, Family, FrontMode, Gaps, SideExtension, SideExtensions,
    TopPanelSpec, TraverseOrientation, TraverseSpec,
};

#[cfg(test)]
mod tests;
