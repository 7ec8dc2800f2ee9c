//! # Primitive Solids
//!
//! The primitive factory capability the geometry model expects from its
//! backend: axis-aligned boxes for panels/bands/fronts, cylinders for
//! legs.

pub mod cuboid;
pub mod cylinder;

pub use cuboid::create_cuboid;
pub use cylinder::create_cylinder;
