//! # Cabinet Mesh
//!
//! Mesh generation for the cabinet geometry pipeline: the box/cylinder
//! primitive factory the solid-part model expects from its backend, and
//! the tessellation of a whole `CabinetModel` into per-part meshes.
//!
//! ## Architecture
//!
//! ```text
//! CabinetSpec → cabinet-geometry (CabinetModel) → cabinet-mesh → scene
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cabinet_geometry::build_cabinet;
//! use cabinet_mesh::model_to_meshes;
//! use cabinet_spec::CabinetSpec;
//!
//! let model = build_cabinet(&CabinetSpec::default()).unwrap();
//! let meshes = model_to_meshes(&model).unwrap();
//! assert_eq!(meshes.panels.len(), model.panels.len());
//! ```

pub mod error;
pub mod from_model;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use from_model::{model_to_meshes, CabinetMeshes};
pub use mesh::Mesh;
pub use primitives::{create_cuboid, create_cylinder};
