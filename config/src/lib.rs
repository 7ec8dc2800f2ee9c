//! # Config Crate
//!
//! Centralized configuration constants for the cabinet geometry pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, BAND_THICKNESS, FRONT_REVEAL};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//!
//! // Edge bands are always the same fixed thickness
//! assert!(BAND_THICKNESS < FRONT_REVEAL);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Real-World Dimensions**: Defaults match common cabinetry stock
//!   (18 mm chipboard, 3 mm HDF backs, 1 mm ABS banding)
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
