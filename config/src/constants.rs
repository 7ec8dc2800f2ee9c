//! # Configuration Constants
//!
//! Centralized constants for cabinet geometry construction. All panel
//! dimensions, reveals, kinematics parameters, and precision values are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Stock**: Default board/back/banding thicknesses
//! - **Construction**: Reveals, insets, and hardware placement
//! - **Kinematics**: Door/drawer animation parameters
//! - **Tessellation**: Cylinder segment counts for the mesh backend

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two coordinates or dimensions are "equal" within
/// numerical tolerance. Cabinet geometry works in meters at millimeter
/// resolution, so 1e-9 leaves six orders of magnitude of headroom.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(0.018, 0.018 + 1e-12));
/// ```
pub const EPSILON: f64 = 1e-9;

/// One millimeter expressed in meters.
///
/// The model works in meters throughout; inputs that are naturally given in
/// millimeters (traverse offsets, drawer-height rounding) convert through
/// this factor.
pub const MM: f64 = 1e-3;

// =============================================================================
// STOCK CONSTANTS
// =============================================================================

/// Default carcass board thickness (18 mm chipboard).
pub const DEFAULT_BOARD_THICKNESS: f64 = 18.0 * MM;

/// Default back panel thickness (3 mm HDF sheet).
pub const DEFAULT_BACK_THICKNESS: f64 = 3.0 * MM;

/// Thickness of an edge-banding strip (1 mm ABS).
///
/// Every band emitted by the edge-band placer has exactly this dimension
/// along the axis perpendicular to the banded face.
pub const BAND_THICKNESS: f64 = 1.0 * MM;

// =============================================================================
// CONSTRUCTION CONSTANTS
// =============================================================================

/// Air gap between the carcass body front plane and the back face of a
/// door or drawer front (2 mm reveal).
///
/// The cabinet's total depth envelope is `depth + board thickness +
/// FRONT_REVEAL`: the carcass body, the front panel, and this reveal
/// behind it.
pub const FRONT_REVEAL: f64 = 2.0 * MM;

/// Radius of a cylindrical adjustable foot (2 cm).
pub const LEG_RADIUS: f64 = 0.02;

/// Number of wall hangers fitted to wall-mounted families.
///
/// Hangers are counted for pricing, never drawn.
pub const HANGER_COUNT: u32 = 2;

/// Handle bar dimensions (width along the door face, height, protrusion).
pub const HANDLE_WIDTH: f64 = 0.12;
/// Handle bar height.
pub const HANDLE_HEIGHT: f64 = 0.012;
/// Handle bar protrusion from the front face.
pub const HANDLE_DEPTH: f64 = 0.03;

// =============================================================================
// KINEMATICS CONSTANTS
// =============================================================================

/// Maximum drawer slide travel in meters.
///
/// A drawer never slides out further than its own cabinet depth, capped at
/// this value (a 450 mm full-extension runner).
pub const MAX_SLIDE_DISTANCE: f64 = 0.45;

/// Default per-tick approach factor for open/close animation.
///
/// Each tick moves progress toward its target by this fraction of the
/// remaining distance.
pub const DEFAULT_OPEN_SPEED: f64 = 0.15;

/// Progress distance from the target below which animation snaps to the
/// terminal value (exactly 0 or 1).
pub const SNAP_TOLERANCE: f64 = 0.02;

/// Full door opening angle in degrees.
pub const DOOR_OPEN_ANGLE_DEG: f64 = 90.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of segments for any tessellated cylinder.
pub const MIN_SEGMENTS: u32 = 3;

/// Segment count used when tessellating legs.
pub const LEG_SEGMENTS: u32 = 16;
