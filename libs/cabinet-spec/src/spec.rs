//! # Cabinet Specification
//!
//! The declarative input model: dimensions, construction family, carcass
//! variant, panel and edge-banding configuration, and front layout. All
//! values are fully resolved (meters, concrete counts) and ready for the
//! geometry engine.

use config::constants::{DEFAULT_BACK_THICKNESS, DEFAULT_BOARD_THICKNESS, DEFAULT_OPEN_SPEED, MM};
use serde::{Deserialize, Serialize};

// =============================================================================
// PLACEMENT FAMILY
// =============================================================================

/// Cabinet placement class.
///
/// Families differ in leg/hanger hardware and default dimensions: floor
/// families stand on adjustable feet, wall families hang on two wall hangers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Family {
    /// Floor-standing base unit under the worktop.
    Base,
    /// Floor-standing full-height unit (larder, oven housing).
    Tall,
    /// Wall-hung upper unit.
    Wall,
    /// Over-wall attic unit ("pawlacz").
    Pawlacz,
}

impl Family {
    /// Whether this family stands on the floor and can take legs.
    pub fn stands_on_floor(self) -> bool {
        matches!(self, Family::Base | Family::Tall)
    }

    /// Whether this family hangs on wall hangers.
    pub fn wall_mounted(self) -> bool {
        !self.stands_on_floor()
    }
}

// =============================================================================
// CARCASS CONSTRUCTION VARIANT
// =============================================================================

/// Carcass construction variant.
///
/// Each variant selects one mutually exclusive dimension-reduction scheme:
/// either the side panels span the full height and the horizontals run
/// between them, or the horizontals span the full width and the sides are
/// shortened, or a mix. The flush-front variants additionally extend the
/// horizontal panels forward so their front edge is flush with the fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CarcassType {
    /// Sides span the full height; top and bottom run between them.
    FullSides,
    /// Top and bottom span the full width; sides are shortened by two
    /// board thicknesses and sit between them.
    FullHorizontals,
    /// Bottom spans the full width, top runs between the sides; sides are
    /// shortened by one board thickness and sit on the bottom.
    FullBottom,
    /// Top spans the full width, bottom runs between the sides; sides are
    /// shortened by one board thickness under the top.
    FullTop,
    /// `FullSides` with the horizontals extended forward flush with the
    /// front plane.
    FlushFrontBase,
    /// `FullHorizontals` with the horizontals extended forward flush with
    /// the front plane.
    FlushFrontHorizontals,
}

// =============================================================================
// FRONT LAYOUT
// =============================================================================

/// Placement of the center divider behind a 3-door front.
///
/// A 4-door divider is always centered and carries no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DividerPosition {
    /// Divider at the 1/3 split, counted from the left opening edge.
    Left,
    /// Divider at the 2/3 split.
    Right,
}

/// Front layout: door leaves or drawer fronts, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum FrontMode {
    /// N hinged door leaves across the opening.
    Doors {
        /// Requested leaf count; the engine clamps to at least 1.
        count: u32,
        /// Divider placement for the 3-door case.
        #[serde(default)]
        divider: Option<DividerPosition>,
    },
    /// M stacked drawer fronts.
    Drawers {
        /// Drawer count, must be at least 1.
        count: u32,
        /// Explicit per-drawer front heights in meters, bottom-up. Ignored
        /// when the length does not match `count`; the last entry is
        /// recomputed so the stack always fills the opening.
        #[serde(default)]
        heights: Option<Vec<f64>>,
    },
}

impl FrontMode {
    /// Number of front groups this mode will produce.
    pub fn front_count(&self) -> usize {
        match self {
            FrontMode::Doors { count, .. } => (*count).max(1) as usize,
            FrontMode::Drawers { count, .. } => *count as usize,
        }
    }
}

// =============================================================================
// PANEL VARIANTS
// =============================================================================

/// Back panel style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackPanelStyle {
    /// One full HDF sheet on the back plane.
    Full,
    /// Two stacked half-height sheets.
    Split,
    /// Open back.
    None,
}

/// Bottom panel style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BottomPanelStyle {
    /// Solid bottom slab.
    Full,
    /// No bottom (sink base with a plinth-mounted appliance).
    None,
}

/// How a stiffening traverse is oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TraverseOrientation {
    /// Rail standing upright, wide face toward front/back, flush with the
    /// top edge.
    Vertical,
    /// Flat strip lying at the very top, wide face up.
    Horizontal,
}

/// Parameters of one stiffening traverse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraverseSpec {
    /// Rail orientation.
    pub orientation: TraverseOrientation,
    /// Inward offset from the front or back edge, in meters.
    pub offset: f64,
    /// Extent of the rail along its offset axis (height when vertical,
    /// depth when horizontal), in meters.
    pub width: f64,
}

impl Default for TraverseSpec {
    fn default() -> Self {
        Self {
            orientation: TraverseOrientation::Vertical,
            offset: 0.0,
            width: 80.0 * MM,
        }
    }
}

/// Top panel variant: a solid slab, one or two traverses, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TopPanelSpec {
    /// Solid top slab.
    Full,
    /// No top panel at all.
    None,
    /// One traverse at the front edge.
    FrontTraverse { traverse: TraverseSpec },
    /// One traverse at the back edge.
    BackTraverse { traverse: TraverseSpec },
    /// Independent front and back traverses.
    TwoTraverses { front: TraverseSpec, back: TraverseSpec },
}

// =============================================================================
// EDGE BANDING
// =============================================================================

/// A logical edge of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Edge {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// All six edges, in flag order.
    pub const ALL: [Edge; 6] = [
        Edge::Front,
        Edge::Back,
        Edge::Left,
        Edge::Right,
        Edge::Top,
        Edge::Bottom,
    ];
}

/// Per-edge banding flags for one panel.
///
/// Missing flags deserialize as all-false (no banding).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeFlags {
    pub front: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl EdgeFlags {
    /// Flags with every edge banded.
    pub const ALL: EdgeFlags = EdgeFlags {
        front: true,
        back: true,
        left: true,
        right: true,
        top: true,
        bottom: true,
    };

    /// Flags with only the front edge banded (the usual case: only the
    /// visible edge gets ABS).
    pub const FRONT_ONLY: EdgeFlags = EdgeFlags {
        front: true,
        back: false,
        left: false,
        right: false,
        top: false,
        bottom: false,
    };

    /// Whether the given edge is flagged.
    pub fn get(self, edge: Edge) -> bool {
        match edge {
            Edge::Front => self.front,
            Edge::Back => self.back,
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    /// Number of flagged edges.
    pub fn count(self) -> usize {
        Edge::ALL.iter().filter(|e| self.get(**e)).count()
    }

    /// Whether any edge is flagged.
    pub fn any(self) -> bool {
        self.count() > 0
    }
}

/// Per-panel banding flag sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BandingSpec {
    pub left_side: EdgeFlags,
    pub right_side: EdgeFlags,
    pub shelf: EdgeFlags,
    pub traverse: EdgeFlags,
    pub back: EdgeFlags,
    pub top_panel: EdgeFlags,
    pub bottom_panel: EdgeFlags,
}

// =============================================================================
// EXTENSIONS AND DISPLAY
// =============================================================================

/// Optional extras hung on one side of the carcass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SideExtension {
    /// Extra decor panel outside the carcass side.
    pub panel: bool,
    /// Width of a filler ("blenda") strip beside the fronts, in meters.
    pub blenda: Option<f64>,
}

/// Left/right side extensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SideExtensions {
    pub left: SideExtension,
    pub right: SideExtension,
}

/// Which optional geometry the model should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayFlags {
    /// Emit handle geometry on fronts.
    pub show_handles: bool,
    /// Emit edge-banding strips.
    pub show_edges: bool,
    /// Scene-assembler hint: render the front panels. Front groups are
    /// always built regardless (animation state is indexed by them).
    pub show_fronts: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            show_handles: true,
            show_edges: true,
            show_fronts: true,
        }
    }
}

// =============================================================================
// GAPS
// =============================================================================

/// Reveals around and between fronts, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Gaps {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    /// Gap between adjacent door leaves.
    pub between: f64,
}

impl Default for Gaps {
    fn default() -> Self {
        Self {
            top: 2.0 * MM,
            bottom: 2.0 * MM,
            left: 2.0 * MM,
            right: 2.0 * MM,
            between: 3.0 * MM,
        }
    }
}

// =============================================================================
// CABINET SPEC
// =============================================================================

/// The complete declarative cabinet specification.
///
/// A pure input: the geometry engine turns one of these into a
/// `CabinetModel` synchronously, with no hidden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetSpec {
    /// Outer carcass width in meters.
    pub width: f64,
    /// Outer carcass height in meters (legs excluded).
    pub height: f64,
    /// Carcass body depth in meters (fronts excluded).
    pub depth: f64,
    /// Placement family.
    #[serde(default = "default_family")]
    pub family: Family,
    /// Carcass construction variant.
    #[serde(default = "default_carcass")]
    pub carcass: CarcassType,
    /// Board thickness, uniform within one cabinet.
    #[serde(default = "default_board_thickness")]
    pub board_thickness: f64,
    /// Back sheet thickness.
    #[serde(default = "default_back_thickness")]
    pub back_thickness: f64,
    /// Front reveals.
    #[serde(default)]
    pub gaps: Gaps,
    /// Door or drawer layout.
    #[serde(default = "default_front")]
    pub front: FrontMode,
    /// Number of adjustable shelves.
    #[serde(default)]
    pub shelves: u32,
    /// Back panel style.
    #[serde(default = "default_back_panel")]
    pub back_panel: BackPanelStyle,
    /// Top panel variant.
    #[serde(default = "default_top_panel")]
    pub top_panel: TopPanelSpec,
    /// Bottom panel style.
    #[serde(default = "default_bottom_panel")]
    pub bottom_panel: BottomPanelStyle,
    /// Per-panel edge-banding flags.
    #[serde(default)]
    pub banding: BandingSpec,
    /// Leg height in meters; 0 disables legs.
    #[serde(default)]
    pub leg_height: f64,
    /// Extra plan inset of the legs from the carcass corners.
    #[serde(default)]
    pub leg_offset: f64,
    /// Decor panels and blenda fillers.
    #[serde(default)]
    pub extensions: SideExtensions,
    /// Optional geometry switches.
    #[serde(default)]
    pub display: DisplayFlags,
    /// Per-cabinet animation approach factor.
    #[serde(default = "default_open_speed")]
    pub open_speed: f64,
}

fn default_family() -> Family {
    Family::Base
}

fn default_carcass() -> CarcassType {
    CarcassType::FullSides
}

fn default_board_thickness() -> f64 {
    DEFAULT_BOARD_THICKNESS
}

fn default_back_thickness() -> f64 {
    DEFAULT_BACK_THICKNESS
}

fn default_front() -> FrontMode {
    FrontMode::Doors {
        count: 1,
        divider: None,
    }
}

fn default_back_panel() -> BackPanelStyle {
    BackPanelStyle::Full
}

fn default_top_panel() -> TopPanelSpec {
    TopPanelSpec::Full
}

fn default_bottom_panel() -> BottomPanelStyle {
    BottomPanelStyle::Full
}

fn default_open_speed() -> f64 {
    DEFAULT_OPEN_SPEED
}

impl Default for CabinetSpec {
    /// A standard 600 mm single-door base cabinet.
    fn default() -> Self {
        Self {
            width: 0.6,
            height: 0.72,
            depth: 0.51,
            family: default_family(),
            carcass: default_carcass(),
            board_thickness: default_board_thickness(),
            back_thickness: default_back_thickness(),
            gaps: Gaps::default(),
            front: default_front(),
            shelves: 1,
            back_panel: default_back_panel(),
            top_panel: default_top_panel(),
            bottom_panel: default_bottom_panel(),
            banding: BandingSpec::default(),
            leg_height: 0.1,
            leg_offset: 0.0,
            extensions: SideExtensions::default(),
            display: DisplayFlags::default(),
            open_speed: default_open_speed(),
        }
    }
}
