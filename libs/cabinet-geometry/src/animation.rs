//! # Animation Controller
//!
//! Per-front open/close progress, advanced once per host render frame.
//! Toggle requests only flip the target state; `tick` is the sole mutator
//! of progress, so an asynchronous toggle is at worst seen one frame late
//! and never produces an invalid state.

use crate::model::{CabinetModel, FrontGroup, FrontKind, HingeSide};
use config::constants::{DEFAULT_OPEN_SPEED, DOOR_OPEN_ANGLE_DEG, SNAP_TOLERANCE};
use glam::DVec3;

/// The current transform of one front, derived from its progress.
///
/// Doors rotate about their hinge pivot; drawers translate along depth.
/// Exactly one of the two components is non-zero per front kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontPose {
    /// Signed rotation about the vertical pivot axis, degrees.
    pub angle_deg: f64,
    /// Translation from the closed pose, meters.
    pub translation: DVec3,
}

impl FrontPose {
    /// The closed, untransformed pose.
    pub const CLOSED: FrontPose = FrontPose {
        angle_deg: 0.0,
        translation: DVec3::ZERO,
    };
}

/// Open/close state machine for one cabinet's fronts.
///
/// Command/query API: `request_toggle` enqueues intent, `tick` advances
/// and returns the transform for each front. State is owned here, never
/// stashed on render objects; the caller carries a controller across
/// model rebuilds (or seeds a new one from the old) for continuity.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationController {
    open: Vec<bool>,
    progress: Vec<f64>,
    speed: f64,
}

impl AnimationController {
    /// A controller for `front_count` fronts, all closed.
    pub fn new(front_count: usize) -> Self {
        Self {
            open: vec![false; front_count],
            progress: vec![0.0; front_count],
            speed: DEFAULT_OPEN_SPEED,
        }
    }

    /// Seeds state from a freshly built model, adopting its per-cabinet
    /// approach factor.
    pub fn from_model(model: &CabinetModel) -> Self {
        Self {
            open: model.open_states.clone(),
            progress: model.open_progress.clone(),
            speed: model.open_speed,
        }
    }

    /// Overrides the per-cabinet approach factor.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Copies overlapping open/progress state from a previous controller,
    /// keeping animation continuous across a spec change.
    pub fn carry_over(&mut self, previous: &AnimationController) {
        let n = self.open.len().min(previous.open.len());
        self.open[..n].copy_from_slice(&previous.open[..n]);
        self.progress[..n].copy_from_slice(&previous.progress[..n]);
    }

    /// Flips the target state of one front. Out-of-range indices are a
    /// no-op; progress is never touched here.
    pub fn request_toggle(&mut self, index: usize) {
        if let Some(state) = self.open.get_mut(index) {
            *state = !*state;
        }
    }

    /// Per-front open targets.
    pub fn open_states(&self) -> &[bool] {
        &self.open
    }

    /// Per-front progress in [0, 1].
    pub fn progress(&self) -> &[f64] {
        &self.progress
    }

    /// Whether every front has reached its terminal state (exactly 0
    /// or 1).
    pub fn is_settled(&self) -> bool {
        self.open
            .iter()
            .zip(&self.progress)
            .all(|(&open, &p)| p == if open { 1.0 } else { 0.0 })
    }

    /// Writes the current state back onto a model (the model mirrors the
    /// controller for consumers that only see the model).
    pub fn write_back(&self, model: &mut CabinetModel) {
        let n = model.open_states.len().min(self.open.len());
        model.open_states[..n].copy_from_slice(&self.open[..n]);
        model.open_progress[..n].copy_from_slice(&self.progress[..n]);
    }

    /// Advances every front one frame toward its target and returns the
    /// resulting pose per front, indexed 1:1 with `fronts`.
    pub fn tick(&mut self, fronts: &[FrontGroup]) -> Vec<FrontPose> {
        for (i, progress) in self.progress.iter_mut().enumerate() {
            let target = if self.open.get(i).copied().unwrap_or(false) {
                1.0
            } else {
                0.0
            };
            *progress += (target - *progress) * self.speed;
            if (target - *progress).abs() < SNAP_TOLERANCE {
                *progress = target;
            }
        }
        fronts.iter().map(|front| self.pose(front)).collect()
    }

    /// The pose of one front at its current progress.
    pub fn pose(&self, front: &FrontGroup) -> FrontPose {
        let progress = self.progress.get(front.index).copied().unwrap_or(0.0);
        match front.kind {
            FrontKind::Door => {
                let sign = front
                    .hinge
                    .map_or(HingeSide::Left.rotation_sign(), HingeSide::rotation_sign);
                FrontPose {
                    angle_deg: sign * DOOR_OPEN_ANGLE_DEG * progress,
                    translation: DVec3::ZERO,
                }
            }
            FrontKind::Drawer => {
                let slide = front.slide_distance.unwrap_or(0.0);
                FrontPose {
                    angle_deg: 0.0,
                    translation: DVec3::new(0.0, 0.0, -slide * progress),
                }
            }
        }
    }
}
