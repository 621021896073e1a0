//! Capability traits the motion core is wired to.
//!
//! The core never owns a physics world, curve assets, or a renderer. It
//! talks to them through three narrow seams: [`MovementBackend`] for the
//! kinematic move primitive and mode switching, [`CurveService`] for
//! evaluating curve assets by handle, and [`DebugDraw`] for fire-and-forget
//! debug markers.

use glam::Vec3;
use motion_math::Pose;
use serde::{Deserialize, Serialize};

use crate::mode::MovementMode;

/// A handle to an externally owned curve asset.
///
/// Curve ids are allocated by the asset layer; `0` is reserved as the
/// invalid sentinel so an optional curve reference fits in a single
/// `u32` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveId(pub u32);

impl CurveId {
    /// The null / invalid curve sentinel.
    pub const INVALID: CurveId = CurveId(0);

    /// Create a curve id from a raw `u32`.
    #[must_use]
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw `u32` identifier.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns `true` if this is a valid (non-zero) curve id.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Contact information from a swept kinematic move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveContact {
    /// World-space contact point.
    pub point: Vec3,
    /// Surface normal at the contact.
    pub normal: Vec3,
}

/// The locomotion capabilities the driver needs from the surrounding
/// movement component.
pub trait MovementBackend {
    /// Move the character to `pose` in a single kinematic displacement.
    ///
    /// With `sweep` set the move collides and stops at the first blocking
    /// contact, which is returned; without it the character teleports
    /// through geometry and `None` is returned.
    fn apply_kinematic_move(&mut self, pose: Pose, sweep: bool) -> Option<MoveContact>;

    /// Switch the locomotion solver to the given mode.
    fn set_mode(&mut self, mode: MovementMode);

    /// Halt all ordinary locomotion (zero velocity and acceleration) now.
    fn stop_immediately(&mut self);
}

/// Evaluates curve assets by handle.
pub trait CurveService {
    /// Evaluate the curve at normalized time `t` in [0, 1].
    fn evaluate(&self, curve: CurveId, t: f32) -> f32;
}

/// What a debug capsule marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugMarker {
    /// The motion's start pose, drawn once when the motion starts.
    Start,
    /// The motion's target pose, drawn once when the motion starts.
    Target,
    /// The integrated position of an in-flight tick.
    Step,
    /// The integrated position of the terminal tick.
    End,
}

/// Fire-and-forget debug rendering. Nothing here feeds back into
/// simulation.
pub trait DebugDraw {
    /// Draw a capsule marker at the given position.
    fn capsule(&mut self, position: Vec3, marker: DebugMarker);
}

/// A [`DebugDraw`] that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDebugDraw;

impl DebugDraw for NoDebugDraw {
    fn capsule(&mut self, _position: Vec3, _marker: DebugMarker) {}
}
