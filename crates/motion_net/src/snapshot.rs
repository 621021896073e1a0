//! The transient wire value for a motion's configuration.

use motion_core::{CurveId, MotionConfig, MovementMode};
use motion_math::Pose;
use serde::{Deserialize, Serialize};

/// The configuration portion of a motion state as it travels from client
/// to server.
///
/// A snapshot exists only during encode/decode; the server immediately
/// converts a decoded snapshot into a [`MotionConfig`] for its own
/// authoritative start. Runtime progress (elapsed time, active/acked
/// flags) never crosses the wire — the server integrates its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSnapshot {
    /// Pose the motion departs from.
    pub start: Pose,
    /// Pose the motion arrives at.
    pub target: Pose,
    /// Total motion time in whole time units (always > 0 on the wire;
    /// "no motion" is the empty sentinel, not a zero duration).
    pub duration: u8,
    /// Peak vertical offset, world units.
    pub max_vertical_offset: u8,
    /// Optional easing curve handle.
    pub easing_curve: Option<CurveId>,
    /// Optional vertical curve handle.
    pub vertical_curve: Option<CurveId>,
    /// Whether the per-tick kinematic move sweeps.
    pub sweep: bool,
    /// Locomotion mode restored on completion.
    pub end_mode: MovementMode,
}

impl MotionSnapshot {
    /// Capture a snapshot of a motion configuration.
    #[must_use]
    pub fn from_config(config: &MotionConfig) -> Self {
        Self {
            start: config.start,
            target: config.target,
            duration: config.duration,
            max_vertical_offset: config.max_vertical_offset,
            easing_curve: config.easing_curve,
            vertical_curve: config.vertical_curve,
            sweep: config.sweep,
            end_mode: config.end_mode,
        }
    }

    /// Convert the snapshot into a configuration the receiving side can
    /// start.
    #[must_use]
    pub fn into_config(self) -> MotionConfig {
        MotionConfig {
            start: self.start,
            target: self.target,
            duration: self.duration,
            max_vertical_offset: self.max_vertical_offset,
            easing_curve: self.easing_curve,
            vertical_curve: self.vertical_curve,
            sweep: self.sweep,
            end_mode: self.end_mode,
        }
    }
}
