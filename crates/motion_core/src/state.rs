//! Motion configuration and the motion state machine.
//!
//! A [`MotionState`] holds one scripted motion: the immutable
//! configuration installed at start, plus the runtime progress the driver
//! mutates every tick. Its lifecycle is deliberately small:
//!
//! - `start(config)` — install a configuration and begin running.
//!   Refuses (a silent no-op) if a motion is already active or still
//!   holds unconsumed valid data; a repeated start never overwrites an
//!   in-flight motion.
//! - `resume(t)` — begin running from elapsed time `t`. Used for a
//!   fresh start (`t = 0`) and to pick a motion back up mid-flight
//!   when buffered moves are replayed after a server correction.
//! - `stop()` — pause without losing configuration or elapsed time.
//! - `ack()` — the server has confirmed this motion; the codec stops
//!   re-sending it.
//! - `clear()` — back to the idle, no-data state.

use motion_math::Pose;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend::CurveId;
use crate::mode::MovementMode;

/// Configuration of a scripted motion, immutable once installed.
///
/// `duration == 0` means "no motion": it is the semantic empty value the
/// wire sentinel maps to, never an error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Pose the motion departs from.
    pub start: Pose,
    /// Pose the motion arrives at.
    pub target: Pose,
    /// Total motion time in whole time units (1–255; 0 = no data).
    pub duration: u8,
    /// Peak vertical offset added by the vertical curve, world units.
    pub max_vertical_offset: u8,
    /// Optional easing curve remapping time fraction to lerp fraction.
    pub easing_curve: Option<CurveId>,
    /// Optional curve scaling the vertical offset over time.
    pub vertical_curve: Option<CurveId>,
    /// Whether the per-tick kinematic move sweeps against geometry.
    pub sweep: bool,
    /// Locomotion mode restored when the motion completes.
    pub end_mode: MovementMode,
}

impl MotionConfig {
    /// Create a motion configuration from endpoints and duration, with no
    /// curves, no sweep, and a walking end mode.
    #[must_use]
    pub fn new(start: Pose, target: Pose, duration: u8) -> Self {
        Self {
            start,
            target,
            duration,
            max_vertical_offset: 0,
            easing_curve: None,
            vertical_curve: None,
            sweep: false,
            end_mode: MovementMode::Walking,
        }
    }

    /// Returns `true` if this configuration describes an actual motion.
    #[must_use]
    pub const fn has_valid_data(&self) -> bool {
        self.duration > 0
    }
}

/// Two configurations are the same motion if their endpoints and duration
/// match; curves, sweep, and end mode are presentation details of the
/// same displacement.
impl PartialEq for MotionConfig {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.target == other.target && self.duration == other.duration
    }
}

/// One character's scripted-motion slot: configuration plus runtime
/// progress. At most one motion is active per character at a time.
#[derive(Debug, Clone, Default)]
pub struct MotionState {
    /// Installed configuration (all-zero when idle).
    config: MotionConfig,
    /// Accumulated simulation time since the motion started.
    elapsed: f32,
    /// Whether the driver is integrating this motion each tick.
    active: bool,
    /// Whether the server has acknowledged this motion.
    acked: bool,
}

impl MotionState {
    /// Create an idle motion state with no valid data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the installed configuration.
    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Returns `true` if a configuration with a positive duration is
    /// installed (whether or not it is currently running).
    #[must_use]
    pub fn has_valid_data(&self) -> bool {
        self.config.has_valid_data()
    }

    /// Returns `true` while the motion is being integrated each tick.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` once the server has acknowledged this motion.
    #[must_use]
    pub fn is_acked(&self) -> bool {
        self.acked
    }

    /// Returns the accumulated elapsed time in time units.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Install `config` and start running from elapsed time zero.
    ///
    /// Returns `false` without touching anything if a motion is already
    /// active or still holds valid data. Repeats of the same start (the
    /// server re-decoding an unacked snapshot, say) are therefore no-ops
    /// rather than restarts.
    pub fn start(&mut self, config: MotionConfig) -> bool {
        if self.active || self.has_valid_data() {
            debug!("start refused: motion already in progress");
            return false;
        }
        if !config.has_valid_data() {
            // Zero duration is the semantic "no motion" value, not an error.
            return false;
        }

        self.config = config;
        self.resume(0.0);
        true
    }

    /// Begin running from elapsed time `t`.
    ///
    /// Precondition: valid data is installed. Calling this on an idle
    /// state is a caller bug.
    pub fn resume(&mut self, t: f32) {
        debug_assert!(self.has_valid_data(), "resume without valid motion data");

        self.elapsed = t;
        self.active = true;
    }

    /// Pause integration. Configuration and elapsed time are retained so
    /// the motion can be resumed; contrast with [`clear`](Self::clear).
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Mark the motion acknowledged by the server. Independent of whether
    /// the motion is still running.
    pub fn ack(&mut self) {
        self.acked = true;
    }

    /// Reset to the idle state: no configuration, no progress, not
    /// acknowledged.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Advance elapsed time by `dt`, returning the new total. Driver use
    /// only.
    pub(crate) fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn config(duration: u8) -> MotionConfig {
        MotionConfig::new(
            Pose::from_position(Vec3::ZERO),
            Pose::from_position(Vec3::new(100.0, 0.0, 0.0)),
            duration,
        )
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = MotionState::new();
        assert!(!state.has_valid_data());
        assert!(!state.is_active());
        assert!(!state.is_acked());
        assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_start_activates() {
        let mut state = MotionState::new();
        assert!(state.start(config(10)));
        assert!(state.is_active());
        assert!(state.has_valid_data());
        assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_start_refuses_while_active() {
        let mut state = MotionState::new();
        assert!(state.start(config(10)));
        state.advance(3.0);

        // A repeated start must not reset the in-flight motion.
        let other = config(42);
        assert!(!state.start(other));
        assert_eq!(state.config().duration, 10);
        assert_eq!(state.elapsed(), 3.0);
    }

    #[test]
    fn test_start_refuses_while_stopped_with_data() {
        let mut state = MotionState::new();
        state.start(config(10));
        state.stop();

        // Stopped but data retained: still refuses.
        assert!(!state.start(config(5)));
        assert_eq!(state.config().duration, 10);
    }

    #[test]
    fn test_stop_retains_data_clear_does_not() {
        let mut state = MotionState::new();
        state.start(config(10));
        state.advance(4.0);

        state.stop();
        assert!(!state.is_active());
        assert!(state.has_valid_data());
        assert_eq!(state.elapsed(), 4.0);

        state.clear();
        assert!(!state.has_valid_data());
        assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_resume_mid_flight() {
        let mut state = MotionState::new();
        state.start(config(10));
        state.advance(4.0);
        state.stop();

        state.resume(2.0);
        assert!(state.is_active());
        assert_eq!(state.elapsed(), 2.0);
    }

    #[test]
    fn test_ack_is_orthogonal_to_active() {
        let mut state = MotionState::new();
        state.start(config(10));
        state.ack();
        assert!(state.is_acked());
        assert!(state.is_active());

        state.stop();
        assert!(state.is_acked());

        state.clear();
        assert!(!state.is_acked());
    }

    #[test]
    fn test_start_refuses_zero_duration() {
        let mut state = MotionState::new();
        assert!(!state.start(config(0)));
        assert!(!state.has_valid_data());
        assert!(!state.is_active());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = config(10);
        config.easing_curve = Some(crate::backend::CurveId::from_raw(4));
        config.end_mode = MovementMode::Flying;

        let bytes = rmp_serde::to_vec(&config).unwrap();
        let restored: MotionConfig = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(restored, config);
        assert_eq!(restored.easing_curve, config.easing_curve);
        assert_eq!(restored.end_mode, MovementMode::Flying);
    }

    #[test]
    fn test_config_equality_ignores_presentation() {
        let mut a = config(10);
        let mut b = config(10);
        a.sweep = true;
        b.end_mode = MovementMode::Falling;
        assert_eq!(a, b);

        b.duration = 9;
        assert_ne!(a, b);
    }
}
