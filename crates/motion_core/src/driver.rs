//! Per-tick motion integration.
//!
//! The [`MotionDriver`] advances an active [`MotionState`] by one
//! simulation tick: it accumulates elapsed time, maps it through the
//! optional easing curve, lerps the pose, adds the optional vertical
//! offset, and applies the result through the [`MovementBackend`] as a
//! single kinematic displacement. On the terminal tick it forces the
//! fraction to exactly 1 — bypassing both curves — so the character
//! lands on the target pose regardless of curve shape, then restores the
//! configured end mode and clears the motion.

use tracing::debug;

use crate::backend::{CurveService, DebugDraw, DebugMarker, MovementBackend};
use crate::state::{MotionConfig, MotionState};

/// Tolerance for detecting the terminal step.
const TERMINAL_EPS: f32 = 1.0e-4;

/// Runtime settings injected into the driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverSettings {
    /// Draw debug capsules for motion endpoints and each integrated step.
    pub debug_draw: bool,
}

/// Advances a motion state by one tick and applies the resulting pose.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionDriver {
    settings: DriverSettings,
}

impl MotionDriver {
    /// Create a driver with the given settings.
    #[must_use]
    pub fn new(settings: DriverSettings) -> Self {
        Self { settings }
    }

    /// Returns the driver's settings.
    #[must_use]
    pub fn settings(&self) -> &DriverSettings {
        &self.settings
    }

    /// Draw the start/target endpoint markers for a freshly started
    /// motion. No-op unless debug drawing is enabled.
    pub fn draw_endpoints(&self, config: &MotionConfig, draw: &mut dyn DebugDraw) {
        if !self.settings.debug_draw {
            return;
        }
        draw.capsule(config.start.position, DebugMarker::Start);
        draw.capsule(config.target.position, DebugMarker::Target);
    }

    /// Integrate one tick of the active motion.
    ///
    /// Does nothing if `state` is not active. Otherwise advances elapsed
    /// time by `dt`, computes the new pose, and applies it via `backend`.
    /// If this tick reaches the motion's duration (within tolerance) the
    /// step is terminal: the pose is exactly the target, the backend is
    /// switched to the configured end mode, and `state` is cleared.
    pub fn step(
        &self,
        state: &mut MotionState,
        dt: f32,
        backend: &mut dyn MovementBackend,
        curves: &dyn CurveService,
        draw: &mut dyn DebugDraw,
    ) {
        if !state.is_active() {
            return;
        }

        let elapsed = state.advance(dt);
        let config = *state.config();
        let duration = f32::from(config.duration);

        let fraction = (elapsed / duration).min(1.0);
        let ended = 1.0 - fraction <= TERMINAL_EPS;

        // The terminal step skips the easing curve so arrival is exact
        // even for curves that do not end at 1.
        let lerp_t = if ended {
            1.0
        } else if let Some(curve) = config.easing_curve {
            curves.evaluate(curve, fraction)
        } else {
            fraction
        };

        let mut pose = config.start.lerp(config.target, lerp_t);

        // Vertical offset applies to the Z component only, and never on
        // the terminal step: fraction 1 already encodes exact arrival.
        if !ended && let Some(curve) = config.vertical_curve {
            pose.position.z += f32::from(config.max_vertical_offset) * curves.evaluate(curve, lerp_t);
        }

        backend.apply_kinematic_move(pose, config.sweep);

        if ended {
            debug!(end_mode = ?config.end_mode, "motion complete");
            backend.set_mode(config.end_mode);
            state.clear();
        }

        if self.settings.debug_draw {
            let marker = if ended {
                DebugMarker::End
            } else {
                DebugMarker::Step
            };
            draw.capsule(pose.position, marker);
        }
    }
}
