//! Movement-component glue for one character's scripted motion.

use tracing::debug;

use motion_core::{
    CurveService, DebugDraw, DriverSettings, MotionConfig, MotionDriver, MotionState,
    MovementBackend, MovementMode,
};
use motion_net::{encode_snapshot, MotionSnapshot};

/// One character's scripted-motion slot, as owned by its movement
/// component. Wraps the state machine and driver and sequences the
/// backend calls around starting and resuming.
///
/// Both sides of the connection own one of these per character: the
/// client predicts with it, the server simulates it authoritatively.
#[derive(Debug, Default)]
pub struct CharacterMotion {
    state: MotionState,
    driver: MotionDriver,
}

impl CharacterMotion {
    /// Create an idle motion slot with the given driver settings.
    #[must_use]
    pub fn new(settings: DriverSettings) -> Self {
        Self {
            state: MotionState::new(),
            driver: MotionDriver::new(settings),
        }
    }

    /// Returns the motion state.
    #[must_use]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Returns a mutable reference to the motion state. Reconciliation
    /// hooks use this to stop and acknowledge the motion.
    pub fn state_mut(&mut self) -> &mut MotionState {
        &mut self.state
    }

    /// Start a new motion.
    ///
    /// Halts ordinary locomotion, switches to the scripted movement mode,
    /// and begins integrating from elapsed time zero. Returns `false`
    /// without side effects if a motion is already active or still holds
    /// valid data — a repeated start never restarts an in-flight motion.
    pub fn start_motion(
        &mut self,
        config: MotionConfig,
        backend: &mut dyn MovementBackend,
        draw: &mut dyn DebugDraw,
    ) -> bool {
        if !self.state.start(config) {
            return false;
        }

        backend.stop_immediately();
        backend.set_mode(MovementMode::Scripted);
        self.driver.draw_endpoints(self.state.config(), draw);
        debug!(duration = config.duration, "motion started");
        true
    }

    /// Resume the installed motion from elapsed time `t`.
    ///
    /// Precondition: valid data is installed. Used by the replay pass
    /// after a correction; also what a fresh start calls with `t = 0`.
    pub fn resume_motion(&mut self, t: f32, backend: &mut dyn MovementBackend) {
        backend.stop_immediately();
        backend.set_mode(MovementMode::Scripted);
        self.state.resume(t);
    }

    /// Integrate one simulation tick. No-op while no motion is active.
    pub fn tick(
        &mut self,
        dt: f32,
        backend: &mut dyn MovementBackend,
        curves: &dyn CurveService,
        draw: &mut dyn DebugDraw,
    ) {
        self.driver.step(&mut self.state, dt, backend, curves, draw);
    }

    /// Append this character's motion payload to an outgoing move
    /// packet (snapshot while unacknowledged, sentinel otherwise).
    pub fn encode_outgoing(&self, buf: &mut Vec<u8>) {
        encode_snapshot(&self.state, buf);
    }

    /// Server-side intake of a decoded motion payload.
    ///
    /// The first time a snapshot with valid data arrives while this slot
    /// is idle, the motion starts authoritatively and this side becomes
    /// the source of truth. Repeats of the snapshot (the client keeps
    /// sending until its ack arrives) fall into the start refusal and are
    /// no-ops. Returns `true` if the motion was started.
    pub fn server_apply_snapshot(
        &mut self,
        snapshot: Option<&MotionSnapshot>,
        backend: &mut dyn MovementBackend,
        draw: &mut dyn DebugDraw,
    ) -> bool {
        let Some(snapshot) = snapshot else {
            return false;
        };

        let config = snapshot.into_config();
        if !config.has_valid_data() {
            return false;
        }
        if self.state.is_active() || self.state.has_valid_data() {
            return false;
        }

        self.start_motion(config, backend, draw)
    }
}
