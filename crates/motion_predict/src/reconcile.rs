//! Acknowledgment, correction, and replay hooks.
//!
//! The surrounding prediction framework owns rollback and replay
//! sequencing; this engine supplies the motion-specific hooks it calls
//! at the right points:
//!
//! - [`record_tick`](ReconciliationEngine::record_tick) before every
//!   predicted tick integrates;
//! - [`ack_good_move`](ReconciliationEngine::ack_good_move) when the
//!   server confirms a move without correcting it;
//! - [`correction_received`](ReconciliationEngine::correction_received)
//!   when an authoritative correction arrives, before the framework
//!   rolls state back;
//! - [`prepare_replayed_move`](ReconciliationEngine::prepare_replayed_move)
//!   for each buffered move the framework then replays.
//!
//! The replay pass runs to completion before live simulation resumes, so
//! the hooks never interleave with new ticks.

use tracing::{debug, info};

use motion_core::MovementBackend;

use crate::component::CharacterMotion;
use crate::saved_move::{SavedMoveLog, SavedMoveRecord};

/// Binds a character's motion slot to its saved-move history and applies
/// the acknowledgment and correction rules.
#[derive(Debug, Default)]
pub struct ReconciliationEngine {
    log: SavedMoveLog,
}

impl ReconciliationEngine {
    /// Create an engine with a saved-move log bounded to `capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            log: SavedMoveLog::new(capacity),
        }
    }

    /// Returns the saved-move log.
    #[must_use]
    pub fn log(&self) -> &SavedMoveLog {
        &self.log
    }

    /// Capture this tick's record from the live state. Call before the
    /// tick integrates, so the record carries the elapsed time a replay
    /// must resume from.
    pub fn record_tick(&mut self, timestamp: f32, motion: &CharacterMotion) -> SavedMoveRecord {
        self.log.record(timestamp, motion.state())
    }

    /// The server confirmed the move at `timestamp` as-is.
    ///
    /// If the acknowledged record shows the motion was running with valid
    /// data, and the live motion still is (and has not been acknowledged
    /// yet), mark it acknowledged — the codec stops re-sending the
    /// snapshot from the next move on. Simulation itself is untouched.
    pub fn ack_good_move(&mut self, timestamp: f32, motion: &mut CharacterMotion) {
        let Some(acked) = self.log.acknowledge(timestamp) else {
            return;
        };

        if acked.active && acked.has_valid_data {
            let state = motion.state_mut();
            if state.is_active() && state.has_valid_data() && !state.is_acked() {
                state.ack();
                info!(timestamp, "motion acknowledged by server");
            }
        }
    }

    /// An authoritative correction arrived for the move at `timestamp`.
    ///
    /// Stops the live motion (retaining its configuration and elapsed
    /// time) so the framework can roll back and replay. A correction also
    /// confirms receipt of the move it corrects, so if the acknowledged
    /// record carried valid motion data the live motion is marked
    /// acknowledged here as well.
    pub fn correction_received(&mut self, timestamp: f32, motion: &mut CharacterMotion) {
        let acked = self.log.acknowledge(timestamp).copied();

        let state = motion.state_mut();
        if state.is_active() && state.has_valid_data() {
            state.stop();
            debug!(timestamp, "motion stopped for correction rollback");

            if let Some(acked) = acked
                && acked.has_valid_data
                && !state.is_acked()
            {
                state.ack();
                info!(timestamp, "motion acknowledged on correction");
            }
        }
    }

    /// The framework is about to replay the buffered move at `timestamp`.
    ///
    /// If that record shows the motion running, and the live motion holds
    /// valid data but is stopped (it was stopped by
    /// [`correction_received`](Self::correction_received) and not yet
    /// resumed), resume it at the record's elapsed time. The condition
    /// fails for every later record once the motion is running again, so
    /// the resume happens exactly once, at the first active record.
    ///
    /// Returns `true` if the motion was resumed by this call.
    pub fn prepare_replayed_move(
        &self,
        timestamp: f32,
        motion: &mut CharacterMotion,
        backend: &mut dyn MovementBackend,
    ) -> bool {
        let Some(record) = self.log.find(timestamp) else {
            return false;
        };

        let state = motion.state();
        if record.active && state.has_valid_data() && !state.is_active() {
            info!(
                timestamp,
                elapsed = record.elapsed,
                "resuming motion during replay"
            );
            motion.resume_motion(record.elapsed, backend);
            return true;
        }

        false
    }
}
