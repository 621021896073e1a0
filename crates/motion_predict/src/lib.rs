//! # motion_predict
//!
//! Client prediction and server reconciliation for scripted motions.
//!
//! The predicting client simulates its motion immediately, records a
//! [`SavedMoveRecord`] per tick, and keeps re-sending the motion snapshot
//! until the server acknowledges it. When a correction arrives the client
//! stops the motion, rolls back, and replays its buffered moves — resuming
//! the motion at the exact elapsed time the replayed record carries, so
//! client and server never drift.
//!
//! - [`saved_move`] — the per-tick record log and its combine rule.
//! - [`component`] — [`CharacterMotion`]: the movement-component glue
//!   owning the state and driver for one character.
//! - [`reconcile`] — [`ReconciliationEngine`]: ack, correction, and
//!   replay hooks plus the server's authoritative-start rule.

pub mod component;
pub mod reconcile;
pub mod saved_move;

pub use component::CharacterMotion;
pub use reconcile::ReconciliationEngine;
pub use saved_move::{SavedMoveLog, SavedMoveRecord};
