//! # motion_core
//!
//! Scripted-motion state machine and per-tick integrator.
//!
//! A *motion* is a time-bounded parametric displacement from a start pose
//! to a target pose (a scripted leap, a forced knockback), layered on top
//! of ordinary physics-driven locomotion. This crate provides:
//!
//! - [`state`] — [`MotionState`]: configuration plus runtime progress,
//!   with the start/resume/stop/ack/clear lifecycle.
//! - [`driver`] — [`MotionDriver`]: advances an active motion by one tick
//!   and applies the resulting pose through a [`MovementBackend`].
//! - [`backend`] — the capability traits the driver is wired to:
//!   [`MovementBackend`], [`CurveService`], [`DebugDraw`].
//! - [`mode`] — [`MovementMode`]: the locomotion mode enumeration.
//!
//! Network encoding of a motion and the prediction/reconciliation logic
//! live in the `motion_net` and `motion_predict` crates.

pub mod backend;
pub mod driver;
pub mod mode;
pub mod state;

pub use backend::{
    CurveId, CurveService, DebugDraw, DebugMarker, MoveContact, MovementBackend, NoDebugDraw,
};
pub use driver::{DriverSettings, MotionDriver};
pub use mode::MovementMode;
pub use state::{MotionConfig, MotionState};
