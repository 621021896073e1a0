//! # motion_net
//!
//! Wire encoding of motion snapshots.
//!
//! A motion snapshot is the configuration portion of a motion state,
//! piggybacked as an optional field on the client's regular outgoing
//! movement packet. This crate provides:
//!
//! - [`snapshot`] — [`MotionSnapshot`], the transient wire value.
//! - [`codec`] — byte-exact encode/decode with an explicit empty
//!   sentinel, and the omit-once-acknowledged rule.
//! - [`error`] — [`NetError`], the decode failure taxonomy.

pub mod codec;
pub mod error;
pub mod snapshot;

pub use codec::{decode_snapshot, encode_snapshot, EMPTY_LEN, SNAPSHOT_LEN};
pub use error::NetError;
pub use snapshot::MotionSnapshot;
