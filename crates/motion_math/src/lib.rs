//! # motion_math
//!
//! Math types for the networked motion library. Re-exports [`glam`] for
//! linear algebra and defines the spatial and quantization primitives the
//! motion wire format is built on.

pub mod axis;
pub mod pose;

// Re-export glam types for convenience.
pub use glam::{Quat, Vec3};

pub use axis::{
    compress_axis_to_byte, compress_axis_to_short, decompress_axis_from_byte,
    decompress_axis_from_short, pack_yaw_pitch, quantize_position, unpack_yaw_pitch,
    AXIS_BYTE_STEP_DEG, AXIS_SHORT_STEP_DEG,
};
pub use pose::{Pose, Rotator};
