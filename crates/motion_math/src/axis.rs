//! Angle-axis and position quantization.
//!
//! The motion wire format compresses each orientation down to 5 bytes:
//! yaw and pitch as 16-bit fixed-point fractions of a full turn packed
//! into one `u32`, roll as an 8-bit fraction. Positions quantize to
//! whole world units. These functions are the bit-exact contract the
//! codec round-trip tests pin down.

use glam::Vec3;

/// Quantization step for a 16-bit compressed axis, in degrees.
pub const AXIS_SHORT_STEP_DEG: f32 = 360.0 / 65536.0;

/// Quantization step for an 8-bit compressed axis, in degrees.
pub const AXIS_BYTE_STEP_DEG: f32 = 360.0 / 256.0;

/// Compress an angle in degrees to a 16-bit fraction of a full turn.
///
/// Any input angle maps onto [0, 360) by modular wrapping, so negative
/// angles are well-defined (`-90.0` compresses to the same code as
/// `270.0`).
#[must_use]
pub fn compress_axis_to_short(deg: f32) -> u16 {
    ((deg * (65536.0 / 360.0)).round() as i64 & 0xFFFF) as u16
}

/// Decompress a 16-bit axis code back to degrees in [0, 360).
#[must_use]
pub fn decompress_axis_from_short(code: u16) -> f32 {
    f32::from(code) * AXIS_SHORT_STEP_DEG
}

/// Compress an angle in degrees to an 8-bit fraction of a full turn.
#[must_use]
pub fn compress_axis_to_byte(deg: f32) -> u8 {
    ((deg * (256.0 / 360.0)).round() as i64 & 0xFF) as u8
}

/// Decompress an 8-bit axis code back to degrees in [0, 360).
#[must_use]
pub fn decompress_axis_from_byte(code: u8) -> f32 {
    f32::from(code) * AXIS_BYTE_STEP_DEG
}

/// Pack compressed yaw and pitch into a single 32-bit word (yaw in the
/// high half, pitch in the low half).
#[must_use]
pub fn pack_yaw_pitch(yaw_deg: f32, pitch_deg: f32) -> u32 {
    let yaw = u32::from(compress_axis_to_short(yaw_deg));
    let pitch = u32::from(compress_axis_to_short(pitch_deg));
    (yaw << 16) | pitch
}

/// Unpack a 32-bit yaw/pitch word into `(yaw_deg, pitch_deg)`.
#[must_use]
pub fn unpack_yaw_pitch(word: u32) -> (f32, f32) {
    let yaw = (word >> 16) as u16;
    let pitch = (word & 0xFFFF) as u16;
    (
        decompress_axis_from_short(yaw),
        decompress_axis_from_short(pitch),
    )
}

/// Quantize a position to whole world units, rounding to nearest.
#[must_use]
pub fn quantize_position(pos: Vec3) -> [i32; 3] {
    [
        pos.x.round() as i32,
        pos.y.round() as i32,
        pos.z.round() as i32,
    ]
}
