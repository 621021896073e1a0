//! Byte-exact motion payload codec.
//!
//! The payload rides inside the client's regular movement packet as an
//! optional trailing field. Layout (little-endian):
//!
//! | field               | size | encoding                                 |
//! |---------------------|------|------------------------------------------|
//! | presence tag        | 1 B  | `0` = empty sentinel, `1` = snapshot     |
//! | start position      | 12 B | 3 × `i32`, whole world units             |
//! | target position     | 12 B | 3 × `i32`                                |
//! | start rotation      | 5 B  | `u32` yaw16\|pitch16, then roll byte     |
//! | target rotation     | 5 B  | same                                     |
//! | easing curve ref    | 4 B  | `u32` curve id, `0` = none               |
//! | vertical curve ref  | 4 B  | `u32` curve id, `0` = none               |
//! | max vertical offset | 1 B  | `u8`                                     |
//! | duration            | 1 B  | `u8` time units                          |
//! | sweep flag          | 1 B  | `0`/`1`                                  |
//! | end mode            | 1 B  | `MovementMode` discriminant              |
//!
//! Each rotation costs 5 bytes instead of 12, trading angular precision
//! (1/65536 turn on yaw/pitch, 1/256 turn on roll) for bandwidth.
//!
//! The encoder's one piece of policy is the omit rule: a snapshot is
//! emitted only while the motion has valid data *and* has not been
//! acknowledged. Once the server acks, every subsequent move carries the
//! one-byte sentinel — that is the entire retransmission scheme.

use glam::Vec3;
use motion_core::{CurveId, MotionState, MovementMode};
use motion_math::{
    compress_axis_to_byte, decompress_axis_from_byte, pack_yaw_pitch, quantize_position,
    unpack_yaw_pitch, Pose, Rotator,
};

use crate::error::NetError;
use crate::snapshot::MotionSnapshot;

/// Presence tag for "no motion to report".
const TAG_EMPTY: u8 = 0;
/// Presence tag for "snapshot follows".
const TAG_SNAPSHOT: u8 = 1;

/// Encoded size of the empty sentinel.
pub const EMPTY_LEN: usize = 1;
/// Encoded size of a full snapshot payload, tag included.
pub const SNAPSHOT_LEN: usize = 47;

/// Append the motion payload for an outgoing move to `buf`.
///
/// Emits a full snapshot while the state holds valid, unacknowledged
/// data; otherwise emits the empty sentinel.
pub fn encode_snapshot(state: &MotionState, buf: &mut Vec<u8>) {
    if !state.has_valid_data() || state.is_acked() {
        buf.push(TAG_EMPTY);
        return;
    }

    let snapshot = MotionSnapshot::from_config(state.config());
    buf.reserve(SNAPSHOT_LEN);
    buf.push(TAG_SNAPSHOT);
    put_position(buf, snapshot.start.position);
    put_position(buf, snapshot.target.position);
    put_rotation(buf, snapshot.start.rotation);
    put_rotation(buf, snapshot.target.rotation);
    put_curve(buf, snapshot.easing_curve);
    put_curve(buf, snapshot.vertical_curve);
    buf.push(snapshot.max_vertical_offset);
    buf.push(snapshot.duration);
    buf.push(u8::from(snapshot.sweep));
    buf.push(snapshot.end_mode.as_u8());
}

/// Decode the motion payload at the start of `buf`.
///
/// Returns the decoded snapshot (`None` for the empty sentinel) and the
/// number of bytes consumed, so the surrounding packet framing can keep
/// reading after the field.
///
/// # Errors
///
/// [`NetError::Truncated`] if the buffer ends mid-payload,
/// [`NetError::UnknownTag`]/[`NetError::UnknownMode`] for bytes outside
/// the contract. On any error the caller should discard the whole move.
pub fn decode_snapshot(buf: &[u8]) -> Result<(Option<MotionSnapshot>, usize), NetError> {
    let mut reader = Reader::new(buf);

    match reader.u8()? {
        TAG_EMPTY => return Ok((None, reader.consumed())),
        TAG_SNAPSHOT => {}
        tag => return Err(NetError::UnknownTag(tag)),
    }

    let start_position = read_position(&mut reader)?;
    let target_position = read_position(&mut reader)?;
    let start_rotation = read_rotation(&mut reader)?;
    let target_rotation = read_rotation(&mut reader)?;
    let easing_curve = read_curve(&mut reader)?;
    let vertical_curve = read_curve(&mut reader)?;
    let max_vertical_offset = reader.u8()?;
    let duration = reader.u8()?;
    let sweep = reader.u8()? != 0;
    let mode_raw = reader.u8()?;
    let end_mode = MovementMode::from_u8(mode_raw).ok_or(NetError::UnknownMode(mode_raw))?;

    let snapshot = MotionSnapshot {
        start: Pose::new(start_position, start_rotation),
        target: Pose::new(target_position, target_rotation),
        duration,
        max_vertical_offset,
        easing_curve,
        vertical_curve,
        sweep,
        end_mode,
    };
    Ok((Some(snapshot), reader.consumed()))
}

fn put_position(buf: &mut Vec<u8>, pos: Vec3) {
    for unit in quantize_position(pos) {
        buf.extend_from_slice(&unit.to_le_bytes());
    }
}

fn put_rotation(buf: &mut Vec<u8>, rot: Rotator) {
    buf.extend_from_slice(&pack_yaw_pitch(rot.yaw, rot.pitch).to_le_bytes());
    buf.push(compress_axis_to_byte(rot.roll));
}

fn put_curve(buf: &mut Vec<u8>, curve: Option<CurveId>) {
    let raw = curve.map_or(0, CurveId::id);
    buf.extend_from_slice(&raw.to_le_bytes());
}

fn read_position(reader: &mut Reader<'_>) -> Result<Vec3, NetError> {
    let x = reader.i32()?;
    let y = reader.i32()?;
    let z = reader.i32()?;
    Ok(Vec3::new(x as f32, y as f32, z as f32))
}

fn read_rotation(reader: &mut Reader<'_>) -> Result<Rotator, NetError> {
    let (yaw, pitch) = unpack_yaw_pitch(reader.u32()?);
    let roll = decompress_axis_from_byte(reader.u8()?);
    Ok(Rotator::new(pitch, yaw, roll))
}

fn read_curve(reader: &mut Reader<'_>) -> Result<Option<CurveId>, NetError> {
    let raw = reader.u32()?;
    Ok((raw != 0).then_some(CurveId::from_raw(raw)))
}

/// Bounds-checked little-endian reader over a byte slice.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn consumed(&self) -> usize {
        self.pos
    }

    fn bytes<const N: usize>(&mut self) -> Result<[u8; N], NetError> {
        let available = self.buf.len() - self.pos;
        if available < N {
            return Err(NetError::Truncated {
                needed: N,
                available,
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8, NetError> {
        Ok(self.bytes::<1>()?[0])
    }

    fn u32(&mut self) -> Result<u32, NetError> {
        Ok(u32::from_le_bytes(self.bytes::<4>()?))
    }

    fn i32(&mut self) -> Result<i32, NetError> {
        Ok(i32::from_le_bytes(self.bytes::<4>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_core::MotionConfig;
    use motion_math::{AXIS_BYTE_STEP_DEG, AXIS_SHORT_STEP_DEG};

    fn sample_state() -> MotionState {
        let mut config = MotionConfig::new(
            Pose::new(Vec3::new(10.2, -4.8, 0.0), Rotator::new(10.0, 45.0, 0.0)),
            Pose::new(Vec3::new(110.0, 20.4, 30.0), Rotator::new(0.0, 135.0, 90.0)),
            10,
        );
        config.easing_curve = Some(CurveId::from_raw(7));
        config.max_vertical_offset = 50;
        config.sweep = true;
        config.end_mode = MovementMode::Falling;

        let mut state = MotionState::new();
        state.start(config);
        state
    }

    #[test]
    fn test_roundtrip_within_compression_tolerance() {
        let state = sample_state();
        let mut buf = Vec::new();
        encode_snapshot(&state, &mut buf);
        assert_eq!(buf.len(), SNAPSHOT_LEN);

        let (decoded, consumed) = decode_snapshot(&buf).unwrap();
        assert_eq!(consumed, SNAPSHOT_LEN);
        let snapshot = decoded.unwrap();

        // Exact fields.
        assert_eq!(snapshot.duration, 10);
        assert_eq!(snapshot.max_vertical_offset, 50);
        assert_eq!(snapshot.easing_curve, Some(CurveId::from_raw(7)));
        assert_eq!(snapshot.vertical_curve, None);
        assert!(snapshot.sweep);
        assert_eq!(snapshot.end_mode, MovementMode::Falling);

        // Positions within half a world unit (whole-unit quantization).
        let config = state.config();
        assert!((snapshot.start.position - config.start.position.round()).length() < 1e-4);
        assert!((snapshot.target.position - config.target.position.round()).length() < 1e-4);
        assert!((snapshot.start.position - config.start.position).length() <= 0.5 * 3f32.sqrt());

        // Rotations within the declared axis steps.
        assert!((snapshot.start.rotation.yaw - 45.0).abs() <= AXIS_SHORT_STEP_DEG);
        assert!((snapshot.start.rotation.pitch - 10.0).abs() <= AXIS_SHORT_STEP_DEG);
        assert!((snapshot.target.rotation.roll - 90.0).abs() <= AXIS_BYTE_STEP_DEG);
        assert!((snapshot.target.rotation.yaw - 135.0).abs() <= AXIS_SHORT_STEP_DEG);
    }

    #[test]
    fn test_acked_state_encodes_sentinel() {
        let mut state = sample_state();
        state.ack();

        let mut buf = Vec::new();
        encode_snapshot(&state, &mut buf);
        assert_eq!(buf, vec![0]);

        let (decoded, consumed) = decode_snapshot(&buf).unwrap();
        assert!(decoded.is_none());
        assert_eq!(consumed, EMPTY_LEN);
    }

    #[test]
    fn test_idle_state_encodes_sentinel() {
        let state = MotionState::new();
        let mut buf = Vec::new();
        encode_snapshot(&state, &mut buf);
        assert_eq!(buf, vec![0]);
    }

    #[test]
    fn test_stopped_unacked_state_still_encodes() {
        // Stop retains data; until acked the client keeps re-sending.
        let mut state = sample_state();
        state.stop();

        let mut buf = Vec::new();
        encode_snapshot(&state, &mut buf);
        assert_eq!(buf.len(), SNAPSHOT_LEN);
    }

    #[test]
    fn test_decode_tolerates_trailing_bytes() {
        let state = sample_state();
        let mut buf = Vec::new();
        encode_snapshot(&state, &mut buf);
        buf.extend_from_slice(&[0xAB, 0xCD]);

        let (decoded, consumed) = decode_snapshot(&buf).unwrap();
        assert!(decoded.is_some());
        assert_eq!(consumed, SNAPSHOT_LEN);
    }

    #[test]
    fn test_decode_empty_buffer_is_truncated() {
        let err = decode_snapshot(&[]).unwrap_err();
        assert!(matches!(err, NetError::Truncated { .. }));
    }

    #[test]
    fn test_decode_truncated_payload() {
        let state = sample_state();
        let mut buf = Vec::new();
        encode_snapshot(&state, &mut buf);
        buf.truncate(SNAPSHOT_LEN - 3);

        let err = decode_snapshot(&buf).unwrap_err();
        assert!(matches!(err, NetError::Truncated { .. }));
    }

    #[test]
    fn test_decode_unknown_tag() {
        let err = decode_snapshot(&[9]).unwrap_err();
        assert!(matches!(err, NetError::UnknownTag(9)));
    }

    #[test]
    fn test_decode_unknown_end_mode() {
        let state = sample_state();
        let mut buf = Vec::new();
        encode_snapshot(&state, &mut buf);
        *buf.last_mut().unwrap() = 200;

        let err = decode_snapshot(&buf).unwrap_err();
        assert!(matches!(err, NetError::UnknownMode(200)));
    }
}
