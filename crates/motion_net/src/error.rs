//! Wire-layer error types.

/// Errors that can occur while decoding a motion payload.
///
/// A decode failure means the surrounding move is malformed; the caller
/// is expected to discard the whole move.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// The buffer ended before the payload was complete.
    #[error("truncated motion payload: needed {needed} bytes, had {available}")]
    Truncated {
        /// Bytes the decoder still needed.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },

    /// The presence tag was neither the empty sentinel nor the snapshot
    /// marker.
    #[error("unknown presence tag: {0:#04x}")]
    UnknownTag(u8),

    /// The end-mode byte did not name a known movement mode.
    #[error("unknown movement mode discriminant: {0}")]
    UnknownMode(u8),
}
