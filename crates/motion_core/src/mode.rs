//! Locomotion mode enumeration.

use serde::{Deserialize, Serialize};

/// The movement mode a character's locomotion solver runs in.
///
/// The motion core only ever writes two of these itself: [`Scripted`]
/// while a motion is driving the character, and whatever the motion's
/// configured end mode names once it completes. The rest exist so end
/// modes can name any ordinary mode.
///
/// [`Scripted`]: MovementMode::Scripted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum MovementMode {
    /// No locomotion; the character does not move.
    None = 0,
    /// Grounded locomotion.
    #[default]
    Walking = 1,
    /// Airborne, affected by gravity.
    Falling = 2,
    /// Buoyant volume locomotion.
    Swimming = 3,
    /// Free 3D locomotion, no gravity.
    Flying = 4,
    /// A scripted motion is driving the character; the ordinary solver
    /// is bypassed.
    Scripted = 5,
}

impl MovementMode {
    /// Returns the wire discriminant for this mode.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a wire discriminant. Returns `None` for unknown values.
    #[must_use]
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Walking),
            2 => Some(Self::Falling),
            3 => Some(Self::Swimming),
            4 => Some(Self::Flying),
            5 => Some(Self::Scripted),
            _ => None,
        }
    }
}
