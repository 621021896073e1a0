//! Pose and rotator types.
//!
//! A [`Pose`] is a position plus an orientation. Orientation is kept as a
//! [`Rotator`] (pitch/yaw/roll in degrees) rather than a quaternion because
//! the wire format compresses each axis independently, and because motion
//! interpolation is defined component-wise over the rotator axes.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// An orientation as Euler angles in degrees.
///
/// Interpolation is plain component-wise lerp, not shortest-path: a motion
/// authored from yaw 350° to yaw 10° sweeps through 180°, exactly as the
/// author wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotator {
    /// Rotation around the lateral axis, degrees.
    pub pitch: f32,
    /// Rotation around the vertical axis, degrees.
    pub yaw: f32,
    /// Rotation around the forward axis, degrees.
    pub roll: f32,
}

impl Rotator {
    /// The zero rotation.
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    /// Create a rotator from pitch, yaw, and roll in degrees.
    #[must_use]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Component-wise linear interpolation between two rotators.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            pitch: self.pitch + (other.pitch - self.pitch) * t,
            yaw: self.yaw + (other.yaw - self.yaw) * t,
            roll: self.roll + (other.roll - self.roll) * t,
        }
    }

    /// Convert to a unit quaternion (YXZ order: yaw, then pitch, then roll).
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            glam::EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }
}

impl Default for Rotator {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A world-space position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// Orientation as a rotator.
    pub rotation: Rotator,
}

impl Pose {
    /// The identity pose: origin, no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Rotator::ZERO,
    };

    /// Create a pose with the given position and zero rotation.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Create a pose with position and rotation.
    #[must_use]
    pub fn new(position: Vec3, rotation: Rotator) -> Self {
        Self { position, rotation }
    }

    /// Linearly interpolate position and rotation between two poses.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            rotation: self.rotation.lerp(other.rotation, t),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
