/// Orientation: pitch, yaw and roll angles in radians.
///
/// Every setter applies a single-step wrap: one full turn is added or
/// subtracted when the value leaves `[0, 2π)`. This is not a modulo, so a
/// value more than one turn out of range stays out of range after the wrap.

use glam::{EulerRot, Mat4};

/// One full turn in radians.
pub const TWO_PI: f32 = std::f32::consts::TAU;

/// Wrap an angle by at most one full turn.
///
/// - `value > 2π` → `value - 2π`
/// - `value < 0` → `value + 2π`
/// - otherwise unchanged
pub fn wrap_angle(value: f32) -> f32 {
    if value > TWO_PI {
        value - TWO_PI
    } else if value < 0.0 {
        value + TWO_PI
    } else {
        value
    }
}

/// True when `0 <= angle < 2π`.
pub fn is_normalized(angle: f32) -> bool {
    (0.0..TWO_PI).contains(&angle)
}

/// Pitch (X axis), yaw (Y axis) and roll (Z axis) of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pitch: f32,
    yaw: f32,
    roll: f32,
}

impl Orientation {
    /// Build an orientation, wrapping each angle.
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        let mut orientation = Self::default();
        orientation.set_pitch(pitch);
        orientation.set_yaw(yaw);
        orientation.set_roll(roll);
        orientation
    }

    // ===== GETTERS =====

    /// Rotation around the local X axis (up/down).
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Rotation around the local Y axis (left/right).
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Rotation around the local Z axis.
    pub fn roll(&self) -> f32 {
        self.roll
    }

    // ===== SETTERS =====

    pub fn set_pitch(&mut self, value: f32) {
        self.pitch = Self::wrap_logged("pitch", value);
    }

    pub fn set_yaw(&mut self, value: f32) {
        self.yaw = Self::wrap_logged("yaw", value);
    }

    pub fn set_roll(&mut self, value: f32) {
        self.roll = Self::wrap_logged("roll", value);
    }

    /// Zero all three angles.
    pub fn reset(&mut self) {
        self.pitch = 0.0;
        self.yaw = 0.0;
        self.roll = 0.0;
    }

    /// Rotation matrix for the current angles.
    ///
    /// Roll is applied first, then pitch, then yaw (`R = Ry * Rx * Rz`).
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }

    fn wrap_logged(axis: &str, value: f32) -> f32 {
        let wrapped = wrap_angle(value);
        if !is_normalized(wrapped) {
            crate::camera_warn!(
                "flight::Orientation",
                "{} {} is still outside [0, 2pi) after a single wrap (input {})",
                axis,
                wrapped,
                value
            );
        }
        wrapped
    }
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
