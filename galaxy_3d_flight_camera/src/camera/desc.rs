/// Camera descriptor: construction parameters as plain data.

use glam::Vec3;
use crate::error::{Error, Result};

/// Parameters used to build a `Camera`.
///
/// Speeds are per millisecond of elapsed frame time. `fov` is in degrees
/// and is clamped by the camera rather than rejected here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDesc {
    /// Spawn position in world space
    pub position: Vec3,
    /// World units per millisecond for a unit movement intent
    pub move_speed: f32,
    /// Radians per millisecond for a unit rotation intent
    pub rotation_speed: f32,
    /// Degrees per millisecond for a unit zoom intent
    pub zoom_speed: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for CameraDesc {
    /// Spacecraft camera tuning: slow pointer look, a very deep far plane.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 20.0),
            move_speed: 0.01,
            rotation_speed: 0.0001,
            zoom_speed: 0.01,
            fov: 45.0,
            aspect_ratio: 16.0 / 9.0,
            near_plane: 0.1,
            far_plane: 1_000_000.0,
        }
    }
}

impl CameraDesc {
    /// Check that the descriptor builds a usable camera.
    ///
    /// The camera itself never rejects input; this is an opt-in check for
    /// callers that load camera settings from outside the program.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("move_speed", self.move_speed),
            ("rotation_speed", self.rotation_speed),
            ("zoom_speed", self.zoom_speed),
            ("fov", self.fov),
            ("aspect_ratio", self.aspect_ratio),
            ("near_plane", self.near_plane),
            ("far_plane", self.far_plane),
        ];

        if !self.position.is_finite() {
            return Err(Self::reject(Error::NonFiniteValue(format!(
                "position is {:?}",
                self.position
            ))));
        }

        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(Self::reject(Error::NonFiniteValue(format!("{} is {}", name, value))));
            }
        }

        for (name, value) in &scalars[..3] {
            if *value < 0.0 {
                return Err(Self::reject(Error::InvalidParameter(format!(
                    "{} is negative ({})",
                    name, value
                ))));
            }
        }

        if self.aspect_ratio <= 0.0 {
            return Err(Self::reject(Error::InvalidProjection(format!(
                "aspect_ratio must be positive ({})",
                self.aspect_ratio
            ))));
        }

        if self.near_plane <= 0.0 {
            return Err(Self::reject(Error::InvalidProjection(format!(
                "near_plane must be positive ({})",
                self.near_plane
            ))));
        }

        if self.far_plane <= self.near_plane {
            return Err(Self::reject(Error::InvalidProjection(format!(
                "far_plane ({}) <= near_plane ({})",
                self.far_plane, self.near_plane
            ))));
        }

        Ok(())
    }

    fn reject(error: Error) -> Error {
        crate::camera_error!("flight::CameraDesc", "Rejected camera descriptor: {}", error);
        error
    }
}

#[cfg(test)]
#[path = "desc_tests.rs"]
mod tests;
