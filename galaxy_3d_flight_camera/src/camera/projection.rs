/// Perspective: projection parameters with a dirty flag.
///
/// Any write marks the projection dirty; the owner rebuilds the matrix on
/// its next update and clears the flag with `take_dirty()`.

use glam::Mat4;

/// Smallest accepted field of view, in degrees.
pub const FOV_MIN: f32 = 0.01;

/// Largest accepted field of view, in degrees.
pub const FOV_MAX: f32 = 179.99;

/// Perspective projection parameters.
///
/// `fov` is the vertical field of view in degrees and is always kept within
/// `[FOV_MIN, FOV_MAX]`. The other parameters are stored as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    fov: f32,
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,
    dirty: bool,
}

impl Perspective {
    /// Create a perspective. It starts dirty so the first update builds it.
    pub fn new(fov: f32, aspect_ratio: f32, near_plane: f32, far_plane: f32) -> Self {
        let mut perspective = Self {
            fov: FOV_MIN,
            aspect_ratio,
            near_plane,
            far_plane,
            dirty: true,
        };
        perspective.set_fov(fov);
        perspective
    }

    // ===== GETTERS =====

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    /// True when a parameter changed since the last `take_dirty()`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ===== SETTERS =====

    /// Set the field of view, clamped to `[FOV_MIN, FOV_MAX]`.
    pub fn set_fov(&mut self, value: f32) {
        let clamped = value.clamp(FOV_MIN, FOV_MAX);
        if clamped != value {
            crate::camera_trace!("flight::Perspective", "fov {} clamped to {}", value, clamped);
        }
        self.fov = clamped;
        self.dirty = true;
    }

    pub fn set_aspect_ratio(&mut self, value: f32) {
        self.aspect_ratio = value;
        self.dirty = true;
    }

    pub fn set_near_plane(&mut self, value: f32) {
        self.near_plane = value;
        self.dirty = true;
    }

    pub fn set_far_plane(&mut self, value: f32) {
        self.far_plane = value;
        self.dirty = true;
    }

    /// Force a rebuild on the next update.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Return the dirty flag and clear it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Right-handed perspective matrix with a `[0, 1]` depth range.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        )
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
