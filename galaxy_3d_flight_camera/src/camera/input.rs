/// Per-frame camera intents.
///
/// The host polls its own devices and reduces them to plain values:
/// - movement: one of {-1, 0, 1} per axis (X strafe, Y vertical, Z forward/back, forward is -Z)
/// - rotation: (pitch, yaw, roll) deltas, usually pointer motion in pixels plus a roll key
/// - zoom: one of {-1, 0, 1}, added to the field of view
///
/// Nothing here talks to a device. The helpers only encode the key
/// precedence rules the camera was tuned with.

use glam::Vec3;

/// Resolve a pair of opposing keys into -1, 0 or 1.
///
/// The negative key wins when both are held.
pub fn axis(negative: bool, positive: bool) -> f32 {
    if negative {
        -1.0
    } else if positive {
        1.0
    } else {
        0.0
    }
}

/// Rotation intent from pointer motion since the pointer was re-centered.
///
/// Pointer right gives a negative yaw (turn right), pointer down gives a
/// negative pitch (look down). Returns (pitch, yaw, roll).
pub fn rotation_from_pointer(dx: f32, dy: f32, roll: f32) -> Vec3 {
    Vec3::new(-dy, -dx, roll)
}

/// Held state of the six movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub up: bool,
}

impl MovementKeys {
    /// Camera-local movement intent.
    pub fn intent(&self) -> Vec3 {
        Vec3::new(
            axis(self.left, self.right),
            axis(self.down, self.up),
            axis(self.forward, self.backward),
        )
    }
}

/// Held state of the zoom keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoomKeys {
    /// Narrows the field of view
    pub zoom_in: bool,
    /// Widens the field of view
    pub zoom_out: bool,
}

impl ZoomKeys {
    pub fn intent(&self) -> f32 {
        axis(self.zoom_in, self.zoom_out)
    }
}

/// The three intents consumed by one `Camera::update` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub movement: Vec3,
    pub rotation: Vec3,
    pub zoom: f32,
}

impl FrameInput {
    pub fn new(movement: Vec3, rotation: Vec3, zoom: f32) -> Self {
        Self { movement, rotation, zoom }
    }

    /// No movement, rotation or zoom.
    pub fn idle() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, 0.0)
    }

    pub fn is_idle(&self) -> bool {
        self.movement == Vec3::ZERO && self.rotation == Vec3::ZERO && self.zoom == 0.0
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
