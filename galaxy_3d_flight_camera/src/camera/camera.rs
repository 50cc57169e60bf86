/// Camera: free-flight camera driven by per-frame intents.
///
/// The camera owns its orientation, position and perspective parameters and
/// derives the rotation, view and projection matrices plus the view frustum
/// from them. It is a plain value owned by the caller's frame loop: call
/// `update()` once per frame, then read `view_matrix()` / `projection_matrix()`
/// (or `uniform()`) to feed the renderer.
///
/// Recomputation rules:
/// - the projection matrix is rebuilt only when a perspective parameter changed
/// - the rotation and view matrices are rebuilt on every update
/// - every write to the view or projection matrix rebuilds the frustum

use std::time::Duration;
use glam::{Mat4, Vec3};
use crate::error::Result;
use super::desc::CameraDesc;
use super::frustum::Frustum;
use super::input::FrameInput;
use super::orientation::Orientation;
use super::projection::Perspective;
use super::uniform::CameraUniform;

/// Free-flight camera.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    orientation: Orientation,
    perspective: Perspective,

    move_speed: f32,
    rotation_speed: f32,
    zoom_speed: f32,

    rotation_matrix: Mat4,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
}

impl Camera {
    /// Create a camera.
    ///
    /// Projection parameters go through the same setters as later writes, so
    /// `fov` is clamped and the projection starts dirty. Matrices stay at
    /// identity until the first `update()`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: Vec3,
        move_speed: f32,
        rotation_speed: f32,
        zoom_speed: f32,
        fov: f32,
        aspect_ratio: f32,
        near_plane: f32,
        far_plane: f32,
    ) -> Self {
        let camera = Self {
            position,
            orientation: Orientation::default(),
            perspective: Perspective::new(fov, aspect_ratio, near_plane, far_plane),
            move_speed,
            rotation_speed,
            zoom_speed,
            rotation_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            frustum: Frustum::from_view_projection(&Mat4::IDENTITY),
        };

        crate::camera_debug!(
            "flight::Camera",
            "Camera created at {} (fov {}, aspect {}, near {}, far {})",
            position,
            camera.fov(),
            aspect_ratio,
            near_plane,
            far_plane
        );

        camera
    }

    /// Create a camera from a descriptor without validating it.
    pub fn from_desc(desc: &CameraDesc) -> Self {
        Self::new(
            desc.position,
            desc.move_speed,
            desc.rotation_speed,
            desc.zoom_speed,
            desc.fov,
            desc.aspect_ratio,
            desc.near_plane,
            desc.far_plane,
        )
    }

    /// Validate a descriptor, then create a camera from it.
    pub fn try_from_desc(desc: &CameraDesc) -> Result<Self> {
        desc.validate()?;
        Ok(Self::from_desc(desc))
    }

    // ===== PER-FRAME UPDATE =====

    /// Advance the camera by one frame.
    ///
    /// - `elapsed`: time since the previous frame (used in milliseconds)
    /// - `movement`: camera-local movement intent (X strafe, Y vertical, Z forward/back)
    /// - `rotation`: (pitch, yaw, roll) intent
    /// - `zoom`: field of view intent
    ///
    /// Zero components mean "no input" and leave the related state untouched.
    pub fn update(&mut self, elapsed: Duration, movement: Vec3, rotation: Vec3, zoom: f32) {
        let elapsed_ms = (elapsed.as_secs_f64() * 1000.0) as f32;

        self.rotate(elapsed_ms, rotation);
        self.advance(elapsed_ms, movement);
        self.zoom(elapsed_ms, zoom);

        self.update_projection();
        self.update_view();
    }

    /// Advance the camera by one frame using bundled intents.
    pub fn apply(&mut self, elapsed: Duration, input: &FrameInput) {
        self.update(elapsed, input.movement, input.rotation, input.zoom);
    }

    /// Roll, then yaw, then pitch; then refresh the view for the new basis.
    fn rotate(&mut self, elapsed_ms: f32, rotation: Vec3) {
        let step = self.rotation_speed * elapsed_ms;

        if rotation.z != 0.0 {
            self.set_roll(self.roll() + rotation.z * step);
        }
        if rotation.y != 0.0 {
            self.set_yaw(self.yaw() + rotation.y * step);
        }
        if rotation.x != 0.0 {
            self.set_pitch(self.pitch() + rotation.x * step);
        }

        self.update_view();
    }

    /// Move along the camera-local axes.
    fn advance(&mut self, elapsed_ms: f32, movement: Vec3) {
        if movement != Vec3::ZERO {
            let world = self.rotation_matrix.transform_vector3(movement);
            self.position += world * self.move_speed * elapsed_ms;
        }
    }

    fn zoom(&mut self, elapsed_ms: f32, zoom: f32) {
        if zoom != 0.0 {
            self.set_fov(self.fov() + zoom * self.zoom_speed * elapsed_ms);
        }
    }

    fn update_projection(&mut self) {
        if self.perspective.take_dirty() {
            self.set_projection(self.perspective.matrix());
            crate::camera_trace!(
                "flight::Camera",
                "Projection rebuilt (fov {}, aspect {}, near {}, far {})",
                self.perspective.fov(),
                self.perspective.aspect_ratio(),
                self.perspective.near_plane(),
                self.perspective.far_plane()
            );
        }
    }

    fn update_view(&mut self) {
        self.rotation_matrix = self.orientation.rotation_matrix();
        let forward = self.forward();
        let up = self.up();
        self.set_view(Mat4::look_at_rh(self.position, self.position + forward, up));
    }

    // ===== DERIVED STATE =====

    fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
        self.frustum = Frustum::from_view_projection(&self.view_projection_matrix());
    }

    fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
        self.frustum = Frustum::from_view_projection(&self.view_projection_matrix());
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn pitch(&self) -> f32 {
        self.orientation.pitch()
    }

    pub fn yaw(&self) -> f32 {
        self.orientation.yaw()
    }

    pub fn roll(&self) -> f32 {
        self.orientation.roll()
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.perspective.fov()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.perspective.aspect_ratio()
    }

    pub fn near_plane(&self) -> f32 {
        self.perspective.near_plane()
    }

    pub fn far_plane(&self) -> f32 {
        self.perspective.far_plane()
    }

    pub fn perspective(&self) -> &Perspective {
        &self.perspective
    }

    /// True when the projection matrix will be rebuilt on the next update.
    pub fn is_projection_dirty(&self) -> bool {
        self.perspective.is_dirty()
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn zoom_speed(&self) -> f32 {
        self.zoom_speed
    }

    /// Rotation built from the angles at the last update.
    pub fn rotation_matrix(&self) -> &Mat4 {
        &self.rotation_matrix
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Frustum of the current view-projection.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// World-space forward direction (-Z of the rotation).
    pub fn forward(&self) -> Vec3 {
        self.rotation_matrix.transform_vector3(Vec3::NEG_Z)
    }

    /// World-space up direction (+Y of the rotation).
    pub fn up(&self) -> Vec3 {
        self.rotation_matrix.transform_vector3(Vec3::Y)
    }

    /// World-space right direction (+X of the rotation).
    pub fn right(&self) -> Vec3 {
        self.rotation_matrix.transform_vector3(Vec3::X)
    }

    /// GPU-ready snapshot of the current matrices.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::new(&self.view_matrix, &self.projection_matrix, self.position)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the pitch, wrapped once into `[0, 2π)`.
    pub fn set_pitch(&mut self, value: f32) {
        self.orientation.set_pitch(value);
    }

    /// Set the yaw, wrapped once into `[0, 2π)`.
    pub fn set_yaw(&mut self, value: f32) {
        self.orientation.set_yaw(value);
    }

    /// Set the roll, wrapped once into `[0, 2π)`.
    pub fn set_roll(&mut self, value: f32) {
        self.orientation.set_roll(value);
    }

    /// Zero pitch, yaw and roll. Takes effect on the next update.
    pub fn reset_rotation(&mut self) {
        self.orientation.reset();
    }

    /// Set the field of view (degrees), clamped to `[FOV_MIN, FOV_MAX]`.
    pub fn set_fov(&mut self, value: f32) {
        self.perspective.set_fov(value);
    }

    pub fn set_aspect_ratio(&mut self, value: f32) {
        self.perspective.set_aspect_ratio(value);
    }

    pub fn set_near_plane(&mut self, value: f32) {
        self.perspective.set_near_plane(value);
    }

    pub fn set_far_plane(&mut self, value: f32) {
        self.perspective.set_far_plane(value);
    }

    pub fn set_move_speed(&mut self, value: f32) {
        self.move_speed = value;
    }

    pub fn set_rotation_speed(&mut self, value: f32) {
        self.rotation_speed = value;
    }

    pub fn set_zoom_speed(&mut self, value: f32) {
        self.zoom_speed = value;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
