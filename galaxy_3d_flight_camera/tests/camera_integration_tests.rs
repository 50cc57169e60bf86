//! Integration tests for the flight camera
//!
//! Drives the camera through the public API the way a host frame loop does:
//! build intents, call update(), read the matrices and frustum.
//!
//! Run with: cargo test --test camera_integration_tests

use std::time::Duration;
use galaxy_3d_flight_camera::flight::{
    Camera, CameraDesc, FrameInput, FrustumTest, MovementKeys, ZoomKeys, AABB,
    rotation_from_pointer, is_normalized, FOV_MAX, FOV_MIN,
};
use galaxy_3d_flight_camera::glam::{Mat4, Vec3};

const ONE_SECOND: Duration = Duration::from_millis(1000);
const FRAME: Duration = Duration::from_millis(16);

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-3
}

/// Camera at the origin, fov 45, aspect 1, near 0.1, far 1000, speeds of 1 unit per second.
fn create_scenario_camera() -> Camera {
    Camera::new(Vec3::ZERO, 0.001, 0.001, 0.001, 45.0, 1.0, 0.1, 1000.0)
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_integration_forward_for_one_second() {
    let mut camera = create_scenario_camera();

    camera.update(ONE_SECOND, Vec3::new(0.0, 0.0, -1.0), Vec3::ZERO, 0.0);

    assert!((camera.position().z - -1.0).abs() < 1e-4);
    assert!(camera.position().x.abs() < 1e-6);
    assert!(camera.position().y.abs() < 1e-6);
}

#[test]
fn test_integration_zoom_ten_frames() {
    let mut camera = create_scenario_camera();

    for _ in 0..10 {
        camera.update(ONE_SECOND, Vec3::ZERO, Vec3::ZERO, 1.0);
        assert!(!camera.is_projection_dirty());
    }

    assert!((camera.fov() - 55.0).abs() < 1e-3);
    let expected = Mat4::perspective_rh(camera.fov().to_radians(), 1.0, 0.1, 1000.0);
    assert_eq!(*camera.projection_matrix(), expected);
}

#[test]
fn test_integration_fov_clamp() {
    let mut camera = create_scenario_camera();

    camera.set_fov(500.0);
    assert_eq!(camera.fov(), FOV_MAX);

    camera.set_fov(-5.0);
    assert_eq!(camera.fov(), FOV_MIN);
}

// ============================================================================
// FRAME LOOP
// ============================================================================

#[test]
fn test_integration_key_driven_frame_loop() {
    let mut camera = Camera::try_from_desc(&CameraDesc::default()).unwrap();
    let start = camera.position();

    // Hold forward for 60 frames
    let keys = MovementKeys { forward: true, ..Default::default() };
    let input = FrameInput::new(keys.intent(), Vec3::ZERO, 0.0);
    for _ in 0..60 {
        camera.apply(FRAME, &input);
    }

    // 0.01 units/ms * 16 ms * 60 frames along -Z
    let expected = start + Vec3::new(0.0, 0.0, -0.01 * 16.0 * 60.0);
    assert!(approx_vec(camera.position(), expected));

    // Pointer sweeps right: yaw goes negative and wraps into [2π - x, 2π)
    let turn = FrameInput::new(Vec3::ZERO, rotation_from_pointer(50.0, 0.0, 0.0), 0.0);
    camera.apply(FRAME, &turn);
    assert!(is_normalized(camera.yaw()));
    assert!(camera.yaw() > std::f32::consts::PI);
    // Turned right: forward now has a +X component
    assert!(camera.forward().x > 0.0);

    // Zoom in narrows the field of view
    let zoom = FrameInput::new(Vec3::ZERO, Vec3::ZERO, ZoomKeys { zoom_in: true, zoom_out: false }.intent());
    let fov_before = camera.fov();
    camera.apply(FRAME, &zoom);
    assert!(camera.fov() < fov_before);
}

#[test]
fn test_integration_idle_frames_are_stable() {
    let mut camera = create_scenario_camera();
    camera.set_position(Vec3::new(1.0, 2.0, 3.0));
    camera.set_yaw(0.7);
    camera.apply(FRAME, &FrameInput::idle());

    let view = *camera.view_matrix();
    let projection = *camera.projection_matrix();
    let frustum = *camera.frustum();

    for _ in 0..5 {
        camera.apply(FRAME, &FrameInput::idle());
    }

    assert_eq!(*camera.view_matrix(), view);
    assert_eq!(*camera.projection_matrix(), projection);
    assert_eq!(*camera.frustum(), frustum);
}

#[test]
fn test_integration_renderer_culling() {
    let mut camera = create_scenario_camera();
    camera.apply(Duration::ZERO, &FrameInput::idle());

    let ahead = AABB::from_center_extents(Vec3::new(0.0, 0.0, -20.0), Vec3::splat(1.0));
    let behind = AABB::from_center_extents(Vec3::new(0.0, 0.0, 20.0), Vec3::splat(1.0));

    assert_eq!(camera.frustum().classify_aabb(&ahead), FrustumTest::Inside);
    assert_eq!(camera.frustum().classify_aabb(&behind), FrustumTest::Outside);

    // Turn around (yaw by π) over one second
    camera.update(ONE_SECOND, Vec3::ZERO, Vec3::new(0.0, std::f32::consts::PI, 0.0), 0.0);

    assert_eq!(camera.frustum().classify_aabb(&ahead), FrustumTest::Outside);
    assert_eq!(camera.frustum().classify_aabb(&behind), FrustumTest::Inside);
}

#[test]
fn test_integration_uniform_upload() {
    let mut camera = create_scenario_camera();
    camera.update(FRAME, Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, 0.0);

    let uniform = camera.uniform();
    let bytes = uniform.as_bytes();

    assert_eq!(bytes.len(), std::mem::size_of_val(&uniform));
    assert_eq!(uniform.view_projection, camera.view_projection_matrix().to_cols_array_2d());
}
