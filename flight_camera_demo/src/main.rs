//! Headless flight camera demo
//!
//! Replays a scripted input timeline through the camera at a fixed 16 ms
//! step and logs where the camera ends up after each phase, plus which
//! marker boxes a renderer would draw.

use std::time::Duration;
use galaxy_3d_flight_camera::flight::{
    Camera, CameraDesc, FrameInput, MovementKeys, ZoomKeys, AABB, FrustumTest,
    rotation_from_pointer,
};
use galaxy_3d_flight_camera::flight::log::{Log, LogSeverity};
use galaxy_3d_flight_camera::glam::Vec3;
use galaxy_3d_flight_camera::{camera_error, camera_info};

const FRAME: Duration = Duration::from_millis(16);

/// One segment of the timeline: the same input held for a number of frames.
struct Phase {
    name: &'static str,
    frames: u32,
    input: FrameInput,
    reset_rotation: bool,
}

fn timeline() -> Vec<Phase> {
    let forward = MovementKeys { forward: true, ..Default::default() }.intent();
    let climb = MovementKeys { up: true, right: true, ..Default::default() }.intent();

    vec![
        Phase {
            name: "fly forward",
            frames: 120,
            input: FrameInput::new(forward, Vec3::ZERO, 0.0),
            reset_rotation: false,
        },
        Phase {
            name: "turn right",
            frames: 60,
            input: FrameInput::new(Vec3::ZERO, rotation_from_pointer(40.0, 0.0, 0.0), 0.0),
            reset_rotation: false,
        },
        Phase {
            name: "roll and climb",
            frames: 60,
            input: FrameInput::new(climb, rotation_from_pointer(0.0, -10.0, 1.0), 0.0),
            reset_rotation: false,
        },
        Phase {
            name: "zoom in",
            frames: 90,
            input: FrameInput::new(Vec3::ZERO, Vec3::ZERO, ZoomKeys { zoom_in: true, zoom_out: false }.intent()),
            reset_rotation: false,
        },
        Phase {
            name: "zoom out",
            frames: 30,
            input: FrameInput::new(Vec3::ZERO, Vec3::ZERO, ZoomKeys { zoom_in: false, zoom_out: true }.intent()),
            reset_rotation: false,
        },
        Phase {
            name: "reset rotation",
            frames: 1,
            input: FrameInput::idle(),
            reset_rotation: true,
        },
    ]
}

fn markers() -> Vec<(&'static str, AABB)> {
    vec![
        ("origin", AABB::from_center_extents(Vec3::ZERO, Vec3::splat(1.0))),
        ("far ahead", AABB::from_center_extents(Vec3::new(0.0, 0.0, -500.0), Vec3::splat(10.0))),
        ("right", AABB::from_center_extents(Vec3::new(50.0, 0.0, 0.0), Vec3::splat(2.0))),
        ("behind spawn", AABB::from_center_extents(Vec3::new(0.0, 0.0, 100.0), Vec3::splat(2.0))),
    ]
}

fn report(camera: &Camera, phase: &str) {
    camera_info!(
        "flight::Demo",
        "after '{}': position {:.3}, pitch {:.4}, yaw {:.4}, roll {:.4}, fov {:.2}",
        phase,
        camera.position(),
        camera.pitch(),
        camera.yaw(),
        camera.roll(),
        camera.fov()
    );

    for (name, bounds) in markers() {
        let visibility = match camera.frustum().classify_aabb(&bounds) {
            FrustumTest::Inside => "visible",
            FrustumTest::Partial => "partially visible",
            FrustumTest::Outside => "culled",
        };
        camera_info!("flight::Demo", "  marker '{}': {}", name, visibility);
    }
}

fn main() {
    if std::env::args().any(|arg| arg == "--verbose") {
        Log::set_min_severity(LogSeverity::Trace);
    }

    let desc = CameraDesc::default();
    let mut camera = match Camera::try_from_desc(&desc) {
        Ok(camera) => camera,
        Err(e) => {
            camera_error!("flight::Demo", "Cannot build camera: {}", e);
            std::process::exit(1);
        }
    };

    camera.apply(Duration::ZERO, &FrameInput::idle());
    report(&camera, "spawn");

    for phase in timeline() {
        if phase.reset_rotation {
            camera.reset_rotation();
        }
        for _ in 0..phase.frames {
            camera.apply(FRAME, &phase.input);
        }
        report(&camera, phase.name);
    }
}
