//! Camera module: free-flight camera, projection, orientation and frustum.
//!
//! The camera is a plain value owned and driven by the caller's frame loop.
//! Nothing here polls devices or talks to the GPU: the host reduces its input
//! to intents (`FrameInput`) and uploads `CameraUniform` itself.

mod bounds;
mod camera;
mod desc;
mod frustum;
mod input;
mod orientation;
mod projection;
mod uniform;

pub use bounds::AABB;
pub use camera::Camera;
pub use desc::CameraDesc;
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use input::{axis, rotation_from_pointer, FrameInput, MovementKeys, ZoomKeys};
pub use orientation::{is_normalized, wrap_angle, Orientation, TWO_PI};
pub use projection::{Perspective, FOV_MAX, FOV_MIN};
pub use uniform::CameraUniform;
