/*!
# Galaxy3D Flight Camera

Free-flight (spacecraft style) camera for the Galaxy3D engine.

Given per-frame input intents, the camera maintains its orientation, position
and perspective projection, and derives the view/projection matrices and the
view frustum consumed by a renderer.

## Architecture

- **Camera**: the stateful camera, one `update()` per frame
- **Perspective**: projection parameters with a dirty flag (lazy rebuild)
- **Orientation**: pitch/yaw/roll with single-step angle wrap
- **Frustum**: culling planes rebuilt on every view/projection write
- **FrameInput**: movement/rotation/zoom intents supplied by the host
*/

// Internal modules
mod error;
pub mod camera;
pub mod log;

// Main namespace module
pub mod flight {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera and its building blocks
    pub use crate::camera::*;

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, Log};
    }
}

// Re-export math library at crate root
pub use glam;
