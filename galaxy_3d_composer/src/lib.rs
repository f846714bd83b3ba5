/*!
# Galaxy 3D Composer

Frame-composition core for the Galaxy 3D rendering engine.

The composer allocates the intermediate render targets of a 3D frame,
runs a fixed sequence of post-processing passes (reflections, shadows,
particles, water, light shafts, bloom, color grading) and composites
them into the final image on the device output.

## Architecture

- **Renderable3D**: Lifecycle controller (initialize, load, start, update, compose)
- **RenderTargetPool**: Composer-owned offscreen images, sized from the screen and quality scales
- **PassSequencer**: Runs the passes in their fixed order, gated by the feature toggles
- **FrameGraph**: Static pass declarations, validated for single writer and read-after-write
- **WorkerPool**: Resizable set of long-lived helper threads
- **GraphicsDevice / SceneRenderer**: Traits implemented by the rendering backend

Backends implement the device traits; the composer never talks to a GPU
API directly.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod camera;
pub mod device;
pub mod target;
pub mod render_graph;
pub mod passes;
pub mod sequencer;
pub mod worker;
pub mod renderable;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine logging hub
    pub use crate::engine::Engine;

    // Lifecycle controller
    pub use crate::renderable::{Renderable3D, RenderContext, FrameLifecycle, NoOpLifecycle};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Quality and feature configuration
    pub mod config {
        pub use crate::config::*;
    }

    // Device boundary traits and draw parameters
    pub mod device {
        pub use crate::device::*;
    }

    // Camera
    pub mod camera {
        pub use crate::camera::*;
    }

    // Frame composition
    pub mod compose {
        pub use crate::target::*;
        pub use crate::render_graph::*;
        pub use crate::passes::{FrameContext, SceneTargets, CompositionLayer, composition1_layers};
        pub use crate::sequencer::*;
        pub use crate::worker::*;
    }
}

// Re-export math library at crate root
pub use glam;
