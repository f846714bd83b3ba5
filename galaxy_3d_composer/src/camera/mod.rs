//! Camera module - low-level passive camera.
//!
//! The composer does NOT store or manage cameras. The caller owns the
//! camera and hands it to each frame through `RenderContext`.

mod camera;

pub use camera::{Camera, ScreenPoint};
