//! Renderable module - the 3D frame composer's lifecycle controller
//!
//! `Renderable3D` owns the quality configuration, the feature toggles,
//! the render-target pool, the worker pool and the pass sequencer, and
//! drives them through initialize, load, start, update and compose.

mod frame_lifecycle;
mod render_context;
mod renderable_3d;

pub use frame_lifecycle::{FrameLifecycle, NoOpLifecycle};
pub use render_context::RenderContext;
pub use renderable_3d::Renderable3D;
