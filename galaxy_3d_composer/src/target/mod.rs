//! Render target pool module
//!
//! Owns every intermediate image the frame composer writes and samples.
//! Targets are identified by `TargetId` and sized from the screen
//! resolution and the quality scale factors.

mod target_id;
mod render_target_pool;

pub use target_id::TargetId;
pub use render_target_pool::{RenderTargetPool, target_layout, scaled_extent, down_sampled_extent};
