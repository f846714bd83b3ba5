//! Frame graph module
//!
//! Static description of the composer's frame: which passes run, in
//! which order, which images each pass reads and the single output it
//! writes. The order is hand-authored; the graph only validates it.

mod pass_id;
mod render_pass;
mod frame_graph;

pub use pass_id::{PassId, Stage};
pub use render_pass::{RenderPass, PassInput, PassOutput, TargetSource};
pub use frame_graph::FrameGraph;
