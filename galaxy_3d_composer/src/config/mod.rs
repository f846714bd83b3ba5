//! Quality and feature configuration
//!
//! Pure data consumed by the render-target pool and the pass sequencer.
//! Both structs are owned by `Renderable3D`; everything else borrows them
//! for the duration of a call.

mod feature_toggles;
mod quality_config;
mod water_plane;

pub use feature_toggles::{FeatureToggles, Features};
pub use quality_config::{QualityConfig, MIN_REFLECTION_QUALITY};
pub use water_plane::WaterPlane;
