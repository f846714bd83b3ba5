/// Tunable quality parameters for the frame composer.
///
/// Scale factors multiply the screen resolution when the render-target
/// pool allocates; they are kept in [0, 1]. The bloom down-sample is a
/// divisor and is kept at 1 or above. Out-of-range values are clamped by
/// the setters and reported with a warning.

use crate::engine_warn;
use super::water_plane::WaterPlane;

/// Reflection quality below which the reflection pass never runs
pub const MIN_REFLECTION_QUALITY: f32 = 0.01;

/// Named scalar parameters read by the pool and the pass sequencer
#[derive(Debug, Clone, PartialEq)]
pub struct QualityConfig {
    light_shaft_quality: f32,
    bloom_down_sample: f32,
    alpha_particle_down_sample: f32,
    additive_particle_down_sample: f32,
    reflection_quality: f32,
    ssao_quality: f32,
    ssao_blur: f32,
    ssr_quality: f32,
    bloom_strength: f32,
    bloom_threshold: f32,
    bloom_saturation: f32,
    water_plane: WaterPlane,
    preferred_worker_count: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            light_shaft_quality: 0.4,
            bloom_down_sample: 4.0,
            alpha_particle_down_sample: 1.0,
            additive_particle_down_sample: 1.0,
            reflection_quality: 0.5,
            ssao_quality: 0.5,
            ssao_blur: 2.3,
            ssr_quality: 0.4,
            bloom_strength: 19.3,
            bloom_threshold: 0.99,
            bloom_saturation: -3.86,
            water_plane: WaterPlane::default(),
            preferred_worker_count: 0,
        }
    }
}

/// Clamp a resolution scale into [0, 1]. NaN maps to 0.
fn clamp_scale(name: &str, value: f32) -> f32 {
    let clamped = if value >= 0.0 { value.min(1.0) } else { 0.0 };
    if clamped != value {
        engine_warn!("galaxy3d::QualityConfig",
            "{} = {} out of [0, 1], clamped to {}", name, value, clamped);
    }
    clamped
}

impl QualityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== GETTERS =====

    pub fn light_shaft_quality(&self) -> f32 {
        self.light_shaft_quality
    }

    pub fn bloom_down_sample(&self) -> f32 {
        self.bloom_down_sample
    }

    pub fn alpha_particle_down_sample(&self) -> f32 {
        self.alpha_particle_down_sample
    }

    pub fn additive_particle_down_sample(&self) -> f32 {
        self.additive_particle_down_sample
    }

    pub fn reflection_quality(&self) -> f32 {
        self.reflection_quality
    }

    pub fn ssao_quality(&self) -> f32 {
        self.ssao_quality
    }

    /// SSAO blur radius, forwarded to the SSAO stage of the scene renderer
    pub fn ssao_blur(&self) -> f32 {
        self.ssao_blur
    }

    pub fn ssr_quality(&self) -> f32 {
        self.ssr_quality
    }

    /// Blur radius of the separable bloom blur
    pub fn bloom_strength(&self) -> f32 {
        self.bloom_strength
    }

    pub fn bloom_threshold(&self) -> f32 {
        self.bloom_threshold
    }

    pub fn bloom_saturation(&self) -> f32 {
        self.bloom_saturation
    }

    pub fn water_plane(&self) -> &WaterPlane {
        &self.water_plane
    }

    pub fn preferred_worker_count(&self) -> usize {
        self.preferred_worker_count
    }

    /// True when the reflection target is large enough to be worth rendering
    pub fn reflections_visible(&self) -> bool {
        self.reflection_quality >= MIN_REFLECTION_QUALITY
    }

    // ===== SETTERS =====

    pub fn set_light_shaft_quality(&mut self, value: f32) {
        self.light_shaft_quality = clamp_scale("light_shaft_quality", value);
    }

    /// Divisor applied to the screen size for the bloom blur targets.
    pub fn set_bloom_down_sample(&mut self, value: f32) {
        let clamped = if value >= 1.0 { value } else { 1.0 };
        if clamped != value {
            engine_warn!("galaxy3d::QualityConfig",
                "bloom_down_sample = {} below 1, clamped to 1", value);
        }
        self.bloom_down_sample = clamped;
    }

    pub fn set_alpha_particle_down_sample(&mut self, value: f32) {
        self.alpha_particle_down_sample = clamp_scale("alpha_particle_down_sample", value);
    }

    pub fn set_additive_particle_down_sample(&mut self, value: f32) {
        self.additive_particle_down_sample = clamp_scale("additive_particle_down_sample", value);
    }

    pub fn set_reflection_quality(&mut self, value: f32) {
        self.reflection_quality = clamp_scale("reflection_quality", value);
    }

    pub fn set_ssao_quality(&mut self, value: f32) {
        self.ssao_quality = clamp_scale("ssao_quality", value);
    }

    pub fn set_ssao_blur(&mut self, value: f32) {
        self.ssao_blur = value;
    }

    pub fn set_ssr_quality(&mut self, value: f32) {
        self.ssr_quality = clamp_scale("ssr_quality", value);
    }

    pub fn set_bloom_strength(&mut self, value: f32) {
        self.bloom_strength = value;
    }

    pub fn set_bloom_threshold(&mut self, value: f32) {
        self.bloom_threshold = value;
    }

    pub fn set_bloom_saturation(&mut self, value: f32) {
        self.bloom_saturation = value;
    }

    pub fn set_water_plane(&mut self, plane: WaterPlane) {
        self.water_plane = plane;
    }

    /// Worker count applied by `Renderable3D::initialize()`
    pub fn set_preferred_worker_count(&mut self, count: usize) {
        self.preferred_worker_count = count;
    }
}

#[cfg(test)]
#[path = "quality_config_tests.rs"]
mod tests;
