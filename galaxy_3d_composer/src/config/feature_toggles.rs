/// Boolean feature switches gating pass participation.
///
/// A disabled feature never executes its pass. Render-target storage is
/// allocated regardless of the toggles, so flipping a switch between
/// frames never triggers a reallocation.

use bitflags::bitflags;

bitflags! {
    /// Raw feature bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Features: u32 {
        const SHADOWS            = 1 << 0;
        const SSAO               = 1 << 1;
        const SSR                = 1 << 2;
        const REFLECTIONS        = 1 << 3;
        const FXAA               = 1 << 4;
        const BLOOM              = 1 << 5;
        const COLOR_GRADING      = 1 << 6;
        const EMITTER_PARTICLES  = 1 << 7;
        const HAIR_PARTICLES     = 1 << 8;
        const VOLUME_LIGHTS      = 1 << 9;
        const LIGHT_SHAFTS       = 1 << 10;
        const LENS_FLARE         = 1 << 11;
    }
}

/// Named feature switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureToggles {
    features: Features,
}

impl Default for FeatureToggles {
    /// Everything on except planar reflections.
    fn default() -> Self {
        Self { features: Features::all().difference(Features::REFLECTIONS) }
    }
}

impl FeatureToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every feature off: only the opaque composition chain runs
    pub fn none() -> Self {
        Self { features: Features::empty() }
    }

    pub fn from_features(features: Features) -> Self {
        Self { features }
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn is_enabled(&self, feature: Features) -> bool {
        self.features.contains(feature)
    }

    pub fn set(&mut self, feature: Features, enabled: bool) {
        self.features.set(feature, enabled);
    }

    // ===== NAMED ACCESSORS =====

    pub fn shadows_enabled(&self) -> bool { self.is_enabled(Features::SHADOWS) }
    pub fn ssao_enabled(&self) -> bool { self.is_enabled(Features::SSAO) }
    pub fn ssr_enabled(&self) -> bool { self.is_enabled(Features::SSR) }
    pub fn reflections_enabled(&self) -> bool { self.is_enabled(Features::REFLECTIONS) }
    pub fn fxaa_enabled(&self) -> bool { self.is_enabled(Features::FXAA) }
    pub fn bloom_enabled(&self) -> bool { self.is_enabled(Features::BLOOM) }
    pub fn color_grading_enabled(&self) -> bool { self.is_enabled(Features::COLOR_GRADING) }
    pub fn emitter_particles_enabled(&self) -> bool { self.is_enabled(Features::EMITTER_PARTICLES) }
    pub fn hair_particles_enabled(&self) -> bool { self.is_enabled(Features::HAIR_PARTICLES) }
    pub fn volume_lights_enabled(&self) -> bool { self.is_enabled(Features::VOLUME_LIGHTS) }
    pub fn light_shafts_enabled(&self) -> bool { self.is_enabled(Features::LIGHT_SHAFTS) }
    pub fn lens_flare_enabled(&self) -> bool { self.is_enabled(Features::LENS_FLARE) }

    pub fn set_shadows_enabled(&mut self, v: bool) { self.set(Features::SHADOWS, v) }
    pub fn set_ssao_enabled(&mut self, v: bool) { self.set(Features::SSAO, v) }
    pub fn set_ssr_enabled(&mut self, v: bool) { self.set(Features::SSR, v) }
    pub fn set_reflections_enabled(&mut self, v: bool) { self.set(Features::REFLECTIONS, v) }
    pub fn set_fxaa_enabled(&mut self, v: bool) { self.set(Features::FXAA, v) }
    pub fn set_bloom_enabled(&mut self, v: bool) { self.set(Features::BLOOM, v) }
    pub fn set_color_grading_enabled(&mut self, v: bool) { self.set(Features::COLOR_GRADING, v) }
    pub fn set_emitter_particles_enabled(&mut self, v: bool) { self.set(Features::EMITTER_PARTICLES, v) }
    pub fn set_hair_particles_enabled(&mut self, v: bool) { self.set(Features::HAIR_PARTICLES, v) }
    pub fn set_volume_lights_enabled(&mut self, v: bool) { self.set(Features::VOLUME_LIGHTS, v) }
    pub fn set_light_shafts_enabled(&mut self, v: bool) { self.set(Features::LIGHT_SHAFTS, v) }
    pub fn set_lens_flare_enabled(&mut self, v: bool) { self.set(Features::LENS_FLARE, v) }
}

#[cfg(test)]
#[path = "feature_toggles_tests.rs"]
mod tests;
