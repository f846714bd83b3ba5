/// Group of passes sharing a gate and a purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Reflections,
    Shadows,
    SecondaryScene,
    LightShafts,
    Composition1,
    Bloom,
    Composition2,
    ColorGrading,
}

impl Stage {
    /// Stages in execution order
    pub const ALL: [Stage; 8] = [
        Stage::Reflections,
        Stage::Shadows,
        Stage::SecondaryScene,
        Stage::LightShafts,
        Stage::Composition1,
        Stage::Bloom,
        Stage::Composition2,
        Stage::ColorGrading,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Reflections => "reflections",
            Stage::Shadows => "shadows",
            Stage::SecondaryScene => "secondary_scene",
            Stage::LightShafts => "light_shafts",
            Stage::Composition1 => "composition_1",
            Stage::Bloom => "bloom",
            Stage::Composition2 => "composition_2",
            Stage::ColorGrading => "color_grading",
        }
    }
}

/// One unit of work of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PassId {
    Reflections,
    Shadows,
    LensFlare,
    VolumeLights,
    AlphaParticles,
    AdditiveParticles,
    WaterRipples,
    Water,
    Transparents,
    SunOcclusion,
    LightShaftBlur,
    Composition1,
    BloomBrightPass,
    BloomBlurHorizontal,
    BloomBlurVertical,
    Composition2,
    ColorGrading,
}

impl PassId {
    /// Passes in execution order
    pub const ALL: [PassId; 17] = [
        PassId::Reflections,
        PassId::Shadows,
        PassId::LensFlare,
        PassId::VolumeLights,
        PassId::AlphaParticles,
        PassId::AdditiveParticles,
        PassId::WaterRipples,
        PassId::Water,
        PassId::Transparents,
        PassId::SunOcclusion,
        PassId::LightShaftBlur,
        PassId::Composition1,
        PassId::BloomBrightPass,
        PassId::BloomBlurHorizontal,
        PassId::BloomBlurVertical,
        PassId::Composition2,
        PassId::ColorGrading,
    ];

    pub fn stage(self) -> Stage {
        match self {
            PassId::Reflections => Stage::Reflections,
            PassId::Shadows => Stage::Shadows,
            PassId::LensFlare
            | PassId::VolumeLights
            | PassId::AlphaParticles
            | PassId::AdditiveParticles
            | PassId::WaterRipples
            | PassId::Water
            | PassId::Transparents => Stage::SecondaryScene,
            PassId::SunOcclusion | PassId::LightShaftBlur => Stage::LightShafts,
            PassId::Composition1 => Stage::Composition1,
            PassId::BloomBrightPass
            | PassId::BloomBlurHorizontal
            | PassId::BloomBlurVertical => Stage::Bloom,
            PassId::Composition2 => Stage::Composition2,
            PassId::ColorGrading => Stage::ColorGrading,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PassId::Reflections => "reflections",
            PassId::Shadows => "shadows",
            PassId::LensFlare => "lens_flare",
            PassId::VolumeLights => "volume_lights",
            PassId::AlphaParticles => "alpha_particles",
            PassId::AdditiveParticles => "additive_particles",
            PassId::WaterRipples => "water_ripples",
            PassId::Water => "water",
            PassId::Transparents => "transparents",
            PassId::SunOcclusion => "sun_occlusion",
            PassId::LightShaftBlur => "light_shaft_blur",
            PassId::Composition1 => "composition_1",
            PassId::BloomBrightPass => "bloom_bright_pass",
            PassId::BloomBlurHorizontal => "bloom_blur_h",
            PassId::BloomBlurVertical => "bloom_blur_v",
            PassId::Composition2 => "composition_2",
            PassId::ColorGrading => "color_grading",
        }
    }
}

impl std::fmt::Display for PassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
