/// Every target owned by `RenderTargetPool`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetId {
    Ssr,
    LinearDepth,
    AlphaParticles,
    AdditiveParticles,
    Water,
    WaterRipples,
    Transparents,
    VolumeLights,
    Reflection,
    Composition1,
    Composition2,
    DepthCopy,
    Ssao0,
    Ssao1,
    Ssao2,
    SunOcclusion,
    LightShafts,
    LensFlare,
    BloomBright,
    BloomBlurHorizontal,
    BloomBlurVertical,
}

impl TargetId {
    /// All targets, in allocation order
    pub const ALL: [TargetId; 21] = [
        TargetId::Ssr,
        TargetId::LinearDepth,
        TargetId::AlphaParticles,
        TargetId::AdditiveParticles,
        TargetId::Water,
        TargetId::WaterRipples,
        TargetId::Transparents,
        TargetId::VolumeLights,
        TargetId::Reflection,
        TargetId::Composition1,
        TargetId::Composition2,
        TargetId::DepthCopy,
        TargetId::Ssao0,
        TargetId::Ssao1,
        TargetId::Ssao2,
        TargetId::SunOcclusion,
        TargetId::LightShafts,
        TargetId::LensFlare,
        TargetId::BloomBright,
        TargetId::BloomBlurHorizontal,
        TargetId::BloomBlurVertical,
    ];

    /// Stable name, used as the device label and in logs
    pub fn name(self) -> &'static str {
        match self {
            TargetId::Ssr => "ssr",
            TargetId::LinearDepth => "linear_depth",
            TargetId::AlphaParticles => "alpha_particles",
            TargetId::AdditiveParticles => "additive_particles",
            TargetId::Water => "water",
            TargetId::WaterRipples => "water_ripples",
            TargetId::Transparents => "transparents",
            TargetId::VolumeLights => "volume_lights",
            TargetId::Reflection => "reflection",
            TargetId::Composition1 => "composition_1",
            TargetId::Composition2 => "composition_2",
            TargetId::DepthCopy => "depth_copy",
            TargetId::Ssao0 => "ssao_0",
            TargetId::Ssao1 => "ssao_1",
            TargetId::Ssao2 => "ssao_2",
            TargetId::SunOcclusion => "sun_occlusion",
            TargetId::LightShafts => "light_shafts",
            TargetId::LensFlare => "lens_flare",
            TargetId::BloomBright => "bloom_bright",
            TargetId::BloomBlurHorizontal => "bloom_blur_h",
            TargetId::BloomBlurVertical => "bloom_blur_v",
        }
    }

    /// Reverse lookup of `name()`
    pub fn from_name(name: &str) -> Option<TargetId> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
