/// Render target pool - owns the composer's intermediate images.
///
/// Every target is allocated at once from a layout computed from the
/// screen size and the quality scale factors. Storage does not depend on
/// the feature toggles: a disabled pass simply leaves its target stale.

use rustc_hash::FxHashMap;
use crate::config::QualityConfig;
use crate::device::{GraphicsDevice, RenderTarget, RenderTargetDesc, TextureFormat};
use crate::error::Result;
use crate::{engine_debug, engine_err, engine_error};
use super::target_id::TargetId;

/// `max(1, floor(dim * scale))`
pub fn scaled_extent(dim: u32, scale: f32) -> u32 {
    let scaled = (dim as f32 * scale).floor();
    if scaled >= 1.0 { scaled as u32 } else { 1 }
}

/// `max(1, floor(dim / divisor))`
pub fn down_sampled_extent(dim: u32, divisor: f32) -> u32 {
    let reduced = (dim as f32 / divisor).floor();
    if reduced >= 1.0 { reduced as u32 } else { 1 }
}

fn scaled(
    id: TargetId,
    width: u32,
    height: u32,
    scale: f32,
    format: TextureFormat,
) -> (TargetId, RenderTargetDesc) {
    let desc = RenderTargetDesc::color(
        id.name(),
        scaled_extent(width, scale),
        scaled_extent(height, scale),
        format,
    );
    (id, desc)
}

/// Compute the allocation layout for a `width` x `height` screen
///
/// Pure function of its inputs: two calls with equal arguments return
/// equal layouts, which is what `needs_reallocation()` compares.
pub fn target_layout(width: u32, height: u32, config: &QualityConfig) -> Vec<(TargetId, RenderTargetDesc)> {
    use TextureFormat::*;

    let full = |id: TargetId, format: TextureFormat| scaled(id, width, height, 1.0, format);
    let with_depth = |(id, desc): (TargetId, RenderTargetDesc)| (id, desc.with_depth());

    let mut layout = vec![
        scaled(TargetId::Ssr, width, height, config.ssr_quality(), R16G16B16A16_SFLOAT),
        full(TargetId::LinearDepth, R32_SFLOAT),
        scaled(TargetId::AlphaParticles, width, height, config.alpha_particle_down_sample(), R16G16B16A16_SFLOAT),
        scaled(TargetId::AdditiveParticles, width, height, config.additive_particle_down_sample(), R16G16B16A16_SFLOAT),
        full(TargetId::Water, R16G16B16A16_SFLOAT),
        full(TargetId::WaterRipples, R8G8B8A8_SNORM),
        full(TargetId::Transparents, R16G16B16A16_SFLOAT),
        full(TargetId::VolumeLights, R8G8B8A8_UNORM),
        with_depth(scaled(TargetId::Reflection, width, height, config.reflection_quality(), R16G16B16A16_SFLOAT)),
        full(TargetId::Composition1, R16G16B16A16_SFLOAT),
        full(TargetId::Composition2, R8G8B8A8_UNORM),
        with_depth(full(TargetId::DepthCopy, D24_UNORM_S8_UINT)),
    ];

    for id in [TargetId::Ssao0, TargetId::Ssao1, TargetId::Ssao2] {
        layout.push(scaled(id, width, height, config.ssao_quality(), R8_UNORM));
    }

    layout.push(with_depth(full(TargetId::SunOcclusion, R8G8B8A8_UNORM)));
    layout.push(scaled(TargetId::LightShafts, width, height, config.light_shaft_quality(), R8G8B8A8_UNORM));
    layout.push(full(TargetId::LensFlare, R8G8B8A8_UNORM));

    let (id, bright) = full(TargetId::BloomBright, R8G8B8A8_UNORM);
    layout.push((id, bright.with_full_mip_chain()));
    let bloom_width = down_sampled_extent(width, config.bloom_down_sample());
    let bloom_height = down_sampled_extent(height, config.bloom_down_sample());
    for id in [TargetId::BloomBlurHorizontal, TargetId::BloomBlurVertical] {
        layout.push((id, RenderTargetDesc::color(id.name(), bloom_width, bloom_height, R8G8B8A8_UNORM)));
    }

    layout
}

/// Pool of composer-owned render targets
pub struct RenderTargetPool {
    targets: FxHashMap<TargetId, Box<dyn RenderTarget>>,
    layout: Vec<(TargetId, RenderTargetDesc)>,
    screen_size: Option<(u32, u32)>,
}

impl RenderTargetPool {
    /// Create an empty (uninitialized) pool
    pub fn new() -> Self {
        Self {
            targets: FxHashMap::default(),
            layout: Vec::new(),
            screen_size: None,
        }
    }

    /// Allocate every target for a `width` x `height` screen
    ///
    /// Previous allocations are released first. On return every target
    /// is valid, with undefined content until its producing pass runs.
    ///
    /// # Errors
    ///
    /// The first device allocation error aborts the call and is returned
    /// unchanged. The pool is then left empty, never half-populated.
    pub fn initialize(
        &mut self,
        device: &mut dyn GraphicsDevice,
        width: u32,
        height: u32,
        config: &QualityConfig,
    ) -> Result<()> {
        self.release();

        let layout = target_layout(width, height, config);
        let mut targets = FxHashMap::default();
        targets.reserve(layout.len());

        for (id, desc) in &layout {
            match device.create_render_target(desc) {
                Ok(target) => {
                    targets.insert(*id, target);
                }
                Err(e) => {
                    engine_error!("galaxy3d::RenderTargetPool",
                        "Failed to allocate '{}' ({}x{}): {}", id, desc.width, desc.height, e);
                    return Err(e);
                }
            }
        }

        let memory: u64 = layout.iter().map(|(_, desc)| desc.memory_bytes()).sum();
        engine_debug!("galaxy3d::RenderTargetPool",
            "Allocated {} targets for {}x{} ({} KiB)", targets.len(), width, height, memory / 1024);

        self.targets = targets;
        self.layout = layout;
        self.screen_size = Some((width, height));
        Ok(())
    }

    /// Drop every target
    pub fn release(&mut self) {
        self.targets.clear();
        self.layout.clear();
        self.screen_size = None;
    }

    /// True when `initialize()` with these arguments would produce a
    /// different allocation than the current one
    pub fn needs_reallocation(&self, width: u32, height: u32, config: &QualityConfig) -> bool {
        !self.is_initialized() || self.layout != target_layout(width, height, config)
    }

    pub fn is_initialized(&self) -> bool {
        self.screen_size.is_some()
    }

    /// Screen size passed to the last successful `initialize()`
    pub fn screen_size(&self) -> Option<(u32, u32)> {
        self.screen_size
    }

    /// Get a target by id
    pub fn target(&self, id: TargetId) -> Option<&dyn RenderTarget> {
        self.targets.get(&id).map(|t| t.as_ref())
    }

    /// Get a target by id, failing when the pool is not allocated
    pub fn require(&self, id: TargetId) -> Result<&dyn RenderTarget> {
        self.target(id).ok_or_else(|| {
            engine_err!(InvalidResource => "galaxy3d::RenderTargetPool",
                "render target '{}' is not allocated", id)
        })
    }

    /// Get the number of allocated targets
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Current allocation layout, in allocation order
    pub fn layout(&self) -> &[(TargetId, RenderTargetDesc)] {
        &self.layout
    }

    /// Approximate GPU memory held by the pool
    pub fn memory_bytes(&self) -> u64 {
        self.layout.iter().map(|(_, desc)| desc.memory_bytes()).sum()
    }
}

impl Default for RenderTargetPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "render_target_pool_tests.rs"]
mod tests;
