/// Composition passes
///
/// Composition-1 layers the secondary scene over the shaded scene in a
/// fixed painter's order: later draws cover earlier ones through blending,
/// never through depth. Composition-2 applies FXAA and adds bloom. The
/// color-graded composition writes the final image to the device output.

use crate::config::FeatureToggles;
use crate::device::{BlendMode, ImageEffects, ImageView, PostProcess, SampleQuality};
use crate::error::Result;
use crate::render_graph::{PassId, TargetSource};
use crate::sequencer::FrameReport;
use crate::target::TargetId;
use super::frame_context::FrameContext;

/// One draw of composition-1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionLayer {
    pub source: TargetSource,
    pub blend: BlendMode,
}

impl CompositionLayer {
    fn pool(id: TargetId, blend: BlendMode) -> Self {
        Self { source: TargetSource::Pool(id), blend }
    }
}

/// Composition-1 draw list for a toggle combination
///
/// Toggles only add or remove entries; the relative order of the
/// remaining entries never changes.
pub fn composition1_layers(toggles: &FeatureToggles) -> Vec<CompositionLayer> {
    let mut layers = vec![CompositionLayer { source: TargetSource::ShadedScene, blend: BlendMode::Opaque }];

    if toggles.ssr_enabled() {
        layers.push(CompositionLayer::pool(TargetId::Ssr, BlendMode::Alpha));
    }
    layers.push(CompositionLayer::pool(TargetId::Water, BlendMode::Alpha));
    layers.push(CompositionLayer::pool(TargetId::Transparents, BlendMode::Alpha));
    if toggles.emitter_particles_enabled() {
        layers.push(CompositionLayer::pool(TargetId::AlphaParticles, BlendMode::Alpha));
    }

    if toggles.volume_lights_enabled() {
        layers.push(CompositionLayer::pool(TargetId::VolumeLights, BlendMode::Additive));
    }
    if toggles.emitter_particles_enabled() {
        layers.push(CompositionLayer::pool(TargetId::AdditiveParticles, BlendMode::Additive));
    }
    if toggles.light_shafts_enabled() {
        layers.push(CompositionLayer::pool(TargetId::LightShafts, BlendMode::Additive));
    }
    if toggles.lens_flare_enabled() {
        layers.push(CompositionLayer::pool(TargetId::LensFlare, BlendMode::Additive));
    }

    layers
}

pub(crate) fn render_composition1(ctx: &mut FrameContext<'_>, report: &mut FrameReport) -> Result<()> {
    let output = ctx.target(TargetId::Composition1)?;
    let mut fx = ImageEffects::fullscreen(ctx.width, ctx.height);

    ctx.device.batch_begin();
    ctx.device.activate(output, None, None)?;

    for layer in composition1_layers(&ctx.toggles) {
        let source = match layer.source {
            TargetSource::Pool(id) => ImageView::back(ctx.target(id)?),
            TargetSource::ShadedScene => ctx.shaded_scene(),
            TargetSource::MainScene => ctx.main_depth(),
        };
        fx.blend = layer.blend;
        ctx.device.draw_image(source, &fx)?;
    }

    report.record_executed(PassId::Composition1);
    Ok(())
}

pub(crate) fn render_composition2(ctx: &mut FrameContext<'_>, report: &mut FrameReport) -> Result<()> {
    let output = ctx.target(TargetId::Composition2)?;
    let composition1 = ctx.target(TargetId::Composition1)?;
    let mut fx = ImageEffects::fullscreen(ctx.width, ctx.height);

    ctx.device.batch_begin();
    ctx.device.activate(output, None, None)?;

    fx.process.set(PostProcess::FXAA, ctx.toggles.fxaa_enabled());
    ctx.device.draw_image(ImageView::back(composition1), &fx)?;
    fx.process = PostProcess::empty();

    if ctx.toggles.bloom_enabled() {
        let bloom = ctx.target(TargetId::BloomBlurVertical)?;
        fx.blend = BlendMode::Additive;
        ctx.device.draw_image(ImageView::back(bloom), &fx)?;
    }

    report.record_executed(PassId::Composition2);
    Ok(())
}

pub(crate) fn render_color_graded_composition(ctx: &mut FrameContext<'_>, report: &mut FrameReport) -> Result<()> {
    let composition2 = ctx.target(TargetId::Composition2)?;
    let mut fx = ImageEffects::fullscreen(ctx.width, ctx.height);
    fx.quality = SampleQuality::Nearest;

    if ctx.toggles.color_grading_enabled() {
        fx.quality = SampleQuality::Bilinear;
        fx.process.insert(PostProcess::COLOR_GRADE);
        let lookup = ctx
            .renderer
            .color_grading()
            .unwrap_or_else(|| ctx.renderer.default_color_grading());
        fx.mask_map = Some(lookup);
    }

    ctx.device.batch_begin();
    ctx.device.activate_output()?;
    ctx.device.draw_image(ImageView::back(composition2), &fx)?;

    report.record_executed(PassId::ColorGrading);
    Ok(())
}
