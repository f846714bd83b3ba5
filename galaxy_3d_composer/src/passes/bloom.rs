/// Bloom passes
///
/// Bright-pass extraction from composition-1, mip chain generation, then
/// a separable blur sampled from a coarse mip of the bright image.

use crate::device::{
    BloomExtract, Blur, BlurDirection, ImageEffects, ImageView, SampleMode, BLOOM_BLUR_MIP_LEVEL,
};
use crate::error::Result;
use crate::render_graph::PassId;
use crate::sequencer::FrameReport;
use crate::target::TargetId;
use super::frame_context::FrameContext;

pub(crate) fn render_bloom(ctx: &mut FrameContext<'_>, report: &mut FrameReport) -> Result<()> {
    let composition1 = ctx.target(TargetId::Composition1)?;
    let bright = ctx.target(TargetId::BloomBright)?;
    let blur_h = ctx.target(TargetId::BloomBlurHorizontal)?;
    let blur_v = ctx.target(TargetId::BloomBlurVertical)?;
    let strength = ctx.config.bloom_strength();

    ctx.device.batch_begin();

    let mut extract = ImageEffects::fullscreen(ctx.width, ctx.height);
    extract.sample = SampleMode::Clamp;
    extract.bloom = Some(BloomExtract {
        saturation: ctx.config.bloom_saturation(),
        threshold: ctx.config.bloom_threshold(),
    });
    ctx.device.activate(bright, None, None)?;
    ctx.device.draw_image(ImageView::front(composition1), &extract)?;
    report.record_executed(PassId::BloomBrightPass);

    let mut horizontal = ImageEffects::fullscreen(ctx.width, ctx.height);
    horizontal.sample = SampleMode::Clamp;
    horizontal.mip_level = BLOOM_BLUR_MIP_LEVEL;
    horizontal.blur = Some(Blur { strength, direction: BlurDirection::Horizontal });
    ctx.device.activate(blur_h, None, None)?;
    ctx.device.generate_mips(bright)?;
    ctx.device.draw_image(ImageView::back(bright), &horizontal)?;
    report.record_executed(PassId::BloomBlurHorizontal);

    // blur_h has a single mip
    let mut vertical = ImageEffects::fullscreen(ctx.width, ctx.height);
    vertical.sample = SampleMode::Clamp;
    vertical.blur = Some(Blur { strength, direction: BlurDirection::Vertical });
    ctx.device.activate(blur_v, None, None)?;
    ctx.device.draw_image(ImageView::back(blur_h), &vertical)?;
    report.record_executed(PassId::BloomBlurVertical);

    Ok(())
}
