/// Light shaft passes
///
/// Draws the sun disc alone, depth tested against the scene so occluders
/// mask it, then radially blurs the result from the sun's screen position.

use glam::Vec2;
use crate::device::{BlendMode, EffectConstants, ImageEffects, ImageView};
use crate::engine_trace;
use crate::error::Result;
use crate::render_graph::PassId;
use crate::sequencer::FrameReport;
use crate::target::TargetId;
use super::frame_context::FrameContext;
use super::SUN_DISTANCE;

pub(crate) fn render_light_shafts(ctx: &mut FrameContext<'_>, report: &mut FrameReport) -> Result<()> {
    if !ctx.toggles.light_shafts_enabled() {
        report.record_skipped(PassId::SunOcclusion);
        report.record_skipped(PassId::LightShaftBlur);
        return Ok(());
    }

    let occlusion = ctx.target(TargetId::SunOcclusion)?;
    ctx.device.activate(occlusion, Some(ctx.scene.main), None)?;
    ctx.renderer.update_per_effect(&EffectConstants::sun_only())?;
    ctx.renderer.draw_sky(ctx.camera.eye())?;
    report.record_executed(PassId::SunOcclusion);

    let sun = ctx.camera.project_to_screen(
        ctx.renderer.sun_direction() * SUN_DISTANCE,
        ctx.width as f32,
        ctx.height as f32,
    );
    if !sun.in_front {
        engine_trace!("galaxy3d::PassSequencer", "Sun is behind the camera");
    }

    let mut fx = ImageEffects::fullscreen(ctx.width, ctx.height).with_blend(BlendMode::Additive);
    fx.sun_position = Some(Vec2::new(sun.x, sun.y));

    ctx.device.batch_begin();
    let shafts = ctx.target(TargetId::LightShafts)?;
    ctx.device.activate(shafts, None, None)?;
    ctx.device.draw_image(ImageView::back(occlusion), &fx)?;
    report.record_executed(PassId::LightShaftBlur);

    Ok(())
}
