/// Planar reflection pass
///
/// Renders the world and the sky mirrored about the water plane into the
/// reflection target, clipped by the plane.

use crate::device::{EffectConstants, PerViewConstants};
use crate::error::Result;
use crate::render_graph::PassId;
use crate::sequencer::FrameReport;
use crate::target::TargetId;
use super::frame_context::FrameContext;

pub(crate) fn render_reflections(ctx: &mut FrameContext<'_>, report: &mut FrameReport) -> Result<()> {
    if !ctx.toggles.reflections_enabled() || !ctx.config.reflections_visible() {
        report.record_skipped(PassId::Reflections);
        return Ok(());
    }

    let target = ctx.target(TargetId::Reflection)?;
    let plane = ctx.config.water_plane().normalized();
    let mirror = plane.reflection_matrix();
    let view = ctx.camera.mirrored_view(&mirror);
    let eye = ctx.camera.mirrored_eye(&mirror);

    ctx.device.activate(target, None, None)?;
    ctx.renderer.update_per_effect(&EffectConstants::none())?;
    ctx.renderer.update_per_view(&PerViewConstants {
        view,
        camera_view: *ctx.camera.view_matrix(),
        projection: *ctx.camera.projection_matrix(),
        eye: eye.extend(1.0),
        clip_plane: plane.as_vec4(),
    })?;
    ctx.renderer.draw_world(&view)?;
    ctx.renderer.draw_sky(eye)?;

    report.record_executed(PassId::Reflections);
    Ok(())
}
