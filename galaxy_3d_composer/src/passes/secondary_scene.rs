/// Secondary scene passes
///
/// Everything drawn on top of the opaque scene into separate targets, in
/// a fixed sub-order: lens flare, volume lights, alpha particles, additive
/// particles, water ripples, water, transparents. The last three always
/// run.

use glam::Vec4;
use crate::device::{EffectConstants, ImageView, PerViewConstants, SurfaceInputs};
use crate::error::Result;
use crate::render_graph::PassId;
use crate::sequencer::FrameReport;
use crate::target::TargetId;
use super::frame_context::FrameContext;
use super::{ADDITIVE_PARTICLE_CLEAR, ALPHA_PARTICLE_CLEAR};

pub(crate) fn render_secondary_scene(ctx: &mut FrameContext<'_>, report: &mut FrameReport) -> Result<()> {
    let view = *ctx.camera.view_matrix();
    let eye = ctx.camera.eye();

    // Reflections leave mirrored constants bound
    ctx.renderer.update_per_effect(&EffectConstants::none())?;
    ctx.renderer.update_per_view(&PerViewConstants {
        view,
        camera_view: view,
        projection: *ctx.camera.projection_matrix(),
        eye: eye.extend(1.0),
        clip_plane: Vec4::ZERO,
    })?;

    if ctx.toggles.lens_flare_enabled() {
        let target = ctx.target(TargetId::LensFlare)?;
        ctx.device.activate(target, None, None)?;
        if !ctx.renderer.native_lens_flares() {
            let depth = ctx.main_depth();
            ctx.renderer.draw_lens_flares(depth, ctx.width, ctx.height)?;
        }
        report.record_executed(PassId::LensFlare);
    } else {
        report.record_skipped(PassId::LensFlare);
    }

    if ctx.toggles.volume_lights_enabled() {
        let target = ctx.target(TargetId::VolumeLights)?;
        ctx.device.activate(target, Some(ctx.scene.main), None)?;
        ctx.renderer.draw_volume_lights(&view)?;
        report.record_executed(PassId::VolumeLights);
    } else {
        report.record_skipped(PassId::VolumeLights);
    }

    let linear_depth = ImageView::back(ctx.target(TargetId::LinearDepth)?);

    if ctx.toggles.emitter_particles_enabled() {
        let target = ctx.target(TargetId::AlphaParticles)?;
        ctx.device.activate(target, None, Some(ALPHA_PARTICLE_CLEAR))?;
        ctx.renderer.draw_soft_particles(eye, &view, linear_depth)?;
        report.record_executed(PassId::AlphaParticles);

        let target = ctx.target(TargetId::AdditiveParticles)?;
        ctx.device.activate(target, None, Some(ADDITIVE_PARTICLE_CLEAR))?;
        ctx.renderer.draw_soft_premul_particles(eye, &view, linear_depth)?;
        report.record_executed(PassId::AdditiveParticles);
    } else {
        report.record_skipped(PassId::AlphaParticles);
        report.record_skipped(PassId::AdditiveParticles);
    }

    let ripples = ctx.target(TargetId::WaterRipples)?;
    ctx.device.activate(ripples, None, Some([0.0, 0.0, 0.0, 0.0]))?;
    ctx.renderer.draw_water_ripples()?;
    report.record_executed(PassId::WaterRipples);

    let inputs = SurfaceInputs {
        shaded_scene: ctx.shaded_scene(),
        reflection: ImageView::front(ctx.target(TargetId::Reflection)?),
        linear_depth,
    };

    let water = ctx.target(TargetId::Water)?;
    ctx.device.activate(water, Some(ctx.scene.main), None)?;
    ctx.renderer.draw_world_water(&view, &inputs, ImageView::back(ripples))?;
    report.record_executed(PassId::Water);

    let transparents = ctx.target(TargetId::Transparents)?;
    ctx.device.activate(transparents, Some(ctx.scene.main), None)?;
    ctx.renderer.draw_world_transparent(&view, &inputs)?;
    report.record_executed(PassId::Transparents);

    Ok(())
}
