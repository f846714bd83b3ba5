/// Shadow map pass

use crate::error::Result;
use crate::render_graph::PassId;
use crate::sequencer::FrameReport;
use super::frame_context::FrameContext;

pub(crate) fn render_shadows(ctx: &mut FrameContext<'_>, report: &mut FrameReport) -> Result<()> {
    if !ctx.toggles.shadows_enabled() {
        report.record_skipped(PassId::Shadows);
        return Ok(());
    }

    ctx.renderer.clear_shadow_maps()?;
    ctx.renderer.draw_for_shadow_map()?;

    report.record_executed(PassId::Shadows);
    Ok(())
}
