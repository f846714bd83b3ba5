/// Renderable3D - lifecycle controller of the 3D frame composer.
///
/// Call order: `initialize()` once (or again to reallocate), `load()`,
/// `start()`, then `update()` and `compose()` every frame. Each call runs
/// the base `FrameLifecycle` hook first, then the composer's own work.

use crate::config::{FeatureToggles, QualityConfig};
use crate::error::Result;
use crate::passes::{FrameContext, SceneTargets};
use crate::sequencer::{FrameReport, PassSequencer, SequencerState};
use crate::target::RenderTargetPool;
use crate::worker::WorkerPool;
use crate::{engine_debug, engine_err, engine_error, engine_info};
use super::frame_lifecycle::{FrameLifecycle, NoOpLifecycle};
use super::render_context::RenderContext;

pub struct Renderable3D<B: FrameLifecycle = NoOpLifecycle> {
    base: B,
    config: QualityConfig,
    toggles: FeatureToggles,
    pool: RenderTargetPool,
    workers: WorkerPool,
    sequencer: PassSequencer,
}

impl<B: FrameLifecycle> Renderable3D<B> {
    /// Create a composer with default quality and toggles
    pub fn new(base: B) -> Self {
        Self {
            base,
            config: QualityConfig::default(),
            toggles: FeatureToggles::default(),
            pool: RenderTargetPool::new(),
            workers: WorkerPool::new(),
            sequencer: PassSequencer::new(),
        }
    }

    // ===== LIFECYCLE =====

    /// Allocate every render target for a `width` x `height` screen
    ///
    /// Re-invocable: prior targets are released first. Also applies the
    /// preferred worker count.
    ///
    /// # Errors
    ///
    /// Allocation and thread-spawn failures are returned unchanged. After
    /// an allocation failure the composer is back to uninitialized.
    pub fn initialize(&mut self, ctx: &mut RenderContext<'_>, width: u32, height: u32) -> Result<()> {
        self.sequencer.check_reallocation_allowed()?;
        self.base.initialize(ctx, width, height)?;

        self.allocate(ctx, width, height)?;
        self.workers.set_worker_count(self.config.preferred_worker_count())?;

        engine_info!("galaxy3d::Renderable3D", "Initialized for {}x{}", width, height);
        Ok(())
    }

    /// Propagate the particle toggles to the scene renderer
    pub fn load(&mut self, ctx: &mut RenderContext<'_>) -> Result<()> {
        self.sequencer.check_initialized("load")?;
        self.base.load(ctx)?;

        ctx.renderer.set_particle_systems_enabled(
            self.toggles.hair_particles_enabled(),
            self.toggles.emitter_particles_enabled(),
        );
        Ok(())
    }

    pub fn start(&mut self, ctx: &mut RenderContext<'_>) -> Result<()> {
        self.sequencer.check_initialized("start")?;
        self.base.start(ctx)
    }

    /// Refresh scene, lights, physics, render info, skinning and images,
    /// in that order
    pub fn update(&mut self, ctx: &mut RenderContext<'_>) -> Result<()> {
        self.sequencer.begin_update()?;
        self.base.update(ctx)?;

        ctx.renderer.update_scene()?;
        ctx.renderer.update_lights()?;
        ctx.renderer.synchronize_with_physics()?;
        ctx.renderer.update_render_info()?;
        ctx.renderer.update_skinned_buffers()?;
        ctx.renderer.update_images()
    }

    /// Run the pass sequence over the caller's rendered scene
    ///
    /// # Errors
    ///
    /// `InvalidState` before `initialize()`, `InvalidResource` when
    /// `scene.main` has no depth buffer, and any device or renderer error.
    pub fn compose(&mut self, ctx: &mut RenderContext<'_>, scene: SceneTargets<'_>) -> Result<FrameReport> {
        self.sequencer.check_initialized("compose")?;
        self.base.compose(ctx)?;

        let (width, height) = self.pool.screen_size().ok_or_else(|| {
            engine_err!(InvalidState => "galaxy3d::Renderable3D", "render targets are not allocated")
        })?;

        let mut frame = FrameContext {
            device: &mut *ctx.device,
            renderer: &mut *ctx.renderer,
            camera: ctx.camera,
            pool: &self.pool,
            config: &self.config,
            toggles: self.toggles,
            scene,
            width,
            height,
        };
        self.sequencer.compose(&mut frame)
    }

    /// Reallocate the render targets for a new screen size
    ///
    /// Does nothing when the size is unchanged.
    pub fn resize(&mut self, ctx: &mut RenderContext<'_>, width: u32, height: u32) -> Result<()> {
        self.sequencer.check_initialized("resize")?;

        if !self.pool.needs_reallocation(width, height, &self.config) {
            engine_debug!("galaxy3d::Renderable3D", "Resize to {}x{} ignored, size unchanged", width, height);
            return Ok(());
        }
        self.allocate(ctx, width, height)
    }

    /// Apply a quality change, reallocating only when the target layout
    /// changed
    ///
    /// Returns whether the render targets were reallocated.
    pub fn update_quality<F>(&mut self, ctx: &mut RenderContext<'_>, change: F) -> Result<bool>
    where
        F: FnOnce(&mut QualityConfig),
    {
        self.sequencer.check_reallocation_allowed()?;
        change(&mut self.config);

        let Some((width, height)) = self.pool.screen_size() else {
            return Ok(false);
        };
        if !self.pool.needs_reallocation(width, height, &self.config) {
            return Ok(false);
        }
        self.allocate(ctx, width, height)?;
        Ok(true)
    }

    /// Replace the helper threads with `count` fresh workers
    ///
    /// The count is remembered and reapplied by `initialize()`.
    pub fn set_worker_count(&mut self, count: usize) -> Result<()> {
        self.config.set_preferred_worker_count(count);
        self.workers.set_worker_count(count)
    }

    fn allocate(&mut self, ctx: &mut RenderContext<'_>, width: u32, height: u32) -> Result<()> {
        if let Err(e) = self.pool.initialize(&mut *ctx.device, width, height, &self.config) {
            engine_error!("galaxy3d::Renderable3D",
                "Render target allocation for {}x{} failed: {}", width, height, e);
            self.sequencer.reset();
            return Err(e);
        }
        self.sequencer.mark_initialized()
    }

    // ===== ACCESSORS =====

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut B {
        &mut self.base
    }

    /// Quality parameters; change them through `update_quality()`
    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    pub fn toggles(&self) -> &FeatureToggles {
        &self.toggles
    }

    /// Toggles never affect allocation and may change between frames
    pub fn toggles_mut(&mut self) -> &mut FeatureToggles {
        &mut self.toggles
    }

    pub fn set_toggles(&mut self, toggles: FeatureToggles) {
        self.toggles = toggles;
    }

    pub fn pool(&self) -> &RenderTargetPool {
        &self.pool
    }

    pub fn workers(&self) -> &WorkerPool {
        &self.workers
    }

    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    pub fn frames_composed(&self) -> u64 {
        self.sequencer.frames_composed()
    }
}

impl Default for Renderable3D<NoOpLifecycle> {
    fn default() -> Self {
        Self::new(NoOpLifecycle)
    }
}

#[cfg(test)]
#[path = "renderable_3d_tests.rs"]
mod tests;
