/// Mock graphics device and scene renderer for unit tests (no GPU required)
///
/// Both mocks append to one shared event log so tests can check the exact
/// interleaving of activations, image draws and scene draws.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use glam::{Mat4, Vec2, Vec3};

use crate::device::{
    GraphicsDevice, SceneRenderer, RenderTarget, RenderTargetDesc, Texture, TextureInfo,
    TextureFormat, ImageView, ImageSlice, ImageEffects, BlendMode, SampleMode, SampleQuality,
    PostProcess, BlurDirection, PerViewConstants, EffectConstants, SurfaceInputs,
};
use crate::camera::Camera;
use crate::config::{FeatureToggles, QualityConfig};
use crate::error::{Error, Result};
use crate::passes::{FrameContext, SceneTargets};
use crate::target::RenderTargetPool;

/// A `(target label, slice)` pair as seen by a draw
pub type ViewRecord = (&'static str, ImageSlice);

fn record(view: ImageView<'_>) -> ViewRecord {
    (view.label(), view.slice)
}

fn texture_id(texture: &Arc<dyn Texture>) -> usize {
    Arc::as_ptr(texture) as *const () as usize
}

// ============================================================================
// Events
// ============================================================================

/// One recorded image draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub source: ViewRecord,
    pub blend: BlendMode,
    pub sample: SampleMode,
    pub quality: SampleQuality,
    pub process: PostProcess,
    pub bloom: bool,
    pub blur: Option<BlurDirection>,
    pub mip_level: f32,
    pub sun_position: Option<Vec2>,
    pub mask: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MockEvent {
    CreateTarget(RenderTargetDesc),
    Activate { target: &'static str, depth: Option<&'static str>, clear: Option<[f32; 4]> },
    ActivateOutput,
    BatchBegin,
    Draw(DrawRecord),
    GenerateMips(&'static str),

    UpdateScene,
    UpdateLights,
    SynchronizeWithPhysics,
    UpdateRenderInfo,
    UpdateSkinnedBuffers,
    UpdateImages,
    ParticleSystems { hair: bool, emitters: bool },
    UpdatePerView(PerViewConstants),
    UpdatePerEffect(EffectConstants),
    DrawWorld(Mat4),
    DrawSky(Vec3),
    ClearShadowMaps,
    DrawForShadowMap,
    DrawVolumeLights,
    DrawSoftParticles(ViewRecord),
    DrawSoftPremulParticles(ViewRecord),
    DrawWaterRipples,
    DrawWorldWater { shaded: ViewRecord, reflection: ViewRecord, linear_depth: ViewRecord, ripples: ViewRecord },
    DrawWorldTransparent { shaded: ViewRecord, reflection: ViewRecord, linear_depth: ViewRecord },
    DrawLensFlares { depth: ViewRecord, width: u32, height: u32 },
}

pub type EventLog = Arc<Mutex<Vec<MockEvent>>>;

pub fn new_event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

// ============================================================================
// Mock RenderTarget
// ============================================================================

#[derive(Debug)]
pub struct MockRenderTarget {
    desc: RenderTargetDesc,
    live: Arc<AtomicUsize>,
}

impl MockRenderTarget {
    pub fn new(desc: RenderTargetDesc, live: Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        Self { desc, live }
    }

    /// Target not tracked by any device (main/shaded scene targets in tests)
    pub fn standalone(desc: RenderTargetDesc) -> Self {
        Self::new(desc, Arc::new(AtomicUsize::new(0)))
    }
}

impl Drop for MockRenderTarget {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl RenderTarget for MockRenderTarget {
    fn desc(&self) -> &RenderTargetDesc {
        &self.desc
    }
}

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
}

impl MockTexture {
    pub fn lookup(width: u32, height: u32) -> Self {
        Self {
            info: TextureInfo {
                width,
                height,
                format: TextureFormat::R8G8B8A8_UNORM,
                array_layers: 1,
                mip_levels: 1,
            },
        }
    }
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

pub struct MockGraphicsDevice {
    pub events: EventLog,
    /// Number of render targets currently alive
    pub live_targets: Arc<AtomicUsize>,
    /// Total number of successful allocations
    pub allocations: usize,
    /// Fail the allocation with this zero-based index
    pub fail_allocation_at: Option<usize>,
}

impl MockGraphicsDevice {
    pub fn new(events: EventLog) -> Self {
        Self {
            events,
            live_targets: Arc::new(AtomicUsize::new(0)),
            allocations: 0,
            fail_allocation_at: None,
        }
    }

    pub fn live_target_count(&self) -> usize {
        self.live_targets.load(Ordering::SeqCst)
    }

    fn push(&self, event: MockEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Box<dyn RenderTarget>> {
        if self.fail_allocation_at == Some(self.allocations) {
            return Err(Error::OutOfMemory);
        }
        self.allocations += 1;
        self.push(MockEvent::CreateTarget(desc.clone()));
        Ok(Box::new(MockRenderTarget::new(desc.clone(), self.live_targets.clone())))
    }

    fn activate(
        &mut self,
        target: &dyn RenderTarget,
        depth: Option<&dyn RenderTarget>,
        clear_color: Option<[f32; 4]>,
    ) -> Result<()> {
        self.push(MockEvent::Activate {
            target: target.label(),
            depth: depth.map(|d| d.label()),
            clear: clear_color,
        });
        Ok(())
    }

    fn activate_output(&mut self) -> Result<()> {
        self.push(MockEvent::ActivateOutput);
        Ok(())
    }

    fn batch_begin(&mut self) {
        self.push(MockEvent::BatchBegin);
    }

    fn draw_image(&mut self, source: ImageView<'_>, effects: &ImageEffects) -> Result<()> {
        self.push(MockEvent::Draw(DrawRecord {
            source: record(source),
            blend: effects.blend,
            sample: effects.sample,
            quality: effects.quality,
            process: effects.process,
            bloom: effects.bloom.is_some(),
            blur: effects.blur.map(|b| b.direction),
            mip_level: effects.mip_level,
            sun_position: effects.sun_position,
            mask: effects.mask_map.as_ref().map(texture_id),
        }));
        Ok(())
    }

    fn generate_mips(&mut self, target: &dyn RenderTarget) -> Result<()> {
        self.push(MockEvent::GenerateMips(target.label()));
        Ok(())
    }
}

// ============================================================================
// Mock SceneRenderer
// ============================================================================

pub struct MockSceneRenderer {
    pub events: EventLog,
    pub native_flares: bool,
    pub sun: Vec3,
    pub grading: Option<Arc<dyn Texture>>,
    pub default_grading: Arc<dyn Texture>,
}

impl MockSceneRenderer {
    pub fn new(events: EventLog) -> Self {
        Self {
            events,
            native_flares: false,
            sun: Vec3::new(0.0, 0.5, -1.0).normalize(),
            grading: None,
            default_grading: Arc::new(MockTexture::lookup(256, 16)),
        }
    }

    pub fn default_grading_id(&self) -> usize {
        texture_id(&self.default_grading)
    }

    pub fn grading_id(&self) -> Option<usize> {
        self.grading.as_ref().map(texture_id)
    }

    fn push(&self, event: MockEvent) -> Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

impl SceneRenderer for MockSceneRenderer {
    fn update_scene(&mut self) -> Result<()> { self.push(MockEvent::UpdateScene) }
    fn update_lights(&mut self) -> Result<()> { self.push(MockEvent::UpdateLights) }
    fn synchronize_with_physics(&mut self) -> Result<()> { self.push(MockEvent::SynchronizeWithPhysics) }
    fn update_render_info(&mut self) -> Result<()> { self.push(MockEvent::UpdateRenderInfo) }
    fn update_skinned_buffers(&mut self) -> Result<()> { self.push(MockEvent::UpdateSkinnedBuffers) }
    fn update_images(&mut self) -> Result<()> { self.push(MockEvent::UpdateImages) }

    fn set_particle_systems_enabled(&mut self, hair: bool, emitters: bool) {
        let _ = self.push(MockEvent::ParticleSystems { hair, emitters });
    }

    fn update_per_view(&mut self, constants: &PerViewConstants) -> Result<()> {
        self.push(MockEvent::UpdatePerView(*constants))
    }

    fn update_per_effect(&mut self, constants: &EffectConstants) -> Result<()> {
        self.push(MockEvent::UpdatePerEffect(*constants))
    }

    fn draw_world(&mut self, view: &Mat4) -> Result<()> { self.push(MockEvent::DrawWorld(*view)) }
    fn draw_sky(&mut self, eye: Vec3) -> Result<()> { self.push(MockEvent::DrawSky(eye)) }
    fn clear_shadow_maps(&mut self) -> Result<()> { self.push(MockEvent::ClearShadowMaps) }
    fn draw_for_shadow_map(&mut self) -> Result<()> { self.push(MockEvent::DrawForShadowMap) }
    fn draw_volume_lights(&mut self, _view: &Mat4) -> Result<()> { self.push(MockEvent::DrawVolumeLights) }

    fn draw_soft_particles(&mut self, _eye: Vec3, _view: &Mat4, linear_depth: ImageView<'_>) -> Result<()> {
        self.push(MockEvent::DrawSoftParticles(record(linear_depth)))
    }

    fn draw_soft_premul_particles(&mut self, _eye: Vec3, _view: &Mat4, linear_depth: ImageView<'_>) -> Result<()> {
        self.push(MockEvent::DrawSoftPremulParticles(record(linear_depth)))
    }

    fn draw_water_ripples(&mut self) -> Result<()> { self.push(MockEvent::DrawWaterRipples) }

    fn draw_world_water(&mut self, _view: &Mat4, inputs: &SurfaceInputs<'_>, ripples: ImageView<'_>) -> Result<()> {
        self.push(MockEvent::DrawWorldWater {
            shaded: record(inputs.shaded_scene),
            reflection: record(inputs.reflection),
            linear_depth: record(inputs.linear_depth),
            ripples: record(ripples),
        })
    }

    fn draw_world_transparent(&mut self, _view: &Mat4, inputs: &SurfaceInputs<'_>) -> Result<()> {
        self.push(MockEvent::DrawWorldTransparent {
            shaded: record(inputs.shaded_scene),
            reflection: record(inputs.reflection),
            linear_depth: record(inputs.linear_depth),
        })
    }

    fn draw_lens_flares(&mut self, depth: ImageView<'_>, width: u32, height: u32) -> Result<()> {
        self.push(MockEvent::DrawLensFlares { depth: record(depth), width, height })
    }

    fn native_lens_flares(&self) -> bool {
        self.native_flares
    }

    fn sun_direction(&self) -> Vec3 {
        self.sun
    }

    fn color_grading(&self) -> Option<Arc<dyn Texture>> {
        self.grading.clone()
    }

    fn default_color_grading(&self) -> Arc<dyn Texture> {
        self.default_grading.clone()
    }
}

// ============================================================================
// Frame harness
// ============================================================================

pub const HARNESS_WIDTH: u32 = 1280;
pub const HARNESS_HEIGHT: u32 = 720;

/// Camera at (0, 2, 5) looking at the origin
pub fn test_camera() -> Camera {
    let eye = Vec3::new(0.0, 2.0, 5.0);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_rh(
        60f32.to_radians(),
        HARNESS_WIDTH as f32 / HARNESS_HEIGHT as f32,
        0.1,
        1000.0,
    );
    Camera::new(eye, view, projection)
}

/// Everything needed to build a `FrameContext` against the mocks
pub struct FrameHarness {
    pub events: EventLog,
    pub device: MockGraphicsDevice,
    pub renderer: MockSceneRenderer,
    pub camera: Camera,
    pub pool: RenderTargetPool,
    pub config: QualityConfig,
    pub toggles: FeatureToggles,
    pub main: MockRenderTarget,
    pub shaded: MockRenderTarget,
}

impl FrameHarness {
    /// Allocated pool, default quality, given toggles, empty event log
    pub fn new(toggles: FeatureToggles) -> Self {
        let events = new_event_log();
        let mut device = MockGraphicsDevice::new(events.clone());
        let config = QualityConfig::default();
        let mut pool = RenderTargetPool::new();
        pool.initialize(&mut device, HARNESS_WIDTH, HARNESS_HEIGHT, &config).unwrap();
        events.lock().unwrap().clear();

        let main = MockRenderTarget::standalone(
            RenderTargetDesc::color("main_scene", HARNESS_WIDTH, HARNESS_HEIGHT, TextureFormat::R16G16B16A16_SFLOAT)
                .with_depth(),
        );
        let shaded = MockRenderTarget::standalone(
            RenderTargetDesc::color("shaded_scene", HARNESS_WIDTH, HARNESS_HEIGHT, TextureFormat::R16G16B16A16_SFLOAT),
        );

        Self {
            renderer: MockSceneRenderer::new(events.clone()),
            events,
            device,
            camera: test_camera(),
            pool,
            config,
            toggles,
            main,
            shaded,
        }
    }

    pub fn context(&mut self) -> FrameContext<'_> {
        FrameContext {
            device: &mut self.device,
            renderer: &mut self.renderer,
            camera: &self.camera,
            pool: &self.pool,
            config: &self.config,
            toggles: self.toggles,
            scene: SceneTargets::new(&self.main, &self.shaded),
            width: HARNESS_WIDTH,
            height: HARNESS_HEIGHT,
        }
    }

    pub fn take_events(&self) -> Vec<MockEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    /// Image draws only
    pub fn draws(&self) -> Vec<DrawRecord> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                MockEvent::Draw(d) => Some(d.clone()),
                _ => None,
            })
            .collect()
    }

    /// Labels of activated targets, `"output"` for the device output
    pub fn activations(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                MockEvent::Activate { target, .. } => Some(*target),
                MockEvent::ActivateOutput => Some("output"),
                _ => None,
            })
            .collect()
    }
}
