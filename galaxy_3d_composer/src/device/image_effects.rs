/// Full-screen image draw parameters
///
/// Carried with every `GraphicsDevice::draw_image()` call. The device's
/// image compositor maps these onto blend states, samplers and shader
/// permutations.

use std::sync::Arc;
use bitflags::bitflags;
use glam::Vec2;
use super::texture::Texture;

/// Mip bias used when blurring the bloom bright-pass
pub const BLOOM_BLUR_MIP_LEVEL: f32 = 5.32;

/// How the draw combines with the active target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Overwrite destination
    Opaque,
    /// Standard alpha blending
    Alpha,
    /// Source added onto destination
    Additive,
}

/// Texture addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    Clamp,
    Wrap,
    Mirror,
}

/// Texture filtering quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleQuality {
    Nearest,
    Bilinear,
}

bitflags! {
    /// Post-process shader permutations
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PostProcess: u32 {
        const FXAA        = 1 << 0;
        const COLOR_GRADE = 1 << 1;
    }
}

/// Bright-pass extraction parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomExtract {
    pub saturation: f32,
    pub threshold: f32,
}

/// Axis of a separable blur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurDirection {
    Horizontal,
    Vertical,
}

/// One axis of a separable blur
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blur {
    pub strength: f32,
    pub direction: BlurDirection,
}

/// Parameters of one full-screen textured draw
#[derive(Clone)]
pub struct ImageEffects {
    /// Destination size in pixels
    pub width: f32,
    pub height: f32,
    pub blend: BlendMode,
    pub sample: SampleMode,
    pub quality: SampleQuality,
    pub process: PostProcess,
    /// Bright-pass extraction, when set
    pub bloom: Option<BloomExtract>,
    /// Separable blur axis, when set
    pub blur: Option<Blur>,
    /// Mip level sampled from the source
    pub mip_level: f32,
    /// Screen-space light position for radial blur, when set
    pub sun_position: Option<Vec2>,
    /// Secondary texture (color-grading lookup)
    pub mask_map: Option<Arc<dyn Texture>>,
}

impl ImageEffects {
    /// Opaque, bilinear, mirror-sampled draw covering a `width` x `height` screen
    pub fn fullscreen(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            blend: BlendMode::Opaque,
            sample: SampleMode::Mirror,
            quality: SampleQuality::Bilinear,
            process: PostProcess::empty(),
            bloom: None,
            blur: None,
            mip_level: 0.0,
            sun_position: None,
            mask_map: None,
        }
    }

    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }
}

impl std::fmt::Debug for ImageEffects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageEffects")
            .field("size", &(self.width, self.height))
            .field("blend", &self.blend)
            .field("sample", &self.sample)
            .field("quality", &self.quality)
            .field("process", &self.process)
            .field("bloom", &self.bloom)
            .field("blur", &self.blur)
            .field("mip_level", &self.mip_level)
            .field("sun_position", &self.sun_position)
            .field("mask_map", &self.mask_map.is_some())
            .finish()
    }
}
