/// RenderTarget trait - an offscreen image that can be written then sampled

use super::texture::TextureFormat;

/// Allocation parameters for a render target
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTargetDesc {
    /// Debug label, also used in logs
    pub label: &'static str,
    /// Width in pixels (at least 1)
    pub width: u32,
    /// Height in pixels (at least 1)
    pub height: u32,
    /// MSAA sample count
    pub sample_count: u32,
    /// Whether the target owns a depth buffer next to its color image
    pub has_depth: bool,
    /// Number of array slices (readable views)
    pub array_layers: u32,
    /// Number of mip levels, 0 = full chain
    pub mip_levels: u32,
    /// Pixel format
    pub format: TextureFormat,
}

impl RenderTargetDesc {
    /// Single-sampled, single-slice color target without depth
    pub fn color(label: &'static str, width: u32, height: u32, format: TextureFormat) -> Self {
        Self {
            label,
            width: width.max(1),
            height: height.max(1),
            sample_count: 1,
            has_depth: false,
            array_layers: 1,
            mip_levels: 1,
            format,
        }
    }

    /// Attach a depth buffer
    pub fn with_depth(mut self) -> Self {
        self.has_depth = true;
        self
    }

    /// Request a full mip chain
    pub fn with_full_mip_chain(mut self) -> Self {
        self.mip_levels = 0;
        self
    }

    /// Resolved mip count (a full chain down to 1x1 when `mip_levels == 0`)
    pub fn mip_level_count(&self) -> u32 {
        if self.mip_levels == 0 {
            32 - self.width.max(self.height).max(1).leading_zeros()
        } else {
            self.mip_levels
        }
    }

    /// Approximate GPU memory footprint of the color image(s)
    pub fn memory_bytes(&self) -> u64 {
        let mut total = 0u64;
        for mip in 0..self.mip_level_count() {
            let w = (self.width >> mip).max(1) as u64;
            let h = (self.height >> mip).max(1) as u64;
            total += w * h;
        }
        total
            * self.format.bytes_per_pixel() as u64
            * self.sample_count.max(1) as u64
            * self.array_layers.max(1) as u64
    }
}

/// Render target trait
///
/// Owned GPU image created by `GraphicsDevice::create_render_target()`.
/// Released when dropped.
pub trait RenderTarget: Send + Sync {
    /// Allocation parameters this target was created with
    fn desc(&self) -> &RenderTargetDesc;

    fn label(&self) -> &'static str {
        self.desc().label
    }

    fn width(&self) -> u32 {
        self.desc().width
    }

    fn height(&self) -> u32 {
        self.desc().height
    }

    fn format(&self) -> TextureFormat {
        self.desc().format
    }

    fn has_depth(&self) -> bool {
        self.desc().has_depth
    }
}

/// Which readable view of a target a pass samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlice {
    /// First color view (full resolution, first slice)
    Front,
    /// Last color view (last slice / resolved view)
    Back,
    /// Depth attachment
    Depth,
}

/// Borrowed, read-only view of a render target for the duration of one draw
#[derive(Clone, Copy)]
pub struct ImageView<'a> {
    pub target: &'a dyn RenderTarget,
    pub slice: ImageSlice,
}

impl<'a> ImageView<'a> {
    pub fn front(target: &'a dyn RenderTarget) -> Self {
        Self { target, slice: ImageSlice::Front }
    }

    pub fn back(target: &'a dyn RenderTarget) -> Self {
        Self { target, slice: ImageSlice::Back }
    }

    pub fn depth(target: &'a dyn RenderTarget) -> Self {
        Self { target, slice: ImageSlice::Depth }
    }

    pub fn label(&self) -> &'static str {
        self.target.label()
    }
}

impl std::fmt::Debug for ImageView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{:?}]", self.target.label(), self.slice)
    }
}
