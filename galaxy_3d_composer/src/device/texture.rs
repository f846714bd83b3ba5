/// Texture trait, pixel formats, and texture info

/// Pixel format of textures and render targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    R8G8B8A8_UNORM,
    R8G8B8A8_SNORM,
    R16G16B16A16_SFLOAT,
    R32_SFLOAT,
    R8_UNORM,
    D24_UNORM_S8_UINT,
}

impl TextureFormat {
    /// Returns true for depth/stencil formats
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::D24_UNORM_S8_UINT)
    }

    /// Size of one texel in bytes
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R8_UNORM => 1,
            TextureFormat::R8G8B8A8_UNORM
            | TextureFormat::R8G8B8A8_SNORM
            | TextureFormat::R32_SFLOAT
            | TextureFormat::D24_UNORM_S8_UINT => 4,
            TextureFormat::R16G16B16A16_SFLOAT => 8,
        }
    }
}

/// Read-only properties of a sampled texture (lookup tables, masks).
#[derive(Debug, Clone, PartialEq)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Number of array layers
    pub array_layers: u32,
    /// Number of mip levels
    pub mip_levels: u32,
}

/// Sampled texture resource trait
///
/// Implemented by backend-specific texture types. The composer only ever
/// binds these as mask maps (e.g. the color-grading lookup).
pub trait Texture: Send + Sync {
    /// Get the read-only properties of this texture
    fn info(&self) -> &TextureInfo;
}
