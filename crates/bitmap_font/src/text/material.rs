//! Text material and opaque GPU handles
//!
//! Textures and shaders are owned by the host renderer; this crate only
//! carries the handles it was given and binds them into a [`Material`].

use crate::foundation::color::Color;

/// Name of the built-in shader every text material binds
pub const TEXT_SHADER_NAME: &str = "BitmapFont";

/// Handle for a GPU texture resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Handle for a compiled shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Shader and atlas texture binding used to draw text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Shader program drawing the glyph quads
    pub shader: ShaderHandle,
    /// Font atlas texture (alpha channel is glyph coverage)
    pub texture: TextureHandle,
    /// Tint multiplied with vertex colors
    pub color: Color,
}

impl Material {
    /// Create an untinted (opaque white) text material
    pub const fn new(shader: ShaderHandle, texture: TextureHandle) -> Self {
        Self {
            shader,
            texture,
            color: Color::WHITE,
        }
    }

    /// Replace the tint color
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
