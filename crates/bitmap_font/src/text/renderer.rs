//! Text renderer
//!
//! Owns one string's worth of geometry plus the shared font data and atlas
//! material it was built from. Drawing is delegated to a host-supplied
//! [`DrawSink`]; the renderer never talks to a graphics API itself.

use std::path::Path;

use super::config::TextConfig;
use super::layout::{TextGeometry, TextLayoutEngine};
use super::material::Material;
use crate::cache::{CacheError, FontDataHandle, MaterialHandle, ResourceCache};
use crate::font::FontData;
use crate::foundation::color::Color;
use crate::foundation::math::Mat4;

/// A single draw submitted to a [`DrawSink`]
#[derive(Debug, Clone, Copy)]
pub struct TextDrawCommand<'a> {
    /// Pre-computed model-to-world transformation matrix
    pub transform: &'a Mat4,
    /// Glyph quads to draw
    pub geometry: &'a TextGeometry,
    /// Shader and atlas binding
    pub material: &'a Material,
}

/// Host-side receiver of text draws
///
/// `View` is whatever the host uses to select a camera or render target;
/// the renderer passes it through untouched.
pub trait DrawSink {
    /// Camera or view context type
    type View;

    /// Draw one text mesh
    fn draw_text(&mut self, command: TextDrawCommand<'_>, view: Option<&Self::View>);
}

/// Renders text with a cached bitmap font
///
/// Holds one reference to the font data and one to the atlas material for
/// its whole lifetime. Both are returned to the cache by [`release`] or,
/// failing that, when the renderer is dropped.
///
/// [`release`]: TextRenderer::release
///
/// # Example
///
/// ```no_run
/// use bitmap_font::prelude::*;
///
/// # fn main() -> Result<(), CacheError> {
/// let cache = ResourceCache::with_asset_root("assets");
/// let config = TextConfig {
///     size: 24.0,
///     ..TextConfig::new("fonts/hud")
/// };
/// let mut renderer = TextRenderer::new(&cache, config)?;
/// if !renderer.set_text("Score: 100", Color::WHITE) {
///     log::warn!("some glyphs are missing from the font");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TextRenderer {
    data: FontDataHandle,
    material: MaterialHandle,
    engine: TextLayoutEngine,
    geometry: TextGeometry,
}

impl TextRenderer {
    /// Create a renderer, acquiring the font and its atlas from the cache
    ///
    /// The atlas is looked up next to the font asset: a font named
    /// `fonts/hud` with texture `hud.png` loads `fonts/hud.png`.
    pub fn new(cache: &ResourceCache, config: TextConfig) -> Result<Self, CacheError> {
        let data = cache.load_data(&config.font)?;
        let texture_key = atlas_key(&config.font, &data.texture_name);
        // On failure `data` drops here and gives its reference back.
        let material = cache.load_texture(&texture_key)?;

        let engine = TextLayoutEngine::for_font(&config, &data);
        log::debug!(
            "Text renderer for '{}' at size {} (atlas '{}')",
            config.font,
            config.size,
            texture_key
        );

        Ok(Self {
            data,
            material,
            engine,
            geometry: TextGeometry::default(),
        })
    }

    /// Replace the text, drawn in a single color
    ///
    /// Returns false if any character has no glyph in the font.
    pub fn set_text(&mut self, text: &str, color: Color) -> bool {
        self.set_text_with_colors(text, &[color])
    }

    /// Replace the text with one color per UTF-16 code unit
    ///
    /// Returns false if any character has no glyph in the font; the other
    /// characters are still laid out.
    pub fn set_text_with_colors(&mut self, text: &str, colors: &[Color]) -> bool {
        let outcome = self.engine.layout_str(&self.data, text, colors);
        self.geometry = outcome.geometry;
        outcome.success
    }

    /// Submit the current text to `sink`
    ///
    /// Does nothing when there is no geometry.
    pub fn render<S: DrawSink>(&self, transform: &Mat4, view: Option<&S::View>, sink: &mut S) {
        if self.geometry.is_empty() {
            return;
        }

        sink.draw_text(
            TextDrawCommand {
                transform,
                geometry: &self.geometry,
                material: &self.material,
            },
            view,
        );
    }

    /// Geometry produced by the last `set_text`
    pub const fn geometry(&self) -> &TextGeometry {
        &self.geometry
    }

    /// Whether the current text produced no glyphs
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }

    /// Shared atlas material
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Shared decoded font
    pub fn font(&self) -> &FontData {
        &self.data
    }

    /// Layout engine configured for this renderer
    pub const fn layout_engine(&self) -> &TextLayoutEngine {
        &self.engine
    }

    /// Return the font data and material references to the cache
    pub fn release(self) {
        let Self { data, material, .. } = self;
        material.release();
        data.release();
    }
}

/// Cache key of a font's atlas: the texture name, beside the font asset
fn atlas_key(font_name: &str, texture_name: &str) -> String {
    match Path::new(font_name).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            format!("{}/{}", dir.to_string_lossy(), texture_name)
        }
        _ => texture_name.to_owned(),
    }
}
