//! # Bitmap Font
//!
//! Text rendering from a pre-baked bitmap font atlas.
//!
//! ## Features
//!
//! - **Asset Decoding**: Packed little-endian font assets with glyph metrics and atlas coordinates
//! - **Glyph Lookup**: Bucketed metric index with binary-search fallback
//! - **Text Layout**: Quad-per-glyph meshes with word wrap, margins, and alignment
//! - **Shared Resources**: Reference-counted cache for decoded fonts and atlas materials
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitmap_font::prelude::*;
//!
//! struct LogSink;
//!
//! impl DrawSink for LogSink {
//!     type View = ();
//!
//!     fn draw_text(&mut self, command: TextDrawCommand<'_>, _view: Option<&()>) {
//!         log::info!("{} glyph vertices", command.geometry.vertices.len());
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cache = ResourceCache::with_asset_root("assets");
//!     let config = TextConfig {
//!         size: 32.0,
//!         width: 240.0,
//!         ..TextConfig::new("fonts/hud")
//!     };
//!
//!     let mut renderer = TextRenderer::new(&cache, config)?;
//!     renderer.set_text("Hello world", Color::WHITE);
//!     renderer.render(&Mat4::identity(), None, &mut LogSink);
//!     renderer.release();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod cache;
pub mod config;
pub mod font;
pub mod foundation;
pub mod text;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        cache::{CacheError, FontDataHandle, Loaders, MaterialHandle, ResourceCache},
        config::{Config, ConfigError},
        font::{FontData, FontError, FontHeader, GlyphIndex, Metric},
        foundation::{
            color::Color,
            math::{Mat4, Vec2, Vec3},
        },
        text::{
            Align, DrawSink, LayoutOutcome, Material, ShaderHandle, TextConfig, TextDrawCommand,
            TextGeometry, TextLayoutEngine, TextRenderer, TextureHandle, VerticalAlign,
        },
    };
}
