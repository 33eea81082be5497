//! Bitmap font sample
//!
//! Loads a font through the resource cache, lays out a string and submits
//! it to a sink that logs each draw. Usage:
//!
//! ```text
//! font_sample [config.toml|config.ron]
//! ```
//!
//! When the configured font asset is missing, a generated monospaced demo
//! font is used instead so the sample always has something to show.

use std::path::PathBuf;

use bitmap_font::cache::loaders::{find_asset, Loaders, BUILTIN_TEXT_SHADER};
use bitmap_font::font::{FontData, FontDataBuilder, FontError, GlyphSpec};
use bitmap_font::foundation::logging;
use bitmap_font::foundation::math::Mat4Ext;
use bitmap_font::prelude::*;
use serde::{Deserialize, Serialize};

/// Sample settings, loadable from TOML or RON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct SampleConfig {
    asset_root: PathBuf,
    text: String,
    color: Color,
    position: [f32; 3],
    renderer: TextConfig,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            text: "Hello, bitmap fonts!\nWrapped\tand aligned text.".to_owned(),
            color: Color::WHITE,
            position: [16.0, -16.0, 0.0],
            renderer: TextConfig {
                size: 24.0,
                width: 240.0,
                height: 120.0,
                align: Align::Center,
                ..TextConfig::new("fonts/demo")
            },
        }
    }
}

impl Config for SampleConfig {}

/// Sink that logs what a real renderer would upload and draw
struct LogSink {
    frame: u32,
}

impl DrawSink for LogSink {
    type View = &'static str;

    fn draw_text(&mut self, command: TextDrawCommand<'_>, view: Option<&Self::View>) {
        let geometry = command.geometry;
        log::info!(
            "[{}] draw {} glyphs ({} vertices, {} indices) with {:?} / {:?}",
            view.copied().unwrap_or("default view"),
            geometry.quad_count(),
            geometry.vertices.len(),
            geometry.triangles.len(),
            command.material.shader,
            command.material.texture,
        );

        if let Some(bounds) = geometry.bounds() {
            let to_world = |x: f32, y: f32| {
                command
                    .transform
                    .transform_position(&Vec3::new(x, y, 0.0))
            };
            let min = to_world(bounds.min_x, bounds.min_y);
            let max = to_world(bounds.max_x, bounds.max_y);
            log::info!(
                "    world bounds ({:.1}, {:.1}) .. ({:.1}, {:.1})",
                min.x,
                min.y,
                max.x,
                max.y
            );
        }
        self.frame += 1;
    }
}

/// Monospaced ASCII font laid out on a 16x6 grid of 16x16 cells
fn demo_font() -> Result<FontData, FontError> {
    let mut builder = FontDataBuilder::new(16, 13, 256, 96, "demo.png");
    for (n, ch) in (' '..='~').enumerate() {
        let (col, row) = (n % 16, n / 16);
        builder = builder.glyph(
            ch,
            GlyphSpec {
                advance: 0.625,
                u: (col * 16) as i16,
                v: (row * 16) as i16,
                bearing_x: 1,
                bearing_y: 13,
                width: 8,
                height: 16,
            },
        );
    }
    builder.build()
}

/// Cache over the asset root, falling back to the demo font
fn build_cache(config: &SampleConfig) -> Result<ResourceCache, FontError> {
    if find_asset(&config.asset_root, &config.renderer.font, "bytes").is_some() {
        return Ok(ResourceCache::with_asset_root(&config.asset_root));
    }

    log::warn!(
        "No font asset '{}' under {}; using the generated demo font",
        config.renderer.font,
        config.asset_root.display()
    );
    let font_name = config.renderer.font.clone();
    let bytes = demo_font()?.encode();

    Ok(ResourceCache::new(Loaders::new(
        move |name| (name == font_name).then(|| bytes.clone()),
        // The demo atlas only exists on the GPU side of a real host
        |_| Some(TextureHandle(1)),
        |name| (name == bitmap_font::text::TEXT_SHADER_NAME).then_some(BUILTIN_TEXT_SHADER),
    )))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default("info");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading sample configuration from {}", path);
            SampleConfig::load_from_file(&path)?
        }
        None => SampleConfig::default(),
    };

    let cache = build_cache(&config)?;
    let mut renderer = TextRenderer::new(&cache, config.renderer.clone())?;
    log::info!("Font '{}': {} glyphs", config.renderer.font, renderer.font().metrics.len());

    if !renderer.set_text(&config.text, config.color) {
        log::warn!("Some characters have no glyph in '{}'", config.renderer.font);
    }

    let [x, y, z] = config.position;
    let transform = <Mat4 as Mat4Ext>::translation(x, y, z);
    let mut sink = LogSink { frame: 0 };
    renderer.render(&transform, Some(&"ui"), &mut sink);
    log::info!("Submitted {} draw(s)", sink.frame);

    renderer.release();
    log::info!("Cache after release: {:?}", cache);
    Ok(())
}
