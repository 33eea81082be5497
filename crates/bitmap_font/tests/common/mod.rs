//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::HashMap;

use bitmap_font::font::{FontData, FontDataBuilder, GlyphSpec};
use bitmap_font::prelude::*;

/// Monospaced font: 20 px design size, every glyph 10x20 px with advance 0.5 em
pub fn mono_font() -> FontData {
    let mut builder = FontDataBuilder::new(20, 16, 256, 64, "mono.png");
    for (n, ch) in ('A'..='Z').chain('a'..='z').chain(['.', ',', '!']).enumerate() {
        builder = builder.glyph(
            ch,
            GlyphSpec {
                advance: 0.5,
                u: n as i16 * 4,
                v: 0,
                bearing_x: 0,
                bearing_y: 20,
                width: 10,
                height: 20,
            },
        );
    }
    builder.build().unwrap()
}

/// Font with a single 'A' at a 32 px design size
pub fn single_glyph_font() -> FontData {
    FontDataBuilder::new(32, 28, 64, 64, "single.png")
        .glyph(
            'A',
            GlyphSpec {
                advance: 0.6,
                u: 2,
                v: 2,
                bearing_x: 0,
                bearing_y: 24,
                width: 20,
                height: 24,
            },
        )
        .build()
        .unwrap()
}

/// Cache serving encoded fonts from memory, with atlases beside them
pub fn memory_cache(fonts: Vec<(&str, FontData)>) -> ResourceCache {
    let mut atlases = HashMap::new();
    let mut assets = HashMap::new();
    for (n, (name, font)) in fonts.into_iter().enumerate() {
        let dir = name.rsplit_once('/').map_or("", |(dir, _)| dir);
        let atlas = if dir.is_empty() {
            font.texture_name.clone()
        } else {
            format!("{dir}/{}", font.texture_name)
        };
        atlases.insert(atlas, TextureHandle(n as u32 + 1));
        assets.insert(name.to_owned(), font.encode());
    }

    ResourceCache::new(Loaders::new(
        move |name| assets.get(name).cloned(),
        move |name| atlases.get(name).copied(),
        |name| (name == bitmap_font::text::TEXT_SHADER_NAME).then_some(ShaderHandle(9)),
    ))
}

/// Sink recording what it was asked to draw
#[derive(Default)]
pub struct RecordingSink {
    pub draws: Vec<RecordedDraw>,
}

pub struct RecordedDraw {
    pub quads: usize,
    pub texture: TextureHandle,
    pub translation: Vec3,
    pub view: Option<u32>,
}

impl DrawSink for RecordingSink {
    type View = u32;

    fn draw_text(&mut self, command: TextDrawCommand<'_>, view: Option<&u32>) {
        let t = command.transform;
        self.draws.push(RecordedDraw {
            quads: command.geometry.quad_count(),
            texture: command.material.texture,
            translation: Vec3::new(t[(0, 3)], t[(1, 3)], t[(2, 3)]),
            view: view.copied(),
        });
    }
}
