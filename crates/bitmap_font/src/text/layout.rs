//! Text layout engine
//!
//! Converts UTF-16 text into positioned glyph quads (vertices, UVs,
//! triangle indices and vertex colors). Handles glyph advance, letter and
//! line spacing, whitespace, word wrap, and box alignment.
//!
//! # Layout Coordinate System
//!
//! - Origin (0, 0) is the top-left corner of the layout box
//! - +X axis points right
//! - +Y axis points up, so lines advance toward negative Y
//! - The first baseline sits at `-font_ascent * scale`

use bytemuck::{Pod, Zeroable};

use super::config::{Align, TextConfig, VerticalAlign};
use crate::font::{FontData, Metric};
use crate::foundation::color::Color;
use crate::foundation::math::{Vec2, Vec3};

const LINE_FEED: u16 = 0x000A;
const TAB: u16 = 0x0009;
const SPACE: u16 = 0x0020;
/// Full-width space used in CJK text
pub const IDEOGRAPHIC_SPACE: u16 = 0x3000;

const ASCII_EM: u16 = 0x004D; // 'M'
const FULLWIDTH_EM: u16 = 0xFF2D; // 'Ｍ'

/// Interleaved vertex for GPU upload
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TextVertex {
    /// Position in local space
    pub position: [f32; 3],
    /// Atlas texture coordinates
    pub uv: [f32; 2],
    /// Vertex color (RGBA)
    pub color: [f32; 4],
}

/// Bounding box for text layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    /// Minimum X coordinate
    pub min_x: f32,
    /// Minimum Y coordinate
    pub min_y: f32,
    /// Maximum X coordinate
    pub max_x: f32,
    /// Maximum Y coordinate
    pub max_y: f32,
}

impl TextBounds {
    /// Calculate width of bounding box
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Calculate height of bounding box
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }
}

/// Quad-per-glyph text mesh
///
/// Every emitted glyph owns four consecutive vertices (with matching UVs
/// and colors) and six consecutive triangle indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextGeometry {
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Atlas texture coordinates, one per vertex
    pub uvs: Vec<Vec2>,
    /// Triangle indices into `vertices`
    pub triangles: Vec<u32>,
    /// Vertex colors, one per vertex
    pub colors: Vec<Color>,
}

impl TextGeometry {
    fn with_capacity(glyphs: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(glyphs * 4),
            uvs: Vec::with_capacity(glyphs * 4),
            triangles: Vec::with_capacity(glyphs * 6),
            colors: Vec::with_capacity(glyphs * 4),
        }
    }

    /// Whether no glyph was emitted
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of glyph quads
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Ink bounding box of all emitted quads
    pub fn bounds(&self) -> Option<TextBounds> {
        let first = self.vertices.first()?;
        let init = TextBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(self.vertices.iter().fold(init, |b, v| TextBounds {
            min_x: b.min_x.min(v.x),
            min_y: b.min_y.min(v.y),
            max_x: b.max_x.max(v.x),
            max_y: b.max_y.max(v.y),
        }))
    }

    /// Interleave the separate buffers for GPU upload
    pub fn interleaved(&self) -> Vec<TextVertex> {
        self.vertices
            .iter()
            .zip(&self.uvs)
            .zip(&self.colors)
            .map(|((position, uv), color)| TextVertex {
                position: [position.x, position.y, position.z],
                uv: [uv.x, uv.y],
                color: color.to_array(),
            })
            .collect()
    }

    fn push_quad(&mut self, corners: [f32; 4], uvs: [f32; 4], color: Color) {
        let [x0, y0, x1, y1] = corners;
        let [u0, v0, u1, v1] = uvs;
        let base = self.vertices.len() as u32;

        // Bottom-left, top-left, top-right, bottom-right
        self.vertices.extend_from_slice(&[
            Vec3::new(x0, y1, 0.0),
            Vec3::new(x0, y0, 0.0),
            Vec3::new(x1, y0, 0.0),
            Vec3::new(x1, y1, 0.0),
        ]);
        self.uvs.extend_from_slice(&[
            Vec2::new(u0, v1),
            Vec2::new(u0, v0),
            Vec2::new(u1, v0),
            Vec2::new(u1, v1),
        ]);
        self.triangles.extend_from_slice(&[
            base, base + 2, base + 1,
            base, base + 3, base + 2,
        ]);
        self.colors.extend_from_slice(&[color; 4]);
    }

    /// Drop every quad after the first `quads`
    fn truncate_quads(&mut self, quads: usize) {
        self.vertices.truncate(quads * 4);
        self.uvs.truncate(quads * 4);
        self.colors.truncate(quads * 4);
        self.triangles.truncate(quads * 6);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        for vertex in &mut self.vertices {
            vertex.x += dx;
            vertex.y += dy;
        }
    }
}

/// Result of laying out one string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutOutcome {
    /// Geometry for every glyph that resolved
    pub geometry: TextGeometry,
    /// False if any code unit had no glyph in the font
    pub success: bool,
}

/// Layout constants derived from a [`TextConfig`] and a font
///
/// All distances are in output units: ems from the configuration have
/// already been multiplied by `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Target font size
    pub size: f32,
    /// `size / font_size`, applied to pixel metrics from the atlas
    pub scale: f32,
    /// Layout box width (0 = unconstrained)
    pub width: f32,
    /// Layout box height (0 = unconstrained)
    pub height: f32,
    /// Horizontal alignment
    pub align: Align,
    /// Vertical alignment
    pub vertical_align: VerticalAlign,
    /// Distance between baselines
    pub line_spacing: f32,
    /// Extra advance after every glyph
    pub letter_spacing: f32,
    /// Advance of an ASCII space
    pub ascii_space_advance: f32,
    /// Advance of an ideographic space
    pub non_ascii_space_advance: f32,
    /// Advance of a tab
    pub tab_spacing: f32,
    /// Pen x at the start of each line
    pub left_margin: f32,
    /// Distance kept clear of the right edge when wrapping
    pub right_margin: f32,
}

impl LayoutMetrics {
    /// Derive layout constants for a font
    ///
    /// Space widths are measured from the em glyph of each script ('M' and
    /// full-width 'Ｍ'); a font lacking one counts its advance as 1 em.
    pub fn derive(config: &TextConfig, font: &FontData) -> Self {
        let index = font.glyph_index();
        let em_advance = |code_unit| index.lookup(code_unit).map_or(1.0, |m: &Metric| m.advance);

        let size = config.size;
        let scale = if font.header.font_size > 0 {
            size / f32::from(font.header.font_size)
        } else {
            log::warn!(
                "Font declares non-positive size {}; using unscaled metrics",
                font.header.font_size
            );
            1.0
        };

        let letter_spacing = config.letter_spacing * size;
        let ascii_space_advance =
            letter_spacing + em_advance(ASCII_EM) * config.space_advance * size;
        let non_ascii_space_advance =
            letter_spacing + em_advance(FULLWIDTH_EM) * config.space_advance * size;

        Self {
            size,
            scale,
            width: config.width,
            height: config.height,
            align: config.align,
            vertical_align: config.vertical_align,
            line_spacing: config.line_spacing * size,
            letter_spacing,
            ascii_space_advance,
            non_ascii_space_advance,
            tab_spacing: ascii_space_advance * config.tab_spacing,
            left_margin: config.left_margin * size,
            right_margin: config.right_margin * size,
        }
    }
}

/// Text layout engine that converts strings to mesh geometry
#[derive(Debug, Clone)]
pub struct TextLayoutEngine {
    metrics: LayoutMetrics,
}

impl TextLayoutEngine {
    /// Create a layout engine from derived constants
    pub const fn new(metrics: LayoutMetrics) -> Self {
        Self { metrics }
    }

    /// Create a layout engine for a configuration and font
    pub fn for_font(config: &TextConfig, font: &FontData) -> Self {
        Self::new(LayoutMetrics::derive(config, font))
    }

    /// Layout constants in use
    pub const fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Lay out a string
    ///
    /// `colors` holds one color per UTF-16 code unit; when it is shorter
    /// than the text, the last color repeats (white if it is empty).
    pub fn layout_str(&self, font: &FontData, text: &str, colors: &[Color]) -> LayoutOutcome {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.layout(font, &units, colors)
    }

    /// Lay out a sequence of UTF-16 code units
    ///
    /// Each code unit is one glyph. Unresolved code units are skipped and
    /// reported through [`LayoutOutcome::success`]; all other glyphs are
    /// still emitted.
    ///
    /// Word wrap: when a glyph would cross `width - right_margin`, the pen
    /// moves to the next line. If the glyph is inside a run of ASCII
    /// letters, the whole run is moved down instead. A run is moved at most
    /// once per start position, so a word wider than the box breaks at the
    /// character level on its second attempt.
    pub fn layout(&self, font: &FontData, text: &[u16], colors: &[Color]) -> LayoutOutcome {
        if text.is_empty() {
            return LayoutOutcome {
                geometry: TextGeometry::default(),
                success: true,
            };
        }

        let m = &self.metrics;
        let index = font.glyph_index();
        let sheet = (
            f32::from(font.header.sheet_width),
            f32::from(font.header.sheet_height),
        );

        let mut geometry = TextGeometry::with_capacity(text.len());
        let mut success = true;
        let mut x = m.left_margin;
        let mut y = -f32::from(font.header.font_ascent) * m.scale;
        // (text position, quads emitted before it) of the current ASCII word
        let mut word_start: Option<(usize, usize)> = None;
        // A word at the very start has no earlier line to leave behind
        let mut last_rewind: Option<usize> = Some(0);

        let mut i = 0;
        while i < text.len() {
            let unit = text[i];

            let whitespace = match unit {
                LINE_FEED => {
                    x = m.left_margin;
                    y -= m.line_spacing;
                    true
                }
                SPACE => {
                    x += m.ascii_space_advance;
                    true
                }
                TAB => {
                    x += m.tab_spacing;
                    true
                }
                IDEOGRAPHIC_SPACE => {
                    x += m.non_ascii_space_advance;
                    true
                }
                _ => false,
            };
            if whitespace {
                word_start = None;
                i += 1;
                continue;
            }

            let letter = is_ascii_letter(unit);
            if !letter {
                word_start = None;
            } else if word_start.is_none() {
                word_start = Some((i, geometry.quad_count()));
            }

            let Some(metric) = index.lookup(unit) else {
                log::trace!("No glyph for code unit {unit:#06x}");
                success = false;
                i += 1;
                continue;
            };

            let advance = metric.advance * m.size + m.letter_spacing;

            if m.width != 0.0 && x + advance > m.width - m.right_margin {
                let pending = word_start.take();
                x = m.left_margin;
                y -= m.line_spacing;

                if let Some((start, quads)) = pending.filter(|_| letter) {
                    if last_rewind != Some(start) {
                        last_rewind = Some(start);
                        geometry.truncate_quads(quads);
                        i = start;
                        continue;
                    }
                }
            }

            let x0 = x + f32::from(metric.bearing_x) * m.scale;
            let x1 = x0 + f32::from(metric.width) * m.scale;
            let y0 = y + f32::from(metric.bearing_y) * m.scale;
            let y1 = y0 - f32::from(metric.height) * m.scale;

            x += advance;

            let color = colors
                .get(i)
                .or_else(|| colors.last())
                .copied()
                .unwrap_or(Color::WHITE);
            geometry.push_quad([x0, y0, x1, y1], atlas_uvs(metric, sheet), color);

            i += 1;
        }

        self.align(&mut geometry);

        LayoutOutcome { geometry, success }
    }

    /// Shift the finished mesh inside the layout box
    fn align(&self, geometry: &mut TextGeometry) {
        let m = &self.metrics;
        let Some(bounds) = geometry.bounds() else {
            return;
        };

        let dx = if m.width == 0.0 {
            0.0
        } else {
            match m.align {
                Align::Left => 0.0,
                Align::Center => (m.width - m.left_margin - m.right_margin - bounds.width()) / 2.0,
                Align::Right => m.width - m.right_margin - bounds.width(),
            }
        };

        // Lines grow toward -Y, so lowering the text means subtracting.
        let dy = if m.height == 0.0 {
            0.0
        } else {
            match m.vertical_align {
                VerticalAlign::Top => 0.0,
                VerticalAlign::Middle => -(m.height - bounds.height()) / 2.0,
                VerticalAlign::Bottom => -(m.height - bounds.height()),
            }
        };

        if dx != 0.0 || dy != 0.0 {
            geometry.translate(dx, dy);
        }
    }
}

const fn is_ascii_letter(unit: u16) -> bool {
    matches!(unit, 0x41..=0x5A | 0x61..=0x7A)
}

/// Atlas UVs of a glyph box, inset by half a texel on every edge
///
/// Returns `[u0, v_top, u1, v_bottom]`. Atlas rows run top-down while V
/// runs bottom-up, hence the flip.
fn atlas_uvs(metric: &Metric, (sheet_width, sheet_height): (f32, f32)) -> [f32; 4] {
    if sheet_width <= 0.0 || sheet_height <= 0.0 {
        return [0.0; 4];
    }

    let u = f32::from(metric.u);
    let v = f32::from(metric.v);
    let w = f32::from(metric.width);
    let h = f32::from(metric.height);

    let u0 = (u + 0.5) / sheet_width;
    let u1 = (u + w - 0.5) / sheet_width;
    let v_top = 1.0 - (v + 0.5) / sheet_height;
    let v_bottom = 1.0 - (v + h - 0.5) / sheet_height;
    [u0, v_top, u1, v_bottom]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontDataBuilder, GlyphSpec};
    use approx::assert_relative_eq;

    /// Monospaced test font: every glyph is 10x20 px with advance 0.5 em
    fn mono_font() -> FontData {
        let glyph = |u: i16| GlyphSpec {
            advance: 0.5,
            u,
            v: 0,
            bearing_x: 0,
            bearing_y: 20,
            width: 10,
            height: 20,
        };
        let mut builder = FontDataBuilder::new(20, 16, 256, 64, "mono.png");
        for (n, ch) in ('A'..='Z').chain('a'..='z').chain(['.', '!', 'あ']).enumerate() {
            builder = builder.glyph(ch, glyph(n as i16 * 4));
        }
        builder.build().unwrap()
    }

    fn engine(config: TextConfig, font: &FontData) -> TextLayoutEngine {
        TextLayoutEngine::for_font(&config, font)
    }

    fn sized(size: f32, width: f32) -> TextConfig {
        TextConfig {
            size,
            width,
            ..TextConfig::new("mono")
        }
    }

    #[test]
    fn test_text_vertex_size() {
        assert_eq!(std::mem::size_of::<TextVertex>(), std::mem::size_of::<f32>() * 9);
    }

    #[test]
    fn test_bounds_calculation() {
        let bounds = TextBounds {
            min_x: 0.0,
            min_y: -50.0,
            max_x: 100.0,
            max_y: 0.0,
        };
        assert_eq!(bounds.width(), 100.0);
        assert_eq!(bounds.height(), 50.0);
        assert_eq!(bounds.center(), Vec2::new(50.0, -25.0));
    }

    #[test]
    fn test_derived_metrics() {
        let font = mono_font();
        let config = TextConfig {
            size: 40.0,
            letter_spacing: 0.1,
            left_margin: 0.5,
            ..sized(40.0, 0.0)
        };
        let m = LayoutMetrics::derive(&config, &font);

        assert_relative_eq!(m.scale, 2.0);
        assert_relative_eq!(m.letter_spacing, 4.0);
        // 'M' advance 0.5 * space 0.25 * size 40 + letter spacing
        assert_relative_eq!(m.ascii_space_advance, 9.0);
        // No full-width 'Ｍ' in the font: 1 em
        assert_relative_eq!(m.non_ascii_space_advance, 14.0);
        assert_relative_eq!(m.tab_spacing, 36.0);
        assert_relative_eq!(m.line_spacing, 40.0);
        assert_relative_eq!(m.left_margin, 20.0);
    }

    #[test]
    fn test_empty_text() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 0.0), &font).layout(&font, &[], &[]);
        assert!(outcome.success);
        assert!(outcome.geometry.is_empty());
    }

    #[test]
    fn test_whitespace_only_emits_nothing() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 0.0), &font).layout_str(&font, " \t\n\u{3000}", &[]);
        assert!(outcome.success);
        assert!(outcome.geometry.is_empty());
    }

    #[test]
    fn test_quad_buffers_line_up() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 0.0), &font).layout_str(&font, "Hi there", &[Color::RED]);
        let g = &outcome.geometry;

        assert_eq!(g.quad_count(), 7);
        assert_eq!(g.uvs.len(), 28);
        assert_eq!(g.colors.len(), 28);
        assert_eq!(g.triangles.len(), 42);
        assert_eq!(&g.triangles[6..12], &[4, 6, 5, 4, 7, 6]);
        assert!(g.colors.iter().all(|&c| c == Color::RED));
        assert_eq!(g.interleaved().len(), 28);
    }

    #[test]
    fn test_per_character_colors() {
        let font = mono_font();
        let colors = [Color::RED, Color::GREEN, Color::BLUE];
        let outcome = engine(sized(20.0, 0.0), &font).layout_str(&font, "a b", &colors);
        let g = &outcome.geometry;

        assert_eq!(g.quad_count(), 2);
        assert_eq!(g.colors[0], Color::RED);
        // The space consumed GREEN
        assert_eq!(g.colors[4], Color::BLUE);
    }

    #[test]
    fn test_pen_advance_and_spacing() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 0.0), &font).layout_str(&font, "ab c\td", &[]);
        let xs: Vec<f32> = outcome.geometry.vertices.chunks(4).map(|q| q[0].x).collect();

        // advance 10, space 2.5, tab 10
        assert_eq!(xs.len(), 4);
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[1], 10.0);
        assert_relative_eq!(xs[2], 22.5);
        assert_relative_eq!(xs[3], 42.5);
    }

    #[test]
    fn test_newline_moves_down_one_line() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 0.0), &font).layout_str(&font, "a\nb", &[]);
        let g = &outcome.geometry;

        // top-left corners
        assert_relative_eq!(g.vertices[1].y, 4.0);
        assert_relative_eq!(g.vertices[5].y, -16.0);
        assert_relative_eq!(g.vertices[5].x, 0.0);
    }

    #[test]
    fn test_uv_half_texel_inset() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 0.0), &font).layout_str(&font, "B", &[]);
        let uvs = &outcome.geometry.uvs;

        // 'B' sits at u = 4 in a 256x64 sheet, 10x20 px
        assert_relative_eq!(uvs[0].x, 4.5 / 256.0);
        assert_relative_eq!(uvs[2].x, 13.5 / 256.0);
        assert_relative_eq!(uvs[1].y, 1.0 - 0.5 / 64.0);
        assert_relative_eq!(uvs[0].y, 1.0 - 19.5 / 64.0);
    }

    #[test]
    fn test_missing_glyph_is_skipped() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 0.0), &font).layout_str(&font, "a?b", &[]);

        assert!(!outcome.success);
        assert_eq!(outcome.geometry.quad_count(), 2);
        // No advance for the missing glyph
        assert_relative_eq!(outcome.geometry.vertices[4].x, 10.0);
    }

    #[test]
    fn test_wrap_moves_whole_word() {
        let font = mono_font();
        // Box fits 5 glyphs per line
        let outcome = engine(sized(20.0, 50.0), &font).layout_str(&font, "ab cdef", &[]);
        let g = &outcome.geometry;

        assert!(outcome.success);
        assert_eq!(g.quad_count(), 6);
        let lines: Vec<(f32, f32)> = g.vertices.chunks(4).map(|q| (q[1].x, q[1].y)).collect();
        assert_eq!(lines[0], (0.0, 4.0));
        assert_eq!(lines[1], (10.0, 4.0));
        // "cdef" starts the second line rather than splitting after "c"
        assert_eq!(lines[2], (0.0, -16.0));
        assert_eq!(lines[5], (30.0, -16.0));
    }

    #[test]
    fn test_overlong_word_breaks_once_rewound() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 30.0), &font).layout_str(&font, "abcdefg", &[]);
        let g = &outcome.geometry;

        assert_eq!(g.quad_count(), 7);
        let ys: Vec<f32> = g.vertices.chunks(4).map(|q| q[1].y).collect();
        // A leading word breaks in place after "abc". The broken tail starts
        // a new run at 'e', which gets its own move.
        assert_eq!(ys, vec![4.0, 4.0, 4.0, -16.0, -36.0, -36.0, -36.0]);
    }

    #[test]
    fn test_leading_word_keeps_first_line() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 30.0), &font).layout_str(&font, "abcd ef", &[]);
        let g = &outcome.geometry;

        let tops: Vec<(f32, f32)> = g.vertices.chunks(4).map(|q| (q[1].x, q[1].y)).collect();
        assert_eq!(tops[0], (0.0, 4.0));
        assert_eq!(tops[2], (20.0, 4.0));
        // Only the overflow moves down
        assert_eq!(tops[3], (0.0, -16.0));
    }

    #[test]
    fn test_second_word_still_moves_whole() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 30.0), &font).layout_str(&font, "a bc", &[]);
        let tops: Vec<(f32, f32)> =
            outcome.geometry.vertices.chunks(4).map(|q| (q[1].x, q[1].y)).collect();
        assert_eq!(tops, vec![(0.0, 4.0), (0.0, -16.0), (10.0, -16.0)]);
    }

    #[test]
    fn test_non_letters_wrap_in_place() {
        let font = mono_font();
        let outcome = engine(sized(20.0, 30.0), &font).layout_str(&font, "....", &[]);
        let ys: Vec<f32> = outcome.geometry.vertices.chunks(4).map(|q| q[1].y).collect();
        assert_eq!(ys, vec![4.0, 4.0, 4.0, -16.0]);
    }

    #[test]
    fn test_right_align() {
        let font = mono_font();
        let config = TextConfig {
            align: Align::Right,
            ..sized(20.0, 100.0)
        };
        let outcome = engine(config, &font).layout_str(&font, "abc", &[]);
        let bounds = outcome.geometry.bounds().unwrap();
        assert_relative_eq!(bounds.max_x, 100.0);
        assert_relative_eq!(bounds.min_x, 70.0);
    }

    #[test]
    fn test_vertical_bottom_align() {
        let font = mono_font();
        let config = TextConfig {
            height: 100.0,
            vertical_align: VerticalAlign::Bottom,
            ..sized(20.0, 0.0)
        };
        let outcome = engine(config, &font).layout_str(&font, "a\nb", &[]);
        let bounds = outcome.geometry.bounds().unwrap();
        // Ink spans 40 units; shifted down by 60
        assert_relative_eq!(bounds.height(), 40.0);
        assert_relative_eq!(bounds.max_y, -56.0);
    }

    #[test]
    fn test_vertical_middle_align() {
        let font = mono_font();
        let config = TextConfig {
            height: 100.0,
            vertical_align: VerticalAlign::Middle,
            ..sized(20.0, 0.0)
        };
        let outcome = engine(config, &font).layout_str(&font, "a", &[]);
        let bounds = outcome.geometry.bounds().unwrap();
        assert_relative_eq!(bounds.max_y, 4.0 - 40.0);
    }

    #[test]
    fn test_alignment_ignored_without_box() {
        let font = mono_font();
        let config = TextConfig {
            align: Align::Center,
            vertical_align: VerticalAlign::Bottom,
            ..sized(20.0, 0.0)
        };
        let outcome = engine(config, &font).layout_str(&font, "a", &[]);
        assert_relative_eq!(outcome.geometry.vertices[0].x, 0.0);
        assert_relative_eq!(outcome.geometry.vertices[1].y, 4.0);
    }
}
