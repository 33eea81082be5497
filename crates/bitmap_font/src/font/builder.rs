//! Font data builder for asset tooling
//!
//! Produces a [`FontData`] whose metric table satisfies the invariants the
//! glyph index relies on: sorted by (`first`, `second`), unique code units,
//! consistent `prev_num`/`next_num` run counts, and bucket estimates that
//! hit directly for dense runs.

use std::collections::BTreeMap;

use super::data::{FontData, FontError, FontHeader, FontResult, Metric, BUCKET_COUNT};

/// Placement and metrics of one glyph, before indexing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphSpec {
    /// Horizontal advance relative to the em size
    pub advance: f32,
    /// Atlas x of the glyph box, in pixels
    pub u: i16,
    /// Atlas y of the glyph box, in pixels
    pub v: i16,
    /// Horizontal offset from the pen position
    pub bearing_x: i8,
    /// Vertical offset from the baseline to the top of the glyph box
    pub bearing_y: i8,
    /// Glyph box width in pixels
    pub width: u8,
    /// Glyph box height in pixels
    pub height: u8,
}

/// Builder assembling an indexed font from individual glyphs
///
/// # Example
///
/// ```
/// use bitmap_font::font::{FontDataBuilder, GlyphSpec};
///
/// let font = FontDataBuilder::new(32, 28, 64, 64, "atlas.png")
///     .glyph(
///         'A',
///         GlyphSpec {
///             advance: 0.6,
///             width: 20,
///             height: 24,
///             bearing_y: 24,
///             ..Default::default()
///         },
///     )
///     .build()
///     .unwrap();
/// assert!(font.glyph_index().lookup(u16::from(b'A')).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct FontDataBuilder {
    font_size: i16,
    font_ascent: i16,
    sheet_width: i16,
    sheet_height: i16,
    texture_name: String,
    glyphs: BTreeMap<u16, GlyphSpec>,
}

impl FontDataBuilder {
    /// Start a font with the given design size, ascent and atlas dimensions
    pub fn new(
        font_size: i16,
        font_ascent: i16,
        sheet_width: i16,
        sheet_height: i16,
        texture_name: impl Into<String>,
    ) -> Self {
        Self {
            font_size,
            font_ascent,
            sheet_width,
            sheet_height,
            texture_name: texture_name.into(),
            glyphs: BTreeMap::new(),
        }
    }

    /// Add a glyph for a character in the Basic Multilingual Plane
    ///
    /// Characters outside the BMP need two code units and are skipped.
    #[must_use]
    pub fn glyph(self, ch: char, glyph: GlyphSpec) -> Self {
        let mut units = [0u16; 2];
        match ch.encode_utf16(&mut units) {
            [unit] => {
                let unit = *unit;
                self.code_unit(unit, glyph)
            }
            _ => {
                log::warn!("Skipping glyph {ch:?}: not representable as one code unit");
                self
            }
        }
    }

    /// Add a glyph for a raw code unit, replacing any earlier one
    #[must_use]
    pub fn code_unit(mut self, code_unit: u16, glyph: GlyphSpec) -> Self {
        self.glyphs.insert(code_unit, glyph);
        self
    }

    /// Number of glyphs added so far
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether no glyphs have been added
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Sort, index and assemble the font
    pub fn build(self) -> FontResult<FontData> {
        let metric_count = i16::try_from(self.glyphs.len())
            .map_err(|_| FontError::TooManyGlyphs(self.glyphs.len()))?;

        let mut metrics: Vec<Metric> = self
            .glyphs
            .iter()
            .map(|(&code_unit, glyph)| {
                let [first, second] = code_unit.to_be_bytes();
                Metric {
                    advance: glyph.advance,
                    u: glyph.u,
                    v: glyph.v,
                    bearing_x: glyph.bearing_x,
                    bearing_y: glyph.bearing_y,
                    width: glyph.width,
                    height: glyph.height,
                    first,
                    second,
                    prev_num: 0,
                    next_num: 0,
                }
            })
            .collect();

        let mut buckets = [0i16; BUCKET_COUNT];
        let mut run_start = 0usize;
        for first in 0..BUCKET_COUNT {
            let run_len = metrics[run_start..]
                .iter()
                .take_while(|m| usize::from(m.first) == first)
                .count();

            // Absent high bytes point at their insertion position; the
            // lookup then misses on `first` and reports not-found.
            buckets[first] = match metrics.get(run_start) {
                Some(head) if run_len > 0 => run_start as i16 - i16::from(head.second),
                _ => run_start as i16,
            };

            // A run holds at most 256 entries, so both counts fit in a byte.
            for (i, metric) in metrics[run_start..run_start + run_len].iter_mut().enumerate() {
                metric.prev_num = i as u8;
                metric.next_num = (run_len - 1 - i) as u8;
            }
            run_start += run_len;
        }

        Ok(FontData {
            header: FontHeader {
                font_size: self.font_size,
                font_ascent: self.font_ascent,
                metric_count,
                sheet_width: self.sheet_width,
                sheet_height: self.sheet_height,
            },
            buckets,
            metrics,
            texture_name: self.texture_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(advance: f32) -> GlyphSpec {
        GlyphSpec {
            advance,
            width: 10,
            height: 12,
            ..GlyphSpec::default()
        }
    }

    #[test]
    fn test_sorted_with_run_counts() {
        let font = FontDataBuilder::new(16, 14, 128, 128, "atlas")
            .glyph('あ', glyph(1.0))
            .glyph('b', glyph(0.5))
            .glyph('a', glyph(0.5))
            .glyph('い', glyph(1.0))
            .glyph('c', glyph(0.5))
            .build()
            .unwrap();

        let units: Vec<u16> = font.metrics.iter().map(Metric::code_unit).collect();
        assert_eq!(units, vec![0x61, 0x62, 0x63, 0x3042, 0x3044]);

        let runs: Vec<(u8, u8)> = font.metrics.iter().map(|m| (m.prev_num, m.next_num)).collect();
        assert_eq!(runs, vec![(0, 2), (1, 1), (2, 0), (0, 1), (1, 0)]);

        assert_eq!(font.header.metric_count, 5);
        assert_eq!(font.buckets[0x00], -0x61);
        assert_eq!(font.buckets[0x30], 3 - 0x42);
    }

    #[test]
    fn test_duplicate_code_unit_replaces() {
        let font = FontDataBuilder::new(16, 14, 64, 64, "atlas")
            .glyph('x', glyph(0.25))
            .glyph('x', glyph(0.75))
            .build()
            .unwrap();
        assert_eq!(font.metrics.len(), 1);
        assert_eq!(font.metrics[0].advance, 0.75);
    }

    #[test]
    fn test_astral_character_skipped() {
        let builder = FontDataBuilder::new(16, 14, 64, 64, "atlas").glyph('😀', glyph(1.0));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_full_run_of_256() {
        let mut builder = FontDataBuilder::new(16, 14, 64, 64, "atlas");
        for second in 0..=255u16 {
            builder = builder.code_unit(0x4E00 | second, glyph(1.0));
        }
        let font = builder.build().unwrap();
        assert_eq!(font.metrics[0].next_num, 255);
        assert_eq!(font.metrics[255].prev_num, 255);

        let index = font.glyph_index();
        for second in 0..=255u16 {
            assert!(index.lookup(0x4E00 | second).is_some());
        }
    }
}
