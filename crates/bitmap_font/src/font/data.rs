//! Font asset decoding
//!
//! A font asset is a little-endian byte stream with no padding:
//!
//! ```text
//! header   i16 font_size, i16 font_ascent, i16 metric_count,
//!          i16 sheet_width, i16 sheet_height
//! buckets  256 x i16
//! metrics  metric_count x 16-byte records
//! trailer  UTF-8 texture name, NUL terminated
//! ```

use std::str::Utf8Error;

use super::GlyphIndex;

/// Number of entries in the bucket index, one per high byte
pub const BUCKET_COUNT: usize = 256;

/// Size of one encoded metric record in bytes
pub const METRIC_RECORD_SIZE: usize = 16;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while decoding a font asset
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// The buffer ended before a required field
    #[error("font data truncated reading {field} at byte {offset}")]
    Truncated {
        /// Field being read when the data ran out
        field: &'static str,
        /// Byte offset of that field
        offset: usize,
    },

    /// The header declares a negative number of metrics
    #[error("font header declares negative metric count {0}")]
    NegativeMetricCount(i16),

    /// The texture name is not valid UTF-8
    #[error("texture name is not valid UTF-8: {0}")]
    InvalidTextureName(#[from] Utf8Error),

    /// More glyphs than the header's signed 16-bit count can describe
    #[error("{0} glyphs exceed the metric table limit")]
    TooManyGlyphs(usize),
}

/// Global font parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontHeader {
    /// Design size the atlas was rasterized at, in pixels
    pub font_size: i16,
    /// Distance from the top of a line to the baseline, in pixels
    pub font_ascent: i16,
    /// Number of records in the metric table
    pub metric_count: i16,
    /// Atlas width in pixels
    pub sheet_width: i16,
    /// Atlas height in pixels
    pub sheet_height: i16,
}

/// Metrics and atlas placement of a single glyph
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metric {
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
    /// High byte of the code unit
    pub first: u8,
    /// Low byte of the code unit
    pub second: u8,
    /// Entries before this one sharing `first`
    pub prev_num: u8,
    /// Entries after this one sharing `first`
    pub next_num: u8,
}

impl Metric {
    /// The UTF-16 code unit this glyph renders
    pub const fn code_unit(&self) -> u16 {
        u16::from_be_bytes([self.first, self.second])
    }
}

/// A decoded font asset
#[derive(Debug, Clone, PartialEq)]
pub struct FontData {
    /// Global font parameters
    pub header: FontHeader,
    /// Approximate metric table offset per high byte
    pub buckets: [i16; BUCKET_COUNT],
    /// Glyph metrics, sorted by (`first`, `second`)
    pub metrics: Vec<Metric>,
    /// Atlas texture name, relative to the font asset's directory
    pub texture_name: String,
}

impl FontData {
    /// Decode a font asset
    ///
    /// Sortedness of the metric table is not checked here; lookups through
    /// [`GlyphIndex`] tolerate malformed tables by reporting glyphs missing.
    pub fn decode(bytes: &[u8]) -> FontResult<Self> {
        let mut reader = ByteReader::new(bytes);

        let header = FontHeader {
            font_size: reader.read_i16("font_size")?,
            font_ascent: reader.read_i16("font_ascent")?,
            metric_count: reader.read_i16("metric_count")?,
            sheet_width: reader.read_i16("sheet_width")?,
            sheet_height: reader.read_i16("sheet_height")?,
        };

        let metric_count = usize::try_from(header.metric_count)
            .map_err(|_| FontError::NegativeMetricCount(header.metric_count))?;

        let mut buckets = [0i16; BUCKET_COUNT];
        for bucket in &mut buckets {
            *bucket = reader.read_i16("bucket index")?;
        }

        let mut metrics = Vec::with_capacity(metric_count);
        for _ in 0..metric_count {
            metrics.push(Metric {
                advance: reader.read_f32("metric advance")?,
                u: reader.read_i16("metric u")?,
                v: reader.read_i16("metric v")?,
                bearing_x: reader.read_i8("metric bearing_x")?,
                bearing_y: reader.read_i8("metric bearing_y")?,
                width: reader.read_u8("metric width")?,
                height: reader.read_u8("metric height")?,
                first: reader.read_u8("metric first")?,
                second: reader.read_u8("metric second")?,
                prev_num: reader.read_u8("metric prev_num")?,
                next_num: reader.read_u8("metric next_num")?,
            });
        }

        let name_bytes = reader.read_until_nul("texture name")?;
        let texture_name = std::str::from_utf8(name_bytes)?.to_owned();

        log::debug!(
            "Decoded font: size {}, {} glyphs, atlas {}x{} '{}'",
            header.font_size,
            metrics.len(),
            header.sheet_width,
            header.sheet_height,
            texture_name
        );

        Ok(Self {
            header,
            buckets,
            metrics,
            texture_name,
        })
    }

    /// Encode back into the packed asset format
    ///
    /// `metric_count` is written from the header as-is, so a header that
    /// disagrees with the table produces an asset that will not decode to
    /// the same data.
    pub fn encode(&self) -> Vec<u8> {
        let capacity = 10
            + BUCKET_COUNT * 2
            + self.metrics.len() * METRIC_RECORD_SIZE
            + self.texture_name.len()
            + 1;
        let mut out = Vec::with_capacity(capacity);

        for field in [
            self.header.font_size,
            self.header.font_ascent,
            self.header.metric_count,
            self.header.sheet_width,
            self.header.sheet_height,
        ] {
            out.extend_from_slice(&field.to_le_bytes());
        }

        for bucket in &self.buckets {
            out.extend_from_slice(&bucket.to_le_bytes());
        }

        for m in &self.metrics {
            out.extend_from_slice(&m.advance.to_le_bytes());
            out.extend_from_slice(&m.u.to_le_bytes());
            out.extend_from_slice(&m.v.to_le_bytes());
            out.extend_from_slice(&m.bearing_x.to_le_bytes());
            out.extend_from_slice(&m.bearing_y.to_le_bytes());
            out.extend_from_slice(&[m.width, m.height, m.first, m.second, m.prev_num, m.next_num]);
        }

        out.extend_from_slice(self.texture_name.as_bytes());
        out.push(0);
        out
    }

    /// Borrow a glyph index over this font's metric table
    pub fn glyph_index(&self) -> GlyphIndex<'_> {
        GlyphIndex::new(&self.buckets, &self.metrics)
    }
}

/// Little-endian cursor over a byte slice
struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn take<const N: usize>(&mut self, field: &'static str) -> FontResult<[u8; N]> {
        let end = self
            .offset
            .checked_add(N)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(FontError::Truncated {
                field,
                offset: self.offset,
            })?;
        let mut chunk = [0u8; N];
        chunk.copy_from_slice(&self.bytes[self.offset..end]);
        self.offset = end;
        Ok(chunk)
    }

    fn read_u8(&mut self, field: &'static str) -> FontResult<u8> {
        Ok(u8::from_le_bytes(self.take(field)?))
    }

    fn read_i8(&mut self, field: &'static str) -> FontResult<i8> {
        Ok(i8::from_le_bytes(self.take(field)?))
    }

    fn read_i16(&mut self, field: &'static str) -> FontResult<i16> {
        Ok(i16::from_le_bytes(self.take(field)?))
    }

    fn read_f32(&mut self, field: &'static str) -> FontResult<f32> {
        Ok(f32::from_le_bytes(self.take(field)?))
    }

    fn read_until_nul(&mut self, field: &'static str) -> FontResult<&'a [u8]> {
        let rest = &self.bytes[self.offset.min(self.bytes.len())..];
        let len = rest.iter().position(|&b| b == 0).ok_or(FontError::Truncated {
            field,
            offset: self.offset,
        })?;
        self.offset += len + 1;
        Ok(&rest[..len])
    }
}
