//! Bitmap font assets
//!
//! Decoding of packed font assets, the glyph metric index, and a builder
//! used by asset tooling to produce well-formed metric tables.

pub mod builder;
pub mod data;
pub mod glyph_index;

pub use builder::{FontDataBuilder, GlyphSpec};
pub use data::{
    FontData, FontError, FontHeader, FontResult, Metric, BUCKET_COUNT, METRIC_RECORD_SIZE,
};
pub use glyph_index::GlyphIndex;
