//! Glyph metric lookup
//!
//! The metric table is sorted by (`first`, `second`) and is small, so instead
//! of a hash map the asset carries a 256-entry bucket index: for a high byte
//! `first`, `buckets[first] + second` estimates where the glyph sits in the
//! table. When glyph runs are dense the estimate hits directly; otherwise a
//! binary search over a narrow range corrects it.

use std::ops::RangeInclusive;

use super::data::{Metric, BUCKET_COUNT};

/// Borrowed view resolving code units to glyph metrics
#[derive(Debug, Clone, Copy)]
pub struct GlyphIndex<'a> {
    buckets: &'a [i16; BUCKET_COUNT],
    metrics: &'a [Metric],
}

impl<'a> GlyphIndex<'a> {
    /// Create an index over a bucket table and a sorted metric table
    pub const fn new(buckets: &'a [i16; BUCKET_COUNT], metrics: &'a [Metric]) -> Self {
        Self { buckets, metrics }
    }

    /// Number of glyphs in the table
    pub const fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the table has no glyphs
    pub const fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Find the metric for a code unit
    pub fn lookup(&self, code_unit: u16) -> Option<&'a Metric> {
        let [first, second] = code_unit.to_be_bytes();
        let last = self.metrics.len().checked_sub(1)?;

        let bucket = i32::from(self.buckets[usize::from(first)]);
        let estimate = bucket + i32::from(second);
        if estimate < 0 {
            return None;
        }
        let mut offset = usize::try_from(estimate).ok()?.min(last);

        if self.metrics[offset].first != first {
            let start = usize::try_from(bucket.max(0)).ok()?;
            offset = self.search_by_key(start..=offset, first, |m| m.first)?;
        }

        let found = &self.metrics[offset];
        if found.second != second {
            let run = offset.saturating_sub(usize::from(found.prev_num))
                ..=offset + usize::from(found.next_num);
            offset = self.search_by_key(run, second, |m| m.second)?;
        }

        let metric = &self.metrics[offset];
        (metric.first == first && metric.second == second).then_some(metric)
    }

    /// Find the metric for a code unit by scanning the whole table
    ///
    /// Reference behavior for [`lookup`](Self::lookup); linear in table size.
    pub fn scan(&self, code_unit: u16) -> Option<&'a Metric> {
        self.metrics.iter().find(|m| m.code_unit() == code_unit)
    }

    /// Binary search `range` for an entry whose `key` equals `target`
    ///
    /// The range is clamped to the table; an empty range finds nothing.
    fn search_by_key(
        &self,
        range: RangeInclusive<usize>,
        target: u8,
        key: impl Fn(&Metric) -> u8,
    ) -> Option<usize> {
        let (start, end) = range.into_inner();
        let end = end.min(self.metrics.len().checked_sub(1)?);
        if start > end {
            return None;
        }

        self.metrics[start..=end]
            .binary_search_by_key(&target, key)
            .ok()
            .map(|i| start + i)
    }
}
