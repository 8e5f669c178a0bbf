use alloc::vec::Vec;

use crate::key::KeyCacheKey;
use crate::{HeightCache, ItemFields};

/// One row of an [`OffsetTable`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightEntry {
    pub height: f64,
    /// Offset of the item's bottom edge, i.e. the sum of all heights up to and including it.
    pub accumulator: f64,
}

/// Addresses a row of an [`OffsetTable`], including the synthetic row before the first item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    BeforeFirst,
    Item(usize),
}

/// Resolves an item's height: explicit height, then measured height, then `fallback`.
///
/// Zero (and NaN) count as "unset" and fall through to the next source, so a legitimately
/// zero-height item is indistinguishable from an unmeasured one.
pub fn resolve_height(explicit: Option<f64>, measured: Option<f64>, fallback: f64) -> f64 {
    is_set(explicit).or_else(|| is_set(measured)).unwrap_or(fallback)
}

fn is_set(height: Option<f64>) -> Option<f64> {
    height.filter(|h| *h != 0.0 && !h.is_nan())
}

/// Prefix sums over resolved item heights.
///
/// Invariant: `accumulator[i] == accumulator[i - 1] + height[i]`, with the row before the first
/// item at offset 0.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetTable {
    entries: Vec<HeightEntry>,
}

impl OffsetTable {
    /// Builds the table for `items`, resolving each height through [`resolve_height`].
    pub fn build<T, K: KeyCacheKey>(
        items: &[T],
        fields: &ItemFields<T, K>,
        cache: &HeightCache<K>,
        min_item_height: f64,
    ) -> Self {
        Self::from_heights(items.iter().map(|item| {
            let explicit = fields.height_of(item);
            // The cache is only consulted when the explicit height does not settle it.
            if is_set(explicit).is_some() {
                return resolve_height(explicit, None, min_item_height);
            }
            let measured = cache.get(&fields.key_of(item));
            resolve_height(None, measured, min_item_height)
        }))
    }

    /// Builds the table from already resolved heights.
    pub fn from_heights(heights: impl IntoIterator<Item = f64>) -> Self {
        let heights = heights.into_iter();
        let mut entries = Vec::with_capacity(heights.size_hint().0);
        let mut accumulator = 0.0;
        for height in heights {
            accumulator += height;
            entries.push(HeightEntry {
                height,
                accumulator,
            });
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HeightEntry] {
        &self.entries
    }

    pub fn entry(&self, slot: Slot) -> Option<HeightEntry> {
        match slot {
            Slot::BeforeFirst => Some(HeightEntry::default()),
            Slot::Item(index) => self.entries.get(index).copied(),
        }
    }

    pub fn height(&self, index: usize) -> Option<f64> {
        self.entries.get(index).map(|e| e.height)
    }

    pub fn total_height(&self) -> f64 {
        self.entries.last().map_or(0.0, |e| e.accumulator)
    }

    /// Offset at which item `index` begins.
    ///
    /// Indexes past the end saturate to the total height.
    pub fn accumulator(&self, index: usize) -> f64 {
        if index == 0 {
            return 0.0;
        }
        self.entries
            .get(index - 1)
            .map_or_else(|| self.total_height(), |e| e.accumulator)
    }

    /// Index of the item covering `offset`, clamped to the last item.
    ///
    /// Returns `None` for an empty table.
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let consumed = self.entries.partition_point(|e| e.accumulator <= offset);
        Some(consumed.min(self.entries.len() - 1))
    }
}

/// Everything an [`OffsetTable`] is derived from.
///
/// `items_version` must change whenever the caller mutates `items` in place; a length change is
/// detected on its own.
#[derive(Debug)]
pub struct HeightInputs<'a, T, K> {
    pub items: &'a [T],
    pub items_version: u64,
    pub fields: &'a ItemFields<T, K>,
    pub cache: &'a HeightCache<K>,
    pub item_height: Option<f64>,
    pub min_item_height: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Stamp {
    items_version: u64,
    items_len: usize,
    cache_version: u64,
    item_height: Option<u64>,
    min_item_height: Option<u64>,
}

impl Stamp {
    fn of<T, K>(inputs: &HeightInputs<'_, T, K>) -> Self {
        Self {
            items_version: inputs.items_version,
            items_len: inputs.items.len(),
            cache_version: inputs.cache.version(),
            item_height: inputs.item_height.map(f64::to_bits),
            min_item_height: inputs.min_item_height.map(f64::to_bits),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Layout {
    Fixed { height: f64, count: usize },
    Variable(OffsetTable),
}

impl Default for Layout {
    fn default() -> Self {
        Self::Variable(OffsetTable::default())
    }
}

/// Memoized item geometry: either a uniform height or an [`OffsetTable`].
///
/// Call [`Self::refresh`] with the current inputs whenever they may have changed; the table is
/// rebuilt in full only when one of them actually did.
#[derive(Clone, Debug, Default)]
pub struct HeightIndex {
    layout: Layout,
    stamp: Option<Stamp>,
}

impl HeightIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the geometry if any input changed since the last refresh.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn refresh<T, K: KeyCacheKey>(&mut self, inputs: HeightInputs<'_, T, K>) -> bool {
        let stamp = Stamp::of(&inputs);
        if self.stamp == Some(stamp) {
            return false;
        }

        self.layout = match inputs.item_height {
            Some(height) => Layout::Fixed {
                height,
                count: inputs.items.len(),
            },
            None => Layout::Variable(OffsetTable::build(
                inputs.items,
                inputs.fields,
                inputs.cache,
                inputs.min_item_height.unwrap_or(0.0),
            )),
        };
        self.stamp = Some(stamp);
        sdebug!(
            count = inputs.items.len(),
            fixed = inputs.item_height.is_some(),
            cache_version = inputs.cache.version(),
            "HeightIndex::refresh"
        );
        true
    }

    /// Forces the next [`Self::refresh`] to rebuild.
    pub fn invalidate(&mut self) {
        self.stamp = None;
    }

    pub fn fixed_height(&self) -> Option<f64> {
        match self.layout {
            Layout::Fixed { height, .. } => Some(height),
            Layout::Variable(_) => None,
        }
    }

    /// The offset table, absent in fixed height mode.
    pub fn table(&self) -> Option<&OffsetTable> {
        match &self.layout {
            Layout::Fixed { .. } => None,
            Layout::Variable(table) => Some(table),
        }
    }

    pub fn len(&self) -> usize {
        match &self.layout {
            Layout::Fixed { count, .. } => *count,
            Layout::Variable(table) => table.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset at which item `index` begins.
    ///
    /// In fixed height mode this is `index * height` without clamping; the scroll container
    /// clamps out-of-range writes itself.
    pub fn accumulator(&self, index: usize) -> f64 {
        match &self.layout {
            Layout::Fixed { height, .. } => index as f64 * height,
            Layout::Variable(table) => table.accumulator(index),
        }
    }

    pub fn height(&self, index: usize) -> Option<f64> {
        match &self.layout {
            Layout::Fixed { height, count } => (index < *count).then_some(*height),
            Layout::Variable(table) => table.height(index),
        }
    }

    pub fn total_height(&self) -> f64 {
        match &self.layout {
            Layout::Fixed { height, count } => *count as f64 * height,
            Layout::Variable(table) => table.total_height(),
        }
    }

    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        match &self.layout {
            Layout::Fixed { height, count } => {
                if *count == 0 {
                    return None;
                }
                if *height <= 0.0 || offset <= 0.0 {
                    return Some(0);
                }
                let index = (offset / height) as usize;
                Some(index.min(count - 1))
            }
            Layout::Variable(table) => table.index_at_offset(offset),
        }
    }
}
