//! Subsetting requests and the builder-style entry point.

use std::collections::BTreeSet;

use log::debug;

use crate::{
    Capacity, Engine, HarfBuzz, Result, bridge,
    config::{DEFAULT_FACE_INDEX, DEFAULT_RETAIN_GLYPH_IDS, MAX_CODEPOINT},
};

/// What to keep in a subset font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetRequest {
    codepoints: BTreeSet<u32>,
    face_index: u32,
    retain_glyph_ids: bool,
}

impl Default for SubsetRequest {
    fn default() -> Self {
        Self {
            codepoints: BTreeSet::new(),
            face_index: DEFAULT_FACE_INDEX,
            retain_glyph_ids: DEFAULT_RETAIN_GLYPH_IDS,
        }
    }
}

impl SubsetRequest {
    /// The requested code points, deduplicated and sorted.
    pub fn codepoints(&self) -> &BTreeSet<u32> {
        &self.codepoints
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn retains_glyph_ids(&self) -> bool {
        self.retain_glyph_ids
    }

    /// The requested code points that are Unicode scalar values.
    ///
    /// Surrogates and values above U+10FFFF cannot be mapped by a font's
    /// cmap and are skipped.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.codepoints.iter().filter_map(|&cp| {
            let c = char::from_u32(cp);
            if c.is_none() {
                debug!("Skipping invalid code point U+{cp:04X}");
            }
            c
        })
    }
}

/// Font subsetter with builder pattern.
///
/// A `Subsetter` only holds configuration. Each call to [`Subsetter::subset`]
/// or [`Subsetter::subset_into`] creates and releases its own engine objects,
/// so one subsetter can serve any number of calls, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Subsetter<E = HarfBuzz> {
    engine: E,
    request: SubsetRequest,
    capacity: Capacity,
}

impl Subsetter {
    /// Creates a subsetter using HarfBuzz with an empty code point set.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Engine> Subsetter<E> {
    /// Creates a subsetter driving a custom engine.
    pub fn with_engine(engine: E) -> Self {
        Self { engine, request: SubsetRequest::default(), capacity: Capacity::default() }
    }

    /// Adds code points to keep. Duplicates are ignored.
    pub fn with_codepoints(mut self, codepoints: impl IntoIterator<Item = u32>) -> Self {
        self.request.codepoints.extend(codepoints);
        self
    }

    /// Adds characters to keep.
    pub fn with_chars(self, chars: impl IntoIterator<Item = char>) -> Self {
        self.with_codepoints(chars.into_iter().map(u32::from))
    }

    /// Adds every character of `text`.
    pub fn with_text(self, text: &str) -> Self {
        self.with_chars(text.chars())
    }

    /// Adds Unicode ranges to keep.
    ///
    /// Each range is a tuple of (start, end) code points, inclusive. Ends
    /// beyond U+10FFFF are clamped.
    pub fn with_unicode_ranges(mut self, ranges: impl IntoIterator<Item = (u32, u32)>) -> Self {
        for (start, end) in ranges {
            self.request.codepoints.extend(start..=end.min(MAX_CODEPOINT));
        }
        self
    }

    /// Selects the face to subset within a font collection.
    pub fn face_index(mut self, index: u32) -> Self {
        self.request.face_index = index;
        self
    }

    /// Sets whether the subset font keeps the source font's glyph IDs.
    ///
    /// On by default. When off, the engine renumbers the kept glyphs
    /// compactly.
    pub fn retain_glyph_ids(mut self, retain: bool) -> Self {
        self.request.retain_glyph_ids = retain;
        self
    }

    /// Sets the upper bound on the subset font's size.
    pub fn capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn request(&self) -> &SubsetRequest {
        &self.request
    }

    /// Subsets the font data and returns the result.
    ///
    /// # Arguments
    ///
    /// * `data` - The raw font file data
    ///
    /// # Returns
    ///
    /// The subset font data, or the step that failed.
    pub fn subset(&self, data: &[u8]) -> Result<Vec<u8>> {
        let capacity = self.capacity.resolve(data.len());
        bridge::run(&self.engine, data, &self.request, capacity, <[u8]>::to_vec)
    }

    /// Subsets the font data into `out` and returns the number of bytes written.
    ///
    /// The result must fit both `out` and the configured capacity. On error
    /// `out` is left untouched.
    pub fn subset_into(&self, data: &[u8], out: &mut [u8]) -> Result<usize> {
        let capacity = self.capacity.resolve(data.len()).min(out.len());
        bridge::run(&self.engine, data, &self.request, capacity, |bytes| {
            out[..bytes.len()].copy_from_slice(bytes);
            bytes.len()
        })
    }
}
