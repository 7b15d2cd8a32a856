//! Default settings for subsetting requests.

/// Face index used when a request does not name one.
///
/// Index 0 is the only face of a plain font file and the first face of a
/// collection.
pub const DEFAULT_FACE_INDEX: u32 = 0;

/// Whether subset fonts keep the glyph IDs of the source font.
///
/// Consumers of the subset font address glyphs by their original IDs, so
/// renumbering is opt-in.
pub const DEFAULT_RETAIN_GLYPH_IDS: bool = true;

/// Highest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = char::MAX as u32;
