//! Length-only subsetting for callers of the original call convention.
//!
//! Every failure collapses into a zero length. Use [`Subsetter`] directly to
//! learn which step failed.

use std::slice;

use log::debug;

use crate::{Capacity, Subsetter};

/// Subsets `source` to `codepoints` into `out` and returns the bytes written.
///
/// Glyph IDs are retained. The result must fit in `out`; 0 means the
/// subset failed, was empty, or did not fit, and `out` is left untouched.
pub fn subset(source: &[u8], codepoints: &[u32], out: &mut [u8]) -> usize {
    Subsetter::new()
        .with_codepoints(codepoints.iter().copied())
        .capacity(Capacity::Unbounded)
        .subset_into(source, out)
        .unwrap_or_else(|e| {
            debug!("Subsetting failed: {e}");
            0
        })
}

/// C entry point for [`subset`].
///
/// Returns the number of bytes written to `out`, at most `out_capacity`, or
/// 0 on any failure, including null pointers paired with non-zero lengths.
///
/// # Safety
///
/// `src` must be valid for reads of `src_len` bytes, `chars` for reads of
/// `num_chars` values, and `out` for writes of `out_capacity` bytes. `out`
/// must not overlap `src` or `chars`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fontcut_subset(
    src: *const u8,
    src_len: u32,
    chars: *const u32,
    num_chars: u32,
    out: *mut u8,
    out_capacity: u32,
) -> u32 {
    if src.is_null() || out.is_null() || (chars.is_null() && num_chars > 0) {
        return 0;
    }

    // SAFETY: the caller guarantees the pointers are valid for these lengths.
    let (source, codepoints, out) = unsafe {
        let codepoints: &[u32] =
            if num_chars == 0 { &[] } else { slice::from_raw_parts(chars, num_chars as usize) };
        (
            slice::from_raw_parts(src, src_len as usize),
            codepoints,
            slice::from_raw_parts_mut(out, out_capacity as usize),
        )
    };

    // `out` holds at most `u32::MAX` bytes, so the length fits.
    subset(source, codepoints, out) as u32
}
