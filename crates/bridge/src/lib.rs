//! Font subsetting bridge to HarfBuzz's hb-subset.
//!
//! This crate forwards a subsetting request (a font binary plus a set of
//! Unicode code points) to HarfBuzz and returns the subset font binary. It
//! operates purely on byte slices with no file I/O dependencies. Glyph IDs
//! of the source font are retained by default.
//!
//! # Example
//!
//! ```no_run
//! use fontcut_bridge::{Capacity, Subsetter};
//!
//! let font_data: &[u8] = &[];
//!
//! // Owned output, bounded by the source length
//! let subset = Subsetter::new().with_text("Hello").subset(font_data);
//!
//! // Caller-provided output buffer
//! let mut out = vec![0u8; 64 * 1024];
//! let written = Subsetter::new()
//!     .with_unicode_ranges([(0x3041, 0x3096)])
//!     .capacity(Capacity::Unbounded)
//!     .subset_into(font_data, &mut out);
//! ```

pub mod bridge;
mod capacity;
pub mod compat;
pub mod config;
mod engine;
mod error;
mod harfbuzz;
mod subsetter;

pub use capacity::Capacity;
pub use engine::Engine;
pub use error::{Error, Result};
pub use harfbuzz::HarfBuzz;
pub use subsetter::{SubsetRequest, Subsetter};
