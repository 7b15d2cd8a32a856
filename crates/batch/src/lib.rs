//! File-level font subsetting on top of `fontcut-bridge`.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use fontcut_batch::{subset_dir, subset_file};
//! use fontcut_bridge::{Capacity, Subsetter};
//!
//! let subsetter = Subsetter::new().with_text("Hello, world!").capacity(Capacity::Unbounded);
//! subset_file(&subsetter, Path::new("in.ttf"), Path::new("out/in.ttf")).unwrap();
//! subset_dir(&subsetter, Path::new("fonts"), "*.ttf", Path::new("out"))
//!     .unwrap()
//!     .ok_or_bail("Subset")
//!     .unwrap();
//! ```

pub mod io;
pub mod parallel;
pub mod subset;

pub use parallel::BatchResult;
pub use subset::{SubsetReport, subset_dir, subset_file, subset_path};
