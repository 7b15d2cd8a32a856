//! Parallel file processing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{info, warn};
use rayon::prelude::*;

/// Outcome of a parallel batch operation.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub succeeded: usize,
    pub failed: Vec<PathBuf>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn ok_or_bail(&self, operation: &str) -> Result<()> {
        if !self.all_succeeded() {
            bail!(
                "{operation} failed: {} succeeded, {} failed",
                self.succeeded,
                self.failed.len()
            );
        }
        Ok(())
    }
}

/// Run an operation on multiple files in parallel.
///
/// Failures are logged and tallied; they never stop the other files.
pub fn run_parallel<T, F>(label: &str, items: &[T], op: F) -> BatchResult
where
    T: AsRef<Path> + Sync,
    F: Fn(&Path) -> Result<()> + Sync,
{
    let results: Vec<_> = items
        .par_iter()
        .map(|item| {
            let path = item.as_ref();
            let result = op(path).with_context(|| format!("Failed to process {}", path.display()));
            (path, result)
        })
        .collect();

    let mut batch = BatchResult::default();
    for (path, result) in results {
        match result {
            Ok(()) => batch.succeeded += 1,
            Err(e) => {
                warn!("{e:?}");
                batch.failed.push(path.to_path_buf());
            }
        }
    }

    info!("{label}: {} succeeded, {} failed", batch.succeeded, batch.failed.len());
    batch
}
