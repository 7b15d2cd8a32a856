//! Subsetting font files.

use std::path::Path;

use anyhow::{Context, Result};
use fontcut_bridge::{Engine, Subsetter};
use log::info;

use crate::{
    io::{FontFile, glob_fonts},
    parallel::{BatchResult, run_parallel},
};

/// Sizes of a font before and after subsetting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetReport {
    pub input_len: usize,
    pub output_len: usize,
}

impl SubsetReport {
    /// Size reduction in percent.
    pub fn reduction(&self) -> f64 {
        if self.input_len == 0 {
            return 0.0;
        }
        (1.0 - self.output_len as f64 / self.input_len as f64) * 100.0
    }
}

/// Read a font from `path` and subset it.
pub fn subset_path<E: Engine>(subsetter: &Subsetter<E>, path: &Path) -> Result<Vec<u8>> {
    let data = FontFile::new(path).read()?;
    subsetter.subset(&data).with_context(|| format!("Failed to subset {}", path.display()))
}

/// Subset a font file to an output path using the given subsetter.
pub fn subset_file<E: Engine>(
    subsetter: &Subsetter<E>,
    input: &Path,
    output: &Path,
) -> Result<SubsetReport> {
    let data = FontFile::new(input).read()?;
    let subset_data =
        subsetter.subset(&data).with_context(|| format!("Failed to subset {}", input.display()))?;
    FontFile::new(output).write(&subset_data)?;

    let report = SubsetReport { input_len: data.len(), output_len: subset_data.len() };
    info!(
        "Subset {} -> {} ({} -> {} bytes, {:.1}% reduction)",
        input.file_name().unwrap_or_default().to_string_lossy(),
        output.file_name().unwrap_or_default().to_string_lossy(),
        report.input_len,
        report.output_len,
        report.reduction()
    );

    Ok(report)
}

/// Subset every font in `input_dir` matching `pattern` into `output_dir`.
///
/// Output files keep their input file names. Files are processed in
/// parallel and a failed file does not stop the others.
pub fn subset_dir<E>(
    subsetter: &Subsetter<E>,
    input_dir: &Path,
    pattern: &str,
    output_dir: &Path,
) -> Result<BatchResult>
where
    E: Engine + Sync,
{
    let fonts = glob_fonts(input_dir, pattern)?;
    info!("Found {} fonts in {}", fonts.len(), input_dir.display());

    Ok(run_parallel("Subset", &fonts, |path| {
        let name = path.file_name().context("Font path has no file name")?;
        subset_file(subsetter, path, &output_dir.join(name)).map(|_| ())
    }))
}
