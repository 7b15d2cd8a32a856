//! Error types for font subsetting.

use std::result;

/// Errors that can occur while subsetting a font.
///
/// Each variant names the step of the subsetting sequence that failed.
/// [`crate::compat`] collapses all of them into a zero length.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("source font is empty")]
    EmptySource,

    #[error("failed to wrap source font into a blob")]
    Wrap,

    #[error("failed to parse font face at index {index}")]
    Parse { index: u32 },

    #[error("failed to create subset input")]
    Input,

    #[error("failed to subset font")]
    Subset,

    #[error("failed to serialize subset font")]
    Serialize,

    #[error("subset font is empty")]
    EmptyOutput,

    #[error("subset font needs {required} bytes but capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },
}

pub type Result<T> = result::Result<T, Error>;
