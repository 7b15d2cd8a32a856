//! Upper bound on the size of a subset font.

/// The most bytes a subsetting call may emit.
///
/// A result larger than the capacity is rejected with
/// [`Error::CapacityExceeded`](crate::Error::CapacityExceeded); it is never
/// truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Capacity {
    /// No bound beyond the output buffer, if any.
    Unbounded,
    /// The length of the source font.
    #[default]
    SourceLength,
    /// A fixed number of bytes.
    Bytes(usize),
}

impl Capacity {
    /// Resolves the bound for a source font of `source_len` bytes.
    pub fn resolve(self, source_len: usize) -> usize {
        match self {
            Capacity::Unbounded => usize::MAX,
            Capacity::SourceLength => source_len,
            Capacity::Bytes(n) => n,
        }
    }
}
