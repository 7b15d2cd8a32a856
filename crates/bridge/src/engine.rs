//! The subsetting capability the bridge drives.

use std::ops::Deref;

use crate::{Result, SubsetRequest};

/// A font subsetting backend, split into the steps of one subsetting call.
///
/// Every associated type is a handle owning one engine object. Dropping a
/// handle releases its object, so implementations must release in `Drop`
/// and nowhere else. [`bridge::run`](crate::bridge::run) creates the handles
/// in declaration order and drops them in reverse on every exit path.
pub trait Engine {
    /// Read-only view of the source bytes.
    type Blob<'a>;
    /// A parsed face borrowing the source bytes.
    type Face<'a>;
    /// Subset configuration: flags and the Unicode set.
    type Input;
    /// The subset face.
    type Output;
    /// Serialized bytes of the subset face, borrowing it.
    type Bytes<'o>: Deref<Target = [u8]>
    where
        Self: 'o,
        Self::Output: 'o;

    /// Wraps `data` without copying it.
    fn wrap<'a>(&self, data: &'a [u8]) -> Result<Self::Blob<'a>>;

    /// Parses the face at `index`, taking ownership of the blob.
    fn parse<'a>(&self, blob: Self::Blob<'a>, index: u32) -> Result<Self::Face<'a>>;

    /// Builds the subset input for `request`.
    fn input(&self, request: &SubsetRequest) -> Result<Self::Input>;

    /// Runs the subset.
    fn subset(&self, face: &Self::Face<'_>, input: &Self::Input) -> Result<Self::Output>;

    /// Serializes the subset face.
    fn serialize<'o>(&self, output: &'o Self::Output) -> Result<Self::Bytes<'o>>;
}
