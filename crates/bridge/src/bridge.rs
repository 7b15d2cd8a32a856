//! The subsetting call sequence.

use log::debug;

use crate::{Engine, Error, Result, SubsetRequest};

/// Subsets `source` with `engine` and hands the serialized result to `sink`.
///
/// Handles are created in the order blob, face, input, output, bytes. Each
/// is a local that drops at scope exit, so every early return releases
/// exactly what was created so far, in reverse order. `sink` only runs for
/// a non-empty result of at most `capacity` bytes.
pub fn run<E, R>(
    engine: &E,
    source: &[u8],
    request: &SubsetRequest,
    capacity: usize,
    sink: impl FnOnce(&[u8]) -> R,
) -> Result<R>
where
    E: Engine,
{
    if source.is_empty() {
        return Err(Error::EmptySource);
    }

    let blob = engine.wrap(source)?;
    let face = engine.parse(blob, request.face_index())?;
    let input = engine.input(request)?;
    let output = engine.subset(&face, &input)?;
    let bytes = engine.serialize(&output)?;

    let required = bytes.len();
    if required == 0 {
        return Err(Error::EmptyOutput);
    }
    if required > capacity {
        return Err(Error::CapacityExceeded { required, capacity });
    }

    debug!(
        "Subset {} code points: {} -> {required} bytes",
        request.codepoints().len(),
        source.len()
    );
    Ok(sink(&bytes))
}
