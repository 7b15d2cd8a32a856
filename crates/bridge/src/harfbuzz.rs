//! [`Engine`] backed by HarfBuzz through `hb-subset`.

use hb_subset::{Blob, FontFace, SubsetInput};
use log::debug;
use read_fonts::FontRef;

use crate::{Engine, Error, Result, SubsetRequest};

/// The HarfBuzz subsetting engine.
///
/// Every handle it produces is an `hb-subset` wrapper whose `Drop` releases
/// the underlying HarfBuzz object.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarfBuzz;

impl Engine for HarfBuzz {
    type Blob<'a> = Blob<'a>;
    type Face<'a> = FontFace<'a>;
    type Input = SubsetInput;
    type Output = FontFace<'static>;
    type Bytes<'o> = Blob<'o>;

    fn wrap<'a>(&self, data: &'a [u8]) -> Result<Blob<'a>> {
        Blob::from_bytes(data).map_err(|_| Error::Wrap)
    }

    fn parse<'a>(&self, blob: Blob<'a>, index: u32) -> Result<FontFace<'a>> {
        // HarfBuzz accepts any bytes as a face, so reject a bad table
        // directory here.
        if let Err(e) = FontRef::from_index(&blob, index) {
            debug!("Rejecting face {index}: {e}");
            return Err(Error::Parse { index });
        }
        FontFace::new_with_index(blob, index).map_err(|_| Error::Parse { index })
    }

    fn input(&self, request: &SubsetRequest) -> Result<SubsetInput> {
        let mut input = SubsetInput::new().map_err(|_| Error::Input)?;

        if request.retains_glyph_ids() {
            input.flags().retain_glyph_indices();
        }

        {
            let mut unicode_set = input.unicode_set();
            for c in request.chars() {
                unicode_set.insert(c);
            }
        }

        Ok(input)
    }

    fn subset(&self, face: &FontFace<'_>, input: &SubsetInput) -> Result<FontFace<'static>> {
        input.subset_font(face).map_err(|_| Error::Subset)
    }

    fn serialize<'o>(&self, output: &'o FontFace<'static>) -> Result<Blob<'o>> {
        Ok(output.underlying_blob())
    }
}
