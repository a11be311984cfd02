//! CFF FDSelect tables
//!
//! CID keyed fonts group their glyphs, with each group using its own Font
//! DICT from the FDArray. The FDSelect table maps a glyph id to the index
//! of that Font DICT.

use std::iter;

use itertools::Itertools;

use crate::binary::read::{ReadBinaryDep, ReadCtxt};
use crate::charset::Range;
use crate::error::ParseError;

/// Font DICT select as described in Section 19 of Technical Note #5176
#[derive(Clone, Debug, PartialEq)]
pub enum FdSelect {
    Format0 {
        glyph_font_dict_indices: Vec<u8>,
    },
    // Formats 1 and 2 are not defined
    Format3 {
        ranges: Vec<Range<u16, u8>>,
        sentinel: u16,
    },
}

impl ReadBinaryDep for FdSelect {
    type Args = usize;
    type HostType = FdSelect;

    fn read_dep(ctxt: &mut ReadCtxt<'_>, n_glyphs: usize) -> Result<FdSelect, ParseError> {
        match ctxt.read_u8()? {
            0 => {
                let glyph_font_dict_indices = ctxt.read_slice(n_glyphs)?.to_vec();
                Ok(FdSelect::Format0 {
                    glyph_font_dict_indices,
                })
            }
            3 => {
                let n_ranges = usize::from(ctxt.read_u16be()?);
                let mut ranges = Vec::with_capacity(n_ranges);
                for _ in 0..n_ranges {
                    let first = ctxt.read_u16be()?;
                    let n_left = ctxt.read_u8()?;
                    ranges.push(Range { first, n_left });
                }
                let sentinel = ctxt.read_u16be()?;

                // Ranges must be monotonic and cover [0, nGlyphs) exactly,
                // with the sentinel marking one past the last glyph.
                let firsts_monotonic = ranges
                    .iter()
                    .map(|range| range.first)
                    .chain(iter::once(sentinel))
                    .tuple_windows()
                    .all(|(prev, next)| prev < next);
                if ranges.is_empty()
                    || ranges[0].first != 0
                    || !firsts_monotonic
                    || usize::from(sentinel) != n_glyphs
                {
                    return Err(ParseError::BadValue);
                }

                Ok(FdSelect::Format3 { ranges, sentinel })
            }
            _ => Err(ParseError::BadValue),
        }
    }
}

impl FdSelect {
    /// Returns the index of the Font DICT for the supplied `glyph_id`
    pub fn font_dict_index(&self, glyph_id: u16) -> Option<u8> {
        match self {
            FdSelect::Format0 {
                glyph_font_dict_indices,
            } => glyph_font_dict_indices.get(usize::from(glyph_id)).copied(),
            FdSelect::Format3 { ranges, sentinel } => {
                let range_windows = ranges
                    .iter()
                    .map(|&Range { first, n_left }| (first, Some(n_left)))
                    .chain(iter::once((*sentinel, None)))
                    .tuple_windows();

                for ((first, fd_index), (last, _)) in range_windows {
                    if glyph_id >= first && glyph_id < last {
                        return fd_index;
                    }
                }

                None
            }
        }
    }
}
