//! CFF charsets
//!
//! The charset maps each glyph id to the string id (SID) of its name, or to
//! a CID for CID keyed fonts. Glyph 0 is always `.notdef` and is omitted
//! from the stored data.

use num_traits as num;

use crate::binary::read::{ReadBinary, ReadBinaryDep, ReadCtxt};
use crate::error::ParseError;
use crate::standard::{EXPERT_CHARSET, EXPERT_SUBSET_CHARSET};

/// A string id in the font
pub type SID = u16;

const ISO_ADOBE_LAST_SID: SID = 228;

#[derive(Clone, Debug, PartialEq)]
pub enum Charset {
    IsoAdobe,
    Expert,
    ExpertSubset,
    Custom(CustomCharset),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CustomCharset {
    Format0 { glyphs: Vec<SID> },
    Format1 { ranges: Vec<Range<SID, u8>> },
    Format2 { ranges: Vec<Range<SID, u16>> },
}

/// A Range from `first` to `first + n_left`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Range<F, N> {
    pub first: F,
    pub n_left: N,
}

impl<F, N> Range<F, N>
where
    N: num::Unsigned + Copy,
    usize: From<N>,
{
    pub fn len(&self) -> usize {
        usize::from(self.n_left) + 1
    }
}

impl ReadBinary for Range<SID, u8> {
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let first = ctxt.read_u16be()?;
        let n_left = ctxt.read_u8()?;
        Ok(Range { first, n_left })
    }
}

impl ReadBinary for Range<SID, u16> {
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let first = ctxt.read_u16be()?;
        let n_left = ctxt.read_u16be()?;
        Ok(Range { first, n_left })
    }
}

impl ReadBinary for Range<u8, u8> {
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let first = ctxt.read_u8()?;
        let n_left = ctxt.read_u8()?;
        Ok(Range { first, n_left })
    }
}

/// Read ranges until `n_glyphs` glyphs are covered.
pub(crate) fn read_range_array<F, N>(
    ctxt: &mut ReadCtxt<'_>,
    n_glyphs: usize,
) -> Result<Vec<Range<F, N>>, ParseError>
where
    Range<F, N>: ReadBinary<HostType = Range<F, N>>,
    N: num::Unsigned + Copy,
    usize: From<N>,
{
    let mut ranges = Vec::new();
    let mut glyphs_covered = 0;
    while glyphs_covered < n_glyphs {
        let range = ctxt.read::<Range<F, N>>()?;
        glyphs_covered += range.len();
        ranges.push(range);
    }

    Ok(ranges)
}

impl ReadBinaryDep for CustomCharset {
    type Args = usize;
    type HostType = CustomCharset;

    fn read_dep(ctxt: &mut ReadCtxt<'_>, n_glyphs: usize) -> Result<Self, ParseError> {
        // There is one less element in the charset than nGlyphs because the
        // .notdef glyph name is omitted.
        let n_glyphs = n_glyphs.checked_sub(1).ok_or(ParseError::BadValue)?;
        match ctxt.read_u8()? {
            0 => {
                let mut glyphs = Vec::with_capacity(n_glyphs.min(u16::MAX.into()));
                for _ in 0..n_glyphs {
                    glyphs.push(ctxt.read_u16be()?);
                }
                Ok(CustomCharset::Format0 { glyphs })
            }
            1 => {
                let ranges = read_range_array(ctxt, n_glyphs)?;
                Ok(CustomCharset::Format1 { ranges })
            }
            2 => {
                let ranges = read_range_array(ctxt, n_glyphs)?;
                Ok(CustomCharset::Format2 { ranges })
            }
            _ => Err(ParseError::BadValue),
        }
    }
}

impl Charset {
    /// Returns the SID (Type 1 font) or CID (CID keyed font) of the name of the supplied glyph
    pub fn id_for_glyph(&self, glyph_id: u16) -> Option<u16> {
        match self {
            // In ISOAdobe glyph ID maps to SID
            Charset::IsoAdobe => {
                if glyph_id <= ISO_ADOBE_LAST_SID {
                    Some(glyph_id)
                } else {
                    None
                }
            }
            Charset::Expert => EXPERT_CHARSET.get(usize::from(glyph_id)).copied(),
            Charset::ExpertSubset => EXPERT_SUBSET_CHARSET.get(usize::from(glyph_id)).copied(),
            Charset::Custom(custom) => custom.id_for_glyph(glyph_id),
        }
    }

    /// Returns the glyph id of the supplied string id.
    pub fn sid_to_gid(&self, sid: SID) -> Option<u16> {
        if sid == 0 {
            return Some(0);
        }

        match self {
            Charset::IsoAdobe => (sid <= ISO_ADOBE_LAST_SID).then_some(sid),
            Charset::Expert => table_position(&EXPERT_CHARSET, sid),
            Charset::ExpertSubset => table_position(&EXPERT_SUBSET_CHARSET, sid),
            Charset::Custom(custom) => custom.sid_to_gid(sid),
        }
    }
}

fn table_position(table: &[SID], sid: SID) -> Option<u16> {
    table
        .iter()
        .position(|&entry| entry == sid)
        .map(|gid| gid as u16)
}

impl CustomCharset {
    /// Returns the SID (Type 1 font) or CID (CID keyed font) of the name of the supplied glyph
    pub fn id_for_glyph(&self, glyph_id: u16) -> Option<u16> {
        if glyph_id == 0 {
            return Some(0);
        }

        match self {
            CustomCharset::Format0 { glyphs } => glyphs.get(usize::from(glyph_id - 1)).copied(),
            CustomCharset::Format1 { ranges } => Self::id_for_glyph_in_ranges(ranges, glyph_id),
            CustomCharset::Format2 { ranges } => Self::id_for_glyph_in_ranges(ranges, glyph_id),
        }
    }

    pub fn sid_to_gid(&self, sid: SID) -> Option<u16> {
        match self {
            CustomCharset::Format0 { glyphs } => {
                // First glyph is omitted, so we have to add 1.
                glyphs
                    .iter()
                    .position(|&n| n == sid)
                    .and_then(|n| u16::try_from(n + 1).ok())
            }
            CustomCharset::Format1 { ranges } => Self::glyph_id_for_sid_in_ranges(ranges, sid),
            CustomCharset::Format2 { ranges } => Self::glyph_id_for_sid_in_ranges(ranges, sid),
        }
    }

    fn glyph_id_for_sid_in_ranges<N>(ranges: &[Range<SID, N>], sid: SID) -> Option<u16>
    where
        N: num::Unsigned + Copy,
        u16: From<N>,
    {
        let mut glyph_id = 1u16;
        for range in ranges {
            let n_left = u16::from(range.n_left);
            let last = u32::from(range.first) + u32::from(n_left);
            if range.first <= sid && u32::from(sid) <= last {
                return glyph_id.checked_add(sid - range.first);
            }

            glyph_id = glyph_id.checked_add(n_left)?.checked_add(1)?;
        }

        None
    }

    fn id_for_glyph_in_ranges<N>(ranges: &[Range<SID, N>], glyph_id: u16) -> Option<u16>
    where
        N: num::Unsigned + Copy,
        usize: From<N>,
    {
        let glyph_id = glyph_id as usize;

        ranges
            .iter()
            .scan(0usize, |glyphs_covered, range| {
                *glyphs_covered += range.len();
                Some((*glyphs_covered, range))
            })
            .find(|(glyphs_covered, _range)| glyph_id <= *glyphs_covered)
            .and_then(|(glyphs_covered, range)| {
                (range.first as usize + (glyph_id - (glyphs_covered - range.len()) - 1))
                    .try_into()
                    .ok()
            })
    }
}
