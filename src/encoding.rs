//! CFF encodings
//!
//! The encoding maps character codes to glyphs. Codes resolve to glyph ids
//! directly in the custom formats, or through the charset for the
//! predefined Standard and Expert encodings and for supplement entries.

use log::warn;

use crate::binary::read::{ReadBinary, ReadCtxt};
use crate::charset::{Charset, Range, SID};
use crate::error::ParseError;
use crate::standard::{EXPERT_ENCODING, STANDARD_ENCODING};

#[derive(Clone, Debug, PartialEq)]
pub enum Encoding {
    Standard,
    Expert,
    Custom(CustomEncoding),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CustomEncoding {
    table: EncodingTable,
    supplements: Vec<Supplement>,
}

#[derive(Clone, Debug, PartialEq)]
enum EncodingTable {
    Format0 { codes: Vec<u8> },
    Format1 { ranges: Vec<Range<u8, u8>> },
}

/// A supplemental encoding entry mapping a code to the SID of a glyph name.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Supplement {
    pub code: u8,
    pub sid: SID,
}

impl ReadBinary for CustomEncoding {
    type HostType = CustomEncoding;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<CustomEncoding, ParseError> {
        // The high bit of the format byte flags a trailing list of
        // supplemental (code, SID) mappings for multiply-encoded glyphs.
        let format = ctxt.read_u8()?;
        let table = match format & 0x7F {
            0 => {
                let n_codes = ctxt.read_u8()?;
                let mut codes = Vec::with_capacity(usize::from(n_codes));
                for _ in 0..n_codes {
                    codes.push(ctxt.read_u8()?);
                }
                EncodingTable::Format0 { codes }
            }
            1 => {
                let n_ranges = ctxt.read_u8()?;
                let mut ranges = Vec::with_capacity(usize::from(n_ranges));
                for _ in 0..n_ranges {
                    ranges.push(ctxt.read::<Range<u8, u8>>()?);
                }
                EncodingTable::Format1 { ranges }
            }
            _ => return Err(ParseError::BadValue),
        };

        let mut supplements = Vec::new();
        if format & 0x80 == 0x80 {
            let n_sups = ctxt.read_u8()?;
            for _ in 0..n_sups {
                let code = ctxt.read_u8()?;
                let sid = ctxt.read_u16be()?;
                if supplements.iter().any(|sup: &Supplement| sup.code == code) {
                    warn!("duplicate encoding supplement for code {}", code);
                }
                supplements.push(Supplement { code, sid });
            }
        }

        Ok(CustomEncoding { table, supplements })
    }
}

impl Encoding {
    /// Returns the glyph id that `code` maps to, if any.
    ///
    /// The charset must belong to the same font as this encoding. The
    /// predefined encodings map codes to glyph names, so the charset is
    /// consulted to locate the glyph with that name. Supplement entries on
    /// a custom encoding take precedence over its base table.
    pub fn glyph_id_for_code(&self, code: u8, charset: &Charset) -> Option<u16> {
        match self {
            Encoding::Standard => {
                sid_to_gid_non_notdef(charset, SID::from(STANDARD_ENCODING[usize::from(code)]))
            }
            Encoding::Expert => {
                sid_to_gid_non_notdef(charset, EXPERT_ENCODING[usize::from(code)])
            }
            Encoding::Custom(custom) => custom.glyph_id_for_code(code, charset),
        }
    }
}

fn sid_to_gid_non_notdef(charset: &Charset, sid: SID) -> Option<u16> {
    if sid == 0 {
        return None;
    }
    charset.sid_to_gid(sid)
}

impl CustomEncoding {
    pub fn supplements(&self) -> &[Supplement] {
        &self.supplements
    }

    pub fn glyph_id_for_code(&self, code: u8, charset: &Charset) -> Option<u16> {
        if let Some(sup) = self.supplements.iter().find(|sup| sup.code == code) {
            return sid_to_gid_non_notdef(charset, sup.sid);
        }

        // Encoded glyphs are stored in glyph id order starting at glyph 1,
        // so the position of a code in the table is its glyph id.
        match &self.table {
            EncodingTable::Format0 { codes } => codes
                .iter()
                .position(|&entry| entry == code)
                .map(|index| index as u16 + 1),
            EncodingTable::Format1 { ranges } => {
                let mut glyph_id = 1u16;
                for range in ranges {
                    let last = u16::from(range.first) + u16::from(range.n_left);
                    if range.first <= code && u16::from(code) <= last {
                        return Some(glyph_id + u16::from(code - range.first));
                    }
                    glyph_id += u16::from(range.n_left) + 1;
                }
                None
            }
        }
    }
}
