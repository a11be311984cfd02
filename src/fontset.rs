//! CFF FontSet decoding
//!
//! A CFF stream holds one or more fonts sharing a String INDEX and a
//! global subroutine INDEX. [FontSet::decode] reads the fixed sequence of
//! top level structures, then resolves the offsets in each font's Top DICT
//! into its CharStrings, charset, encoding and Private DICT.

use log::{debug, warn};

use crate::binary::read::{ReadBinary, ReadCtxt, ReadScope};
use crate::charset::{Charset, CustomCharset, SID};
use crate::charstring::{CharStringError, Glyph, Interpreter};
use crate::dict::{Dict, DictDefault, FontDict, Operator, PrivateDict, TopDict};
use crate::encoding::{CustomEncoding, Encoding};
use crate::error::{DecodeError, ParseError};
use crate::fd_select::FdSelect;
use crate::index::IndexTable;
use crate::standard::STANDARD_STRINGS;

/// The header at the start of a CFF stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub major: u8,
    pub minor: u8,
    pub hdr_size: u8,
    pub off_size: u8,
}

impl ReadBinary for Header {
    type HostType = Header;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Header, ParseError> {
        let major = ctxt.read_u8()?;
        ctxt.check_version(major == 1)?;
        let minor = ctxt.read_u8()?;
        let hdr_size = ctxt.read_u8()?;
        ctxt.check(hdr_size >= 4)?;
        let off_size = ctxt.read_u8()?;
        if !(1..=4).contains(&off_size) {
            return Err(ParseError::InvalidOffsetSize);
        }

        // Data between the fixed fields and hdrSize is reserved.
        let _reserved = ctxt.read_slice(usize::from(hdr_size) - 4)?;

        Ok(Header {
            major,
            minor,
            hdr_size,
            off_size,
        })
    }
}

/// A decoded CFF stream.
#[derive(Clone, Debug)]
pub struct FontSet {
    pub header: Header,
    pub strings: IndexTable,
    pub global_subrs: IndexTable,
    pub fonts: Vec<FontProgram>,
}

/// One font of a [FontSet] with its Top DICT offsets resolved.
#[derive(Clone, Debug)]
pub struct FontProgram {
    pub name: String,
    pub top_dict: TopDict,
    pub char_strings: IndexTable,
    pub charset: Charset,
    /// `None` for CID keyed fonts, which have no encoding.
    pub encoding: Option<Encoding>,
    pub private_dict: PrivateDict,
    pub local_subrs: IndexTable,
    pub cid: Option<CidData>,
}

/// The extra structures of a CID keyed font.
#[derive(Clone, Debug)]
pub struct CidData {
    pub font_dicts: Vec<FontDictEntry>,
    pub fd_select: FdSelect,
}

/// An FDArray entry with its Private DICT and local subroutines resolved.
#[derive(Clone, Debug)]
pub struct FontDictEntry {
    pub font_dict: FontDict,
    pub private_dict: PrivateDict,
    pub local_subrs: IndexTable,
}

impl FontSet {
    /// Decode the CFF stream in `data`.
    pub fn decode(data: &[u8]) -> Result<FontSet, DecodeError> {
        Self::decode_scope(ReadScope::new(data))
    }

    /// Decode a CFF stream embedded in `data`, such as the `CFF ` table of
    /// an OpenType font. Error offsets are relative to the whole of `data`.
    pub fn decode_range(data: &[u8], offset: usize, length: usize) -> Result<FontSet, DecodeError> {
        let scope = ReadScope::new(data)
            .offset_length(offset, length)
            .map_err(|error| DecodeError::at(offset, error))?;
        Self::decode_scope(scope)
    }

    fn decode_scope(scope: ReadScope<'_>) -> Result<FontSet, DecodeError> {
        let mut ctxt = scope.ctxt();

        let pos = ctxt.pos();
        let header = ctxt
            .read::<Header>()
            .map_err(|error| DecodeError::at(pos, error))?;

        let pos = ctxt.pos();
        let name_index = ctxt
            .read::<IndexTable>()
            .map_err(|error| DecodeError::at(pos, error))?;
        let names = read_names(&name_index).map_err(|error| DecodeError::at(pos, error))?;

        let top_dict_pos = ctxt.pos();
        let top_dict_index = ctxt
            .read::<IndexTable>()
            .map_err(|error| DecodeError::at(top_dict_pos, error))?;
        if top_dict_index.len() != names.len() {
            return Err(DecodeError::at(top_dict_pos, ParseError::BadValue));
        }

        let pos = ctxt.pos();
        let strings = ctxt
            .read::<IndexTable>()
            .map_err(|error| DecodeError::at(pos, error))?;

        let pos = ctxt.pos();
        let global_subrs = ctxt
            .read::<IndexTable>()
            .map_err(|error| DecodeError::at(pos, error))?;

        let mut fonts = Vec::with_capacity(names.len());
        for (name, top_dict_data) in names.into_iter().zip(top_dict_index.iter()) {
            let top_dict = ReadScope::new(top_dict_data)
                .read::<TopDict>()
                .map_err(|error| DecodeError::at(top_dict_pos, error))?;
            fonts.push(read_font(&scope, top_dict_pos, name, top_dict)?);
        }
        debug!("decoded {} font(s)", fonts.len());

        Ok(FontSet {
            header,
            strings,
            global_subrs,
            fonts,
        })
    }

    /// Resolve a string id to its string.
    ///
    /// SIDs below 391 index the standard strings. Higher values index the
    /// String INDEX, with SID 391 naming its first entry.
    pub fn string(&self, sid: SID) -> Result<&str, ParseError> {
        match STANDARD_STRINGS.get(usize::from(sid)) {
            Some(string) => Ok(string),
            None => {
                let data = self
                    .strings
                    .read_object(usize::from(sid) - STANDARD_STRINGS.len())?;
                std::str::from_utf8(data).map_err(|_| ParseError::BadValue)
            }
        }
    }

    /// Returns the name of the supplied glyph, or `None` when the glyph is
    /// not in the charset or the font is CID keyed and its glyphs unnamed.
    pub fn glyph_name(&self, font_index: usize, glyph_id: u16) -> Result<Option<&str>, ParseError> {
        let font = self.fonts.get(font_index).ok_or(ParseError::BadIndex)?;
        if font.cid.is_some() {
            return Ok(None);
        }

        match font.charset.id_for_glyph(glyph_id) {
            Some(sid) => self.string(sid).map(Some),
            None => Ok(None),
        }
    }

    /// Interpret the CharString of one glyph.
    pub fn interpret_glyph(
        &self,
        font_index: usize,
        glyph_id: u16,
    ) -> Result<Glyph, CharStringError> {
        let font = self
            .fonts
            .get(font_index)
            .ok_or(CharStringError::Parse(ParseError::BadIndex))?;
        font.interpret_glyph(glyph_id, &self.global_subrs)
    }
}

impl FontProgram {
    pub fn n_glyphs(&self) -> usize {
        self.char_strings.len()
    }

    pub fn is_cid(&self) -> bool {
        self.cid.is_some()
    }

    /// Returns the glyph id that the character `code` maps to, if any.
    pub fn glyph_id_for_code(&self, code: u8) -> Option<u16> {
        self.encoding
            .as_ref()?
            .glyph_id_for_code(code, &self.charset)
    }

    /// Interpret the CharString of one glyph against this font's
    /// subroutines and width defaults.
    pub fn interpret_glyph(
        &self,
        glyph_id: u16,
        global_subrs: &IndexTable,
    ) -> Result<Glyph, CharStringError> {
        let char_string = self.char_strings.read_object(usize::from(glyph_id))?;

        // CID keyed fonts select a Font DICT per glyph. The Private DICT
        // and local subroutines of that Font DICT apply.
        let (private_dict, local_subrs) = match &self.cid {
            Some(cid) => {
                let fd_index = cid
                    .fd_select
                    .font_dict_index(glyph_id)
                    .ok_or(CharStringError::Parse(ParseError::BadIndex))?;
                let entry = cid
                    .font_dicts
                    .get(usize::from(fd_index))
                    .ok_or(CharStringError::Parse(ParseError::BadIndex))?;
                (&entry.private_dict, &entry.local_subrs)
            }
            None => (&self.private_dict, &self.local_subrs),
        };

        let mut interpreter = Interpreter::new(local_subrs, global_subrs);
        if let Some(width) = private_dict.get_f64(Operator::DefaultWidthX) {
            interpreter.default_width_x = width? as f32;
        }
        if let Some(width) = private_dict.get_f64(Operator::NominalWidthX) {
            interpreter.nominal_width_x = width? as f32;
        }

        interpreter.interpret(char_string)
    }
}

fn read_names(name_index: &IndexTable) -> Result<Vec<String>, ParseError> {
    name_index
        .iter()
        .map(|data| {
            if data.first() == Some(&0) {
                // An entry starting with a NUL byte marks a removed font.
                warn!("removed font in name index");
            }
            String::from_utf8(data.to_vec()).map_err(|_| ParseError::BadValue)
        })
        .collect()
}

fn read_font(
    scope: &ReadScope<'_>,
    top_dict_pos: usize,
    name: String,
    top_dict: TopDict,
) -> Result<FontProgram, DecodeError> {
    let dict_error = |error| DecodeError::at(top_dict_pos, error);

    let char_strings_offset = match dict_offset(&top_dict, Operator::CharStrings) {
        Ok(Some(offset)) => offset,
        Ok(None) => return Err(dict_error(ParseError::CharstringsMissing)),
        Err(error) => return Err(dict_error(error)),
    };
    let char_strings = scope
        .offset(char_strings_offset)
        .read::<IndexTable>()
        .map_err(|error| DecodeError::at(scope.base() + char_strings_offset, error))?;
    let n_glyphs = char_strings.len();

    let is_cid = top_dict.get(Operator::ROS).is_some();

    let charset = match top_dict.get_i32(Operator::Charset).transpose().map_err(dict_error)? {
        Some(0) | None => Charset::IsoAdobe,
        Some(1) => Charset::Expert,
        Some(2) => Charset::ExpertSubset,
        Some(offset) => {
            let offset = usize::try_from(offset).map_err(|_| dict_error(ParseError::BadValue))?;
            let custom = scope
                .offset(offset)
                .read_dep::<CustomCharset>(n_glyphs)
                .map_err(|error| DecodeError::at(scope.base() + offset, error))?;
            Charset::Custom(custom)
        }
    };

    let encoding = if is_cid {
        None
    } else {
        match top_dict.get_i32(Operator::Encoding).transpose().map_err(dict_error)? {
            Some(0) | None => Some(Encoding::Standard),
            Some(1) => Some(Encoding::Expert),
            Some(offset) => {
                let offset =
                    usize::try_from(offset).map_err(|_| dict_error(ParseError::BadValue))?;
                let custom = scope
                    .offset(offset)
                    .read::<CustomEncoding>()
                    .map_err(|error| DecodeError::at(scope.base() + offset, error))?;
                Some(Encoding::Custom(custom))
            }
        }
    };

    let (private_dict, local_subrs) = read_private(scope, &top_dict).map_err(dict_error)?;

    let cid = if is_cid {
        Some(read_cid_data(scope, top_dict_pos, &top_dict, n_glyphs)?)
    } else {
        None
    };

    Ok(FontProgram {
        name,
        top_dict,
        char_strings,
        charset,
        encoding,
        private_dict,
        local_subrs,
        cid,
    })
}

fn read_cid_data(
    scope: &ReadScope<'_>,
    top_dict_pos: usize,
    top_dict: &TopDict,
    n_glyphs: usize,
) -> Result<CidData, DecodeError> {
    let dict_error = |error| DecodeError::at(top_dict_pos, error);

    // A CID keyed font requires both operators. One without the other is
    // an inconsistent font.
    let (fd_array_offset, fd_select_offset) = match (
        dict_offset(top_dict, Operator::FDArray).map_err(dict_error)?,
        dict_offset(top_dict, Operator::FDSelect).map_err(dict_error)?,
    ) {
        (Some(fd_array), Some(fd_select)) => (fd_array, fd_select),
        _ => return Err(dict_error(ParseError::MissingValue)),
    };

    let fd_array = scope
        .offset(fd_array_offset)
        .read::<IndexTable>()
        .map_err(|error| DecodeError::at(scope.base() + fd_array_offset, error))?;
    let mut font_dicts = Vec::with_capacity(fd_array.len());
    for data in fd_array.iter() {
        let font_dict = ReadScope::new(data)
            .read::<FontDict>()
            .map_err(|error| DecodeError::at(scope.base() + fd_array_offset, error))?;
        let (private_dict, local_subrs) = read_private(scope, &font_dict)
            .map_err(|error| DecodeError::at(scope.base() + fd_array_offset, error))?;
        font_dicts.push(FontDictEntry {
            font_dict,
            private_dict,
            local_subrs,
        });
    }

    let fd_select = scope
        .offset(fd_select_offset)
        .read_dep::<FdSelect>(n_glyphs)
        .map_err(|error| DecodeError::at(scope.base() + fd_select_offset, error))?;

    Ok(CidData {
        font_dicts,
        fd_select,
    })
}

/// Read the Private DICT a DICT points at, along with the local subroutine
/// INDEX the Private DICT in turn points at. The Subrs offset is relative
/// to the start of the Private DICT.
fn read_private<T: DictDefault>(
    scope: &ReadScope<'_>,
    dict: &Dict<T>,
) -> Result<(PrivateDict, IndexTable), ParseError> {
    let (private_dict, private_offset) = match dict.read_private_dict(scope)? {
        Some((private_dict, offset)) => (private_dict, offset),
        None => return Ok((PrivateDict::new(), IndexTable::empty())),
    };

    let local_subrs = match private_dict.get_i32(Operator::Subrs).transpose()? {
        Some(subrs) => {
            let offset = private_offset
                .checked_add(usize::try_from(subrs)?)
                .ok_or(ParseError::BadOffset)?;
            scope.offset(offset).read::<IndexTable>()?
        }
        None => IndexTable::empty(),
    };

    Ok((private_dict, local_subrs))
}

fn dict_offset<T: DictDefault>(dict: &Dict<T>, key: Operator) -> Result<Option<usize>, ParseError> {
    match dict.get_i32(key).transpose()? {
        Some(offset) => usize::try_from(offset).map(Some).map_err(ParseError::from),
        None => Ok(None),
    }
}
