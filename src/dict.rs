//! CFF DICT decoding
//!
//! A DICT is a byte range holding (operator, operand-list) pairs. Operands
//! accumulate until an operator byte is seen. Operators occupy codes 0 to 21
//! in a single byte, with byte 12 escaping to a second operator byte space.

use std::convert::{TryFrom, TryInto};
use std::fmt;
use std::marker::PhantomData;

use crate::binary::read::{ReadBinary, ReadCtxt, ReadScope};
use crate::error::ParseError;

/// Maximum number of operands accumulated before an operator.
const MAX_OPERANDS: usize = 48;
const END_OF_FLOAT_FLAG: u8 = 0xf;
const FLOAT_BUF_LEN: usize = 64;

const OPERAND_ZERO: [Operand; 1] = [Operand::Integer(0)];
const DEFAULT_UNDERLINE_POSITION: [Operand; 1] = [Operand::Integer(-100)];
const DEFAULT_UNDERLINE_THICKNESS: [Operand; 1] = [Operand::Integer(50)];
const DEFAULT_CHARSTRING_TYPE: [Operand; 1] = [Operand::Integer(2)];
const DEFAULT_FONT_MATRIX: [Operand; 6] = [
    Operand::Real(0.001),
    Operand::Integer(0),
    Operand::Integer(0),
    Operand::Real(0.001),
    Operand::Integer(0),
    Operand::Integer(0),
];
const DEFAULT_BBOX: [Operand; 4] = [
    Operand::Integer(0),
    Operand::Integer(0),
    Operand::Integer(0),
    Operand::Integer(0),
];
const DEFAULT_CID_COUNT: [Operand; 1] = [Operand::Integer(8720)];
const DEFAULT_BLUE_SHIFT: [Operand; 1] = [Operand::Integer(7)];
const DEFAULT_BLUE_FUZZ: [Operand; 1] = [Operand::Integer(1)];
const DEFAULT_BLUE_SCALE: [Operand; 1] = [Operand::Real(0.039625)];
const DEFAULT_EXPANSION_FACTOR: [Operand; 1] = [Operand::Real(0.06)];

/// A CFF DICT described in Section 4 of Technical Note #5176
#[derive(Debug, PartialEq, Clone)]
pub struct Dict<T>
where
    T: DictDefault,
{
    dict: Vec<(Operator, Vec<Operand>)>,
    default: PhantomData<T>,
}

/// The default values of a DICT
pub trait DictDefault {
    /// Returns the default operand(s) if any for the supplied `op`.
    fn default(op: Operator) -> Option<&'static [Operand]>;
}

#[derive(Debug, PartialEq, Clone)]
pub struct TopDictDefault;

#[derive(Debug, PartialEq, Clone)]
pub struct FontDictDefault;

#[derive(Debug, PartialEq, Clone)]
pub struct PrivateDictDefault;

pub type TopDict = Dict<TopDictDefault>;

pub type FontDict = Dict<FontDictDefault>;

pub type PrivateDict = Dict<PrivateDictDefault>;

/// CFF DICT operator or operand
#[derive(Debug, PartialEq)]
enum Op {
    Operator(Operator),
    Operand(Operand),
}

/// CFF operand to an operator
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Operand {
    Integer(i32),
    Real(f64),
}

#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Operator {
    Version = 0,
    Notice = 1,
    FullName = 2,
    FamilyName = 3,
    Weight = 4,
    FontBBox = 5,
    BlueValues = 6,
    OtherBlues = 7,
    FamilyBlues = 8,
    FamilyOtherBlues = 9,
    StdHW = 10,
    StdVW = 11,
    UniqueID = 13,
    XUID = 14,
    Charset = 15,
    Encoding = 16,
    CharStrings = 17,
    Private = 18,
    Subrs = 19,
    DefaultWidthX = 20,
    NominalWidthX = 21,
    Copyright = op2(0),
    IsFixedPitch = op2(1),
    ItalicAngle = op2(2),
    UnderlinePosition = op2(3),
    UnderlineThickness = op2(4),
    PaintType = op2(5),
    CharstringType = op2(6),
    FontMatrix = op2(7),
    StrokeWidth = op2(8),
    BlueScale = op2(9),
    BlueShift = op2(10),
    BlueFuzz = op2(11),
    StemSnapH = op2(12),
    StemSnapV = op2(13),
    ForceBold = op2(14),
    LanguageGroup = op2(17),
    ExpansionFactor = op2(18),
    InitialRandomSeed = op2(19),
    SyntheticBase = op2(20),
    PostScript = op2(21),
    BaseFontName = op2(22),
    BaseFontBlend = op2(23),
    ROS = op2(30),
    CIDFontVersion = op2(31),
    CIDFontRevision = op2(32),
    CIDFontType = op2(33),
    CIDCount = op2(34),
    UIDBase = op2(35),
    FDArray = op2(36),
    FDSelect = op2(37),
    FontName = op2(38),
}

const fn op2(value: u8) -> u16 {
    (12 << 8) | (value as u16)
}

impl<T> ReadBinary for Dict<T>
where
    T: DictDefault,
{
    type HostType = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let mut dict = Vec::new();
        let mut operands = Vec::new();

        while ctxt.bytes_available() {
            match Op::read(ctxt)? {
                Op::Operator(operator) => {
                    dict.push((operator, operands.clone()));
                    operands.clear();
                }
                Op::Operand(operand) => {
                    operands.push(operand);
                    if operands.len() > MAX_OPERANDS {
                        return Err(ParseError::LimitExceeded);
                    }
                }
            }
        }

        Ok(Dict {
            dict,
            default: PhantomData,
        })
    }
}

impl Op {
    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        let b0 = ctxt.read_u8()?;

        match b0 {
            0..=11 | 13..=21 => ok_operator(u16::from(b0).try_into().unwrap()), // NOTE(unwrap): Safe due to pattern
            12 => ok_operator(op2(ctxt.read_u8()?).try_into()?),
            28 => {
                let num = ctxt.read_i16be()?;
                Ok(Op::Operand(Operand::Integer(i32::from(num))))
            }
            29 => ok_int(ctxt.read_i32be()?),
            30 => ok_real(ctxt.read_until_nibble(END_OF_FLOAT_FLAG)?),
            32..=246 => ok_int(i32::from(b0) - 139),
            247..=250 => {
                let b1 = ctxt.read_u8()?;
                ok_int((i32::from(b0) - 247) * 256 + i32::from(b1) + 108)
            }
            251..=254 => {
                let b1 = ctxt.read_u8()?;
                ok_int(-(i32::from(b0) - 251) * 256 - i32::from(b1) - 108)
            }
            22..=27 | 31 | 255 => Err(ParseError::BadValue), // reserved
        }
    }
}

fn ok_operator(op: Operator) -> Result<Op, ParseError> {
    Ok(Op::Operator(op))
}

fn ok_int(num: i32) -> Result<Op, ParseError> {
    Ok(Op::Operand(Operand::Integer(num)))
}

fn ok_real(slice: &[u8]) -> Result<Op, ParseError> {
    parse_real(slice).map(|num| Op::Operand(Operand::Real(num)))
}

/// Parse a nibble-encoded real into an `f64`.
///
/// The nibble stream is rendered into an ASCII buffer then parsed, per
/// Table 5 Nibble Definitions of Technical Note #5176.
fn parse_real(bytes: &[u8]) -> Result<f64, ParseError> {
    let mut buf = [0u8; FLOAT_BUF_LEN];
    let mut used = 0;

    'nibbles: for byte in bytes {
        for nibble in [byte >> 4, byte & 0xF] {
            if nibble == END_OF_FLOAT_FLAG {
                break 'nibbles;
            }
            parse_float_nibble(nibble, &mut used, &mut buf)?;
        }
    }

    // NOTE(unwrap): Safe as the buffer was filled with only ASCII characters
    // in parse_float_nibble.
    let s = std::str::from_utf8(&buf[..used]).unwrap();
    s.parse().map_err(|_| ParseError::BadValue)
}

fn parse_float_nibble(nibble: u8, idx: &mut usize, data: &mut [u8]) -> Result<(), ParseError> {
    if *idx == FLOAT_BUF_LEN {
        return Err(ParseError::LimitExceeded);
    }

    match nibble {
        0..=9 => {
            data[*idx] = b'0' + nibble;
        }
        10 => {
            data[*idx] = b'.';
        }
        11 => {
            data[*idx] = b'E';
        }
        12 => {
            if *idx + 1 == FLOAT_BUF_LEN {
                return Err(ParseError::LimitExceeded);
            }

            data[*idx] = b'E';
            *idx += 1;
            data[*idx] = b'-';
        }
        13 => return Err(ParseError::BadValue),
        14 => {
            data[*idx] = b'-';
        }
        _ => return Err(ParseError::BadValue),
    }

    *idx += 1;
    Ok(())
}

impl<T> Dict<T>
where
    T: DictDefault,
{
    pub fn new() -> Self {
        Dict {
            dict: Vec::new(),
            default: PhantomData,
        }
    }

    pub fn get_with_default(&self, key: Operator) -> Option<&[Operand]> {
        self.get(key).or_else(|| T::default(key))
    }

    pub fn get(&self, key: Operator) -> Option<&[Operand]> {
        self.dict.iter().find_map(|(op, args)| {
            if *op == key {
                Some(args.as_slice())
            } else {
                None
            }
        })
    }

    /// Returns the i32 value of this operator if the operands hold a single Integer.
    pub fn get_i32(&self, key: Operator) -> Option<Result<i32, ParseError>> {
        self.get_with_default(key).map(|operands| match operands {
            [Operand::Integer(number)] => Ok(*number),
            _ => Err(ParseError::BadValue),
        })
    }

    /// Returns the value of this operator if the operands hold a single number.
    pub fn get_f64(&self, key: Operator) -> Option<Result<f64, ParseError>> {
        self.get_with_default(key).map(|operands| match operands {
            [Operand::Integer(number)] => Ok(f64::from(*number)),
            [Operand::Real(number)] => Ok(*number),
            _ => Err(ParseError::BadValue),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Operator, Vec<Operand>)> {
        self.dict.iter()
    }

    /// Returns the first operator of this DICT or `None` if the DICT is empty.
    pub fn first_operator(&self) -> Option<Operator> {
        self.iter().next().map(|(operator, _)| *operator)
    }

    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// Read the Private DICT referenced by this DICT, returning it and its
    /// offset within `scope` on success.
    ///
    /// A Private DICT may be specified as having a length of 0 if there are
    /// no non-default values to be stored. Some fonts omit the Private
    /// operator entirely, so its absence yields `None` rather than an error.
    pub fn read_private_dict(
        &self,
        scope: &ReadScope<'_>,
    ) -> Result<Option<(PrivateDict, usize)>, ParseError> {
        let (length, offset) = match self.get(Operator::Private) {
            Some([Operand::Integer(length), Operand::Integer(offset)]) => {
                (usize::try_from(*length)?, usize::try_from(*offset)?)
            }
            Some(_) => return Err(ParseError::BadValue),
            None => return Ok(None),
        };
        scope
            .offset_length(offset, length)?
            .read::<PrivateDict>()
            .map(|dict| Some((dict, offset)))
    }
}

impl DictDefault for TopDictDefault {
    fn default(op: Operator) -> Option<&'static [Operand]> {
        match op {
            Operator::IsFixedPitch => Some(&OPERAND_ZERO),
            Operator::ItalicAngle => Some(&OPERAND_ZERO),
            Operator::UnderlinePosition => Some(&DEFAULT_UNDERLINE_POSITION),
            Operator::UnderlineThickness => Some(&DEFAULT_UNDERLINE_THICKNESS),
            Operator::PaintType => Some(&OPERAND_ZERO),
            Operator::CharstringType => Some(&DEFAULT_CHARSTRING_TYPE),
            Operator::FontMatrix => Some(&DEFAULT_FONT_MATRIX),
            Operator::FontBBox => Some(&DEFAULT_BBOX),
            Operator::StrokeWidth => Some(&OPERAND_ZERO),
            Operator::Charset => Some(&OPERAND_ZERO),
            Operator::Encoding => Some(&OPERAND_ZERO),
            Operator::CIDFontVersion => Some(&OPERAND_ZERO),
            Operator::CIDFontRevision => Some(&OPERAND_ZERO),
            Operator::CIDFontType => Some(&OPERAND_ZERO),
            Operator::CIDCount => Some(&DEFAULT_CID_COUNT),
            _ => None,
        }
    }
}

impl DictDefault for FontDictDefault {
    fn default(_op: Operator) -> Option<&'static [Operand]> {
        None
    }
}

impl DictDefault for PrivateDictDefault {
    fn default(op: Operator) -> Option<&'static [Operand]> {
        match op {
            Operator::BlueScale => Some(&DEFAULT_BLUE_SCALE),
            Operator::BlueShift => Some(&DEFAULT_BLUE_SHIFT),
            Operator::BlueFuzz => Some(&DEFAULT_BLUE_FUZZ),
            Operator::ForceBold => Some(&OPERAND_ZERO),
            Operator::LanguageGroup => Some(&OPERAND_ZERO),
            Operator::ExpansionFactor => Some(&DEFAULT_EXPANSION_FACTOR),
            Operator::InitialRandomSeed => Some(&OPERAND_ZERO),
            Operator::StrokeWidth => Some(&OPERAND_ZERO),
            Operator::DefaultWidthX => Some(&OPERAND_ZERO),
            Operator::NominalWidthX => Some(&OPERAND_ZERO),
            _ => None,
        }
    }
}

impl TryFrom<u16> for Operator {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if (value & 0xFF00) == (12 << 8) {
            match value as u8 {
                0 => Ok(Operator::Copyright),
                1 => Ok(Operator::IsFixedPitch),
                2 => Ok(Operator::ItalicAngle),
                3 => Ok(Operator::UnderlinePosition),
                4 => Ok(Operator::UnderlineThickness),
                5 => Ok(Operator::PaintType),
                6 => Ok(Operator::CharstringType),
                7 => Ok(Operator::FontMatrix),
                8 => Ok(Operator::StrokeWidth),
                9 => Ok(Operator::BlueScale),
                10 => Ok(Operator::BlueShift),
                11 => Ok(Operator::BlueFuzz),
                12 => Ok(Operator::StemSnapH),
                13 => Ok(Operator::StemSnapV),
                14 => Ok(Operator::ForceBold),
                17 => Ok(Operator::LanguageGroup),
                18 => Ok(Operator::ExpansionFactor),
                19 => Ok(Operator::InitialRandomSeed),
                20 => Ok(Operator::SyntheticBase),
                21 => Ok(Operator::PostScript),
                22 => Ok(Operator::BaseFontName),
                23 => Ok(Operator::BaseFontBlend),
                30 => Ok(Operator::ROS),
                31 => Ok(Operator::CIDFontVersion),
                32 => Ok(Operator::CIDFontRevision),
                33 => Ok(Operator::CIDFontType),
                34 => Ok(Operator::CIDCount),
                35 => Ok(Operator::UIDBase),
                36 => Ok(Operator::FDArray),
                37 => Ok(Operator::FDSelect),
                38 => Ok(Operator::FontName),
                _ => Err(ParseError::BadValue),
            }
        } else {
            match value {
                0 => Ok(Operator::Version),
                1 => Ok(Operator::Notice),
                2 => Ok(Operator::FullName),
                3 => Ok(Operator::FamilyName),
                4 => Ok(Operator::Weight),
                5 => Ok(Operator::FontBBox),
                6 => Ok(Operator::BlueValues),
                7 => Ok(Operator::OtherBlues),
                8 => Ok(Operator::FamilyBlues),
                9 => Ok(Operator::FamilyOtherBlues),
                10 => Ok(Operator::StdHW),
                11 => Ok(Operator::StdVW),
                13 => Ok(Operator::UniqueID),
                14 => Ok(Operator::XUID),
                15 => Ok(Operator::Charset),
                16 => Ok(Operator::Encoding),
                17 => Ok(Operator::CharStrings),
                18 => Ok(Operator::Private),
                19 => Ok(Operator::Subrs),
                20 => Ok(Operator::DefaultWidthX),
                21 => Ok(Operator::NominalWidthX),
                _ => Err(ParseError::BadValue),
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Version => "version",
            Operator::Notice => "notice",
            Operator::FullName => "fullname",
            Operator::FamilyName => "familyname",
            Operator::Weight => "weight",
            Operator::FontBBox => "fontbbox",
            Operator::BlueValues => "bluevalues",
            Operator::OtherBlues => "otherblues",
            Operator::FamilyBlues => "familyblues",
            Operator::FamilyOtherBlues => "familyotherblues",
            Operator::StdHW => "stdhw",
            Operator::StdVW => "stdvw",
            Operator::UniqueID => "uniqueid",
            Operator::XUID => "xuid",
            Operator::Charset => "charset",
            Operator::Encoding => "encoding",
            Operator::CharStrings => "charstrings",
            Operator::Private => "private",
            Operator::Subrs => "subrs",
            Operator::DefaultWidthX => "defaultwidthx",
            Operator::NominalWidthX => "nominalwidthx",
            Operator::Copyright => "copyright",
            Operator::IsFixedPitch => "isfixedpitch",
            Operator::ItalicAngle => "italicangle",
            Operator::UnderlinePosition => "underlineposition",
            Operator::UnderlineThickness => "underlinethickness",
            Operator::PaintType => "painttype",
            Operator::CharstringType => "charstringtype",
            Operator::FontMatrix => "fontmatrix",
            Operator::StrokeWidth => "strokewidth",
            Operator::BlueScale => "bluescale",
            Operator::BlueShift => "blueshift",
            Operator::BlueFuzz => "bluefuzz",
            Operator::StemSnapH => "stemsnaph",
            Operator::StemSnapV => "stemsnapv",
            Operator::ForceBold => "forcebold",
            Operator::LanguageGroup => "languagegroup",
            Operator::ExpansionFactor => "expansionfactor",
            Operator::InitialRandomSeed => "initialrandomseed",
            Operator::SyntheticBase => "syntheticbase",
            Operator::PostScript => "postscript",
            Operator::BaseFontName => "basefontname",
            Operator::BaseFontBlend => "basefontblend",
            Operator::ROS => "ros",
            Operator::CIDFontVersion => "cidfontversion",
            Operator::CIDFontRevision => "cidfontrevision",
            Operator::CIDFontType => "cidfonttype",
            Operator::CIDCount => "cidcount",
            Operator::UIDBase => "uidbase",
            Operator::FDArray => "fdarray",
            Operator::FDSelect => "fdselect",
            Operator::FontName => "fontname",
        };
        f.write_str(name)
    }
}

impl<T: DictDefault> Default for Dict<T> {
    fn default() -> Self {
        Dict::new()
    }
}
