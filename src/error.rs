//! Error types

use crate::binary::read::ReadEof;
use std::fmt;

/// Errors that originate when parsing binary data
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ParseError {
    BadEof,
    BadValue,
    BadVersion,
    BadOffset,
    BadIndex,
    LimitExceeded,
    MissingValue,
    InvalidOffsetSize,
    CorruptIndex,
    CharstringsMissing,
}

impl From<ReadEof> for ParseError {
    fn from(_error: ReadEof) -> Self {
        ParseError::BadEof
    }
}

impl From<std::num::TryFromIntError> for ParseError {
    fn from(_error: std::num::TryFromIntError) -> Self {
        ParseError::BadValue
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadEof => write!(f, "end of data reached unexpectedly"),
            ParseError::BadValue => write!(f, "invalid value"),
            ParseError::BadVersion => write!(f, "unexpected data version"),
            ParseError::BadOffset => write!(f, "invalid data offset"),
            ParseError::BadIndex => write!(f, "invalid data index"),
            ParseError::LimitExceeded => write!(f, "limit exceeded"),
            ParseError::MissingValue => write!(f, "an expected data value was missing"),
            ParseError::InvalidOffsetSize => write!(f, "invalid offset size"),
            ParseError::CorruptIndex => write!(f, "index offsets are not monotonic"),
            ParseError::CharstringsMissing => write!(f, "font has no CharStrings offset"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Error returned when decoding a font set fails.
///
/// Structural errors are fatal for the whole font set. The offset locates
/// the start of the section that failed to decode, relative to the
/// beginning of the supplied buffer.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DecodeError {
    pub offset: usize,
    pub error: ParseError,
}

impl DecodeError {
    pub fn at(offset: usize, error: ParseError) -> Self {
        DecodeError { offset, error }
    }
}

impl From<ParseError> for DecodeError {
    fn from(error: ParseError) -> Self {
        DecodeError { offset: 0, error }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {:#x}: {}", self.offset, self.error)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
