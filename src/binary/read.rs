//! Parse binary data
//!
//! A positioned cursor over an immutable byte buffer. A [`ReadScope`]
//! remembers its offset from the start of the original buffer (its base) so
//! that data embedded at an offset, such as a font table inside an outer
//! container, reports error positions relative to the whole buffer.

use byteorder::{BigEndian, ByteOrder};

use crate::error::ParseError;

/// Marker returned when a read would pass the end of the buffer.
#[derive(Debug, Copy, Clone)]
pub struct ReadEof {}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReadScope<'a> {
    base: usize,
    data: &'a [u8],
}

#[derive(Clone)]
pub struct ReadCtxt<'a> {
    scope: ReadScope<'a>,
    offset: usize,
}

pub trait ReadBinary {
    type HostType: Sized;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self::HostType, ParseError>;
}

pub trait ReadBinaryDep {
    type Args: Copy;
    type HostType: Sized;

    fn read_dep(ctxt: &mut ReadCtxt<'_>, args: Self::Args) -> Result<Self::HostType, ParseError>;
}

impl<T> ReadBinaryDep for T
where
    T: ReadBinary,
{
    type Args = ();
    type HostType = T::HostType;

    fn read_dep(ctxt: &mut ReadCtxt<'_>, (): Self::Args) -> Result<Self::HostType, ParseError> {
        T::read(ctxt)
    }
}

impl<'a> ReadScope<'a> {
    pub fn new(data: &'a [u8]) -> ReadScope<'a> {
        let base = 0;
        ReadScope { base, data }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The offset of this scope from the start of the original buffer.
    pub fn base(&self) -> usize {
        self.base
    }

    pub fn offset(&self, offset: usize) -> ReadScope<'a> {
        let base = self.base + offset;
        let data = self.data.get(offset..).unwrap_or(&[]);
        ReadScope { base, data }
    }

    pub fn offset_length(&self, offset: usize, length: usize) -> Result<ReadScope<'a>, ParseError> {
        if offset < self.data.len() || length == 0 {
            let data = self.data.get(offset..).unwrap_or(&[]);
            if length <= data.len() {
                let base = self.base + offset;
                let data = &data[0..length];
                Ok(ReadScope { base, data })
            } else {
                Err(ParseError::BadEof)
            }
        } else {
            Err(ParseError::BadOffset)
        }
    }

    pub fn ctxt(&self) -> ReadCtxt<'a> {
        ReadCtxt::new(*self)
    }

    pub fn read<T: ReadBinaryDep<Args = ()>>(&self) -> Result<T::HostType, ParseError> {
        self.ctxt().read::<T>()
    }

    pub fn read_dep<T: ReadBinaryDep>(&self, args: T::Args) -> Result<T::HostType, ParseError> {
        self.ctxt().read_dep::<T>(args)
    }
}

impl<'a> ReadCtxt<'a> {
    /// ReadCtxt is constructed by calling `ReadScope::ctxt`.
    fn new(scope: ReadScope<'a>) -> ReadCtxt<'a> {
        ReadCtxt { scope, offset: 0 }
    }

    pub fn check(&self, cond: bool) -> Result<(), ParseError> {
        match cond {
            true => Ok(()),
            false => Err(ParseError::BadValue),
        }
    }

    /// Check a condition, returning `ParseError::BadVersion` if `false`.
    pub fn check_version(&self, cond: bool) -> Result<(), ParseError> {
        match cond {
            true => Ok(()),
            false => Err(ParseError::BadVersion),
        }
    }

    /// A scope starting at the current position.
    pub fn scope(&self) -> ReadScope<'a> {
        self.scope.offset(self.offset)
    }

    /// The current position relative to the start of the original buffer.
    pub fn pos(&self) -> usize {
        self.scope.base + self.offset
    }

    pub fn read<T: ReadBinaryDep<Args = ()>>(&mut self) -> Result<T::HostType, ParseError> {
        T::read_dep(self, ())
    }

    pub fn read_dep<T: ReadBinaryDep>(&mut self, args: T::Args) -> Result<T::HostType, ParseError> {
        T::read_dep(self, args)
    }

    pub fn bytes_available(&self) -> bool {
        self.offset < self.scope.data.len()
    }

    fn check_avail(&self, length: usize) -> Result<(), ReadEof> {
        match self.offset.checked_add(length) {
            Some(endpos) if endpos <= self.scope.data.len() => Ok(()),
            _ => Err(ReadEof {}),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, ReadEof> {
        self.check_avail(1)?;
        let byte = self.scope.data[self.offset];
        self.offset += 1;
        Ok(byte)
    }

    pub fn read_i8(&mut self) -> Result<i8, ReadEof> {
        self.read_u8().map(|byte| byte as i8)
    }

    pub fn read_u16be(&mut self) -> Result<u16, ReadEof> {
        self.read_slice(2).map(BigEndian::read_u16)
    }

    pub fn read_i16be(&mut self) -> Result<i16, ReadEof> {
        self.read_slice(2).map(BigEndian::read_i16)
    }

    pub fn read_u24be(&mut self) -> Result<u32, ReadEof> {
        self.read_slice(3).map(BigEndian::read_u24)
    }

    pub fn read_u32be(&mut self) -> Result<u32, ReadEof> {
        self.read_slice(4).map(BigEndian::read_u32)
    }

    pub fn read_i32be(&mut self) -> Result<i32, ReadEof> {
        self.read_slice(4).map(BigEndian::read_i32)
    }

    /// Read an unsigned big-endian integer of `size` bytes, 1 to 4.
    pub fn read_offset(&mut self, size: u8) -> Result<u32, ParseError> {
        match size {
            1 => Ok(u32::from(self.read_u8()?)),
            2 => Ok(u32::from(self.read_u16be()?)),
            3 => Ok(self.read_u24be()?),
            4 => Ok(self.read_u32be()?),
            _ => Err(ParseError::InvalidOffsetSize),
        }
    }

    /// Read up to and including the supplied nibble.
    pub fn read_until_nibble(&mut self, nibble: u8) -> Result<&'a [u8], ReadEof> {
        let end = self.scope.data[self.offset..]
            .iter()
            .position(|&b| (b >> 4) == nibble || (b & 0xF) == nibble)
            .ok_or(ReadEof {})?;
        self.read_slice(end + 1)
    }

    pub fn read_scope(&mut self, length: usize) -> Result<ReadScope<'a>, ReadEof> {
        if let Ok(scope) = self.scope.offset_length(self.offset, length) {
            self.offset += length;
            Ok(scope)
        } else {
            Err(ReadEof {})
        }
    }

    pub fn read_slice(&mut self, length: usize) -> Result<&'a [u8], ReadEof> {
        let scope = self.read_scope(length)?;
        Ok(scope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u16be() {
        let mut ctxt = ReadScope::new(&[0x12, 0x34]).ctxt();
        assert_eq!(ctxt.read_u16be().unwrap(), 0x1234);
        assert!(ctxt.read_u8().is_err());
    }

    #[test]
    fn test_read_u24be() {
        let mut ctxt = ReadScope::new(&[0x12, 0x34, 0x56]).ctxt();
        assert_eq!(ctxt.read_u24be().unwrap(), 0x123456);
    }

    #[test]
    fn test_read_i16be() {
        let mut ctxt = ReadScope::new(&[0xFF, 0xFE]).ctxt();
        assert_eq!(ctxt.read_i16be().unwrap(), -2);
    }

    #[test]
    fn test_read_offset_widths() {
        let data = [0x01, 0x02, 0x03, 0x04];
        assert_eq!(ReadScope::new(&data).ctxt().read_offset(1).unwrap(), 0x01);
        assert_eq!(ReadScope::new(&data).ctxt().read_offset(2).unwrap(), 0x0102);
        assert_eq!(
            ReadScope::new(&data).ctxt().read_offset(3).unwrap(),
            0x010203
        );
        assert_eq!(
            ReadScope::new(&data).ctxt().read_offset(4).unwrap(),
            0x01020304
        );
        assert_eq!(
            ReadScope::new(&data).ctxt().read_offset(5),
            Err(ParseError::InvalidOffsetSize)
        );
    }

    #[test]
    fn test_offset_length_past_end() {
        let scope = ReadScope::new(&[0; 4]);
        assert_eq!(scope.offset_length(8, 1), Err(ParseError::BadOffset));
        assert_eq!(scope.offset_length(2, 4), Err(ParseError::BadEof));
    }

    #[test]
    fn test_pos_tracks_base() {
        let data = [0u8; 16];
        let scope = ReadScope::new(&data).offset(4);
        let mut ctxt = scope.ctxt();
        ctxt.read_u16be().unwrap();
        assert_eq!(ctxt.pos(), 6);
    }
}
