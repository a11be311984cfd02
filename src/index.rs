//! CFF INDEX tables
//!
//! An INDEX is a count-prefixed table of variable-length byte strings. It
//! begins with a `u16` count. When the count is zero the INDEX occupies
//! exactly those two bytes. Otherwise an offset-size byte follows, then
//! count+1 offsets of that width. Offsets are 1-based from the byte after
//! the offset array, so the data region starts at the position following
//! the offset array minus one.

use crate::binary::read::{ReadBinary, ReadCtxt};
use crate::error::ParseError;

/// A decoded INDEX holding one owned byte string per entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexTable {
    objects: Vec<Vec<u8>>,
}

impl IndexTable {
    pub fn empty() -> IndexTable {
        IndexTable {
            objects: Vec::new(),
        }
    }

    pub fn from_objects(objects: Vec<Vec<u8>>) -> IndexTable {
        IndexTable { objects }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.objects.get(index).map(Vec::as_slice)
    }

    pub fn read_object(&self, index: usize) -> Result<&[u8], ParseError> {
        self.get(index).ok_or(ParseError::BadIndex)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.objects.iter().map(Vec::as_slice)
    }
}

impl ReadBinary for IndexTable {
    type HostType = IndexTable;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<IndexTable, ParseError> {
        let count = usize::from(ctxt.read_u16be()?);
        if count == 0 {
            return Ok(IndexTable::empty());
        }

        let off_size = ctxt.read_u8()?;
        if !(1..=4).contains(&off_size) {
            return Err(ParseError::InvalidOffsetSize);
        }

        // The offset array is bounds checked as a whole before any
        // allocation proportional to count takes place.
        let mut offsets = Vec::with_capacity(count + 1);
        let mut offset_array = ctxt
            .read_scope((count + 1) * usize::from(off_size))?
            .ctxt();
        for _ in 0..=count {
            offsets.push(offset_array.read_offset(off_size)? as usize);
        }

        // Offsets are 1-based and must not step backwards.
        if offsets[0] < 1 || offsets.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(ParseError::CorruptIndex);
        }

        let data = ctxt.read_slice(offsets[count] - 1)?;
        let objects = offsets
            .windows(2)
            .map(|pair| data[pair[0] - 1..pair[1] - 1].to_vec())
            .collect();

        Ok(IndexTable { objects })
    }
}
