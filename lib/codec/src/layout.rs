// ============ Layout Tables ============
// Every wire format is a const table of named fixed-width fields. Offsets
// are derived from the table, so reordering fields between layout
// generations cannot leave a stale hand-written index behind.

use core::ops::Range;

use tracing::{debug, trace};

use crate::error::{CodecError, CodecResult};
use crate::hash::{Byte20, Byte32};
use crate::hex_str::{decode_hex, encode_hex};
use crate::uint::{decode_uint, encode_uint, UintWidth};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub width: usize,
}

impl Field {
    pub const fn new(name: &'static str, width: usize) -> Self {
        Self { name, width }
    }

    pub const fn hash32(name: &'static str) -> Self {
        Self::new(name, Byte32::LEN)
    }

    pub const fn hash20(name: &'static str) -> Self {
        Self::new(name, Byte20::LEN)
    }

    pub const fn uint(name: &'static str, width: UintWidth) -> Self {
        Self::new(name, width.bytes())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Layout {
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self { name, fields }
    }

    pub const fn size(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].width;
            i += 1;
        }
        total
    }

    /// Byte range of a named field.
    pub fn offset_of(&self, name: &str) -> Option<Range<usize>> {
        let mut start = 0;
        for field in self.fields {
            if field.name == name {
                return Some(start..start + field.width);
            }
            start += field.width;
        }
        None
    }

    /// Decodes hex and checks the total length before any field is read.
    pub fn decode_hex(&'static self, text: &str) -> CodecResult<Vec<u8>> {
        let bytes = decode_hex(self.name, text)?;
        self.check_len(&bytes)?;
        trace!(layout = self.name, len = bytes.len(), "decoding cell blob");
        Ok(bytes)
    }

    pub fn check_len(&self, bytes: &[u8]) -> CodecResult<()> {
        if bytes.len() != self.size() {
            debug!(
                layout = self.name,
                expected = self.size(),
                actual = bytes.len(),
                "rejecting blob with wrong length"
            );
            return Err(CodecError::length(self.name, self.size(), bytes.len()));
        }
        Ok(())
    }

    pub fn reader<'a>(&'static self, bytes: &'a [u8]) -> CodecResult<LayoutReader<'a>> {
        self.check_len(bytes)?;
        Ok(LayoutReader {
            layout: self,
            bytes,
            index: 0,
            offset: 0,
        })
    }

    pub fn writer(&'static self) -> LayoutWriter {
        LayoutWriter {
            layout: self,
            buf: Vec::with_capacity(self.size()),
            index: 0,
        }
    }
}

fn out_of_order(layout: &Layout, name: &'static str) -> CodecError {
    CodecError::data(name, format!("not the next field of {}", layout.name))
}

// ============ Reader ============

/// Sequential, field-checked view over a blob whose length already matches.
pub struct LayoutReader<'a> {
    layout: &'static Layout,
    bytes: &'a [u8],
    index: usize,
    offset: usize,
}

impl<'a> LayoutReader<'a> {
    fn next(&mut self, name: &'static str) -> CodecResult<&'a [u8]> {
        let field = self
            .layout
            .fields
            .get(self.index)
            .filter(|f| f.name == name)
            .ok_or_else(|| out_of_order(self.layout, name))?;
        let end = self.offset + field.width;
        let slice = self
            .bytes
            .get(self.offset..end)
            .ok_or_else(|| {
                let left = self.bytes.len().saturating_sub(self.offset);
                CodecError::length(name, field.width, left)
            })?;
        self.index += 1;
        self.offset = end;
        Ok(slice)
    }

    pub fn raw(&mut self, name: &'static str) -> CodecResult<&'a [u8]> {
        self.next(name)
    }

    pub fn hash32(&mut self, name: &'static str) -> CodecResult<Byte32> {
        Byte32::from_slice(name, self.next(name)?)
    }

    pub fn hash20(&mut self, name: &'static str) -> CodecResult<Byte20> {
        Byte20::from_slice(name, self.next(name)?)
    }

    pub fn u8(&mut self, name: &'static str) -> CodecResult<u8> {
        Ok(decode_uint(name, self.next(name)?, UintWidth::U8)? as u8)
    }

    pub fn u64(&mut self, name: &'static str) -> CodecResult<u64> {
        Ok(decode_uint(name, self.next(name)?, UintWidth::U64)? as u64)
    }

    pub fn u128(&mut self, name: &'static str) -> CodecResult<u128> {
        decode_uint(name, self.next(name)?, UintWidth::U128)
    }

    /// Confirms every field was consumed.
    pub fn finish(self) -> CodecResult<()> {
        if self.index != self.layout.fields.len() {
            return Err(CodecError::data(self.layout.name, "fields left unread"));
        }
        Ok(())
    }
}

// ============ Writer ============

/// Sequential writer; each field must be written in table order.
pub struct LayoutWriter {
    layout: &'static Layout,
    buf: Vec<u8>,
    index: usize,
}

impl LayoutWriter {
    pub fn raw(&mut self, name: &'static str, bytes: &[u8]) -> CodecResult<&mut Self> {
        let field = self
            .layout
            .fields
            .get(self.index)
            .filter(|f| f.name == name)
            .ok_or_else(|| out_of_order(self.layout, name))?;
        if bytes.len() != field.width {
            return Err(CodecError::length(name, field.width, bytes.len()));
        }
        self.buf.extend_from_slice(bytes);
        self.index += 1;
        Ok(self)
    }

    pub fn hash32(&mut self, name: &'static str, hash: &Byte32) -> CodecResult<&mut Self> {
        self.raw(name, hash.as_bytes())
    }

    pub fn hash20(&mut self, name: &'static str, hash: &Byte20) -> CodecResult<&mut Self> {
        self.raw(name, hash.as_bytes())
    }

    pub fn u8(&mut self, name: &'static str, value: u8) -> CodecResult<&mut Self> {
        self.raw(name, &[value])
    }

    pub fn u64(&mut self, name: &'static str, value: u64) -> CodecResult<&mut Self> {
        self.raw(name, &value.to_le_bytes())
    }

    pub fn u128(&mut self, name: &'static str, value: u128) -> CodecResult<&mut Self> {
        self.raw(name, &value.to_le_bytes())
    }

    /// Range-checked write for values that arrive wider than the field.
    pub fn uint(
        &mut self,
        name: &'static str,
        value: u128,
        width: UintWidth,
    ) -> CodecResult<&mut Self> {
        let bytes = encode_uint(name, value, width)?;
        self.raw(name, &bytes)
    }

    pub fn finish(self) -> CodecResult<Vec<u8>> {
        if self.index != self.layout.fields.len() {
            return Err(CodecError::data(self.layout.name, "fields left unwritten"));
        }
        debug_assert_eq!(self.buf.len(), self.layout.size());
        Ok(self.buf)
    }

    pub fn finish_hex(self) -> CodecResult<String> {
        Ok(encode_hex(&self.finish()?))
    }
}
