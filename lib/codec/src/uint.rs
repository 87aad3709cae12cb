// ============ Primitive Integer Codec ============
// Fixed-width unsigned little-endian integers. u128 carries every width
// without precision loss; the width decides how many bytes go on the wire.

use crate::error::{CodecError, CodecResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UintWidth {
    U8,
    U64,
    U128,
}

impl UintWidth {
    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U64 => 64,
            Self::U128 => 128,
        }
    }

    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    pub const fn max_value(self) -> u128 {
        match self {
            Self::U8 => u8::MAX as u128,
            Self::U64 => u64::MAX as u128,
            Self::U128 => u128::MAX,
        }
    }

    fn out_of_range(self, field: &'static str, value: impl ToString) -> CodecError {
        CodecError::OutOfRange {
            field,
            value: value.to_string(),
            width_bits: self.bits(),
        }
    }
}

pub fn encode_uint(field: &'static str, value: u128, width: UintWidth) -> CodecResult<Vec<u8>> {
    if value > width.max_value() {
        return Err(width.out_of_range(field, value));
    }
    Ok(value.to_le_bytes()[..width.bytes()].to_vec())
}

pub fn decode_uint(field: &'static str, bytes: &[u8], width: UintWidth) -> CodecResult<u128> {
    if bytes.len() != width.bytes() {
        return Err(CodecError::length(field, width.bytes(), bytes.len()));
    }
    let mut buf = [0u8; 16];
    buf[..bytes.len()].copy_from_slice(bytes);
    Ok(u128::from_le_bytes(buf))
}

/// Parses a decimal amount supplied by a business caller.
///
/// Callers pass amounts above 2^53 as strings, so this is where negative and
/// oversized values are caught before any byte is produced.
pub fn parse_uint(field: &'static str, text: &str, width: UintWidth) -> CodecResult<u128> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CodecError::data(field, "empty amount"));
    }
    let digits = text.strip_prefix('+').unwrap_or(text);
    if let Some(rest) = digits.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(width.out_of_range(field, text));
        }
        return Err(CodecError::data(field, format!("not a decimal integer: {text:?}")));
    }
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::data(field, format!("not a decimal integer: {text:?}")));
    }
    // All digits, so the only way u128 parsing fails is overflow.
    let value: u128 = digits.parse().map_err(|_| width.out_of_range(field, text))?;
    if value > width.max_value() {
        return Err(width.out_of_range(field, text));
    }
    Ok(value)
}
