// ============ Hex Helpers ============
// Cell args and data travel as `0x`-prefixed lowercase hex.

use crate::error::{CodecError, CodecResult};

pub const HEX_PREFIX: &str = "0x";

/// `0x` + lowercase hex of `bytes`.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(HEX_PREFIX.len() + bytes.len() * 2);
    out.push_str(HEX_PREFIX);
    out.push_str(&hex::encode(bytes));
    out
}

/// Strips an optional `0x`/`0X` prefix.
pub fn strip_prefix(text: &str) -> &str {
    text.strip_prefix(HEX_PREFIX)
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Decodes a cell blob. The prefix is optional here, indexers differ on it.
pub fn decode_hex(field: &'static str, text: &str) -> CodecResult<Vec<u8>> {
    hex::decode(strip_prefix(text)).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => CodecError::data(
            field,
            format!("invalid hex character {c:?} at position {index}"),
        ),
        hex::FromHexError::OddLength => CodecError::data(field, "odd number of hex digits"),
        other => CodecError::data(field, other.to_string()),
    })
}

/// Decodes a blob that must be exactly `expected` bytes long.
pub fn decode_hex_exact(field: &'static str, text: &str, expected: usize) -> CodecResult<Vec<u8>> {
    let bytes = decode_hex(field, text)?;
    if bytes.len() != expected {
        return Err(CodecError::length(field, expected, bytes.len()));
    }
    Ok(bytes)
}

/// Like [`decode_hex`] but rejects input without the `0x` prefix.
pub fn decode_prefixed_hex(field: &'static str, text: &str) -> CodecResult<Vec<u8>> {
    if !text.starts_with(HEX_PREFIX) {
        return Err(CodecError::data(field, "missing 0x prefix"));
    }
    decode_hex(field, text)
}
