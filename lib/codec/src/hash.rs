// ============ Hash Types ============
// Script hashes (32 bytes) and the 20-byte fragments some layouts keep.

use core::fmt;
use core::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CodecError, CodecResult};
use crate::hex_str::{decode_hex, decode_prefixed_hex, encode_hex};

macro_rules! fixed_hash {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            /// Parses `0x`-prefixed hex of exactly `LEN` bytes.
            pub fn from_hex(field: &'static str, text: &str) -> CodecResult<Self> {
                let bytes = decode_prefixed_hex(field, text)?;
                Self::from_slice(field, &bytes)
            }

            pub fn from_slice(field: &'static str, bytes: &[u8]) -> CodecResult<Self> {
                let array: [u8; $len] = bytes
                    .try_into()
                    .map_err(|_| CodecError::length(field, $len, bytes.len()))?;
                Ok(Self(array))
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            pub fn to_hex(&self) -> String {
                encode_hex(&self.0)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = CodecError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                Self::from_hex(stringify!($name), text)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(de::Error::custom)
            }
        }
    };
}

fixed_hash!(
    /// Full blake2b-256 script hash (lock hash or type hash).
    Byte32,
    32
);

fixed_hash!(
    /// Leading 20 bytes of a script hash, as stored by the info cell and
    /// the legacy liquidity order.
    Byte20,
    20
);

impl Byte20 {
    /// First 20 bytes of a full script hash.
    pub fn truncate(hash: &Byte32) -> Self {
        let mut out = [0u8; 20];
        out.copy_from_slice(&hash.0[..20]);
        Self(out)
    }

    /// Accepts either a full 32-byte hash or an already truncated fragment.
    /// Anything else is rejected rather than padded or cut short.
    pub fn from_hash_hex(field: &'static str, text: &str) -> CodecResult<Self> {
        let bytes = decode_hex(field, text)?;
        match bytes.len() {
            Byte32::LEN => Ok(Self::truncate(&Byte32::from_slice(field, &bytes)?)),
            Self::LEN => Self::from_slice(field, &bytes),
            actual => Err(CodecError::length(field, Byte32::LEN, actual)),
        }
    }
}

impl From<&Byte32> for Byte20 {
    fn from(hash: &Byte32) -> Self {
        Self::truncate(hash)
    }
}
