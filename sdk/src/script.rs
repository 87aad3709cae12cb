// ============ CKB Script ============
// Lock/type script value and its on-chain hash.
//
// The script hash is blake2b-256 with the "ckb-default-hash" personalization
// over the molecule `Script` table:
//   total_size | offset(code_hash) | offset(hash_type) | offset(args)
//   | code_hash(32) | hash_type(1) | args_len(u32) | args

use blake2b_simd::Params;
use serde::{Deserialize, Serialize};

use ckb_amm_codec::{decode_hex, Byte32, CodecResult};

const CKB_HASH_PERSONALIZATION: &[u8] = b"ckb-default-hash";

const MOLECULE_HEADER_SIZE: usize = 4 * 4;

pub fn ckb_blake2b(data: &[u8]) -> [u8; 32] {
    let result = Params::new()
        .hash_length(32)
        .personal(CKB_HASH_PERSONALIZATION)
        .hash(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(result.as_bytes());
    hash
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashType {
    Data,
    Type,
    Data1,
    Data2,
}

impl HashType {
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Data => 0,
            Self::Type => 1,
            Self::Data1 => 2,
            Self::Data2 => 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub code_hash: Byte32,
    pub hash_type: HashType,
    /// `0x`-prefixed hex, as produced by the cell codec.
    pub args: String,
}

impl Script {
    pub fn new(code_hash: Byte32, hash_type: HashType, args: String) -> Self {
        Self {
            code_hash,
            hash_type,
            args,
        }
    }

    pub fn args_bytes(&self) -> CodecResult<Vec<u8>> {
        decode_hex("script_args", &self.args)
    }

    /// Molecule serialization of the `Script` table.
    pub fn to_molecule(&self) -> CodecResult<Vec<u8>> {
        let args = self.args_bytes()?;
        let code_hash_offset = MOLECULE_HEADER_SIZE;
        let hash_type_offset = code_hash_offset + Byte32::LEN;
        let args_offset = hash_type_offset + 1;
        let total = args_offset + 4 + args.len();

        let mut buf = Vec::with_capacity(total);
        for word in [total, code_hash_offset, hash_type_offset, args_offset] {
            buf.extend_from_slice(&(word as u32).to_le_bytes());
        }
        buf.extend_from_slice(self.code_hash.as_bytes());
        buf.push(self.hash_type.as_byte());
        buf.extend_from_slice(&(args.len() as u32).to_le_bytes());
        buf.extend_from_slice(&args);
        Ok(buf)
    }

    pub fn calc_script_hash(&self) -> CodecResult<Byte32> {
        Ok(Byte32(ckb_blake2b(&self.to_molecule()?)))
    }
}
