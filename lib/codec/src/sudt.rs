// ============ SUDT Amount Codec ============
// A SUDT cell's data is its balance: one u128, little-endian, 16 bytes.
// Pool cells and both order cells carry exactly this payload.

use serde::{Deserialize, Serialize};

use crate::error::CodecResult;
use crate::layout::{Field, Layout};
use crate::uint::UintWidth;

pub static SUDT_AMOUNT_LAYOUT: Layout =
    Layout::new("sudt_amount", &[Field::uint("sudt_amount", UintWidth::U128)]);

/// Uniform data interface shared by every cell kind.
pub trait CellDataCodec {
    type Data;

    fn encode_data(&self, data: &Self::Data) -> CodecResult<String>;

    fn decode_data(&self, hex: &str) -> CodecResult<Self::Data>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudtAmountData {
    pub sudt_amount: u128,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SudtAmountCodec;

impl SudtAmountCodec {
    pub const fn new() -> Self {
        Self
    }

    /// `0x` + 32 hex digits.
    pub fn encode_amount(&self, amount: u128) -> CodecResult<String> {
        let mut w = SUDT_AMOUNT_LAYOUT.writer();
        w.u128("sudt_amount", amount)?;
        w.finish_hex()
    }

    pub fn decode_amount(&self, hex: &str) -> CodecResult<u128> {
        let bytes = SUDT_AMOUNT_LAYOUT.decode_hex(hex)?;
        let mut r = SUDT_AMOUNT_LAYOUT.reader(&bytes)?;
        let amount = r.u128("sudt_amount")?;
        r.finish()?;
        Ok(amount)
    }
}

impl CellDataCodec for SudtAmountCodec {
    type Data = SudtAmountData;

    fn encode_data(&self, data: &SudtAmountData) -> CodecResult<String> {
        self.encode_amount(data.sudt_amount)
    }

    fn decode_data(&self, hex: &str) -> CodecResult<SudtAmountData> {
        Ok(SudtAmountData {
            sudt_amount: self.decode_amount(hex)?,
        })
    }
}

// ============ Pool / SUDT Cell Codec ============

/// Token cell held by a pool. Same payload as any SUDT cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolCellCodec {
    sudt: SudtAmountCodec,
}

impl PoolCellCodec {
    pub const fn new(sudt: SudtAmountCodec) -> Self {
        Self { sudt }
    }
}

impl CellDataCodec for PoolCellCodec {
    type Data = SudtAmountData;

    fn encode_data(&self, data: &SudtAmountData) -> CodecResult<String> {
        self.sudt.encode_data(data)
    }

    fn decode_data(&self, hex: &str) -> CodecResult<SudtAmountData> {
        self.sudt.decode_data(hex)
    }
}
