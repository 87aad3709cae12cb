// ============ Info Cell Codec ============
// The info cell tracks a pool's reserves and total liquidity.
//
// args: hash20 || info_type_hash20                          (40 bytes)
// data: ckb_reserve || sudt_reserve || total_liquidity
//       || liquidity_sudt_type_hash20                       (68 bytes)
//
// Sudt/sudt pools reuse the data layout with the first two reserves read as
// sudt_x and sudt_y.

use serde::{Deserialize, Serialize};

use crate::error::CodecResult;
use crate::hash::Byte20;
use crate::layout::{Field, Layout};
use crate::sudt::CellDataCodec;
use crate::uint::UintWidth;

pub static INFO_CELL_ARGS_LAYOUT: Layout = Layout::new(
    "info_cell_args",
    &[Field::hash20("hash"), Field::hash20("info_type_hash")],
);

pub static INFO_CELL_DATA_LAYOUT: Layout = Layout::new(
    "info_cell_data",
    &[
        Field::uint("ckb_reserve", UintWidth::U128),
        Field::uint("sudt_reserve", UintWidth::U128),
        Field::uint("total_liquidity", UintWidth::U128),
        Field::hash20("liquidity_sudt_type_hash20"),
    ],
);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCellArgs {
    pub hash: Byte20,
    pub info_type_hash: Byte20,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCellData {
    pub ckb_reserve: u128,
    pub sudt_reserve: u128,
    pub total_liquidity: u128,
    pub liquidity_sudt_type_hash20: Byte20,
}

impl InfoCellData {
    /// Reserve of token x in a sudt/sudt pool.
    pub fn sudt_x_reserve(&self) -> u128 {
        self.ckb_reserve
    }

    /// Reserve of token y in a sudt/sudt pool.
    pub fn sudt_y_reserve(&self) -> u128 {
        self.sudt_reserve
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InfoCellCodec;

impl InfoCellCodec {
    pub const fn new() -> Self {
        Self
    }

    /// Keeps the first 20 bytes of each hash. Either argument may be a full
    /// 32-byte script hash or an already truncated fragment.
    pub fn encode_args(&self, hash: &str, info_type_hash: &str) -> CodecResult<String> {
        let args = InfoCellArgs {
            hash: Byte20::from_hash_hex("hash", hash)?,
            info_type_hash: Byte20::from_hash_hex("info_type_hash", info_type_hash)?,
        };
        self.encode_info_args(&args)
    }

    pub fn encode_info_args(&self, args: &InfoCellArgs) -> CodecResult<String> {
        let mut w = INFO_CELL_ARGS_LAYOUT.writer();
        w.hash20("hash", &args.hash)?
            .hash20("info_type_hash", &args.info_type_hash)?;
        w.finish_hex()
    }

    pub fn decode_args(&self, hex: &str) -> CodecResult<InfoCellArgs> {
        let bytes = INFO_CELL_ARGS_LAYOUT.decode_hex(hex)?;
        let mut r = INFO_CELL_ARGS_LAYOUT.reader(&bytes)?;
        let args = InfoCellArgs {
            hash: r.hash20("hash")?,
            info_type_hash: r.hash20("info_type_hash")?,
        };
        r.finish()?;
        Ok(args)
    }

    pub fn encode_reserves(
        &self,
        ckb_reserve: u128,
        sudt_reserve: u128,
        total_liquidity: u128,
        liquidity_sudt_type_hash: &str,
    ) -> CodecResult<String> {
        let liquidity_sudt_type_hash20 =
            Byte20::from_hash_hex("liquidity_sudt_type_hash20", liquidity_sudt_type_hash)?;
        self.encode_data(&InfoCellData {
            ckb_reserve,
            sudt_reserve,
            total_liquidity,
            liquidity_sudt_type_hash20,
        })
    }
}

impl CellDataCodec for InfoCellCodec {
    type Data = InfoCellData;

    fn encode_data(&self, data: &InfoCellData) -> CodecResult<String> {
        let mut w = INFO_CELL_DATA_LAYOUT.writer();
        w.u128("ckb_reserve", data.ckb_reserve)?
            .u128("sudt_reserve", data.sudt_reserve)?
            .u128("total_liquidity", data.total_liquidity)?
            .hash20("liquidity_sudt_type_hash20", &data.liquidity_sudt_type_hash20)?;
        w.finish_hex()
    }

    fn decode_data(&self, hex: &str) -> CodecResult<InfoCellData> {
        let bytes = INFO_CELL_DATA_LAYOUT.decode_hex(hex)?;
        let mut r = INFO_CELL_DATA_LAYOUT.reader(&bytes)?;
        let data = InfoCellData {
            ckb_reserve: r.u128("ckb_reserve")?,
            sudt_reserve: r.u128("sudt_reserve")?,
            total_liquidity: r.u128("total_liquidity")?,
            liquidity_sudt_type_hash20: r.hash20("liquidity_sudt_type_hash20")?,
        };
        r.finish()?;
        Ok(data)
    }
}
