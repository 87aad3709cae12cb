// ============ Tips Codec ============
// Optional aggregator fee appended to order args. The record carries no
// tag; the pool model decides which shape applies.

use serde::{Deserialize, Serialize};

use crate::error::CodecResult;
use crate::layout::{Field, Layout, LayoutReader, LayoutWriter};
use crate::uint::UintWidth;

pub static TIPS_LAYOUT: Layout = Layout::new(
    "tips",
    &[
        Field::uint("tips", UintWidth::U64),
        Field::uint("tips_sudt", UintWidth::U128),
    ],
);

pub static LIQUIDITY_SUDT_SUDT_TIPS_LAYOUT: Layout = Layout::new(
    "liquidity_sudt_sudt_tips",
    &[
        Field::uint("tips_ckb", UintWidth::U64),
        Field::uint("tips_sudt_x", UintWidth::U128),
        Field::uint("tips_sudt_y", UintWidth::U128),
    ],
);

pub static SWAP_SUDT_SUDT_TIPS_LAYOUT: Layout = Layout::new(
    "swap_sudt_sudt_tips",
    &[
        Field::uint("tips_ckb", UintWidth::U64),
        Field::uint("tips_sudt", UintWidth::U128),
    ],
);

/// CKB/sudt pools: tips in CKB plus tips in the pool's token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipsArgs {
    pub tips: u64,
    pub tips_sudt: u128,
}

/// Sudt/sudt liquidity orders tip in CKB and in both tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudtSudtTipsArgs {
    pub tips_ckb: u64,
    pub tips_sudt_x: u128,
    pub tips_sudt_y: u128,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TipsCodec;

impl TipsCodec {
    pub const fn new() -> Self {
        Self
    }

    pub fn encode_args(&self, tips: &TipsArgs) -> CodecResult<String> {
        let mut w = TIPS_LAYOUT.writer();
        self.write(&mut w, tips)?;
        w.finish_hex()
    }

    pub fn decode_args(&self, hex: &str) -> CodecResult<TipsArgs> {
        let bytes = TIPS_LAYOUT.decode_hex(hex)?;
        let mut r = TIPS_LAYOUT.reader(&bytes)?;
        let tips = self.read(&mut r)?;
        r.finish()?;
        Ok(tips)
    }

    pub fn encode_liquidity_sudt_sudt_args(&self, tips: &SudtSudtTipsArgs) -> CodecResult<String> {
        let mut w = LIQUIDITY_SUDT_SUDT_TIPS_LAYOUT.writer();
        self.write_sudt_sudt(&mut w, tips)?;
        w.finish_hex()
    }

    pub fn decode_liquidity_sudt_sudt_args(&self, hex: &str) -> CodecResult<SudtSudtTipsArgs> {
        let bytes = LIQUIDITY_SUDT_SUDT_TIPS_LAYOUT.decode_hex(hex)?;
        let mut r = LIQUIDITY_SUDT_SUDT_TIPS_LAYOUT.reader(&bytes)?;
        let tips = self.read_sudt_sudt(&mut r)?;
        r.finish()?;
        Ok(tips)
    }

    /// Swap orders in sudt/sudt pools tip in CKB and the input token only.
    pub fn encode_swap_sudt_sudt_args(&self, tips: &TipsArgs) -> CodecResult<String> {
        let mut w = SWAP_SUDT_SUDT_TIPS_LAYOUT.writer();
        self.write_swap_sudt_sudt(&mut w, tips)?;
        w.finish_hex()
    }

    pub fn decode_swap_sudt_sudt_args(&self, hex: &str) -> CodecResult<TipsArgs> {
        let bytes = SWAP_SUDT_SUDT_TIPS_LAYOUT.decode_hex(hex)?;
        let mut r = SWAP_SUDT_SUDT_TIPS_LAYOUT.reader(&bytes)?;
        let tips = self.read_swap_sudt_sudt(&mut r)?;
        r.finish()?;
        Ok(tips)
    }

    // ============ Embedded Forms ============
    // Used by the order codecs, which carry the tips record as their tail.

    pub(crate) fn write(&self, w: &mut LayoutWriter, tips: &TipsArgs) -> CodecResult<()> {
        w.u64("tips", tips.tips)?.u128("tips_sudt", tips.tips_sudt)?;
        Ok(())
    }

    pub(crate) fn read(&self, r: &mut LayoutReader<'_>) -> CodecResult<TipsArgs> {
        Ok(TipsArgs {
            tips: r.u64("tips")?,
            tips_sudt: r.u128("tips_sudt")?,
        })
    }

    pub(crate) fn write_swap_sudt_sudt(
        &self,
        w: &mut LayoutWriter,
        tips: &TipsArgs,
    ) -> CodecResult<()> {
        w.u64("tips_ckb", tips.tips)?.u128("tips_sudt", tips.tips_sudt)?;
        Ok(())
    }

    pub(crate) fn read_swap_sudt_sudt(&self, r: &mut LayoutReader<'_>) -> CodecResult<TipsArgs> {
        Ok(TipsArgs {
            tips: r.u64("tips_ckb")?,
            tips_sudt: r.u128("tips_sudt")?,
        })
    }

    pub(crate) fn write_sudt_sudt(
        &self,
        w: &mut LayoutWriter,
        tips: &SudtSudtTipsArgs,
    ) -> CodecResult<()> {
        w.u64("tips_ckb", tips.tips_ckb)?
            .u128("tips_sudt_x", tips.tips_sudt_x)?
            .u128("tips_sudt_y", tips.tips_sudt_y)?;
        Ok(())
    }

    pub(crate) fn read_sudt_sudt(&self, r: &mut LayoutReader<'_>) -> CodecResult<SudtSudtTipsArgs> {
        Ok(SudtSudtTipsArgs {
            tips_ckb: r.u64("tips_ckb")?,
            tips_sudt_x: r.u128("tips_sudt_x")?,
            tips_sudt_y: r.u128("tips_sudt_y")?,
        })
    }
}
