// ============ Liquidity Order Cell Codec ============
// Add/remove-liquidity orders. Three args layouts, chosen by the caller:
//
// legacy    user_lock_hash | version | amount0 | amount1 | info_type_hash20
// ckb-sudt  info_type_hash | user_lock_hash | version | sudt_min | ckb_min(u64) | tips
// sudt-sudt info_type_hash | user_lock_hash | version | sudt_x_min | sudt_y_min | tips(x, y)
//
// Cell data is the SUDT amount the order locks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CodecResult;
use crate::hash::{Byte20, Byte32};
use crate::layout::{Field, Layout};
use crate::order::LiquidityOrderLayout;
use crate::sudt::{CellDataCodec, SudtAmountCodec, SudtAmountData};
use crate::tips::{SudtSudtTipsArgs, TipsArgs, TipsCodec};
use crate::uint::UintWidth;

pub static LEGACY_LIQUIDITY_ARGS_LAYOUT: Layout = Layout::new(
    "legacy_liquidity_args",
    &[
        Field::hash32("user_lock_hash"),
        Field::uint("version", UintWidth::U8),
        Field::uint("amount0", UintWidth::U128),
        Field::uint("amount1", UintWidth::U128),
        Field::hash20("info_type_hash20"),
    ],
);

pub static LIQUIDITY_ARGS_LAYOUT: Layout = Layout::new(
    "liquidity_args",
    &[
        Field::hash32("info_type_hash"),
        Field::hash32("user_lock_hash"),
        Field::uint("version", UintWidth::U8),
        Field::uint("sudt_min", UintWidth::U128),
        Field::uint("ckb_min", UintWidth::U64),
        Field::uint("tips", UintWidth::U64),
        Field::uint("tips_sudt", UintWidth::U128),
    ],
);

pub static SUDT_SUDT_LIQUIDITY_ARGS_LAYOUT: Layout = Layout::new(
    "sudt_sudt_liquidity_args",
    &[
        Field::hash32("info_type_hash"),
        Field::hash32("user_lock_hash"),
        Field::uint("version", UintWidth::U8),
        Field::uint("sudt_x_min", UintWidth::U128),
        Field::uint("sudt_y_min", UintWidth::U128),
        Field::uint("tips_ckb", UintWidth::U64),
        Field::uint("tips_sudt_x", UintWidth::U128),
        Field::uint("tips_sudt_y", UintWidth::U128),
    ],
);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyLiquidityArgs {
    pub user_lock_hash: Byte32,
    pub version: u8,
    pub amount0: u128,
    pub amount1: u128,
    pub info_type_hash20: Byte20,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityArgs {
    pub info_type_hash: Byte32,
    pub user_lock_hash: Byte32,
    pub version: u8,
    pub sudt_min: u128,
    pub ckb_min: u64,
    pub tips: TipsArgs,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudtSudtLiquidityArgs {
    pub info_type_hash: Byte32,
    pub user_lock_hash: Byte32,
    pub version: u8,
    pub sudt_x_min: u128,
    pub sudt_y_min: u128,
    pub tips: SudtSudtTipsArgs,
}

/// Externally tagged in serde (`{"ckb-sudt": {..}}`) so u128 fields are never
/// buffered ahead of the tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiquidityOrderArgs {
    Legacy(LegacyLiquidityArgs),
    CkbSudt(LiquidityArgs),
    SudtSudt(SudtSudtLiquidityArgs),
}

impl LiquidityOrderArgs {
    pub fn layout(&self) -> LiquidityOrderLayout {
        match self {
            Self::Legacy(_) => LiquidityOrderLayout::Legacy,
            Self::CkbSudt(_) => LiquidityOrderLayout::CkbSudt,
            Self::SudtSudt(_) => LiquidityOrderLayout::SudtSudt,
        }
    }

    pub fn user_lock_hash(&self) -> &Byte32 {
        match self {
            Self::Legacy(args) => &args.user_lock_hash,
            Self::CkbSudt(args) => &args.user_lock_hash,
            Self::SudtSudt(args) => &args.user_lock_hash,
        }
    }

    pub fn version(&self) -> u8 {
        match self {
            Self::Legacy(args) => args.version,
            Self::CkbSudt(args) => args.version,
            Self::SudtSudt(args) => args.version,
        }
    }

    /// The pool's info type hash, truncated to 20 bytes for the legacy layout.
    pub fn info_type_hash20(&self) -> Byte20 {
        match self {
            Self::Legacy(args) => args.info_type_hash20,
            Self::CkbSudt(args) => Byte20::truncate(&args.info_type_hash),
            Self::SudtSudt(args) => Byte20::truncate(&args.info_type_hash),
        }
    }
}

pub fn args_layout(layout: LiquidityOrderLayout) -> &'static Layout {
    match layout {
        LiquidityOrderLayout::Legacy => &LEGACY_LIQUIDITY_ARGS_LAYOUT,
        LiquidityOrderLayout::CkbSudt => &LIQUIDITY_ARGS_LAYOUT,
        LiquidityOrderLayout::SudtSudt => &SUDT_SUDT_LIQUIDITY_ARGS_LAYOUT,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiquidityCellCodec {
    sudt: SudtAmountCodec,
    tips: TipsCodec,
}

impl LiquidityCellCodec {
    pub const fn new(sudt: SudtAmountCodec, tips: TipsCodec) -> Self {
        Self { sudt, tips }
    }

    pub fn encode_args(&self, args: &LiquidityOrderArgs) -> CodecResult<String> {
        let mut w = args_layout(args.layout()).writer();
        match args {
            LiquidityOrderArgs::Legacy(a) => {
                w.hash32("user_lock_hash", &a.user_lock_hash)?
                    .u8("version", a.version)?
                    .u128("amount0", a.amount0)?
                    .u128("amount1", a.amount1)?
                    .hash20("info_type_hash20", &a.info_type_hash20)?;
            }
            LiquidityOrderArgs::CkbSudt(a) => {
                w.hash32("info_type_hash", &a.info_type_hash)?
                    .hash32("user_lock_hash", &a.user_lock_hash)?
                    .u8("version", a.version)?
                    .u128("sudt_min", a.sudt_min)?
                    .u64("ckb_min", a.ckb_min)?;
                self.tips.write(&mut w, &a.tips)?;
            }
            LiquidityOrderArgs::SudtSudt(a) => {
                w.hash32("info_type_hash", &a.info_type_hash)?
                    .hash32("user_lock_hash", &a.user_lock_hash)?
                    .u8("version", a.version)?
                    .u128("sudt_x_min", a.sudt_x_min)?
                    .u128("sudt_y_min", a.sudt_y_min)?;
                self.tips.write_sudt_sudt(&mut w, &a.tips)?;
            }
        }
        w.finish_hex()
    }

    pub fn decode_args(
        &self,
        hex: &str,
        layout: LiquidityOrderLayout,
    ) -> CodecResult<LiquidityOrderArgs> {
        let table = args_layout(layout);
        let bytes = table.decode_hex(hex)?;
        let mut r = table.reader(&bytes)?;
        let args = match layout {
            LiquidityOrderLayout::Legacy => LiquidityOrderArgs::Legacy(LegacyLiquidityArgs {
                user_lock_hash: r.hash32("user_lock_hash")?,
                version: r.u8("version")?,
                amount0: r.u128("amount0")?,
                amount1: r.u128("amount1")?,
                info_type_hash20: r.hash20("info_type_hash20")?,
            }),
            LiquidityOrderLayout::CkbSudt => LiquidityOrderArgs::CkbSudt(LiquidityArgs {
                info_type_hash: r.hash32("info_type_hash")?,
                user_lock_hash: r.hash32("user_lock_hash")?,
                version: r.u8("version")?,
                sudt_min: r.u128("sudt_min")?,
                ckb_min: r.u64("ckb_min")?,
                tips: self.tips.read(&mut r)?,
            }),
            LiquidityOrderLayout::SudtSudt => LiquidityOrderArgs::SudtSudt(SudtSudtLiquidityArgs {
                info_type_hash: r.hash32("info_type_hash")?,
                user_lock_hash: r.hash32("user_lock_hash")?,
                version: r.u8("version")?,
                sudt_x_min: r.u128("sudt_x_min")?,
                sudt_y_min: r.u128("sudt_y_min")?,
                tips: self.tips.read_sudt_sudt(&mut r)?,
            }),
        };
        r.finish()?;
        Ok(args)
    }

    /// Decode with the layout given by name, e.g. from configuration.
    pub fn decode_args_by_name(&self, hex: &str, layout: &str) -> CodecResult<LiquidityOrderArgs> {
        let layout = layout.parse::<LiquidityOrderLayout>().map_err(|err| {
            debug!(layout, "liquidity order decode with unknown layout");
            err
        })?;
        self.decode_args(hex, layout)
    }
}

impl CellDataCodec for LiquidityCellCodec {
    type Data = SudtAmountData;

    fn encode_data(&self, data: &SudtAmountData) -> CodecResult<String> {
        self.sudt.encode_data(data)
    }

    fn decode_data(&self, hex: &str) -> CodecResult<SudtAmountData> {
        self.sudt.decode_data(hex)
    }
}
