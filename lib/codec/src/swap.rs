// ============ Swap Order Cell Codec ============
// legacy    user_lock_hash | version | amount_in | min_amount_out | order_type
// ckb-sudt  sudt_type_hash | version | amount_out_min | user_lock_hash | tips
// sudt-sudt sudt_type_hash | user_lock_hash | version | amount_out_min | tips
//
// Both tips-based layouts are 105 bytes; only the caller knows which one
// the lock script it targets parses.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CodecResult;
use crate::hash::Byte32;
use crate::layout::{Field, Layout};
use crate::order::SwapOrderLayout;
use crate::sudt::{CellDataCodec, SudtAmountCodec, SudtAmountData};
use crate::tips::{TipsArgs, TipsCodec};
use crate::uint::UintWidth;

pub static LEGACY_SWAP_ARGS_LAYOUT: Layout = Layout::new(
    "legacy_swap_args",
    &[
        Field::hash32("user_lock_hash"),
        Field::uint("version", UintWidth::U8),
        Field::uint("amount_in", UintWidth::U128),
        Field::uint("min_amount_out", UintWidth::U128),
        Field::uint("order_type", UintWidth::U8),
    ],
);

pub static SWAP_ARGS_LAYOUT: Layout = Layout::new(
    "swap_args",
    &[
        Field::hash32("sudt_type_hash"),
        Field::uint("version", UintWidth::U8),
        Field::uint("amount_out_min", UintWidth::U128),
        Field::hash32("user_lock_hash"),
        Field::uint("tips", UintWidth::U64),
        Field::uint("tips_sudt", UintWidth::U128),
    ],
);

pub static SUDT_SUDT_SWAP_ARGS_LAYOUT: Layout = Layout::new(
    "sudt_sudt_swap_args",
    &[
        Field::hash32("sudt_type_hash"),
        Field::hash32("user_lock_hash"),
        Field::uint("version", UintWidth::U8),
        Field::uint("amount_out_min", UintWidth::U128),
        Field::uint("tips_ckb", UintWidth::U64),
        Field::uint("tips_sudt", UintWidth::U128),
    ],
);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySwapArgs {
    pub user_lock_hash: Byte32,
    pub version: u8,
    pub amount_in: u128,
    pub min_amount_out: u128,
    /// Trade direction as the legacy lock script numbers it.
    pub order_type: u8,
}

/// Fields shared by both tips-based layouts; only their order differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapArgs {
    /// Type hash of the SUDT the order wants to receive.
    pub sudt_type_hash: Byte32,
    pub version: u8,
    pub amount_out_min: u128,
    pub user_lock_hash: Byte32,
    pub tips: TipsArgs,
}

/// Externally tagged in serde (`{"ckb-sudt": {..}}`) so u128 fields are never
/// buffered ahead of the tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwapOrderArgs {
    Legacy(LegacySwapArgs),
    CkbSudt(SwapArgs),
    SudtSudt(SwapArgs),
}

impl SwapOrderArgs {
    pub fn layout(&self) -> SwapOrderLayout {
        match self {
            Self::Legacy(_) => SwapOrderLayout::Legacy,
            Self::CkbSudt(_) => SwapOrderLayout::CkbSudt,
            Self::SudtSudt(_) => SwapOrderLayout::SudtSudt,
        }
    }

    pub fn user_lock_hash(&self) -> &Byte32 {
        match self {
            Self::Legacy(args) => &args.user_lock_hash,
            Self::CkbSudt(args) | Self::SudtSudt(args) => &args.user_lock_hash,
        }
    }

    pub fn version(&self) -> u8 {
        match self {
            Self::Legacy(args) => args.version,
            Self::CkbSudt(args) | Self::SudtSudt(args) => args.version,
        }
    }

    pub fn amount_out_min(&self) -> u128 {
        match self {
            Self::Legacy(args) => args.min_amount_out,
            Self::CkbSudt(args) | Self::SudtSudt(args) => args.amount_out_min,
        }
    }

    pub fn tips(&self) -> Option<&TipsArgs> {
        match self {
            Self::Legacy(_) => None,
            Self::CkbSudt(args) | Self::SudtSudt(args) => Some(&args.tips),
        }
    }
}

pub fn args_layout(layout: SwapOrderLayout) -> &'static Layout {
    match layout {
        SwapOrderLayout::Legacy => &LEGACY_SWAP_ARGS_LAYOUT,
        SwapOrderLayout::CkbSudt => &SWAP_ARGS_LAYOUT,
        SwapOrderLayout::SudtSudt => &SUDT_SUDT_SWAP_ARGS_LAYOUT,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapCellCodec {
    sudt: SudtAmountCodec,
    tips: TipsCodec,
}

impl SwapCellCodec {
    pub const fn new(sudt: SudtAmountCodec, tips: TipsCodec) -> Self {
        Self { sudt, tips }
    }

    pub fn encode_args(&self, args: &SwapOrderArgs) -> CodecResult<String> {
        let mut w = args_layout(args.layout()).writer();
        match args {
            SwapOrderArgs::Legacy(a) => {
                w.hash32("user_lock_hash", &a.user_lock_hash)?
                    .u8("version", a.version)?
                    .u128("amount_in", a.amount_in)?
                    .u128("min_amount_out", a.min_amount_out)?
                    .u8("order_type", a.order_type)?;
            }
            SwapOrderArgs::CkbSudt(a) => {
                w.hash32("sudt_type_hash", &a.sudt_type_hash)?
                    .u8("version", a.version)?
                    .u128("amount_out_min", a.amount_out_min)?
                    .hash32("user_lock_hash", &a.user_lock_hash)?;
                self.tips.write(&mut w, &a.tips)?;
            }
            SwapOrderArgs::SudtSudt(a) => {
                w.hash32("sudt_type_hash", &a.sudt_type_hash)?
                    .hash32("user_lock_hash", &a.user_lock_hash)?
                    .u8("version", a.version)?
                    .u128("amount_out_min", a.amount_out_min)?;
                self.tips.write_swap_sudt_sudt(&mut w, &a.tips)?;
            }
        }
        w.finish_hex()
    }

    pub fn decode_args(&self, hex: &str, layout: SwapOrderLayout) -> CodecResult<SwapOrderArgs> {
        let table = args_layout(layout);
        let bytes = table.decode_hex(hex)?;
        let mut r = table.reader(&bytes)?;
        let args = match layout {
            SwapOrderLayout::Legacy => SwapOrderArgs::Legacy(LegacySwapArgs {
                user_lock_hash: r.hash32("user_lock_hash")?,
                version: r.u8("version")?,
                amount_in: r.u128("amount_in")?,
                min_amount_out: r.u128("min_amount_out")?,
                order_type: r.u8("order_type")?,
            }),
            SwapOrderLayout::CkbSudt => SwapOrderArgs::CkbSudt(SwapArgs {
                sudt_type_hash: r.hash32("sudt_type_hash")?,
                version: r.u8("version")?,
                amount_out_min: r.u128("amount_out_min")?,
                user_lock_hash: r.hash32("user_lock_hash")?,
                tips: self.tips.read(&mut r)?,
            }),
            SwapOrderLayout::SudtSudt => {
                let sudt_type_hash = r.hash32("sudt_type_hash")?;
                let user_lock_hash = r.hash32("user_lock_hash")?;
                SwapOrderArgs::SudtSudt(SwapArgs {
                    sudt_type_hash,
                    version: r.u8("version")?,
                    amount_out_min: r.u128("amount_out_min")?,
                    user_lock_hash,
                    tips: self.tips.read_swap_sudt_sudt(&mut r)?,
                })
            }
        };
        r.finish()?;
        Ok(args)
    }

    pub fn decode_args_by_name(&self, hex: &str, layout: &str) -> CodecResult<SwapOrderArgs> {
        let layout = layout.parse::<SwapOrderLayout>().map_err(|err| {
            debug!(layout, "swap order decode with unknown layout");
            err
        })?;
        self.decode_args(hex, layout)
    }
}

impl CellDataCodec for SwapCellCodec {
    type Data = SudtAmountData;

    fn encode_data(&self, data: &SudtAmountData) -> CodecResult<String> {
        self.sudt.encode_data(data)
    }

    fn decode_data(&self, hex: &str) -> CodecResult<SudtAmountData> {
        self.sudt.decode_data(hex)
    }
}
