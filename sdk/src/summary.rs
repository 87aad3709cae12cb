// ============ Cell Summaries ============
// Read-side views over raw cell hex handed over by the chain query layer.
// Amounts are rendered as decimal strings so JSON consumers keep all 128 bits.

use std::collections::BTreeMap;

use serde::Serialize;

use ckb_amm_codec::{
    strip_hex_prefix, Byte20, Byte32, CellDataCodec, LiquidityOrderArgs, LiquidityOrderLayout,
    SwapOrderArgs, SwapOrderLayout, CODECS,
};

use crate::SdkError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Swap,
    Liquidity,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub kind: OrderKind,
    pub layout: String,
    pub user_lock_hash: Byte32,
    pub version: u8,
    /// Named numeric fields of the args, in decimal.
    pub amounts: BTreeMap<&'static str, String>,
    /// SUDT locked in the order cell; absent for CKB-only cells.
    pub sudt_amount: Option<String>,
}

fn sudt_amount(data: &str) -> Result<Option<String>, SdkError> {
    if strip_hex_prefix(data).is_empty() {
        return Ok(None);
    }
    let amount = CODECS.sudt_cell_serialization().decode_data(data)?;
    Ok(Some(amount.sudt_amount.to_string()))
}

impl OrderSummary {
    pub fn from_swap_cell(
        args: &str,
        data: &str,
        layout: SwapOrderLayout,
    ) -> Result<Self, SdkError> {
        let decoded = CODECS.swap_cell_serialization().decode_args(args, layout)?;
        let mut amounts = BTreeMap::new();
        match &decoded {
            SwapOrderArgs::Legacy(a) => {
                amounts.insert("amount_in", a.amount_in.to_string());
                amounts.insert("min_amount_out", a.min_amount_out.to_string());
                amounts.insert("order_type", a.order_type.to_string());
            }
            SwapOrderArgs::CkbSudt(a) | SwapOrderArgs::SudtSudt(a) => {
                amounts.insert("amount_out_min", a.amount_out_min.to_string());
                amounts.insert("tips", a.tips.tips.to_string());
                amounts.insert("tips_sudt", a.tips.tips_sudt.to_string());
            }
        }
        Ok(Self {
            kind: OrderKind::Swap,
            layout: layout.to_string(),
            user_lock_hash: *decoded.user_lock_hash(),
            version: decoded.version(),
            amounts,
            sudt_amount: sudt_amount(data)?,
        })
    }

    pub fn from_liquidity_cell(
        args: &str,
        data: &str,
        layout: LiquidityOrderLayout,
    ) -> Result<Self, SdkError> {
        let decoded = CODECS.liquidity_cell_serialization().decode_args(args, layout)?;
        let mut amounts = BTreeMap::new();
        match &decoded {
            LiquidityOrderArgs::Legacy(a) => {
                amounts.insert("amount0", a.amount0.to_string());
                amounts.insert("amount1", a.amount1.to_string());
            }
            LiquidityOrderArgs::CkbSudt(a) => {
                amounts.insert("sudt_min", a.sudt_min.to_string());
                amounts.insert("ckb_min", a.ckb_min.to_string());
                amounts.insert("tips", a.tips.tips.to_string());
                amounts.insert("tips_sudt", a.tips.tips_sudt.to_string());
            }
            LiquidityOrderArgs::SudtSudt(a) => {
                amounts.insert("sudt_x_min", a.sudt_x_min.to_string());
                amounts.insert("sudt_y_min", a.sudt_y_min.to_string());
                amounts.insert("tips_ckb", a.tips.tips_ckb.to_string());
                amounts.insert("tips_sudt_x", a.tips.tips_sudt_x.to_string());
                amounts.insert("tips_sudt_y", a.tips.tips_sudt_y.to_string());
            }
        }
        Ok(Self {
            kind: OrderKind::Liquidity,
            layout: layout.to_string(),
            user_lock_hash: *decoded.user_lock_hash(),
            version: decoded.version(),
            amounts,
            sudt_amount: sudt_amount(data)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PoolSummary {
    pub hash: Byte20,
    pub info_type_hash: Byte20,
    pub ckb_reserve: String,
    pub sudt_reserve: String,
    pub total_liquidity: String,
    pub liquidity_sudt_type_hash20: Byte20,
}

impl PoolSummary {
    pub fn from_info_cell(args: &str, data: &str) -> Result<Self, SdkError> {
        let codec = CODECS.info_cell_serialization();
        let info_args = codec.decode_args(args)?;
        let info = codec.decode_data(data)?;
        Ok(Self {
            hash: info_args.hash,
            info_type_hash: info_args.info_type_hash,
            ckb_reserve: info.ckb_reserve.to_string(),
            sudt_reserve: info.sudt_reserve.to_string(),
            total_liquidity: info.total_liquidity.to_string(),
            liquidity_sudt_type_hash20: info.liquidity_sudt_type_hash20,
        })
    }
}
