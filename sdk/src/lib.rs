// ============ CKB AMM SDK ============
// Turns order parameters into unsigned CKB cell outputs and reads order
// and pool cells back. All byte layout work goes through ckb-amm-codec;
// this crate only decides which layout, which scripts, and which amounts.

pub mod deployment;
pub mod script;
pub mod summary;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use ckb_amm_codec::{
    parse_uint, Byte20, Byte32, CellDataCodec, CodecError, LegacyLiquidityArgs, LegacySwapArgs,
    LiquidityArgs, LiquidityOrderArgs, LiquidityOrderLayout, OrderLayout, SudtAmountData,
    SudtSudtLiquidityArgs, SudtSudtTipsArgs, SwapArgs, SwapOrderArgs, SwapOrderLayout, TipsArgs,
    UintWidth, CODECS,
};

pub use deployment::{CellDep, DepType, DexDeployment, ScriptRef};
pub use script::{ckb_blake2b, HashType, Script};
pub use summary::{OrderKind, OrderSummary, PoolSummary};

// ============ Transaction Types ============

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellOutput {
    pub capacity: u64,
    pub lock: Script,
    #[serde(rename = "type")]
    pub type_: Option<Script>,
    /// `0x`-prefixed cell data.
    pub data: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellInput {
    pub tx_hash: Byte32,
    pub index: u32,
    pub since: u64,
}

/// Unsigned skeleton handed to the wallet for balancing and signing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    pub cell_deps: Vec<CellDep>,
    pub inputs: Vec<CellInput>,
    pub outputs: Vec<CellOutput>,
}

// ============ Order Requests ============
// Amounts arrive as decimal strings; 128-bit values do not survive JSON
// numbers.

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOrderRequest {
    /// Layout the caller expects; must equal the deployment's when given.
    #[serde(default)]
    pub layout: Option<SwapOrderLayout>,
    pub user_lock: Script,
    /// Type script of the SUDT being sold; `None` when selling CKB.
    #[serde(default)]
    pub pay_sudt_type: Option<Script>,
    /// Type hash of the SUDT the order buys.
    pub receive_sudt_type_hash: Byte32,
    pub amount_in: String,
    pub amount_out_min: String,
    /// Not part of the legacy layout.
    #[serde(default)]
    pub tips: Option<String>,
    /// Not part of the legacy layout.
    #[serde(default)]
    pub tips_sudt: Option<String>,
    /// Only meaningful to the legacy layout.
    #[serde(default)]
    pub order_type: u8,
    pub version: u8,
    pub capacity: u64,
}

/// `amount0`/`amount1` map per layout:
/// legacy -> amount0/amount1, ckb-sudt -> sudt_min/ckb_min,
/// sudt-sudt -> sudt_x_min/sudt_y_min.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityOrderRequest {
    /// Layout the caller expects; must equal the deployment's when given.
    #[serde(default)]
    pub layout: Option<LiquidityOrderLayout>,
    pub user_lock: Script,
    pub info_type_hash: Byte32,
    /// SUDT locked in the order cell (liquidity token when removing).
    pub sudt_type: Script,
    pub sudt_amount: String,
    pub amount0: String,
    pub amount1: String,
    #[serde(default)]
    pub tips: Option<String>,
    #[serde(default)]
    pub tips_sudt: Option<String>,
    /// Second token tip, sudt-sudt only.
    #[serde(default)]
    pub tips_sudt_y: Option<String>,
    pub version: u8,
    pub capacity: u64,
}

fn parse_opt(
    field: &'static str,
    text: &Option<String>,
    width: UintWidth,
) -> Result<u128, CodecError> {
    match text {
        Some(text) => parse_uint(field, text, width),
        None => Ok(0),
    }
}

/// The deployed lock only parses its own layout.
fn resolve_layout(
    requested: Option<OrderLayout>,
    deployed: OrderLayout,
    order: &str,
) -> Result<OrderLayout, SdkError> {
    match requested {
        Some(layout) if layout != deployed => Err(SdkError::InvalidRequest(format!(
            "{order} layout {layout} does not match the deployed lock's {deployed}"
        ))),
        _ => Ok(deployed),
    }
}

fn reject_legacy_tips(
    layout: OrderLayout,
    tips: &Option<String>,
    tips_sudt: &Option<String>,
) -> Result<(), SdkError> {
    if layout == OrderLayout::Legacy && (tips.is_some() || tips_sudt.is_some()) {
        return Err(SdkError::InvalidRequest(
            "tips are not part of the legacy layout".into(),
        ));
    }
    Ok(())
}

// ============ DEX SDK ============

pub struct DexSdk {
    pub deployment: DexDeployment,
}

impl DexSdk {
    pub fn new(deployment: DexDeployment) -> Self {
        Self { deployment }
    }

    fn check_sudt_type(&self, script: &Script) -> Result<(), SdkError> {
        if !self.deployment.sudt_type.matches(script) {
            return Err(SdkError::InvalidRequest(format!(
                "type script {} is not the deployed sudt type",
                script.code_hash
            )));
        }
        Ok(())
    }

    /// Build the swap order cell. Every amount is validated before any
    /// hex is produced.
    pub fn swap_order_output(&self, req: &SwapOrderRequest) -> Result<CellOutput, SdkError> {
        let layout = resolve_layout(req.layout, self.deployment.swap_layout, "swap")?;
        reject_legacy_tips(layout, &req.tips, &req.tips_sudt)?;
        if let Some(sudt_type) = &req.pay_sudt_type {
            self.check_sudt_type(sudt_type)?;
        }
        let amount_in = parse_uint("amount_in", &req.amount_in, UintWidth::U128)?;
        let amount_out_min = parse_uint("amount_out_min", &req.amount_out_min, UintWidth::U128)?;
        let tips = TipsArgs {
            tips: parse_opt("tips", &req.tips, UintWidth::U64)? as u64,
            tips_sudt: parse_opt("tips_sudt", &req.tips_sudt, UintWidth::U128)?,
        };
        if amount_in == 0 {
            return Err(SdkError::InvalidRequest("amount_in must be positive".into()));
        }
        if req.pay_sudt_type.is_none() && amount_in > req.capacity as u128 {
            return Err(SdkError::InvalidRequest(format!(
                "amount_in {amount_in} exceeds cell capacity {}",
                req.capacity
            )));
        }
        let user_lock_hash = req.user_lock.calc_script_hash()?;

        let args = match layout {
            SwapOrderLayout::Legacy => SwapOrderArgs::Legacy(LegacySwapArgs {
                user_lock_hash,
                version: req.version,
                amount_in,
                min_amount_out: amount_out_min,
                order_type: req.order_type,
            }),
            SwapOrderLayout::CkbSudt | SwapOrderLayout::SudtSudt => {
                let fields = SwapArgs {
                    sudt_type_hash: req.receive_sudt_type_hash,
                    version: req.version,
                    amount_out_min,
                    user_lock_hash,
                    tips,
                };
                if layout == SwapOrderLayout::CkbSudt {
                    SwapOrderArgs::CkbSudt(fields)
                } else {
                    SwapOrderArgs::SudtSudt(fields)
                }
            }
        };
        let codec = CODECS.swap_cell_serialization();
        let lock_args = codec.encode_args(&args)?;
        let data = match req.pay_sudt_type {
            Some(_) => codec.encode_data(&SudtAmountData { sudt_amount: amount_in })?,
            None => "0x".to_string(),
        };

        debug!(%layout, user_lock_hash = %user_lock_hash, "built swap order output");
        Ok(CellOutput {
            capacity: req.capacity,
            lock: self.deployment.swap_order_lock.with_args(lock_args),
            type_: req.pay_sudt_type.clone(),
            data,
        })
    }

    pub fn liquidity_order_output(
        &self,
        req: &LiquidityOrderRequest,
    ) -> Result<CellOutput, SdkError> {
        let layout =
            resolve_layout(req.layout, self.deployment.liquidity_layout, "liquidity")?;
        reject_legacy_tips(layout, &req.tips, &req.tips_sudt)?;
        if layout != LiquidityOrderLayout::SudtSudt && req.tips_sudt_y.is_some() {
            return Err(SdkError::InvalidRequest(format!(
                "tips_sudt_y is not part of the {layout} layout"
            )));
        }
        self.check_sudt_type(&req.sudt_type)?;
        let sudt_amount = parse_uint("sudt_amount", &req.sudt_amount, UintWidth::U128)?;
        let user_lock_hash = req.user_lock.calc_script_hash()?;

        let args = match layout {
            LiquidityOrderLayout::Legacy => LiquidityOrderArgs::Legacy(LegacyLiquidityArgs {
                user_lock_hash,
                version: req.version,
                amount0: parse_uint("amount0", &req.amount0, UintWidth::U128)?,
                amount1: parse_uint("amount1", &req.amount1, UintWidth::U128)?,
                info_type_hash20: Byte20::truncate(&req.info_type_hash),
            }),
            LiquidityOrderLayout::CkbSudt => LiquidityOrderArgs::CkbSudt(LiquidityArgs {
                info_type_hash: req.info_type_hash,
                user_lock_hash,
                version: req.version,
                sudt_min: parse_uint("sudt_min", &req.amount0, UintWidth::U128)?,
                ckb_min: parse_uint("ckb_min", &req.amount1, UintWidth::U64)? as u64,
                tips: TipsArgs {
                    tips: parse_opt("tips", &req.tips, UintWidth::U64)? as u64,
                    tips_sudt: parse_opt("tips_sudt", &req.tips_sudt, UintWidth::U128)?,
                },
            }),
            LiquidityOrderLayout::SudtSudt => {
                LiquidityOrderArgs::SudtSudt(SudtSudtLiquidityArgs {
                    info_type_hash: req.info_type_hash,
                    user_lock_hash,
                    version: req.version,
                    sudt_x_min: parse_uint("sudt_x_min", &req.amount0, UintWidth::U128)?,
                    sudt_y_min: parse_uint("sudt_y_min", &req.amount1, UintWidth::U128)?,
                    tips: SudtSudtTipsArgs {
                        tips_ckb: parse_opt("tips_ckb", &req.tips, UintWidth::U64)? as u64,
                        tips_sudt_x: parse_opt("tips_sudt_x", &req.tips_sudt, UintWidth::U128)?,
                        tips_sudt_y: parse_opt("tips_sudt_y", &req.tips_sudt_y, UintWidth::U128)?,
                    },
                })
            }
        };

        let codec = CODECS.liquidity_cell_serialization();
        let lock_args = codec.encode_args(&args)?;
        let data = codec.encode_data(&SudtAmountData { sudt_amount })?;

        debug!(%layout, user_lock_hash = %user_lock_hash, "built liquidity order output");
        Ok(CellOutput {
            capacity: req.capacity,
            lock: self.deployment.liquidity_order_lock.with_args(lock_args),
            type_: Some(req.sudt_type.clone()),
            data,
        })
    }

    /// Wraps order outputs with the deployment's cell deps.
    pub fn order_transaction(
        &self,
        inputs: Vec<CellInput>,
        outputs: Vec<CellOutput>,
    ) -> UnsignedTransaction {
        UnsignedTransaction {
            cell_deps: self.deployment.cell_deps.clone(),
            inputs,
            outputs,
        }
    }

    // ============ Read Side ============

    /// Summarizes a cell if it is locked by the deployment's swap or
    /// liquidity order lock.
    pub fn summarize_order(&self, output: &CellOutput) -> Result<OrderSummary, SdkError> {
        let (args, data) = (&output.lock.args, &output.data);
        let result = if self.deployment.swap_order_lock.matches(&output.lock) {
            OrderSummary::from_swap_cell(args, data, self.deployment.swap_layout)
        } else if self.deployment.liquidity_order_lock.matches(&output.lock) {
            OrderSummary::from_liquidity_cell(args, data, self.deployment.liquidity_layout)
        } else {
            return Err(SdkError::ForeignLock(output.lock.code_hash));
        };
        if let Err(err) = &result {
            warn!(code_hash = %output.lock.code_hash, error = %err, "order cell failed to decode");
        }
        result
    }
}

// ============ Errors ============

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("invalid deployment config: {0}")]
    InvalidConfig(String),

    #[error("invalid order request: {0}")]
    InvalidRequest(String),

    #[error("cell lock {0} is not an order lock of this deployment")]
    ForeignLock(Byte32),
}

// ============ Tests ============
