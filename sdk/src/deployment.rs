// ============ Deployment Config ============
// Where the order lock scripts and the SUDT type script live, and which
// args layout each order lock parses.
// Loaded from the same kind of JSON the deploy tooling writes out.

use serde::{Deserialize, Serialize};
use tracing::info;

use ckb_amm_codec::{Byte32, LiquidityOrderLayout, SwapOrderLayout};

use crate::script::{HashType, Script};
use crate::SdkError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRef {
    pub code_hash: Byte32,
    pub hash_type: HashType,
}

impl ScriptRef {
    pub fn with_args(&self, args: String) -> Script {
        Script::new(self.code_hash, self.hash_type, args)
    }

    pub fn matches(&self, script: &Script) -> bool {
        self.code_hash == script.code_hash && self.hash_type == script.hash_type
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepType {
    Code,
    DepGroup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDep {
    pub tx_hash: Byte32,
    pub index: u32,
    pub dep_type: DepType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DexDeployment {
    /// Network identifier, informational only.
    pub network: String,
    pub swap_order_lock: ScriptRef,
    pub liquidity_order_lock: ScriptRef,
    /// SUDT type script code; every token an order locks runs this code.
    pub sudt_type: ScriptRef,
    /// Args layout the deployed swap lock parses.
    pub swap_layout: SwapOrderLayout,
    /// Args layout the deployed liquidity lock parses.
    pub liquidity_layout: LiquidityOrderLayout,
    #[serde(default)]
    pub cell_deps: Vec<CellDep>,
}

impl DexDeployment {
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        let deployment: Self =
            serde_json::from_str(json).map_err(|err| SdkError::InvalidConfig(err.to_string()))?;
        deployment.validate()?;
        info!(
            network = %deployment.network,
            swap_layout = %deployment.swap_layout,
            liquidity_layout = %deployment.liquidity_layout,
            "loaded dex deployment"
        );
        Ok(deployment)
    }

    pub fn to_json(&self) -> Result<String, SdkError> {
        serde_json::to_string_pretty(self).map_err(|err| SdkError::InvalidConfig(err.to_string()))
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        if self.swap_order_lock.code_hash == Byte32::default() {
            return Err(SdkError::InvalidConfig("swap_order_lock code_hash is zero".into()));
        }
        if self.liquidity_order_lock.code_hash == Byte32::default() {
            return Err(SdkError::InvalidConfig("liquidity_order_lock code_hash is zero".into()));
        }
        if self.sudt_type.code_hash == Byte32::default() {
            return Err(SdkError::InvalidConfig("sudt_type code_hash is zero".into()));
        }
        if self.swap_order_lock == self.liquidity_order_lock {
            return Err(SdkError::InvalidConfig(
                "swap and liquidity order locks must differ".into(),
            ));
        }
        Ok(())
    }
}
