// ============ Codec Registry ============
// Single access point for every cell codec. The shared SUDT-amount and tips
// codecs are composed into the order codecs at compile time; nothing here
// holds state, so the registry is a plain constant.

use crate::info::InfoCellCodec;
use crate::liquidity::LiquidityCellCodec;
use crate::sudt::{PoolCellCodec, SudtAmountCodec};
use crate::swap::SwapCellCodec;
use crate::tips::TipsCodec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecRegistry {
    sudt: SudtAmountCodec,
    tips: TipsCodec,
    info: InfoCellCodec,
    pool: PoolCellCodec,
    liquidity: LiquidityCellCodec,
    swap: SwapCellCodec,
}

pub const CODECS: CodecRegistry = CodecRegistry::new();

impl CodecRegistry {
    pub const fn new() -> Self {
        let sudt = SudtAmountCodec::new();
        let tips = TipsCodec::new();
        Self {
            sudt,
            tips,
            info: InfoCellCodec::new(),
            pool: PoolCellCodec::new(sudt),
            liquidity: LiquidityCellCodec::new(sudt, tips),
            swap: SwapCellCodec::new(sudt, tips),
        }
    }

    pub fn info_cell_serialization(&self) -> InfoCellCodec {
        self.info
    }

    pub fn pool_cell_serialization(&self) -> PoolCellCodec {
        self.pool
    }

    pub fn liquidity_cell_serialization(&self) -> LiquidityCellCodec {
        self.liquidity
    }

    pub fn swap_cell_serialization(&self) -> SwapCellCodec {
        self.swap
    }

    pub fn sudt_cell_serialization(&self) -> SudtAmountCodec {
        self.sudt
    }

    pub fn tips_args_serialization(&self) -> TipsCodec {
        self.tips
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
