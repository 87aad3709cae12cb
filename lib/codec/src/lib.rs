// ============ CKB AMM Cell Codec ============
// Byte-exact args/data encoding for the DEX's on-chain cells:
// info cell, pool cell, liquidity order cell, swap order cell, and the
// tips sub-record the order args end with.
//
// All integers are little-endian. All hex is `0x`-prefixed on output.
// Decoders check total length before reading any field and never return
// partially decoded values.

pub mod error;
pub mod hash;
pub mod hex_str;
pub mod info;
pub mod layout;
pub mod liquidity;
pub mod order;
pub mod registry;
pub mod sudt;
pub mod swap;
pub mod tips;
pub mod uint;

pub use error::{CodecError, CodecResult};
pub use hash::{Byte20, Byte32};
pub use hex_str::{decode_hex, encode_hex, strip_prefix as strip_hex_prefix};
pub use info::{InfoCellArgs, InfoCellCodec, InfoCellData};
pub use layout::{Field, Layout};
pub use liquidity::{
    LegacyLiquidityArgs, LiquidityArgs, LiquidityCellCodec, LiquidityOrderArgs,
    SudtSudtLiquidityArgs,
};
pub use order::{LiquidityOrderLayout, OrderLayout, SwapOrderLayout};
pub use registry::{CodecRegistry, CODECS};
pub use sudt::{CellDataCodec, PoolCellCodec, SudtAmountCodec, SudtAmountData};
pub use swap::{LegacySwapArgs, SwapArgs, SwapCellCodec, SwapOrderArgs};
pub use tips::{SudtSudtTipsArgs, TipsArgs, TipsCodec};
pub use uint::{decode_uint, encode_uint, parse_uint, UintWidth};
