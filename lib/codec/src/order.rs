// ============ Order Layout Discriminator ============
// Order args carry no on-chain tag, so the caller names the layout from
// business context (which lock script generation and which pool model).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum OrderLayout {
    /// Positional args without tips, first lock script generation.
    Legacy,
    /// Tips-based args for pools pairing CKB with one SUDT.
    CkbSudt,
    /// Tips-based args for pools pairing two SUDTs.
    SudtSudt,
}

pub type LiquidityOrderLayout = OrderLayout;
pub type SwapOrderLayout = OrderLayout;

impl OrderLayout {
    pub const ALL: [OrderLayout; 3] = [Self::Legacy, Self::CkbSudt, Self::SudtSudt];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::CkbSudt => "ckb-sudt",
            Self::SudtSudt => "sudt-sudt",
        }
    }

    pub const fn has_tips(self) -> bool {
        !matches!(self, Self::Legacy)
    }
}

impl fmt::Display for OrderLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderLayout {
    type Err = CodecError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str() == name)
            .ok_or_else(|| CodecError::UnknownVariant {
                kind: "order",
                name: name.to_string(),
            })
    }
}

impl TryFrom<String> for OrderLayout {
    type Error = CodecError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
