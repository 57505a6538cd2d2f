use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Supported pattern widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum BitWidth {
    W8,
    #[default]
    W16,
    W32,
    W64,
    W128,
}

impl BitWidth {
    /// All widths, narrowest first.
    pub const ALL: [BitWidth; 5] = [
        BitWidth::W8,
        BitWidth::W16,
        BitWidth::W32,
        BitWidth::W64,
        BitWidth::W128,
    ];

    /// Number of bits in a pattern of this width.
    pub const fn bits(self) -> usize {
        match self {
            BitWidth::W8 => 8,
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
            BitWidth::W128 => 128,
        }
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitWidth::W8),
            16 => Ok(BitWidth::W16),
            32 => Ok(BitWidth::W32),
            64 => Ok(BitWidth::W64),
            128 => Ok(BitWidth::W128),
            other => Err(ConfigError::UnsupportedWidth(other)),
        }
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> u32 {
        width.bits() as u32
    }
}

impl FromStr for BitWidth {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits: u32 = s.trim().parse().map_err(|_| ConfigError::InvalidName {
            kind: "bit width",
            value: s.to_string(),
        })?;
        BitWidth::try_from(bits)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
