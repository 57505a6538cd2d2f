use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which end of the canonical sequence carries the most significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Endianness {
    /// Canonical index 0 is the most significant bit.
    #[default]
    Big,
    /// Canonical index 0 is the least significant bit.
    Little,
}

impl FromStr for Endianness {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" | "be" | "msb" => Ok(Endianness::Big),
            "little" | "le" | "lsb" => Ok(Endianness::Little),
            _ => Err(ConfigError::InvalidName {
                kind: "endianness",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endianness::Big => "big",
            Endianness::Little => "little",
        })
    }
}

/// Bit number shown for the cell holding canonical `index`.
///
/// Big endian labels canonical 0 with the highest bit number; little endian
/// labels it 0.
#[inline]
pub fn display_label(index: usize, bit_count: usize, endianness: Endianness) -> usize {
    assert!(index < bit_count, "index {index} out of range for {bit_count} bits");
    match endianness {
        Endianness::Big => bit_count - 1 - index,
        Endianness::Little => index,
    }
}

/// One-based numeral drawn inside a cell.
#[inline]
pub fn numeral(label: usize) -> usize {
    label + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_labels_first_cell_highest() {
        assert_eq!(display_label(0, 8, Endianness::Big), 7);
        assert_eq!(display_label(7, 8, Endianness::Big), 0);
    }

    #[test]
    fn little_endian_labels_are_canonical() {
        assert_eq!(display_label(0, 8, Endianness::Little), 0);
        assert_eq!(display_label(5, 8, Endianness::Little), 5);
    }

    #[test]
    fn labels_are_symmetric_across_endianness() {
        for n in [8, 16, 32, 64, 128] {
            for i in 0..n {
                let sum = display_label(i, n, Endianness::Big) + display_label(i, n, Endianness::Little);
                assert_eq!(sum, n - 1);
            }
        }
    }

    #[test]
    fn numeral_is_one_based() {
        assert_eq!(numeral(display_label(0, 16, Endianness::Big)), 16);
        assert_eq!(numeral(display_label(0, 16, Endianness::Little)), 1);
    }

    #[test]
    fn parse_endianness() {
        assert_eq!("Little".parse::<Endianness>().unwrap(), Endianness::Little);
        assert_eq!("be".parse::<Endianness>().unwrap(), Endianness::Big);
        assert!("middle".parse::<Endianness>().is_err());
    }
}
