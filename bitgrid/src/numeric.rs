//! Binary, decimal and hexadecimal readings of a bit pattern.
//!
//! The decimal value is always a [`BigUint`]: 128-bit patterns must never be
//! squeezed through a narrower native integer.

use num_bigint::BigUint;
use num_traits::{Num, Zero};

use crate::error::ValueError;
use crate::label::Endianness;
use crate::store::{Bit, BitStore};

/// The three derived readings of a store under one endianness.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interpretation {
    /// MSB-first binary digits, exactly `len` characters.
    pub binary: String,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_decimal"))]
    pub decimal: BigUint,
    /// Upper-case hex without padding or prefix.
    pub hex: String,
}

impl Interpretation {
    /// Hex with the `0x` prefix used for display.
    pub fn hex_prefixed(&self) -> String {
        format!("0x{}", self.hex)
    }
}

#[cfg(feature = "serde")]
fn serialize_decimal<S: serde::Serializer>(value: &BigUint, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

/// Bits in most-significant-first order.
fn msb_first(store: &BitStore, endianness: Endianness) -> Box<dyn Iterator<Item = Bit> + '_> {
    match endianness {
        Endianness::Big => Box::new(store.iter()),
        Endianness::Little => Box::new(store.iter().rev()),
    }
}

/// Binary digits, most significant first.
///
/// Big endian reads the store in canonical order; little endian reads it
/// reversed.
pub fn binary_string(store: &BitStore, endianness: Endianness) -> String {
    msb_first(store, endianness)
        .map(|b| if b != 0 { '1' } else { '0' })
        .collect()
}

/// Parse an MSB-first binary string. An empty string is zero.
pub fn parse_binary(binary: &str) -> Result<BigUint, ValueError> {
    if binary.is_empty() {
        return Ok(BigUint::zero());
    }
    BigUint::from_str_radix(binary, 2).map_err(|_| ValueError::InvalidLiteral(binary.to_string()))
}

/// Unsigned value of the pattern under `endianness`.
pub fn decimal_value(store: &BitStore, endianness: Endianness) -> BigUint {
    msb_first(store, endianness).fold(BigUint::zero(), |acc, b| (acc << 1u32) + BigUint::from(b))
}

/// Upper-case hex of `value`, no leading zeros (zero is `"0"`).
pub fn hex_string(value: &BigUint) -> String {
    format!("{value:X}")
}

/// Compute all three readings at once.
pub fn interpret(store: &BitStore, endianness: Endianness) -> Interpretation {
    let binary = binary_string(store, endianness);
    let decimal = decimal_value(store, endianness);
    let hex = hex_string(&decimal);
    tracing::trace!(bits = store.len(), %endianness, %hex, "interpreted pattern");
    Interpretation {
        binary,
        decimal,
        hex,
    }
}

/// Overwrite the store so that it reads back as `value` under `endianness`.
///
/// Fails without touching the store if `value` needs more bits than it holds.
pub fn load_value(
    store: &mut BitStore,
    value: &BigUint,
    endianness: Endianness,
) -> Result<(), ValueError> {
    let n = store.len();
    let needed = value.bits();
    if needed > n as u64 {
        return Err(ValueError::TooWide {
            needed,
            available: n,
        });
    }
    for i in 0..n {
        let significance = match endianness {
            Endianness::Big => n - 1 - i,
            Endianness::Little => i,
        };
        store.set(i, value.bit(significance as u64) as Bit);
    }
    Ok(())
}

/// Parse a numeric literal: `0x`/`0b`/`0o` prefixed, or plain decimal.
/// Underscores are ignored.
pub fn parse_literal(literal: &str) -> Result<BigUint, ValueError> {
    let cleaned: String = literal.trim().chars().filter(|&c| c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else {
        (lower.as_str(), 10)
    };
    if digits.is_empty() {
        return Err(ValueError::InvalidLiteral(literal.to_string()));
    }
    BigUint::from_str_radix(digits, radix).map_err(|_| ValueError::InvalidLiteral(literal.to_string()))
}
