use smallvec::SmallVec;

use crate::error::ConfigError;

/// Divisor list; 128 has eight divisors, so every supported width fits inline.
pub type Divisors = SmallVec<[usize; 8]>;

/// All positive divisors of `n` in ascending order, by trial division.
pub fn divisors(n: usize) -> Divisors {
    (1..=n).filter(|d| n % d == 0).collect()
}

/// Check that `bits_per_row` is a legal row width for `bit_count` bits.
pub fn check_divisor(bit_count: usize, bits_per_row: usize) -> Result<(), ConfigError> {
    if bits_per_row == 0 || bit_count % bits_per_row != 0 {
        return Err(ConfigError::NotADivisor {
            bit_count,
            bits_per_row,
        });
    }
    Ok(())
}
