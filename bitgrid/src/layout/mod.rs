mod validate;

pub use validate::{check_divisor, divisors, Divisors};

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How canonical indices populate the grid as they increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrowthDirection {
    /// Fill left to right, then move down a row.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "row-first"))]
    Row,
    /// Fill top to bottom, then move right a column.
    #[cfg_attr(feature = "serde", serde(alias = "column-first"))]
    Column,
}

impl FromStr for GrowthDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row" | "row-first" | "rows" => Ok(GrowthDirection::Row),
            "column" | "column-first" | "col" | "columns" => Ok(GrowthDirection::Column),
            _ => Err(ConfigError::InvalidName {
                kind: "growth direction",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GrowthDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GrowthDirection::Row => "row",
            GrowthDirection::Column => "column",
        })
    }
}

/// Map a grid position to its canonical bit index.
///
/// - Row-first: `row * bits_per_row + col`
/// - Column-first: `col * rows + row`, where `rows = bit_count / bits_per_row`
///
/// Both are bijections from the grid onto `0..bit_count` only when
/// `bits_per_row` divides `bit_count`, so that is asserted along with the
/// position bounds.
pub fn cell_index(
    row: usize,
    col: usize,
    bits_per_row: usize,
    bit_count: usize,
    growth: GrowthDirection,
) -> usize {
    assert!(
        bits_per_row > 0 && bit_count % bits_per_row == 0,
        "{bits_per_row} bits per row does not divide {bit_count}"
    );
    let rows = bit_count / bits_per_row;
    assert!(
        row < rows && col < bits_per_row,
        "cell ({row}, {col}) outside {rows}x{bits_per_row} grid"
    );
    match growth {
        GrowthDirection::Row => row * bits_per_row + col,
        GrowthDirection::Column => col * rows + row,
    }
}

/// Dimensions of a grid holding `bit_count` bits, `bits_per_row` per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    bit_count: usize,
    bits_per_row: usize,
}

impl GridShape {
    /// Build a shape, rejecting a row width that does not divide the bit count.
    pub fn new(bit_count: usize, bits_per_row: usize) -> Result<GridShape, ConfigError> {
        check_divisor(bit_count, bits_per_row)?;
        Ok(GridShape {
            bit_count,
            bits_per_row,
        })
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Number of columns.
    pub fn bits_per_row(&self) -> usize {
        self.bits_per_row
    }

    pub fn rows(&self) -> usize {
        self.bit_count / self.bits_per_row
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.bits_per_row
    }

    /// Canonical index of the cell at (row, col).
    pub fn cell_index(&self, row: usize, col: usize, growth: GrowthDirection) -> usize {
        cell_index(row, col, self.bits_per_row, self.bit_count, growth)
    }

    /// Inverse of [`cell_index`](Self::cell_index): the (row, col) holding `index`.
    pub fn position_of(&self, index: usize, growth: GrowthDirection) -> (usize, usize) {
        assert!(
            index < self.bit_count,
            "index {index} out of range for {} bits",
            self.bit_count
        );
        match growth {
            GrowthDirection::Row => (index / self.bits_per_row, index % self.bits_per_row),
            GrowthDirection::Column => (index % self.rows(), index / self.rows()),
        }
    }

    /// Every `(row, col, canonical_index)` in display order (row by row).
    pub fn cells(&self, growth: GrowthDirection) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let cols = self.bits_per_row;
        (0..self.rows()).flat_map(move |row| {
            (0..cols).map(move |col| (row, col, self.cell_index(row, col, growth)))
        })
    }
}
