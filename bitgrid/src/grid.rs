use crate::config::{DisplayOptions, ViewConfig};
use crate::label::{self, Endianness};
use crate::store::{Bit, BitStore};

/// One rendered cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    /// Canonical index of the bit this cell shows.
    pub index: usize,
    pub bit: Bit,
    /// Bit number shown above the cell, if bit indices are enabled.
    pub label: Option<usize>,
    /// One-based numeral shown inside the cell, if numerals are enabled.
    pub numeral: Option<usize>,
}

/// Snapshot of every cell under one configuration, in row-major display order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    pub rows: usize,
    pub columns: usize,
    pub endianness: Endianness,
    pub cells: Vec<GridCell>,
}

impl Grid {
    /// Lay out `store` under `config`, applying the display toggles.
    pub fn build(config: &ViewConfig, options: &DisplayOptions, store: &BitStore) -> Grid {
        let shape = config.shape();
        assert_eq!(
            store.len(),
            shape.bit_count(),
            "store length does not match configured width"
        );
        let cells = shape
            .cells(config.growth())
            .map(|(row, col, index)| {
                let l = label::display_label(index, shape.bit_count(), config.endianness());
                GridCell {
                    row,
                    col,
                    index,
                    bit: store.get(index),
                    label: options.show_bit_indices.then_some(l),
                    numeral: options.show_numerals.then(|| label::numeral(l)),
                }
            })
            .collect();
        Grid {
            rows: shape.rows(),
            columns: shape.bits_per_row(),
            endianness: config.endianness(),
            cells,
        }
    }

    /// Get the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> &GridCell {
        assert!(row < self.rows && col < self.columns);
        &self.cells[row * self.columns + col]
    }

    /// Cells of one display row, left to right.
    pub fn row(&self, row: usize) -> &[GridCell] {
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.columns)
    }
}
