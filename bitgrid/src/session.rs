use num_bigint::BigUint;

use crate::config::{DisplayOptions, ViewConfig};
use crate::error::{ConfigError, ValueError};
use crate::grid::Grid;
use crate::label::Endianness;
use crate::layout::{Divisors, GrowthDirection};
use crate::numeric::{self, Interpretation};
use crate::store::{Bit, BitStore};
use crate::width::BitWidth;

/// All state of one visualizer session.
///
/// Mutations are validated before anything changes; derived outputs
/// ([`grid`](Self::grid), [`interpretation`](Self::interpretation)) are
/// recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitDisplay {
    config: ViewConfig,
    options: DisplayOptions,
    store: BitStore,
}

impl Default for BitDisplay {
    fn default() -> Self {
        BitDisplay::from_config(ViewConfig::default(), DisplayOptions::default())
    }
}

impl BitDisplay {
    /// 16 bits on one row, big endian, row-first, labels and numerals shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// The pinned big-endian, row-first variant.
    pub fn fixed() -> Self {
        BitDisplay::from_config(ViewConfig::fixed(BitWidth::default()), DisplayOptions::default())
    }

    pub fn from_config(config: ViewConfig, options: DisplayOptions) -> Self {
        BitDisplay {
            store: BitStore::new(config.bit_count()),
            config,
            options,
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn store(&self) -> &BitStore {
        &self.store
    }

    /// Change the width. Clears every bit and returns to a single row.
    pub fn set_bit_width(&mut self, width: BitWidth) {
        tracing::debug!(%width, "bit width changed, pattern cleared");
        self.config = self.config.with_bit_width(width);
        self.store.reset(width.bits());
    }

    pub fn set_bits_per_row(&mut self, bits_per_row: usize) -> Result<(), ConfigError> {
        self.config = self.config.with_bits_per_row(bits_per_row)?;
        tracing::debug!(bits_per_row, rows = self.config.rows(), "row width changed");
        Ok(())
    }

    pub fn set_endianness(&mut self, endianness: Endianness) {
        tracing::debug!(%endianness, "endianness changed");
        self.config = self.config.with_endianness(endianness);
    }

    pub fn set_growth_direction(&mut self, growth: GrowthDirection) {
        tracing::debug!(%growth, "growth direction changed");
        self.config = self.config.with_growth(growth);
    }

    pub fn set_show_bit_indices(&mut self, show: bool) {
        self.options.show_bit_indices = show;
    }

    pub fn set_show_numerals(&mut self, show: bool) {
        self.options.show_numerals = show;
    }

    /// Legal row widths for the current bit width.
    pub fn bits_per_row_choices(&self) -> Divisors {
        self.config.bits_per_row_choices()
    }

    /// Flip the bit shown at (row, col) and return its new value.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Bit, ConfigError> {
        let shape = self.config.shape();
        if !shape.contains(row, col) {
            return Err(ConfigError::OutOfGrid {
                row,
                col,
                rows: shape.rows(),
                columns: shape.bits_per_row(),
            });
        }
        let index = shape.cell_index(row, col, self.config.growth());
        self.store.toggle(index);
        let bit = self.store.get(index);
        tracing::debug!(row, col, index, bit, "toggled cell");
        Ok(bit)
    }

    /// Flip the bit at a canonical index and return its new value.
    pub fn toggle_index(&mut self, index: usize) -> Result<Bit, ConfigError> {
        let bit_count = self.config.bit_count();
        if index >= bit_count {
            return Err(ConfigError::IndexOutOfRange { index, bit_count });
        }
        self.store.toggle(index);
        let bit = self.store.get(index);
        tracing::debug!(index, bit, "toggled bit");
        Ok(bit)
    }

    /// Zero every bit.
    pub fn clear(&mut self) {
        tracing::debug!("pattern cleared");
        self.store.clear();
    }

    /// Replace the pattern so it reads as `value` under the current endianness.
    pub fn load_value(&mut self, value: &BigUint) -> Result<(), ValueError> {
        numeric::load_value(&mut self.store, value, self.config.endianness())?;
        tracing::debug!(%value, "loaded value");
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::build(&self.config, &self.options, &self.store)
    }

    pub fn interpretation(&self) -> Interpretation {
        numeric::interpret(&self.store, self.config.endianness())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_a_cell_updates_value_not_layout() {
        let mut d = BitDisplay::new();
        let before = d.grid();
        assert_eq!(d.toggle_cell(0, 0).unwrap(), 1);
        let after = d.grid();
        assert_eq!(d.interpretation().hex, "8000");
        for (a, b) in before.cells.iter().zip(&after.cells) {
            assert_eq!((a.row, a.col, a.index, a.label), (b.row, b.col, b.index, b.label));
        }
    }

    #[test]
    fn width_change_resets_everything() {
        let mut d = BitDisplay::new();
        d.set_bits_per_row(4).unwrap();
        d.toggle_index(3).unwrap();
        d.set_bit_width(BitWidth::W64);
        assert_eq!(d.store().len(), 64);
        assert_eq!(d.store().count_ones(), 0);
        assert_eq!(d.config().bits_per_row(), 64);
    }

    #[test]
    fn invalid_row_width_leaves_state_untouched() {
        let mut d = BitDisplay::new();
        d.set_bits_per_row(8).unwrap();
        let before = d.clone();
        assert!(d.set_bits_per_row(5).is_err());
        assert_eq!(d, before);
    }

    #[test]
    fn out_of_grid_toggle_is_rejected() {
        let mut d = BitDisplay::new();
        d.set_bits_per_row(4).unwrap();
        assert_eq!(
            d.toggle_cell(4, 0),
            Err(ConfigError::OutOfGrid {
                row: 4,
                col: 0,
                rows: 4,
                columns: 4
            })
        );
        assert_eq!(d.store().count_ones(), 0);
        assert!(d.toggle_index(16).is_err());
    }

    #[test]
    fn endianness_flip_keeps_pattern_and_changes_value() {
        let mut d = BitDisplay::from_config(ViewConfig::fixed(BitWidth::W8), DisplayOptions::default());
        d.toggle_index(0).unwrap();
        assert_eq!(d.interpretation().decimal, BigUint::from(128u32));
        d.set_endianness(Endianness::Little);
        assert_eq!(d.interpretation().decimal, BigUint::from(1u32));
        assert_eq!(d.store().get(0), 1);
    }

    #[test]
    fn column_growth_toggle_hits_mapped_index() {
        let mut d = BitDisplay::new();
        d.set_bits_per_row(4).unwrap();
        d.set_growth_direction(GrowthDirection::Column);
        d.toggle_cell(1, 2).unwrap();
        assert_eq!(d.store().get(9), 1);
        assert_eq!(d.store().count_ones(), 1);
    }

    #[test]
    fn load_value_then_clear() {
        let mut d = BitDisplay::new();
        d.load_value(&BigUint::from(0xA5u32)).unwrap();
        assert_eq!(d.interpretation().hex, "A5");
        assert!(d.load_value(&BigUint::from(0x1_0000u32)).is_err());
        assert_eq!(d.interpretation().hex, "A5");
        d.clear();
        assert_eq!(d.interpretation().hex, "0");
    }

    #[test]
    fn fixed_variant_is_big_endian_row_first() {
        let d = BitDisplay::fixed();
        assert_eq!(d.config().endianness(), Endianness::Big);
        assert_eq!(d.config().growth(), GrowthDirection::Row);
        assert_eq!(d.grid().cell(0, 0).label, Some(15));
    }
}
