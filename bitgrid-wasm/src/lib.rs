use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use bitgrid::{
    BitDisplay as CoreDisplay, BitWidth, DisplayOptions, Endianness, GridCell, GrowthDirection,
    Interpretation, ViewConfig,
};

// ── Tsify types for TypeScript interface generation ──

/// Initial view passed from JavaScript. Omitted fields take the defaults.
#[derive(Tsify, Serialize, Deserialize, Default)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct WasmViewConfig {
    /// Bit width: 8, 16, 32, 64 or 128 (default: 16).
    #[serde(default)]
    pub bit_width: Option<u32>,
    /// Bits per row (default: the whole width).
    #[serde(default)]
    pub bits_per_row: Option<usize>,
    /// "big" or "little" (default: "big").
    #[serde(default)]
    pub endianness: Option<String>,
    /// "row" or "column" (default: "row").
    #[serde(default)]
    pub growth: Option<String>,
    /// Show bit numbers above cells (default: true).
    #[serde(default)]
    pub show_bit_indices: Option<bool>,
    /// Show 1-based numerals inside cells (default: true).
    #[serde(default)]
    pub show_numerals: Option<bool>,
}

/// One grid cell returned to JavaScript.
#[derive(Tsify, Serialize, Deserialize)]
#[tsify(into_wasm_abi)]
pub struct WasmCell {
    pub row: usize,
    pub col: usize,
    pub index: usize,
    pub bit: u8,
    pub label: Option<usize>,
    pub numeral: Option<usize>,
}

/// The grid, row-major.
#[derive(Tsify, Serialize, Deserialize)]
#[tsify(into_wasm_abi)]
pub struct WasmGrid {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<WasmCell>,
}

/// Binary, decimal and hex readings. Decimal is a string so 128-bit values survive.
#[derive(Tsify, Serialize, Deserialize)]
#[tsify(into_wasm_abi)]
pub struct WasmValues {
    pub binary: String,
    pub decimal: String,
    /// Hex digits without prefix.
    pub hex: String,
}

// ── Session wrapper ──

/// Bit display session for use from JavaScript/TypeScript.
#[wasm_bindgen]
pub struct BitDisplay {
    inner: CoreDisplay,
}

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn view_from_wasm(config: &WasmViewConfig) -> Result<(ViewConfig, DisplayOptions), JsError> {
    let width = match config.bit_width {
        Some(bits) => BitWidth::try_from(bits).map_err(js_err)?,
        None => BitWidth::default(),
    };
    let endianness: Endianness = match &config.endianness {
        Some(name) => name.parse().map_err(js_err)?,
        None => Endianness::default(),
    };
    let growth: GrowthDirection = match &config.growth {
        Some(name) => name.parse().map_err(js_err)?,
        None => GrowthDirection::default(),
    };
    let bits_per_row = config.bits_per_row.unwrap_or(width.bits());
    let view = ViewConfig::new(width, bits_per_row, endianness, growth).map_err(js_err)?;

    let defaults = DisplayOptions::default();
    let options = DisplayOptions {
        show_bit_indices: config.show_bit_indices.unwrap_or(defaults.show_bit_indices),
        show_numerals: config.show_numerals.unwrap_or(defaults.show_numerals),
    };
    Ok((view, options))
}

fn cell_to_wasm(cell: &GridCell) -> WasmCell {
    WasmCell {
        row: cell.row,
        col: cell.col,
        index: cell.index,
        bit: cell.bit,
        label: cell.label,
        numeral: cell.numeral,
    }
}

fn values_to_wasm(values: Interpretation) -> WasmValues {
    WasmValues {
        decimal: values.decimal.to_string(),
        binary: values.binary,
        hex: values.hex,
    }
}

#[wasm_bindgen]
impl BitDisplay {
    /// Create a session; pass `{}` for the default 16-bit single-row view.
    #[wasm_bindgen(constructor)]
    pub fn new(config: WasmViewConfig) -> Result<BitDisplay, JsError> {
        let (view, options) = view_from_wasm(&config)?;
        Ok(BitDisplay {
            inner: CoreDisplay::from_config(view, options),
        })
    }

    /// The pinned big-endian, row-first variant.
    pub fn fixed() -> BitDisplay {
        BitDisplay {
            inner: CoreDisplay::fixed(),
        }
    }

    /// Change the bit width; clears the pattern and returns to one row.
    pub fn set_bit_width(&mut self, bits: u32) -> Result<(), JsError> {
        let width = BitWidth::try_from(bits).map_err(js_err)?;
        self.inner.set_bit_width(width);
        Ok(())
    }

    pub fn set_bits_per_row(&mut self, bits_per_row: usize) -> Result<(), JsError> {
        self.inner.set_bits_per_row(bits_per_row).map_err(js_err)
    }

    /// "big" or "little".
    pub fn set_endianness(&mut self, name: &str) -> Result<(), JsError> {
        self.inner.set_endianness(name.parse().map_err(js_err)?);
        Ok(())
    }

    /// "row" or "column".
    pub fn set_growth_direction(&mut self, name: &str) -> Result<(), JsError> {
        self.inner.set_growth_direction(name.parse().map_err(js_err)?);
        Ok(())
    }

    pub fn set_show_bit_indices(&mut self, show: bool) {
        self.inner.set_show_bit_indices(show);
    }

    pub fn set_show_numerals(&mut self, show: bool) {
        self.inner.set_show_numerals(show);
    }

    /// Flip the bit shown at (row, col); returns its new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<u8, JsError> {
        self.inner.toggle_cell(row, col).map_err(js_err)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Legal bits-per-row values for the current width.
    pub fn bits_per_row_choices(&self) -> Vec<u32> {
        self.inner
            .bits_per_row_choices()
            .iter()
            .map(|&d| d as u32)
            .collect()
    }

    pub fn bit_count(&self) -> usize {
        self.inner.config().bit_count()
    }

    pub fn bits_per_row(&self) -> usize {
        self.inner.config().bits_per_row()
    }

    /// The grid as a `WasmGrid` object.
    pub fn grid(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.grid_snapshot()).map_err(js_err)
    }

    /// The readings as a `WasmValues` object.
    pub fn values(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.values_snapshot()).map_err(js_err)
    }
}

impl BitDisplay {
    fn grid_snapshot(&self) -> WasmGrid {
        let grid = self.inner.grid();
        WasmGrid {
            rows: grid.rows,
            columns: grid.columns,
            cells: grid.cells.iter().map(cell_to_wasm).collect(),
        }
    }

    fn values_snapshot(&self) -> WasmValues {
        values_to_wasm(self.inner.interpretation())
    }
}
