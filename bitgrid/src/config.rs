use crate::error::ConfigError;
use crate::label::Endianness;
use crate::layout::{self, Divisors, GridShape, GrowthDirection};
use crate::width::BitWidth;

/// Validated layout parameters: width, row width, endianness and growth.
///
/// Construction goes through [`ViewConfig::new`], so a `ViewConfig` always has
/// a row width that divides its bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewConfig {
    bit_width: BitWidth,
    bits_per_row: usize,
    endianness: Endianness,
    growth: GrowthDirection,
}

/// Presentation toggles for labels above and numerals inside cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayOptions {
    pub show_bit_indices: bool,
    pub show_numerals: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_bit_indices: true,
            show_numerals: true,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig::single_row(BitWidth::default(), Endianness::Big, GrowthDirection::Row)
    }
}

impl ViewConfig {
    /// Validate a full set of layout parameters.
    pub fn new(
        bit_width: BitWidth,
        bits_per_row: usize,
        endianness: Endianness,
        growth: GrowthDirection,
    ) -> Result<ViewConfig, ConfigError> {
        layout::check_divisor(bit_width.bits(), bits_per_row)?;
        Ok(ViewConfig {
            bit_width,
            bits_per_row,
            endianness,
            growth,
        })
    }

    /// All bits on one row.
    pub fn single_row(bit_width: BitWidth, endianness: Endianness, growth: GrowthDirection) -> Self {
        ViewConfig {
            bit_width,
            bits_per_row: bit_width.bits(),
            endianness,
            growth,
        }
    }

    /// The pinned variant: big endian, row-first, one row.
    pub fn fixed(bit_width: BitWidth) -> Self {
        ViewConfig::single_row(bit_width, Endianness::Big, GrowthDirection::Row)
    }

    pub fn bit_width(&self) -> BitWidth {
        self.bit_width
    }

    pub fn bit_count(&self) -> usize {
        self.bit_width.bits()
    }

    pub fn bits_per_row(&self) -> usize {
        self.bits_per_row
    }

    pub fn rows(&self) -> usize {
        self.bit_count() / self.bits_per_row
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn growth(&self) -> GrowthDirection {
        self.growth
    }

    pub fn shape(&self) -> GridShape {
        GridShape::new(self.bit_count(), self.bits_per_row)
            .expect("ViewConfig row width is validated on construction")
    }

    /// Legal row widths for the current bit width.
    pub fn bits_per_row_choices(&self) -> Divisors {
        layout::divisors(self.bit_count())
    }

    /// Switch to a new bit width. The row width falls back to a single row.
    pub fn with_bit_width(self, bit_width: BitWidth) -> Self {
        ViewConfig::single_row(bit_width, self.endianness, self.growth)
    }

    pub fn with_bits_per_row(self, bits_per_row: usize) -> Result<Self, ConfigError> {
        ViewConfig::new(self.bit_width, bits_per_row, self.endianness, self.growth)
    }

    pub fn with_endianness(self, endianness: Endianness) -> Self {
        ViewConfig { endianness, ..self }
    }

    pub fn with_growth(self, growth: GrowthDirection) -> Self {
        ViewConfig { growth, ..self }
    }
}

/// TOML form of a view: every key is optional.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ViewFile {
    bit_width: Option<u32>,
    bits_per_row: Option<usize>,
    #[serde(default)]
    endianness: Endianness,
    #[serde(default)]
    growth: GrowthDirection,
    #[serde(default)]
    display: DisplayOptions,
}

#[cfg(feature = "serde")]
impl ViewConfig {
    /// Parse a view description from TOML and validate it.
    ///
    /// Missing keys fall back to the defaults; a missing `bits_per_row`
    /// means a single row.
    pub fn from_toml(toml_str: &str) -> Result<(ViewConfig, DisplayOptions), ConfigError> {
        let file: ViewFile = toml::from_str(toml_str).map_err(|e| ConfigError::Toml(e.to_string()))?;
        let bit_width = match file.bit_width {
            Some(bits) => BitWidth::try_from(bits)?,
            None => BitWidth::default(),
        };
        let bits_per_row = file.bits_per_row.unwrap_or(bit_width.bits());
        let config = ViewConfig::new(bit_width, bits_per_row, file.endianness, file.growth)?;
        Ok((config, file.display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_view() {
        let c = ViewConfig::default();
        assert_eq!(c.bit_count(), 16);
        assert_eq!(c.bits_per_row(), 16);
        assert_eq!(c.rows(), 1);
        assert_eq!(c.endianness(), Endianness::Big);
        assert_eq!(c.growth(), GrowthDirection::Row);
    }

    #[test]
    fn new_rejects_non_divisor() {
        let err = ViewConfig::new(BitWidth::W32, 6, Endianness::Big, GrowthDirection::Row).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotADivisor {
                bit_count: 32,
                bits_per_row: 6
            }
        );
    }

    #[test]
    fn width_change_resets_row_width() {
        let c = ViewConfig::new(BitWidth::W32, 4, Endianness::Little, GrowthDirection::Column)
            .unwrap()
            .with_bit_width(BitWidth::W128);
        assert_eq!(c.bits_per_row(), 128);
        assert_eq!(c.endianness(), Endianness::Little);
        assert_eq!(c.growth(), GrowthDirection::Column);
    }

    #[test]
    fn choices_are_divisors() {
        let c = ViewConfig::default();
        assert_eq!(c.bits_per_row_choices().as_slice(), &[1, 2, 4, 8, 16]);
    }

    #[test]
    fn toml_support_is_built_for_tests() {
        assert!(cfg!(feature = "serde"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_toml_view() {
        let toml_str = r#"
            bit_width = 32
            bits_per_row = 8
            endianness = "little"
            growth = "column"

            [display]
            show_numerals = false
        "#;
        let (c, d) = ViewConfig::from_toml(toml_str).unwrap();
        assert_eq!(c.bit_count(), 32);
        assert_eq!(c.rows(), 4);
        assert_eq!(c.endianness(), Endianness::Little);
        assert_eq!(c.growth(), GrowthDirection::Column);
        assert!(d.show_bit_indices);
        assert!(!d.show_numerals);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_toml_rejects_bad_width() {
        assert_eq!(
            ViewConfig::from_toml("bit_width = 24").unwrap_err(),
            ConfigError::UnsupportedWidth(24)
        );
        assert!(matches!(
            ViewConfig::from_toml("bit_width = 16\nbits_per_row = 3"),
            Err(ConfigError::NotADivisor { .. })
        ));
        assert!(matches!(
            ViewConfig::from_toml("endianness = \"middle\""),
            Err(ConfigError::Toml(_))
        ));
    }
}
