use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported bit width {0}, expected one of 8, 16, 32, 64, 128")]
    UnsupportedWidth(u32),

    #[error("{bits_per_row} bits per row does not divide a {bit_count}-bit pattern")]
    NotADivisor { bit_count: usize, bits_per_row: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{columns} grid")]
    OutOfGrid {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    #[error("canonical index {index} is out of range for a {bit_count}-bit pattern")]
    IndexOutOfRange { index: usize, bit_count: usize },

    #[error("invalid {kind} '{value}'")]
    InvalidName { kind: &'static str, value: String },

    #[error("config error: {0}")]
    Toml(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("value needs {needed} bits but the pattern holds {available}")]
    TooWide { needed: u64, available: usize },

    #[error("invalid numeric literal '{0}'")]
    InvalidLiteral(String),
}
