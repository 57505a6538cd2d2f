pub mod config;
pub mod error;
pub mod grid;
pub mod label;
pub mod layout;
pub mod numeric;
pub mod session;
pub mod store;
pub mod width;

pub use config::{DisplayOptions, ViewConfig};
pub use error::{ConfigError, ValueError};
pub use grid::{Grid, GridCell};
pub use label::Endianness;
pub use layout::GrowthDirection;
pub use numeric::Interpretation;
pub use session::BitDisplay;
pub use store::{Bit, BitStore};
pub use width::BitWidth;
