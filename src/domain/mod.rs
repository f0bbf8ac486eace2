mod coordinate;
pub mod events;
mod preset_location;

pub use coordinate::{Coordinate, CoordinateError};
pub use preset_location::{PRESET_CATALOG, PresetLocation};
