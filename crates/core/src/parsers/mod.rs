pub mod global_temperature;

pub use global_temperature::{MalformedDatasetError, parse_global_temperature};

use crate::model::TemperatureDataset;

/// Parse a dataset payload.
///
/// Only one wire format exists; this is the entry point surfaces call so
/// they do not depend on the format module directly.
pub fn parse_dataset(data: &[u8]) -> Result<TemperatureDataset, MalformedDatasetError> {
    parse_global_temperature(data)
}
