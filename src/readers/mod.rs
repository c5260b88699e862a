pub mod reference_data;
pub mod sensor_reader;

pub use reference_data::{climate_norms, europe_cities};
pub use sensor_reader::{normalize_timestamp, parse_timestamp, SensorReader};
