pub mod regression;
pub mod sensor_analyzer;

pub use regression::LinearFit;
pub use sensor_analyzer::{ReadingStats, SensorAnalyzer, SensorStatistics};
