pub mod aggregate;
pub mod period;
pub mod reference;
pub mod sensor;

pub use aggregate::{ComparisonRow, MonthlyAggregate};
pub use period::MonthPeriod;
pub use reference::{ClimateNormRow, EuropeCityRow, EuropeMonth};
pub use sensor::{SensorRow, SensorSet};
