/// Sensor export read when no input path is given
pub const DEFAULT_INPUT_FILE: &str = "temperaturedata_202602182006.csv";

/// Output defaults
pub const DEFAULT_OUTPUT_DIR: &str = "charts";
pub const DEFAULT_DPI: u32 = 100;

/// Environment prefix for configuration overrides (CLIMATE_REPORT_OUTPUT_DIR, ...)
pub const ENV_PREFIX: &str = "CLIMATE_REPORT";

/// Sensor CSV column names
pub const COLUMN_DATE_TIME: &str = "date_time";
pub const COLUMN_CELSIUS: &str = "celsius";
pub const COLUMN_HUMIDITY: &str = "humidity";

/// Offset annotations removed from `date_time` before parsing
pub const STRIPPED_OFFSETS: [&str; 2] = [" +0100", " +0200"];

/// Timestamp layouts accepted once the offset annotation is gone
pub const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reference location of the norm table
pub const NORM_LOCATION: &str = "Köthen";

/// Number of the first figure in the report
pub const FIRST_FIGURE_NUMBER: u32 = 14;

/// Buffer size for reading sensor exports
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Weekday labels, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
