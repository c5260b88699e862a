use crate::error::{ProcessingError, Result};
use crate::models::{SensorRow, SensorSet};
use crate::utils::constants::{
    COLUMN_CELSIUS, COLUMN_DATE_TIME, COLUMN_HUMIDITY, DATE_FORMAT, DEFAULT_BUFFER_SIZE,
    STRIPPED_OFFSETS, TIMESTAMP_FORMATS,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Raw CSV row; extra columns in the export are ignored and missing trailing
/// cells read as absent.
#[derive(Debug, Deserialize)]
struct RawSensorRecord {
    date_time: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    celsius: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    humidity: Option<f64>,
}

/// `NaN`, `inf` and friends parse as floats but are missing readings.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

pub struct SensorReader {
    delimiter: u8,
}

impl SensorReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read a sensor export. A missing file or a file without the expected
    /// columns is an error; rows with unparseable timestamps are kept.
    pub fn read_sensor_file(&self, path: &Path) -> Result<SensorSet> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let set = self.read_from(reader)?;

        info!(
            path = %path.display(),
            rows = set.len(),
            "Loaded sensor file"
        );

        Ok(set)
    }

    pub fn read_from<R: Read>(&self, input: R) -> Result<SensorSet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(input);

        let headers = csv_reader.headers()?.clone();
        for column in [COLUMN_DATE_TIME, COLUMN_CELSIUS, COLUMN_HUMIDITY] {
            if !headers.iter().any(|h| h == column) {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Sensor file is missing required column '{}'",
                    column
                )));
            }
        }

        let mut rows = Vec::new();
        for result in csv_reader.deserialize::<RawSensorRecord>() {
            let raw = result?;
            let timestamp = parse_timestamp(&raw.date_time);
            if timestamp.is_none() {
                debug!(date_time = %raw.date_time, "Unparseable timestamp, keeping row");
            }
            rows.push(SensorRow::new(
                timestamp,
                finite(raw.celsius),
                finite(raw.humidity),
            ));
        }

        let set = SensorSet::new(rows);
        let invalid = set.invalid_timestamp_count();
        if invalid > 0 {
            warn!(
                invalid,
                total = set.len(),
                "Rows with unparseable timestamps"
            );
        }

        Ok(set)
    }
}

impl Default for SensorReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the literal ` +0100` / ` +0200` annotations. Other offsets are left
/// in place and will fail to parse.
pub fn normalize_timestamp(raw: &str) -> String {
    STRIPPED_OFFSETS
        .iter()
        .fold(raw.to_string(), |acc, offset| acc.replace(offset, ""))
}

/// Parse a `date_time` cell, returning `None` instead of failing.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let normalized = normalize_timestamp(raw);
    let text = normalized.trim();

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_normalize_timestamp() {
        assert_eq!(
            normalize_timestamp("2025-10-01 12:00:00 +0100"),
            "2025-10-01 12:00:00"
        );
        assert_eq!(
            normalize_timestamp("2025-10-01 12:00:00 +0200"),
            "2025-10-01 12:00:00"
        );
        assert_eq!(
            normalize_timestamp("2025-10-01 12:00:00 +0300"),
            "2025-10-01 12:00:00 +0300"
        );
    }

    #[test]
    fn test_both_offsets_parse_to_same_timestamp() {
        let winter = parse_timestamp("2025-10-01 12:00:00 +0100").unwrap();
        let summer = parse_timestamp("2025-10-01 12:00:00 +0200").unwrap();

        assert_eq!(winter, summer);
        assert_eq!(winter.hour(), 12);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2025-10-01T08:30:00").is_some());
        assert!(parse_timestamp("2025-10-01 08:30").is_some());
        assert!(parse_timestamp("2025-10-01 08:30:00.250").is_some());
        assert_eq!(
            parse_timestamp("2025-10-01").unwrap().hour(),
            0
        );
    }

    #[test]
    fn test_unparseable_timestamps() {
        assert_eq!(parse_timestamp("not-a-date"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("2025-10-01 12:00:00 +0300"), None);
    }

    #[test]
    fn test_read_sensor_csv() {
        let csv = "date_time,celsius,humidity,sensor\n\
                   2025-10-01 12:00:00 +0200,10.0,80.0,a\n\
                   not-a-date,11.0,81.0,a\n\
                   2025-10-02 12:00:00 +0200,,82.0,a\n";

        let set = SensorReader::new().read_from(csv.as_bytes()).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.invalid_timestamp_count(), 1);
        assert_eq!(set.rows[1].celsius, Some(11.0));
        assert_eq!(set.rows[1].month, None);
        assert_eq!(set.rows[2].celsius, None);
        assert_eq!(set.rows[2].humidity, Some(82.0));
    }

    #[test]
    fn test_non_numeric_readings_become_absent() {
        let csv = "date_time,celsius,humidity\n2025-10-01 12:00:00,n/a,80\n";

        let set = SensorReader::new().read_from(csv.as_bytes()).unwrap();

        assert_eq!(set.rows[0].celsius, None);
        assert_eq!(set.rows[0].humidity, Some(80.0));
    }

    #[test]
    fn test_nan_readings_become_absent() {
        let csv = "date_time,celsius,humidity\n\
                   2025-10-01 12:00:00,10.0,80\n\
                   2025-10-02 12:00:00,NaN,81\n\
                   2025-10-03 12:00:00,14.0,nan\n\
                   2025-10-04 12:00:00,inf,-inf\n";

        let set = SensorReader::new().read_from(csv.as_bytes()).unwrap();

        let readings: Vec<(Option<f64>, Option<f64>)> =
            set.rows.iter().map(|r| (r.celsius, r.humidity)).collect();
        assert_eq!(
            readings,
            vec![
                (Some(10.0), Some(80.0)),
                (None, Some(81.0)),
                (Some(14.0), None),
                (None, None),
            ]
        );
    }

    #[test]
    fn test_short_row_is_kept() {
        let csv = "date_time,celsius,humidity\n\
                   2025-10-01 12:00:00,10.0,80\n\
                   2025-10-02 12:00:00,12.0\n\
                   2025-10-03 12:00:00\n";

        let set = SensorReader::new().read_from(csv.as_bytes()).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.rows[1].celsius, Some(12.0));
        assert_eq!(set.rows[1].humidity, None);
        assert_eq!(set.rows[2].celsius, None);
        assert_eq!(set.rows[2].hour, Some(12));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "date_time,temperature\n2025-10-01 12:00:00,10.0\n";
        assert!(SensorReader::new().read_from(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let reader = SensorReader::new();
        assert!(reader
            .read_sensor_file(Path::new("/nonexistent/sensor.csv"))
            .is_err());
    }

    #[test]
    fn test_read_semicolon_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "date_time;celsius;humidity")?;
        writeln!(temp_file, "2025-11-05 07:15:00 +0100;3.5;90.0")?;

        let set = SensorReader::with_delimiter(b';').read_sensor_file(temp_file.path())?;

        assert_eq!(set.len(), 1);
        assert_eq!(set.rows[0].hour, Some(7));
        Ok(())
    }
}
