use crate::charts::ChartFormat;
use crate::error::{ProcessingError, Result};
use crate::utils::constants::{DEFAULT_DPI, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReportConfig {
    pub input: PathBuf,

    pub output_dir: PathBuf,

    pub format: ChartFormat,

    #[validate(range(min = 50, max = 300))]
    pub dpi: u32,

    /// Field delimiter of the sensor export
    pub delimiter: String,
}

impl ReportConfig {
    /// Defaults, then the optional config file, then `CLIMATE_REPORT_*`
    /// environment variables.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("input", DEFAULT_INPUT_FILE)?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("format", "png")?
            .set_default("dpi", DEFAULT_DPI as i64)?
            .set_default("delimiter", ",")?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: ReportConfig = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        config.check()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        format: Option<ChartFormat>,
        dpi: Option<u32>,
    ) -> Result<Self> {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(dpi) = dpi {
            self.dpi = dpi;
        }

        self.check()?;
        Ok(self)
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ProcessingError::InvalidFormat(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))),
        }
    }

    fn check(&self) -> Result<()> {
        self.validate()?;
        self.delimiter_byte()?;
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: ChartFormat::Png,
            dpi: DEFAULT_DPI,
            delimiter: ",".to_string(),
        }
    }
}
