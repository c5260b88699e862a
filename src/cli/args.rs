use crate::charts::ChartFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sensor-climate-report")]
#[command(about = "Climate report from a temperature/humidity sensor export")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Configuration file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the report charts (figures 14-22) into an output directory
    Report {
        #[arg(
            short,
            long,
            help = "Sensor CSV export [default: temperaturedata_202602182006.csv]"
        )]
        input: Option<PathBuf>,

        #[arg(short, long, help = "Chart output directory [default: charts]")]
        output_dir: Option<PathBuf>,

        #[arg(short, long, value_enum, help = "Chart file format [default: png]")]
        format: Option<ChartFormat>,

        #[arg(long, help = "Pixels per inch of figure size [default: 100]")]
        dpi: Option<u32>,

        #[arg(short, long, default_value = "false", help = "Hide the progress bar")]
        quiet: bool,
    },

    /// Print the sensor summary and the monthly comparison against the norms
    Summary {
        #[arg(
            short,
            long,
            help = "Sensor CSV export [default: temperaturedata_202602182006.csv]"
        )]
        input: Option<PathBuf>,
    },
}
