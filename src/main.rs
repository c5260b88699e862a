use clap::Parser;
use sensor_climate_report::cli::{run, Cli};
use sensor_climate_report::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
