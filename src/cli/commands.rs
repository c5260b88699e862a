use crate::analyzers::SensorAnalyzer;
use crate::charts::report::REPORT_FIGURE_COUNT;
use crate::charts::{ChartWriter, FigureCounter, ReportRenderer};
use crate::cli::args::{Cli, Commands};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::models::{ComparisonRow, SensorSet};
use crate::processors::{ComparisonMerger, MonthlyAggregator};
use crate::readers::{climate_norms, europe_cities, SensorReader};
use crate::utils::constants::NORM_LOCATION;
use crate::utils::progress::ProgressReporter;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, Level};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = ReportConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Report {
            input,
            output_dir,
            format,
            dpi,
            quiet,
        } => {
            let config = config.with_overrides(input, output_dir, format, dpi)?;

            println!("Generating climate report...");
            println!("Input file: {}", config.input.display());
            println!("Output directory: {}", config.output_dir.display());

            let sensors = load_sensors(&config, quiet)?;
            print_comparison(&compare_with_norms(&sensors)?);

            let writer = ChartWriter::new(&config.output_dir, config.format, config.dpi);
            let renderer = ReportRenderer::new(writer);
            let mut counter = FigureCounter::new();

            let progress = ProgressReporter::new(REPORT_FIGURE_COUNT, "Rendering charts...", quiet);
            let written =
                renderer.render_all(&sensors, &europe_cities(), &mut counter, Some(&progress))?;
            progress.finish_with_message(&format!("Rendered {} charts", written.len()));

            println!(
                "Report complete: {} charts written to {}",
                written.len(),
                renderer.writer().output_dir().display()
            );
        }

        Commands::Summary { input } => {
            let config = config.with_overrides(input, None, None, None)?;

            println!("Analyzing sensor file: {}", config.input.display());

            let sensors = load_sensors(&config, false)?;
            let statistics = SensorAnalyzer::new().analyze(&sensors)?;
            println!("\n{}", statistics.summary());

            print_comparison(&compare_with_norms(&sensors)?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt().with_max_level(level);

    let initialised = match log_file {
        Some(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    // A subscriber installed earlier keeps receiving events
    if let Err(e) = initialised {
        debug!("Logging already initialised: {}", e);
    }

    Ok(())
}

fn load_sensors(config: &ReportConfig, quiet: bool) -> Result<SensorSet> {
    let progress = ProgressReporter::new_spinner("Loading sensor data...", quiet);

    let reader = SensorReader::with_delimiter(config.delimiter_byte()?);
    let sensors = reader.read_sensor_file(&config.input)?;

    progress.finish_with_message(&format!("Loaded {} sensor rows", sensors.len()));
    Ok(sensors)
}

fn compare_with_norms(sensors: &SensorSet) -> Result<Vec<ComparisonRow>> {
    let aggregates = MonthlyAggregator::new().aggregate(sensors);
    let comparison = ComparisonMerger::new().merge(&aggregates, &climate_norms()?);

    let matched = comparison
        .iter()
        .filter(|row| row.has_sensor_data() && row.has_norm())
        .count();
    info!(
        months = comparison.len(),
        matched,
        location = NORM_LOCATION,
        "Compared monthly means with climate norms"
    );

    Ok(comparison)
}

fn print_comparison(comparison: &[ComparisonRow]) {
    println!("\nMonthly means vs. {} climate norms:", NORM_LOCATION);
    println!("{}", ComparisonMerger::new().report(comparison));
}
