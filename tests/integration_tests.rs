use pretty_assertions::assert_eq;
use sensor_climate_report::charts::{
    ChartFormat, ChartWriter, CorrelationFigure, EuropeBarFigure, EuropeHeatmapFigure, Figure,
    FigureCounter, ReportRenderer, TrendFigure, WeekdayBoxplotFigure, WeeklyHeatmapFigure,
};
use sensor_climate_report::models::{EuropeMonth, MonthPeriod, SensorSet};
use sensor_climate_report::processors::{ComparisonMerger, MonthlyAggregator};
use sensor_climate_report::readers::{climate_norms, europe_cities, SensorReader};
use sensor_climate_report::utils::figure_filename;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write CSV fixture");
    file
}

fn load(contents: &str) -> SensorSet {
    let file = write_csv(contents);
    SensorReader::new()
        .read_sensor_file(file.path())
        .expect("Failed to read sensor file")
}

/// Three weeks of readings across two months, with offset-suffixed timestamps
fn sample_export() -> String {
    let mut csv = String::from("date_time,celsius,humidity\n");
    for day in 20..=31 {
        csv.push_str(&format!(
            "2025-10-{:02} 08:00:00 +0200,{:.1},{:.1}\n",
            day,
            10.0 - day as f64 * 0.2,
            80.0 + day as f64 * 0.3
        ));
    }
    for day in 1..=9 {
        csv.push_str(&format!(
            "2025-11-{:02} 08:00:00 +0100,{:.1},{:.1}\n",
            day,
            4.0 - day as f64 * 0.1,
            88.0 + day as f64 * 0.2
        ));
    }
    csv
}

#[test]
fn test_three_rows_same_month_average() {
    let sensors = load(
        "date_time,celsius,humidity\n\
         2025-10-01 12:00:00 +0200,10.0,80.0\n\
         2025-10-02 12:00:00 +0200,12.0,82.0\n\
         2025-10-03 12:00:00 +0200,14.0,84.0\n",
    );

    let aggregates = MonthlyAggregator::new().aggregate(&sensors);

    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].month, MonthPeriod::new(2025, 10).unwrap());
    assert_eq!(aggregates[0].mean_celsius, Some(12.0));
    assert_eq!(aggregates[0].mean_humidity, Some(82.0));
}

#[test]
fn test_unparseable_timestamp_is_retained_but_not_aggregated() {
    let sensors = load(
        "date_time,celsius,humidity\n\
         2025-10-01 12:00:00 +0200,10.0,80.0\n\
         not-a-date,30.0,40.0\n\
         2025-10-02 12:00:00 +0200,12.0,82.0\n",
    );

    assert_eq!(sensors.len(), 3);
    assert_eq!(sensors.invalid_timestamp_count(), 1);

    let broken = &sensors.rows[1];
    assert_eq!(broken.timestamp, None);
    assert_eq!(broken.month, None);
    assert_eq!(broken.hour, None);
    assert_eq!(broken.weekday, None);
    assert_eq!(broken.celsius, Some(30.0));

    let aggregates = MonthlyAggregator::new().aggregate(&sensors);
    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].mean_celsius, Some(11.0));
    assert_eq!(aggregates[0].sample_count, 2);
}

#[test]
fn test_nan_cells_do_not_reach_monthly_means() {
    let sensors = load(
        "date_time,celsius,humidity\n\
         2025-10-01 12:00:00 +0200,10.0,80\n\
         2025-10-02 12:00:00 +0200,NaN,81\n\
         2025-10-03 12:00:00 +0200,14.0,nan\n",
    );

    let aggregates = MonthlyAggregator::new().aggregate(&sensors);

    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].mean_celsius, Some(12.0));
    assert_eq!(aggregates[0].mean_humidity, Some(80.5));
    assert_eq!(aggregates[0].sample_count, 3);
}

#[test]
fn test_comparison_covers_every_month_once() {
    let sensors = load(
        "date_time,celsius,humidity\n\
         2025-09-30 23:00:00 +0200,12.0,70.0\n\
         2025-10-15 12:00:00 +0200,8.0,85.0\n",
    );

    let aggregates = MonthlyAggregator::new().aggregate(&sensors);
    let norms = climate_norms().unwrap();
    let comparison = ComparisonMerger::new().merge(&aggregates, &norms);

    let months: Vec<String> = comparison.iter().map(|r| r.month.to_string()).collect();
    assert_eq!(
        months,
        vec!["2025-09", "2025-10", "2025-11", "2025-12", "2026-01"]
    );

    // Sensor-only month
    assert_eq!(comparison[0].mean_celsius, Some(12.0));
    assert_eq!(comparison[0].celsius_norm, None);

    // Both sides
    assert_eq!(comparison[1].celsius_norm, Some(9.5));
    assert!((comparison[1].celsius_delta().unwrap() - (-1.5)).abs() < 1e-9);

    // Norm-only month
    assert_eq!(comparison[2].mean_celsius, None);
    assert_eq!(comparison[2].celsius_norm, Some(4.2));

    let report = ComparisonMerger::new().report(&comparison);
    assert_eq!(report.lines().count(), comparison.len() + 1);
}

#[test]
fn test_semicolon_delimited_export() {
    let file = write_csv(
        "date_time;celsius;humidity\n\
         2025-10-01 12:00:00 +0100;5.5;90.0\n",
    );

    let sensors = SensorReader::with_delimiter(b';')
        .read_sensor_file(file.path())
        .unwrap();

    assert_eq!(sensors.len(), 1);
    assert_eq!(sensors.rows[0].celsius, Some(5.5));
    assert_eq!(sensors.rows[0].hour, Some(12));
}

#[test]
fn test_missing_file_is_fatal() {
    let result = SensorReader::new().read_sensor_file(&PathBuf::from("/nonexistent/sensor.csv"));
    assert!(result.is_err());
}

#[test]
fn test_missing_column_is_fatal() {
    let file = write_csv("date_time,celsius\n2025-10-01 12:00:00,5.0\n");
    assert!(SensorReader::new().read_sensor_file(file.path()).is_err());
}

#[test]
fn test_report_figures_prepare_from_sample_export() {
    let sensors = load(&sample_export());
    let cities = europe_cities();

    let trend = TrendFigure::prepare(&sensors).unwrap();
    assert_eq!(trend.series.len(), 21);
    assert!(trend.fit.slope < 0.0);

    let weekly = WeeklyHeatmapFigure::prepare(&sensors).unwrap();
    // Weeks ending 2025-10-26, 11-02, 11-09
    assert_eq!(weekly.grid.week_count(), 3);
    assert_eq!(weekly.grid.weekdays, vec![6]);

    let boxplot = WeekdayBoxplotFigure::prepare(&sensors).unwrap();
    assert_eq!(boxplot.groups.len(), 7);
    let readings: usize = boxplot.groups.iter().map(|(_, values)| values.len()).sum();
    assert_eq!(readings, 21);

    let correlation = CorrelationFigure::prepare(&sensors).unwrap();
    assert_eq!(correlation.points.len(), 21);
    assert!(correlation.fit.slope < 0.0);

    let bars = EuropeBarFigure::for_each_month(&cities);
    assert_eq!(bars.len(), 4);
    assert_eq!(bars[0].month, EuropeMonth::October);
    assert_eq!(bars[0].bars.len(), cities.len());

    let heatmap = EuropeHeatmapFigure::prepare(&cities);
    assert_eq!(heatmap.cells.len(), 4);
    assert_eq!(heatmap.cells[0].len(), cities.len());
}

#[test]
fn test_figure_numbers_and_file_names() {
    let sensors = load(&sample_export());
    let cities = europe_cities();

    let mut titles = vec![
        TrendFigure::prepare(&sensors).unwrap().title(),
        WeeklyHeatmapFigure::prepare(&sensors).unwrap().title(),
        WeekdayBoxplotFigure::prepare(&sensors).unwrap().title(),
        CorrelationFigure::prepare(&sensors).unwrap().title(),
    ];
    titles.extend(EuropeBarFigure::for_each_month(&cities).iter().map(|f| f.title()));
    titles.push(EuropeHeatmapFigure::prepare(&cities).title());

    let mut counter = FigureCounter::new();
    let names: Vec<PathBuf> = titles
        .iter()
        .map(|title| figure_filename(counter.next_number(), title, ChartFormat::Png))
        .collect();

    assert_eq!(
        names,
        vec![
            PathBuf::from("fig14-temperature-trend.png"),
            PathBuf::from("fig15-weekly-temperature-heatmap.png"),
            PathBuf::from("fig16-temperature-by-weekday.png"),
            PathBuf::from("fig17-correlation.png"),
            PathBuf::from("fig18-oct-comparison-europe.png"),
            PathBuf::from("fig19-nov-comparison-europe.png"),
            PathBuf::from("fig20-dec-comparison-europe.png"),
            PathBuf::from("fig21-jan-comparison-europe.png"),
            PathBuf::from("fig22-europe-heatmap.png"),
        ]
    );
    assert_eq!(counter.peek(), 23);
}

#[test]
fn test_empty_export_fails_chart_preparation() {
    let sensors = load("date_time,celsius,humidity\nnot-a-date,,\n");

    assert!(TrendFigure::prepare(&sensors).is_err());
    assert!(WeeklyHeatmapFigure::prepare(&sensors).is_err());
    assert!(WeekdayBoxplotFigure::prepare(&sensors).is_err());
    assert!(CorrelationFigure::prepare(&sensors).is_err());
}

#[test]
fn test_render_full_report_to_svg() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("charts");

    // A NaN reading among valid ones must not disturb rendering
    let mut csv = sample_export();
    csv.push_str("2025-11-09 20:00:00 +0100,NaN,nan\n");
    let sensors = load(&csv);

    let renderer = ReportRenderer::new(ChartWriter::new(&output_dir, ChartFormat::Svg, 50));
    let mut counter = FigureCounter::new();
    let written = renderer
        .render_all(&sensors, &europe_cities(), &mut counter, None)
        .unwrap();

    assert_eq!(written.len(), 9);
    assert_eq!(counter.peek(), 23);
    for (path, number) in written.iter().zip(14..=22) {
        assert!(path.starts_with(&output_dir));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(&format!("fig{}-", number)), "{}", name);
        assert!(name.ends_with(".svg"));

        let metadata = std::fs::metadata(path).unwrap();
        assert!(metadata.len() > 0, "{} is empty", name);
    }
}
