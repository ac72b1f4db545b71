use evocast::config::{AppConfig, ConfigManager};
use evocast::data::{DataValidator, WorldBankConnector};
use evocast::engines::forecasting::{fit_objective, Holt, HoltWinters, ModelFit, SmoothingModel};
use evocast::engines::metrics::AccuracyMetrics;
use evocast::engines::optimization::{ConsoleProgress, Solver};
use evocast::report::{build_report, write_report, ChartRenderer};
use evocast::types::{ForecastReport, TimeSeries};
use std::env;
use std::path::Path;

const CONFIG_FILE: &str = "evocast.toml";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    println!("=== Evocast Forecast Optimizer ===\n");

    let args: Vec<String> = env::args().collect();
    let data_path = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("data/persistence_to_last_grade_of_primary.xml");
    let region = args.get(2).map(|s| s.as_str()).unwrap_or("WLD");

    let manager = ConfigManager::new();
    if Path::new(CONFIG_FILE).exists() {
        manager.load_from_file(CONFIG_FILE)?;
        println!("✓ Loaded configuration from {}", CONFIG_FILE);
    }
    let config = manager.get();

    println!("Configuration:");
    println!("  Data file: {}", data_path);
    println!("  Region: {}", region);
    println!("  Population size: {}", config.solver.population_size);
    println!("  Generations: {}", config.solver.generations);
    println!("  Forecast horizon: {}", config.forecasting.horizon);
    println!();

    println!("📊 Loading data...");
    let df = WorldBankConnector::load(data_path, region)?;
    DataValidator::validate_series(&df, config.forecasting.min_observations)?;
    let metadata = WorldBankConnector::create_metadata(data_path, region, &df)?;
    println!(
        "✓ Loaded {} observations, years {}..{}",
        metadata.num_points, metadata.year_range.0, metadata.year_range.1
    );

    let series = WorldBankConnector::to_time_series(&df)?;

    let holt = Holt::new(config.forecasting.horizon);
    let holt_winters = HoltWinters::new(
        config.forecasting.season_frequency,
        config.forecasting.horizon,
    );
    let models: [&dyn SmoothingModel; 2] = [&holt, &holt_winters];

    let renderer = ChartRenderer::new();
    for model in models {
        println!("\n🚀 Optimizing {} parameters...", model.name());
        match optimize_model(model, &series, &config, region) {
            Ok(report) => {
                print_summary(&report);
                persist_outputs(&renderer, region, &series, &report)?;
            }
            Err(e) => {
                log::warn!("Skipping {}: {:#}", model.name(), e);
                println!("⚠️  Skipping {}: {:#}", model.name(), e);
            }
        }
    }

    Ok(())
}

fn optimize_model(
    model: &dyn SmoothingModel,
    series: &TimeSeries,
    config: &AppConfig,
    region: &str,
) -> anyhow::Result<ForecastReport> {
    let bounds = model.parameter_bounds(&series.values)?;
    let mut solver = Solver::new(config.solver.clone())?;

    let best = solver.minimize_with_progress(
        fit_objective(model, &series.values),
        &bounds,
        &mut ConsoleProgress,
    )?;

    let fit = model.smooth(&series.values, &best)?;
    let metrics = AccuracyMetrics::calculate(&series.values, &fit.smoothed);

    Ok(build_report(
        model.name(),
        region,
        best.genes(),
        metrics,
        &fit,
    ))
}

fn print_summary(report: &ForecastReport) {
    println!("✓ Best parameters: {:?}", report.parameters);
    if let Some(mape) = report.metrics.get("mape") {
        println!("  MAPE: {:.4}%", mape);
    }
    if let Some(rmse) = report.metrics.get("rmse") {
        println!("  RMSE: {:.4}", rmse);
    }
    println!("  Forecast: {:?}", report.forecast);
}

fn persist_outputs(
    renderer: &ChartRenderer,
    region: &str,
    series: &TimeSeries,
    report: &ForecastReport,
) -> anyhow::Result<()> {
    let fit = ModelFit {
        smoothed: report.smoothed.clone(),
        forecast: report.forecast.clone(),
    };

    let chart_path = format!("{}_{}.png", region.to_lowercase(), report.model);
    let title = format!("{} smoothing for {}", report.model, region);
    renderer.render_forecast(&chart_path, &title, series, &fit)?;
    println!("  Chart written to {}", chart_path);

    let report_path = format!("{}_{}.json", region.to_lowercase(), report.model);
    write_report(&report_path, report)?;
    println!("  Report written to {}", report_path);

    Ok(())
}
