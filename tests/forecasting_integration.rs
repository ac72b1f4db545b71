use evocast::config::SolverConfig;
use evocast::engines::forecasting::{fit_objective, Holt, HoltWinters, SmoothingModel};
use evocast::engines::metrics::{mape, AccuracyMetrics};
use evocast::engines::optimization::Solver;
use evocast::report::build_report;

fn solver_config(generations: usize, seed: u64) -> SolverConfig {
    SolverConfig {
        generations,
        seed: Some(seed),
        ..SolverConfig::default()
    }
}

#[test]
fn test_holt_fit_on_trended_series() {
    // A clean linear trend: Holt can in principle smooth it perfectly, so
    // the optimizer should land well under 10% error.
    let series: Vec<f64> = (0..40).map(|i| 10.0 + 2.0 * i as f64).collect();

    let holt = Holt::new(5);
    let bounds = holt.parameter_bounds(&series).unwrap();
    let mut solver = Solver::new(solver_config(80, 21)).unwrap();

    let best = solver
        .minimize(fit_objective(&holt, &series), &bounds)
        .unwrap();
    let fit = holt.smooth(&series, &best).unwrap();
    let score = mape(&series, &fit.smoothed);

    println!("Holt parameters: {:?}, MAPE = {:.4}%", best.genes(), score);
    assert!(score < 10.0);

    // Forecast should continue the upward trend.
    assert!(fit.forecast[4] > fit.forecast[0]);
}

#[test]
fn test_holt_winters_fit_on_seasonal_series() {
    // Trend plus a fixed additive pattern with period 4.
    let pattern = [0.0, 10.0, -5.0, 5.0];
    let series: Vec<f64> = (0..48)
        .map(|i| 100.0 + 1.5 * i as f64 + pattern[i % 4])
        .collect();

    let model = HoltWinters::new(4, 8);
    let bounds = model.parameter_bounds(&series).unwrap();
    let mut solver = Solver::new(solver_config(60, 33)).unwrap();

    let best = solver
        .minimize(fit_objective(&model, &series), &bounds)
        .unwrap();
    let fit = model.smooth(&series, &best).unwrap();
    let score = mape(&series, &fit.smoothed);

    println!(
        "Holt-Winters parameters: {:?}, MAPE = {:.4}%",
        best.genes(),
        score
    );
    assert!(score < 15.0);
    assert_eq!(fit.forecast.len(), 8);
}

#[test]
fn test_objective_is_infinite_for_unusable_series() {
    // Too short for two full seasons: every chromosome scores as unusable
    // instead of aborting the run.
    let series = vec![1.0, 2.0, 3.0];
    let model = HoltWinters::new(12, 4);
    let objective = fit_objective(&model, &series);

    let chromosome = evocast::engines::optimization::Chromosome::new(vec![0.5, 0.5, 0.5]);
    assert_eq!(objective(&chromosome), f64::INFINITY);
}

#[test]
fn test_end_to_end_report() {
    let series: Vec<f64> = (0..30).map(|i| 50.0 + 3.0 * i as f64).collect();

    let holt = Holt::new(6);
    let bounds = holt.parameter_bounds(&series).unwrap();
    let mut solver = Solver::new(solver_config(40, 5)).unwrap();

    let best = solver
        .minimize(fit_objective(&holt, &series), &bounds)
        .unwrap();
    let fit = holt.smooth(&series, &best).unwrap();
    let metrics = AccuracyMetrics::calculate(&series, &fit.smoothed);

    let report = build_report(holt.name(), "TEST", best.genes(), metrics, &fit);

    assert_eq!(report.model, "holt");
    assert_eq!(report.parameters.len(), holt.parameter_count());
    assert_eq!(report.smoothed.len(), series.len());
    assert_eq!(report.forecast.len(), 6);
    assert!(report.metrics.contains_key("mape"));
}
