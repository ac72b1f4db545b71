use std::collections::HashMap;

/// Mean absolute percentage error.
///
/// A zero observation makes the score non-finite; the solver orders such
/// scores after every finite one, so they lose every comparison instead of
/// aborting a run.
pub fn mape(observations: &[f64], predictions: &[f64]) -> f64 {
    assert_eq!(
        observations.len(),
        predictions.len(),
        "observation and prediction lengths must match"
    );

    let total: f64 = observations
        .iter()
        .zip(predictions)
        .map(|(&observed, &predicted)| ((observed - predicted) / observed).abs())
        .sum();

    100.0 * total / observations.len() as f64
}

/// Mean absolute error.
pub fn mae(observations: &[f64], predictions: &[f64]) -> f64 {
    assert_eq!(
        observations.len(),
        predictions.len(),
        "observation and prediction lengths must match"
    );

    observations
        .iter()
        .zip(predictions)
        .map(|(&observed, &predicted)| (observed - predicted).abs())
        .sum::<f64>()
        / observations.len() as f64
}

/// Root mean squared error.
pub fn rmse(observations: &[f64], predictions: &[f64]) -> f64 {
    assert_eq!(
        observations.len(),
        predictions.len(),
        "observation and prediction lengths must match"
    );

    let mean_squared = observations
        .iter()
        .zip(predictions)
        .map(|(&observed, &predicted)| (observed - predicted).powi(2))
        .sum::<f64>()
        / observations.len() as f64;
    mean_squared.sqrt()
}

pub struct AccuracyMetrics;

impl AccuracyMetrics {
    pub fn calculate(observations: &[f64], predictions: &[f64]) -> HashMap<String, f64> {
        let mut metrics = HashMap::new();

        if observations.is_empty() {
            return metrics;
        }

        metrics.insert("mape".to_string(), mape(observations, predictions));
        metrics.insert("mae".to_string(), mae(observations, predictions));
        metrics.insert("rmse".to_string(), rmse(observations, predictions));

        metrics
    }
}
