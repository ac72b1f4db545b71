use super::{ModelFit, SmoothingModel};
use crate::engines::optimization::{Bounds, Chromosome};
use anyhow::{bail, Result};

/// Holt's linear trend method.
///
/// Recurrences follow "Forecasting: Principles and Practice" (Hyndman &
/// Athanasopoulos). The smoothed value at each step is the one-step-ahead
/// prediction made before the level/trend update.
pub struct Holt {
    horizon: usize,
}

impl Holt {
    pub fn new(horizon: usize) -> Self {
        Self { horizon }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HoltParams {
    pub level_smoothing: f64,
    pub trend_smoothing: f64,
    pub initial_level: f64,
    pub initial_trend: f64,
}

impl HoltParams {
    pub fn from_chromosome(chromosome: &Chromosome) -> Self {
        assert_eq!(chromosome.len(), 4, "Holt expects 4 parameters");
        Self {
            level_smoothing: chromosome[0],
            trend_smoothing: chromosome[1],
            initial_level: chromosome[2],
            initial_trend: chromosome[3],
        }
    }
}

impl SmoothingModel for Holt {
    fn name(&self) -> &'static str {
        "holt"
    }

    fn parameter_count(&self) -> usize {
        4
    }

    fn parameter_bounds(&self, series: &[f64]) -> Result<Bounds> {
        if series.is_empty() {
            bail!("cannot derive parameter bounds from an empty series");
        }

        let min = series.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let spread = (max - min).max(1.0);

        Ok(Bounds::new(vec![
            (0.0, 1.0),
            (0.0, 1.0),
            (min - spread, max + spread),
            (-spread, spread),
        ])?)
    }

    fn smooth(&self, series: &[f64], chromosome: &Chromosome) -> Result<ModelFit> {
        if series.is_empty() {
            bail!("cannot smooth an empty series");
        }

        let params = HoltParams::from_chromosome(chromosome);
        let mut smoothed = Vec::with_capacity(series.len());

        let mut prev_level = params.initial_level;
        let mut prev_trend = params.initial_trend;
        for &observation in series {
            smoothed.push(prev_level + prev_trend);

            let level = params.level_smoothing * observation
                + (1.0 - params.level_smoothing) * (prev_level + prev_trend);
            let trend = params.trend_smoothing * (level - prev_level)
                + (1.0 - params.trend_smoothing) * prev_trend;

            prev_level = level;
            prev_trend = trend;
        }

        let forecast = (1..=self.horizon)
            .map(|h| prev_level + h as f64 * prev_trend)
            .collect();

        Ok(ModelFit { smoothed, forecast })
    }
}
