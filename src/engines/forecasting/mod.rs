pub mod holt;
pub mod holt_winters;

pub use holt::{Holt, HoltParams};
pub use holt_winters::{HoltWinters, HoltWintersParams};

use crate::engines::metrics::accuracy::mape;
use crate::engines::optimization::{Bounds, Chromosome};
use anyhow::Result;

/// Smoothed series paired with its out-of-sample forecast.
#[derive(Debug, Clone)]
pub struct ModelFit {
    pub smoothed: Vec<f64>,
    pub forecast: Vec<f64>,
}

/// An exponential-smoothing family model whose parameters are searched by
/// the solver.
pub trait SmoothingModel {
    fn name(&self) -> &'static str;

    /// Number of genes a parameter chromosome must carry.
    fn parameter_count(&self) -> usize;

    /// Search intervals for the model parameters, scaled to the series
    /// where the parameter is not naturally unit-bounded.
    fn parameter_bounds(&self, series: &[f64]) -> Result<Bounds>;

    /// Smooth the series and forecast beyond its end.
    fn smooth(&self, series: &[f64], chromosome: &Chromosome) -> Result<ModelFit>;
}

/// Objective closure for the solver: MAPE of the smoothed series against
/// the observations. A model that rejects the series scores as unusable.
pub fn fit_objective<'a>(
    model: &'a dyn SmoothingModel,
    series: &'a [f64],
) -> impl Fn(&Chromosome) -> f64 + 'a {
    move |chromosome| match model.smooth(series, chromosome) {
        Ok(fit) => mape(series, &fit.smoothed),
        Err(_) => f64::INFINITY,
    }
}
