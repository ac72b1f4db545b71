use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An observed time series: one value per year, in year order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

impl TimeSeries {
    pub fn from_pairs(pairs: Vec<(i32, f64)>) -> Self {
        let (years, values) = pairs.into_iter().unzip();
        Self { years, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Year labels for the smoothed series followed by `horizon` forecast steps.
    pub fn extended_years(&self, horizon: usize) -> Vec<i32> {
        let mut years = self.years.clone();
        if let Some(&last) = self.years.last() {
            years.extend((1..=horizon as i32).map(|h| last + h));
        }
        years
    }
}

/// Complete result of fitting one smoothing model to one series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub model: String,
    pub region: String,
    pub parameters: Vec<f64>,
    pub metrics: HashMap<String, f64>,
    pub smoothed: Vec<f64>,
    pub forecast: Vec<f64>,
    pub generated_at: DateTime<Utc>,
}
