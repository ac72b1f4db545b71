use super::traits::ConfigSection;
use crate::error::EvocastError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastingConfig {
    /// Steps to forecast beyond the end of the series.
    pub horizon: usize,
    /// Observations per seasonal cycle for Holt-Winters.
    pub season_frequency: usize,
    /// Minimum observations a loaded series must carry.
    pub min_observations: usize,
}

impl Default for ForecastingConfig {
    fn default() -> Self {
        Self {
            horizon: 10,
            season_frequency: 12,
            min_observations: 24,
        }
    }
}

impl ConfigSection for ForecastingConfig {
    fn section_name() -> &'static str {
        "forecasting"
    }

    fn validate(&self) -> Result<(), EvocastError> {
        if self.horizon == 0 {
            return Err(EvocastError::Configuration(
                "Forecast horizon must be at least 1".to_string(),
            ));
        }
        if self.season_frequency == 0 {
            return Err(EvocastError::Configuration(
                "Season frequency must be at least 1".to_string(),
            ));
        }
        if self.min_observations < 2 {
            return Err(EvocastError::Configuration(
                "Minimum observations must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}
