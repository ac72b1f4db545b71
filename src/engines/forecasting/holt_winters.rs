use super::{ModelFit, SmoothingModel};
use crate::engines::optimization::{Bounds, Chromosome};
use anyhow::{bail, Result};

/// Additive Holt-Winters seasonal smoothing.
///
/// Level and trend start from averages over the first two seasonal cycles,
/// seasonal components from the first cycle's deviation from that level.
pub struct HoltWinters {
    season_frequency: usize,
    horizon: usize,
}

impl HoltWinters {
    pub fn new(season_frequency: usize, horizon: usize) -> Self {
        Self {
            season_frequency,
            horizon,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HoltWintersParams {
    pub level_smoothing: f64,
    pub trend_smoothing: f64,
    pub season_smoothing: f64,
}

impl HoltWintersParams {
    pub fn from_chromosome(chromosome: &Chromosome) -> Self {
        assert_eq!(chromosome.len(), 3, "Holt-Winters expects 3 parameters");
        Self {
            level_smoothing: chromosome[0],
            trend_smoothing: chromosome[1],
            season_smoothing: chromosome[2],
        }
    }
}

impl SmoothingModel for HoltWinters {
    fn name(&self) -> &'static str {
        "holt_winters"
    }

    fn parameter_count(&self) -> usize {
        3
    }

    fn parameter_bounds(&self, _series: &[f64]) -> Result<Bounds> {
        Ok(Bounds::new(vec![(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)])?)
    }

    fn smooth(&self, series: &[f64], chromosome: &Chromosome) -> Result<ModelFit> {
        let m = self.season_frequency;
        if m == 0 {
            bail!("season frequency must be at least 1");
        }
        if series.len() < 2 * m {
            bail!(
                "series must cover two full seasons ({} observations), got {}",
                2 * m,
                series.len()
            );
        }

        let params = HoltWintersParams::from_chromosome(chromosome);

        let first_cycle: f64 = series[..m].iter().sum();
        let second_cycle: f64 = series[m..2 * m].iter().sum();
        let mut prev_level = first_cycle / m as f64;
        let mut prev_trend = (second_cycle - first_cycle) / (m * m) as f64;
        let mut seasons: Vec<f64> = series[..m]
            .iter()
            .map(|&observation| observation - prev_level)
            .collect();

        let mut smoothed = Vec::with_capacity(series.len());
        for (index, &observation) in series.iter().enumerate() {
            let level = params.level_smoothing * (observation - seasons[index])
                + (1.0 - params.level_smoothing) * (prev_level + prev_trend);
            let trend = params.trend_smoothing * (level - prev_level)
                + (1.0 - params.trend_smoothing) * prev_trend;
            let season = params.season_smoothing * (observation - prev_level - prev_trend)
                + (1.0 - params.season_smoothing) * seasons[index];
            seasons.push(season);

            smoothed.push(level + trend + seasons[index]);
            prev_level = level;
            prev_trend = trend;
        }

        let forecast = (0..self.horizon)
            .map(|h| {
                let season_index = seasons.len() - m + (h % m);
                prev_level + h as f64 * prev_trend + seasons[season_index]
            })
            .collect();

        Ok(ModelFit { smoothed, forecast })
    }
}
