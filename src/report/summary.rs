use crate::engines::forecasting::ModelFit;
use crate::error::Result;
use crate::types::ForecastReport;
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;

/// Assemble the serializable summary of one fitted model.
pub fn build_report(
    model: &str,
    region: &str,
    parameters: &[f64],
    metrics: HashMap<String, f64>,
    fit: &ModelFit,
) -> ForecastReport {
    ForecastReport {
        model: model.to_string(),
        region: region.to_string(),
        parameters: parameters.to_vec(),
        metrics,
        smoothed: fit.smoothed.clone(),
        forecast: fit.forecast.clone(),
        generated_at: Utc::now(),
    }
}

/// Write the report as pretty-printed JSON.
pub fn write_report<P: AsRef<Path>>(path: P, report: &ForecastReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_round_trip() {
        let fit = ModelFit {
            smoothed: vec![1.0, 2.0],
            forecast: vec![3.0],
        };
        let mut metrics = HashMap::new();
        metrics.insert("mape".to_string(), 4.2);

        let report = build_report("holt", "WLD", &[0.5, 0.3, 1.0, 0.1], metrics, &fit);

        let path = std::env::temp_dir().join("evocast_report_test.json");
        write_report(&path, &report).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: ForecastReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.model, "holt");
        assert_eq!(parsed.parameters.len(), 4);
        assert_eq!(parsed.forecast, vec![3.0]);

        std::fs::remove_file(&path).unwrap();
    }
}
