use serde::{Deserialize, Serialize};

/// Metadata about a loaded World Bank series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub file_path: String,
    pub region: String,
    pub num_points: usize,
    pub year_range: (i32, i32),
    pub value_range: (f64, f64),
    pub mean_value: Option<f64>,
}
