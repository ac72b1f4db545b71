pub mod accuracy;

pub use accuracy::{mae, mape, rmse, AccuracyMetrics};
