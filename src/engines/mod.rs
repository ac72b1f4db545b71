pub mod forecasting;
pub mod metrics;
pub mod optimization;
