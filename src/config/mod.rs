pub mod forecasting;
pub mod manager;
pub mod solver;
pub mod traits;

pub use forecasting::ForecastingConfig;
pub use manager::{AppConfig, ConfigManager};
pub use solver::SolverConfig;
