pub mod chart;
pub mod summary;

pub use chart::ChartRenderer;
pub use summary::{build_report, write_report};
