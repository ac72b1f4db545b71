pub mod connectors;

pub use connectors::{DataValidator, SeriesMetadata, WorldBankConnector};
