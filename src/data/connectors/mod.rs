mod types;
mod validator;
mod xml;

pub use types::SeriesMetadata;
pub use validator::DataValidator;
pub use xml::WorldBankConnector;
