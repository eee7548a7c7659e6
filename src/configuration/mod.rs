mod configuration;
mod error;
mod iterate;
mod summary;
mod trades;

pub use configuration::Configuration;
pub use error::{ConfigurationError, InconsistentTradeError};
pub use iterate::StepOutcome;
pub use summary::ConfigurationSummary;
pub use trades::Trade;
