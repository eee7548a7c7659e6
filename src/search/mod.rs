mod ensemble;
mod params;
mod search;

pub use ensemble::{EnsembleOutcome, search_ensemble};
pub use params::SearchParams;
pub use search::{Search, SearchOutcome, SearchState, StopReason, search_configurations};
