#![doc = "gridmander public API"]
mod acceptance;
mod configuration;
mod district;
mod grid;
mod scenario;
mod search;

#[doc(inline)]
pub use grid::{Tile, VoterDistribution};

#[doc(inline)]
pub use district::District;

#[doc(inline)]
pub use configuration::{Configuration, ConfigurationError, ConfigurationSummary, InconsistentTradeError, StepOutcome, Trade};

#[doc(inline)]
pub use acceptance::{AcceptancePolicy, Annealing, Classic, TradeProposal};

#[doc(inline)]
pub use search::{EnsembleOutcome, Search, SearchOutcome, SearchParams, SearchState, StopReason, search_configurations, search_ensemble};

#[doc(inline)]
pub use scenario::{Scenario, classic, express, snake_districts};
