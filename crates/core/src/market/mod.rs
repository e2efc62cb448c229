pub mod iex;
pub mod types;

pub use iex::IexClient;
pub use types::{DelayedQuote, SectorPerformance};
