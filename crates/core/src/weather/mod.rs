pub mod darksky;
pub mod types;

pub use darksky::DarkSkyClient;
pub use types::{Alert, Currently, DayPoint, Forecast};
