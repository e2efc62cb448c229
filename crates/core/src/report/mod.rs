//! Terminal rendering of fetched records.
//!
//! Printers write to any [`std::io::Write`] so the binary can hand them a locked
//! stdout and tests can hand them a `Vec<u8>`. Colors come from `colored`, which
//! drops escape codes on its own when stdout is not a terminal.

pub mod quote;
pub mod sectors;
pub mod weather;

pub use quote::print_delayed_quote;
pub use sectors::{performance_style, print_sector_performance, PerformanceStyle};
pub use weather::{print_forecast, InsufficientForecast, TomorrowRows};
