use crate::market::types::SectorPerformance;
use colored::Colorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceStyle {
    Gain,
    Loss,
}

/// Strictly positive is a gain; zero (and NaN) render as a loss.
pub fn performance_style(performance: f64) -> PerformanceStyle {
    if performance > 0.0 {
        PerformanceStyle::Gain
    } else {
        PerformanceStyle::Loss
    }
}

pub fn print_sector_performance(
    out: &mut impl Write,
    sectors: &[SectorPerformance],
) -> io::Result<()> {
    writeln!(out, "{}", "\nFinancial Sector Summary:".cyan())?;
    for sector in sectors {
        let value = sector.performance.to_string();
        let value = match performance_style(sector.performance) {
            PerformanceStyle::Gain => value.green(),
            PerformanceStyle::Loss => value.red(),
        };
        writeln!(out, "\t{} Performance: {}", sector.name, value)?;
    }
    Ok(())
}
