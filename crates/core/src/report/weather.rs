use crate::time::format_local;
use crate::weather::types::{Alert, Currently, DayPoint, Forecast};
use colored::Colorize;
use std::fmt;
use std::io::Write;

const REQUIRED_DAILY_ENTRIES: usize = 2;

/// Which daily entries feed the "Tomorrow" block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TomorrowRows {
    /// Summary, temperatures, precipitation, UV and gust from `daily[0]`;
    /// sunrise and sunset from `daily[1]`. This is the long-standing layout.
    #[default]
    Literal,
    /// Every field from `daily[1]`.
    Aligned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientForecast {
    pub available: usize,
}

impl fmt::Display for InsufficientForecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insufficient forecast data: need {REQUIRED_DAILY_ENTRIES} daily entries, got {}",
            self.available
        )
    }
}

impl std::error::Error for InsufficientForecast {}

/// Prints the forecast summary for `location`.
///
/// Everything that can be printed is printed. Without a daily entry the
/// "Currently" sunrise and sunset read `-`. When fewer than two daily entries
/// are present the "Tomorrow" block is left out and [`InsufficientForecast`]
/// is returned afterwards.
pub fn print_forecast(
    out: &mut impl Write,
    forecast: &Forecast,
    location: &str,
    rows: TomorrowRows,
) -> anyhow::Result<()> {
    let daily = &forecast.daily.data;

    writeln!(out, "{}", format!("\n{location} Weather: ").cyan())?;
    writeln!(out, "Summary: {}", forecast.daily.summary)?;

    print_currently(out, &forecast.currently, daily.first())?;

    if let Some(tomorrow) = daily.get(1) {
        let text = match rows {
            TomorrowRows::Literal => &daily[0],
            TomorrowRows::Aligned => tomorrow,
        };
        print_tomorrow(out, text, tomorrow)?;
    }

    if !forecast.alerts.is_empty() {
        print_alerts(out, &forecast.alerts)?;
    }

    if daily.len() < REQUIRED_DAILY_ENTRIES {
        return Err(InsufficientForecast {
            available: daily.len(),
        }
        .into());
    }
    Ok(())
}

fn print_currently(
    out: &mut impl Write,
    now: &Currently,
    today: Option<&DayPoint>,
) -> std::io::Result<()> {
    let (sunrise, sunset) = match today {
        Some(day) => (format_local(day.sunrise_time), format_local(day.sunset_time)),
        None => ("-".to_string(), "-".to_string()),
    };

    writeln!(out, "\nCurrently:")?;
    writeln!(out, "\tSummary: {}", now.summary)?;
    writeln!(out, "\tTemperature: {}", now.temperature)?;
    writeln!(out, "\tApparent Temperature: {}", now.apparent_temperature)?;
    writeln!(out, "\tPrecipProbability: {}", now.precip_probability)?;
    writeln!(out, "\tNearest Storm Distance: {}", now.nearest_storm_distance)?;
    writeln!(out, "\tUV Index: {}", now.uv_index)?;
    writeln!(out, "\tWind Gust: {}", now.wind_gust)?;
    writeln!(out, "\tSunrise Time: {sunrise}")?;
    writeln!(out, "\tSunset Time: {sunset}")?;
    Ok(())
}

fn print_tomorrow(out: &mut impl Write, text: &DayPoint, sun: &DayPoint) -> std::io::Result<()> {
    writeln!(out, "\nTomorrow:")?;
    writeln!(out, "\tSummary: {}", text.summary)?;
    writeln!(out, "\tTemperature High: {}", text.temperature_max)?;
    writeln!(out, "\tTemperature Low: {}", text.temperature_min)?;
    writeln!(out, "\tApparent Temperature Low: {}", text.apparent_temperature_min)?;
    writeln!(out, "\tPrecipProbability: {}", text.precip_probability)?;
    writeln!(out, "\tUV Index: {}", text.uv_index)?;
    writeln!(out, "\tWind Gust: {}", text.wind_gust)?;
    writeln!(out, "\tSunrise Time: {}", format_local(sun.sunrise_time))?;
    writeln!(out, "\tSunset Time: {}", format_local(sun.sunset_time))?;
    Ok(())
}

fn print_alerts(out: &mut impl Write, alerts: &[Alert]) -> std::io::Result<()> {
    writeln!(out, "\nAlerts:")?;
    for alert in alerts {
        writeln!(out, "\t{}", alert.title.yellow())?;
        writeln!(out, "\t\tSeverity: {}", alert.severity)?;
        writeln!(out, "\t\tRegions: {}", alert.regions.join(", "))?;
        writeln!(out, "\t\tExpires: {}", format_local(alert.expires))?;
    }
    Ok(())
}
