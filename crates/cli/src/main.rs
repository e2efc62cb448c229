use briefing_core::config::Settings;
use briefing_core::market::IexClient;
use briefing_core::report::TomorrowRows;
use briefing_core::weather::DarkSkyClient;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod briefing;

use briefing::{FailurePolicy, FetchMode};

#[derive(Debug, Parser)]
#[command(name = "briefing", about = "Delayed quote, sector performance and local weather at a glance")]
struct Args {
    /// Ticker for the delayed quote (QUOTE_SYMBOL, default "vgt").
    #[arg(long)]
    symbol: Option<String>,

    /// Forecast latitude in decimal degrees (WEATHER_LATITUDE).
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<String>,

    /// Forecast longitude in decimal degrees (WEATHER_LONGITUDE).
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<String>,

    /// Label printed in the weather header (WEATHER_LOCATION_NAME).
    #[arg(long)]
    location_name: Option<String>,

    /// Per-request timeout in seconds (HTTP_TIMEOUT_SECS, default 30).
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Take every "Tomorrow" field from tomorrow's daily entry.
    #[arg(long)]
    aligned_tomorrow: bool,

    /// Issue the three requests one after another instead of concurrently.
    #[arg(long)]
    sequential: bool,

    /// Leave out sections whose fetch failed instead of printing empty values.
    #[arg(long)]
    skip_failed: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(v) = &self.symbol {
            settings.symbol = v.clone();
        }
        if let Some(v) = &self.latitude {
            settings.latitude = v.clone();
        }
        if let Some(v) = &self.longitude {
            settings.longitude = v.clone();
        }
        if let Some(v) = &self.location_name {
            settings.location_name = v.clone();
        }
        if let Some(v) = self.timeout_secs {
            settings.timeout_secs = v;
        }
    }

    fn options(&self) -> briefing::Options {
        briefing::Options {
            mode: if self.sequential {
                FetchMode::Sequential
            } else {
                FetchMode::Concurrent
            },
            policy: if self.skip_failed {
                FailurePolicy::Skip
            } else {
                FailurePolicy::PrintDefault
            },
            tomorrow: if self.aligned_tomorrow {
                TomorrowRows::Aligned
            } else {
                TomorrowRows::Literal
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut settings = Settings::from_env();
    args.apply(&mut settings);

    let _sentry_guard = init_sentry(&settings);

    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let iex = IexClient::from_settings(&settings)?;
    // A missing key only costs the weather section.
    let darksky = DarkSkyClient::from_settings(&settings);

    let options = args.options();
    tracing::debug!(symbol = %settings.symbol, ?options, "starting briefing");

    let fetched = briefing::fetch_all(&iex, darksky, &settings, options.mode).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    briefing::render(&mut out, fetched, &settings, &options)?;

    Ok(())
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_coordinates() {
        let args = Args::try_parse_from([
            "briefing",
            "--latitude",
            "-33.8688",
            "--longitude",
            "-87.653075",
        ])
        .unwrap();

        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(settings.latitude, "-33.8688");
        assert_eq!(settings.longitude, "-87.653075");
        assert_eq!(settings.symbol, "vgt");
    }

    #[test]
    fn flags_override_settings_and_options() {
        let args = Args::try_parse_from([
            "briefing",
            "--symbol",
            "aapl",
            "--timeout-secs",
            "5",
            "--aligned-tomorrow",
            "--sequential",
            "--skip-failed",
        ])
        .unwrap();

        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(settings.symbol, "aapl");
        assert_eq!(settings.timeout_secs, 5);

        let options = args.options();
        assert_eq!(options.mode, FetchMode::Sequential);
        assert_eq!(options.policy, FailurePolicy::Skip);
        assert_eq!(options.tomorrow, TomorrowRows::Aligned);
    }

    #[test]
    fn defaults_reproduce_classic_behaviour() {
        let options = Args::try_parse_from(["briefing"]).unwrap().options();
        assert_eq!(options.mode, FetchMode::Concurrent);
        assert_eq!(options.policy, FailurePolicy::PrintDefault);
        assert_eq!(options.tomorrow, TomorrowRows::Literal);
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        assert!(Args::try_parse_from(["briefing", "--timeout-secs", "soon"]).is_err());
    }
}
