use briefing_core::config::Settings;
use briefing_core::error::ProviderError;
use briefing_core::market::{DelayedQuote, IexClient, SectorPerformance};
use briefing_core::report::{self, InsufficientForecast, TomorrowRows};
use briefing_core::weather::{DarkSkyClient, Forecast};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Concurrent,
    Sequential,
}

/// What to print for a section whose fetch failed. The failure is logged either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Print the zero-valued record.
    PrintDefault,
    Skip,
}

#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub mode: FetchMode,
    pub policy: FailurePolicy,
    pub tomorrow: TomorrowRows,
}

pub struct Fetched {
    pub quote: anyhow::Result<DelayedQuote>,
    pub sectors: anyhow::Result<Vec<SectorPerformance>>,
    pub forecast: anyhow::Result<Forecast>,
}

pub async fn fetch_all(
    iex: &IexClient,
    darksky: anyhow::Result<DarkSkyClient>,
    settings: &Settings,
    mode: FetchMode,
) -> Fetched {
    let quote = iex.fetch_delayed_quote(&settings.symbol);
    let sectors = iex.fetch_sector_performance();
    let latitude = settings.latitude.as_str();
    let longitude = settings.longitude.as_str();
    let forecast = async move {
        match darksky {
            Ok(client) => client.fetch_forecast(latitude, longitude).await,
            Err(err) => Err(err),
        }
    };

    let (quote, sectors, forecast) = match mode {
        FetchMode::Concurrent => tokio::join!(quote, sectors, forecast),
        FetchMode::Sequential => (quote.await, sectors.await, forecast.await),
    };

    Fetched {
        quote,
        sectors,
        forecast,
    }
}

/// Prints quote, sectors and weather, in that order.
pub fn render(
    out: &mut impl Write,
    fetched: Fetched,
    settings: &Settings,
    options: &Options,
) -> anyhow::Result<()> {
    if let Some(quote) = resolve("quote", fetched.quote, options.policy) {
        report::print_delayed_quote(out, &quote)?;
    }

    if let Some(sectors) = resolve("sectors", fetched.sectors, options.policy) {
        report::print_sector_performance(out, &sectors)?;
    }

    if let Some(forecast) = resolve("weather", fetched.forecast, options.policy) {
        let printed =
            report::print_forecast(out, &forecast, &settings.location_name, options.tomorrow);
        if let Err(err) = printed {
            match err.downcast_ref::<InsufficientForecast>() {
                Some(insufficient) => {
                    tracing::warn!(available = insufficient.available, "{insufficient}")
                }
                None => return Err(err),
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn resolve<T: Default>(
    section: &'static str,
    result: anyhow::Result<T>,
    policy: FailurePolicy,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            report_failure(section, &err);
            match policy {
                FailurePolicy::PrintDefault => Some(T::default()),
                FailurePolicy::Skip => None,
            }
        }
    }
}

fn report_failure(section: &'static str, err: &anyhow::Error) {
    sentry_anyhow::capture_anyhow(err);
    let error = format!("{err:#}");

    match err.downcast_ref::<ProviderError>() {
        Some(provider_err) => {
            tracing::error!(
                section,
                provider = ?provider_err.provider,
                stage = provider_err.stage.as_str(),
                error = %error,
                "fetch failed"
            );
            if let Some(body) = provider_err.body.as_deref() {
                tracing::debug!(section, body, "upstream response body");
            }
        }
        None => tracing::error!(section, error = %error, "fetch failed"),
    }
}
