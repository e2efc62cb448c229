use crate::config::Settings;
use crate::error::Provider;
use crate::http;
use crate::weather::types::Forecast;
use anyhow::Context;
use std::time::Duration;

const REDACTED: &str = "<redacted>";

#[derive(Debug, Clone)]
pub struct DarkSkyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DarkSkyClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_darksky_api_key()?.to_string();
        let http = http::build_client(Duration::from_secs(settings.timeout_secs))
            .context("failed to build Dark Sky http client")?;
        Ok(Self::new(http, settings.darksky_base_url.clone(), api_key))
    }

    fn forecast_url(&self, key: &str, latitude: &str, longitude: &str) -> String {
        http::join_url(
            &self.base_url,
            &format!("forecast/{key}/{latitude},{longitude}"),
        )
    }

    /// Coordinates are decimal strings, passed through as given.
    pub async fn fetch_forecast(&self, latitude: &str, longitude: &str) -> anyhow::Result<Forecast> {
        let url = self.forecast_url(&self.api_key, latitude, longitude);
        let display_url = self.forecast_url(REDACTED, latitude, longitude);

        let forecast = http::get_json::<Forecast>(&self.http, Provider::DarkSky, &url, &display_url)
            .await
            .with_context(|| format!("failed to fetch forecast for {latitude},{longitude}"))?;

        tracing::debug!(
            timezone = %forecast.timezone,
            daily = forecast.daily.data.len(),
            alerts = forecast.alerts.len(),
            "fetched forecast"
        );
        Ok(forecast)
    }
}
