use crate::config::Settings;
use crate::error::Provider;
use crate::http;
use crate::market::types::{DelayedQuote, SectorPerformance};
use anyhow::Context;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct IexClient {
    http: reqwest::Client,
    base_url: String,
}

impl IexClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let http = http::build_client(Duration::from_secs(settings.timeout_secs))
            .context("failed to build IEX http client")?;
        Ok(Self::new(http, settings.iex_base_url.clone()))
    }

    fn delayed_quote_url(&self, symbol: &str) -> String {
        http::join_url(&self.base_url, &format!("stock/{symbol}/delayed-quote"))
    }

    fn sector_performance_url(&self) -> String {
        http::join_url(&self.base_url, "stock/market/sector-performance")
    }

    /// Symbol is passed through as given.
    pub async fn fetch_delayed_quote(&self, symbol: &str) -> anyhow::Result<DelayedQuote> {
        let url = self.delayed_quote_url(symbol);
        let quote = http::get_json::<DelayedQuote>(&self.http, Provider::Iex, &url, &url)
            .await
            .with_context(|| format!("failed to fetch delayed quote for {symbol}"))?;

        tracing::debug!(symbol = %quote.symbol, price = quote.delayed_price, "fetched delayed quote");
        Ok(quote)
    }

    pub async fn fetch_sector_performance(&self) -> anyhow::Result<Vec<SectorPerformance>> {
        let url = self.sector_performance_url();
        let sectors = http::get_json::<Vec<SectorPerformance>>(&self.http, Provider::Iex, &url, &url)
            .await
            .context("failed to fetch sector performance")?;

        tracing::debug!(sectors = sectors.len(), "fetched sector performance");
        Ok(sectors)
    }
}
