use crate::error::{Provider, ProviderError, Stage};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub fn build_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build http client")
}

pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// GETs `url` and decodes the whole body as `T`.
///
/// `display_url` is what ends up in errors and logs; callers whose URL embeds a
/// credential pass a redacted form. Every failure is a [`ProviderError`] so it
/// can be downcast from the returned `anyhow::Error`.
pub async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    provider: Provider,
    url: &str,
    display_url: &str,
) -> anyhow::Result<T> {
    tracing::debug!(?provider, url = %display_url, "GET");

    let res = http.get(url).send().await.map_err(|err| ProviderError {
        provider,
        stage: Stage::Transport,
        detail: format!("GET {display_url} failed: {}", err.without_url()),
        body: None,
    })?;

    let status = res.status();
    let text = res.text().await.map_err(|err| ProviderError {
        provider,
        stage: Stage::Transport,
        detail: format!("failed to read response body from {display_url}: {}", err.without_url()),
        body: None,
    })?;

    if !status.is_success() {
        return Err(ProviderError {
            provider,
            stage: Stage::Http,
            detail: format!("GET {display_url} returned HTTP {status}"),
            body: Some(text),
        }
        .into());
    }

    serde_json::from_str::<T>(&text).map_err(|err| {
        ProviderError {
            provider,
            stage: Stage::Decode,
            detail: format!("response from {display_url} does not match schema: {err}"),
            body: Some(text),
        }
        .into()
    })
}
