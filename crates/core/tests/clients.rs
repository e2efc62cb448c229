use briefing_core::error::{Provider, ProviderError, Stage};
use briefing_core::market::IexClient;
use briefing_core::weather::DarkSkyClient;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn iex(server: &MockServer) -> IexClient {
    IexClient::new(reqwest::Client::new(), format!("{}/1.0", server.uri()))
}

fn provider_error(err: &anyhow::Error) -> &ProviderError {
    err.downcast_ref::<ProviderError>()
        .unwrap_or_else(|| panic!("expected ProviderError, got {err:#}"))
}

#[tokio::test]
async fn fetches_delayed_quote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.0/stock/vgt/delayed-quote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbol": "VGT",
            "delayedPrice": 150.2,
            "high": 151.0,
            "low": 149.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let quote = iex(&server).fetch_delayed_quote("vgt").await.unwrap();
    assert_eq!(quote.symbol, "VGT");
    assert_eq!(quote.delayed_price, 150.2);
    assert_eq!(quote.high, 151.0);
    assert_eq!(quote.low, 149.5);
}

#[tokio::test]
async fn fetches_sectors_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.0/stock/market/sector-performance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"type": "sector", "name": "Energy", "performance": -0.012, "lastUpdated": 1},
            {"type": "sector", "name": "Tech", "performance": 0.034, "lastUpdated": 1}
        ])))
        .mount(&server)
        .await;

    let sectors = iex(&server).fetch_sector_performance().await.unwrap();
    let names: Vec<_> = sectors.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Energy", "Tech"]);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.0/stock/vgt/delayed-quote"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"symbol\": \"VGT\", \"delayedPrice\""))
        .mount(&server)
        .await;

    let err = iex(&server).fetch_delayed_quote("vgt").await.unwrap_err();
    let provider = provider_error(&err);
    assert_eq!(provider.provider, Provider::Iex);
    assert_eq!(provider.stage, Stage::Decode);
    assert!(provider.body.as_deref().unwrap().starts_with("{\"symbol\""));
}

#[tokio::test]
async fn non_array_sector_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.0/stock/market/sector-performance"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"name\": \"Energy\", \"performance\": -0.0"))
        .mount(&server)
        .await;

    let err = iex(&server).fetch_sector_performance().await.unwrap_err();
    let provider = provider_error(&err);
    assert_eq!(provider.provider, Provider::Iex);
    assert_eq!(provider.stage, Stage::Decode);
    assert!(format!("{err:#}").contains("sector performance"));
}

#[tokio::test]
async fn non_success_status_is_an_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.0/stock/market/sector-performance"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = iex(&server).fetch_sector_performance().await.unwrap_err();
    let provider = provider_error(&err);
    assert_eq!(provider.stage, Stage::Http);
    assert_eq!(provider.body.as_deref(), Some("maintenance"));
}

#[tokio::test]
async fn slow_upstream_hits_the_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.0/stock/vgt/delayed-quote"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"symbol": "VGT"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let http = briefing_core::http::build_client(Duration::from_millis(200)).unwrap();
    let client = IexClient::new(http, format!("{}/1.0", server.uri()));

    let err = client.fetch_delayed_quote("vgt").await.unwrap_err();
    assert_eq!(provider_error(&err).stage, Stage::Transport);
}

#[tokio::test]
async fn forecast_errors_never_leak_the_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/top-secret/41.829624,-87.653075"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = DarkSkyClient::new(reqwest::Client::new(), server.uri(), "top-secret");
    let err = client
        .fetch_forecast("41.829624", "-87.653075")
        .await
        .unwrap_err();

    let rendered = format!("{err:#}");
    assert!(!rendered.contains("top-secret"), "{rendered}");
    assert!(rendered.contains("<redacted>"), "{rendered}");

    let provider = provider_error(&err);
    assert_eq!(provider.provider, Provider::DarkSky);
    assert_eq!(provider.stage, Stage::Decode);
}

#[tokio::test]
async fn fetches_forecast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/k/41.829624,-87.653075"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "timezone": "America/Chicago",
            "currently": {"summary": "Clear", "temperature": 68.4},
            "daily": {"summary": "Rain on Friday.", "data": [{"sunriseTime": 1}, {"sunriseTime": 2}]}
        })))
        .mount(&server)
        .await;

    let client = DarkSkyClient::new(reqwest::Client::new(), server.uri(), "k");
    let forecast = client.fetch_forecast("41.829624", "-87.653075").await.unwrap();
    assert_eq!(forecast.timezone, "America/Chicago");
    assert_eq!(forecast.currently.temperature, 68.4);
    assert_eq!(forecast.daily.data.len(), 2);
}
