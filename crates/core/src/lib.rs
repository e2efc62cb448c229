pub mod decode;
pub mod error;
pub mod http;
pub mod market;
pub mod report;
pub mod time;
pub mod weather;

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_IEX_BASE_URL: &str = "https://api.iextrading.com/1.0";
    pub const DEFAULT_DARKSKY_BASE_URL: &str = "https://api.darksky.net";
    pub const DEFAULT_SYMBOL: &str = "vgt";
    // Bridgeport, Chicago.
    pub const DEFAULT_LATITUDE: &str = "41.829624";
    pub const DEFAULT_LONGITUDE: &str = "-87.653075";
    pub const DEFAULT_LOCATION_NAME: &str = "Bridgeport";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub iex_base_url: String,
        pub darksky_base_url: String,
        pub darksky_api_key: Option<String>,
        pub symbol: String,
        pub latitude: String,
        pub longitude: String,
        pub location_name: String,
        pub timeout_secs: u64,
        pub sentry_dsn: Option<String>,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                iex_base_url: DEFAULT_IEX_BASE_URL.to_string(),
                darksky_base_url: DEFAULT_DARKSKY_BASE_URL.to_string(),
                darksky_api_key: None,
                symbol: DEFAULT_SYMBOL.to_string(),
                latitude: DEFAULT_LATITUDE.to_string(),
                longitude: DEFAULT_LONGITUDE.to_string(),
                location_name: DEFAULT_LOCATION_NAME.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                sentry_dsn: None,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Builds settings from an arbitrary key lookup. Blank values count as unset.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let get = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
            let defaults = Self::default();

            Self {
                iex_base_url: get("IEX_BASE_URL").unwrap_or(defaults.iex_base_url),
                darksky_base_url: get("DARKSKY_BASE_URL").unwrap_or(defaults.darksky_base_url),
                darksky_api_key: get("DARKSKY_API_KEY"),
                symbol: get("QUOTE_SYMBOL").unwrap_or(defaults.symbol),
                latitude: get("WEATHER_LATITUDE").unwrap_or(defaults.latitude),
                longitude: get("WEATHER_LONGITUDE").unwrap_or(defaults.longitude),
                location_name: get("WEATHER_LOCATION_NAME").unwrap_or(defaults.location_name),
                timeout_secs: get("HTTP_TIMEOUT_SECS")
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .unwrap_or(defaults.timeout_secs),
                sentry_dsn: get("SENTRY_DSN"),
            }
        }

        pub fn require_darksky_api_key(&self) -> anyhow::Result<&str> {
            self.darksky_api_key
                .as_deref()
                .context("DARKSKY_API_KEY is required")
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key: &str| map.get(key).cloned()
        }

        #[test]
        fn falls_back_to_defaults_when_unset() {
            let s = Settings::from_lookup(lookup(&[]));
            assert_eq!(s.iex_base_url, DEFAULT_IEX_BASE_URL);
            assert_eq!(s.symbol, "vgt");
            assert_eq!(s.latitude, "41.829624");
            assert_eq!(s.longitude, "-87.653075");
            assert_eq!(s.timeout_secs, 30);
            assert!(s.darksky_api_key.is_none());
            assert!(s.require_darksky_api_key().is_err());
        }

        #[test]
        fn reads_overrides_and_ignores_blank_values() {
            let s = Settings::from_lookup(lookup(&[
                ("QUOTE_SYMBOL", "aapl"),
                ("DARKSKY_API_KEY", "k"),
                ("WEATHER_LOCATION_NAME", "  "),
                ("HTTP_TIMEOUT_SECS", "5"),
            ]));
            assert_eq!(s.symbol, "aapl");
            assert_eq!(s.require_darksky_api_key().unwrap(), "k");
            assert_eq!(s.location_name, DEFAULT_LOCATION_NAME);
            assert_eq!(s.timeout_secs, 5);
        }

        #[test]
        fn unparseable_timeout_uses_default() {
            let s = Settings::from_lookup(lookup(&[("HTTP_TIMEOUT_SECS", "soon")]));
            assert_eq!(s.timeout_secs, DEFAULT_TIMEOUT_SECS);
        }
    }
}
