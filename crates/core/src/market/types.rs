use crate::decode::null_as_default;
use serde::{Deserialize, Serialize};

/// Delayed quote for a single symbol. Timestamps are Unix milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DelayedQuote {
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub delayed_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub high: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub low: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub delayed_size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub delayed_price_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub processed_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectorPerformance {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Fractional change, e.g. `-0.012` for -1.2%.
    #[serde(deserialize_with = "null_as_default")]
    pub performance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated: i64,
}
