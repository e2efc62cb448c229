use crate::decode::null_as_default;
use serde::{Deserialize, Serialize};

// Field names follow the upstream forecast document (camelCase). Times are Unix
// seconds. Every struct defaults so a partially filled document still decodes,
// and a `null` value reads the same as a missing key.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currently: Currently,
    #[serde(deserialize_with = "null_as_default")]
    pub minutely: MinutelyBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub hourly: HourlyBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub daily: DailyBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub alerts: Vec<Alert>,
    #[serde(deserialize_with = "null_as_default")]
    pub flags: Flags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Currently {
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nearest_storm_distance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub nearest_storm_bearing: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_intensity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_probability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub dew_point: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_speed: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_gust: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_bearing: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cloud_cover: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub uv_index: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub ozone: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinutelyBlock {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<MinutePoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MinutePoint {
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_intensity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_probability: f64,
    pub precip_intensity_error: Option<f64>,
    pub precip_accumulation: Option<f64>,
    pub precip_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyBlock {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<HourPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HourPoint {
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_intensity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_probability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub dew_point: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_speed: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_gust: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_bearing: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cloud_cover: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub uv_index: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub ozone: f64,
    pub precip_accumulation: Option<f64>,
    pub precip_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyBlock {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<DayPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayPoint {
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sunrise_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sunset_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub moon_phase: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_intensity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_intensity_max: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_intensity_max_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_probability: f64,
    pub precip_accumulation: Option<f64>,
    pub precip_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_high: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_high_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_low: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_low_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature_high: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature_high_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature_low: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature_low_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dew_point: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_speed: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_gust: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_gust_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_bearing: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cloud_cover: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub uv_index: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub uv_index_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub ozone: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_min: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_min_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_max: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_max_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature_min: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature_min_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature_max: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature_max_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub regions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub severity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub expires: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    #[serde(deserialize_with = "null_as_default")]
    pub sources: Vec<String>,
    #[serde(rename = "nearest-station", deserialize_with = "null_as_default")]
    pub nearest_station: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub units: String,
}
