//! Daily forecast payloads and temperature bucketing.
//!
//! Mirrors the open-meteo daily payload shape: parallel arrays per field
//! under a `daily` object. Fetching is out of scope here; callers hand in
//! the JSON and get per-day rows plus the condition the composer consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default forecast site latitude.
pub const DEFAULT_LATITUDE: f64 = 33.4255;

/// Default forecast site longitude.
pub const DEFAULT_LONGITUDE: f64 = -111.94;

/// Rounded Fahrenheit below this is bucketed as cold.
pub const COLD_BELOW_F: i64 = 60;

/// Rounded Fahrenheit above this is bucketed as hot.
pub const HOT_ABOVE_F: i64 = 80;

/// Daily precipitation (mm) above this counts as rainy.
pub const RAIN_THRESHOLD_MM: f64 = 1.0;

/// Weather condition driving outfit composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    /// Below 60 degrees Fahrenheit
    Cold,
    /// 60 to 80 degrees Fahrenheit
    Temperate,
    /// Above 80 degrees Fahrenheit
    Hot,
    /// Meaningful precipitation, regardless of temperature
    Rainy,
}

impl WeatherCondition {
    /// Get the display name for this condition.
    pub fn name(&self) -> &'static str {
        match self {
            WeatherCondition::Cold => "Cold",
            WeatherCondition::Temperate => "Temperate",
            WeatherCondition::Hot => "Hot",
            WeatherCondition::Rainy => "Rainy",
        }
    }

    /// Get all conditions.
    pub fn all() -> &'static [WeatherCondition] {
        &[
            WeatherCondition::Cold,
            WeatherCondition::Temperate,
            WeatherCondition::Hot,
            WeatherCondition::Rainy,
        ]
    }

    /// Bucket a Fahrenheit temperature.
    ///
    /// Classification happens on the rounded integer value, so 59.7 °F
    /// lands in the temperate bucket.
    pub fn for_fahrenheit(temp: f64) -> Self {
        let rounded = temp.round() as i64;
        if rounded < COLD_BELOW_F {
            WeatherCondition::Cold
        } else if rounded <= HOT_ABOVE_F {
            WeatherCondition::Temperate
        } else {
            WeatherCondition::Hot
        }
    }

    /// Bucket a Celsius temperature via its Fahrenheit equivalent.
    pub fn for_celsius(temp: f64) -> Self {
        Self::for_fahrenheit(celsius_to_fahrenheit(temp))
    }
}

/// Convert Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// The `daily` block of a forecast payload: parallel arrays per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailySeries {
    /// ISO dates, one per day.
    #[serde(default)]
    pub time: Vec<NaiveDate>,

    /// Daily maximum temperature in Celsius.
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,

    /// Daily minimum temperature in Celsius.
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,

    /// Daily precipitation sum in millimeters.
    #[serde(default)]
    pub precipitation_sum: Vec<f64>,
}

/// Top-level forecast payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastPayload {
    /// Per-day series.
    #[serde(default)]
    pub daily: DailySeries,
}

impl ForecastPayload {
    /// Parse a forecast payload from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Zip the parallel arrays into per-day rows.
    ///
    /// Mismatched array lengths truncate to the shortest, so a partially
    /// filled payload still yields usable days.
    pub fn days(&self) -> Vec<DailyForecast> {
        let daily = &self.daily;
        let len = daily
            .time
            .len()
            .min(daily.temperature_2m_max.len())
            .min(daily.temperature_2m_min.len())
            .min(daily.precipitation_sum.len());

        (0..len)
            .map(|i| DailyForecast {
                date: daily.time[i],
                max_temp_c: daily.temperature_2m_max[i],
                min_temp_c: daily.temperature_2m_min[i],
                precipitation_mm: daily.precipitation_sum[i],
            })
            .collect()
    }
}

/// One day's forecast, zipped out of the parallel arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyForecast {
    /// Calendar date.
    pub date: NaiveDate,
    /// Maximum temperature in Celsius.
    pub max_temp_c: f64,
    /// Minimum temperature in Celsius.
    pub min_temp_c: f64,
    /// Precipitation sum in millimeters.
    pub precipitation_mm: f64,
}

impl DailyForecast {
    /// Condition for composing an outfit on this day.
    ///
    /// Rain takes precedence; otherwise the day's maximum temperature
    /// picks the bucket.
    pub fn condition(&self) -> WeatherCondition {
        if self.precipitation_mm > RAIN_THRESHOLD_MM {
            WeatherCondition::Rainy
        } else {
            WeatherCondition::for_celsius(self.max_temp_c)
        }
    }

    /// Maximum temperature as rounded Fahrenheit.
    pub fn max_temp_f(&self) -> i64 {
        celsius_to_fahrenheit(self.max_temp_c).round() as i64
    }

    /// Minimum temperature as rounded Fahrenheit.
    pub fn min_temp_f(&self) -> i64 {
        celsius_to_fahrenheit(self.min_temp_c).round() as i64
    }
}
