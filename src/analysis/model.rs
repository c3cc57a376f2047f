use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::OrderedMap;
use crate::core::conversions::parse_date;
use crate::core::wire::as_optional_number;

/// One date on a multi-series chart: `{"date": "2024-01-02", "<series>": 100.0, ...}`.
///
/// Series keys are sector names (sector analysis) or tickers (comparison). A `None`
/// value means the series has no observation on that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "OrderedMap<serde_json::Value>",
    into = "OrderedMap<serde_json::Value>"
)]
pub struct SeriesPoint {
    pub date: String,
    pub values: OrderedMap<Option<f64>>,
}

impl SeriesPoint {
    /// The value of `series` on this date.
    pub fn value(&self, series: &str) -> Option<f64> {
        self.values.get(series).copied().flatten()
    }
}

impl TryFrom<OrderedMap<serde_json::Value>> for SeriesPoint {
    type Error = String;

    fn try_from(mut raw: OrderedMap<serde_json::Value>) -> Result<Self, Self::Error> {
        let date = match raw.remove("date") {
            Some(serde_json::Value::String(s)) => s,
            Some(other) => return Err(format!("`date` must be a string, got {other}")),
            None => return Err("series point without `date`".to_string()),
        };
        let mut values = OrderedMap::new();
        for (key, v) in raw {
            let cell = as_optional_number(&v)
                .ok_or_else(|| format!("series `{key}` on {date} is not numeric: {v}"))?;
            values.insert(key, cell);
        }
        Ok(Self { date, values })
    }
}

impl From<SeriesPoint> for OrderedMap<serde_json::Value> {
    fn from(point: SeriesPoint) -> Self {
        let mut out = Self::new();
        out.insert("date", serde_json::Value::String(point.date));
        for (key, v) in point.values {
            out.insert(key, v.map_or(serde_json::Value::Null, |n| serde_json::json!(n)));
        }
        out
    }
}

/// Ranking request over one market and window.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRequest {
    /// `KR` or `US`; omitted when the backend can infer it from `market`.
    pub country: Option<Country>,
    /// Market name, e.g. `KOSPI` or `NASDAQ`.
    pub market: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Size of the top and bottom lists (the backend accepts 1..=20).
    pub top_n: u32,
}

impl PerformanceRequest {
    pub fn new(market: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            country: None,
            market: market.into(),
            start,
            end,
            top_n: 10,
        }
    }

    #[must_use]
    pub const fn country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    #[must_use]
    pub const fn top_n(mut self, n: u32) -> Self {
        self.top_n = n;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPerformance {
    pub ticker: String,
    pub name: String,
    /// Return over the window, in percent.
    pub performance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub top_performers: Vec<StockPerformance>,
    pub bottom_performers: Vec<StockPerformance>,
}

/// Chart legend entry: which `SeriesPoint` key to plot and under which label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSeries {
    #[serde(rename = "dataKey")]
    pub data_key: String,
    pub name: String,
}

/// Cumulative-return comparison of several tickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub data: Vec<SeriesPoint>,
    pub series: Vec<ComparisonSeries>,
}

impl Comparison {
    /// The data with gaps padded, so every point carries every series.
    #[must_use]
    pub fn aligned(&self) -> Vec<SeriesPoint> {
        let keys: Vec<&str> = self.series.iter().map(|s| s.data_key.as_str()).collect();
        super::align_series(&self.data, &keys)
    }
}

/// Market country for the scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "KR")]
    Korea,
    #[serde(rename = "US")]
    UnitedStates,
}

/// Parameters of a decline-then-rebound scan.
///
/// A trough is a close at least `decline_rate` percent below the close
/// `decline_period` trading days earlier; it counts when the maximum close within
/// the next `rebound_period` calendar days is at least `rebound_rate` percent above it.
#[derive(Debug, Clone, PartialEq)]
pub struct FluctuationRequest {
    pub country: Country,
    pub market: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub decline_period: u32,
    /// Negative percentage, e.g. `-20.0`.
    pub decline_rate: f64,
    pub rebound_period: u32,
    pub rebound_rate: f64,
}

impl FluctuationRequest {
    /// A scan with the dashboard defaults: -20% over 5 days, +20% within 20 days.
    pub fn new(country: Country, market: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            country,
            market: market.into(),
            start,
            end,
            decline_period: 5,
            decline_rate: -20.0,
            rebound_period: 20,
            rebound_rate: 20.0,
        }
    }

    #[must_use]
    pub const fn decline(mut self, period: u32, rate: f64) -> Self {
        self.decline_period = period;
        self.decline_rate = rate;
        self
    }

    #[must_use]
    pub const fn rebound(mut self, period: u32, rate: f64) -> Self {
        self.rebound_period = period;
        self.rebound_rate = rate;
        self
    }
}

/// One historical decline→rebound cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluctuationEvent {
    pub ticker: String,
    pub name: String,
    pub trough_date: String,
    pub trough_price: f64,
    pub rebound_date: String,
    pub rebound_price: f64,
    /// Rebound from the trough, in percent.
    pub rebound_performance: f64,
}

impl FluctuationEvent {
    /// True when the rebound happened strictly after the trough.
    /// Unparseable dates count as not well ordered.
    pub fn is_well_ordered(&self) -> bool {
        match (parse_date(&self.trough_date), parse_date(&self.rebound_date)) {
            (Some(trough), Some(rebound)) => rebound > trough,
            _ => false,
        }
    }
}

/// A ticker that matched the scan, with all of its events (most recent first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluctuationStock {
    pub ticker: String,
    pub name: String,
    pub occurrence_count: u32,
    pub recent_trough_date: String,
    pub recent_trough_price: f64,
    pub recent_rebound_date: String,
    pub recent_rebound_performance: f64,
    #[serde(default)]
    pub events: Vec<FluctuationEvent>,
}
