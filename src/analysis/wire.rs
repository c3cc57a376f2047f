use serde::{Deserialize, Serialize};

use super::model::{Country, FluctuationStock};

#[derive(Serialize)]
pub(crate) struct PerformancePayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) country: Option<Country>,
    pub(crate) market: &'a str,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    pub(crate) top_n: u32,
}

#[derive(Serialize)]
pub(crate) struct ComparisonPayload<'a> {
    pub(crate) tickers: &'a [String],
    pub(crate) start_date: String,
    pub(crate) end_date: String,
}

#[derive(Serialize)]
pub(crate) struct FluctuationPayload<'a> {
    pub(crate) country: Country,
    pub(crate) market: &'a str,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    pub(crate) decline_period: u32,
    pub(crate) decline_rate: f64,
    pub(crate) rebound_period: u32,
    pub(crate) rebound_rate: f64,
}

#[derive(Deserialize)]
pub(crate) struct FluctuationEnvelope {
    #[serde(default)]
    pub(crate) found_stocks: Vec<FluctuationStock>,
}
