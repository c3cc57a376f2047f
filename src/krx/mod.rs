//! Investor-type trading flows from KRX (Korea Exchange).
//!
//! Both endpoints take `YYYYMMDD` dates on the wire; callers pass [`NaiveDate`]s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::OrderedMap;
use crate::core::conversions::krx_date;
use crate::{TvClient, TvError};

/// Investor label aggregating every institutional investor type.
pub const INSTITUTION_TOTAL: &str = "기관합계";

/// A trading-flow cell: an investor/date label or an amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlowCell {
    Amount(f64),
    Label(String),
}

/// One row of the trading-flow table.
///
/// Columns depend on the request: with `detail` rows are keyed by date and carry one
/// column per investor type; without it rows are keyed by investor type and carry
/// sell/buy/net columns. Column order is the server's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradingVolumeRow(pub OrderedMap<Option<FlowCell>>);

impl TradingVolumeRow {
    /// The row key: the first textual cell (`투자자구분` or `날짜`).
    pub fn label(&self) -> Option<&str> {
        self.0.iter().find_map(|(_, cell)| match cell {
            Some(FlowCell::Label(s)) => Some(s.as_str()),
            _ => None,
        })
    }

    /// The numeric value of `column`.
    pub fn amount(&self, column: &str) -> Option<f64> {
        match self.0.get(column)? {
            Some(FlowCell::Amount(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingVolumeReport {
    pub index_name: String,
    #[serde(default)]
    pub data: Vec<TradingVolumeRow>,
}

/// Trading-flow query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingVolumeRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// `KOSPI`, `KOSDAQ`, or a 6-digit stock code.
    pub ticker: String,
    /// Per-day breakdown instead of a per-investor total.
    pub detail: bool,
    /// Keep only institutional investor rows (ignored with `detail`).
    pub institution_only: bool,
}

impl TradingVolumeRequest {
    /// A per-investor summary of the KOSPI market.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            ticker: "KOSPI".to_string(),
            detail: false,
            institution_only: false,
        }
    }

    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    #[must_use]
    pub const fn detail(mut self, detail: bool) -> Self {
        self.detail = detail;
        self
    }

    #[must_use]
    pub const fn institution_only(mut self, only: bool) -> Self {
        self.institution_only = only;
        self
    }
}

#[derive(Serialize)]
struct TradingVolumePayload<'a> {
    start_date: String,
    end_date: String,
    ticker: &'a str,
    detail: bool,
    institution_only: bool,
}

/// A stock ranked by net purchases of one investor type. Negative amounts are net sales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPurchase {
    pub ticker: String,
    pub name: String,
    pub volume: i64,
    pub value: i64,
}

#[derive(Serialize)]
struct NetPurchasePayload<'a> {
    start_date: String,
    end_date: String,
    market: &'a str,
    investor: &'a str,
}

#[derive(Deserialize)]
struct NetPurchaseEnvelope {
    #[serde(default)]
    data: Vec<NetPurchase>,
}

/// Trading value by investor type.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn trading_volume(
    client: &TvClient,
    req: &TradingVolumeRequest,
) -> Result<TradingVolumeReport, TvError> {
    let url = client.endpoint(&["api", "krx", "trading-volume"])?;
    let payload = TradingVolumePayload {
        start_date: krx_date(req.start),
        end_date: krx_date(req.end),
        ticker: &req.ticker,
        detail: req.detail,
        institution_only: req.institution_only,
    };
    client.post_json(url, &payload).await
}

/// Top stocks (at most 15) by net purchase value for `investor` in `market`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn net_purchases(
    client: &TvClient,
    market: &str,
    investor: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<NetPurchase>, TvError> {
    let url = client.endpoint(&["api", "krx", "net-purchases"])?;
    let payload = NetPurchasePayload {
        start_date: krx_date(start),
        end_date: krx_date(end),
        market,
        investor,
    };
    let envelope: NetPurchaseEnvelope = client.post_json(url, &payload).await?;
    Ok(envelope.data)
}
