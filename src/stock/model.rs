use serde::{Deserialize, Serialize};

use crate::core::OrderedMap;

/// Company profile block of the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockProfile {
    pub symbol: String,
    pub long_name: String,
    pub industry: String,
    pub sector: String,
    /// Business summary, already translated to Korean by the backend.
    pub long_business_summary: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub full_time_employees: String,
}

/// Headline financial figures, preformatted for display (currency-converted strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_revenue: String,
    pub net_income_to_common: String,
    pub operating_margins: String,
    pub dividend_yield: String,
    pub trailing_eps: String,
    pub total_cash: String,
    pub total_debt: String,
    pub debt_to_equity: String,
    #[serde(default)]
    pub ex_dividend_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentMetrics {
    #[serde(rename = "trailingPE")]
    pub trailing_pe: String,
    #[serde(rename = "forwardPE")]
    pub forward_pe: String,
    #[serde(rename = "priceToBook")]
    pub price_to_book: String,
    #[serde(rename = "returnOnEquity")]
    pub return_on_equity: String,
    #[serde(rename = "returnOnAssets")]
    pub return_on_assets: String,
    pub beta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub current_price: String,
    pub previous_close: String,
    pub day_high: String,
    pub day_low: String,
    pub fifty_two_week_high: String,
    pub fifty_two_week_low: String,
    pub market_cap: String,
    pub shares_outstanding: String,
    pub volume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystRecommendations {
    /// 1.0 (strong buy) to 5.0 (strong sell).
    pub recommendation_mean: f64,
    pub recommendation_key: String,
    pub number_of_analyst_opinions: u32,
    pub target_mean_price: String,
    pub target_high_price: String,
    pub target_low_price: String,
}

/// A company officer. The backend returns at most the five best paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    pub name: String,
    pub title: String,
    #[serde(rename = "totalPay")]
    pub total_pay: String,
}

/// Aggregated fundamentals for one symbol, fetched in a single round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockOverview {
    pub profile: StockProfile,
    pub summary: FinancialSummary,
    pub metrics: InvestmentMetrics,
    #[serde(rename = "marketData")]
    pub market_data: MarketData,
    pub recommendations: AnalystRecommendations,
    #[serde(default)]
    pub officers: Vec<Officer>,
}

/// Which of the three statements to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Income,
    Balance,
    Cashflow,
}

impl StatementKind {
    /// The path segment the backend expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Balance => "balance",
            Self::Cashflow => "cashflow",
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One statement cell: the backend sends raw numbers or preformatted strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatementValue {
    Number(f64),
    Text(String),
}

/// One line item of a statement, with its value per fiscal year in wire order.
///
/// On the wire this is a flat object: `{"item": "Total Revenue", "2024": ..., "2023": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "OrderedMap<serde_json::Value>",
    into = "OrderedMap<serde_json::Value>"
)]
pub struct FinancialRow {
    pub item: String,
    pub values: OrderedMap<Option<StatementValue>>,
}

impl FinancialRow {
    /// The value reported for `year`, if the row has one.
    pub fn value(&self, year: &str) -> Option<&StatementValue> {
        self.values.get(year).and_then(Option::as_ref)
    }
}

impl TryFrom<OrderedMap<serde_json::Value>> for FinancialRow {
    type Error = String;

    fn try_from(mut raw: OrderedMap<serde_json::Value>) -> Result<Self, Self::Error> {
        let item = match raw.remove("item") {
            Some(serde_json::Value::String(s)) => s,
            Some(other) => return Err(format!("statement `item` must be a string, got {other}")),
            None => return Err("statement row without `item`".to_string()),
        };
        let mut values = OrderedMap::new();
        for (year, v) in raw {
            let cell = match v {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(StatementValue::Text(s)),
                serde_json::Value::Number(n) => n.as_f64().map(StatementValue::Number),
                other => {
                    return Err(format!("`{item}` for {year} is not a scalar: {other}"));
                }
            };
            values.insert(year, cell);
        }
        Ok(Self { item, values })
    }
}

impl From<FinancialRow> for OrderedMap<serde_json::Value> {
    fn from(row: FinancialRow) -> Self {
        let mut out = Self::new();
        out.insert("item", serde_json::Value::String(row.item));
        for (year, cell) in row.values {
            let v = match cell {
                None => serde_json::Value::Null,
                Some(StatementValue::Text(s)) => serde_json::Value::String(s),
                Some(StatementValue::Number(n)) => serde_json::json!(n),
            };
            out.insert(year, v);
        }
        out
    }
}

/// One statement type for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatement {
    /// Fiscal-year labels, most recent first.
    pub years: Vec<String>,
    pub data: Vec<FinancialRow>,
}

impl FinancialStatement {
    /// Checks that every row only reports years listed in `years`.
    ///
    /// # Errors
    ///
    /// Returns the first offending `(item, year)` pair.
    pub fn validate(&self) -> Result<(), (String, String)> {
        for row in &self.data {
            let stray = row
                .values
                .keys()
                .find(|y| !self.years.iter().any(|k| k.as_str() == *y));
            if let Some(year) = stray {
                return Err((row.item.clone(), year.to_string()));
            }
        }
        Ok(())
    }

    /// Finds a row by its item label.
    pub fn row(&self, item: &str) -> Option<&FinancialRow> {
        self.data.iter().find(|r| r.item == item)
    }
}

/// One trading day's OHLCV, field names exactly as the backend emits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockHistoryPoint {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: u64,
}

/// Price history plus the echoed request window.
///
/// `end_date` may be earlier than requested: the backend clamps it to the last trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub symbol: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub data: Vec<StockHistoryPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    #[serde(rename = "publishedDate", default)]
    pub published_date: Option<String>,
    pub source: String,
    #[serde(default)]
    pub summary: String,
}

