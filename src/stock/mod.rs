//! Per-symbol fundamentals: overview, statements, price history, news.
//!
//! Internals are split into:
//! - `api`:   URL construction and envelope unwrapping
//! - `model`: public response types
//! - `wire`:  transport envelopes that never leave this module

mod api;
mod model;
mod wire;

pub use model::{
    AnalystRecommendations, FinancialRow, FinancialStatement, FinancialSummary,
    InvestmentMetrics, MarketData, NewsItem, Officer, PriceHistory, StatementKind,
    StatementValue, StockHistoryPoint, StockOverview, StockProfile,
};

use chrono::NaiveDate;

use crate::{TvClient, TvError};

/// Number of news items requested by [`Stock::latest_news`].
pub const DEFAULT_NEWS_LIMIT: u32 = 10;

/// A handle for one symbol, providing access to every per-symbol endpoint.
///
/// The symbol is embedded in request paths as given. Callers normalize it first
/// (the dashboard uppercases user input); the client does not.
///
/// # Example
///
/// ```no_run
/// # use tradevolt_rs::{Stock, TvClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TvClient::default();
/// let aapl = Stock::new(&client, "AAPL");
///
/// let overview = aapl.overview().await?;
/// println!("{} trades at {}", overview.profile.long_name, overview.market_data.current_price);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Stock {
    client: TvClient,
    symbol: String,
}

impl Stock {
    /// Creates a new `Stock` for a given symbol.
    pub fn new(client: &TvClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// The symbol this handle was created with.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetches profile, summary, metrics, market data, analyst view and officers in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), fields(symbol = %self.symbol))]
    pub async fn overview(&self) -> Result<StockOverview, TvError> {
        api::fetch_overview(&self.client, &self.symbol).await
    }

    /// Fetches one financial statement.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), fields(symbol = %self.symbol))]
    pub async fn financials(&self, kind: StatementKind) -> Result<FinancialStatement, TvError> {
        api::fetch_financials(&self.client, &self.symbol, kind).await
    }

    /// Fetches daily OHLCV between `start` and `end` (inclusive).
    ///
    /// Rows are returned in server order, unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    /// The backend answers 404 when the window contains no trading data.
    #[tracing::instrument(skip(self), fields(symbol = %self.symbol))]
    pub async fn history(&self, start: NaiveDate, end: NaiveDate) -> Result<PriceHistory, TvError> {
        api::fetch_history(&self.client, &self.symbol, start, end).await
    }

    /// Fetches up to `limit` news items (the backend accepts 1..=50).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn news(&self, limit: u32) -> Result<Vec<NewsItem>, TvError> {
        api::fetch_news(&self.client, &self.symbol, limit).await
    }

    /// Fetches the latest [`DEFAULT_NEWS_LIMIT`] news items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn latest_news(&self) -> Result<Vec<NewsItem>, TvError> {
        self.news(DEFAULT_NEWS_LIMIT).await
    }

    /* ---------------- Overview parts ---------------- */

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn profile(&self) -> Result<StockProfile, TvError> {
        api::fetch_resource(&self.client, &self.symbol, "profile").await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn financial_summary(&self) -> Result<FinancialSummary, TvError> {
        api::fetch_resource(&self.client, &self.symbol, "financial-summary").await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn metrics(&self) -> Result<InvestmentMetrics, TvError> {
        api::fetch_resource(&self.client, &self.symbol, "metrics").await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn market_data(&self) -> Result<MarketData, TvError> {
        api::fetch_resource(&self.client, &self.symbol, "market-data").await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn recommendations(&self) -> Result<AnalystRecommendations, TvError> {
        api::fetch_resource(&self.client, &self.symbol, "recommendations").await
    }

    /// Top officers by total pay. An empty list is a valid answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn officers(&self) -> Result<Vec<Officer>, TvError> {
        api::fetch_officers(&self.client, &self.symbol).await
    }
}
