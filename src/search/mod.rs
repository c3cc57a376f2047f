//! Stock search by name or code, plus a debounced search-as-you-type session.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::core::net::with_query;
use crate::{TvClient, TvError};

/// Queries shorter than this (after trimming, in characters) never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;

/// Quiet period a [`SearchSession`] waits for before dispatching.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// A listed stock matching a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
}

/// Which listing universe to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMarket {
    /// Every domestic (KOSPI + KOSDAQ) listing.
    #[default]
    Kor,
    /// Every overseas listing.
    Usa,
    Kospi,
    Kosdaq,
    Nasdaq,
    Nyse,
    Amex,
}

impl SearchMarket {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kor => "KOR",
            Self::Usa => "USA",
            Self::Kospi => "KOSPI",
            Self::Kosdaq => "KOSDAQ",
            Self::Nasdaq => "NASDAQ",
            Self::Nyse => "NYSE",
            Self::Amex => "AMEX",
        }
    }
}

/// Returns the trimmed query if it is long enough to be worth a request.
fn searchable(query: &str) -> Option<&str> {
    let q = query.trim();
    (q.chars().count() >= MIN_QUERY_CHARS).then_some(q)
}

/// Searches listings in `market` by name or code.
///
/// A query under two characters (after trimming) resolves to an empty list without
/// any request.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn search_stocks(
    client: &TvClient,
    query: &str,
    market: SearchMarket,
) -> Result<Vec<StockItem>, TvError> {
    let Some(q) = searchable(query) else {
        return Ok(Vec::new());
    };
    let url = client.endpoint(&["api", "search-stocks"])?;
    let url = with_query(url, &[("query", q), ("market", market.as_str())]);
    client.get_json(url).await
}

/// Searches domestic listings only, returning at most `limit` items.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn search_korean(
    client: &TvClient,
    query: &str,
    limit: u32,
) -> Result<Vec<StockItem>, TvError> {
    let Some(q) = searchable(query) else {
        return Ok(Vec::new());
    };
    let url = client.endpoint(&["api", "stocks", "korean"])?;
    let limit = limit.to_string();
    let url = with_query(url, &[("query", q), ("limit", limit.as_str())]);
    client.get_json(url).await
}

/// Searches overseas listings, optionally restricted to some exchanges.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn search_overseas(
    client: &TvClient,
    query: &str,
    markets: &[SearchMarket],
    limit: u32,
) -> Result<Vec<StockItem>, TvError> {
    let Some(q) = searchable(query) else {
        return Ok(Vec::new());
    };
    let url = client.endpoint(&["api", "stocks", "overseas"])?;
    let limit = limit.to_string();
    let markets = markets
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let mut pairs = vec![("query", q)];
    if !markets.is_empty() {
        pairs.push(("markets", markets.as_str()));
    }
    pairs.push(("limit", limit.as_str()));
    client.get_json(with_query(url, &pairs)).await
}

/// Looks up one listing by its exact code.
///
/// An unknown code (HTTP 404) resolves to `None`.
///
/// # Errors
///
/// Returns an error if the request fails for any other reason or the response cannot be
/// parsed.
pub async fn stock_info(client: &TvClient, code: &str) -> Result<Option<StockItem>, TvError> {
    let url = client.endpoint(&["api", "stocks", "info", code])?;
    match client.get_json(url).await {
        Ok(item) => Ok(Some(item)),
        Err(e) if e.is_not_found() => {
            tracing::debug!(code, "unknown stock code");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Lists the first `limit` listings of one market in the backend's listing order.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn market_stocks(
    client: &TvClient,
    market: SearchMarket,
    limit: u32,
) -> Result<Vec<StockItem>, TvError> {
    let url = client.endpoint(&["api", "stocks", "market", market.as_str()])?;
    let limit = limit.to_string();
    client
        .get_json(with_query(url, &[("limit", limit.as_str())]))
        .await
}

/// Outcome of a [`SearchSession::search`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The newest query's results.
    Results(Vec<StockItem>),
    /// A newer call (or [`SearchSession::cancel`]) replaced this one; its result was dropped.
    Superseded,
}

/// Search-as-you-type: debounces keystrokes and drops stale answers.
///
/// Every call to [`search`](Self::search) takes a new generation. It waits for the
/// debounce window, then only dispatches if no newer call arrived meanwhile, and only
/// delivers its answer if it is still the newest when the answer lands. Clones share
/// the same generation counter.
#[derive(Debug, Clone)]
pub struct SearchSession {
    client: TvClient,
    market: SearchMarket,
    debounce: Duration,
    generation: Arc<AtomicU64>,
}

impl SearchSession {
    pub fn new(client: &TvClient, market: SearchMarket) -> Self {
        Self {
            client: client.clone(),
            market,
            debounce: DEFAULT_DEBOUNCE,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Overrides the 300ms quiet period.
    #[must_use]
    pub const fn debounce(mut self, window: Duration) -> Self {
        self.debounce = window;
        self
    }

    /// Invalidates every in-flight call.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Searches for `query` unless a newer keystroke supersedes it.
    ///
    /// # Errors
    ///
    /// Returns the request error, unless the call was superseded in the meantime, in
    /// which case the outcome is [`SearchOutcome::Superseded`].
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, TvError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if searchable(query).is_none() {
            return Ok(SearchOutcome::Results(Vec::new()));
        }

        tokio::time::sleep(self.debounce).await;
        if !self.is_current(ticket) {
            tracing::debug!(query, "search superseded before dispatch");
            return Ok(SearchOutcome::Superseded);
        }

        let result = search_stocks(&self.client, query, self.market).await;
        if !self.is_current(ticket) {
            tracing::debug!(query, "search superseded in flight");
            return Ok(SearchOutcome::Superseded);
        }
        result.map(SearchOutcome::Results)
    }
}
