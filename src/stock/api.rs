use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::core::conversions::iso_date;
use crate::core::net::with_query;
use crate::core::{TvClient, TvError};
use crate::stock::{
    model::{FinancialStatement, NewsItem, Officer, PriceHistory, StatementKind, StockOverview},
    wire,
};

/// GET `/api/stock/{symbol}/{resource}`.
pub(super) async fn fetch_resource<T: DeserializeOwned>(
    client: &TvClient,
    symbol: &str,
    resource: &str,
) -> Result<T, TvError> {
    let url = client.endpoint(&["api", "stock", symbol, resource])?;
    client.get_json(url).await
}

pub(super) async fn fetch_overview(
    client: &TvClient,
    symbol: &str,
) -> Result<StockOverview, TvError> {
    fetch_resource(client, symbol, "overview").await
}

pub(super) async fn fetch_financials(
    client: &TvClient,
    symbol: &str,
    kind: StatementKind,
) -> Result<FinancialStatement, TvError> {
    let url = client.endpoint(&["api", "stock", symbol, "financials", kind.as_str()])?;
    client.get_json(url).await
}

pub(super) async fn fetch_history(
    client: &TvClient,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<PriceHistory, TvError> {
    let url = client.endpoint(&["api", "stock", symbol, "history"])?;
    let (start, end) = (iso_date(start), iso_date(end));
    let url = with_query(url, &[("start_date", start.as_str()), ("end_date", end.as_str())]);
    client.get_json(url).await
}

pub(super) async fn fetch_news(
    client: &TvClient,
    symbol: &str,
    limit: u32,
) -> Result<Vec<NewsItem>, TvError> {
    let url = client.endpoint(&["api", "stock", symbol, "news"])?;
    let limit = limit.to_string();
    let url = with_query(url, &[("limit", limit.as_str())]);
    let envelope: wire::NewsEnvelope = client.get_json(url).await?;
    Ok(envelope.news)
}

pub(super) async fn fetch_officers(
    client: &TvClient,
    symbol: &str,
) -> Result<Vec<Officer>, TvError> {
    let envelope: wire::OfficersEnvelope = fetch_resource(client, symbol, "officers").await?;
    Ok(envelope.officers)
}
