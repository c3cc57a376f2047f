//! Holdings, live prices and trade recording.

mod api;
mod model;

pub use model::{
    DOMESTIC_COMMISSION_RATE, FeeEstimate, LivePrice, Market, OVERSEAS_COMMISSION_RATE,
    Portfolio, PortfolioHolding, SECURITIES_TAX_RATE, Subtotal, TradeConfirmation, TradeSide,
    TradeTicket,
};

use futures::future::try_join_all;

use crate::{TvClient, TvError};

/// The live price of `code` in `market`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn price(client: &TvClient, market: Market, code: &str) -> Result<f64, TvError> {
    api::fetch_price(client, market, code).await
}

/// Live prices for several codes of one market, fetched concurrently, in input order.
///
/// # Errors
///
/// Fails with the first error if any single lookup fails.
pub async fn prices(
    client: &TvClient,
    market: Market,
    codes: &[&str],
) -> Result<Vec<f64>, TvError> {
    try_join_all(codes.iter().map(|code| api::fetch_price(client, market, code))).await
}

/// The holding for `code`, or `None` when the server answers 404 (not owned).
///
/// # Errors
///
/// Any failure other than 404 propagates.
pub async fn holding(client: &TvClient, code: &str) -> Result<Option<PortfolioHolding>, TvError> {
    api::fetch_holding(client, code).await
}

/// Every holding with the server-computed totals.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn portfolio(client: &TvClient) -> Result<Portfolio, TvError> {
    api::fetch_portfolio(client).await
}

/// Records a buy or sell.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the trade.
#[tracing::instrument(skip_all, fields(code = %ticket.stock_code, side = ?ticket.side))]
pub async fn trade(client: &TvClient, ticket: &TradeTicket) -> Result<TradeConfirmation, TvError> {
    api::post_trade(client, ticket).await
}
