use crate::core::{TvClient, TvError};
use crate::portfolio::model::{
    LivePrice, Market, Portfolio, PortfolioHolding, TradeConfirmation, TradeTicket,
};

pub(super) async fn fetch_price(
    client: &TvClient,
    market: Market,
    code: &str,
) -> Result<f64, TvError> {
    let url = client.endpoint(&["api", "stocks", "price", market.as_str(), code])?;
    let quote: LivePrice = client.get_json(url).await?;
    Ok(quote.price)
}

pub(super) async fn fetch_holding(
    client: &TvClient,
    code: &str,
) -> Result<Option<PortfolioHolding>, TvError> {
    let url = client.endpoint(&["api", "portfolio", code])?;
    match client.get_json(url).await {
        Ok(holding) => Ok(Some(holding)),
        Err(e) if e.is_not_found() => {
            tracing::debug!(code, "no holding");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub(super) async fn fetch_portfolio(client: &TvClient) -> Result<Portfolio, TvError> {
    let url = client.endpoint(&["api", "portfolio"])?;
    client.get_json(url).await
}

pub(super) async fn post_trade(
    client: &TvClient,
    ticket: &TradeTicket,
) -> Result<TradeConfirmation, TvError> {
    let url = client.endpoint(&["api", "portfolio", "trade"])?;
    client.post_json(url, ticket).await
}
