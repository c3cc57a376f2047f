use chrono::NaiveDate;

use crate::analysis::{
    model::{Comparison, FluctuationRequest, FluctuationStock, PerformanceReport, PerformanceRequest},
    wire,
};
use crate::core::conversions::iso_date;
use crate::core::{TvClient, TvError};

pub(super) async fn performance(
    client: &TvClient,
    req: &PerformanceRequest,
) -> Result<PerformanceReport, TvError> {
    let url = client.endpoint(&["api", "performance", "analysis"])?;
    let payload = wire::PerformancePayload {
        country: req.country,
        market: &req.market,
        start_date: iso_date(req.start),
        end_date: iso_date(req.end),
        top_n: req.top_n,
    };
    client.post_json(url, &payload).await
}

pub(super) async fn compare(
    client: &TvClient,
    tickers: &[String],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Comparison, TvError> {
    let url = client.endpoint(&["api", "stock", "compare"])?;
    let payload = wire::ComparisonPayload {
        tickers,
        start_date: iso_date(start),
        end_date: iso_date(end),
    };
    client.post_json(url, &payload).await
}

pub(super) async fn fluctuation(
    client: &TvClient,
    req: &FluctuationRequest,
) -> Result<Vec<FluctuationStock>, TvError> {
    let url = client.endpoint(&["api", "stocks", "fluctuation-analysis"])?;
    let payload = wire::FluctuationPayload {
        country: req.country,
        market: &req.market,
        start_date: iso_date(req.start),
        end_date: iso_date(req.end),
        decline_period: req.decline_period,
        decline_rate: req.decline_rate,
        rebound_period: req.rebound_period,
        rebound_rate: req.rebound_rate,
    };
    let envelope: wire::FluctuationEnvelope = client.post_json(url, &payload).await?;
    Ok(envelope.found_stocks)
}
