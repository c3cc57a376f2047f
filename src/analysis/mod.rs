//! Market-wide analytics: performance rankings, ticker comparison and the
//! decline/rebound (fluctuation) scanner.

mod api;
mod model;
mod wire;

pub use model::{
    Comparison, ComparisonSeries, Country, FluctuationEvent, FluctuationRequest,
    FluctuationStock, PerformanceReport, PerformanceRequest, SeriesPoint, StockPerformance,
};

use chrono::NaiveDate;

use crate::core::OrderedMap;
use crate::{TvClient, TvError};

/// Top and bottom performers of a market over a window.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed. The backend
/// answers 404 when the window holds no usable data.
pub async fn performance(
    client: &TvClient,
    req: &PerformanceRequest,
) -> Result<PerformanceReport, TvError> {
    api::performance(client, req).await
}

/// Cumulative returns of `tickers` over a window, ready to chart.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn compare(
    client: &TvClient,
    tickers: &[String],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Comparison, TvError> {
    api::compare(client, tickers, start, end).await
}

/// Runs the decline→rebound scan. Results are ordered by occurrence count, highest first.
///
/// Scans over a whole market are slow on the backend; consider a longer client timeout.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
#[tracing::instrument(skip(client), fields(market = %req.market))]
pub async fn fluctuation(
    client: &TvClient,
    req: &FluctuationRequest,
) -> Result<Vec<FluctuationStock>, TvError> {
    api::fluctuation(client, req).await
}

/// Pads chart points so every point carries a value slot for each of `keys`.
///
/// Missing or `None` values take the last value seen for that key; before the first
/// observation they stay `None`. Points keep their order and their other keys.
pub fn align_series(points: &[SeriesPoint], keys: &[&str]) -> Vec<SeriesPoint> {
    let mut last: OrderedMap<Option<f64>> = OrderedMap::new();
    points
        .iter()
        .map(|point| {
            let mut aligned = point.clone();
            for key in keys {
                match point.value(key) {
                    Some(v) => last.insert(*key, Some(v)),
                    None => {
                        let carried = last.get(key).copied().flatten();
                        aligned.values.insert(*key, carried);
                    }
                }
            }
            aligned
        })
        .collect()
}
