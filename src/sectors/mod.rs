//! KRX sector taxonomy and sector index performance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::SeriesPoint;
use crate::core::OrderedMap;
use crate::core::conversions::krx_date;
use crate::core::net::with_query;
use crate::{TvClient, TvError};

/// Group label the backend treats as "every sector index of the market".
pub const ALL_SECTORS_GROUP: &str = "전체 보기";

/// Sector groups per market: market → group name → sector index tickers, in server order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorGroups(OrderedMap<OrderedMap<Vec<String>>>);

impl SectorGroups {
    /// Market names (e.g. `KOSPI`, `KOSDAQ`).
    pub fn markets(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }

    /// Group names of one market.
    pub fn groups(&self, market: &str) -> Vec<&str> {
        self.0
            .get(market)
            .map(|groups| groups.keys().collect())
            .unwrap_or_default()
    }

    /// Index tickers of one group.
    pub fn tickers(&self, market: &str, group: &str) -> Option<&[String]> {
        self.0.get(market)?.get(group).map(Vec::as_slice)
    }
}

/// A sector index ticker and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorTicker {
    pub ticker: String,
    pub name: String,
}

#[derive(Deserialize)]
struct TickersEnvelope {
    #[serde(default)]
    tickers: Vec<SectorTicker>,
}

#[derive(Serialize)]
struct AnalysisPayload<'a> {
    start_date: String,
    end_date: String,
    tickers: &'a [String],
}

#[derive(Deserialize)]
struct AnalysisEnvelope {
    #[serde(default)]
    data: Vec<SeriesPoint>,
}

/// Fetches the sector taxonomy.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn groups(client: &TvClient) -> Result<SectorGroups, TvError> {
    let url = client.endpoint(&["api", "sectors", "groups"])?;
    client.get_json(url).await
}

/// Lists the sector indices of `group` in `market`. Use [`ALL_SECTORS_GROUP`] for all of them.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed. The backend
/// reports an unknown market/group as 404.
pub async fn tickers(
    client: &TvClient,
    market: &str,
    group: &str,
) -> Result<Vec<SectorTicker>, TvError> {
    let url = client.endpoint(&["api", "sectors", "tickers"])?;
    let url = with_query(url, &[("market", market), ("group", group)]);
    let envelope: TickersEnvelope = client.get_json(url).await?;
    Ok(envelope.tickers)
}

/// Indexed performance (first trading day = 100) of each sector in `tickers`.
///
/// Each point's keys are sector names; a sector with no data yet on a date is `None`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn analysis(
    client: &TvClient,
    tickers: &[String],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<SeriesPoint>, TvError> {
    let url = client.endpoint(&["api", "sectors", "analysis"])?;
    let payload = AnalysisPayload {
        start_date: krx_date(start),
        end_date: krx_date(end),
        tickers,
    };
    let envelope: AnalysisEnvelope = client.post_json(url, &payload).await?;
    Ok(envelope.data)
}
