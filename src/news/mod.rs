//! News scalping: recent market headlines matched to listed companies and
//! cross-checked against DART disclosures.
//!
//! Per-symbol news lives on [`crate::Stock::news`].

mod model;

pub use model::{CompanyHeadline, Headline, ScalpingReport, VerifiedHeadline};

use std::time::Duration;

use crate::{TvClient, TvError};

/// A scalping scan over the most recent headlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalpingRequest {
    /// Only headlines published within this window are kept.
    pub window: Duration,
    /// How many raw headlines to pull (Naver caps this at 100).
    pub display_count: u32,
}

impl Default for ScalpingRequest {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(600),
            display_count: 50,
        }
    }
}

impl ScalpingRequest {
    #[must_use]
    pub const fn window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub const fn display_count(mut self, count: u32) -> Self {
        self.display_count = count;
        self
    }
}

/// Runs a scalping scan.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
#[tracing::instrument(skip(client))]
pub async fn scalping_search(
    client: &TvClient,
    req: ScalpingRequest,
) -> Result<ScalpingReport, TvError> {
    let url = client.endpoint(&["api", "news", "search"])?;
    let payload = model::ScalpingPayload {
        time_limit_seconds: req.window.as_secs(),
        display_count: req.display_count,
    };
    client.post_json(url, &payload).await
}
