use serde::{Deserialize, Serialize};

/// A headline as returned by the Naver news search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    #[serde(rename = "news_title")]
    pub title: String,
    #[serde(rename = "news_link")]
    pub link: String,
    /// RFC 2822 timestamp, as Naver sends it.
    #[serde(rename = "news_published")]
    pub published: String,
}

/// A headline attributed to a listed company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyHeadline {
    pub stock_name: String,
    pub stock_code: String,
    #[serde(flatten)]
    pub headline: Headline,
}

/// A company headline backed by a same-day DART disclosure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedHeadline {
    #[serde(flatten)]
    pub company: CompanyHeadline,
    pub disclosure_report_name: String,
    pub disclosure_url: String,
}

/// The three stages of a scalping scan, each a subset of the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScalpingReport {
    #[serde(default)]
    pub message: String,
    /// Stage 1: raw search hits.
    #[serde(rename = "raw_naver_news", default)]
    pub raw: Vec<Headline>,
    /// Stage 2: keyword/time filtered and matched to a company.
    #[serde(rename = "filtered_news", default)]
    pub filtered: Vec<CompanyHeadline>,
    /// Stage 3: confirmed by a disclosure.
    #[serde(rename = "dart_verified_news", default)]
    pub verified: Vec<VerifiedHeadline>,
}

#[derive(Serialize)]
pub(super) struct ScalpingPayload {
    pub(super) time_limit_seconds: u64,
    pub(super) display_count: u32,
}
