//! Translation and AI-assisted Q&A.

use serde::{Deserialize, Serialize};

use crate::stock::NewsItem;
use crate::{TvClient, TvError};

#[derive(Serialize)]
struct TranslationRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct TranslationResponse {
    translated_text: String,
}

/// A news item's title and summary, translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedArticle {
    pub title: String,
    pub summary: String,
}

/// Translates `text` to Korean.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn translate(client: &TvClient, text: &str) -> Result<String, TvError> {
    let url = client.endpoint(&["api", "util", "translate"])?;
    let resp: TranslationResponse = client
        .post_json(url, &TranslationRequest { text })
        .await?;
    Ok(resp.translated_text)
}

/// Translates a title and a summary concurrently.
///
/// Both calls are in flight at the same time; the result is available once both
/// finished, and the first failure fails the whole operation.
///
/// # Errors
///
/// Returns the error of whichever translation failed.
#[tracing::instrument(skip_all)]
pub async fn translate_article(
    client: &TvClient,
    title: &str,
    summary: &str,
) -> Result<TranslatedArticle, TvError> {
    let (title, summary) = tokio::try_join!(translate(client, title), translate(client, summary))?;
    Ok(TranslatedArticle { title, summary })
}

/// Question plus the context the model answers from.
///
/// The backend expects the financial and history context as preformatted text and the
/// news as a list of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub symbol: String,
    pub question: String,
    #[serde(rename = "financialData")]
    pub financial_data: String,
    #[serde(rename = "historyData")]
    pub history_data: String,
    #[serde(rename = "newsData")]
    pub news_data: Vec<NewsItem>,
}

impl ChatRequest {
    /// A request with empty context.
    pub fn new(symbol: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            question: question.into(),
            financial_data: String::new(),
            history_data: String::new(),
            news_data: Vec::new(),
        }
    }

    #[must_use]
    pub fn financial_data(mut self, data: impl Into<String>) -> Self {
        self.financial_data = data.into();
        self
    }

    #[must_use]
    pub fn history_data(mut self, data: impl Into<String>) -> Self {
        self.history_data = data.into();
        self
    }

    #[must_use]
    pub fn news(mut self, items: Vec<NewsItem>) -> Self {
        self.news_data = items;
        self
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

/// Asks the model a free-form question about `req.symbol`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed. Upstream
/// model failures arrive as [`TvError::Api`] with the provider's status.
pub async fn chat(client: &TvClient, req: &ChatRequest) -> Result<String, TvError> {
    let url = client.endpoint(&["api", "ai", "chat"])?;
    let resp: ChatResponse = client.post_json(url, req).await?;
    Ok(resp.response)
}
