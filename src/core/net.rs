//! The request core: one HTTP exchange, one error contract.

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::client::CONNECTION_FAILURE_MESSAGE;
use crate::core::{TvClient, TvError};

/// Method, headers and body for a single call to [`TvClient::request`].
///
/// The default is a bodiless `GET`. Headers set here are merged over the
/// client's defaults (`Content-Type: application/json` among them) and win on
/// conflicting names.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    method: Method,
    headers: HeaderMap,
    body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    /// A plain `GET` with no extra headers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds or replaces a header for this request only.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`TvError::Encode`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, TvError> {
        self.body = Some(serde_json::to_string(body).map_err(TvError::Encode)?);
        Ok(self)
    }

    /// Uses `body` verbatim as the request body.
    #[must_use]
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl TvClient {
    /// Issues one request and decodes the response into `T`.
    ///
    /// * 2xx with an empty body decodes as `{}`, so no-content responses are tolerated.
    /// * non-2xx yields [`TvError::Api`] carrying the status and the server's
    ///   `detail`/`message`, or the generic failure message.
    /// * no response at all is logged once and yields [`TvError::Connection`].
    ///
    /// The payload is trusted to match `T`; a mismatch surfaces as [`TvError::Json`].
    ///
    /// # Errors
    ///
    /// See above.
    #[tracing::instrument(skip_all, fields(method = %options.method, url = %url))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        url: Url,
        options: RequestOptions,
    ) -> Result<T, TvError> {
        let body = self.send_for_text(url, options).await?;
        decode_body(&body)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, TvError> {
        self.request(url, RequestOptions::new()).await
    }

    pub(crate) async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, TvError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(url, RequestOptions::new().method(Method::POST).json(body)?)
            .await
    }

    async fn send_for_text(&self, url: Url, options: RequestOptions) -> Result<String, TvError> {
        let mut headers = self.default_headers().clone();
        for (name, value) in &options.headers {
            headers.insert(name.clone(), value.clone());
        }

        let retry = self.retry_config();
        let max_retries = if retry.enabled && options.method == Method::GET {
            retry.max_retries
        } else {
            0
        };

        let mut attempt = 0u32;
        loop {
            tracing::debug!(attempt, "dispatching request");
            let mut req = self
                .http()
                .request(options.method.clone(), url.clone())
                .headers(headers.clone());
            if let Some(body) = &options.body {
                req = req.body(body.clone());
            }

            match req.send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.text().await.map_err(|e| connection_failure(&url, e));
                    }
                    if attempt < max_retries && retry.should_retry_status(status.as_u16()) {
                        tracing::debug!(status = status.as_u16(), attempt, "retrying after status");
                        tokio::time::sleep(retry.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    let body = resp.text().await.unwrap_or_default();
                    return Err(TvError::from_status(status.as_u16(), &body));
                }
                Err(e) => {
                    if attempt < max_retries && retry.should_retry_transport(&e) {
                        tracing::debug!(error = %e, attempt, "retrying after transport failure");
                        tokio::time::sleep(retry.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(connection_failure(&url, e));
                }
            }
        }
    }
}

fn connection_failure(url: &Url, source: reqwest::Error) -> TvError {
    tracing::warn!(%url, error = %source, "request failed before a response was received");
    TvError::Connection {
        message: CONNECTION_FAILURE_MESSAGE.to_string(),
        source,
    }
}

/// Decode a 2xx body. Blank bodies (204, or 200 with nothing) decode as `{}`.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, TvError> {
    let text = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(text).map_err(TvError::Json)
}

/// Extract the human-readable message from an error body.
/// FastAPI puts it under `detail`; some handlers use `message`. Non-string values
/// (e.g. a validation-error list) and blank strings count as absent.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;
    ["detail", "message"]
        .iter()
        .filter_map(|k| obj.get(*k).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Append `pairs` as a percent-encoded query string (`' '` → `%20`, `'&'` → `%26`).
pub(crate) fn with_query(mut url: Url, pairs: &[(&str, &str)]) -> Url {
    if pairs.is_empty() {
        return url;
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    url.set_query(Some(&query));
    url
}
