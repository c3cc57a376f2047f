//! Public client surface + builder.
//! Internals are split into `retry` (policy for idempotent GETs) and `constants` (origin + messages).

pub(crate) mod constants;
mod retry;

pub use constants::{
    BASE_URL_ENV, CONNECTION_FAILURE_MESSAGE, DECODE_FAILURE_MESSAGE, GENERIC_API_FAILURE_MESSAGE,
};
pub use retry::{Backoff, RetryConfig};

use crate::core::TvError;
use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use url::Url;

/// The single entry point to the Trade Volt API.
///
/// A `TvClient` is constructed once and passed by reference to every endpoint
/// function. Cloning is cheap: the underlying connection pool is shared.
/// The client holds no cache and no session state.
#[derive(Debug, Clone)]
pub struct TvClient {
    http: Client,
    base_url: Url,
    default_headers: HeaderMap,
    retry: RetryConfig,
}

impl Default for TvClient {
    /// # Panics
    ///
    /// Panics if `TRADEVOLT_API_URL` is set to something that is not a valid base URL.
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl TvClient {
    /// Create a new builder.
    pub fn builder() -> TvClientBuilder {
        TvClientBuilder::default()
    }

    /// Builds a client whose origin comes from `TRADEVOLT_API_URL`, falling back
    /// to `http://localhost:8000`.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment override is not a valid base URL or
    /// the HTTP client cannot be initialized.
    pub fn from_env() -> Result<Self, TvError> {
        Self::builder().build()
    }

    /// The origin every endpoint path is resolved against.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub(crate) const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Resolves `segments` under the base URL. Each segment is percent-encoded on its own,
    /// so user input such as a symbol can never inject extra path components.
    ///
    /// `.` and `..` are rejected with [`TvError::Config`]: URL parsing would collapse them
    /// into a different path and there is no encoding that survives that normalization.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, TvError> {
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(TvError::Config(format!(
                "path segment `{dot}` is not allowed in an endpoint"
            )));
        }
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                TvError::Config(format!("base URL `{}` cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }
}

/// Resolve the backend origin: the environment override when it is set and non-blank,
/// otherwise the local development origin.
pub(crate) fn resolve_base_url(env_override: Option<&str>) -> Result<Url, TvError> {
    let raw = env_override
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(TvError::Config(format!("`{raw}` is not a usable base URL")));
    }
    Ok(url)
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct TvClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    no_timeout: bool,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    headers: HeaderMap,
}

impl TvClientBuilder {
    /// Override the backend origin. Takes precedence over `TRADEVOLT_API_URL`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall request timeout. Default: 30s.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self.no_timeout = false;
        self
    }

    /// Disable the overall request timeout; a hung request then waits for the transport.
    #[must_use]
    pub const fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self.no_timeout = true;
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the retry policy for GET requests.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Toggle retries without touching the rest of the policy.
    #[must_use]
    pub fn retry_enabled(mut self, enabled: bool) -> Self {
        self.retry.get_or_insert_with(RetryConfig::default).enabled = enabled;
        self
    }

    /// Add a header sent with every request. Per-request headers still win.
    #[must_use]
    pub fn default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved origin is invalid or the HTTP client fails to build.
    pub fn build(self) -> Result<TvClient, TvError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => resolve_base_url(std::env::var(constants::BASE_URL_ENV).ok().as_deref())?,
        };
        if base_url.cannot_be_a_base() {
            return Err(TvError::Config(format!("`{base_url}` is not a usable base URL")));
        }

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if !self.no_timeout {
            httpb = httpb.timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb
            .build()
            .map_err(|e| TvError::Config(format!("HTTP client: {e}")))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &self.headers {
            default_headers.insert(name.clone(), value.clone());
        }

        Ok(TvClient {
            http,
            base_url,
            default_headers,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
