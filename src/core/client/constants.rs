//! Centralized constants for the default origin, UA and fallback messages.

/// Backend origin used when neither the builder nor the environment supplies one.
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the backend origin.
pub const BASE_URL_ENV: &str = "TRADEVOLT_API_URL";

pub(crate) const USER_AGENT: &str = concat!("tradevolt-rs/", env!("CARGO_PKG_VERSION"));

/// Overall request timeout applied unless the builder overrides or disables it.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shown when the server fails without a usable `detail`/`message`.
pub const GENERIC_API_FAILURE_MESSAGE: &str = "API 요청에 실패했습니다.";

/// Shown when the server could not be reached at all.
pub const CONNECTION_FAILURE_MESSAGE: &str =
    "서버에 연결할 수 없습니다. 네트워크 상태를 확인해주세요.";

/// Shown when a success response does not decode into the expected shape.
pub const DECODE_FAILURE_MESSAGE: &str = "서버 응답 형식이 올바르지 않습니다.";
