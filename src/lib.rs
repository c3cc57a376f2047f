//! tradevolt-rs: typed async client for the Trade Volt dashboard API.
//!
//! One [`TvClient`] is built once and passed by reference to every endpoint. Endpoints are
//! grouped by domain:
//!
//! - [`stock`]: per-symbol fundamentals, statements, price history and news
//! - [`search`]: listing search and a debounced search-as-you-type session
//! - [`sectors`], [`analysis`], [`krx`]: market analytics
//! - [`portfolio`]: holdings, live prices and trade recording
//! - [`util`], [`news`]: translation, AI chat and news scalping
//!
//! Every call fails with a [`TvError`]. [`TvError::status`] tells a server-reported failure
//! (`Some(status)`) apart from an unreachable server (`None`).
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), tradevolt_rs::TvError> {
//! use tradevolt_rs::{Stock, TvClient};
//!
//! let client = TvClient::from_env()?;
//! let history = Stock::new(&client, "AAPL")
//!     .history(
//!         chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
//!     )
//!     .await?;
//! println!("{} rows", history.data.len());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod core;
pub mod krx;
pub mod news;
pub mod portfolio;
pub mod search;
pub mod sectors;
pub mod stock;
pub mod util;

pub use crate::core::{
    Backoff, OrderedMap, RequestOptions, RetryConfig, TvClient, TvClientBuilder, TvError,
};
pub use portfolio::{Market, Portfolio, PortfolioHolding, TradeSide, TradeTicket};
pub use search::{SearchMarket, SearchOutcome, SearchSession, StockItem};
pub use stock::Stock;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Does nothing if a global subscriber is already set.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
