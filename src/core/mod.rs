//! Core components of the `tradevolt-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`TvClient`] and its builder.
//! - The [`TvError`] type and its two transport failure kinds.
//! - The request core ([`TvClient::request`]) every endpoint goes through.
//! - Wire helpers shared by the domain modules.

/// The client (`TvClient`), builder, retry policy and constants.
pub mod client;
/// Date formatting for the two date conventions the backend uses.
pub mod conversions;
/// The primary error type (`TvError`) for the crate.
pub mod error;
pub(crate) mod net;
/// Ordered decoding of objects whose keys are data.
pub mod wire;

// convenient re-exports so most code can just `use crate::core::TvClient`
pub use client::{Backoff, RetryConfig, TvClient, TvClientBuilder};
pub use error::TvError;
pub use net::RequestOptions;
pub use wire::OrderedMap;
