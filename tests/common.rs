#![allow(dead_code)]

use httpmock::MockServer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::{fs, path::Path};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tradevolt_rs::TvClient;
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> TvClient {
    TvClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn fixture_json(name: &str) -> serde_json::Value {
    serde_json::from_str(&fixture(name)).unwrap()
}

pub fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Counts `WARN` events seen by the thread-local subscriber.
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

pub struct WarnCount {
    count: Arc<AtomicUsize>,
    _guard: tracing::subscriber::DefaultGuard,
}

impl WarnCount {
    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Installs a warning counter for the current thread until the returned value drops.
/// Pair with the default current-thread `#[tokio::test]` runtime.
pub fn count_warnings() -> WarnCount {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
    WarnCount {
        count,
        _guard: tracing::subscriber::set_default(subscriber),
    }
}
