//! Common test utilities for integration tests.
//!
//! TestContext gives each test its own data directory and a local HTTP
//! server that plays both the vocabulary host and the fallback proxy.

pub mod fixtures;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use tempfile::TempDir;

use vocab_cli::config::Config;
use vocab_cli::state::AppState;

/// Test context with an isolated store and a local vocabulary server.
pub struct TestContext {
    pub dir: TempDir,
    pub config: Config,
    pub base_url: String,
    proxy_hits: Arc<AtomicUsize>,
}

impl TestContext {
    pub async fn new() -> Self {
        let proxy_hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/words.txt", get(|| async { fixtures::SPANISH }))
            .route("/empty.txt", get(|| async { "no delimiters here\n" }))
            .route(
                "/missing.txt",
                get(|| async { (StatusCode::NOT_FOUND, "not found") }),
            )
            .route("/raw", get(proxy))
            .with_state(proxy_hits.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server");
        });

        let base_url = format!("http://{addr}");
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            fallback_proxy: format!("{base_url}/raw"),
        };

        Self {
            dir,
            config,
            base_url,
            proxy_hits,
        }
    }

    /// Open application state over this context's data directory.
    pub fn state(&self) -> AppState {
        AppState::open(&self.config).expect("open state")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn proxy_hits(&self) -> usize {
        self.proxy_hits.load(Ordering::SeqCst)
    }
}

/// Fallback proxy: serves the German list for any target except ones
/// containing "gone".
async fn proxy(
    State(hits): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, &'static str) {
    hits.fetch_add(1, Ordering::SeqCst);
    match params.get("url") {
        Some(target) if !target.contains("gone") => (StatusCode::OK, fixtures::GERMAN),
        _ => (StatusCode::BAD_GATEWAY, "upstream unavailable"),
    }
}
