//! In-process stand-ins for the comic API, shared by the async tests.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const YABAI_FIXTURE: &str = include_str!("../../fixtures/comic-yabai.json");

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    body: &'static str,
    request_count: Arc<AtomicUsize>,
}

pub struct MockUpstream {
    pub base_url: String,
    pub request_count: Arc<AtomicUsize>,
    join_handle: tokio::task::JoinHandle<()>,
}

impl MockUpstream {
    pub fn requests(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.join_handle.abort();
    }
}

async fn comic_handler(
    State(state): State<UpstreamState>,
    Path(file): Path<String>,
) -> Response {
    state.request_count.fetch_add(1, Ordering::SeqCst);
    if !file.ends_with(".json") {
        return StatusCode::NOT_FOUND.into_response();
    }
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
        .into_response()
}

/// Serves `body` with `status` under `/api/comics/{file}`.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> MockUpstream {
    let request_count = Arc::new(AtomicUsize::new(0));
    let state = UpstreamState {
        status,
        body,
        request_count: request_count.clone(),
    };
    let app = Router::new()
        .route("/api/comics/{file}", get(comic_handler))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let address = listener.local_addr().expect("local addr should exist");
    let join_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });
    MockUpstream {
        base_url: format!("http://{address}"),
        request_count,
        join_handle,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let address = listener.local_addr().expect("local addr should exist");
    drop(listener);
    format!("http://{address}")
}
