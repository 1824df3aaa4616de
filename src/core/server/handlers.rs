use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::AppState;
use crate::core::config::FailurePolicy;
use crate::core::feed::mapper::{assemble_feed, SITE_BASE_URL};
use crate::core::feed::render::{render, RenderError};
use crate::core::feed::types::{Feed, FeedConfig, FeedFormat};
use crate::core::upstream::fetcher::{fetch_comic, UpstreamError};

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl FeedError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Fetches the comic's episodes and assembles a fresh feed. Nothing is cached.
///
/// Item links always point at the public site, whichever API host was queried.
pub async fn build_feed(state: &AppState, comic: &FeedConfig) -> Result<Feed, UpstreamError> {
    let episodes = fetch_comic(&state.client, &state.upstream_base_url, &comic.title_id).await?;
    Ok(assemble_feed(comic, SITE_BASE_URL, &episodes))
}

/// Serves one comic in one format.
#[derive(Debug, Clone)]
pub struct FeedHandler {
    comic: Arc<FeedConfig>,
    format: FeedFormat,
}

impl FeedHandler {
    pub fn new(comic: Arc<FeedConfig>, format: FeedFormat) -> Self {
        Self { comic, format }
    }

    pub async fn serve(self, state: AppState) -> Response {
        match self.build_and_render(&state).await {
            Ok(body) => feed_response(self.format, body),
            Err(error) => {
                tracing::error!(
                    comic = %self.comic.title_id,
                    format = ?self.format,
                    error = %error,
                    "failed to produce feed"
                );
                self.failure_response(state.failure_policy, &error)
            }
        }
    }

    async fn build_and_render(&self, state: &AppState) -> Result<Vec<u8>, FeedError> {
        let feed = build_feed(state, &self.comic).await?;
        Ok(render(&feed, self.format)?)
    }

    fn failure_response(&self, policy: FailurePolicy, error: &FeedError) -> Response {
        match policy {
            FailurePolicy::Strict => (error.status_code(), error.to_string()).into_response(),
            FailurePolicy::Silent => {
                let body = render(&Feed::default(), self.format).unwrap_or_default();
                feed_response(self.format, body)
            }
        }
    }
}

fn feed_response(format: FeedFormat, body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, format.content_type())],
        body,
    )
        .into_response()
}

pub async fn health(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.services.health_report())
}
