pub mod handlers;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::Router;

use super::config::{AppConfig, FailurePolicy};
use super::feed::types::{FeedConfig, FeedFormat};
use super::AppServices;
use handlers::FeedHandler;

#[derive(Debug, Clone, Default)]
pub struct ServerService;

impl ServerService {
    pub fn name(&self) -> &'static str {
        "server"
    }

    pub fn status(&self) -> &'static str {
        "ready"
    }
}

/// Read-only state shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub upstream_base_url: Arc<str>,
    pub failure_policy: FailurePolicy,
    pub services: AppServices,
}

impl AppState {
    pub fn new(client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            client,
            upstream_base_url: Arc::from(config.upstream_base_url.as_str()),
            failure_policy: config.failure_policy,
            services: AppServices::default(),
        }
    }
}

/// Registers `/{title_id}.atom` and `/{title_id}.rss` for every comic, plus `/health`.
pub fn build_router(state: AppState, comics: &[FeedConfig]) -> Router {
    let mut router = Router::new().route("/health", get(handlers::health));

    for comic in comics {
        let comic = Arc::new(comic.clone());
        for format in [FeedFormat::Atom, FeedFormat::Rss] {
            let path = comic.route(format);
            let handler = FeedHandler::new(comic.clone(), format);
            tracing::debug!(path = %path, "registering feed route");
            router = router.route(
                &path,
                get(move |State(state): State<AppState>| handler.serve(state)),
            );
        }
    }

    router.with_state(state)
}

pub fn route_paths(comics: &[FeedConfig]) -> Vec<String> {
    comics
        .iter()
        .flat_map(|comic| [comic.route(FeedFormat::Atom), comic.route(FeedFormat::Rss)])
        .collect()
}
