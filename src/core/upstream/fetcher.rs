use std::time::Duration;

use super::types::{ComicResponse, Episode};

pub const DEFAULT_BASE_URL: &str = "https://mangacross.jp";

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream unreachable: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned status code: {0}")]
    HttpStatus(u16),
    #[error("failed to decode upstream body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn build_client(timeout: Duration) -> Result<reqwest::Client, UpstreamError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;
    Ok(client)
}

/// `title_id` is interpolated as-is and must come from trusted configuration.
pub fn comic_api_url(base_url: &str, title_id: &str) -> String {
    format!("{base_url}/api/comics/{title_id}.json")
}

/// Fetches the episode list for one title, in the order upstream returns it.
///
/// `sort_volume` is decoded but not used to reorder; feeds mirror upstream order.
pub async fn fetch_comic(
    client: &reqwest::Client,
    base_url: &str,
    title_id: &str,
) -> Result<Vec<Episode>, UpstreamError> {
    let url = comic_api_url(base_url, title_id);
    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    let decoded: ComicResponse = serde_json::from_slice(&body)?;
    tracing::debug!(
        url = %url,
        episodes = decoded.comic.episodes.len(),
        "fetched comic episodes"
    );
    Ok(decoded.comic.episodes)
}
