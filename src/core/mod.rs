pub mod config;
pub mod feed;
pub mod server;
pub mod upstream;

#[cfg(test)]
pub(crate) mod testing;

use std::collections::BTreeMap;

use feed::FeedService;
use server::ServerService;
use upstream::UpstreamService;

#[derive(Debug, Clone, Default)]
pub struct AppServices {
    upstream: UpstreamService,
    feed: FeedService,
    server: ServerService,
}

impl AppServices {
    pub fn health_report(&self) -> BTreeMap<String, String> {
        let mut report = BTreeMap::new();
        report.insert(
            self.upstream.name().to_string(),
            self.upstream.status().to_string(),
        );
        report.insert(self.feed.name().to_string(), self.feed.status().to_string());
        report.insert(
            self.server.name().to_string(),
            self.server.status().to_string(),
        );
        report
    }
}
