use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Rss,
    Atom,
}

impl FeedFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Rss => "rss",
            Self::Atom => "atom",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Rss => "application/rss+xml; charset=utf-8",
            Self::Atom => "application/atom+xml; charset=utf-8",
        }
    }
}

/// Static description of one served comic, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub title_id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub created: DateTime<FixedOffset>,
}

impl FeedConfig {
    pub fn route(&self, format: FeedFormat) -> String {
        format!("/{}.{}", self.title_id, format.extension())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub created: Option<DateTime<FixedOffset>>,
    pub id: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedAuthor {
    pub name: String,
    pub email: String,
}

/// A feed assembled for one request. `Default` is the empty feed served when
/// upstream fails under the silent failure policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub author: FeedAuthor,
    pub created: Option<DateTime<FixedOffset>>,
    pub items: Vec<FeedItem>,
}
