use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// Envelope returned by `GET /api/comics/{title_id}.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ComicResponse {
    pub comic: Comic,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Comic {
    #[serde(default, deserialize_with = "null_as_default")]
    pub episodes: Vec<Episode>,
}

/// One installment as described by the upstream API.
///
/// Publish windows are `None` while an episode is unpublished or member-only.
/// Scalar fields sent as `null` decode to their zero value.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Episode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_volume: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub publish_start: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub publish_end: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub member_publish_start: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub member_publish_end: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_url: String,
    #[serde(default)]
    pub ogp_url: Option<String>,
    #[serde(default)]
    pub list_image_url: Option<String>,
    #[serde(default)]
    pub list_image_double_url: Option<String>,
    #[serde(default)]
    pub episode_next_date: Option<String>,
    #[serde(default)]
    pub next_date_customize_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_unlimited_comic: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
