use atom_syndication::{
    EntryBuilder, FeedBuilder, FixedDateTime, LinkBuilder, PersonBuilder, Text,
};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};

use super::types::{Feed, FeedFormat, FeedItem};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("rss serialization failed: {0}")]
    Rss(#[from] rss::Error),
    #[error("atom serialization failed: {0}")]
    Atom(#[from] atom_syndication::Error),
}

pub fn render(feed: &Feed, format: FeedFormat) -> Result<Vec<u8>, RenderError> {
    match format {
        FeedFormat::Rss => render_rss(feed),
        FeedFormat::Atom => render_atom(feed),
    }
}

/// RSS 2.0. Items without a creation time carry no `pubDate`.
pub fn render_rss(feed: &Feed) -> Result<Vec<u8>, RenderError> {
    let items: Vec<rss::Item> = feed.items.iter().map(item_to_rss).collect();

    let channel = ChannelBuilder::default()
        .title(feed.title.clone())
        .link(feed.link.clone())
        .description(feed.description.clone())
        .pub_date(feed.created.map(|created| created.to_rfc2822()))
        .items(items)
        .build();

    Ok(channel.write_to(Vec::new())?)
}

fn item_to_rss(item: &FeedItem) -> rss::Item {
    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(item.link.clone()))
        .description(Some(item.description.clone()))
        .guid(Some(
            GuidBuilder::default()
                .permalink(false)
                .value(item.id.clone())
                .build(),
        ))
        .pub_date(item.created.map(|created| created.to_rfc2822()))
        .build()
}

/// Atom 1.0. Atom requires `updated` on every entry, so entries without a
/// creation time borrow the feed's and omit `published`.
pub fn render_atom(feed: &Feed) -> Result<Vec<u8>, RenderError> {
    let feed_updated: FixedDateTime = feed.created.unwrap_or_default();
    let entries = feed
        .items
        .iter()
        .map(|item| item_to_atom(item, feed_updated))
        .collect::<Vec<_>>();

    let author = PersonBuilder::default()
        .name(feed.author.name.clone())
        .email(Some(feed.author.email.clone()).filter(|email| !email.is_empty()))
        .build();

    let alternate_link = LinkBuilder::default()
        .href(feed.link.clone())
        .rel("alternate".to_string())
        .build();

    let atom = FeedBuilder::default()
        .title(Text::plain(feed.title.clone()))
        .id(feed.link.clone())
        .updated(feed_updated)
        .authors(vec![author])
        .links(vec![alternate_link])
        .subtitle(Some(Text::plain(feed.description.clone())))
        .entries(entries)
        .build();

    Ok(atom.write_to(Vec::new())?)
}

fn item_to_atom(item: &FeedItem, fallback_updated: FixedDateTime) -> atom_syndication::Entry {
    let link = LinkBuilder::default()
        .href(item.link.clone())
        .rel("alternate".to_string())
        .build();

    EntryBuilder::default()
        .title(Text::plain(item.title.clone()))
        .id(item.id.clone())
        .updated(item.created.unwrap_or(fallback_updated))
        .published(item.created)
        .links(vec![link])
        .summary(Some(Text::plain(item.description.clone())))
        .build()
}
