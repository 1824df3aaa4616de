use super::types::{Feed, FeedAuthor, FeedConfig, FeedItem};
use crate::core::upstream::types::Episode;

/// Base of published episode links. Independent of the API host, which may be a mirror.
pub const SITE_BASE_URL: &str = "https://mangacross.jp";

/// Links are `site_base` and `page_url` joined verbatim, without normalizing slashes.
pub fn episode_to_item(site_base: &str, episode: &Episode) -> FeedItem {
    FeedItem {
        title: episode.title.clone(),
        link: format!("{site_base}{}", episode.page_url),
        created: episode.publish_start,
        id: episode.id.to_string(),
        description: episode.title.clone(),
    }
}

pub fn assemble_feed(config: &FeedConfig, site_base: &str, episodes: &[Episode]) -> Feed {
    let items = episodes
        .iter()
        .map(|episode| episode_to_item(site_base, episode))
        .collect();

    Feed {
        title: config.title.clone(),
        link: config.link.clone(),
        description: config.description.clone(),
        author: FeedAuthor::default(),
        created: Some(config.created),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::default_comics;
    use crate::core::testing::YABAI_FIXTURE;
    use crate::core::upstream::types::ComicResponse;

    fn fixture_episodes() -> Vec<Episode> {
        serde_json::from_str::<ComicResponse>(YABAI_FIXTURE)
            .expect("fixture must decode")
            .comic
            .episodes
    }

    fn make_episode(id: i64, title: &str, page_url: &str) -> Episode {
        Episode {
            id,
            title: title.to_string(),
            page_url: page_url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn maps_fields_from_episode() {
        let episodes = fixture_episodes();
        let item = episode_to_item(SITE_BASE_URL, &episodes[0]);

        assert_eq!(item.title, "僕は殺したい");
        assert_eq!(item.description, item.title);
        assert_eq!(item.link, "https://mangacross.jp/comics/yabai/1");
        assert_eq!(item.id, "1203");
        assert_eq!(item.created, episodes[0].publish_start);
        assert!(item.created.is_some());
    }

    #[test]
    fn identifier_round_trips_to_episode_id() {
        for id in [0, 7, 1203, -4, i64::MAX] {
            let item = episode_to_item(SITE_BASE_URL, &make_episode(id, "t", "/p"));
            assert_eq!(item.id.parse::<i64>().expect("id must parse"), id);
        }
    }

    #[test]
    fn missing_publish_start_stays_absent() {
        let episodes = fixture_episodes();
        assert!(episodes[2].member_publish_start.is_some());

        let item = episode_to_item(SITE_BASE_URL, &episodes[2]);

        assert!(item.created.is_none());
    }

    #[test]
    fn link_is_concatenated_verbatim() {
        let episode = make_episode(1, "t", "//comics/yabai/../1?x=1");

        let item = episode_to_item(SITE_BASE_URL, &episode);

        assert_eq!(item.link, "https://mangacross.jp//comics/yabai/../1?x=1");
    }

    #[test]
    fn assembled_feed_keeps_every_episode_in_order() {
        let config = default_comics().remove(0);
        let episodes: Vec<Episode> = (0..25)
            .rev()
            .map(|index| make_episode(index, &format!("Episode {index}"), &format!("/e/{index}")))
            .collect();

        let feed = assemble_feed(&config, SITE_BASE_URL, &episodes);

        assert_eq!(feed.items.len(), episodes.len());
        for (item, episode) in feed.items.iter().zip(&episodes) {
            assert_eq!(item.id, episode.id.to_string());
            assert_eq!(item.title, episode.title);
        }
        assert_eq!(feed.title, config.title);
        assert_eq!(feed.link, config.link);
        assert_eq!(feed.description, config.description);
        assert_eq!(feed.created, Some(config.created));
        assert_eq!(feed.author, FeedAuthor::default());
    }

    #[test]
    fn empty_upstream_gives_empty_item_list() {
        let config = default_comics().remove(0);

        let feed = assemble_feed(&config, SITE_BASE_URL, &[]);

        assert!(feed.items.is_empty());
        assert_eq!(feed.title, config.title);
    }
}
