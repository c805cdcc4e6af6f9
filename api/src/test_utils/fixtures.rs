//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! The feed fixtures mirror a realistic home feed: ten posts, one pinned
//! post that is not first in source order, and two image posts.
//!
//! Every post is emitted exactly once, pinned and image posts included, so
//! with three billboards and the podcast block the default feed holds
//! 10 + 3 + 1 = 14 items. Dropping the second billboard gives 13, dropping
//! the first and second gives 12. The `latest` view hides the pinned post,
//! which also gives 13.

use chrono::{TimeZone, Utc};
use serde_json::Map;

use crate::domain::entities::{
    Billboard, BillboardSlot, Billboards, PodcastBlock, PodcastEpisode, PodcastInfo, Post,
    PostAuthor, PostId,
};

/// Create an ordinary post with default values
pub fn test_post(id: i64) -> Post {
    Post {
        id: PostId(id),
        title: format!("Post {}", id),
        path: Some(format!("/author/post-{}", id)),
        pinned: false,
        main_image: None,
        user: Some(PostAuthor {
            name: "firstname lastname".to_string(),
            username: "username".to_string(),
            profile_image_90: Some("mock_url_link".to_string()),
        }),
        tag_list: vec!["javascript".to_string()],
        published_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).single(),
        extra: Map::new(),
    }
}

/// Create a pinned post without a main image
pub fn pinned_post(id: i64) -> Post {
    Post {
        pinned: true,
        ..test_post(id)
    }
}

/// Create a post with a main image
pub fn image_post(id: i64) -> Post {
    Post {
        main_image: Some(format!("https://cdn.test/images/{}.png", id)),
        ..test_post(id)
    }
}

/// Ten posts: post 3 pinned, posts 5 and 8 carry main images
pub fn feed_posts() -> Vec<Post> {
    (1..=10)
        .map(|id| match id {
            3 => pinned_post(id),
            5 | 8 => image_post(id),
            _ => test_post(id),
        })
        .collect()
}

/// Ten posts where post 2 is both pinned and the first image post.
/// Post 6 also has an image.
pub fn feed_posts_where_pinned_and_image_posts_same() -> Vec<Post> {
    (1..=10)
        .map(|id| match id {
            2 => Post {
                pinned: true,
                ..image_post(id)
            },
            6 => image_post(id),
            _ => test_post(id),
        })
        .collect()
}

pub fn first_billboard() -> Billboard {
    Billboard::new(
        BillboardSlot::FeedFirst,
        "<div class=\"crayons-story billboard\" data-display-unit>First billboard</div>",
    )
}

pub fn second_billboard() -> Billboard {
    Billboard::new(
        BillboardSlot::FeedSecond,
        "<div class=\"crayons-story billboard\" data-display-unit>Second billboard</div>",
    )
}

pub fn third_billboard() -> Billboard {
    Billboard::new(
        BillboardSlot::FeedThird,
        "<div class=\"crayons-story billboard\" data-display-unit>Third billboard</div>",
    )
}

/// All three billboard slots filled
pub fn all_billboards() -> Billboards {
    Billboards::none()
        .with(first_billboard())
        .with(second_billboard())
        .with(third_billboard())
}

/// Episodes of the podcasts the test reader follows
pub fn podcast_episodes() -> Vec<PodcastEpisode> {
    vec![
        PodcastEpisode {
            id: 1,
            title: "Monday Morning Standup".to_string(),
            path: Some("/devdiscuss/monday-morning-standup".to_string()),
            image_url: Some("https://cdn.test/podcasts/devdiscuss.png".to_string()),
            podcast: Some(PodcastInfo {
                title: "DevDiscuss".to_string(),
                slug: "devdiscuss".to_string(),
                image_url: None,
            }),
            extra: Map::new(),
        },
        PodcastEpisode {
            id: 2,
            title: "Open Source Weekly".to_string(),
            path: Some("/devnews/open-source-weekly".to_string()),
            image_url: None,
            podcast: Some(PodcastInfo {
                title: "DevNews".to_string(),
                slug: "devnews".to_string(),
                image_url: None,
            }),
            extra: Map::new(),
        },
    ]
}

pub fn podcast_block() -> Option<PodcastBlock> {
    PodcastBlock::new(podcast_episodes())
}
