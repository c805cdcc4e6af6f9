//! Feed domain entities
//!
//! The assembled feed: a heterogeneous ordered list plus pointers to the
//! posts holding the two featured roles.

use serde::{Deserialize, Serialize};

use super::{Billboard, PodcastBlock, Post};

/// Feed view filter. The empty selector is the default ("relevant") view;
/// any other value, e.g. `latest`, is a time-framed view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeFrame(String);

impl TimeFrame {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[cfg(test)]
    pub fn latest() -> Self {
        Self::new("latest")
    }

    /// Pinning is only honored in the default view
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Option<String>> for TimeFrame {
    fn from(value: Option<String>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_default() {
            write!(f, "default")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One entry in the assembled feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedItem {
    Post(Post),
    Billboard(Billboard),
    Podcasts(PodcastBlock),
}

#[cfg(test)]
impl FeedItem {
    pub fn as_post(&self) -> Option<&Post> {
        match self {
            FeedItem::Post(post) => Some(post),
            _ => None,
        }
    }

    pub fn as_billboard(&self) -> Option<&Billboard> {
        match self {
            FeedItem::Billboard(billboard) => Some(billboard),
            _ => None,
        }
    }

    pub fn is_podcasts(&self) -> bool {
        matches!(self, FeedItem::Podcasts(_))
    }
}

/// The complete result of one feed assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResult {
    pub feed_items: Vec<FeedItem>,
    pub pinned_item: Option<Post>,
    pub image_item: Option<Post>,
}
