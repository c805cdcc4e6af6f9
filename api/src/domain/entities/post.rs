//! Post domain entity
//!
//! Posts arrive from the upstream story feed already ordered by relevance
//! or recency. The feed only inspects `pinned` and `main_image`; every other
//! field is display payload carried through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author summary attached to a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub profile_image_90: Option<String>,
}

/// A post in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub pinned: bool,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub user: Option<PostAuthor>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tag_list: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Any remaining upstream fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// Whether the post carries a primary image
    pub fn has_main_image(&self) -> bool {
        self.main_image.is_some()
    }
}
