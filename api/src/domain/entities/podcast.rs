//! Podcast domain entities
//!
//! Episodes of the podcasts a reader follows. They are shown as one
//! aggregated block, never interleaved episode by episode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The podcast an episode belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastInfo {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A single podcast episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastEpisode {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub podcast: Option<PodcastInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A non-empty, pre-aggregated block of episodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastBlock {
    episodes: Vec<PodcastEpisode>,
}

impl PodcastBlock {
    /// Returns `None` for an empty episode list; an empty block is never shown
    pub fn new(episodes: Vec<PodcastEpisode>) -> Option<Self> {
        if episodes.is_empty() {
            None
        } else {
            Some(Self { episodes })
        }
    }

    pub fn episodes(&self) -> &[PodcastEpisode] {
        &self.episodes
    }
}
