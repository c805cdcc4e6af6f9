//! Followed-podcast episodes from page state
//!
//! The episode list is loaded once, from the same JSON the page embeds in
//! its `data-episodes` attribute, and served unchanged for every assembly.

use std::path::Path;

use crate::domain::entities::{PodcastBlock, PodcastEpisode};
use crate::domain::ports::PodcastSource;
use crate::error::ConfigError;

/// Podcast source backed by pre-loaded page state
#[derive(Debug, Clone, Default)]
pub struct PagePodcastSource {
    block: Option<PodcastBlock>,
}

impl PagePodcastSource {
    /// No page state; the podcast block is always absent
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_block(block: Option<PodcastBlock>) -> Self {
        Self { block }
    }

    /// Parse the embedded episode array. Blank input means no page state.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::empty());
        }
        let episodes: Vec<PodcastEpisode> = serde_json::from_str(json)?;
        Ok(Self::from_block(PodcastBlock::new(episodes)))
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::PageStateIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn episode_count(&self) -> usize {
        self.block
            .as_ref()
            .map(|block| block.episodes().len())
            .unwrap_or(0)
    }
}

impl PodcastSource for PagePodcastSource {
    fn podcast_block(&self) -> Option<PodcastBlock> {
        self.block.clone()
    }
}
