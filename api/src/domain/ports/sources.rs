//! Feed data source port traits
//!
//! Posts and billboards are fetched per assembly; the podcast block is read
//! from state loaded once at startup, so its port is synchronous.

use async_trait::async_trait;

use crate::domain::entities::{Billboard, BillboardSlot, PodcastBlock, Post, TimeFrame};
use crate::error::FetchError;

/// Port trait for the ordered post list
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the posts for a view, in display order
    async fn fetch_posts(&self, time_frame: &TimeFrame) -> Result<Vec<Post>, FetchError>;
}

/// Port trait for billboard slots
#[async_trait]
pub trait BillboardSource: Send + Sync {
    /// Fetch the billboard for a slot. `Ok(None)` when the slot has nothing to show.
    async fn fetch_billboard(&self, slot: BillboardSlot) -> Result<Option<Billboard>, FetchError>;
}

/// Port trait for the followed-podcasts block
pub trait PodcastSource: Send + Sync {
    fn podcast_block(&self) -> Option<PodcastBlock>;
}
