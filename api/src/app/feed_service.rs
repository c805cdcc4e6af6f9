//! Feed service
//!
//! Fetches the post list and the three billboard slots concurrently, reads
//! the podcast block from page state, and hands everything to the
//! assembler. A billboard that fails to load is simply left out.

use std::sync::Arc;

use crate::app::assemble;
use crate::domain::entities::{Billboard, BillboardSlot, Billboards, FeedResult, TimeFrame};
use crate::domain::ports::{BillboardSource, FeedSubscriber, PodcastSource, PostSource};
use crate::error::AppError;

/// Service for generating assembled feeds
pub struct FeedService<PS, BS, CS>
where
    PS: PostSource + ?Sized,
    BS: BillboardSource + ?Sized,
    CS: PodcastSource + ?Sized,
{
    posts: Arc<PS>,
    billboards: Arc<BS>,
    podcasts: Arc<CS>,
}

impl<PS, BS, CS> FeedService<PS, BS, CS>
where
    PS: PostSource + ?Sized,
    BS: BillboardSource + ?Sized,
    CS: PodcastSource + ?Sized,
{
    pub fn new(posts: Arc<PS>, billboards: Arc<BS>, podcasts: Arc<CS>) -> Self {
        Self {
            posts,
            billboards,
            podcasts,
        }
    }

    /// Generate the feed for a view
    pub async fn generate_feed(&self, time_frame: &TimeFrame) -> Result<FeedResult, AppError> {
        let (posts, first, second, third) = tokio::join!(
            self.posts.fetch_posts(time_frame),
            self.fetch_billboard(BillboardSlot::FeedFirst),
            self.fetch_billboard(BillboardSlot::FeedSecond),
            self.fetch_billboard(BillboardSlot::FeedThird),
        );
        let posts = posts?;
        let billboards = Billboards {
            first,
            second,
            third,
        };
        let podcasts = self.podcasts.podcast_block();

        tracing::debug!(
            time_frame = %time_frame,
            posts = posts.len(),
            billboards = billboards.present_count(),
            podcasts = podcasts.is_some(),
            "Assembling feed"
        );

        let result = assemble(posts, billboards, podcasts, time_frame);

        tracing::debug!(
            items = result.feed_items.len(),
            pinned = ?result.pinned_item.as_ref().map(|p| p.id),
            image = ?result.image_item.as_ref().map(|p| p.id),
            "Feed assembled"
        );

        Ok(result)
    }

    /// Generate the feed and deliver it to a subscriber.
    ///
    /// The subscriber is called once, with the complete result, and only if
    /// assembly succeeded.
    #[allow(dead_code)]
    pub async fn refresh<S>(&self, time_frame: &TimeFrame, subscriber: &S) -> Result<(), AppError>
    where
        S: FeedSubscriber + ?Sized,
    {
        let result = self.generate_feed(time_frame).await?;
        subscriber.on_feed(&result);
        Ok(())
    }

    /// Fetch one slot. Errors and empty slots both resolve to `None`.
    async fn fetch_billboard(&self, slot: BillboardSlot) -> Option<Billboard> {
        match self.billboards.fetch_billboard(slot).await {
            // Placement follows the slot that was requested
            Ok(Some(billboard)) => Some(Billboard { slot, ..billboard }),
            Ok(None) => {
                tracing::debug!("Billboard slot {} is empty", slot);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to fetch billboard {}: {}", slot, e);
                None
            }
        }
    }
}
