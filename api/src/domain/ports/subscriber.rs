//! Feed subscriber port trait

use crate::domain::entities::FeedResult;

/// Receives each completed assembly.
///
/// Every notification carries the complete result, never a delta.
pub trait FeedSubscriber: Send + Sync {
    fn on_feed(&self, result: &FeedResult);
}

impl<F> FeedSubscriber for F
where
    F: Fn(&FeedResult) + Send + Sync,
{
    fn on_feed(&self, result: &FeedResult) {
        self(result)
    }
}
