//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{Billboard, BillboardSlot, FeedResult, Post, TimeFrame};
use crate::domain::ports::{BillboardSource, FeedSubscriber, PostSource};
use crate::error::FetchError;

// ============================================================================
// In-Memory Post Source
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostSource {
    posts: Arc<RwLock<Vec<Post>>>,
    requested: Arc<Mutex<Vec<TimeFrame>>>,
    fail: bool,
}

impl InMemoryPostSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every fetch fails with an upstream error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with posts for testing
    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        *self.posts.write().unwrap() = posts;
        self
    }

    /// Time frames requested so far, in call order
    pub fn requested_time_frames(&self) -> Vec<TimeFrame> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostSource for InMemoryPostSource {
    async fn fetch_posts(&self, time_frame: &TimeFrame) -> Result<Vec<Post>, FetchError> {
        self.requested.lock().unwrap().push(time_frame.clone());
        if self.fail {
            return Err(FetchError::Api {
                status: 503,
                message: "stories unavailable".to_string(),
            });
        }
        Ok(self.posts.read().unwrap().clone())
    }
}

// ============================================================================
// In-Memory Billboard Source
// ============================================================================

#[derive(Default)]
pub struct InMemoryBillboardSource {
    billboards: Arc<RwLock<HashMap<BillboardSlot, Billboard>>>,
    failing: Arc<RwLock<HashSet<BillboardSlot>>>,
}

impl InMemoryBillboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a billboard under the slot it is tagged with
    pub fn with_billboard(self, billboard: Billboard) -> Self {
        let slot = billboard.slot;
        self.with_billboard_for(slot, billboard)
    }

    /// Serve a billboard under an explicit slot, whatever its tag says
    pub fn with_billboard_for(self, slot: BillboardSlot, billboard: Billboard) -> Self {
        self.billboards.write().unwrap().insert(slot, billboard);
        self
    }

    /// Make fetches for a slot fail
    pub fn failing(self, slot: BillboardSlot) -> Self {
        self.failing.write().unwrap().insert(slot);
        self
    }
}

#[async_trait]
impl BillboardSource for InMemoryBillboardSource {
    async fn fetch_billboard(&self, slot: BillboardSlot) -> Result<Option<Billboard>, FetchError> {
        if self.failing.read().unwrap().contains(&slot) {
            return Err(FetchError::Api {
                status: 500,
                message: format!("billboard {} unavailable", slot),
            });
        }
        Ok(self.billboards.read().unwrap().get(&slot).cloned())
    }
}

// ============================================================================
// Recording Subscriber
// ============================================================================

#[derive(Default)]
pub struct RecordingSubscriber {
    results: Mutex<Vec<FeedResult>>,
}

impl RecordingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Vec<FeedResult> {
        self.results.lock().unwrap().clone()
    }
}

impl FeedSubscriber for RecordingSubscriber {
    fn on_feed(&self, result: &FeedResult) {
        self.results.lock().unwrap().push(result.clone());
    }
}
