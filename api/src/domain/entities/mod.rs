//! Domain entities
//!
//! Pure domain models for the inputs and output of feed assembly.

pub mod billboard;
pub mod feed;
pub mod podcast;
pub mod post;

pub use billboard::{Billboard, BillboardSlot, Billboards};
pub use feed::{FeedItem, FeedResult, TimeFrame};
pub use podcast::{PodcastBlock, PodcastEpisode, PodcastInfo};
pub use post::{Post, PostAuthor, PostId};
