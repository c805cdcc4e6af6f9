//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod sources;
pub mod subscriber;

pub use sources::{BillboardSource, PodcastSource, PostSource};
pub use subscriber::FeedSubscriber;
