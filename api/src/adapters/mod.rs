//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod page_state;
pub mod upstream;

pub use page_state::PagePodcastSource;
pub use upstream::UpstreamClient;
