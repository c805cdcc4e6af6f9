//! Page state adapter
//!
//! Data embedded in the page at startup rather than fetched per request.

pub mod podcast_source;

pub use podcast_source::PagePodcastSource;
