//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Posts, billboards, podcast blocks and the assembled feed
//! - `ports`: Trait definitions for the feed's data sources and consumers

pub mod entities;
pub mod ports;
