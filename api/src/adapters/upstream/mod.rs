//! Upstream adapter
//!
//! HTTP client for the story feed and billboard endpoints of the content
//! platform.

pub mod client;

pub use client::UpstreamClient;
