//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod feed_assembler;
pub mod feed_service;

pub use feed_assembler::assemble;
pub use feed_service::FeedService;
