//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod cache;
pub mod clock;
pub mod delay;
pub mod news_feed;
pub mod ports;
