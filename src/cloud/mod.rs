//! Provider image API plumbing: wire schema and blocking HTTP client.
//!
//! The gate only ever reads from this API; nothing in the crate creates,
//! mutates, or deletes provider resources.

pub mod client;
pub mod images;

pub use client::Client;
pub use images::{Image, ImageType};
