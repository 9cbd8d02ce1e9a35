//! Shared crate-wide constants for Snapforge.
//!
//! Centralizes magic values and default labels used across modules.
//! Adjusting these here will propagate through the crate.

/// Default public endpoint of the provider image API.
/// Override per environment with [`ENV_API_ENDPOINT`] or by passing an
/// explicit endpoint to `Client::new`.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.hetzner.cloud/v1";

/// Environment variable consulted by `Client::from_env()` for the API endpoint.
pub const ENV_API_ENDPOINT: &str = "SNAPFORGE_API_ENDPOINT";

/// Environment variable consulted by `Client::from_env()` for the bearer token.
pub const ENV_API_TOKEN: &str = "SNAPFORGE_API_TOKEN";

/// Page size requested from the image listing endpoint. The provider caps
/// `per_page` at 50; larger values are silently clamped server-side.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Whole-request timeout for a single listing page, in milliseconds.
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;

/// User-Agent header sent with every provider request.
pub const USER_AGENT: &str = concat!("snapforge/", env!("CARGO_PKG_VERSION"));

/// UUIDv5 namespace tag for deterministic build IDs; see `types/ids.rs`.
pub const NS_TAG: &str = "https://snapforge/build";
