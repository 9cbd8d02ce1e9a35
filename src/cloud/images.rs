//! Wire schema for the provider's `GET /images` endpoint.

use serde::Deserialize;

use crate::types::errors::{Error, ErrorKind, Result};

/// Origin of an image as reported by the provider.
///
/// Only `Snapshot` entries participate in the name-collision check; system
/// and backup images may legitimately share a description with a snapshot.
/// Types introduced by the provider after this crate was built decode as
/// `Unknown` instead of failing the whole listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    System,
    Snapshot,
    Backup,
    #[serde(other)]
    Unknown,
}

/// A single image record. Read-only from this crate's perspective.
#[derive(Clone, Debug, Deserialize)]
pub struct Image {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ImageType,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next_page: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// One page of the listing. `meta` is absent on providers (and test servers)
/// that do not paginate; that is treated as a single-page inventory.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ImageListResponse {
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl ImageListResponse {
    pub(crate) fn next_page(&self) -> Option<u32> {
        self.meta.as_ref()?.pagination.as_ref()?.next_page
    }
}

/// Decode one listing page. Any shape mismatch is a `Decode` error; the gate
/// surfaces it as a fatal stop rather than guessing at the inventory.
pub fn parse_image_list(body: &str) -> Result<ImageListResponse> {
    serde_json::from_str(body)
        .map_err(|e| Error::new(ErrorKind::Decode, format!("malformed image listing: {e}")))
}
