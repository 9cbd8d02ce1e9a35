use crate::adapters::cancel::CancelToken;
use crate::cloud::images::Image;
use crate::types::errors::Result;

/// Provider capability: enumerate the account's image inventory.
///
/// Implementations must return the complete inventory in one logical call;
/// the gate never retries and treats any failure as fatal.
pub trait ImageLister: Send + Sync {
    /// Fetch every image visible to the account.
    /// # Errors
    /// Returns an error when the provider is unreachable, replies non-2xx,
    /// the body fails to decode, or `cancel` fires mid-listing.
    fn list_images(&self, cancel: &CancelToken) -> Result<Vec<Image>>;
}
