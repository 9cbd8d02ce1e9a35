use crate::cloud::images::{Image, ImageType};

/// Find a user-created snapshot whose description exactly equals `desired`.
///
/// System and backup images never collide: the provider may reuse their
/// descriptions freely, and only snapshots occupy the name the build wants to
/// claim. Comparison is exact and case-sensitive.
#[must_use]
pub fn find_name_collision<'a>(images: &'a [Image], desired: &str) -> Option<&'a Image> {
    images
        .iter()
        .find(|img| img.kind == ImageType::Snapshot && img.description == desired)
}
