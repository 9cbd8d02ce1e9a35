//! Deterministic UUIDv5 identifiers for build invocations.
//!
//! The UUID namespace is derived from a stable tag (`NS_TAG`) so that
//! `build_id` is reproducible across runs for the same gate configuration.
use uuid::Uuid;

use crate::constants::NS_TAG;
use crate::policy::Policy;

/// Internal: return the UUID namespace used for deterministic IDs.
fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Compute a deterministic UUIDv5 for a gate invocation from its policy.
///
/// Two invocations with the same snapshot name and force flag share a
/// `build_id`, which keeps emitted facts comparable across runs.
#[must_use]
pub fn build_id(policy: &Policy) -> Uuid {
    let s = format!(
        "prevalidate:{}:{}",
        policy.snapshot.name, policy.snapshot.force
    );
    Uuid::new_v5(&namespace(), s.as_bytes())
}
