use super::types::SnapshotPolicy;

/// Policy governs the pre-validation gate's inputs and bypass behavior.
///
/// Grouped fields provide clearer ownership and room for later pipeline
/// stages to hang their own knobs without churning call sites.
#[derive(Clone, Debug, Default)]
pub struct Policy {
    pub snapshot: SnapshotPolicy,
}

impl Policy {
    /// Construct a Policy targeting `name`, with the collision check enforced.
    ///
    /// # Example
    /// ```rust
    /// use snapforge::policy::Policy;
    ///
    /// let mut policy = Policy::for_snapshot("debian-12-base");
    /// // Rebuilds that intentionally overwrite the name opt out explicitly:
    /// policy.snapshot.force = false;
    /// ```
    #[must_use]
    pub fn for_snapshot(name: impl Into<String>) -> Self {
        Self {
            snapshot: SnapshotPolicy {
                name: name.into(),
                force: false,
            },
        }
    }
}
