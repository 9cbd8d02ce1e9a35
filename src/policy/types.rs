/// Snapshot naming knobs consulted by the pre-validation gate.
///
/// `name` is the description the captured image will carry; it must be
/// non-empty. `force` bypasses the collision check entirely; the build then
/// proceeds even when the name is already taken.
#[derive(Clone, Debug, Default)]
pub struct SnapshotPolicy {
    pub name: String,
    pub force: bool,
}
