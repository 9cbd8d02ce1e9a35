use super::step::StepAction;

/// Outcome of the pre-validation gate plus the reasons behind it.
///
/// `stops` is non-empty exactly when `action` is `Halt`. Warnings never block
/// the build; a forced bypass is recorded here rather than silently dropped.
#[derive(Clone, Debug)]
pub struct PrevalidateReport {
    pub action: StepAction,
    pub warnings: Vec<String>,
    pub stops: Vec<String>,
}

impl PrevalidateReport {
    #[must_use]
    pub fn ok(&self) -> bool {
        self.action == StepAction::Continue
    }
}
