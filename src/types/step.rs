/// Terminal outcome of a pipeline step.
///
/// The pre-validation gate has exactly two end states: the build either
/// proceeds to provisioning or stops before any resource is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAction {
    Continue,
    Halt,
}
