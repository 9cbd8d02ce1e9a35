// Facade for API module; delegates to submodules under src/api/

use crate::adapters::{CancelToken, ImageLister, UiSink};
use crate::logging::FactsEmitter;
use crate::policy::Policy;
use crate::types::PrevalidateReport;

pub mod errors;
mod prevalidate;

/// Entry point for the pre-flight gate of an image build.
///
/// Owns the capabilities the gate needs: a facts emitter, the operator UI
/// sink, the validation policy, and (optionally) a provider client plus a
/// cancellation token. Nothing here mutates provider state.
///
/// # Example
/// ```rust
/// use snapforge::adapters::LogUi;
/// use snapforge::cloud::Client;
/// use snapforge::logging::JsonlSink;
/// use snapforge::policy::Policy;
/// use snapforge::Snapforge;
///
/// let client = Client::from_env().expect("http client");
/// let api = Snapforge::new(JsonlSink::default(), LogUi, Policy::for_snapshot("debian-12-base"))
///     .with_provider(Box::new(client));
/// # let _ = api; // avoid unused warning
/// ```
pub struct Snapforge<E: FactsEmitter, U: UiSink> {
    facts: E,
    ui: U,
    policy: Policy,
    provider: Option<Box<dyn ImageLister>>, // required for the check; its absence is a halt, not a panic
    cancel: CancelToken,
}

impl<E: FactsEmitter, U: UiSink> Snapforge<E, U> {
    pub fn new(facts: E, ui: U, policy: Policy) -> Self {
        Self {
            facts,
            ui,
            policy,
            provider: None,
            cancel: CancelToken::default(),
        }
    }

    #[must_use]
    pub fn with_provider(mut self, provider: Box<dyn ImageLister>) -> Self {
        self.provider = Some(provider);
        self
    }

    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Run the snapshot name collision gate.
    ///
    /// Always returns a report; transport, decode, and cancellation failures
    /// are recorded as stops (the returned action is `Halt` for every failure
    /// class, distinguished by message and summary `error_id` only).
    ///
    /// # Errors
    /// Reserved for future stages; the gate itself reports failures through
    /// the returned [`PrevalidateReport`].
    pub fn pre_validate(&self) -> Result<PrevalidateReport, errors::ApiError> {
        Ok(prevalidate::run(self))
    }
}
