/// Operator-facing message sink for a build.
///
/// The gate emits at most one `error` per invocation (the halt path) and uses
/// `say` for informational notices such as a forced bypass.
pub trait UiSink: Send + Sync {
    fn say(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Forwards build messages to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogUi;

impl UiSink for LogUi {
    fn say(&self, msg: &str) {
        log::info!("{msg}");
    }

    fn error(&self, msg: &str) {
        log::error!("{msg}");
    }
}

/// Discards all messages; useful in tests and silent batch builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullUi;

impl UiSink for NullUi {
    fn say(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}
