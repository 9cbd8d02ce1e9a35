use serde_json::Value;

/// Structured fact sink. One fact is emitted per gate stage; the surrounding
/// pipeline decides where facts go (JSONL file, collector, nowhere).
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Default sink that drops facts.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}
