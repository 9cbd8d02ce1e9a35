// Audit helpers that emit structured facts across gate stages.
//
// Side-effects:
// - Emits JSON facts via `FactsEmitter` for `images.list`, `prevalidate`, and
//   the `prevalidate.summary` stage.
// - Ensures a minimal envelope is present on every fact: `schema_version`,
//   `ts`, `build_id`, `snapshot`, `decision`.
// - Applies redaction when the audit mode requests it.
use crate::logging::{redact_event, FactsEmitter};
use serde_json::{json, Value};

pub(crate) const SCHEMA_VERSION: i64 = 1;

#[derive(Clone, Debug, Default)]
pub(crate) struct AuditMode {
    pub redact: bool,
}

pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub build_id: String,
    pub ts: String,
    pub mode: AuditMode,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(
        facts: &'a dyn FactsEmitter,
        build_id: String,
        ts: String,
        mode: AuditMode,
    ) -> Self {
        Self {
            facts,
            build_id,
            ts,
            mode,
        }
    }
}

/// Stage for typed audit emission.
#[derive(Clone, Copy, Debug)]
pub enum Stage {
    ImagesList,
    Prevalidate,
    PrevalidateSummary,
}

impl Stage {
    fn as_event(&self) -> &'static str {
        match self {
            Stage::ImagesList => "images.list",
            Stage::Prevalidate => "prevalidate",
            Stage::PrevalidateSummary => "prevalidate.summary",
        }
    }
}

/// Decision severity for audit events.
#[derive(Clone, Copy, Debug)]
pub enum Decision {
    Success,
    Failure,
    Warn,
}

impl Decision {
    fn as_str(&self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
            Decision::Warn => "warn",
        }
    }
}

/// Builder facade over audit emission with centralized envelope+redaction.
pub struct StageLogger<'a> {
    ctx: &'a AuditCtx<'a>,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(ctx: &'a AuditCtx<'a>) -> Self {
        Self { ctx }
    }

    pub fn images_list(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::ImagesList)
    }

    pub fn prevalidate(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::Prevalidate)
    }

    pub fn summary(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::PrevalidateSummary)
    }
}

pub struct EventBuilder<'a> {
    ctx: &'a AuditCtx<'a>,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(ctx: &'a AuditCtx<'a>, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { ctx, stage, fields }
    }

    pub fn snapshot(mut self, name: impl Into<String>) -> Self {
        self.fields.insert("snapshot".into(), json!(name.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn merge(mut self, extra: Value) -> Self {
        if let Some(obj) = extra.as_object() {
            for (k, v) in obj.iter() {
                self.fields.insert(k.clone(), v.clone());
            }
        }
        self
    }

    pub fn emit(self, decision: Decision) {
        let mut fields = Value::Object(self.fields);
        if let Some(obj) = fields.as_object_mut() {
            obj.entry("decision").or_insert(json!(decision.as_str()));
            obj.entry("schema_version").or_insert(json!(SCHEMA_VERSION));
            obj.entry("ts").or_insert(json!(self.ctx.ts));
            obj.entry("build_id").or_insert(json!(self.ctx.build_id));
            obj.entry("snapshot").or_insert(json!(""));
        }
        let out = if self.ctx.mode.redact {
            redact_event(fields)
        } else {
            fields
        };
        self.ctx
            .facts
            .emit("snapforge", self.stage.as_event(), decision.as_str(), out);
    }

    pub fn emit_success(self) {
        self.emit(Decision::Success)
    }

    pub fn emit_failure(self) {
        self.emit(Decision::Failure)
    }

    pub fn emit_warn(self) {
        self.emit(Decision::Warn)
    }
}
