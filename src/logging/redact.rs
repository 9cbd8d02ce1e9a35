use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const TS_ZERO: &str = "1970-01-01T00:00:00Z";

pub fn now_iso() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| TS_ZERO.to_string())
}

/// Apply redactions to a fact event for comparison and safe logging.
/// Zeroes timestamps, removes volatile timings, and masks provider
/// credentials wherever they appear.
pub fn redact_event(mut v: Value) -> Value {
    if let Some(obj) = v.as_object_mut() {
        obj.insert("ts".into(), Value::String(TS_ZERO.to_string()));
        obj.remove("duration_ms");
        if obj.contains_key("token") {
            obj.insert("token".into(), Value::String("***".into()));
        }
        if let Some(provider) = obj.get_mut("provider") {
            if let Some(pobj) = provider.as_object_mut() {
                if pobj.contains_key("token") {
                    pobj.insert("token".into(), Value::String("***".into()));
                }
            }
        }
    }
    v
}
