use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("snapshot name collision: {0}")]
    NameCollision(String),
    #[error("provider transport error: {0}")]
    Transport(String),
    #[error("provider response decode error: {0}")]
    Decode(String),
    #[error("cancelled: {0}")]
    Cancelled(String),
    #[error("policy violation: {0}")]
    PolicyViolation(String),
}

impl From<crate::types::errors::Error> for ApiError {
    fn from(e: crate::types::errors::Error) -> Self {
        use crate::types::errors::ErrorKind::{Cancelled, Decode, Policy, Transport};
        match e.kind {
            Transport => ApiError::Transport(e.msg),
            Decode => ApiError::Decode(e.msg),
            Cancelled => ApiError::Cancelled(e.msg),
            Policy => ApiError::PolicyViolation(e.msg),
        }
    }
}

/// Best-effort mapping from gate stop messages to a chain of stable summary
/// error IDs. Always includes a top-level `E_POLICY` classification last.
#[must_use]
pub fn infer_summary_error_ids(stops: &[String]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    let joined = stops.join("; ").to_lowercase();
    if joined.contains("collid") {
        out.push(id_str(ErrorId::E_COLLISION));
    }
    if joined.contains("cancelled") {
        out.push(id_str(ErrorId::E_CANCELLED));
    }
    if joined.contains("decode") || joined.contains("malformed") {
        out.push(id_str(ErrorId::E_DECODE));
    }
    if joined.contains("transport") || joined.contains("unexpected status") {
        out.push(id_str(ErrorId::E_TRANSPORT));
    }
    out.push(id_str(ErrorId::E_POLICY));
    // Deduplicate while preserving order
    let mut seen = std::collections::HashSet::new();
    out.into_iter().filter(|id| seen.insert(*id)).collect()
}

// Stable identifiers emitted in summary facts. SCREAMING_SNAKE_CASE matches
// the emitted ID strings.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug)]
pub enum ErrorId {
    E_COLLISION,
    E_POLICY,
    E_TRANSPORT,
    E_DECODE,
    E_CANCELLED,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_COLLISION => "E_COLLISION",
        ErrorId::E_POLICY => "E_POLICY",
        ErrorId::E_TRANSPORT => "E_TRANSPORT",
        ErrorId::E_DECODE => "E_DECODE",
        ErrorId::E_CANCELLED => "E_CANCELLED",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_COLLISION => 10,
        ErrorId::E_POLICY => 20,
        ErrorId::E_TRANSPORT => 30,
        ErrorId::E_DECODE => 40,
        ErrorId::E_CANCELLED => 50,
        ErrorId::E_GENERIC => 1,
    }
}

#[must_use]
pub fn exit_code_for_id_str(s: &str) -> Option<i32> {
    match s {
        "E_COLLISION" => Some(10),
        "E_POLICY" => Some(20),
        "E_TRANSPORT" => Some(30),
        "E_DECODE" => Some(40),
        "E_CANCELLED" => Some(50),
        _ => None,
    }
}
