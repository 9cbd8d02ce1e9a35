//! Listing failures are fatal: the gate halts rather than guessing.

use serde_json::Value;
use snapforge::policy::Policy;
use snapforge::types::errors::ErrorKind;
use snapforge::types::StepAction;
use snapforge::Snapforge;

use crate::helpers::{FailingProvider, RecordingUi, TestEmitter};

#[test]
fn transport_failure_halts() {
    let ui = RecordingUi::default();
    let api = Snapforge::new(
        TestEmitter::default(),
        ui.clone(),
        Policy::for_snapshot("snapshot-new"),
    )
    .with_provider(Box::new(FailingProvider {
        kind: ErrorKind::Transport,
        msg: "GET /images page 1: unexpected status 400 Bad Request",
    }));

    let report = api.pre_validate().unwrap();
    assert_eq!(report.action, StepAction::Halt);
    assert!(report.stops.iter().any(|s| s.contains("listing images failed")));
    assert_eq!(ui.errors.lock().unwrap().len(), 1);
}

#[test]
fn transport_failure_summary_maps_to_e_transport() {
    let facts = TestEmitter::default();
    let api = Snapforge::new(
        facts.clone(),
        RecordingUi::default(),
        Policy::for_snapshot("snapshot-new"),
    )
    .with_provider(Box::new(FailingProvider {
        kind: ErrorKind::Transport,
        msg: "connection refused",
    }));

    let _ = api.pre_validate().unwrap();

    let events = facts.events.lock().unwrap();
    assert!(events.iter().any(|(_, event, decision, fields)| {
        event == "prevalidate.summary"
            && decision == "failure"
            && fields.get("error_id") == Some(&Value::from("E_TRANSPORT"))
            && fields.get("exit_code") == Some(&Value::from(30))
    }), "expected failing summary with E_TRANSPORT/30");
}

#[test]
fn decode_failure_halts_with_e_decode() {
    let facts = TestEmitter::default();
    let api = Snapforge::new(
        facts.clone(),
        RecordingUi::default(),
        Policy::for_snapshot("snapshot-new"),
    )
    .with_provider(Box::new(FailingProvider {
        kind: ErrorKind::Decode,
        msg: "malformed image listing: expected value at line 1",
    }));

    let report = api.pre_validate().unwrap();
    assert_eq!(report.action, StepAction::Halt);

    let events = facts.events.lock().unwrap();
    assert!(events.iter().any(|(_, event, _, fields)| {
        event == "prevalidate.summary" && fields.get("error_id") == Some(&Value::from("E_DECODE"))
    }));
}
