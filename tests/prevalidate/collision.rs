//! Collision scenarios: a snapshot already carries the desired name.

use serde_json::Value;
use snapforge::policy::Policy;
use snapforge::types::StepAction;
use snapforge::Snapforge;

use crate::helpers::{RecordingUi, StaticInventory, TestEmitter};

#[test]
fn same_name_halts_with_one_ui_error() {
    let ui = RecordingUi::default();
    let api = Snapforge::new(
        TestEmitter::default(),
        ui.clone(),
        Policy::for_snapshot("snapshot-old"),
    )
    .with_provider(Box::new(StaticInventory::of_snapshots(&["snapshot-old"])));

    let report = api.pre_validate().unwrap();
    assert_eq!(report.action, StepAction::Halt);
    assert!(!report.ok());

    let errors = ui.errors.lock().unwrap();
    assert_eq!(errors.len(), 1, "exactly one operator error expected");
    assert!(errors[0].contains("snapshot-old"));
    assert!(errors[0].contains("1000"), "message names the occupying image id");
}

#[test]
fn collision_fact_carries_matched_id() {
    let facts = TestEmitter::default();
    let api = Snapforge::new(
        facts.clone(),
        RecordingUi::default(),
        Policy::for_snapshot("snapshot-old"),
    )
    .with_provider(Box::new(StaticInventory::of_snapshots(&[
        "snapshot-older",
        "snapshot-old",
    ])));

    let _ = api.pre_validate().unwrap();

    let events = facts.events.lock().unwrap();
    assert!(events.iter().any(|(_, event, decision, fields)| {
        event == "prevalidate"
            && decision == "failure"
            && fields.get("collision") == Some(&Value::Bool(true))
            && fields.get("matched_id") == Some(&Value::from(1001))
    }), "expected a failing prevalidate fact naming the matched image");
}

#[test]
fn only_first_match_is_reported() {
    // Two snapshots sharing a description is provider-side sloppiness; the
    // gate still emits a single message.
    let ui = RecordingUi::default();
    let api = Snapforge::new(
        TestEmitter::default(),
        ui.clone(),
        Policy::for_snapshot("dup"),
    )
    .with_provider(Box::new(StaticInventory::of_snapshots(&["dup", "dup"])));

    let report = api.pre_validate().unwrap();
    assert_eq!(report.action, StepAction::Halt);
    assert_eq!(report.stops.len(), 1);
    assert_eq!(ui.errors.lock().unwrap().len(), 1);
}
