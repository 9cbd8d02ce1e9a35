//! Cooperative cancellation: a cancelled build never decides on a stale
//! inventory.

use serde_json::Value;
use snapforge::adapters::CancelToken;
use snapforge::policy::Policy;
use snapforge::types::StepAction;
use snapforge::Snapforge;

use crate::helpers::{RecordingUi, StaticInventory, TestEmitter};

#[test]
fn pre_cancelled_build_halts_without_listing() {
    let facts = TestEmitter::default();
    let ui = RecordingUi::default();
    let inventory = StaticInventory::of_snapshots(&["snapshot-old"]);
    let calls = inventory.calls.clone();
    let cancel = CancelToken::new();
    cancel.cancel();

    let api = Snapforge::new(facts.clone(), ui.clone(), Policy::for_snapshot("snapshot-new"))
        .with_provider(Box::new(inventory))
        .with_cancel_token(cancel);

    let report = api.pre_validate().unwrap();
    assert_eq!(report.action, StepAction::Halt);
    assert_eq!(*calls.lock().unwrap(), 0, "no listing after cancellation");
    assert!(report.stops.iter().any(|s| s.contains("cancelled")));
    assert!(ui.errors.lock().unwrap().is_empty(), "cancellation is not a collision");

    let events = facts.events.lock().unwrap();
    assert!(events.iter().any(|(_, event, _, fields)| {
        event == "prevalidate.summary"
            && fields.get("error_id") == Some(&Value::from("E_CANCELLED"))
    }));
}

#[test]
fn token_cancelled_after_the_gate_changes_nothing() {
    let cancel = CancelToken::new();
    let api = Snapforge::new(
        TestEmitter::default(),
        RecordingUi::default(),
        Policy::for_snapshot("snapshot-new"),
    )
    .with_provider(Box::new(StaticInventory::of_snapshots(&["snapshot-old"])))
    .with_cancel_token(cancel.clone());

    let report = api.pre_validate().unwrap();
    assert_eq!(report.action, StepAction::Continue);
    cancel.cancel();
    // The decision already made stands; cancellation only affects in-flight work.
    assert!(report.ok());
}
