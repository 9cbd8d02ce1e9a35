//! Pre-validation stage: snapshot name collision gate.
//!
//! Side-effects:
//! - Sends at most one error message to the `UiSink` (collision or listing
//!   failure) and one informational message on a forced bypass.
//! - Emits an `images.list` fact for the listing call, a `prevalidate` fact
//!   with the collision verdict, and a `prevalidate.summary` fact carrying a
//!   stable `error_id`/`exit_code` on failure.
//!
//! The decision itself is pure over the listing result; the low-level
//! predicate lives in `crate::prevalidate::checks`.

use serde_json::json;

use crate::adapters::UiSink;
use crate::cloud::images::ImageType;
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{now_iso, FactsEmitter, StageLogger};
use crate::prevalidate::checks::find_name_collision;
use crate::types::ids::build_id;
use crate::types::{PrevalidateReport, StepAction};

pub(crate) fn run<E: FactsEmitter, U: UiSink>(api: &super::Snapforge<E, U>) -> PrevalidateReport {
    let mut warnings: Vec<String> = Vec::new();
    let mut stops: Vec<String> = Vec::new();

    let bid = build_id(&api.policy);
    let ctx = AuditCtx::new(
        &api.facts as &dyn FactsEmitter,
        bid.to_string(),
        now_iso(),
        AuditMode::default(),
    );
    let slog = StageLogger::new(&ctx);
    let name = api.policy.snapshot.name.as_str();

    // Forced bypass: no listing call at all, the build proceeds on the
    // operator's explicit say-so.
    if api.policy.snapshot.force {
        api.ui
            .say(&format!("force enabled, skipping snapshot name check for '{name}'"));
        warnings.push("snapshot name collision check skipped (force)".to_string());
        slog.prevalidate()
            .snapshot(name)
            .field("force", json!(true))
            .emit_warn();
        slog.summary()
            .snapshot(name)
            .field("force", json!(true))
            .emit_success();
        return PrevalidateReport {
            action: StepAction::Continue,
            warnings,
            stops,
        };
    }

    if name.is_empty() {
        stops.push("snapshot name must not be empty".to_string());
    } else if api.cancel.is_cancelled() {
        stops.push("build cancelled before image listing".to_string());
    } else {
        match &api.provider {
            None => stops.push("snapshot collision check requires an image client".to_string()),
            Some(provider) => match provider.list_images(&api.cancel) {
                Ok(images) => {
                    let snapshots = images
                        .iter()
                        .filter(|i| i.kind == ImageType::Snapshot)
                        .count();
                    slog.images_list()
                        .snapshot(name)
                        .merge(json!({
                            "images_total": images.len(),
                            "snapshots": snapshots,
                        }))
                        .emit_success();
                    let collision = find_name_collision(&images, name);
                    let mut verdict = slog.prevalidate()
                        .snapshot(name)
                        .field("collision", json!(collision.is_some()));
                    if let Some(existing) = collision {
                        verdict = verdict.field("matched_id", json!(existing.id));
                        let msg = format!(
                            "snapshot name '{name}' collides with existing snapshot (id {})",
                            existing.id
                        );
                        api.ui.error(&msg);
                        stops.push(msg);
                        verdict.emit_failure();
                    } else {
                        verdict.emit_success();
                    }
                }
                Err(e) => {
                    let msg = format!("listing images failed: {e}");
                    api.ui.error(&msg);
                    slog.images_list()
                        .snapshot(name)
                        .field("error", json!(e.to_string()))
                        .emit_failure();
                    stops.push(msg);
                }
            },
        }
    }

    let mut summary = slog.summary()
        .snapshot(name)
        .field("force", json!(false));
    if stops.is_empty() {
        summary.emit_success();
    } else {
        let ids = crate::api::errors::infer_summary_error_ids(&stops);
        let first = ids[0];
        summary = summary.merge(json!({
            "error_id": first,
            "exit_code": crate::api::errors::exit_code_for_id_str(first),
            "error_ids": ids,
            "stops": stops.len(),
        }));
        summary.emit_failure();
    }

    PrevalidateReport {
        action: if stops.is_empty() {
            StepAction::Continue
        } else {
            StepAction::Halt
        },
        warnings,
        stops,
    }
}
