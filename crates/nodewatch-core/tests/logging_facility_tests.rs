#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::node;
use nodewatch_core::errors::{ExError, ExErrorKind, NodeError};
use nodewatch_core::logging_facility::test_capture::init_test_capture;
use nodewatch_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use nodewatch_core::watch::{DiffLoop, MemorySink};
use nodewatch_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, source = "kubectl");

    let events = capture.events();
    let start = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START))
        .expect("Should have captured a start event");
    assert_eq!(start.fields.get("source"), Some(&"kubectl".to_string()));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ExError::new(ExErrorKind::Fetch).with_message("exit status 1");
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(error_event.fields.get("err.code"), Some(&"ERR_FETCH".to_string()));
    assert_eq!(error_event.level, tracing::Level::ERROR);
}

#[test]
fn test_log_op_error_converts_node_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    log_op_error!(op_name, NodeError::MissingName { index: 0 }, duration_ms = 1);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .expect("Should have error event");
    assert_eq!(
        error_event.fields.get("err.code"),
        Some(&"ERR_INVALID_SNAPSHOT".to_string())
    );
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[tokio::test]
async fn test_cycle_with_changes_logs_end_event() {
    let capture = init_test_capture();
    let source = common::ScriptedSource::snapshots(vec![vec![node(
        "logged-node-unique-5",
        "A",
    )]]);
    let mut diff_loop = DiffLoop::new(source, MemorySink::new());

    diff_loop.run_cycle().await.unwrap();

    let found = capture.count_events(|e| {
        e.op.as_deref() == Some("cycle")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get("emitted") == Some(&"1".to_string())
            && e.fields.get("ledger_len") == Some(&"1".to_string())
    });
    assert!(found >= 1, "cycle end event with emitted=1 should be logged");
}
