#![allow(clippy::unwrap_used, clippy::expect_used)]

use svcs_core::errors::{ExError, ExErrorKind, SvcsError};
use svcs_core::logging_facility::test_capture::init_test_capture;
use svcs_core::{log_op_end, log_op_error, log_op_start};
use svcs_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(
        end_events[0].fields.get("duration_ms"),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ExError::new(ExErrorKind::Io).with_message("disk full");
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].level, Level::ERROR);
    assert_eq!(
        error_events[0].fields.get("err_code"),
        Some(&"ERR_IO".to_string())
    );
}

#[test]
fn test_log_op_error_user_error_is_warning() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = SvcsError::CommitNotFound {
        fingerprint: "doesnotexist".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 1, fingerprint = "doesnotexist");

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::WARN);
    assert_eq!(
        events[0].fields.get("err_code"),
        Some(&"ERR_COMMIT_NOT_FOUND".to_string())
    );
    assert_eq!(
        events[0].fields.get("fingerprint"),
        Some(&"doesnotexist".to_string())
    );
}

#[test]
fn test_boundary_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_5";

    log_op_start!(op_name, path = "a.txt");
    log_op_end!(op_name, duration_ms = 3);

    let starts = capture.count_events(|e| e.is(op_name, EVENT_START));
    let ends = capture.count_events(|e| e.is(op_name, EVENT_END));
    assert_eq!(starts, 1);
    assert_eq!(ends, 1);

    let start = &capture.events_for_op(op_name)[0];
    assert_eq!(start.fields.get("path"), Some(&"a.txt".to_string()));
    assert!(start
        .component
        .as_deref()
        .unwrap()
        .starts_with("logging_facility_tests"));
}
