//! Dispatch through `apply_engine_command` and lifecycle logging

mod common;

use common::{alice, setup_repo, write_file};
use svcs_core::identity::StaticIdentity;
use svcs_core::logging_facility::test_capture::init_test_capture;
use svcs_core::model::TrackOutcome;
use svcs_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use svcs_engine::commands::commit::CommitOutcome;
use svcs_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};

fn apply(repo: &svcs_store::Repository, cmd: EngineCommand) -> EngineCommandResult {
    apply_engine_command(cmd, repo, &alice()).unwrap()
}

#[test]
fn test_full_cycle_via_engine_commands() {
    let (_dir, repo) = setup_repo();
    write_file(&repo, "a.txt", "hello");

    let EngineCommandResult::Track(TrackOutcome::Tracked(path)) = apply(
        &repo,
        EngineCommand::Track {
            path: "a.txt".to_string(),
        },
    ) else {
        panic!("Expected Track(Tracked)")
    };
    assert_eq!(path.as_str(), "a.txt");

    let EngineCommandResult::Commit(CommitOutcome::Committed(first)) = apply(
        &repo,
        EngineCommand::Commit {
            message: Some("first".to_string()),
        },
    ) else {
        panic!("Expected Commit(Committed)")
    };

    write_file(&repo, "a.txt", "world");
    let EngineCommandResult::Commit(CommitOutcome::Committed(second)) = apply(
        &repo,
        EngineCommand::Commit {
            message: Some("second".to_string()),
        },
    ) else {
        panic!("Expected Commit(Committed)")
    };

    // Log is most recent first
    let EngineCommandResult::Log(entries) = apply(&repo, EngineCommand::Log) else {
        panic!("Expected Log")
    };
    assert_eq!(entries, vec![second, first.clone()]);

    let EngineCommandResult::Checkout(result) = apply(
        &repo,
        EngineCommand::Checkout {
            fingerprint: Some(first.fingerprint.to_string()),
        },
    ) else {
        panic!("Expected Checkout")
    };
    assert_eq!(result.fingerprint, first.fingerprint);
    assert_eq!(common::read_file(&repo, "a.txt"), "hello");
}

#[test]
fn test_author_commands() {
    let (_dir, repo) = setup_repo();

    assert_eq!(
        apply(&repo, EngineCommand::ShowAuthor),
        EngineCommandResult::ShowAuthor(None)
    );
    assert_eq!(
        apply(
            &repo,
            EngineCommand::SetAuthor {
                name: "bob".to_string()
            }
        ),
        EngineCommandResult::SetAuthor("bob".to_string())
    );
    assert_eq!(
        apply(&repo, EngineCommand::ShowAuthor),
        EngineCommandResult::ShowAuthor(Some("bob".to_string()))
    );
}

#[test]
fn test_commit_uses_injected_identity() {
    let (_dir, repo) = setup_repo();
    write_file(&repo, "a.txt", "hello");
    // The repository's own config says bob; the injected source wins
    repo.config().set_username("bob").unwrap();
    apply(
        &repo,
        EngineCommand::Track {
            path: "a.txt".to_string(),
        },
    );

    let result = apply_engine_command(
        EngineCommand::Commit {
            message: Some("first".to_string()),
        },
        &repo,
        &StaticIdentity::new("carol"),
    )
    .unwrap();

    let EngineCommandResult::Commit(CommitOutcome::Committed(entry)) = result else {
        panic!("Expected Commit(Committed)")
    };
    assert_eq!(entry.author, "carol");
}

#[test]
fn test_commit_emits_boundary_events() {
    let capture = init_test_capture();
    let (_dir, repo) = setup_repo();
    write_file(&repo, "a.txt", "unique content for boundary test");
    apply(
        &repo,
        EngineCommand::Track {
            path: "a.txt".to_string(),
        },
    );

    let EngineCommandResult::Commit(CommitOutcome::Committed(entry)) = apply(
        &repo,
        EngineCommand::Commit {
            message: Some("first".to_string()),
        },
    ) else {
        panic!("Expected Commit(Committed)")
    };

    capture.assert_event_exists("commit", EVENT_START);
    let fingerprint = entry.fingerprint.to_string();
    let ends = capture.count_events(|e| {
        e.is("commit", EVENT_END)
            && e.fields.get("fingerprint") == Some(&fingerprint)
            && e.fields.get("outcome").map(String::as_str) == Some("committed")
    });
    assert_eq!(ends, 1);
}

#[test]
fn test_checkout_failure_emits_error_event() {
    let capture = init_test_capture();
    let (_dir, repo) = setup_repo();
    let bogus = "f".repeat(64);

    let err = apply_engine_command(
        EngineCommand::Checkout {
            fingerprint: Some(bogus.clone()),
        },
        &repo,
        &alice(),
    )
    .unwrap_err();

    assert!(err.is_user_error());
    let errors = capture.count_events(|e| {
        e.is("checkout", EVENT_END_ERROR)
            && e.fields.get("err_code").map(String::as_str) == Some("ERR_COMMIT_NOT_FOUND")
    });
    assert!(errors >= 1);
}
