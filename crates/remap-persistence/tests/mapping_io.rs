//! Integration tests for mapping export and import.

use std::fs;

use remap_core::{MergeStrategy, Session};
use remap_model::{Rule, RuleList};
use remap_persistence::{PersistenceError, export_rules, import_rules, read_rules};
use tempfile::tempdir;

fn sample_rules() -> RuleList {
    vec![
        Rule::new("Red", "Blue"),
        Rule::from_old("Green"),
        Rule::default(),
        Rule::new("", "Yellow"),
    ]
    .into()
}

#[test]
fn export_then_import_into_blank_list_reproduces_rules() {
    let dir = tempdir().unwrap();
    let written = export_rules(&sample_rules(), &dir.path().join("mapping")).unwrap();
    assert_eq!(written.extension().and_then(|e| e.to_str()), Some("json"));

    let mut blank = RuleList::new();
    blank.initialize(6);
    let mut session = Session::from_rules(blank);
    let outcome = import_rules(&mut session, &written).unwrap();

    assert_eq!(outcome.strategy, MergeStrategy::Rewind);
    let rules = session.rules();
    assert_eq!(rules.len(), 6);
    for (idx, expected) in sample_rules().iter().enumerate() {
        assert_eq!(&rules[idx], expected);
    }
    assert!(rules[4].is_empty() && rules[5].is_empty());
}

#[test]
fn import_fills_trailing_run_after_existing_rules() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mapping.json");
    fs::write(
        &path,
        r#"[{"old_material": "Wood", "new_material": "Oak"}, {"old_material": "Steel", "new_material": "Iron"}]"#,
    )
    .unwrap();

    let mut session = Session::from_rules(vec![Rule::new("Red", "Blue"), Rule::default()].into());
    let outcome = import_rules(&mut session, &path).unwrap();

    assert_eq!(outcome.strategy, MergeStrategy::TrailingRun { start: 1 });
    assert_eq!(
        session.rules().as_slice(),
        &[
            Rule::new("Red", "Blue"),
            Rule::new("Wood", "Oak"),
            Rule::new("Steel", "Iron"),
        ]
    );
}

#[test]
fn malformed_import_leaves_rules_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"old_material": "Wood"}, {"old_material": "#).unwrap();

    let mut session = Session::from_rules(sample_rules());
    let err = import_rules(&mut session, &path).unwrap_err();

    assert!(matches!(err, PersistenceError::Malformed { .. }));
    assert!(err.suggestion().is_some());
    assert_eq!(session.rules(), &sample_rules());
}

#[test]
fn unreadable_import_is_reported() {
    let dir = tempdir().unwrap();
    let mut session = Session::from_rules(sample_rules());
    let err = import_rules(&mut session, &dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, PersistenceError::Io { .. }));
    assert!(err.user_message().contains("read"));
    assert_eq!(session.rules(), &sample_rules());
}

#[test]
fn export_keeps_empty_and_partial_rules() {
    let dir = tempdir().unwrap();
    let written = export_rules(&sample_rules(), &dir.path().join("all.json")).unwrap();
    let read_back = read_rules(&written).unwrap();
    assert_eq!(read_back.len(), 4);
    assert_eq!(read_back[3], Rule::new("", "Yellow"));
}

#[test]
fn export_into_unwritable_location_fails() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let err = export_rules(&sample_rules(), &blocker.join("mapping.json")).unwrap_err();

    assert!(matches!(err, PersistenceError::Io { .. }));
    assert!(err.suggestion().is_some());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[test]
fn export_to_empty_path_is_rejected() {
    let err = export_rules(&sample_rules(), std::path::Path::new("")).unwrap_err();
    assert!(matches!(
        err,
        PersistenceError::Io {
            operation: "write",
            ..
        }
    ));
    assert!(!std::path::Path::new(".tmp").exists());
}
