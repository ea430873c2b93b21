//! Scenario: Record a commit in the working tree
//!
//! Journey: After `cvs commit`, the client replays the server's check-in
//! confirmations so `CVS/Entries` matches the repository.

use std::fs;

use crate::common::*;

#[test]
fn scenario_commit_updates_entries_files() {
    let env = TestEnv::new();
    env.write_file("README", "readme\n");
    let transcript = env.write_transcript(COMMIT_THREE_FILES);

    let result = env.run(&["checkin", transcript.to_str().unwrap()]);
    assert!(result.success, "checkin failed:\n{}", result.combined_output());

    let root_entries = env.read_entries(".");
    assert!(root_entries.starts_with("/README/1.3/"));
    assert!(!root_entries.contains("dummy timestamp"));

    let src_entries = env.read_entries("src");
    assert!(src_entries.contains("/new.c/0/dummy timestamp//"));
    assert!(src_entries.contains("/old.c/-1.2/dummy timestamp//"));

    let events = result.events();
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e["event"] == "entry_updated"));
}

#[test]
fn scenario_commit_respects_ignore_config() {
    let env = TestEnv::new();
    env.write_file("README", "readme\n");
    let config = env.spool_dir.path().join("cvs-decode.toml");
    fs::write(&config, "ignore = [\"src/\"]\n").unwrap();
    let transcript = env.write_transcript(COMMIT_THREE_FILES);

    let result = env.run(&[
        "--config",
        config.to_str().unwrap(),
        "checkin",
        transcript.to_str().unwrap(),
    ]);
    assert!(result.success, "checkin failed:\n{}", result.combined_output());

    assert!(!env.work_path("src/CVS").exists());
    assert_eq!(result.events().len(), 1);
}

#[test]
fn scenario_rejected_commit_fails_without_writes() {
    let env = TestEnv::new();
    let transcript = env.write_transcript(COMMIT_REJECTED);

    let result = env.run(&["checkin", transcript.to_str().unwrap()]);

    assert!(!result.success);
    assert!(result.stderr.contains("server reported an error"));
    assert!(!env.work_path("CVS").exists());
}
