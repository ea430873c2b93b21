//! Scenario: Annotate a checkout
//!
//! Journey: A developer replays `cvs annotate` output for a working tree
//! and consumes one NDJSON record per file.

use crate::common::*;

#[test]
fn scenario_annotate_emits_one_record_per_file() {
    let env = TestEnv::new();
    let transcript = env.write_transcript(ANNOTATE_TWO_FILES);

    let result = env.run(&["annotate", transcript.to_str().unwrap()]);
    assert!(result.success, "annotate failed:\n{}", result.combined_output());

    let events = result.events();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0]["event"], "file_info");
    assert_eq!(
        events[0]["path"],
        env.work_path("README").display().to_string()
    );
    assert_eq!(events[0]["lines"], 2);
    assert_eq!(events[0]["annotations"][1]["author"], "bob");

    assert_eq!(
        events[1]["path"],
        env.work_path("src/main.c").display().to_string()
    );
    assert_eq!(events[1]["lines"], 4);
    assert_eq!(events[1]["annotations"][2]["content"], "    return 0;");
    assert_eq!(events[1]["annotations"][2]["revision"], "1.4");
}

#[test]
fn scenario_annotate_leaves_no_spool_files() {
    let env = TestEnv::new();
    let transcript = env.write_transcript(ANNOTATE_TWO_FILES);

    let result = env.run(&["annotate", transcript.to_str().unwrap()]);

    assert!(result.success);
    assert_eq!(env.spool_file_count(), 0);
}

#[test]
fn scenario_truncated_annotate_reports_partial_record_and_fails() {
    let env = TestEnv::new();
    let transcript = env.write_transcript(
        "E Annotations for README\nM 1.1          (alice    12-Mar-24): first\n",
    );

    let result = env.run(&["annotate", transcript.to_str().unwrap()]);

    assert!(!result.success);
    let events = result.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["lines"], 1);
    assert!(result.stderr.contains("annotate transcript"));
}

#[test]
fn scenario_unknown_response_fails() {
    let env = TestEnv::new();
    let transcript = env.write_transcript("Valid-requests Root\nok\n");

    let result = env.run(&["annotate", transcript.to_str().unwrap()]);

    assert!(!result.success);
    assert!(result.stderr.contains("Valid-requests"));
}
