//! Load specs
//!
//! Loading never fails because of file content. Bad lines are skipped with
//! exactly one warning each; blank lines are skipped silently.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn missing_file_loads_empty() {
    let ledger = Ledger::empty();
    let loaded = ledger.load();
    assert!(loaded.jobs.is_empty());
    assert!(loaded.warnings.is_empty());
    assert!(!ledger.path.exists());
}

#[test]
fn empty_file_loads_empty() {
    let ledger = Ledger::empty();
    std::fs::write(&ledger.path, "").unwrap();
    let loaded = ledger.load();
    assert!(loaded.jobs.is_empty());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn blank_line_between_records_is_silent() {
    let ledger = Ledger::empty();
    let a = ledger.job("a", "BSEQ");
    let b = ledger.job("b", "BSEQ");
    ledger.encoded(&a).raw("    ").encoded(&b);

    let loaded = ledger.load();
    assert_eq!(loaded.jobs, vec![a, b]);
    assert_eq!(loaded.warnings.len(), 0);
}

#[test]
fn mixed_valid_and_invalid_lines() {
    let ledger = Ledger::empty();
    let a = ledger.job("A", "BSEQ");
    let b = ledger.job("B", "CLOPS");

    ledger
        .encoded(&a)
        .raw("")
        .raw(r#"{"invalid": "json""#)
        .raw(&raw_record(json!({"device_name": null})))
        .raw(&raw_record(json!({"job_type": "BOGUS"})))
        .raw(&raw_record(json!({"dispatch_time": "not-a-date"})))
        .encoded(&b);

    let loaded = ledger.load();
    assert_eq!(loaded.ids(), vec!["A", "B"]);
    assert_eq!(loaded.jobs, vec![a, b]);
    assert_eq!(loaded.warnings.len(), 4);

    assert!(loaded.warning_containing("Malformed JSON at pos").is_some());
    assert!(loaded
        .warning_containing("Incorrect data structure: missing required fields: device_name")
        .is_some());
    assert!(loaded.warning_containing("Unknown job type: BOGUS").is_some());
    assert!(loaded
        .warning_containing("Bad datetime format: not-a-date")
        .is_some());

    let path = ledger.path.display().to_string();
    assert!(loaded.warnings.iter().all(|w| w.contains(&path)));
}

#[test]
fn warnings_are_categorized() {
    let ledger = Ledger::empty();
    ledger
        .raw("not json at all")
        .raw(&raw_record(json!({"params": [1, 2]})))
        .raw(&raw_record(json!({"job_type": "Quantum volume"})))
        .raw(&raw_record(json!({"dispatch_time": "01/04/2026 08:00"})));

    let loaded = ledger.load();
    assert!(loaded.jobs.is_empty());
    let categories: Vec<_> = [
        "malformed JSON",
        "incorrect data structure",
        "unknown job type",
        "bad datetime format",
    ]
    .iter()
    .map(|c| loaded.warning_containing(c).is_some())
    .collect();
    assert_eq!(categories, vec![true; 4]);
}

#[test]
fn many_bad_lines_do_not_hide_good_ones() {
    let ledger = Ledger::empty();
    let mut expected = Vec::new();
    for i in 0..50 {
        let job = ledger.job(&format!("good-{i}"), "BSEQ");
        ledger.encoded(&job).raw(&format!("{{\"broken\": {i}"));
        expected.push(job);
    }

    let loaded = ledger.load();
    assert_eq!(loaded.jobs, expected);
    assert_eq!(loaded.warnings.len(), 50);
}
