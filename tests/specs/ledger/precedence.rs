//! Classification precedence specs
//!
//! When a line has several problems, the earliest check in the pipeline
//! decides the reported category: syntax, structure, job type, timestamp.

use crate::prelude::*;
use jl_storage::DecodeError;

fn decode(line: &str) -> Result<JobRecord, DecodeError> {
    Ledger::empty().store.codec().decode(line)
}

#[test]
fn unknown_job_type_beats_bad_timestamp() {
    let err = decode(&raw_record(json!({
        "job_type": "BOGUS",
        "dispatch_time": "not-a-date"
    })))
    .unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownJobType {
            value: "BOGUS".to_string()
        }
    );
}

#[test]
fn missing_field_beats_unknown_job_type() {
    let err = decode(&raw_record(json!({
        "job_type": "BOGUS",
        "dispatch_time": "not-a-date",
        "provider_name": null
    })))
    .unwrap_err();
    assert_eq!(err.category(), "incorrect data structure");
}

#[test]
fn syntax_beats_everything() {
    let mut line = raw_record(json!({"job_type": "BOGUS", "device_name": null}));
    line.pop();
    let err = decode(&line).unwrap_err();
    assert_eq!(err.category(), "malformed JSON");
}

#[test]
fn mixed_problem_line_yields_one_warning() {
    let ledger = Ledger::empty();
    ledger.raw(&raw_record(json!({
        "job_type": "BOGUS",
        "dispatch_time": "not-a-date"
    })));

    let loaded = ledger.load();
    assert!(loaded.jobs.is_empty());
    assert_eq!(loaded.warnings.len(), 1);
    assert!(loaded.warnings[0].contains("Unknown job type: BOGUS"));
    assert!(!loaded.warnings[0].contains("Bad datetime format"));
}
