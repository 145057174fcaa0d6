//! Append specs
//!
//! Records written by `append` come back unchanged and in order.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn appended_records_load_in_append_order() {
    let ledger = Ledger::empty();
    let r1 = ledger.job("r1", "BSEQ");
    let r2 = ledger.job("r2", "CLOPS");
    let r3 = ledger.job("r3", "Quantum Volume");
    ledger.append(&r1).append(&r2).append(&r3);

    let loaded = ledger.load();
    assert_eq!(loaded.jobs, vec![r1, r2, r3]);
    assert!(loaded.warnings.is_empty());
}

#[test]
fn every_field_survives_a_reload() {
    let ledger = Ledger::empty();
    let job = ledger
        .job("full", "Quantum Volume")
        .with_params(
            json!({"num_qubits": 5, "trials": 20, "confidence": "high", "nested": {"a": [1, 2]}})
                .as_object()
                .unwrap()
                .clone(),
        )
        .with_data(json!({"provider_job_ids": ["j1", "j2"]}).as_object().unwrap().clone());
    ledger.append(&job);

    let fresh = LedgerStore::new(
        LedgerConfig::new(&ledger.path),
        ledger.store.codec().clone(),
    );
    assert_eq!(fresh.load_all().unwrap(), vec![job]);
}

#[test]
fn duplicate_ids_are_not_deduplicated() {
    let ledger = Ledger::empty();
    let first = ledger.job("dup", "BSEQ");
    let second = ledger.job("dup", "CLOPS");
    ledger.append(&first).append(&second);

    let loaded = ledger.load();
    assert_eq!(loaded.ids(), vec!["dup", "dup"]);
    assert_eq!(ledger.store.find("dup").unwrap(), Some(first));
}

#[test]
fn append_is_visible_to_an_immediate_load() {
    let ledger = Ledger::empty();
    for i in 0..5 {
        ledger.append(&ledger.job(&format!("job-{i}"), "BSEQ"));
        assert_eq!(ledger.load().jobs.len(), i + 1);
    }
}
