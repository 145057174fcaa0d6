// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark catalogue known to the CLI

use jl_core::JobTypeRegistry;

const BENCHMARKS: &[&str] = &[
    "BSEQ",
    "CLOPS",
    "EPLG",
    "LR-QAOA",
    "Mirror Circuits",
    "QML Kernel",
    "Quantum Enhanced Sampling",
    "Quantum Volume",
    "WIT",
    "Wormhole",
];

/// Registry of every benchmark the CLI can record
pub fn builtin() -> JobTypeRegistry {
    BENCHMARKS.iter().copied().collect()
}
