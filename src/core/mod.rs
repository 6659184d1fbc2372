//! Core report types produced by a scan.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

/// Component names extracted from one file.
///
/// `names` is non-empty, sorted, and duplicate-free by construction; a file
/// yielding no names produces no `FileFinding` at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFinding {
    pub path: PathBuf,
    pub names: Vec<String>,
}

impl FileFinding {
    /// Build a finding from an extracted name set, or `None` when the set is
    /// empty. Set input guarantees uniqueness; `BTreeSet` iteration makes the
    /// stored order deterministic.
    pub fn new(path: PathBuf, names: BTreeSet<String>) -> Option<Self> {
        if names.is_empty() {
            return None;
        }
        Some(Self {
            path,
            names: names.into_iter().collect(),
        })
    }
}

/// Aggregate result of one scan invocation. Immutable after construction.
///
/// `findings` is in completion order of the concurrent batches, which may
/// differ from traversal order; callers must not depend on it.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total_declarations: usize,
    pub files_with_findings: usize,
    pub findings: Vec<FileFinding>,
    pub elapsed_ms: u64,
}

impl Report {
    /// Fold findings into a report. The two counters are derived from
    /// `findings` here, once, so they cannot drift from the finding list.
    pub fn new(findings: Vec<FileFinding>, elapsed: Duration) -> Self {
        let total_declarations = findings.iter().map(|f| f.names.len()).sum();
        let files_with_findings = findings.len();
        Self {
            total_declarations,
            files_with_findings,
            findings,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}
