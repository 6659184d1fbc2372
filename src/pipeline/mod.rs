//! Scan pipeline: drain the walker, read and extract in bounded batches,
//! fold findings into a report.
//!
//! Concurrency is cooperative I/O overlap, not parallel computation: each
//! batch spawns one task per file into a `JoinSet` and the whole set is
//! awaited before the next batch starts. Findings are appended only after a
//! batch's concurrent phase completes, so there is no shared mutable state
//! to lock.

use crate::core::{FileFinding, Report};
use crate::errors::ScanError;
use crate::extraction::extract_component_names;
use crate::io::walker::FileWalker;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::task::JoinSet;

/// Files read and extracted concurrently before the pipeline advances.
/// Bounds in-flight memory to roughly `batch size x average file size`.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Scan a directory tree for component declarations.
///
/// The only fatal condition is an invalid root; every per-entry failure is
/// absorbed as "no contribution". Elapsed time covers traversal and all file
/// processing, up to report construction.
pub async fn scan(root: &Path) -> Result<Report, ScanError> {
    scan_with_batch_size(root, DEFAULT_BATCH_SIZE).await
}

pub async fn scan_with_batch_size(root: &Path, batch_size: usize) -> Result<Report, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::RootNotDirectory(root.to_path_buf()));
    }
    let batch_size = batch_size.max(1);

    let started = Instant::now();
    let walker = FileWalker::new(root);
    let mut findings = Vec::new();
    let mut batch = Vec::with_capacity(batch_size);

    for candidate in walker.iter() {
        batch.push(candidate);
        if batch.len() == batch_size {
            process_batch(std::mem::take(&mut batch), &mut findings).await;
        }
    }
    if !batch.is_empty() {
        process_batch(batch, &mut findings).await;
    }

    let report = Report::new(findings, started.elapsed());
    info!(
        "scanned {}: {} components in {} files ({} ms)",
        root.display(),
        report.total_declarations,
        report.files_with_findings,
        report.elapsed_ms
    );
    Ok(report)
}

/// Run one batch to completion. Findings arrive in completion order, which
/// the report deliberately does not promise to preserve.
async fn process_batch(batch: Vec<PathBuf>, findings: &mut Vec<FileFinding>) {
    let mut tasks = JoinSet::new();
    for path in batch {
        tasks.spawn(process_file(path));
    }
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Some(finding)) => findings.push(finding),
            Ok(None) => {}
            Err(err) => debug!("extraction task failed: {err}"),
        }
    }
}

/// Read and extract one file. Any read failure (permission, deletion,
/// non-UTF-8 content) drops the file silently; an empty extraction drops it
/// too. Neither is an error.
async fn process_file(path: PathBuf) -> Option<FileFinding> {
    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) => {
            debug!("skipping {}: {err}", path.display());
            return None;
        }
    };
    FileFinding::new(path, extract_component_names(&content))
}
