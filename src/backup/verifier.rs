// src/backup/verifier.rs
use super::scanner::{ArchiveCandidate, ArchiveScanner, ARCHIVE_SUFFIX};
use crate::report::{VerifyOutcome, VerifyReport};
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{debug, info};

/// Verify that the most recently modified archive in `dir` exists and is
/// non-empty.
///
/// The path is resolved to an absolute, symlink-expanded form before the
/// scan. Selection is by greatest modification time; archives sharing the
/// exact same timestamp are broken by the lexicographically greatest file
/// name, so the choice never depends on scan order.
pub async fn verify(dir: &Path, scanner: &dyn ArchiveScanner) -> VerifyReport {
    let resolved = match tokio::fs::canonicalize(dir).await {
        Ok(p) => p,
        Err(e) => {
            debug!("Cannot resolve {}: {}", dir.display(), e);
            return VerifyReport {
                outcome: VerifyOutcome::DirectoryNotFound,
                lines: vec![format!("FAIL: backup dir not found: {}", dir.display())],
            };
        }
    };

    let is_dir = tokio::fs::metadata(&resolved)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return VerifyReport {
            outcome: VerifyOutcome::DirectoryNotFound,
            lines: vec![format!("FAIL: not a directory: {}", resolved.display())],
        };
    }

    let candidates = match scanner.scan(&resolved).await {
        Ok(c) => c,
        Err(e) => {
            // An existing directory we cannot enumerate violates the same
            // input constraint as a missing one.
            debug!("Scan of {} failed: {}", resolved.display(), e);
            return VerifyReport {
                outcome: VerifyOutcome::DirectoryNotFound,
                lines: vec![format!(
                    "FAIL: backup dir not readable: {}: {}",
                    resolved.display(),
                    e
                )],
            };
        }
    };

    let latest = match select_latest(&candidates) {
        Some(c) => c,
        None => {
            return VerifyReport {
                outcome: VerifyOutcome::NoArchivesFound,
                lines: vec![format!(
                    "FAIL: no {} archives found in: {}",
                    ARCHIVE_SUFFIX,
                    resolved.display()
                )],
            };
        }
    };

    let modified: DateTime<Utc> = latest.modified.into();
    let mut lines = vec![
        format!("Latest backup: {}", latest.file_name()),
        format!("Path: {}", latest.path.display()),
        format!("Size: {} bytes", latest.size_bytes),
        format!("Modified: {}", modified.format("%Y-%m-%d %H:%M:%S UTC")),
    ];

    if latest.size_bytes == 0 {
        lines.push("FAIL: latest archive is empty.".to_string());
        return VerifyReport {
            outcome: VerifyOutcome::EmptyArchive,
            lines,
        };
    }

    info!(
        "Latest archive {} is {} bytes",
        latest.file_name(),
        latest.size_bytes
    );
    lines.push("PASS: backup verification passed.".to_string());
    VerifyReport {
        outcome: VerifyOutcome::Pass,
        lines,
    }
}

fn select_latest(candidates: &[ArchiveCandidate]) -> Option<&ArchiveCandidate> {
    candidates.iter().max_by(|a, b| {
        a.modified
            .cmp(&b.modified)
            .then_with(|| a.file_name().cmp(&b.file_name()))
    })
}
