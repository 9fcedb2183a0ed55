// src/backup/scanner.rs
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::warn;

/// Archive file names must end with this two-part compound extension.
pub const ARCHIVE_SUFFIX: &str = ".tar.gz";

/// One archive file found in the backup directory.
#[derive(Debug, Clone)]
pub struct ArchiveCandidate {
    pub path: PathBuf,
    pub modified: SystemTime,
    pub size_bytes: u64,
}

impl ArchiveCandidate {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

pub(crate) fn is_archive_name(name: &str) -> bool {
    name.ends_with(ARCHIVE_SUFFIX)
}

/// Lists archive files with metadata in a single directory, non-recursive.
#[async_trait]
pub trait ArchiveScanner: Send + Sync {
    async fn scan(&self, dir: &Path) -> io::Result<Vec<ArchiveCandidate>>;
}

/// Scanner backed by the real filesystem. Only metadata is read; archive
/// contents are never opened.
pub struct FsScanner;

#[async_trait]
impl ArchiveScanner for FsScanner {
    async fn scan(&self, dir: &Path) -> io::Result<Vec<ArchiveCandidate>> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut candidates = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_archive_name(&name) {
                continue;
            }

            let metadata = match entry.metadata().await {
                Ok(m) => m,
                Err(e) => {
                    warn!("Skipping {}: failed to stat: {}", entry.path().display(), e);
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            candidates.push(ArchiveCandidate {
                path: entry.path(),
                modified,
                size_bytes: metadata.len(),
            });
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_compound_suffix_matches() {
        assert!(is_archive_name("db-2026-08-08.tar.gz"));
        assert!(is_archive_name("nightly.tar.gz"));

        assert!(!is_archive_name("db.tar"));
        assert!(!is_archive_name("db.gz"));
        assert!(!is_archive_name("db.tgz"));
        assert!(!is_archive_name("db.tar.gz.bak"));
        assert!(!is_archive_name("db.zip"));
    }
}
