// src/backup/mod.rs
mod scanner;
mod verifier;

pub use scanner::{ArchiveCandidate, ArchiveScanner, FsScanner, ARCHIVE_SUFFIX};
pub use verifier::verify;
