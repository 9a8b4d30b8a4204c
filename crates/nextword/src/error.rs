use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Rejected engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("data directory {} is not accessible: {source}", .path.display())]
    MissingDataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("data path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("candidate count must be a positive integer")]
    InvalidCandidateNum,
    #[error("read buffer size must be a positive integer")]
    InvalidReadBufSize,
}

/// A data file could not be read.
#[derive(Debug, Error)]
#[error("failed to read {}: {source}", .path.display())]
pub struct StorageError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl StorageError {
    pub(crate) fn new(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A suggestion request aborted by a storage failure.
///
/// Holds whatever candidates were collected before the failure.
#[derive(Debug, Error)]
#[error("suggestion aborted after {} candidates: {source}", .candidates.len())]
pub struct SuggestError {
    pub candidates: Vec<String>,
    #[source]
    pub source: StorageError,
}

impl SuggestError {
    pub fn partial(&self) -> &[String] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<String> {
        self.candidates
    }
}
