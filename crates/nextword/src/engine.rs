use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::candidates::{filter_prefix, merge};
use crate::dictionary;
use crate::error::{ConfigError, StorageError, SuggestError};
use crate::input::{ParsedInput, parse_input};
use crate::ngram;
use crate::reader::DEFAULT_READ_BUF_SIZE;

pub const DEFAULT_CANDIDATE_NUM: usize = 10;

/// Engine settings, fixed once a [`Nextword`] is built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Params {
    /// Directory holding `<n>gram-<letter>.txt` and `dict.txt`.
    pub data_dir: PathBuf,
    /// Maximum number of candidates returned.
    pub candidate_num: usize,
    /// Collect from every context length instead of stopping at the first hit.
    pub greedy: bool,
    /// Bytes requested per positional read.
    pub read_buf_size: usize,
}

impl Params {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            candidate_num: DEFAULT_CANDIDATE_NUM,
            greedy: false,
            read_buf_size: DEFAULT_READ_BUF_SIZE,
        }
    }

    pub fn candidate_num(mut self, candidate_num: usize) -> Self {
        self.candidate_num = candidate_num;
        self
    }

    pub fn greedy(mut self, greedy: bool) -> Self {
        self.greedy = greedy;
        self
    }

    pub fn read_buf_size(mut self, read_buf_size: usize) -> Self {
        self.read_buf_size = read_buf_size;
        self
    }
}

/// Suggests the next English word, or completes the one being typed.
///
/// Every call opens its own file handles and shares nothing mutable, so one
/// engine can serve concurrent callers.
#[derive(Debug)]
pub struct Nextword {
    params: Params,
}

impl Nextword {
    /// Validate `params` and build an engine.
    pub fn new(params: Params) -> Result<Self, ConfigError> {
        let meta = fs::metadata(&params.data_dir).map_err(|source| ConfigError::MissingDataDir {
            path: params.data_dir.clone(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(ConfigError::NotADirectory(params.data_dir));
        }
        if params.candidate_num == 0 {
            return Err(ConfigError::InvalidCandidateNum);
        }
        if params.read_buf_size == 0 {
            return Err(ConfigError::InvalidReadBufSize);
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn data_dir(&self) -> &Path {
        &self.params.data_dir
    }

    /// Suggest words for `input`.
    ///
    /// When `input` ends with a space every likely next word is returned;
    /// otherwise only words starting with the last, partial word. On a
    /// storage failure the error carries the candidates gathered so far.
    pub fn suggest(&self, input: &str) -> Result<Vec<String>, SuggestError> {
        let ParsedInput { context, prefix } = parse_input(input);
        let mut candidates = Vec::new();

        for start in 0..context.len() {
            let found = match ngram::lookup(
                &self.params.data_dir,
                &context[start..],
                self.params.read_buf_size,
            ) {
                Ok(found) => found,
                Err(source) => return Err(self.abort(candidates, source)),
            };
            let found = if prefix.is_empty() {
                found
            } else {
                filter_prefix(found, &prefix)
            };
            debug!(
                order = context.len() - start + 1,
                found = found.len(),
                "cascade round"
            );

            candidates = merge(candidates, found);
            candidates.truncate(self.params.candidate_num);
            if !self.params.greedy && !candidates.is_empty() {
                break;
            }
        }

        if !prefix.is_empty() {
            let words =
                match dictionary::complete(&self.params.data_dir, &prefix, self.params.read_buf_size)
                {
                    Ok(words) => words,
                    Err(source) => return Err(self.abort(candidates, source)),
                };
            candidates = merge(candidates, words);
            candidates.truncate(self.params.candidate_num);
        }

        Ok(candidates)
    }

    fn abort(&self, candidates: Vec<String>, source: StorageError) -> SuggestError {
        debug!(partial = candidates.len(), error = %source, "suggestion aborted");
        SuggestError { candidates, source }
    }
}
