use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::StorageError;
use crate::input::MAX_CONTEXT_LEN;
use crate::reader::{into_text, open_source, read_line};
use crate::search::{Position, search};

/// Separates the key from its payload on every data line.
pub const FIELD_SEPARATOR: char = '\t';

/// Identifies the n-gram file holding continuations for a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NgramFile {
    /// Words per entry, predicted word included.
    pub order: usize,
    /// Lowercased first letter of the context.
    pub initial: char,
}

impl NgramFile {
    /// Resolve the file for `context`, or `None` when no file can hold it.
    ///
    /// Only contexts of 1 to 4 words whose first word begins with an ASCII
    /// letter are partitioned into files.
    pub fn for_context<S: AsRef<str>>(context: &[S]) -> Option<Self> {
        if context.is_empty() || context.len() > MAX_CONTEXT_LEN {
            return None;
        }
        let initial = context[0].as_ref().chars().next()?.to_ascii_lowercase();
        if !initial.is_ascii_lowercase() {
            return None;
        }
        Some(Self {
            order: context.len() + 1,
            initial,
        })
    }

    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NgramFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}gram-{}.txt", self.order, self.initial)
    }
}

/// Look up the continuations stored for exactly `context`.
///
/// Unpartitioned contexts, missing files and absent keys all yield an empty
/// list.
pub fn lookup<S: AsRef<str>>(
    data_dir: &Path,
    context: &[S],
    buf_size: usize,
) -> Result<Vec<String>, StorageError> {
    let Some(ngram_file) = NgramFile::for_context(context) else {
        return Ok(Vec::new());
    };
    let path = data_dir.join(ngram_file.file_name());

    let Some((file, size)) = open_source(&path).map_err(|e| StorageError::new(&path, e))? else {
        debug!("{} not present", path.display());
        return Ok(Vec::new());
    };

    let mut key = context
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    key.push(FIELD_SEPARATOR);

    let offset = match search(&file, size, key.as_bytes(), buf_size)
        .map_err(|e| StorageError::new(&path, e))?
    {
        Position::Found(offset) => offset,
        Position::NotFound => return Ok(Vec::new()),
    };
    let Some(line) = read_line(&file, offset, buf_size)
        .map_err(|e| StorageError::new(&path, e))?
        .into_bytes()
    else {
        return Ok(Vec::new());
    };
    if !line.starts_with(key.as_bytes()) {
        return Ok(Vec::new());
    }

    let line = into_text(line).map_err(|e| StorageError::new(&path, e))?;
    let candidates = parse_candidates(&line[key.len()..]);
    debug!(
        file = %ngram_file,
        key = key.trim_end(),
        found = candidates.len(),
        "n-gram hit"
    );
    Ok(candidates)
}

fn parse_candidates(field: &str) -> Vec<String> {
    field
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_file_by_order_and_initial() {
        let file = NgramFile::for_context(&["The", "cat"]).unwrap();
        assert_eq!(file.order, 3);
        assert_eq!(file.initial, 't');
        assert_eq!(file.file_name(), "3gram-t.txt");
        assert_eq!(
            NgramFile::for_context(&["a", "b", "c", "d"]).unwrap().file_name(),
            "5gram-a.txt"
        );
    }

    #[test]
    fn rejects_non_alphabetic_or_bad_length() {
        assert_eq!(NgramFile::for_context(&["1st"]), None);
        assert_eq!(NgramFile::for_context(&["é"]), None);
        assert_eq!(NgramFile::for_context::<&str>(&[]), None);
        assert_eq!(NgramFile::for_context(&["a", "b", "c", "d", "e"]), None);
    }

    #[test]
    fn looks_up_exact_context_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("3gram-t.txt"),
            "the cat\tsat ran jumped\nthe cats\tplay\n",
        )
        .unwrap();

        let found = lookup(dir.path(), &["the", "cat"], 8).unwrap();
        assert_eq!(found, vec!["sat", "ran", "jumped"]);
        assert_eq!(lookup(dir.path(), &["the", "cats"], 8).unwrap(), vec!["play"]);
        assert!(lookup(dir.path(), &["the", "ca"], 8).unwrap().is_empty());
        assert!(lookup(dir.path(), &["the", "dog"], 8).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(lookup(dir.path(), &["zoo"], 64).unwrap().is_empty());
        assert!(lookup(dir.path(), &["42"], 64).unwrap().is_empty());
    }

    #[test]
    fn unreadable_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("2gram-x.txt")).unwrap();
        let err = lookup(dir.path(), &["x"], 64).unwrap_err();
        assert!(err.path.ends_with("2gram-x.txt"));
    }
}
