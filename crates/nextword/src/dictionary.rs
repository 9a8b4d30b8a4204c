use std::path::Path;

use tracing::debug;

use crate::error::StorageError;
use crate::ngram::FIELD_SEPARATOR;
use crate::reader::{Lines, into_text, open_source};
use crate::search::{Position, search};

/// Word list consulted for single-word completion.
pub const DICTIONARY_FILE: &str = "dict.txt";

/// Complete `prefix` from the sorted `dict.txt` in `data_dir`.
///
/// Lines are `<word>\t<metadata>`. All words starting with `prefix` sit in one
/// contiguous block; the block is located by binary search and scanned until
/// the first line outside it. A missing dictionary yields no words.
pub fn complete(
    data_dir: &Path,
    prefix: &str,
    buf_size: usize,
) -> Result<Vec<String>, StorageError> {
    if prefix.is_empty() {
        return Ok(Vec::new());
    }
    let path = data_dir.join(DICTIONARY_FILE);
    let storage_err = |e| StorageError::new(&path, e);

    let Some((file, size)) = open_source(&path).map_err(storage_err)? else {
        debug!("{} not present", path.display());
        return Ok(Vec::new());
    };

    let offset = match search(&file, size, prefix.as_bytes(), buf_size).map_err(storage_err)? {
        Position::Found(offset) => offset,
        Position::NotFound => return Ok(Vec::new()),
    };

    let mut words = Vec::new();
    for line in Lines::new(&file, offset, buf_size) {
        let line = line.map_err(storage_err)?;
        let word = match line.iter().position(|b| *b as char == FIELD_SEPARATOR) {
            Some(end) => &line[..end],
            None => &line[..],
        };
        if !word.starts_with(prefix.as_bytes()) {
            break;
        }
        words.push(into_text(word.to_vec()).map_err(storage_err)?);
    }

    debug!(prefix, found = words.len(), "dictionary completion");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_dict(contents: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DICTIONARY_FILE), contents).unwrap();
        dir
    }

    #[test]
    fn completes_prefix_block() {
        let dir = write_dict("cat\t100\ncatalog\t50\ndog\t10\n");
        assert_eq!(complete(dir.path(), "ca", 4).unwrap(), vec!["cat", "catalog"]);
        assert_eq!(complete(dir.path(), "cat", 4).unwrap(), vec!["cat", "catalog"]);
        assert_eq!(complete(dir.path(), "cata", 4).unwrap(), vec!["catalog"]);
        assert_eq!(complete(dir.path(), "do", 4).unwrap(), vec!["dog"]);
    }

    #[test]
    fn no_match_is_empty() {
        let dir = write_dict("cat\t100\ncatalog\t50\ndog\t10\n");
        assert!(complete(dir.path(), "b", 16).unwrap().is_empty());
        assert!(complete(dir.path(), "zz", 16).unwrap().is_empty());
        assert!(complete(dir.path(), "", 16).unwrap().is_empty());
    }

    #[test]
    fn last_line_without_newline_is_included() {
        let dir = write_dict("apple\t1\nbanana\t2\nband\t3");
        assert_eq!(complete(dir.path(), "ban", 3).unwrap(), vec!["banana", "band"]);
    }

    #[test]
    fn missing_dictionary_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(complete(dir.path(), "ca", 16).unwrap().is_empty());
    }
}
