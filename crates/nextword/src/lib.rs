//! Next-word suggestion over sorted, disk-resident n-gram tables.
//!
//! The data directory holds plain text files sorted byte-wise by line:
//! `<n>gram-<letter>.txt` (n in 2..=5) with lines
//! `<context words>\t<candidate words>`, and `dict.txt` with lines
//! `<word>\t<metadata>`. Lookups binary-search these files with positional
//! reads; nothing is loaded or cached in memory between calls.
//!
//! A request is answered by cascading from the longest available context
//! (up to four words) down to a single word, then completing the partial
//! word from the dictionary.
//!
//! # Example
//! ```no_run
//! use nextword::{Nextword, Params};
//!
//! # fn main() -> anyhow::Result<()> {
//! let nw = Nextword::new(Params::new("/path/to/nextword-data").candidate_num(5))?;
//! for word in nw.suggest("the quick brown ")? {
//!     println!("{word}");
//! }
//! # Ok(()) }
//! ```
//!
//! For an interactive demo, see `cargo run -p nextword --example suggest -- <data-dir>`.

pub mod candidates;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod input;
pub mod ngram;
pub mod reader;
pub mod search;

pub use engine::{DEFAULT_CANDIDATE_NUM, Nextword, Params};
pub use error::{ConfigError, StorageError, SuggestError};
pub use input::{MAX_CONTEXT_LEN, ParsedInput, parse_input};
pub use reader::DEFAULT_READ_BUF_SIZE;
