//! # Boggle Solver
//!
//! A multithreaded Boggle solver backed by a dictionary prefix tree.
//!
//! Words are spelled by paths of adjacent cells (diagonals included) that
//! never reuse a cell. The search walks every such path from every cell in
//! parallel, abandoning a path the moment its letters stop being a prefix of
//! some dictionary word.

pub mod board;
pub mod error;
pub mod queue;
pub mod search;
pub mod solver;
pub mod trie;
pub mod word;

use std::fs;
use std::path::Path;

pub use board::Board;
pub use error::{BoggleError, Result};
pub use solver::{BoggleSolver, SearchResults, SolverConfig};
pub use trie::{NodeId, Trie};
pub use word::{normalize_word, score_word, total_score};

/// Number of letters, and so of edges out of each trie node
pub const ALPHABET_SIZE: usize = 26;

/// Shortest word that counts
pub const MIN_WORD_LENGTH: usize = 3;

/// Read a word list, one candidate word per line.
///
/// Lines are returned as-is apart from the line break; bytes that are not
/// valid UTF-8 are replaced, which later fails word validation.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| BoggleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(bytes
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect())
}
