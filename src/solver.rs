//! Solver context: the dictionary, the last search's words, and settings.
//!
//! A [`BoggleSolver`] replaces process-wide dictionary state. Load words into
//! it once, then run as many searches as needed; each search returns an owned
//! [`SearchResults`] that stays valid whatever happens to the solver later.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::path::Path;

use log::{info, warn};

use crate::board::Board;
use crate::error::Result;
use crate::read_word_list;
use crate::search::search_board;
use crate::trie::Trie;
use crate::word::{score_word, total_score};

/// Tunables for a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Worker threads per search. Values below 1 are treated as 1.
    pub workers: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(4),
        }
    }
}

impl SolverConfig {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }
}

/// Words found on a board, in alphabetical order, with their total score.
///
/// The word list stays sorted and unique; it is only built from a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    words: Vec<String>,
    score: u32,
}

impl SearchResults {
    fn from_set(words: &BTreeSet<String>) -> Self {
        Self {
            score: total_score(words),
            words: words.iter().cloned().collect(),
        }
    }

    /// Unique words in alphabetical order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    /// Union with another result set, rescoring each word once.
    pub fn merge(&mut self, other: &SearchResults) {
        let mut union: BTreeSet<String> = self.words.drain(..).collect();
        union.extend(other.words.iter().cloned());
        *self = Self::from_set(&union);
    }

    /// Each word paired with its score.
    pub fn scored(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.words.iter().map(|w| (w.as_str(), score_word(w)))
    }
}

/// The Boggle solver.
#[derive(Debug, Clone, Default)]
pub struct BoggleSolver {
    dictionary: Trie,
    found: BTreeSet<String>,
    config: SolverConfig,
}

impl BoggleSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            dictionary: Trie::new(),
            found: BTreeSet::new(),
            config,
        }
    }

    /// A solver with the default configuration and the given dictionary words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut solver = Self::default();
        solver.dictionary.extend(words);
        solver
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    pub fn set_workers(&mut self, workers: usize) {
        self.config.workers = workers;
    }

    pub fn dictionary(&self) -> &Trie {
        &self.dictionary
    }

    /// Add one word; inadmissible words are ignored.
    pub fn insert_word(&mut self, word: &str) -> bool {
        self.dictionary.insert(word)
    }

    /// Add every admissible line of a word-list file to the dictionary.
    ///
    /// An unreadable file leaves the dictionary as it was. Returns the number
    /// of words that were new.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> usize {
        let path = path.as_ref();
        let lines = match read_word_list(path) {
            Ok(lines) => lines,
            Err(err) => {
                warn!("{err}");
                return 0;
            }
        };

        let total = lines.len();
        let added = lines
            .iter()
            .filter(|line| self.dictionary.insert(line))
            .count();
        info!(
            "loaded {} of {} lines from {}, dictionary holds {} words",
            added,
            total,
            path.display(),
            self.dictionary.len()
        );
        added
    }

    /// Release the dictionary. Later searches find nothing until words are
    /// loaded again.
    pub fn free_dictionary(&mut self) {
        self.dictionary.clear();
    }

    /// Words found by the most recent search.
    pub fn found_words(&self) -> &BTreeSet<String> {
        &self.found
    }

    pub fn free_words(&mut self) {
        self.found.clear();
    }

    /// Find every dictionary word on a board.
    ///
    /// The previous search's words are discarded first, so the result only
    /// ever describes `board`. Use [`SearchResults::merge`] to combine boards.
    pub fn solve(&mut self, board: &Board) -> Result<SearchResults> {
        self.found.clear();
        self.found = search_board(&self.dictionary, board, self.config.workers)?;
        Ok(SearchResults::from_set(&self.found))
    }

    /// Validate raw row-major letters and search them.
    ///
    /// Invalid boards are logged and produce empty results without starting
    /// any worker.
    pub fn find_words(&mut self, letters: &str, width: usize, height: usize) -> SearchResults {
        let outcome = Board::new(letters, width, height).and_then(|board| self.solve(&board));
        match outcome {
            Ok(results) => results,
            Err(err) => {
                warn!("wrong board: {err}");
                self.found.clear();
                SearchResults::default()
            }
        }
    }
}
