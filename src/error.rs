//! Error types for board construction, dictionary loading and search setup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the solver library.
///
/// The lenient entry points ([`BoggleSolver::find_words`] and
/// [`BoggleSolver::load_dictionary`]) turn these into log records and empty
/// results; everything else propagates them.
///
/// [`BoggleSolver::find_words`]: crate::BoggleSolver::find_words
/// [`BoggleSolver::load_dictionary`]: crate::BoggleSolver::load_dictionary
#[derive(Debug, Error)]
pub enum BoggleError {
    #[error("board has no cells")]
    EmptyBoard,
    #[error("board needs at least 2 cells, got {cells}")]
    BoardTooSmall { cells: usize },
    #[error("board of {width}x{height} cells is too large")]
    BoardTooLarge { width: usize, height: usize },
    #[error("board dimensions call for {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("board cell {index} is not a letter: {found:?}")]
    NonAlphabetic { index: usize, found: char },
    #[error("cannot read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, BoggleError>;
