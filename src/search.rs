//! Exhaustive board search.
//!
//! Every cell is a starting point. From each one, a depth-first walk follows
//! paths of adjacent, not-yet-used cells, and stops extending a path as soon
//! as its letters are no longer a prefix of any dictionary word.
//!
//! Starting cells are spread over a fixed pool of worker threads through a
//! [`CoordQueue`]. Each worker keeps its own visited mask and its own word
//! set; the sets are unioned once every worker has finished, so nothing but
//! the queue is shared mutably.

use std::collections::{BTreeSet, HashSet};
use std::time::Instant;

use log::debug;
use rayon::ThreadPoolBuilder;

use crate::board::Board;
use crate::error::Result;
use crate::queue::CoordQueue;
use crate::trie::{NodeId, Trie};

/// Cells on the path currently being explored by one worker.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    cells: Vec<bool>,
    width: usize,
}

impl VisitedMask {
    pub fn new(board: &Board) -> Self {
        Self {
            cells: vec![false; board.len()],
            width: board.width(),
        }
    }

    #[inline]
    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.width]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, visited: bool) {
        self.cells[x + y * self.width] = visited;
    }

    /// True when no cell is marked.
    pub fn is_clear(&self) -> bool {
        !self.cells.iter().any(|&v| v)
    }
}

/// Collect every word reachable by a simple path starting at `(x, y)`.
///
/// Nothing is marked if no dictionary word starts with the cell's letter.
/// `visited` is left exactly as it was found.
pub fn search_from<'t>(
    trie: &'t Trie,
    board: &Board,
    x: usize,
    y: usize,
    visited: &mut VisitedMask,
    found: &mut HashSet<&'t str>,
) {
    if let Some(node) = trie.child(NodeId::ROOT, board.letter_at(x, y)) {
        explore(trie, board, x, y, node, visited, found);
    }
}

fn explore<'t>(
    trie: &'t Trie,
    board: &Board,
    x: usize,
    y: usize,
    node: NodeId,
    visited: &mut VisitedMask,
    found: &mut HashSet<&'t str>,
) {
    visited.set(x, y, true);

    // a word here can still be the prefix of a longer one
    if let Some(word) = trie.word_at(node) {
        found.insert(word);
    }

    for (nx, ny) in board.neighbors(x, y) {
        if visited.is_visited(nx, ny) {
            continue;
        }
        if let Some(child) = trie.child(node, board.letter_at(nx, ny)) {
            explore(trie, board, nx, ny, child, visited, found);
        }
    }

    visited.set(x, y, false);
}

/// Worker loop: claim starting cells until the queue runs dry.
fn drain<'t>(trie: &'t Trie, board: &Board, queue: &CoordQueue) -> HashSet<&'t str> {
    let mut visited = VisitedMask::new(board);
    let mut found = HashSet::new();
    while let Some((x, y)) = queue.pop_next() {
        search_from(trie, board, x, y, &mut visited, &mut found);
    }
    found
}

/// Find every dictionary word on `board` using `workers` threads.
///
/// The thread pool lives only for this call and is joined before the merged
/// set is returned.
pub fn search_board(trie: &Trie, board: &Board, workers: usize) -> Result<BTreeSet<String>> {
    if trie.is_empty() {
        debug!("dictionary is empty, skipping search");
        return Ok(BTreeSet::new());
    }

    let start = Instant::now();
    let workers = workers.max(1);
    let queue = CoordQueue::for_board(board);
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("boggle-worker-{i}"))
        .build()?;

    let per_worker = pool.broadcast(|ctx| {
        let found = drain(trie, board, &queue);
        debug!("worker {} found {} words", ctx.index(), found.len());
        found
    });

    let merged: BTreeSet<&str> = per_worker.into_iter().flatten().collect();
    let words: BTreeSet<String> = merged.into_iter().map(str::to_owned).collect();

    debug!(
        "searched {}x{} board with {} workers in {:.2?}: {} words",
        board.width(),
        board.height(),
        workers,
        start.elapsed(),
        words.len()
    );
    Ok(words)
}
