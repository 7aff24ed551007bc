//! Starting cells shared between search workers.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::board::Board;

/// FIFO of board coordinates, each handed out exactly once.
///
/// This is the only state the workers mutate together; the lock is held just
/// long enough to pop one coordinate.
#[derive(Debug, Default)]
pub struct CoordQueue {
    cells: Mutex<VecDeque<(usize, usize)>>,
}

impl CoordQueue {
    /// A queue holding every cell of `board` in row-major order.
    pub fn for_board(board: &Board) -> Self {
        Self {
            cells: Mutex::new(board.coordinates().collect()),
        }
    }

    /// Claim the next starting cell, or `None` once the queue is drained.
    pub fn pop_next(&self) -> Option<(usize, usize)> {
        // a worker panicking mid-pop cannot leave the deque half-updated
        self.cells
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    pub fn len(&self) -> usize {
        self.cells.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
