//! The letter grid a search runs over.

use std::fmt;

use rand::Rng;

use crate::error::{BoggleError, Result};

/// Offsets of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Number of cells for the given dimensions, if they make a searchable board.
fn cell_count(width: usize, height: usize) -> Result<usize> {
    let cells = width
        .checked_mul(height)
        .ok_or(BoggleError::BoardTooLarge { width, height })?;
    match cells {
        0 => Err(BoggleError::EmptyBoard),
        1 => Err(BoggleError::BoardTooSmall { cells }),
        _ => Ok(cells),
    }
}

/// An immutable, validated Boggle board.
///
/// Cells are stored row-major as lowercase ASCII letters. A `q` cell stands
/// for the "qu" cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Board {
    /// Build a board from row-major letters.
    ///
    /// The letters must fill exactly `width * height` cells, there must be at
    /// least two cells, and every cell must be an ASCII letter. Upper case is
    /// folded to lower case.
    pub fn new(letters: &str, width: usize, height: usize) -> Result<Self> {
        let expected = cell_count(width, height)?;

        let mut cells = Vec::with_capacity(letters.len().min(expected));
        for (index, c) in letters.chars().enumerate() {
            if !c.is_ascii_alphabetic() {
                return Err(BoggleError::NonAlphabetic { index, found: c });
            }
            cells.push(c.to_ascii_lowercase() as u8);
        }
        if cells.len() != expected {
            return Err(BoggleError::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// A board of uniformly random letters.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Self> {
        let count = cell_count(width, height)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| BoggleError::BoardTooLarge { width, height })?;
        cells.extend((0..count).map(|_| rng.gen_range(b'a'..=b'z')));
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty boards.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Letter at `(x, y)`. The caller guarantees the cell is in bounds.
    #[inline]
    pub fn letter_at(&self, x: usize, y: usize) -> u8 {
        debug_assert!(self.is_in_bounds(x as isize, y as isize));
        self.cells[x + y * self.width]
    }

    #[inline]
    pub fn is_in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// The in-bounds cells adjacent to `(x, y)`, diagonals included.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            self.is_in_bounds(nx, ny)
                .then(|| (nx as usize, ny as usize))
        })
    }

    /// Every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }

    /// Row-major letters as a string.
    pub fn letters(&self) -> String {
        self.cells.iter().map(|&b| b as char).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &cell in row {
                write!(f, "{}", cell as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
