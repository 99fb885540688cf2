//! Letter grid model
//!
//! A [`Grid`] is built from a row-major square character matrix. Each cell
//! gets its (column, row) coordinate and a precomputed list of up to 8
//! neighbouring cells (fewer on edges and corners). Cells are addressed by a
//! flat index which doubles as the deterministic search start order.

use thiserror::Error;

/// Grid coordinate pair (column, row), (0, 0) top left
pub type Coord = (usize, usize);

/// Errors raised when building a grid from an input matrix
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Input matrix has no rows
    #[error("grid is empty")]
    Empty,
    /// A row's length does not match the row count
    #[error("grid is not square: {rows} rows but row {row} has {cols} columns")]
    NotSquare {
        /// Number of rows in the matrix
        rows: usize,
        /// Index of the offending row
        row: usize,
        /// Number of columns in the offending row
        cols: usize,
    },
    /// A matrix entry is not a lower case ASCII letter
    #[error("invalid letter {letter:?} at column {col}, row {row} (lower case a-z only)")]
    InvalidLetter {
        /// The offending character
        letter: char,
        /// Column of the offending character
        col: usize,
        /// Row of the offending character
        row: usize,
    },
}

/// One grid position: its letter, coordinate and adjacent cell indexes
#[derive(Debug)]
struct Cell {
    letter: char,
    coord: Coord,
    neighbours: Vec<usize>,
}

/// Square letter grid with precomputed adjacency
#[derive(Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from a row-major square matrix of lower case letters
    pub fn new(rows: &[Vec<char>]) -> Result<Self, GridError> {
        let size = rows.len();

        if size == 0 {
            return Err(GridError::Empty);
        }

        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    row,
                    cols: cols.len(),
                });
            }
        }

        // First pass: create all cells
        let mut cells = Vec::with_capacity(size * size);

        for (y, row) in rows.iter().enumerate() {
            for (x, &letter) in row.iter().enumerate() {
                if !letter.is_ascii_lowercase() {
                    return Err(GridError::InvalidLetter { letter, col: x, row: y });
                }

                cells.push(Cell {
                    letter,
                    coord: (x, y),
                    neighbours: Vec::with_capacity(8),
                });
            }
        }

        // Second pass: resolve adjacency now that all cells exist
        for idx in 0..cells.len() {
            let (x, y) = cells[idx].coord;

            for dx in -1i64..=1 {
                for dy in -1i64..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }

                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;

                    if nx < 0 || nx >= size as i64 || ny < 0 || ny >= size as i64 {
                        continue;
                    }

                    cells[idx]
                        .neighbours
                        .push(ny as usize * size + nx as usize);
                }
            }
        }

        Ok(Self { size, cells })
    }

    /// Returns the grid dimension n
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total number of cells (n squared)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the letter held by a cell
    #[inline]
    pub fn letter(&self, idx: usize) -> char {
        self.cells[idx].letter
    }

    /// Returns a cell's (column, row) coordinate
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        self.cells[idx].coord
    }

    /// Returns the flat indexes of a cell's neighbours
    #[inline]
    pub fn neighbours(&self, idx: usize) -> &[usize] {
        &self.cells[idx].neighbours
    }
}
