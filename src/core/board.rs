//! Board module - manages the game grid
//!
//! The board is a rows x cols grid (default 6x7) where each cell is empty or
//! holds a player color. Uses flat row-major storage.
//! Coordinates: (row, col) with row 0 at the top, so a coin dropped into a
//! column lands at the largest empty row index ("gravity").

use crate::types::{Cell, Color};

/// The game board plus the per-column gravity fill state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
    /// Coins placed per column; the next free row is `rows - 1 - fill[col]`
    fill: Vec<usize>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            fill: vec![0; cols],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Matching-color test used by the streak scans; out of bounds is a miss.
    pub fn is_color(&self, row: usize, col: usize, color: Color) -> bool {
        matches!(self.get(row, col), Some(Some(c)) if c == color)
    }

    /// The row the next coin dropped into `col` would land on.
    ///
    /// Returns None when the column is full or out of range. Within a round
    /// this value only moves toward the top of the board.
    pub fn next_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        let fill = self.fill[col];
        if fill >= self.rows {
            return None;
        }
        Some(self.rows - 1 - fill)
    }

    /// Check whether a column can accept another coin
    pub fn is_column_full(&self, col: usize) -> bool {
        col < self.cols && self.fill[col] >= self.rows
    }

    /// Drop a coin into `col`, letting it fall to the lowest empty row.
    ///
    /// Returns the landing row, or None if the column is full or out of
    /// range. An occupied cell is never overwritten.
    pub fn drop_piece(&mut self, col: usize, color: Color) -> Option<usize> {
        let row = self.next_row(col)?;
        let idx = self.index(row, col)?;
        debug_assert!(self.cells[idx].is_none());
        self.cells[idx] = Some(color);
        self.fill[col] += 1;
        Some(row)
    }

    /// Count of coins currently on the board
    pub fn pieces(&self) -> usize {
        self.fill.iter().sum()
    }

    /// Clear the grid and reset every column fill pointer
    pub fn reset(&mut self) {
        self.cells.fill(None);
        self.fill.fill(0);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Place a coin at an arbitrary cell, bypassing gravity (for testing)
    #[cfg(test)]
    pub fn set_for_test(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = cell;
        }
    }
}
