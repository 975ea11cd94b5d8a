//! Board module - the grid of locked cells.
//!
//! A 10x20 grid stored as a flat array for cache locality and zero
//! allocation. Coordinates: (x, y) with x in 0..10 left to right and y in
//! 0..20 top to bottom; y grows downward. Cells above the visible field
//! (y < 0) have no storage and are always vacant for collision purposes.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows, row-major flat storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index for (x, y). Out-of-range coordinates are a programming
    /// error, not a domain event, and fail loudly.
    #[inline(always)]
    fn index(x: i8, y: i8) -> usize {
        assert!(
            x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8,
            "board access out of range: ({x}, {y})"
        );
        (y as usize) * (BOARD_WIDTH as usize) + (x as usize)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y). Panics when out of range.
    pub fn cell(&self, x: i8, y: i8) -> Cell {
        self.cells[Self::index(x, y)]
    }

    /// Write the cell at (x, y). Panics when out of range.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        self.cells[Self::index(x, y)] = cell;
    }

    /// Collision predicate for piece movement: the column is in bounds, the
    /// row is above the floor, and the cell is either vacant or above the
    /// visible field (y < 0 is never stored and never blocks).
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || self.cell(x, y).is_none()
    }

    /// Check whether all 10 cells of a row are occupied.
    pub fn is_row_full(&self, y: i8) -> bool {
        let start = Self::index(0, y);
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`: every row above it moves down by one and the top row
    /// becomes empty. Rows below `y` are untouched, so callers removing
    /// several rows must process them in ascending row order.
    pub fn clear_row(&mut self, y: i8) {
        let width = BOARD_WIDTH as usize;
        let _ = Self::index(0, y);

        for row in (1..=y as usize).rev() {
            let src = (row - 1) * width;
            let dst = row * width;
            self.cells.copy_within(src..src + width, dst);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// The raw cell array, row-major (for rendering).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
