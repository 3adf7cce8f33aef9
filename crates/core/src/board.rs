//! Board module - manages the settled-cell grid
//!
//! The board is a 10x16 grid where each cell is empty or filled with a color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..15 (top to bottom)
//!
//! Only settled cells live here. The active piece is tracked by the session
//! and must be consulted separately when checking collisions or rendering.

use arrayvec::ArrayVec;

use crate::geometry::Vec2;
use crate::pieces::ActivePiece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH, SCORE_PER_LINE};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Rows removed by one [`Board::clear_full_rows`] pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Cleared row indices, top to bottom
    pub rows: ArrayVec<usize, HEIGHT>,
    /// Points earned by this pass
    pub score_delta: u32,
}

impl LineClear {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The game board - 10 columns x 16 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH || y < 0 || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Flat index of a position that must be on the board
    ///
    /// # Panics
    ///
    /// Panics when `pos` lies outside the grid. Callers only pass positions
    /// already classified as free, so this signals a geometry defect.
    #[inline]
    fn index_of(pos: Vec2) -> usize {
        match Self::index(pos.x, pos.y) {
            Some(idx) => idx,
            None => panic!(
                "board index out of range: ({}, {}) on a {}x{} board",
                pos.x, pos.y, BOARD_WIDTH, BOARD_HEIGHT
            ),
        }
    }

    /// Get width of the board
    pub fn width(&self) -> i32 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> i32 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Cell at an in-bounds position
    ///
    /// # Panics
    ///
    /// Panics when `pos` is off the board.
    pub fn at(&self, pos: Vec2) -> Cell {
        self.cells[Self::index_of(pos)]
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds or if `cell` is the reserved border value
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if cell == Cell::Border {
            return false;
        }
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(cell) if cell.is_filled())
    }

    fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < HEIGHT && self.row(y).iter().all(|cell| cell.is_filled())
    }

    /// Check if a row has no filled cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        y >= HEIGHT || self.row(y).iter().all(|cell| cell.is_empty())
    }

    /// Topmost row holding at least one filled cell
    pub fn highest_occupied_row(&self) -> Option<usize> {
        (0..HEIGHT).find(|&y| !self.is_row_empty(y))
    }

    /// Write the piece's four cells into the grid with its color.
    ///
    /// No collision check is made; the caller has already validated the placement.
    pub fn settle(&mut self, piece: &ActivePiece) {
        let cell = Cell::Filled(piece.color);
        for pos in piece.cells() {
            let idx = Self::index_of(pos);
            self.cells[idx] = cell;
        }
    }

    /// Empty every full row, scanning top to bottom.
    ///
    /// Each full row updates a running delta `d = d * 2 + 1000` and adds it to
    /// the pass total, so one row earns 1000 and two rows earn 1000 + 3000.
    /// Rows above a cleared row are not moved; see [`Board::pack`].
    pub fn clear_full_rows(&mut self) -> LineClear {
        let mut clear = LineClear::default();
        let mut running: u32 = 0;

        for y in 0..HEIGHT {
            if !self.is_row_full(y) {
                continue;
            }
            self.cells[y * WIDTH..(y + 1) * WIDTH].fill(Cell::Empty);
            running = running.saturating_mul(2).saturating_add(SCORE_PER_LINE);
            clear.score_delta = clear.score_delta.saturating_add(running);
            clear.rows.push(y);
        }

        clear
    }

    /// Close vertical gaps by sinking every non-empty row, keeping their order.
    ///
    /// Uses a two-pointer pass from the bottom; rows above the compacted
    /// stack end up empty.
    pub fn pack(&mut self) {
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_empty(read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(Cell::Empty);
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Copy the grid as snapshot codes (0 empty, 1..=7 color)
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, code) in row.iter_mut().enumerate() {
                *code = self.cells[y * WIDTH + x].code();
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
