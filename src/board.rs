//! Othello board: the grid of cells, stone counts and move counter.
//!
//! [`Board`] is a plain value. Cloning one yields an independent snapshot,
//! which is what the history and the AI trial evaluation work with. The
//! only mutating gameplay entry point is [`Board::place`]; everything else
//! changes state solely by restoring a whole snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::rules;
use crate::types::{Cell, Position, Stone};

pub const MIN_ROWS: usize = 4;
pub const MIN_COLS: usize = 4;
pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_COLS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major, length `rows * cols`.
    cells: Vec<Cell>,
    black_count: usize,
    white_count: usize,
    move_count: usize,
}

impl Board {
    /// Creates a board with the standard four-stone starting pattern.
    ///
    /// Fails with [`Error::InvalidDimensions`] when either dimension is
    /// below 4 or odd; the diagonal start needs an even-sided center.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < MIN_ROWS || cols < MIN_COLS || rows % 2 != 0 || cols % 2 != 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Self::starting(rows, cols))
    }

    /// Builds the starting position for already-validated dimensions.
    fn starting(rows: usize, cols: usize) -> Self {
        let mut board = Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            black_count: 0,
            white_count: 0,
            move_count: 0,
        };

        let (r, c) = (rows / 2, cols / 2);
        board.cells[(r - 1) * cols + (c - 1)] = Cell::White;
        board.cells[r * cols + c] = Cell::White;
        board.cells[(r - 1) * cols + c] = Cell::Black;
        board.cells[r * cols + (c - 1)] = Cell::Black;
        board.recount();

        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn black_count(&self) -> usize {
        self.black_count
    }

    pub fn white_count(&self) -> usize {
        self.white_count
    }

    pub fn empty_count(&self) -> usize {
        self.rows * self.cols - self.black_count - self.white_count
    }

    /// Count of stones of one color.
    pub fn stone_count(&self, stone: Stone) -> usize {
        match stone {
            Stone::Black => self.black_count,
            Stone::White => self.white_count,
        }
    }

    /// Total stones placed since construction.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Cell state at `pos`, or [`Error::OutOfBounds`].
    pub fn cell(&self, pos: Position) -> Result<Cell> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return Err(Error::OutOfBounds(pos));
        }
        Ok(self.cells[self.index(pos)])
    }

    /// Read-only row-major view of the full matrix, for rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True iff placing `stone` at `pos` is a legal move. Pure.
    pub fn can_place(&self, pos: Position, stone: Stone) -> bool {
        rules::is_legal(self, pos, stone)
    }

    /// True iff `stone` has at least one legal move anywhere.
    pub fn has_any_legal_move(&self, stone: Stone) -> bool {
        self.legal_moves(stone).next().is_some()
    }

    /// Legal placements for `stone` in row-major scan order.
    ///
    /// The iterator borrows the board, so it must be recomputed after any
    /// mutation.
    pub fn legal_moves(&self, stone: Stone) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
            .filter(move |&pos| rules::is_legal(self, pos, stone))
    }

    /// Places `stone` at `pos` and flips every bracketed opponent run.
    ///
    /// Returns the flipped coordinates so a renderer can animate them.
    /// Fails with [`Error::IllegalMove`] and leaves the board untouched
    /// when the placement closes no flip-line.
    pub fn place(&mut self, pos: Position, stone: Stone) -> Result<Vec<Position>> {
        let flips = rules::flips_for(self, pos, stone);
        if flips.is_empty() {
            return Err(Error::IllegalMove(pos));
        }

        let target = self.index(pos);
        self.cells[target] = stone.into();
        for &flip in &flips {
            let idx = self.index(flip);
            self.cells[idx] = stone.into();
        }
        self.recount();
        self.move_count += 1;

        debug!(
            row = pos.row,
            col = pos.col,
            stone = ?stone,
            flipped = flips.len(),
            move_count = self.move_count,
            "stone placed"
        );

        Ok(flips)
    }

    /// Signed-coordinate cell lookup for the direction scans, which start
    /// from an already-validated position. `None` off the board, so walks
    /// terminate at the edge without wraparound.
    pub(crate) fn at(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Recomputes both stone counts from the matrix.
    fn recount(&mut self) {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
        self.black_count = black;
        self.white_count = white;
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
