//! Board module - the cell grid and the piece falling through it
//!
//! The board is 22 rows x 10 columns of cells stored as a flat row-major
//! array for cache locality and zero allocation. The bottom 20 rows are
//! visible; rows 0 and 1 are the hidden spawn buffer. Coordinates are
//! (column, row): columns 0..9 left to right, rows 0..21 top to bottom.
//!
//! The board owns zero or one current piece. Movement, rotation, and spawn
//! all go through the same check-then-commit shape: the resolver validates
//! the candidate, and only a fully legal candidate mutates state.

use arrayvec::ArrayVec;

use crate::core::catalog;
use crate::core::piece::Piece;
use crate::core::placement;
use crate::core::rng::KindSampler;
use crate::error::EngineError;
use crate::types::{
    Cell, MoveDir, PieceKind, Spin, BOARD_COLUMNS, BOARD_ROWS, SPAWN_COLUMN, SPAWN_ROW,
    VISIBLE_ROWS,
};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLUMNS * BOARD_ROWS;

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMNS + column)
    cells: [Cell; BOARD_SIZE],
    /// The currently falling piece, if any
    current: Option<Piece>,
}

impl Board {
    /// Create a new empty board with no falling piece
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            current: None,
        }
    }

    /// Calculate flat index from (column, row) coordinates
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= BOARD_COLUMNS as i8 || row < 0 || row >= BOARD_ROWS as i8 {
            return None;
        }
        Some((row as usize) * BOARD_COLUMNS + (col as usize))
    }

    pub fn width(&self) -> usize {
        BOARD_COLUMNS
    }

    pub fn height(&self) -> usize {
        BOARD_ROWS
    }

    /// Rows shown to the player (the bottom of the grid)
    pub fn visible_rows(&self) -> usize {
        VISIBLE_ROWS
    }

    /// Get cell at (column, row); None if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Read-only cell access in (row, column) order for collaborators.
    /// Indexing outside the grid is a caller bug and reported as an error.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        if row >= BOARD_ROWS || col >= BOARD_COLUMNS {
            return Err(EngineError::CellOutOfBounds { row, col });
        }
        Ok(self.cells[row * BOARD_COLUMNS + col])
    }

    /// Set cell at (column, row); false if out of bounds
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a position holds a locked cell (out of bounds is false)
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// The currently falling piece, if any
    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// Spawn a piece of the given kind at the spawn point. Installs it as
    /// the current piece only if the placement is legal; otherwise the
    /// current piece is left unset and false is returned.
    pub fn try_spawn(&mut self, kind: PieceKind) -> bool {
        self.current = None;

        let def = catalog::shape(kind);
        let piece = Piece::spawn(&def, (SPAWN_COLUMN, SPAWN_ROW));
        if !placement::can_place(piece.grid(), piece.column(), piece.row(), self) {
            return false;
        }

        self.current = Some(piece);
        true
    }

    /// Draw a uniform random kind and spawn it. False means the spawn area
    /// is blocked, which is the game-over trigger.
    pub fn try_spawn_new_piece(&mut self, sampler: &mut KindSampler) -> bool {
        let kind = sampler.draw();
        self.try_spawn(kind)
    }

    /// Try to move the current piece one step in the given direction.
    /// Legality is checked atomically before any mutation; on failure the
    /// piece is untouched.
    pub fn try_move(&mut self, dir: MoveDir) -> bool {
        let Some(piece) = self.current else {
            return false;
        };

        let (d_col, d_row) = dir.delta();
        let (new_col, new_row) = (piece.column() + d_col, piece.row() + d_row);
        if !placement::can_place(piece.grid(), new_col, new_row, self) {
            return false;
        }

        let mut moved = piece;
        moved.translate(d_col, d_row);
        self.current = Some(moved);
        true
    }

    /// Try to rotate the current piece in place. The rotated grid is
    /// validated at the piece's unchanged position; there is no kick or
    /// offset search, so a rotation blocked by a wall or the stack is
    /// rejected outright.
    pub fn try_rotate(&mut self, spin: Spin) -> bool {
        let Some(piece) = self.current else {
            return false;
        };

        let rotated = piece.rotated(spin);
        if !placement::can_place(&rotated, piece.column(), piece.row(), self) {
            return false;
        }

        let mut committed = piece;
        committed.set_grid(rotated);
        self.current = Some(committed);
        true
    }

    /// Write the current piece's kind tag into every cell it covers.
    /// The piece itself is not cleared; the lifecycle sequences
    /// lock -> clear lines -> drop piece -> respawn.
    pub fn lock_current_piece(&mut self) -> Result<(), EngineError> {
        let Some(piece) = self.current else {
            return Err(EngineError::NoActivePiece);
        };

        let kind = piece.kind();
        let (col, row) = piece.position();
        for (r, c) in piece.grid().occupied() {
            self.set(col + c as i8, row + r as i8, Some(kind));
        }

        Ok(())
    }

    /// Drop the current piece without locking it
    pub fn clear_current_piece(&mut self) {
        self.current = None;
    }

    /// Check if every cell of a row is locked
    pub fn is_row_complete(&self, row: usize) -> bool {
        if row >= BOARD_ROWS {
            return false;
        }
        let start = row * BOARD_COLUMNS;
        self.cells[start..start + BOARD_COLUMNS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Shift every row above `row` down by one and empty row 0
    fn shift_rows_down(&mut self, row: usize) {
        for r in (1..=row).rev() {
            let src = (r - 1) * BOARD_COLUMNS;
            let dst = r * BOARD_COLUMNS;
            self.cells.copy_within(src..src + BOARD_COLUMNS, dst);
        }
        for cell in &mut self.cells[..BOARD_COLUMNS] {
            *cell = None;
        }
    }

    /// Remove every complete row and return the cleared row indices.
    ///
    /// Rows are scanned top to bottom. A complete row is removed by
    /// shifting all rows above it down one step; the same index is then
    /// re-examined, since the row that slid into it may itself be
    /// complete when clears stack. A board with no complete rows is left
    /// bitwise identical.
    pub fn clear_completed_lines(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();

        for row in 0..BOARD_ROWS {
            while self.is_row_complete(row) {
                self.shift_rows_down(row);
                // One lock completes at most 4 rows; overflow means the
                // cells were filled outside the lifecycle.
                let pushed = cleared.try_push(row);
                debug_assert!(pushed.is_ok(), "more than 4 rows completed at once");
            }
        }

        cleared
    }

    /// Encode the locked cells as u8: 0 = empty, 1..=7 = kind index
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_COLUMNS]; BOARD_ROWS]) {
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLUMNS {
                out[row][col] = match self.cells[row * BOARD_COLUMNS + col] {
                    Some(kind) => kind.index(),
                    None => 0,
                };
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
