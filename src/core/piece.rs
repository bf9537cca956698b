//! Piece module - square occupancy grids and the falling piece
//!
//! A piece's shape is a square boolean grid (side 4 for I, 3 for J/L/S/T/Z,
//! 2 for O) stored in a fixed 4x4 backing array, so moving and rotating a
//! piece never allocates. Rotation is the fixed-origin transpose-and-flip:
//! transpose the square, then reverse columns (clockwise) or rows
//! (counter-clockwise). The piece's board position is untouched by
//! rotation; the board validates the rotated grid at the same position
//! before committing it.

use crate::core::catalog::ShapeDef;
use crate::types::{CellColor, PieceKind, Spin};

/// Largest shape side (the I piece)
pub const MAX_SIDE: usize = 4;

/// Square boolean occupancy grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    cells: [[bool; MAX_SIDE]; MAX_SIDE],
    side: u8,
}

impl ShapeGrid {
    /// Build a grid from a row pattern, `'X'` marking occupied cells.
    /// The pattern must be square with side 1..=4.
    ///
    /// ```
    /// use tetris_engine::core::piece::ShapeGrid;
    /// let grid = ShapeGrid::from_pattern(&[".X.", "XXX", "..."]);
    /// assert_eq!(grid.side(), 3);
    /// assert!(grid.is_set(1, 0));
    /// ```
    pub fn from_pattern(rows: &[&str]) -> Self {
        let side = rows.len();
        assert!(side >= 1 && side <= MAX_SIDE, "shape side must be 1..=4");

        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), side, "shape pattern must be square");
            for (c, byte) in row.bytes().enumerate() {
                cells[r][c] = byte == b'X';
            }
        }

        Self {
            cells,
            side: side as u8,
        }
    }

    /// Side length of the square grid
    pub fn side(&self) -> usize {
        self.side as usize
    }

    /// Whether the grid cell at (row, col) is occupied.
    /// Coordinates outside the side are always unoccupied.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.side() && col < self.side() && self.cells[row][col]
    }

    /// Iterate the occupied (row, col) cells of the grid
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.side();
        (0..n)
            .flat_map(move |r| (0..n).map(move |c| (r, c)))
            .filter(|&(r, c)| self.cells[r][c])
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    /// 90-degree rotation: transpose, then reverse columns for clockwise or
    /// reverse rows for counter-clockwise. Valid because the grid is square.
    pub fn rotated(&self, spin: Spin) -> Self {
        let n = self.side();
        let mut out = Self {
            cells: [[false; MAX_SIDE]; MAX_SIDE],
            side: self.side,
        };

        for r in 0..n {
            for c in 0..n {
                out.cells[c][r] = self.cells[r][c];
            }
        }

        match spin {
            Spin::Clockwise => {
                for row in out.cells[..n].iter_mut() {
                    row[..n].reverse();
                }
            }
            Spin::CounterClockwise => {
                out.cells[..n].reverse();
            }
        }

        out
    }
}

/// The falling piece: an immutable kind, the current rotation's occupancy
/// grid, and the board coordinate (column, row) of grid cell [0][0].
///
/// A piece applies movement blindly; legality is entirely the board's
/// responsibility. It is owned by the board while falling and discarded
/// after its kind tag is copied into the cells on lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    grid: ShapeGrid,
    col: i8,
    row: i8,
}

impl Piece {
    /// Create a piece from a shape definition at the given spawn point.
    /// The grid and position are copied, never aliased.
    pub fn spawn(def: &ShapeDef, spawn_point: (i8, i8)) -> Self {
        Self {
            kind: def.kind,
            grid: def.grid,
            col: spawn_point.0,
            row: spawn_point.1,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> CellColor {
        self.kind.color()
    }

    pub fn grid(&self) -> &ShapeGrid {
        &self.grid
    }

    /// Board column of grid cell [0][0]
    pub fn column(&self) -> i8 {
        self.col
    }

    /// Board row of grid cell [0][0]
    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn position(&self) -> (i8, i8) {
        (self.col, self.row)
    }

    /// Add a delta to the position. No legality check here.
    pub fn translate(&mut self, d_col: i8, d_row: i8) {
        self.col += d_col;
        self.row += d_row;
    }

    /// Compute the rotated occupancy grid without mutating the piece.
    /// The caller validates it against the unchanged position before
    /// committing via [`Piece::set_grid`].
    pub fn rotated(&self, spin: Spin) -> ShapeGrid {
        self.grid.rotated(spin)
    }

    /// Commit a previously computed rotation
    pub fn set_grid(&mut self, grid: ShapeGrid) {
        debug_assert_eq!(grid.side(), self.grid.side());
        self.grid = grid;
    }
}
