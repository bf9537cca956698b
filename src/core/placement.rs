//! Collision/boundary resolver - pure legality checks
//!
//! Given a candidate occupancy grid and a board position for its [0][0]
//! cell, these functions decide whether the placement is legal. They never
//! mutate anything; the board calls them before committing a move,
//! rotation, or spawn.

use crate::core::board::Board;
use crate::core::piece::ShapeGrid;
use crate::types::{BOARD_COLUMNS, BOARD_ROWS};

/// Every occupied cell of `grid`, placed with its [0][0] at
/// (`col`, `row`), must land inside [0, columns) x [0, rows).
pub fn within_boundaries(grid: &ShapeGrid, col: i8, row: i8) -> bool {
    grid.occupied().all(|(r, c)| {
        let board_col = col as i32 + c as i32;
        let board_row = row as i32 + r as i32;
        board_col >= 0
            && board_col < BOARD_COLUMNS as i32
            && board_row >= 0
            && board_row < BOARD_ROWS as i32
    })
}

/// True if any occupied cell of the candidate overlaps a locked board cell.
/// Cells falling outside the board do not count as collisions here; the
/// boundary check covers those.
pub fn collides_with_locked(grid: &ShapeGrid, col: i8, row: i8, board: &Board) -> bool {
    grid.occupied().any(|(r, c)| {
        matches!(
            board.get(col + c as i8, row + r as i8),
            Some(Some(_))
        )
    })
}

/// The single legality predicate shared by move, rotation, and spawn
/// validation.
pub fn can_place(grid: &ShapeGrid, col: i8, row: i8, board: &Board) -> bool {
    within_boundaries(grid, col, row) && !collides_with_locked(grid, col, row, board)
}
