//! Board, resolver, and line-clear tests through the public API

use tetris_engine::core::{can_place, shape, within_boundaries, Board};
use tetris_engine::error::EngineError;
use tetris_engine::types::{MoveDir, PieceKind, Spin, BOARD_COLUMNS, BOARD_ROWS};

fn fill_row_except(board: &mut Board, row: i8, gap_col: i8, kind: PieceKind) {
    for col in 0..BOARD_COLUMNS as i8 {
        if col != gap_col {
            board.set(col, row, Some(kind));
        }
    }
}

#[test]
fn test_new_board_dimensions_and_emptiness() {
    let board = Board::new();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 22);
    assert_eq!(board.visible_rows(), 20);
    assert!(board.current_piece().is_none());

    for row in 0..board.height() {
        for col in 0..board.width() {
            assert_eq!(board.cell_at(row, col), Ok(None));
        }
    }
}

#[test]
fn test_cell_at_out_of_bounds_is_an_error() {
    let board = Board::new();
    assert_eq!(
        board.cell_at(22, 0),
        Err(EngineError::CellOutOfBounds { row: 22, col: 0 })
    );
    assert_eq!(
        board.cell_at(0, 10),
        Err(EngineError::CellOutOfBounds { row: 0, col: 10 })
    );
}

#[test]
fn test_boundary_exhaustiveness_for_o_grid() {
    // Every placement of the 2x2 square that pokes outside the board must
    // fail; every placement inside must pass on an empty board.
    let board = Board::new();
    let grid = shape(PieceKind::O).grid;

    for col in -2..(BOARD_COLUMNS as i8 + 2) {
        for row in -2..(BOARD_ROWS as i8 + 2) {
            let inside = col >= 0
                && col + 1 < BOARD_COLUMNS as i8
                && row >= 0
                && row + 1 < BOARD_ROWS as i8;
            assert_eq!(within_boundaries(&grid, col, row), inside, "({col},{row})");
            assert_eq!(can_place(&grid, col, row, &board), inside, "({col},{row})");
        }
    }
}

#[test]
fn test_o_piece_falls_to_an_exact_floor_stop() {
    // O spawns with its 2x2 at rows 0..1; DOWN succeeds while the bottom
    // edge stays above row 21 and fails once it rests on the last row.
    let mut board = Board::new();
    assert!(board.try_spawn(PieceKind::O));

    let mut drops = 0;
    while board.try_move(MoveDir::Down) {
        drops += 1;
    }

    assert_eq!(drops, 20);
    let piece = board.current_piece().unwrap();
    assert_eq!(piece.row(), 20);
    // One more attempt still fails and moves nothing.
    assert!(!board.try_move(MoveDir::Down));
    assert_eq!(board.current_piece().unwrap().row(), 20);
}

#[test]
fn test_horizontal_moves_stop_at_the_walls() {
    let mut board = Board::new();
    assert!(board.try_spawn(PieceKind::O));

    let mut lefts = 0;
    while board.try_move(MoveDir::Left) {
        lefts += 1;
    }
    // O sits at columns 4..5; four steps reach the left wall.
    assert_eq!(lefts, 4);
    assert_eq!(board.current_piece().unwrap().column(), 0);

    let mut rights = 0;
    while board.try_move(MoveDir::Right) {
        rights += 1;
    }
    assert_eq!(rights, 8);
    assert_eq!(board.current_piece().unwrap().column(), 8);
}

#[test]
fn test_move_blocked_by_locked_cells() {
    let mut board = Board::new();
    board.set(3, 1, Some(PieceKind::Z));

    assert!(board.try_spawn(PieceKind::O));
    // O occupies columns 4..5 rows 0..1; (3, 1) blocks the step left.
    assert!(!board.try_move(MoveDir::Left));
    assert_eq!(board.current_piece().unwrap().position(), (4, 0));
    // The other directions stay open.
    assert!(board.try_move(MoveDir::Right));
    assert!(board.try_move(MoveDir::Down));
}

#[test]
fn test_rotation_blocked_by_the_stack_is_rejected_in_place() {
    let mut board = Board::new();
    assert!(board.try_spawn(PieceKind::T));
    let before = *board.current_piece().unwrap().grid();

    // T spawns with its top cell at (5, 0); occupy the cell its clockwise
    // rotation needs at (5, 2).
    board.set(5, 2, Some(PieceKind::I));
    assert!(!board.try_rotate(Spin::Clockwise));
    assert_eq!(board.current_piece().unwrap().grid(), &before);

    // Free the cell and the same rotation commits.
    board.set(5, 2, None);
    assert!(board.try_rotate(Spin::Clockwise));
    assert_ne!(board.current_piece().unwrap().grid(), &before);
}

#[test]
fn test_spawn_on_occupied_spawn_area_fails() {
    let mut board = Board::new();
    board.set(5, 1, Some(PieceKind::L));

    // T spawns over columns 4..6, rows 0..1, overlapping (5, 1).
    assert!(!board.try_spawn(PieceKind::T));
    assert!(board.current_piece().is_none());
}

#[test]
fn test_single_gap_landing_clears_two_rows() {
    // Bottom two rows full except column 4; an upright I dropped into the
    // gap completes both rows at once.
    let mut board = Board::new();
    fill_row_except(&mut board, 20, 4, PieceKind::J);
    fill_row_except(&mut board, 21, 4, PieceKind::L);

    assert!(board.try_spawn(PieceKind::I));
    assert!(board.try_rotate(Spin::Clockwise));
    // Upright I occupies grid column 2: shift the piece so it falls in
    // board column 4.
    assert!(board.try_move(MoveDir::Left));
    assert!(board.try_move(MoveDir::Left));

    while board.try_move(MoveDir::Down) {}
    board.lock_current_piece().unwrap();
    board.clear_current_piece();

    let cleared = board.clear_completed_lines();
    assert_eq!(cleared.len(), 2);
    assert_eq!(
        tetris_engine::core::score_delta(cleared.len()),
        Ok(300)
    );

    // The two I cells above the gap slid down onto the floor rows.
    assert_eq!(board.cell_at(20, 4), Ok(Some(PieceKind::I)));
    assert_eq!(board.cell_at(21, 4), Ok(Some(PieceKind::I)));
    // Everything the filler rows held is gone.
    assert_eq!(board.cell_at(20, 0), Ok(None));
    assert_eq!(board.cell_at(21, 9), Ok(None));
}

#[test]
fn test_clear_leaves_rows_below_untouched() {
    let mut board = Board::new();
    // Complete row 15; put a survivor pattern below it.
    for col in 0..BOARD_COLUMNS as i8 {
        board.set(col, 15, Some(PieceKind::S));
    }
    board.set(1, 18, Some(PieceKind::T));
    board.set(8, 21, Some(PieceKind::Z));

    let cleared = board.clear_completed_lines();
    assert_eq!(cleared.as_slice(), &[15]);
    assert_eq!(board.cell_at(18, 1), Ok(Some(PieceKind::T)));
    assert_eq!(board.cell_at(21, 8), Ok(Some(PieceKind::Z)));
}

#[test]
fn test_lock_requires_a_piece() {
    let mut board = Board::new();
    assert_eq!(board.lock_current_piece(), Err(EngineError::NoActivePiece));

    assert!(board.try_spawn(PieceKind::S));
    assert!(board.lock_current_piece().is_ok());
}
