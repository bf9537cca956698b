//! Read-only observation snapshots
//!
//! Renderers and drivers read the engine through value snapshots, never
//! through mutable references into the board. `snapshot_into` reuses
//! caller-owned storage so the observation path allocates nothing.

use crate::core::piece::{Piece, ShapeGrid};
use crate::types::{GamePhase, PieceKind, BOARD_COLUMNS, BOARD_ROWS};

/// Value copy of the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub grid: ShapeGrid,
    pub col: i8,
    pub row: i8,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            grid: *piece.grid(),
            col: piece.column(),
            row: piece.row(),
        }
    }
}

/// Full observable game state. The board grid is u8-encoded:
/// 0 = empty, 1..=7 = kind index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_COLUMNS]; BOARD_ROWS],
    pub active: Option<PieceSnapshot>,
    pub phase: GamePhase,
    pub score: u32,
    pub lines: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_COLUMNS]; BOARD_ROWS];
        self.active = None;
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.lines = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_COLUMNS]; BOARD_ROWS],
            active: None,
            phase: GamePhase::Idle,
            score: 0,
            lines: 0,
            seed: 0,
        }
    }
}
