//! Headless falling-block puzzle engine.
//!
//! Owns a 22x10 board (bottom 20 rows visible), spawns tetromino pieces,
//! resolves movement and rotation against boundaries and locked cells,
//! locks pieces, clears completed rows, tracks score, and runs the
//! idle/playing/paused/over lifecycle. Rendering, input wiring, and the
//! timer that drives [`core::Game::tick`] live outside this crate.

pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{Board, Game, GameSnapshot, KindSampler, Piece, ShapeGrid};
pub use crate::error::EngineError;
pub use crate::types::{Cell, CellColor, GamePhase, MoveDir, PieceKind, Spin};
