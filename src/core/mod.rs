//! Core module - the whole headless engine
//!
//! Pure game rules and state: no UI, no I/O, no clocks. The external
//! driver (timer plus input wiring) serializes calls into [`Game`].

pub mod board;
pub mod catalog;
pub mod game;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use board::Board;
pub use catalog::{all_kinds, random_kind, shape, ShapeDef, KIND_COUNT};
pub use game::{Game, LockEvent};
pub use piece::{Piece, ShapeGrid};
pub use placement::{can_place, collides_with_locked, within_boundaries};
pub use rng::{KindSampler, SimpleRng};
pub use scoring::score_delta;
pub use snapshot::{GameSnapshot, PieceSnapshot};
