//! Shape catalog - the seven tetromino definitions
//!
//! One lookup table mapping kind -> (occupancy grid, color tag, pivot),
//! accessed by the [`PieceKind`] tag. Definitions are immutable; callers
//! receive copies. Random selection is uniform and independent per draw
//! (bag-less): consecutive duplicates are possible.

use crate::core::piece::ShapeGrid;
use crate::core::rng::SimpleRng;
use crate::types::{CellColor, PieceKind};

/// Number of piece kinds
pub const KIND_COUNT: usize = 7;

/// Immutable definition of one piece kind: default occupancy, display
/// color, and the pivot cell (row, column) kept as rotation-center
/// metadata. The rotation algorithm itself is fixed-origin and does not
/// consult the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub grid: ShapeGrid,
    pub color: CellColor,
    pub pivot: (u8, u8),
}

/// All seven kinds, in catalog order
pub fn all_kinds() -> [PieceKind; KIND_COUNT] {
    [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ]
}

/// Look up the immutable definition for a kind
pub fn shape(kind: PieceKind) -> ShapeDef {
    let (pattern, pivot): (&[&str], (u8, u8)) = match kind {
        PieceKind::I => (&["....", "XXXX", "....", "...."], (1, 1)),
        PieceKind::J => (&["X..", "XXX", "..."], (1, 1)),
        PieceKind::L => (&["..X", "XXX", "..."], (1, 1)),
        PieceKind::O => (&["XX", "XX"], (0, 0)),
        PieceKind::S => (&[".XX", "XX.", "..."], (1, 1)),
        PieceKind::T => (&[".X.", "XXX", "..."], (1, 1)),
        PieceKind::Z => (&["XX.", ".XX", "..."], (1, 1)),
    };

    ShapeDef {
        kind,
        grid: ShapeGrid::from_pattern(pattern),
        color: kind.color(),
        pivot,
    }
}

/// Draw one kind, uniformly distributed over the seven.
/// Independent sampling: repeats across consecutive draws are possible.
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    all_kinds()[rng.next_range(KIND_COUNT as u32) as usize]
}
