//! Shared types and constants for the engine
//!
//! Pure data types with no behavior beyond small conversions. Board
//! dimensions and the spawn point live here so every component agrees on
//! the coordinate system: (column, row) with columns running left to right
//! and rows top to bottom.

/// Board dimensions. The bottom [`VISIBLE_ROWS`] rows are shown to the
/// player; the top two rows are a hidden spawn buffer.
pub const BOARD_COLUMNS: usize = 10;
pub const BOARD_ROWS: usize = 22;
pub const VISIBLE_ROWS: usize = 20;
pub const HIDDEN_ROWS: usize = BOARD_ROWS - VISIBLE_ROWS;

/// Board coordinate where new pieces appear: grid cell [0][0] of the
/// spawned piece lands here.
pub const SPAWN_COLUMN: i8 = (BOARD_COLUMNS / 2 - 1) as i8;
pub const SPAWN_ROW: i8 = 0;

/// Suggested interval between automatic falls, in milliseconds. The engine
/// never reads a clock; this is metadata for the external tick driver.
pub const FALL_INTERVAL_MS: u32 = 1600;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Display color tag for this kind. The mapping is fixed: locked cells
    /// store only the kind tag, and collaborators recover the color here.
    pub fn color(self) -> CellColor {
        match self {
            PieceKind::I => CellColor::Cyan,
            PieceKind::J => CellColor::Blue,
            PieceKind::L => CellColor::Orange,
            PieceKind::O => CellColor::Yellow,
            PieceKind::S => CellColor::Green,
            PieceKind::T => CellColor::Magenta,
            PieceKind::Z => CellColor::Red,
        }
    }

    /// Strict 1..=7 id used for u8 grid encoding (0 = empty).
    pub fn index(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// The seven color tags a locked cell can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Cyan,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
    Magenta,
}

/// Cell on the board (None = empty, Some = locked piece kind)
pub type Cell = Option<PieceKind>;

/// Movement directions a piece can be asked to take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Down,
    Left,
    Right,
}

impl MoveDir {
    /// (delta column, delta row) for this direction
    pub fn delta(self) -> (i8, i8) {
        match self {
            MoveDir::Down => (0, 1),
            MoveDir::Left => (-1, 0),
            MoveDir::Right => (1, 0),
        }
    }
}

/// Rotation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// Game lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Playing,
    Paused,
    GameOver,
}
