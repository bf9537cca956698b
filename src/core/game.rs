//! Game lifecycle - the outer state machine
//!
//! Sequences spawn -> fall/move/rotate -> lock -> clear -> respawn or end
//! over exactly one board. The game owns its board and sampler outright;
//! there is no process-wide instance. The external driver supplies the
//! cadence by calling [`Game::tick`]; the engine itself never reads a
//! clock.
//!
//! Phases: IDLE -> PLAYING <-> PAUSED, PLAYING -> GAME_OVER, and a start
//! from IDLE or GAME_OVER allocates a fresh board and score. Starting is
//! ignored while PLAYING or PAUSED; movement and rotation commands are
//! no-ops outside PLAYING.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::KindSampler;
use crate::core::scoring;
use crate::core::snapshot::GameSnapshot;
use crate::types::{GamePhase, MoveDir, Spin};

/// Result of the most recent lock, for drivers that display deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
}

/// A single game session: one board, one score, one phase
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    sampler: KindSampler,
    phase: GamePhase,
    score: u32,
    lines: u32,
    last_event: Option<LockEvent>,
}

impl Game {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            sampler: KindSampler::new(seed),
            phase: GamePhase::Idle,
            score: 0,
            lines: 0,
            last_event: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current sampler state (restarting from it replays the sequence)
    pub fn seed(&self) -> u32 {
        self.sampler.state()
    }

    /// Read-only board view
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only view of the falling piece, if any
    pub fn current_piece(&self) -> Option<&Piece> {
        self.board.current_piece()
    }

    /// Start a game: fresh board, score and lines zeroed, first piece
    /// spawned. Only IDLE and GAME_OVER accept a start; while PLAYING or
    /// PAUSED the call is ignored, so a mid-game start can never wipe a
    /// session. A blocked first spawn goes directly to GAME_OVER.
    pub fn start_game(&mut self) {
        if self.phase == GamePhase::Playing || self.phase == GamePhase::Paused {
            return;
        }

        self.board = Board::new();
        self.score = 0;
        self.lines = 0;
        self.last_event = None;

        self.phase = if self.board.try_spawn_new_piece(&mut self.sampler) {
            GamePhase::Playing
        } else {
            GamePhase::GameOver
        };
    }

    /// PLAYING -> PAUSED; no-op in any other phase
    pub fn pause_game(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    /// PAUSED -> PLAYING; no-op in any other phase
    pub fn resume_game(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
    }

    /// Move the falling piece. Rejected (false) outside PLAYING and when
    /// the target position is illegal.
    pub fn move_piece(&mut self, dir: MoveDir) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.board.try_move(dir)
    }

    /// Rotate the falling piece in place. Rejected (false) outside PLAYING
    /// and when the rotated grid does not fit at the current position.
    pub fn rotate_piece(&mut self, spin: Spin) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.board.try_rotate(spin)
    }

    /// One gravity step, driven externally. While PLAYING, attempts a DOWN
    /// move; when the piece can no longer fall it is locked, complete rows
    /// are cleared and scored, and the next piece spawns. A blocked spawn
    /// ends the game. Returns whether the board advanced.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        if self.board.try_move(MoveDir::Down) {
            return true;
        }

        self.lock_and_respawn();
        true
    }

    /// Take and clear the most recent lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Fill a caller-owned snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.board.current_piece().map(Into::into);
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.seed = self.sampler.state();
    }

    /// Snapshot of the full observable state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    fn lock_and_respawn(&mut self) {
        // tick only runs in PLAYING, which always has a piece; a failed
        // lock here would mean the phase machine was bypassed.
        let Ok(()) = self.board.lock_current_piece() else {
            return;
        };

        let cleared = self.board.clear_completed_lines().len();
        let delta = match cleared {
            0 => 0,
            // The clear pass is bounded by the piece height, so the score
            // table always covers it; a miss here is a broken invariant.
            n => {
                let delta = scoring::score_delta(n);
                debug_assert!(delta.is_ok(), "unscorable clear of {n} rows");
                delta.unwrap_or(0)
            }
        };

        self.score += delta;
        self.lines += cleared as u32;
        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            score_delta: delta,
        });

        self.board.clear_current_piece();
        if !self.board.try_spawn_new_piece(&mut self.sampler) {
            self.phase = GamePhase::GameOver;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
