//! Scoring module - points per clear pass
//!
//! A table rather than a formula, mirroring the classic curve that rewards
//! multi-line clears disproportionately. A single lock can complete at most
//! four rows, so any other count is a defensive error.

use crate::error::EngineError;

/// Points awarded per lines cleared in one pass (index = lines)
const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Score delta for a clear pass of `lines` rows (1..=4)
pub fn score_delta(lines: usize) -> Result<u32, EngineError> {
    match lines {
        1..=4 => Ok(LINE_SCORES[lines]),
        other => Err(EngineError::InvalidClearCount(other)),
    }
}
