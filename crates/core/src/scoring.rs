//! Scoring module - line clear points, combos and level progression
//!
//! - Line clears use the escalating table in [`LINE_SCORES`], scaled by level.
//! - Combo `n` (the n-th consecutive clearing lock after the first) adds
//!   `COMBO_BONUS * n * level`. The first clear of a streak is combo 0.
//! - Level grows with total lines and never decreases.

use crate::types::{COMBO_BONUS, DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, LINE_SCORES};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Base points for the rows removed
    pub line_clear_score: u32,
    /// Combo bonus added on top of `line_clear_score`
    pub combo_bonus: u32,
    pub total: u32,
}

/// Points for clearing `lines` rows at once (1-4)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Bonus for a combo streak; 0 for the first clear
pub fn calculate_combo_bonus(combo: u32, level: u32) -> u32 {
    COMBO_BONUS.saturating_mul(combo).saturating_mul(level)
}

/// Calculate complete score for a line clear
pub fn calculate_score(lines: usize, level: u32, combo: u32) -> ScoreResult {
    let line_clear_score = calculate_line_score(lines, level);
    let combo_bonus = if line_clear_score > 0 {
        calculate_combo_bonus(combo, level)
    } else {
        0
    };
    ScoreResult {
        line_clear_score,
        combo_bonus,
        total: line_clear_score.saturating_add(combo_bonus),
    }
}

/// Level for a running line total
pub fn calculate_level(total_lines: u32, start_level: u32, lines_per_level: u32) -> u32 {
    start_level.saturating_add(total_lines / lines_per_level.max(1))
}

/// Get drop interval for a level (in milliseconds)
///
/// Level 1 is the slowest; past the table the interval stays at the floor.
pub fn drop_interval_ms(level: u32) -> u32 {
    let idx = level.saturating_sub(1) as usize;
    DROP_INTERVALS
        .get(idx)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}

/// Popup text describing a clear, e.g. `DOUBLE` or `TETRIS! · COMBO x2`
pub fn combo_message(lines: usize, combo: u32) -> String {
    let name = match lines {
        1 => "SINGLE",
        2 => "DOUBLE",
        3 => "TRIPLE",
        _ => "TETRIS!",
    };
    if combo > 0 {
        format!("{name} · COMBO x{combo}")
    } else {
        name.to_string()
    }
}
