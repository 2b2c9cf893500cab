//! Per-turn rule resolution from both players' scores.
//!
//! - Swine Swap: when the scores sum to a number ending in 7, only one die
//!   may be rolled.
//! - Hog Wild: when the scores sum to a multiple of 7, four-sided dice are
//!   used.

use crate::dice::DiceKind;

/// Dice allowed on an ordinary turn.
pub const MAX_DICE: u32 = 10;

/// Dice allowed under Swine Swap.
pub const SWINE_SWAP_MAX_DICE: u32 = 1;

/// Sum of both scores, widened so it cannot overflow.
const fn combined(score: u32, opponent_score: u32) -> u64 {
    score as u64 + opponent_score as u64
}

/// Maximum number of dice the current player may roll this turn.
///
/// ```
/// use hog_engine::rules::num_allowed_dice;
///
/// assert_eq!(num_allowed_dice(1, 0), 10);
/// assert_eq!(num_allowed_dice(5, 7), 10);
/// assert_eq!(num_allowed_dice(7, 10), 1);
/// assert_eq!(num_allowed_dice(3, 24), 1);
/// ```
#[must_use]
pub const fn num_allowed_dice(score: u32, opponent_score: u32) -> u32 {
    if combined(score, opponent_score) % 10 == 7 {
        SWINE_SWAP_MAX_DICE
    } else {
        MAX_DICE
    }
}

/// Dice in play this turn: four-sided if the scores sum to a multiple of 7.
///
/// ```
/// use hog_engine::dice::DiceKind;
/// use hog_engine::rules::select_dice;
///
/// assert_eq!(select_dice(4, 24), DiceKind::FourSided);
/// assert_eq!(select_dice(16, 64), DiceKind::SixSided);
/// ```
#[must_use]
pub const fn select_dice(score: u32, opponent_score: u32) -> DiceKind {
    if combined(score, opponent_score) % 7 == 0 {
        DiceKind::FourSided
    } else {
        DiceKind::SixSided
    }
}
