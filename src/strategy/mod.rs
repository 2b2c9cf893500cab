//! Strategies: how many dice to roll given both scores.
//!
//! A strategy sees `(score, opponent_score)` for the player about to move and
//! returns an intended roll count. The count is not clamped here; the game
//! loop limits it to what the rules allow and rejects negative counts.
//!
//! ## Usage
//!
//! ```
//! use hog_engine::strategy::{always_roll, make_comeback_strategy, Strategy};
//!
//! let basic = always_roll(5);
//! assert_eq!(basic.num_rolls(0, 0).unwrap(), 5);
//! assert_eq!(basic.num_rolls(99, 99).unwrap(), 5);
//!
//! // Roll one extra die when trailing by 10 or more
//! let comeback = make_comeback_strategy(10);
//! assert_eq!(comeback.num_rolls(20, 35).unwrap(), 6);
//!
//! // Closures work too
//! let greedy = |score: u32, _opponent: u32| if score > 90 { 1 } else { 8 };
//! assert_eq!(greedy.num_rolls(95, 0).unwrap(), 1);
//! ```

mod heuristics;
mod interactive;

pub use heuristics::{
    final_strategy, make_comeback_strategy, make_delta_strategy, make_final_strategy,
    make_lead_strategy, make_mean_strategy, ComebackStrategy, DeltaStrategy, EndgameStrategy,
    FinalStrategy, LeadStrategy, MeanStrategy,
};
pub use interactive::InteractiveStrategy;

use crate::core::Result;

/// Roll count most heuristics fall back to.
pub const DEFAULT_NUM_ROLLS: i32 = 5;

/// Chooses a roll count for the player about to move.
pub trait Strategy {
    /// Intended number of dice for a player at `score` facing `opponent_score`.
    ///
    /// Only strategies that perform I/O can fail.
    fn num_rolls(&self, score: u32, opponent_score: u32) -> Result<i32>;
}

impl<F> Strategy for F
where
    F: Fn(u32, u32) -> i32,
{
    fn num_rolls(&self, score: u32, opponent_score: u32) -> Result<i32> {
        Ok(self(score, opponent_score))
    }
}

/// A strategy that always rolls the same number of dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlwaysRoll(pub i32);

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> Result<i32> {
        Ok(self.0)
    }
}

/// Return a strategy that always rolls `n` dice.
#[must_use]
pub fn always_roll(n: i32) -> AlwaysRoll {
    AlwaysRoll(n)
}

/// Scores as signed values for margin arithmetic.
pub(crate) fn signed(score: u32) -> i32 {
    i32::try_from(score).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_roll() {
        let strategy = always_roll(5);
        assert_eq!(strategy.num_rolls(0, 0).unwrap(), 5);
        assert_eq!(strategy.num_rolls(99, 99).unwrap(), 5);
        assert_eq!(always_roll(0).num_rolls(12, 40).unwrap(), 0);
    }

    #[test]
    fn test_closure_strategy() {
        let strategy = |score: u32, opponent_score: u32| {
            if score < opponent_score {
                7
            } else {
                3
            }
        };
        assert_eq!(strategy.num_rolls(10, 20).unwrap(), 7);
        assert_eq!(strategy.num_rolls(20, 10).unwrap(), 3);
    }

    #[test]
    fn test_dyn_strategy() {
        let strategies: Vec<Box<dyn Strategy>> = vec![Box::new(always_roll(2)), Box::new(always_roll(9))];
        let rolls: Vec<_> = strategies
            .iter()
            .map(|s| s.num_rolls(0, 0).unwrap())
            .collect();
        assert_eq!(rolls, vec![2, 9]);
    }
}
