//! Parameterized heuristic strategies.
//!
//! Each `make_*` factory takes the parameter the experiment harness sweeps
//! and returns a strategy value. Roll counts default to
//! `DEFAULT_NUM_ROLLS` and can be changed with `with_num_rolls`.

use crate::core::{Result, GOAL};
use crate::dice::DiceKind;
use crate::rules::{free_bacon, num_allowed_dice, select_dice};

use super::{signed, Strategy, DEFAULT_NUM_ROLLS};

/// Sum of both scores after taking Free Bacon.
fn bacon_total(score: u32, opponent_score: u32) -> u64 {
    u64::from(score) + u64::from(opponent_score) + u64::from(free_bacon(opponent_score))
}

/// Roll one extra die when trailing by at least `margin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComebackStrategy {
    pub margin: i32,
    pub num_rolls: i32,
}

impl ComebackStrategy {
    #[must_use]
    pub fn with_num_rolls(mut self, num_rolls: i32) -> Self {
        self.num_rolls = num_rolls;
        self
    }
}

impl Strategy for ComebackStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> Result<i32> {
        if signed(opponent_score) - signed(score) >= self.margin {
            Ok(self.num_rolls.saturating_add(1))
        } else {
            Ok(self.num_rolls)
        }
    }
}

/// Return a strategy that rolls one extra die when losing by `margin`.
#[must_use]
pub fn make_comeback_strategy(margin: i32) -> ComebackStrategy {
    ComebackStrategy {
        margin,
        num_rolls: DEFAULT_NUM_ROLLS,
    }
}

/// Roll one die fewer when leading by at least `margin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeadStrategy {
    pub margin: i32,
    pub num_rolls: i32,
}

impl LeadStrategy {
    #[must_use]
    pub fn with_num_rolls(mut self, num_rolls: i32) -> Self {
        self.num_rolls = num_rolls;
        self
    }
}

impl Strategy for LeadStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> Result<i32> {
        if signed(score) - signed(opponent_score) >= self.margin {
            Ok(self.num_rolls.saturating_sub(1))
        } else {
            Ok(self.num_rolls)
        }
    }
}

/// Return a strategy that plays safer when ahead by `margin`.
#[must_use]
pub fn make_lead_strategy(margin: i32) -> LeadStrategy {
    LeadStrategy {
        margin,
        num_rolls: DEFAULT_NUM_ROLLS,
    }
}

/// Roll one die fewer once within `delta` points of the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeltaStrategy {
    pub delta: i32,
    pub num_rolls: i32,
}

impl DeltaStrategy {
    #[must_use]
    pub fn with_num_rolls(mut self, num_rolls: i32) -> Self {
        self.num_rolls = num_rolls;
        self
    }
}

impl Strategy for DeltaStrategy {
    fn num_rolls(&self, score: u32, _opponent_score: u32) -> Result<i32> {
        if signed(GOAL) - signed(score) <= self.delta {
            Ok(self.num_rolls.saturating_sub(1))
        } else {
            Ok(self.num_rolls)
        }
    }
}

/// Return a strategy for when close to winning.
#[must_use]
pub fn make_delta_strategy(delta: i32) -> DeltaStrategy {
    DeltaStrategy {
        delta,
        num_rolls: DEFAULT_NUM_ROLLS,
    }
}

/// Roll zero dice when Free Bacon hands the opponent a bad turn.
///
/// Rolls 0 if Free Bacon scores at least `min_points` and lands the total on
/// a multiple of 7, or if it lands the total on a number ending in 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeanStrategy {
    pub min_points: u32,
    pub num_rolls: i32,
}

impl MeanStrategy {
    #[must_use]
    pub fn with_num_rolls(mut self, num_rolls: i32) -> Self {
        self.num_rolls = num_rolls;
        self
    }
}

impl Strategy for MeanStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> Result<i32> {
        let total = bacon_total(score, opponent_score);
        let hog_wild = free_bacon(opponent_score) >= self.min_points && total % 7 == 0;
        if hog_wild || total % 10 == 7 {
            Ok(0)
        } else {
            Ok(self.num_rolls)
        }
    }
}

/// Return a strategy that attempts to give the opponent problems.
#[must_use]
pub fn make_mean_strategy(min_points: i32) -> MeanStrategy {
    MeanStrategy {
        min_points: u32::try_from(min_points).unwrap_or(0),
        num_rolls: DEFAULT_NUM_ROLLS,
    }
}

/// Endgame-focused strategy: careful near the goal, aggressive when far
/// behind or far ahead.
///
/// `margin` is how far behind the player must be before rolling extra dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndgameStrategy {
    pub margin: i32,
}

impl EndgameStrategy {
    const BASE_ROLLS: i32 = 6;
    const NEAR_GOAL: i32 = 15;
    const FAR_AHEAD: i32 = -15;
    const BIG_BACON: u32 = 8;
}

impl Strategy for EndgameStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> Result<i32> {
        let bacon = free_bacon(opponent_score);
        let total = bacon_total(score, opponent_score);
        let to_goal = signed(GOAL) - signed(score);
        let behind = signed(opponent_score) - signed(score);
        let spoils = (bacon >= Self::BIG_BACON && total % 7 == 0) || total % 10 == 7;

        let rolls = if to_goal <= Self::NEAR_GOAL {
            if to_goal <= signed(bacon) || total % 7 == 0 || total % 10 == 7 {
                0
            } else {
                3
            }
        } else if behind >= self.margin {
            if spoils {
                0
            } else {
                Self::BASE_ROLLS.saturating_add(behind)
            }
        } else if behind < Self::FAR_AHEAD {
            if spoils {
                0
            } else {
                Self::BASE_ROLLS.saturating_sub(behind)
            }
        } else {
            Self::BASE_ROLLS
        };
        Ok(rolls)
    }
}

/// Return the endgame strategy, rolling extra once `margin` behind.
#[must_use]
pub fn make_final_strategy(margin: i32) -> EndgameStrategy {
    EndgameStrategy { margin }
}

/// The hand-tuned strategy.
///
/// Checks go from most specific to most general: take Free Bacon when it
/// wins the game or sets the opponent up for Hog Wild or Swine Swap, never
/// waste a turn under Swine Swap, play short on four-sided dice, and roll
/// more when the opponent is close to winning or ahead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinalStrategy;

impl FinalStrategy {
    const BASE_ROLLS: i32 = 6;
}

impl Strategy for FinalStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> Result<i32> {
        let bacon = free_bacon(opponent_score);
        let total = bacon_total(score, opponent_score);
        let to_goal = signed(GOAL) - signed(score);
        let opponent_to_goal = signed(GOAL) - signed(opponent_score);
        let behind = signed(opponent_score) - signed(score);
        let four_sided = select_dice(score, opponent_score) == DiceKind::FourSided;

        let rolls = if (bacon >= 4 && total % 7 == 0) || total % 10 == 7 {
            0
        } else if to_goal <= signed(bacon) {
            0
        } else if num_allowed_dice(score, opponent_score) == 1 {
            0
        } else if four_sided && to_goal <= 15 {
            0
        } else if four_sided {
            Self::BASE_ROLLS - 2
        } else if opponent_to_goal <= 10 && to_goal >= 30 {
            Self::BASE_ROLLS + 2
        } else if opponent_to_goal <= 30 && to_goal >= 60 {
            Self::BASE_ROLLS + 4
        } else if behind >= 8 {
            Self::BASE_ROLLS + 1
        } else {
            Self::BASE_ROLLS
        };
        Ok(rolls)
    }
}

/// Return the hand-tuned strategy.
#[must_use]
pub fn final_strategy() -> FinalStrategy {
    FinalStrategy
}
