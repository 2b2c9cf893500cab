//! Turn scoring.
//!
//! - `roll_dice`: score `num_rolls` dice under the Pig Out rule
//! - `take_turn`: a whole turn, including Free Bacon for zero dice
//!
//! The `_for` variants name the player and report to a `Commentary`.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{HogError, PlayerId, Result};
use crate::dice::Dice;

use super::commentary::{Commentary, Silent};
use super::resolver::MAX_DICE;

/// Faces rolled in one turn, stored inline up to the dice limit.
pub type Rolls = SmallVec<[u32; MAX_DICE as usize]>;

/// Result of a resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Points scored this turn.
    pub score: u32,
    /// Faces rolled, in order. Empty for Free Bacon.
    pub rolls: Rolls,
}

impl TurnOutcome {
    /// Did the turn Pig Out?
    #[must_use]
    pub fn pigged_out(&self) -> bool {
        self.rolls.contains(&1)
    }
}

/// Points scored by rolling zero dice: one more than the opponent's tens digit.
///
/// ```
/// use hog_engine::rules::free_bacon;
///
/// assert_eq!(free_bacon(34), 4);
/// assert_eq!(free_bacon(7), 1);
/// ```
#[must_use]
pub const fn free_bacon(opponent_score: u32) -> u32 {
    opponent_score / 10 + 1
}

/// Score a turn of `num_rolls` dice.
///
/// A 1 anywhere in the turn scores exactly 1 for the whole turn; otherwise the
/// turn scores the sum of the dice. Fails with `InvalidArgument` unless
/// `num_rolls` is positive.
pub fn roll_dice(num_rolls: i32, dice: &mut dyn Dice) -> Result<u32> {
    roll_dice_for(num_rolls, dice, PlayerId::FIRST, &mut Silent)
}

/// `roll_dice` on behalf of `who`, announcing each roll.
pub fn roll_dice_for(
    num_rolls: i32,
    dice: &mut dyn Dice,
    who: PlayerId,
    commentary: &mut dyn Commentary,
) -> Result<u32> {
    score_rolls(num_rolls, dice, who, commentary, None)
}

/// Score a turn in which the player chooses to roll `num_rolls` dice, perhaps 0.
///
/// Fails with `InvalidArgument` if `num_rolls` is negative.
pub fn take_turn(num_rolls: i32, opponent_score: u32, dice: &mut dyn Dice) -> Result<u32> {
    resolve_turn(num_rolls, opponent_score, dice, PlayerId::FIRST, &mut Silent, None)
}

/// `take_turn` on behalf of `who`, keeping the rolled faces.
pub fn take_turn_for(
    num_rolls: i32,
    opponent_score: u32,
    dice: &mut dyn Dice,
    who: PlayerId,
    commentary: &mut dyn Commentary,
) -> Result<TurnOutcome> {
    let mut rolls = Rolls::new();
    let score = resolve_turn(num_rolls, opponent_score, dice, who, commentary, Some(&mut rolls))?;
    Ok(TurnOutcome { score, rolls })
}

fn resolve_turn(
    num_rolls: i32,
    opponent_score: u32,
    dice: &mut dyn Dice,
    who: PlayerId,
    commentary: &mut dyn Commentary,
    faces: Option<&mut Rolls>,
) -> Result<u32> {
    let count = u32::try_from(num_rolls).map_err(|_| {
        HogError::invalid_argument(format!("cannot roll a negative number of dice: {num_rolls}"))
    })?;
    commentary.rolling(who, count);

    if count == 0 {
        return Ok(free_bacon(opponent_score));
    }
    score_rolls(num_rolls, dice, who, commentary, faces)
}

/// Roll `num_rolls` dice, pushing each face into `faces` when given.
fn score_rolls(
    num_rolls: i32,
    dice: &mut dyn Dice,
    who: PlayerId,
    commentary: &mut dyn Commentary,
    mut faces: Option<&mut Rolls>,
) -> Result<u32> {
    if num_rolls <= 0 {
        return Err(HogError::invalid_argument(format!(
            "must roll at least once, got {num_rolls}"
        )));
    }

    let mut score: u32 = 0;
    for _ in 0..num_rolls {
        let outcome = dice.roll();
        score = match (outcome, score) {
            // Pig Out pins the turn at 1
            (1, _) | (_, 1) => 1,
            (face, total) => total.saturating_add(face),
        };
        trace!(player = who.0, outcome, score, "roll");
        commentary.rolled(who, outcome);
        if let Some(faces) = &mut faces {
            faces.push(outcome);
        }
    }

    Ok(score)
}
