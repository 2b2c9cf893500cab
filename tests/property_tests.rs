//! Property-based tests for the scoring rules and the game loop.

use proptest::prelude::*;

use hog_engine::dice::{DiceBag, DiceKind, TestDice};
use hog_engine::game::play;
use hog_engine::rules::{num_allowed_dice, roll_dice, select_dice, take_turn};
use hog_engine::strategy::{always_roll, final_strategy, make_mean_strategy, Strategy as _};

/// A scripted roll sequence with no ones.
fn no_ones(len: impl Into<prop::collection::SizeRange>) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(2..=6u32, len)
}

proptest! {
    // 1. Without a 1 the turn scores the sum of the dice
    #[test]
    fn sum_without_ones(rolls in no_ones(1..=10)) {
        let mut dice = TestDice::new(rolls.clone()).unwrap();
        let expected: u32 = rolls.iter().sum();
        prop_assert_eq!(roll_dice(rolls.len() as i32, &mut dice).unwrap(), expected);
    }

    // 2. A single 1 anywhere caps the turn at 1
    #[test]
    fn any_one_scores_one(rolls in no_ones(1..=10), position in 0..10usize) {
        let mut rolls = rolls;
        let position = position % rolls.len();
        rolls[position] = 1;

        let mut dice = TestDice::new(rolls.clone()).unwrap();
        prop_assert_eq!(roll_dice(rolls.len() as i32, &mut dice).unwrap(), 1);
    }

    // 3. Free Bacon is the tens digit plus one
    #[test]
    fn free_bacon(opponent in 0..1000u32) {
        let mut dice = TestDice::new([6]).unwrap();
        prop_assert_eq!(take_turn(0, opponent, &mut dice).unwrap(), opponent / 10 + 1);
    }

    // 4. Swine Swap exactly when the sum ends in 7
    #[test]
    fn swine_swap(score in 0..200u32, opponent in 0..200u32) {
        let allowed = num_allowed_dice(score, opponent);
        if (score + opponent) % 10 == 7 {
            prop_assert_eq!(allowed, 1);
        } else {
            prop_assert_eq!(allowed, 10);
        }
    }

    // 5. Hog Wild exactly when the sum is a multiple of 7
    #[test]
    fn hog_wild(score in 0..200u32, opponent in 0..200u32) {
        let expected = if (score + opponent) % 7 == 0 {
            DiceKind::FourSided
        } else {
            DiceKind::SixSided
        };
        prop_assert_eq!(select_dice(score, opponent), expected);
    }

    // 6. Strategies answer the same question the same way
    #[test]
    fn strategies_are_stable(score in 0..100u32, opponent in 0..100u32, min_points in 0..10i32) {
        let mean = make_mean_strategy(min_points);
        prop_assert_eq!(mean.num_rolls(score, opponent).unwrap(), mean.num_rolls(score, opponent).unwrap());
        let tuned = final_strategy();
        prop_assert_eq!(tuned.num_rolls(score, opponent).unwrap(), tuned.num_rolls(score, opponent).unwrap());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // 7. Every game ends with exactly one player at the goal
    #[test]
    fn one_winner(seed in any::<u64>(), rolls0 in 0..=12i32, rolls1 in 0..=12i32) {
        let result = play(&always_roll(rolls0), &always_roll(rolls1), &mut DiceBag::new(seed)).unwrap();
        prop_assert!(result.scores[result.winner] >= 100);
        prop_assert!(result.scores[result.winner.other()] < 100);
    }
}
