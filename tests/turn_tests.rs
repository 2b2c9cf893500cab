//! Turn scoring and rule resolution with scripted dice.

use hog_engine::core::{HogError, PlayerId};
use hog_engine::dice::{DiceKind, TestDice};
use hog_engine::rules::{
    free_bacon, num_allowed_dice, roll_dice, roll_dice_for, select_dice, take_turn, CommentaryEvent,
    Transcript,
};

fn dice(outcomes: &[u32]) -> TestDice {
    TestDice::new(outcomes.iter().copied()).unwrap()
}

// =============================================================================
// roll_dice
// =============================================================================

#[test]
fn test_first_two_rolls_total_ten() {
    assert_eq!(roll_dice(2, &mut dice(&[4, 6, 1])).unwrap(), 10);
}

#[test]
fn test_third_roll_pigs_out() {
    // A 1 on the last roll still caps the turn
    assert_eq!(roll_dice(3, &mut dice(&[4, 6, 1])).unwrap(), 1);
}

#[test]
fn test_first_roll_pigs_out() {
    // Rolls after the 1 do not add to it
    assert_eq!(roll_dice(3, &mut dice(&[1, 2, 3])).unwrap(), 1);
}

#[test]
fn test_scripted_dice_cycle_across_turns() {
    let mut scripted = dice(&[4, 6, 1]);
    assert_eq!(roll_dice(2, &mut scripted).unwrap(), 10);
    // Continues from the 1, then 4
    assert_eq!(roll_dice(2, &mut scripted).unwrap(), 1);
    // 6 then 1
    assert_eq!(roll_dice(2, &mut scripted).unwrap(), 1);
    assert_eq!(roll_dice(1, &mut scripted).unwrap(), 4);
}

#[test]
fn test_ten_dice_without_ones() {
    assert_eq!(roll_dice(10, &mut dice(&[6])).unwrap(), 60);
    assert_eq!(roll_dice(10, &mut dice(&[2, 3, 4])).unwrap(), 29);
}

#[test]
fn test_roll_dice_requires_a_roll() {
    assert!(matches!(roll_dice(0, &mut dice(&[5])), Err(HogError::InvalidArgument(_))));
}

#[test]
fn test_commentary_sees_every_roll() {
    let mut transcript = Transcript::new();
    let score = roll_dice_for(3, &mut dice(&[2, 5]), PlayerId::SECOND, &mut transcript).unwrap();

    assert_eq!(score, 9);
    assert_eq!(
        transcript.events,
        vec![
            CommentaryEvent::Rolled { who: PlayerId::SECOND, outcome: 2 },
            CommentaryEvent::Rolled { who: PlayerId::SECOND, outcome: 5 },
            CommentaryEvent::Rolled { who: PlayerId::SECOND, outcome: 2 },
        ]
    );
}

// =============================================================================
// take_turn
// =============================================================================

#[test]
fn test_take_turn_rolls() {
    assert_eq!(take_turn(2, 0, &mut dice(&[4, 6, 1])).unwrap(), 10);
    assert_eq!(take_turn(3, 20, &mut dice(&[4, 6, 1])).unwrap(), 1);
}

#[test]
fn test_take_turn_free_bacon() {
    let mut unused = dice(&[6]);
    assert_eq!(take_turn(0, 34, &mut unused).unwrap(), 4);
    assert_eq!(take_turn(0, 71, &mut unused).unwrap(), 8);
    assert_eq!(take_turn(0, 7, &mut unused).unwrap(), 1);
    assert_eq!(take_turn(0, 99, &mut unused).unwrap(), free_bacon(99));
}

#[test]
fn test_take_turn_negative() {
    assert!(matches!(
        take_turn(-2, 0, &mut dice(&[5])),
        Err(HogError::InvalidArgument(_))
    ));
}

// =============================================================================
// Rule resolution
// =============================================================================

#[test]
fn test_num_allowed_dice_examples() {
    assert_eq!(num_allowed_dice(1, 0), 10);
    assert_eq!(num_allowed_dice(5, 7), 10);
    assert_eq!(num_allowed_dice(7, 10), 1);
    assert_eq!(num_allowed_dice(3, 24), 1);
}

#[test]
fn test_select_dice_examples() {
    assert_eq!(select_dice(4, 24), DiceKind::FourSided);
    assert_eq!(select_dice(16, 64), DiceKind::SixSided);
}
