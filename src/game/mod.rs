//! The game loop.
//!
//! Each turn the player to move asks its strategy for a roll count, the
//! count is clamped to `num_allowed_dice`, the dice are chosen by
//! `select_dice`, and the turn is scored with `take_turn`. The first player
//! to reach the goal wins.
//!
//! ## Usage
//!
//! ```
//! use hog_engine::dice::DiceBag;
//! use hog_engine::game::play;
//! use hog_engine::strategy::always_roll;
//!
//! let result = play(&always_roll(5), &always_roll(6), &mut DiceBag::new(7)).unwrap();
//! assert!(result.scores[result.winner] >= 100);
//! ```

mod engine;

pub use engine::{Game, GameResult, Phase, TurnRecord};

use crate::core::{HogConfig, Result};
use crate::dice::DiceSource;
use crate::rules::{Announcer, Silent};
use crate::strategy::Strategy;

/// Simulate a game to 100 and report the winner.
///
/// `strategy0` moves first.
pub fn play(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut dyn DiceSource,
) -> Result<GameResult> {
    play_with(&HogConfig::default(), strategy0, strategy1, dice)
}

/// Simulate a game under `config`, announcing rolls if commentary is on.
pub fn play_with(
    config: &HogConfig,
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut dyn DiceSource,
) -> Result<GameResult> {
    let mut game = Game::new(config.clone(), strategy0, strategy1);
    if config.commentary {
        game.run(dice, &mut Announcer)
    } else {
        game.run(dice, &mut Silent)
    }
}
