//! # hog-engine
//!
//! Turn-scoring and game-simulation engine for Hog, a two-player dice game
//! played to 100.
//!
//! ## Rules
//!
//! 1. **Pig Out**: a 1 anywhere in a turn scores the whole turn as 1.
//!
//! 2. **Free Bacon**: rolling zero dice scores one more than the opponent's
//!    tens digit.
//!
//! 3. **Swine Swap**: when the scores sum to a number ending in 7, at most
//!    one die may be rolled.
//!
//! 4. **Hog Wild**: when the scores sum to a multiple of 7, four-sided dice
//!    replace six-sided dice.
//!
//! ## Architecture
//!
//! - **Injected Dice**: all randomness comes from a `DiceSource`; scripted
//!   `TestDice` replay any game exactly.
//!
//! - **Strategies as Values**: a strategy maps both scores to an intended
//!   roll count. The game loop clamps it to the legal maximum.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `dice`: Fair and scripted dice
//! - `rules`: Turn scoring and per-turn rule resolution
//! - `game`: The two-player game loop
//! - `strategy`: Strategy trait and heuristic strategies
//! - `experiment`: Win-rate estimates and parameter sweeps

pub mod core;
pub mod dice;
pub mod rules;
pub mod game;
pub mod strategy;
pub mod experiment;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    HogConfig, ExperimentConfig, GOAL,
    HogError, Result,
};

pub use crate::dice::{Dice, DiceBag, DiceKind, DiceSource, FairDice, TestDice};

pub use crate::rules::{
    free_bacon, num_allowed_dice, roll_dice, select_dice, take_turn,
    Commentary, Announcer, Silent, TurnOutcome,
};

pub use crate::game::{play, play_with, Game, GameResult, Phase, TurnRecord};

pub use crate::strategy::{always_roll, final_strategy, AlwaysRoll, Strategy};

pub use crate::experiment::{
    compare_strategies, eval_strategy_range, make_average, run_experiments,
    Experiment, ExperimentKind, RangeReport,
};
