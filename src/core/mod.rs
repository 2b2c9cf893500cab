//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the dice, rules, game loop and
//! experiment harness.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{ExperimentConfig, HogConfig, GOAL};
pub use error::{HogError, Result};
