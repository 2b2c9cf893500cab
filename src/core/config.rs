//! Game and experiment configuration.
//!
//! - `HogConfig`: Goal score and commentary for a single game
//! - `ExperimentConfig`: Sample counts and baseline for win-rate estimates
//!
//! Both follow the same builder shape: `Default`, `new()` and `with_*`
//! setters, and both serialize so experiment runs can be recorded.

use serde::{Deserialize, Serialize};

/// The score that ends a game of Hog.
pub const GOAL: u32 = 100;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HogConfig {
    /// Score a player must reach to win.
    pub goal: u32,

    /// Announce every roll and every roll-count decision.
    pub commentary: bool,
}

impl Default for HogConfig {
    fn default() -> Self {
        Self {
            goal: GOAL,
            commentary: false,
        }
    }
}

impl HogConfig {
    /// Create a new config with the standard goal of 100.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal score.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }

    /// Enable or disable commentary.
    #[must_use]
    pub fn with_commentary(mut self, commentary: bool) -> Self {
        self.commentary = commentary;
        self
    }
}

/// Configuration for the experiment harness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Games simulated per orientation when estimating a win rate.
    pub num_samples: u32,

    /// Roll count of the `always_roll` baseline strategies are compared to.
    pub baseline_rolls: i32,

    /// Seed for the experiment RNG. Each game forks its own dice from it.
    pub seed: u64,

    /// Rules of the simulated games.
    pub game: HogConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            num_samples: 1000,
            baseline_rolls: 5,
            seed: 42,
            game: HogConfig::default(),
        }
    }
}

impl ExperimentConfig {
    /// Create a new config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games per orientation.
    #[must_use]
    pub fn with_num_samples(mut self, num_samples: u32) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Set the baseline roll count.
    #[must_use]
    pub fn with_baseline_rolls(mut self, rolls: i32) -> Self {
        self.baseline_rolls = rolls;
        self
    }

    /// Set the experiment seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the rules of the simulated games.
    #[must_use]
    pub fn with_game(mut self, game: HogConfig) -> Self {
        self.game = game;
        self
    }
}
