//! Scripted dice for deterministic tests.

use crate::core::{HogError, Result};

use super::{Dice, DiceKind, DiceSource};

/// A die that returns fixed outcomes in order, starting over when exhausted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestDice {
    outcomes: Vec<u32>,
    index: usize,
}

impl TestDice {
    /// Create a scripted die.
    ///
    /// Fails with `InvalidArgument` if `outcomes` is empty or contains 0.
    pub fn new(outcomes: impl IntoIterator<Item = u32>) -> Result<Self> {
        let outcomes: Vec<u32> = outcomes.into_iter().collect();
        if outcomes.is_empty() {
            return Err(HogError::invalid_argument("test dice need at least one outcome"));
        }
        if outcomes.contains(&0) {
            return Err(HogError::invalid_argument("dice faces start at 1"));
        }
        Ok(Self { outcomes, index: 0 })
    }

    /// The scripted outcomes.
    #[must_use]
    pub fn outcomes(&self) -> &[u32] {
        &self.outcomes
    }
}

impl Dice for TestDice {
    fn roll(&mut self) -> u32 {
        let outcome = self.outcomes[self.index];
        self.index = (self.index + 1) % self.outcomes.len();
        outcome
    }
}

impl DiceSource for TestDice {
    fn select(&mut self, _kind: DiceKind) -> &mut dyn Dice {
        self
    }
}
