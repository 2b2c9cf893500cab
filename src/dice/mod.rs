//! Dice: the only source of randomness in a game.
//!
//! - `Dice`: anything that produces a face value on each call
//! - `FairDice`: a four- or six-sided die backed by `GameRng`
//! - `TestDice`: a scripted die cycling through fixed outcomes
//! - `DiceSource`: hands out the die the rules select for a turn
//!
//! ## Usage
//!
//! ```
//! use hog_engine::dice::{Dice, DiceBag, DiceKind, DiceSource, TestDice};
//!
//! let mut bag = DiceBag::new(42);
//! let face = bag.select(DiceKind::FourSided).roll();
//! assert!((1..=4).contains(&face));
//!
//! let mut scripted = TestDice::new([4, 6, 1]).unwrap();
//! let faces: Vec<_> = (0..4).map(|_| scripted.roll()).collect();
//! assert_eq!(faces, vec![4, 6, 1, 4]);
//! ```

mod fair;
mod scripted;

pub use fair::{DiceBag, FairDice};
pub use scripted::TestDice;

use serde::{Deserialize, Serialize};

/// A die: returns a face value each time it is rolled.
pub trait Dice {
    /// Roll once.
    fn roll(&mut self) -> u32;
}

impl<F> Dice for F
where
    F: FnMut() -> u32,
{
    fn roll(&mut self) -> u32 {
        self()
    }
}

/// Which die the rules put in play for a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceKind {
    /// Faces 1..=4, used under Hog Wild.
    FourSided,
    /// Faces 1..=6.
    SixSided,
}

impl DiceKind {
    /// Number of faces.
    #[must_use]
    pub const fn sides(self) -> u32 {
        match self {
            DiceKind::FourSided => 4,
            DiceKind::SixSided => 6,
        }
    }
}

impl std::fmt::Display for DiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-sided", self.sides())
    }
}

/// Supplies the die selected for a turn.
///
/// The game loop asks for a die by kind every turn; implementations decide
/// what backs it. Scripted dice ignore the kind so tests can fix every roll.
pub trait DiceSource {
    /// Get the die to roll this turn.
    fn select(&mut self, kind: DiceKind) -> &mut dyn Dice;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_kind_sides() {
        assert_eq!(DiceKind::FourSided.sides(), 4);
        assert_eq!(DiceKind::SixSided.sides(), 6);
        assert_eq!(format!("{}", DiceKind::FourSided), "4-sided");
    }

    #[test]
    fn test_closure_is_dice() {
        let mut next = 0;
        let mut counting = || {
            next += 1;
            next
        };

        assert_eq!(Dice::roll(&mut counting), 1);
        assert_eq!(Dice::roll(&mut counting), 2);
    }
}
