//! Fair dice backed by the deterministic RNG.

use crate::core::GameRng;

use super::{Dice, DiceKind, DiceSource};

/// A fair die with a fixed number of faces.
#[derive(Clone, Debug)]
pub struct FairDice {
    kind: DiceKind,
    rng: GameRng,
}

impl FairDice {
    /// Create a die of the given kind drawing from `rng`.
    pub fn new(kind: DiceKind, rng: GameRng) -> Self {
        Self { kind, rng }
    }

    /// A four-sided die.
    pub fn four_sided(seed: u64) -> Self {
        Self::new(DiceKind::FourSided, GameRng::new(seed))
    }

    /// A six-sided die.
    pub fn six_sided(seed: u64) -> Self {
        Self::new(DiceKind::SixSided, GameRng::new(seed))
    }

    /// Which kind of die this is.
    #[must_use]
    pub fn kind(&self) -> DiceKind {
        self.kind
    }
}

impl Dice for FairDice {
    fn roll(&mut self) -> u32 {
        self.rng.roll(self.kind.sides())
    }
}

/// One fair die of each kind, each on its own RNG stream.
#[derive(Clone, Debug)]
pub struct DiceBag {
    four: FairDice,
    six: FairDice,
}

impl DiceBag {
    /// Create a bag whose dice derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(&GameRng::new(seed))
    }

    /// Create a bag whose dice derive from an existing generator.
    pub fn from_rng(rng: &GameRng) -> Self {
        Self {
            four: FairDice::new(DiceKind::FourSided, rng.for_context("four-sided")),
            six: FairDice::new(DiceKind::SixSided, rng.for_context("six-sided")),
        }
    }
}

impl DiceSource for DiceBag {
    fn select(&mut self, kind: DiceKind) -> &mut dyn Dice {
        match kind {
            DiceKind::FourSided => &mut self.four,
            DiceKind::SixSided => &mut self.six,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fair_dice_range() {
        let mut four = FairDice::four_sided(1);
        let mut six = FairDice::six_sided(1);

        for _ in 0..200 {
            assert!((1..=4).contains(&four.roll()));
            assert!((1..=6).contains(&six.roll()));
        }
    }

    #[test]
    fn test_bag_selects_matching_kind() {
        let mut bag = DiceBag::new(42);

        let fours: Vec<_> = (0..200).map(|_| bag.select(DiceKind::FourSided).roll()).collect();
        assert!(fours.iter().all(|f| (1..=4).contains(f)));

        let sixes: Vec<_> = (0..200).map(|_| bag.select(DiceKind::SixSided).roll()).collect();
        assert!(sixes.iter().all(|f| (1..=6).contains(f)));
        assert!(sixes.iter().any(|&f| f > 4));
    }

    #[test]
    fn test_bag_is_deterministic() {
        let mut bag1 = DiceBag::new(9);
        let mut bag2 = DiceBag::new(9);

        for _ in 0..50 {
            assert_eq!(
                bag1.select(DiceKind::SixSided).roll(),
                bag2.select(DiceKind::SixSided).roll()
            );
        }
    }
}
