//! Experiment harness: estimate win rates and search strategy parameters.
//!
//! ## Overview
//!
//! - **make_average**: Mean of repeated evaluations of a function
//! - **Experiment**: Plays seeded games between strategies
//! - **compare_strategies**: Win rate against a baseline, averaged over
//!   moving first and moving second
//! - **eval_strategy_range**: Best parameter for a strategy factory
//! - **run_experiments**: The standard battery of parameter sweeps
//!
//! Every simulated game draws its dice from a fork of the experiment RNG, so
//! a run is reproducible from `ExperimentConfig::seed`.
//!
//! ## Usage
//!
//! ```
//! use hog_engine::core::ExperimentConfig;
//! use hog_engine::experiment::Experiment;
//! use hog_engine::strategy::{always_roll, make_comeback_strategy};
//!
//! let config = ExperimentConfig::new().with_num_samples(20);
//! let mut experiment = Experiment::new(config);
//!
//! let rate = experiment.compare_strategies(&always_roll(6), &always_roll(5)).unwrap();
//! assert!((0.0..=1.0).contains(&rate));
//!
//! let report = experiment.eval_strategy_range(make_comeback_strategy, 5, 7).unwrap();
//! assert_eq!(report.win_rates.len(), 3);
//! ```

mod battery;

pub use battery::{run_experiments, ExperimentKind};

use tracing::info;

use crate::core::{ExperimentConfig, GameRng, HogError, PlayerId, Result};
use crate::dice::DiceBag;
use crate::game::{play_with, GameResult};
use crate::strategy::{always_roll, Strategy};

/// Return a function that evaluates `f` `num_samples` times and averages.
///
/// ```
/// use hog_engine::dice::{Dice, TestDice};
/// use hog_engine::experiment::make_average;
///
/// let mut dice = TestDice::new([3, 1, 5, 6]).unwrap();
/// let mut avg_dice = make_average(move || Ok(f64::from(dice.roll())), 1000);
/// assert_eq!(avg_dice().unwrap(), 3.75);
/// ```
pub fn make_average<F>(mut f: F, num_samples: u32) -> impl FnMut() -> Result<f64>
where
    F: FnMut() -> Result<f64>,
{
    move || {
        if num_samples == 0 {
            return Err(HogError::invalid_argument("cannot average zero samples"));
        }
        let mut total = 0.0;
        for _ in 0..num_samples {
            total += f()?;
        }
        Ok(total / f64::from(num_samples))
    }
}

/// Win rates for every parameter in a sweep, and the best one.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeReport {
    /// Parameter with the strictly highest win rate, first seen on ties.
    /// 0 if no parameter won a single game.
    pub best: i32,
    /// Win rate of `best`.
    pub best_win_rate: f64,
    /// `(parameter, win rate)` in sweep order.
    pub win_rates: Vec<(i32, f64)>,
}

impl RangeReport {
    /// Build a report from sweep results.
    pub fn from_win_rates(win_rates: Vec<(i32, f64)>) -> Self {
        let (mut best, mut best_win_rate) = (0, 0.0);
        for &(value, win_rate) in &win_rates {
            if win_rate > best_win_rate {
                best = value;
                best_win_rate = win_rate;
            }
        }
        Self {
            best,
            best_win_rate,
            win_rates,
        }
    }
}

/// Plays seeded games between strategies.
#[derive(Clone, Debug)]
pub struct Experiment {
    config: ExperimentConfig,
    rng: GameRng,
}

impl Experiment {
    /// Create an experiment seeded from `config.seed`.
    pub fn new(config: ExperimentConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// The experiment configuration.
    #[must_use]
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Play one game on freshly forked dice.
    pub fn play(&mut self, strategy0: &dyn Strategy, strategy1: &dyn Strategy) -> Result<GameResult> {
        let mut dice = DiceBag::from_rng(&self.rng.fork());
        play_with(&self.config.game, strategy0, strategy1, &mut dice)
    }

    /// Fraction of `num_samples` games that `seat` wins.
    pub fn win_rate(
        &mut self,
        strategy0: &dyn Strategy,
        strategy1: &dyn Strategy,
        seat: PlayerId,
    ) -> Result<f64> {
        let num_samples = self.config.num_samples;
        let mut average = make_average(
            || {
                let result = self.play(strategy0, strategy1)?;
                Ok(if result.is_winner(seat) { 1.0 } else { 0.0 })
            },
            num_samples,
        );
        average()
    }

    /// Average win rate of `strategy` against `baseline`, moving first and
    /// moving second.
    pub fn compare_strategies(&mut self, strategy: &dyn Strategy, baseline: &dyn Strategy) -> Result<f64> {
        let as_first = self.win_rate(strategy, baseline, PlayerId::FIRST)?;
        let as_second = self.win_rate(baseline, strategy, PlayerId::SECOND)?;
        Ok((as_first + as_second) / 2.0)
    }

    /// Find the best parameter in `lower..=upper` for `make_strategy`
    /// against the always-roll baseline.
    pub fn eval_strategy_range<S, F>(&mut self, make_strategy: F, lower: i32, upper: i32) -> Result<RangeReport>
    where
        S: Strategy,
        F: Fn(i32) -> S,
    {
        if lower > upper {
            return Err(HogError::invalid_argument(format!(
                "empty parameter range {lower}..={upper}"
            )));
        }

        let baseline = always_roll(self.config.baseline_rolls);
        let win_rates = (lower..=upper)
            .map(|value| -> Result<(i32, f64)> {
                let strategy = make_strategy(value);
                let win_rate = self.compare_strategies(&strategy, &baseline)?;
                info!(value, win_rate, "win rate against the baseline");
                Ok((value, win_rate))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RangeReport::from_win_rates(win_rates))
    }
}

/// Win rate of `strategy` against `baseline` under `config`.
pub fn compare_strategies(
    strategy: &dyn Strategy,
    baseline: &dyn Strategy,
    config: &ExperimentConfig,
) -> Result<f64> {
    Experiment::new(config.clone()).compare_strategies(strategy, baseline)
}

/// Best parameter for `make_strategy` in `lower..=upper` under `config`.
pub fn eval_strategy_range<S, F>(
    make_strategy: F,
    lower: i32,
    upper: i32,
    config: &ExperimentConfig,
) -> Result<RangeReport>
where
    S: Strategy,
    F: Fn(i32) -> S,
{
    Experiment::new(config.clone()).eval_strategy_range(make_strategy, lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{Dice, TestDice};
    use crate::rules::roll_dice;

    #[test]
    fn test_make_average_of_dice() {
        let mut dice = TestDice::new([3, 1, 5, 6]).unwrap();
        let mut avg = make_average(|| Ok(f64::from(dice.roll())), 100);
        assert_eq!(avg().unwrap(), 3.75);
    }

    #[test]
    fn test_make_average_of_turns() {
        // Alternates a 3-then-1 turn (1) and a 5-then-6 turn (11)
        let mut dice = TestDice::new([3, 1, 5, 6]).unwrap();
        let mut avg = make_average(|| Ok(f64::from(roll_dice(2, &mut dice)?)), 100);
        assert_eq!(avg().unwrap(), 6.0);
    }

    #[test]
    fn test_make_average_zero_samples() {
        let mut avg = make_average(|| Ok(1.0), 0);
        assert!(matches!(avg(), Err(HogError::InvalidArgument(_))));
    }

    #[test]
    fn test_best_is_strictly_greater_first_seen() {
        let report = RangeReport::from_win_rates(vec![(1, 0.4), (2, 0.55), (3, 0.55), (4, 0.5)]);
        assert_eq!(report.best, 2);
        assert_eq!(report.best_win_rate, 0.55);
    }

    #[test]
    fn test_best_defaults_to_zero() {
        let report = RangeReport::from_win_rates(vec![(5, 0.0), (6, 0.0)]);
        assert_eq!(report.best, 0);
        assert_eq!(report.best_win_rate, 0.0);
    }

    #[test]
    fn test_range_at_the_top_of_i32() {
        let mut experiment = Experiment::new(ExperimentConfig::new().with_num_samples(1));
        let report = experiment.eval_strategy_range(always_roll, i32::MAX - 1, i32::MAX).unwrap();
        let values: Vec<_> = report.win_rates.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec![i32::MAX - 1, i32::MAX]);
    }

    #[test]
    fn test_empty_range_rejected() {
        let mut experiment = Experiment::new(ExperimentConfig::new().with_num_samples(1));
        let err = experiment.eval_strategy_range(always_roll, 5, 4).unwrap_err();
        assert!(matches!(err, HogError::InvalidArgument(_)));
    }
}
