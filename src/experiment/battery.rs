//! The standard strategy experiments.

use std::ops::RangeInclusive;

use tracing::info;

use crate::core::{ExperimentConfig, Result};
use crate::strategy::{
    always_roll, make_comeback_strategy, make_delta_strategy, make_final_strategy,
    make_lead_strategy, make_mean_strategy,
};

use super::{Experiment, RangeReport};

/// A parameter sweep over one strategy family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExperimentKind {
    AlwaysRoll,
    Comeback,
    Mean,
    Lead,
    Delta,
    Final,
}

impl ExperimentKind {
    /// Every experiment.
    pub const ALL: [ExperimentKind; 6] = [
        ExperimentKind::AlwaysRoll,
        ExperimentKind::Comeback,
        ExperimentKind::Mean,
        ExperimentKind::Lead,
        ExperimentKind::Delta,
        ExperimentKind::Final,
    ];

    /// Experiments run when none are named.
    pub const DEFAULT: [ExperimentKind; 3] = [
        ExperimentKind::AlwaysRoll,
        ExperimentKind::Comeback,
        ExperimentKind::Mean,
    ];

    /// Strategy family name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ExperimentKind::AlwaysRoll => "always_roll",
            ExperimentKind::Comeback => "comeback",
            ExperimentKind::Mean => "mean",
            ExperimentKind::Lead => "lead",
            ExperimentKind::Delta => "delta",
            ExperimentKind::Final => "final",
        }
    }

    /// Parameters swept.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<i32> {
        match self {
            ExperimentKind::AlwaysRoll => 1..=10,
            ExperimentKind::Comeback => 5..=15,
            ExperimentKind::Mean => 1..=10,
            ExperimentKind::Lead => 1..=20,
            ExperimentKind::Delta => 15..=25,
            ExperimentKind::Final => 1..=10,
        }
    }

    /// Run this sweep.
    pub fn run(self, experiment: &mut Experiment) -> Result<RangeReport> {
        let (lower, upper) = (*self.range().start(), *self.range().end());
        match self {
            ExperimentKind::AlwaysRoll => experiment.eval_strategy_range(always_roll, lower, upper),
            ExperimentKind::Comeback => {
                experiment.eval_strategy_range(make_comeback_strategy, lower, upper)
            }
            ExperimentKind::Mean => experiment.eval_strategy_range(make_mean_strategy, lower, upper),
            ExperimentKind::Lead => experiment.eval_strategy_range(make_lead_strategy, lower, upper),
            ExperimentKind::Delta => experiment.eval_strategy_range(make_delta_strategy, lower, upper),
            ExperimentKind::Final => experiment.eval_strategy_range(make_final_strategy, lower, upper),
        }
    }
}

impl std::fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Run each sweep in `kinds` on one experiment, in order.
pub fn run_experiments(
    config: &ExperimentConfig,
    kinds: &[ExperimentKind],
) -> Result<Vec<(ExperimentKind, RangeReport)>> {
    let mut experiment = Experiment::new(config.clone());
    let mut reports = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let report = kind.run(&mut experiment)?;
        info!(
            experiment = kind.name(),
            best = report.best,
            win_rate = report.best_win_rate,
            "best {kind} strategy: {}",
            report.best
        );
        reports.push((kind, report));
    }
    Ok(reports)
}
