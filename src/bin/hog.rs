//! Play Hog: unit checks, single games, and strategy experiments.
//!
//! Usage:
//!   cargo run --bin hog -- --play-basic
//!   cargo run --bin hog -- -r --samples 2000 --experiment lead --experiment delta

use anyhow::{ensure, Result};
use clap::Parser;
use tracing::info;

use hog_engine::strategy::InteractiveStrategy;
use hog_engine::{
    always_roll, compare_strategies, final_strategy, play_with, roll_dice, run_experiments,
    take_turn, DiceBag, ExperimentConfig, ExperimentKind, HogConfig, PlayerId, TestDice,
};

#[derive(Parser, Debug)]
#[command(name = "hog", about = "Play Hog")]
struct Args {
    /// Check roll_dice and take_turn against scripted dice
    #[arg(short = 't', long)]
    take_turn_test: bool,

    /// Play one game against the computer
    #[arg(short = 'p', long)]
    play_interactively: bool,

    /// Watch always-roll-5 play always-roll-6
    #[arg(short = 'b', long)]
    play_basic: bool,

    /// Sweep strategy parameters against the baseline
    #[arg(short = 'r', long)]
    run_experiments: bool,

    /// Compare the final strategy to the baseline
    #[arg(short = 'f', long)]
    final_strategy_test: bool,

    /// Experiments to run with --run-experiments (default: always_roll, comeback, mean)
    #[arg(long = "experiment", value_parser = parse_experiment)]
    experiments: Vec<ExperimentKind>,

    /// Games per orientation when estimating a win rate
    #[arg(long, default_value_t = 1000)]
    samples: u32,

    /// Dice seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Log every turn
    #[arg(short, long)]
    verbose: bool,
}

fn parse_experiment(name: &str) -> std::result::Result<ExperimentKind, String> {
    ExperimentKind::ALL
        .into_iter()
        .find(|kind| kind.name() == name)
        .ok_or_else(|| {
            let known: Vec<_> = ExperimentKind::ALL.iter().map(|k| k.name()).collect();
            format!("unknown experiment {name:?}, expected one of {}", known.join(", "))
        })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    TakeTurnTest,
    PlayInteractively,
    PlayBasic,
    RunExperiments,
    FinalStrategyTest,
}

/// Commands in the order they run when several are selected.
const COMMANDS: [(Command, fn(&Args) -> Result<()>); 5] = [
    (Command::TakeTurnTest, take_turn_test),
    (Command::PlayInteractively, play_interactively),
    (Command::PlayBasic, play_basic),
    (Command::RunExperiments, experiments),
    (Command::FinalStrategyTest, final_strategy_test),
];

impl Args {
    fn selected(&self, command: Command) -> bool {
        match command {
            Command::TakeTurnTest => self.take_turn_test,
            Command::PlayInteractively => self.play_interactively,
            Command::PlayBasic => self.play_basic,
            Command::RunExperiments => self.run_experiments,
            Command::FinalStrategyTest => self.final_strategy_test,
        }
    }

    fn experiment_config(&self) -> ExperimentConfig {
        ExperimentConfig::new()
            .with_num_samples(self.samples)
            .with_seed(self.seed)
    }
}

fn take_turn_test(_args: &Args) -> Result<()> {
    info!("testing roll_dice with deterministic test dice");
    let mut dice = TestDice::new([4, 6, 1])?;
    ensure!(roll_dice(2, &mut dice)? == 10, "first two rolls total 10");

    let mut dice = TestDice::new([4, 6, 1])?;
    ensure!(roll_dice(3, &mut dice)? == 1, "third roll is a 1");

    let mut dice = TestDice::new([1, 2, 3])?;
    ensure!(roll_dice(3, &mut dice)? == 1, "first roll is a 1");

    info!("testing take_turn");
    let mut dice = TestDice::new([4, 6, 1])?;
    ensure!(take_turn(2, 0, &mut dice)? == 10, "first two rolls total 10");

    let mut dice = TestDice::new([4, 6, 1])?;
    ensure!(take_turn(3, 20, &mut dice)? == 1, "third roll is a 1");

    ensure!(take_turn(0, 34, &mut dice)? == 4, "opponent score tens digit is 3");
    ensure!(take_turn(0, 71, &mut dice)? == 8, "opponent score tens digit is 7");
    ensure!(take_turn(0, 7, &mut dice)? == 1, "opponent score tens digit is 0");

    info!("tests for roll_dice and take_turn passed");
    Ok(())
}

fn play_interactively(args: &Args) -> Result<()> {
    println!("Shall we play a game?");
    let config = HogConfig::new().with_commentary(true);
    let human = InteractiveStrategy::stdio();
    let result = play_with(&config, &human, &always_roll(5), &mut DiceBag::new(args.seed))?;
    if result.is_winner(PlayerId::FIRST) {
        println!("You win!");
    } else {
        println!("The computer won.");
    }
    Ok(())
}

fn play_basic(args: &Args) -> Result<()> {
    let config = HogConfig::new().with_commentary(true);
    let result = play_with(&config, &always_roll(5), &always_roll(6), &mut DiceBag::new(args.seed))?;
    if result.is_winner(PlayerId::FIRST) {
        println!("Player 0, who always wants to roll 5, won.");
    } else {
        println!("Player 1, who always wants to roll 6, won.");
    }
    Ok(())
}

fn experiments(args: &Args) -> Result<()> {
    let kinds: &[ExperimentKind] = if args.experiments.is_empty() {
        &ExperimentKind::DEFAULT
    } else {
        &args.experiments
    };
    for (kind, report) in run_experiments(&args.experiment_config(), kinds)? {
        println!("Best {kind} strategy: {} (win rate {:.4})", report.best, report.best_win_rate);
    }
    Ok(())
}

fn final_strategy_test(args: &Args) -> Result<()> {
    let config = args.experiment_config();
    let win_rate = compare_strategies(&final_strategy(), &always_roll(config.baseline_rolls), &config)?;
    println!("Final strategy win rate: {win_rate:.4}");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    for (command, run) in COMMANDS {
        if args.selected(command) {
            run(&args)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let args = Args::parse_from(["hog", "-t", "-b", "--seed", "7"]);
        assert!(args.selected(Command::TakeTurnTest));
        assert!(args.selected(Command::PlayBasic));
        assert!(!args.selected(Command::RunExperiments));
        assert_eq!(args.seed, 7);
    }

    #[test]
    fn parses_experiment_names() {
        let args = Args::parse_from(["hog", "-r", "--experiment", "lead", "--experiment", "delta"]);
        assert_eq!(args.experiments, vec![ExperimentKind::Lead, ExperimentKind::Delta]);
        assert!(Args::try_parse_from(["hog", "--experiment", "bogus"]).is_err());
    }

    #[test]
    fn take_turn_test_passes() {
        let args = Args::parse_from(["hog"]);
        take_turn_test(&args).unwrap();
    }
}
