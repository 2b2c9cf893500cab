//! Two-player game state machine.

use tracing::debug;

use crate::core::{HogConfig, HogError, PlayerId, PlayerMap, Result};
use crate::dice::{DiceKind, DiceSource};
use crate::rules::{num_allowed_dice, select_dice, take_turn_for, Commentary, TurnOutcome};
use crate::strategy::Strategy;

/// Where the game is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The given player is about to take a turn.
    Turn(PlayerId),
    /// The given player has reached the goal.
    Finished(PlayerId),
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// The player who reached the goal.
    pub winner: PlayerId,
    /// Scores when the game ended.
    pub scores: PlayerMap<u32>,
    /// Number of turns taken by both players together.
    pub turns: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// What happened on one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub player: PlayerId,
    /// Roll count the strategy asked for.
    pub intended: i32,
    /// Roll count after clamping to the legal maximum.
    pub num_rolls: u32,
    pub dice: DiceKind,
    pub outcome: TurnOutcome,
    /// Both scores after the turn.
    pub scores: PlayerMap<u32>,
}

/// A game between two strategies.
///
/// Player 0 moves first. Each call to `step` plays one turn; the game is
/// over once either score reaches the goal.
pub struct Game<'a> {
    config: HogConfig,
    strategies: PlayerMap<&'a dyn Strategy>,
    scores: PlayerMap<u32>,
    phase: Phase,
    turns: u32,
}

impl<'a> Game<'a> {
    /// Create a game with both scores at 0 and player 0 to move.
    ///
    /// A goal of 0 is already reached, so such a game starts finished with
    /// player 0 as the winner.
    pub fn new(config: HogConfig, strategy0: &'a dyn Strategy, strategy1: &'a dyn Strategy) -> Self {
        let scores = PlayerMap::with_default();
        let phase = match Self::reached_goal(&scores, config.goal) {
            Some(winner) => Phase::Finished(winner),
            None => Phase::Turn(PlayerId::FIRST),
        };
        Self {
            config,
            strategies: PlayerMap::from_pair(strategy0, strategy1),
            scores,
            phase,
            turns: 0,
        }
    }

    /// First player, in turn order, whose score is at least `goal`.
    fn reached_goal(scores: &PlayerMap<u32>, goal: u32) -> Option<PlayerId> {
        PlayerId::all().find(|&player| scores[player] >= goal)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Turns played so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` once a player has reached the goal.
    #[must_use]
    pub fn is_terminal(&self) -> Option<GameResult> {
        match self.phase {
            Phase::Finished(winner) => Some(GameResult {
                winner,
                scores: self.scores,
                turns: self.turns,
            }),
            Phase::Turn(_) => None,
        }
    }

    /// Play one turn for the player to move.
    ///
    /// Returns `None` without rolling if the game is already over. Fails with
    /// `InvalidStrategyOutput` if the strategy asks for a negative roll count.
    pub fn step(
        &mut self,
        dice: &mut dyn DiceSource,
        commentary: &mut dyn Commentary,
    ) -> Result<Option<TurnRecord>> {
        let player = match self.phase {
            Phase::Turn(player) => player,
            Phase::Finished(_) => return Ok(None),
        };
        let opponent = player.other();
        let score = self.scores[player];
        let opponent_score = self.scores[opponent];

        let intended = self.strategies[player].num_rolls(score, opponent_score)?;
        let requested = u32::try_from(intended)
            .map_err(|_| HogError::InvalidStrategyOutput { player, value: intended })?;
        let num_rolls = requested.min(num_allowed_dice(score, opponent_score));
        let kind = select_dice(score, opponent_score);

        // num_rolls <= MAX_DICE, so the cast is lossless
        let outcome = take_turn_for(
            num_rolls as i32,
            opponent_score,
            dice.select(kind),
            player,
            commentary,
        )?;

        self.scores[player] = score.saturating_add(outcome.score);
        self.turns += 1;
        self.phase = match Self::reached_goal(&self.scores, self.config.goal) {
            Some(winner) => Phase::Finished(winner),
            None => Phase::Turn(opponent),
        };

        debug!(
            turn = self.turns,
            player = player.0,
            intended,
            num_rolls,
            dice = %kind,
            turn_score = outcome.score,
            score = self.scores[player],
            opponent_score,
            "turn resolved"
        );

        Ok(Some(TurnRecord {
            player,
            intended,
            num_rolls,
            dice: kind,
            outcome,
            scores: self.scores,
        }))
    }

    /// Play turns until a player reaches the goal.
    pub fn run(
        &mut self,
        dice: &mut dyn DiceSource,
        commentary: &mut dyn Commentary,
    ) -> Result<GameResult> {
        loop {
            if let Some(result) = self.is_terminal() {
                debug!(
                    winner = result.winner.0,
                    turns = result.turns,
                    "game over"
                );
                return Ok(result);
            }
            self.step(dice, commentary)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::TestDice;
    use crate::rules::Silent;
    use crate::strategy::always_roll;

    #[test]
    fn test_new_game() {
        let s0 = always_roll(5);
        let s1 = always_roll(5);
        let game = Game::new(HogConfig::default(), &s0, &s1);

        assert_eq!(game.phase(), Phase::Turn(PlayerId::FIRST));
        assert_eq!(game.scores(), &PlayerMap::from_pair(0, 0));
        assert!(game.is_terminal().is_none());
    }

    #[test]
    fn test_zero_goal_is_already_reached() {
        let s0 = always_roll(-1);
        let s1 = always_roll(-1);
        let mut game = Game::new(HogConfig::default().with_goal(0), &s0, &s1);
        let mut dice = TestDice::new([4]).unwrap();

        assert_eq!(game.phase(), Phase::Finished(PlayerId::FIRST));
        // Neither strategy is consulted
        let result = game.run(&mut dice, &mut Silent).unwrap();
        assert_eq!(result.turns, 0);
        assert_eq!(result.scores, PlayerMap::from_pair(0, 0));
    }

    #[test]
    fn test_score_saturates_at_the_top() {
        let s0 = always_roll(3);
        let s1 = always_roll(3);
        let mut game = Game::new(HogConfig::default().with_goal(u32::MAX), &s0, &s1);
        let mut dice = TestDice::new([u32::MAX - 1]).unwrap();

        let result = game.run(&mut dice, &mut Silent).unwrap();
        assert_eq!(result.winner, PlayerId::FIRST);
        assert_eq!(result.scores, PlayerMap::from_pair(u32::MAX, 0));
        assert_eq!(result.turns, 1);
    }

    #[test]
    fn test_players_alternate() {
        let s0 = always_roll(2);
        let s1 = always_roll(2);
        let mut game = Game::new(HogConfig::default(), &s0, &s1);
        let mut dice = TestDice::new([3]).unwrap();

        let first = game.step(&mut dice, &mut Silent).unwrap().unwrap();
        assert_eq!(first.player, PlayerId::FIRST);
        let second = game.step(&mut dice, &mut Silent).unwrap().unwrap();
        assert_eq!(second.player, PlayerId::SECOND);
        assert_eq!(game.phase(), Phase::Turn(PlayerId::FIRST));
    }

    #[test]
    fn test_step_after_finish_does_nothing() {
        let s0 = always_roll(10);
        let s1 = always_roll(10);
        let mut game = Game::new(HogConfig::default().with_goal(20), &s0, &s1);
        let mut dice = TestDice::new([6]).unwrap();

        let result = game.run(&mut dice, &mut Silent).unwrap();
        assert_eq!(result.winner, PlayerId::FIRST);
        assert!(game.step(&mut dice, &mut Silent).unwrap().is_none());
        assert_eq!(game.turns(), 1);
    }

    #[test]
    fn test_negative_strategy_output() {
        let s0 = always_roll(-1);
        let s1 = always_roll(5);
        let mut game = Game::new(HogConfig::default(), &s0, &s1);
        let mut dice = TestDice::new([4]).unwrap();

        let err = game.step(&mut dice, &mut Silent).unwrap_err();
        assert!(matches!(
            err,
            HogError::InvalidStrategyOutput { player: PlayerId(0), value: -1 }
        ));
    }
}
