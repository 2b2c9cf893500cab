//! Turn commentary.
//!
//! Turn functions report what happens to a `Commentary` observer passed in by
//! the caller. `Silent` ignores everything, `Announcer` emits `tracing`
//! events, and `Transcript` records events for inspection.

use tracing::info;

use crate::core::PlayerId;

/// Observer of turn events.
pub trait Commentary {
    /// `who` is about to roll `num_rolls` dice (0 for Free Bacon).
    fn rolling(&mut self, who: PlayerId, num_rolls: u32) {
        let _ = (who, num_rolls);
    }

    /// `who` rolled `outcome`.
    fn rolled(&mut self, who: PlayerId, outcome: u32) {
        let _ = (who, outcome);
    }
}

/// Commentary that says nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Commentary for Silent {}

/// Commentary announced through `tracing` at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct Announcer;

impl Commentary for Announcer {
    fn rolling(&mut self, who: PlayerId, num_rolls: u32) {
        info!(player = who.0, num_rolls, "{who} is going to roll {num_rolls} dice");
    }

    fn rolled(&mut self, who: PlayerId, outcome: u32) {
        info!(player = who.0, outcome, "{who} rolled a {outcome}");
    }
}

/// A single commentary event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentaryEvent {
    Rolling { who: PlayerId, num_rolls: u32 },
    Rolled { who: PlayerId, outcome: u32 },
}

/// Commentary that records every event in order.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    pub events: Vec<CommentaryEvent>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcomes rolled, in order, by any player.
    pub fn outcomes(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CommentaryEvent::Rolled { outcome, .. } => Some(*outcome),
                CommentaryEvent::Rolling { .. } => None,
            })
            .collect()
    }
}

impl Commentary for Transcript {
    fn rolling(&mut self, who: PlayerId, num_rolls: u32) {
        self.events.push(CommentaryEvent::Rolling { who, num_rolls });
    }

    fn rolled(&mut self, who: PlayerId, outcome: u32) {
        self.events.push(CommentaryEvent::Rolled { who, outcome });
    }
}
