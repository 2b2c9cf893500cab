//! The rules of Hog.
//!
//! - `turn`: how a turn is scored (Pig Out, Free Bacon)
//! - `resolver`: how many dice may be rolled and which dice (Swine Swap,
//!   Hog Wild)
//! - `commentary`: observers told about each roll
//!
//! Everything here is a pure function of its inputs and the dice.

pub mod commentary;
pub mod resolver;
pub mod turn;

pub use commentary::{Announcer, Commentary, CommentaryEvent, Silent, Transcript};
pub use resolver::{num_allowed_dice, select_dice, MAX_DICE, SWINE_SWAP_MAX_DICE};
pub use turn::{free_bacon, roll_dice, roll_dice_for, take_turn, take_turn_for, Rolls, TurnOutcome};
