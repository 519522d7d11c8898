/// The adaptive number-guessing game.
///
/// This module holds the state machine behind the `guess num` command: a
/// hidden target inside fixed bounds that shifts one step after every wrong
/// guess.
///
/// # Responsibilities
/// - Draws the hidden target and owns it for the life of one round.
/// - Classifies each guess token as correct, too low, too high or
///   non-numeric.
/// - Moves the target one step after each miss, capped at the bounds.
pub mod guess;

pub use guess::{GuessGame, GuessOutcome};
