use std::cmp::Ordering;

use rand::Rng;

use crate::calculator::parse_number;

/// Lowest value the hidden target may take.
const LOWER_BOUND: i64 = 1;
/// Highest value the hidden target may take.
const UPPER_BOUND: i64 = 10;

/// Outcome of evaluating one guess token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched the hidden target; the round is resolved.
    Correct(i64),
    /// The guess was below the target.
    TooLow,
    /// The guess was above the target.
    TooHigh,
    /// The token was not numeric; the round is abandoned.
    NotANumber,
}

/// One round of the adaptive guessing game.
///
/// The target starts somewhere in `[1, 10]` and moves one step after every
/// miss: up after a low guess, down after a high guess, never past the
/// bounds. The comparison reported for a guess always uses the target as it
/// was before that adjustment, so the target can only be hit exactly, never
/// overshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessGame {
    target: i64,
    lower:  i64,
    upper:  i64,
}

#[allow(clippy::new_without_default)]
impl GuessGame {
    /// Starts a round with a target drawn uniformly from `[1, 10]`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(rand::thread_rng().gen_range(LOWER_BOUND..=UPPER_BOUND))
    }

    /// Starts a round with a known target. The bounds stay `[1, 10]`.
    ///
    /// # Example
    /// ```
    /// use confab::game::GuessGame;
    ///
    /// let game = GuessGame::with_target(7);
    /// assert_eq!(game.target(), 7);
    /// ```
    #[must_use]
    pub const fn with_target(target: i64) -> Self {
        Self { target,
               lower: LOWER_BOUND,
               upper: UPPER_BOUND, }
    }

    /// The current hidden target.
    #[must_use]
    pub const fn target(&self) -> i64 {
        self.target
    }

    /// Evaluates one guess token and advances the round.
    ///
    /// A non-numeric token abandons the round. Numeric tokens are truncated
    /// toward zero to an integer before comparison. After a miss the target
    /// moves one step toward the guesser's side of the range, capped at the
    /// bounds.
    ///
    /// # Parameters
    /// - `token`: One raw guess line.
    ///
    /// # Returns
    /// The [`GuessOutcome`] for this guess.
    ///
    /// # Example
    /// ```
    /// use confab::game::{GuessGame, GuessOutcome};
    ///
    /// let mut game = GuessGame::with_target(7);
    ///
    /// assert_eq!(game.evaluate("3"), GuessOutcome::TooLow);
    /// assert_eq!(game.evaluate("9"), GuessOutcome::TooHigh);
    /// assert_eq!(game.evaluate("7"), GuessOutcome::Correct(7));
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn evaluate(&mut self, token: &str) -> GuessOutcome {
        let Some(value) = parse_number(token) else {
            return GuessOutcome::NotANumber;
        };

        let guess = value.trunc() as i64;

        match guess.cmp(&self.target) {
            Ordering::Equal => GuessOutcome::Correct(self.target),
            Ordering::Less => {
                if self.target < self.upper {
                    self.target += 1;
                }
                GuessOutcome::TooLow
            },
            Ordering::Greater => {
                if self.target > self.lower {
                    self.target -= 1;
                }
                GuessOutcome::TooHigh
            },
        }
    }
}
