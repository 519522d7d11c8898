use crate::calculator::Operation;

/// Every name the dispatcher recognizes, in display order.
///
/// `modulus`/`remainder` and `commands`/`help` are distinct names for the
/// same handlers; both spellings are listed.
pub const COMMAND_NAMES: [&str; 15] = [
    "add",
    "subtract",
    "multiply",
    "divide",
    "modulus",
    "remainder",
    "exponent",
    "floor division",
    "joke",
    "echo",
    "guess num",
    "invert triangle",
    "commands",
    "help",
    "quit",
];

/// A recognized session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// One of the arithmetic operations.
    Calc(Operation),
    /// Tell a random joke.
    Joke,
    /// Enter the echo chamber.
    Echo,
    /// Play the number-guessing game.
    GuessNum,
    /// Print the inverted triangle.
    InvertTriangle,
    /// Show the command listing again.
    Commands,
    /// Ask to end the session.
    Quit,
}

impl Command {
    /// Looks up a raw command token.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Alias names are separate keys resolving to one command: `remainder`
    /// maps to the modulus operation and `help` to the command listing.
    ///
    /// # Returns
    /// The matching command, or `None` for anything outside the fixed
    /// vocabulary.
    ///
    /// # Example
    /// ```
    /// use confab::{calculator::Operation, session::Command};
    ///
    /// assert_eq!(Command::parse("ADD"), Some(Command::Calc(Operation::Add)));
    /// assert_eq!(Command::parse("remainder"),
    ///            Some(Command::Calc(Operation::Modulus)));
    /// assert_eq!(Command::parse("xyz"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        use Operation::{Add, Divide, Exponent, FloorDivision, Modulus, Multiply, Subtract};

        match token.trim().to_lowercase().as_str() {
            "add" => Some(Self::Calc(Add)),
            "subtract" => Some(Self::Calc(Subtract)),
            "multiply" => Some(Self::Calc(Multiply)),
            "divide" => Some(Self::Calc(Divide)),
            "modulus" | "remainder" => Some(Self::Calc(Modulus)),
            "exponent" => Some(Self::Calc(Exponent)),
            "floor division" => Some(Self::Calc(FloorDivision)),
            "joke" => Some(Self::Joke),
            "echo" => Some(Self::Echo),
            "guess num" => Some(Self::GuessNum),
            "invert triangle" => Some(Self::InvertTriangle),
            "commands" | "help" => Some(Self::Commands),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}
