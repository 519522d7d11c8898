use std::io::{BufRead, Write};

use crate::{
    calculator::{self, Operation},
    console,
    error::SessionError,
    extras::{echo, jokes, triangle},
    game::{GuessGame, GuessOutcome},
    session::{
        command::{Command, COMMAND_NAMES},
        prompt::{prompt_line, prompt_nonblank},
    },
};

const COMMAND_PROMPT: &str = "Enter a command: ";
const GUESS_PROMPT: &str = "Guess any number between 1 and 10! But beware, if you choose \
                            incorrectly, the number will change! ";

/// An interactive command session bound to a line-based reader and writer.
///
/// The session owns all long-lived state: the user's name, collected once
/// at startup, and the terminate flag, set only by a confirmed quit.
/// Production wires locked stdin and stdout; tests drive the same loop over
/// in-memory buffers.
pub struct Session<R, W> {
    reader:    R,
    writer:    W,
    user_name: String,
    terminate: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given reader and writer.
    ///
    /// Nothing is read or written until [`Session::run`] is called.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader,
               writer,
               user_name: String::new(),
               terminate: false, }
    }

    /// Runs the session until a confirmed quit.
    ///
    /// Startup collects a non-blank name, clears the console, greets the
    /// user and shows the command listing. The main loop then reads a
    /// command token, case-folds it, and routes it: recognized commands are
    /// acknowledged, handled, and followed by a blocking
    /// "press enter" read whose value is discarded; unrecognized tokens
    /// report the problem and loop straight back to the command prompt.
    /// A confirmed quit skips the acknowledgment read and prints a
    /// personalized farewell.
    ///
    /// # Errors
    /// Returns a [`SessionError`] only when the console streams themselves
    /// fail; every user mistake is recovered by re-prompting.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use confab::session::Session;
    ///
    /// let input = Cursor::new("Ada\nquit\ny\n");
    /// let mut output = Vec::new();
    ///
    /// Session::new(input, &mut output).run().unwrap();
    ///
    /// let text = String::from_utf8(output).unwrap();
    /// assert!(text.contains("Hello Ada!"));
    /// assert!(text.contains("Exiting program. Thank you, Ada!"));
    /// ```
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.user_name = prompt_nonblank(&mut self.reader,
                                         &mut self.writer,
                                         "Hello! Please enter your name to begin: ",
                                         "You need to enter a name. What is your name? ")?;

        console::clear_screen();
        writeln!(self.writer, "Hello {}!", self.user_name)?;
        self.show_commands()?;

        let mut input = prompt_line(&mut self.reader, &mut self.writer, COMMAND_PROMPT)?;

        while !self.terminate {
            match Command::parse(&input) {
                Some(command) => {
                    writeln!(self.writer, "Okay.")?;
                    self.dispatch(command)?;

                    if self.terminate {
                        break;
                    }

                    prompt_line(&mut self.reader,
                                &mut self.writer,
                                "\nPress enter to continue.\n")?;
                    input = prompt_line(&mut self.reader, &mut self.writer, COMMAND_PROMPT)?;
                },
                None => {
                    writeln!(self.writer, "\nThat isn't a command. Try again.\n")?;
                    input = prompt_line(&mut self.reader, &mut self.writer, COMMAND_PROMPT)?;
                },
            }
        }

        writeln!(self.writer, "\nExiting program. Thank you, {}!", self.user_name)?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<(), SessionError> {
        match command {
            Command::Calc(op) => self.run_calculation(op),
            Command::Joke => {
                writeln!(self.writer, "\n{}", jokes::random_joke())?;
                Ok(())
            },
            Command::Echo => echo::echo_chamber(&mut self.reader, &mut self.writer),
            Command::GuessNum => self.run_guessing_game(),
            Command::InvertTriangle => {
                triangle::invert_triangle(&mut self.reader, &mut self.writer)
            },
            Command::Commands => self.show_commands(),
            Command::Quit => self.confirm_quit(),
        }
    }

    /// Prompts for two operand tokens and reports the operation's result.
    ///
    /// The tokens are validated independently so the user learns which one
    /// was bad; when both fail, one combined message replaces the two
    /// individual ones. With two valid tokens the operation's symbolic echo
    /// line (or the generic answer line for modulus and floor division)
    /// precedes the formatted result or the divide-by-zero report.
    fn run_calculation(&mut self, op: Operation) -> Result<(), SessionError> {
        let first = prompt_line(&mut self.reader, &mut self.writer, "Enter the first number: ")?;
        let second =
            prompt_line(&mut self.reader, &mut self.writer, "Enter the second number: ")?;

        match (calculator::is_numeric(&first), calculator::is_numeric(&second)) {
            (false, false) => {
                writeln!(self.writer,
                         "\nUh oh! Neither of those are numbers. Please try again.")?;
            },
            (false, true) => {
                writeln!(self.writer,
                         "\nIt looks like your first input isn't a number. Please try again.")?;
            },
            (true, false) => {
                writeln!(self.writer,
                         "\nIt looks like your second input isn't a number. Please try again.")?;
            },
            (true, true) => {
                match op.symbol() {
                    Some(symbol) => writeln!(self.writer, "\n{first} {symbol} {second}\n=")?,
                    None => writeln!(self.writer, "\nThe answer is:")?,
                }

                match calculator::evaluate(op, &first, &second) {
                    Ok(value) => {
                        writeln!(self.writer, "{}", calculator::format_number(value))?;
                    },
                    Err(error) => writeln!(self.writer, "{error}")?,
                }
            },
        }

        Ok(())
    }

    fn run_guessing_game(&mut self) -> Result<(), SessionError> {
        let mut game = GuessGame::new();

        loop {
            let token = prompt_line(&mut self.reader, &mut self.writer, GUESS_PROMPT)?;

            match game.evaluate(&token) {
                GuessOutcome::Correct(target) => {
                    writeln!(self.writer,
                             "\nYou guessed correctly! The number was {target}.")?;
                    return Ok(());
                },
                GuessOutcome::TooLow => {
                    writeln!(self.writer, "\nYou guessed too low! Try again.\n")?;
                },
                GuessOutcome::TooHigh => {
                    writeln!(self.writer, "\nYou guessed too high! Try again.\n")?;
                },
                GuessOutcome::NotANumber => {
                    // A bad token abandons the round; the target stays hidden.
                    writeln!(self.writer, "\nThat isn't a number!")?;
                    return Ok(());
                },
            }
        }
    }

    /// Asks for confirmation before ending the session.
    ///
    /// Only an exact case-folded `y` confirms; any other answer aborts the
    /// quit and the loop resumes.
    fn confirm_quit(&mut self) -> Result<(), SessionError> {
        let answer = prompt_line(&mut self.reader,
                                 &mut self.writer,
                                 "Are you sure you want to quit? Enter Y to confirm. ")?;

        if answer.eq_ignore_ascii_case("y") {
            self.terminate = true;
        } else {
            writeln!(self.writer, "Exit aborted.")?;
        }

        Ok(())
    }

    fn show_commands(&mut self) -> Result<(), SessionError> {
        writeln!(self.writer, "==========\nAvailable commands:\n")?;
        writeln!(self.writer, "{}\n==========", COMMAND_NAMES.join(", "))?;
        Ok(())
    }
}
