use std::io::{BufRead, Write};

use crate::{error::SessionError, session::prompt::prompt_line};

/// Number of times the echo chamber repeats the user's line.
const ECHO_COUNT: usize = 15;

/// Runs the echo chamber.
///
/// Reads one non-blank line, re-prompting until the user supplies one, then
/// repeats it [`ECHO_COUNT`] times with a leading blank line before each
/// repetition.
///
/// # Errors
/// Returns a [`SessionError`] when the console streams fail or the input
/// ends.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use confab::extras::echo::echo_chamber;
///
/// let mut input = Cursor::new("hello\n");
/// let mut output = Vec::new();
///
/// echo_chamber(&mut input, &mut output).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert_eq!(text.matches("\nhello").count(), 15);
/// ```
pub fn echo_chamber<R: BufRead, W: Write>(reader: &mut R,
                                          writer: &mut W)
                                          -> Result<(), SessionError> {
    write!(writer, "\nWelcome to the echo chamber! ")?;

    let mut statement =
        prompt_line(reader, writer, "Make your voice heard! Enter something: ")?;

    while statement.is_empty() {
        writeln!(writer, "\nYou need to enter something!")?;
        statement = prompt_line(reader, writer, "Make your voice heard! Enter something: ")?;
    }

    for _ in 0..ECHO_COUNT {
        write!(writer, "\n{statement}")?;
    }
    writeln!(writer)?;

    Ok(())
}
