use std::io::{BufRead, Write};

use crate::{
    calculator::parse_number,
    error::SessionError,
    session::prompt::prompt_line,
};

/// Prompts for a row count and prints the inverted triangle.
///
/// The raw token is validated here, not by the caller; a non-numeric token
/// reports the problem and re-prompts. The count is truncated toward zero,
/// and a count of zero or less renders nothing.
///
/// # Errors
/// Returns a [`SessionError`] when the console streams fail or the input
/// ends.
#[allow(clippy::cast_possible_truncation)]
pub fn invert_triangle<R: BufRead, W: Write>(reader: &mut R,
                                             writer: &mut W)
                                             -> Result<(), SessionError> {
    loop {
        let token = prompt_line(reader, writer, "Enter number of rows to display: ")?;

        match parse_number(&token) {
            Some(value) => {
                writeln!(writer)?;
                render(writer, value.trunc() as i64)?;
                return Ok(());
            },
            None => writeln!(writer, "\nThat isn't a number! Try again.")?,
        }
    }
}

/// Renders the triangle itself: each row counts upward from 1, and every
/// row is one column shorter than the row above it.
///
/// # Errors
/// Returns a [`SessionError`] when writing fails.
///
/// # Example
/// ```
/// use confab::extras::triangle::render;
///
/// let mut output = Vec::new();
/// render(&mut output, 3).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "1 2 3 \n1 2 \n1 \n");
/// ```
pub fn render<W: Write>(writer: &mut W, rows: i64) -> Result<(), SessionError> {
    for row in 0..rows {
        for column in 1..=(rows - row) {
            write!(writer, "{column} ")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
