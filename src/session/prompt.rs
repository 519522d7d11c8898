use std::io::{BufRead, Write};

use crate::error::SessionError;

/// Writes a prompt, flushes it, and reads one trimmed line of input.
///
/// # Parameters
/// - `reader`: The line source to block on.
/// - `writer`: The stream the prompt is written to.
/// - `message`: The prompt text, written without a trailing newline.
///
/// # Returns
/// The line the user typed, with surrounding whitespace trimmed.
///
/// # Errors
/// Returns `SessionError::UnexpectedEof` when the input stream ends, or
/// `SessionError::Io` when the console streams fail.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use confab::session::prompt::prompt_line;
///
/// let mut input = Cursor::new("  4  \n");
/// let mut output = Vec::new();
///
/// let line = prompt_line(&mut input, &mut output, "Enter a number: ").unwrap();
///
/// assert_eq!(line, "4");
/// assert_eq!(output, b"Enter a number: ");
/// ```
pub fn prompt_line<R: BufRead, W: Write>(reader: &mut R,
                                         writer: &mut W,
                                         message: &str)
                                         -> Result<String, SessionError> {
    write!(writer, "{message}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(SessionError::UnexpectedEof);
    }

    Ok(line.trim().to_string())
}

/// Re-prompts until the user supplies a non-blank line.
///
/// The first prompt uses `message`; every retry after a blank or
/// whitespace-only line uses `retry`. There is no retry limit.
///
/// # Errors
/// Returns a [`SessionError`] when the console streams fail or the input
/// ends.
pub fn prompt_nonblank<R: BufRead, W: Write>(reader: &mut R,
                                             writer: &mut W,
                                             message: &str,
                                             retry: &str)
                                             -> Result<String, SessionError> {
    let mut line = prompt_line(reader, writer, message)?;

    while line.is_empty() {
        line = prompt_line(reader, writer, retry)?;
    }

    Ok(line)
}
