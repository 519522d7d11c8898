use logos::Logos;

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Represents a numeric token in user input.
/// A token is the whole trimmed line the user typed; it only counts as
/// numeric when one of these patterns covers it entirely.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5`, `-2.` or `2.1e-10`.
    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"[+-]?[0-9]+", parse_integer)]
    Integer(i64),
}

fn parse_real(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Converts an integer token to `f64` if and only if the conversion is
/// exact.
#[allow(clippy::cast_precision_loss)]
const fn integer_to_real(value: i64) -> Option<f64> {
    if value.unsigned_abs() > MAX_SAFE_INTEGER {
        return None;
    }
    Some(value as f64)
}

/// Parses a raw token as a real number.
///
/// Surrounding whitespace is ignored. The remaining text must be exactly
/// one integer or real literal; anything else yields `None`. Integer
/// literals are converted only when they are exactly representable as
/// `f64`.
///
/// # Parameters
/// - `token`: One raw line of user input.
///
/// # Returns
/// `Some(f64)` with the parsed value, or `None` when the token is not
/// numeric.
///
/// # Example
/// ```
/// use confab::calculator::parse_number;
///
/// assert_eq!(parse_number("4"), Some(4.0));
/// assert_eq!(parse_number(" -2.5 "), Some(-2.5));
/// assert_eq!(parse_number("1e3"), Some(1000.0));
/// assert_eq!(parse_number("four"), None);
/// assert_eq!(parse_number("   "), None);
/// ```
#[must_use]
pub fn parse_number(token: &str) -> Option<f64> {
    let mut lexer = Token::lexer(token.trim());

    let value = match lexer.next()? {
        Ok(Token::Real(value)) => value,
        Ok(Token::Integer(value)) => integer_to_real(value)?,
        Err(()) => return None,
    };

    if lexer.next().is_some() {
        return None;
    }

    Some(value)
}

/// Decides whether a raw token is parseable as a real number.
///
/// Pure and side-effect free; calling it twice on the same token yields the
/// same answer both times. Empty and whitespace-only tokens are not
/// numeric.
///
/// # Example
/// ```
/// use confab::calculator::is_numeric;
///
/// assert!(is_numeric("3.5"));
/// assert!(is_numeric("-7"));
/// assert!(!is_numeric(""));
/// assert!(!is_numeric("abc"));
/// ```
#[must_use]
pub fn is_numeric(token: &str) -> bool {
    parse_number(token).is_some()
}
