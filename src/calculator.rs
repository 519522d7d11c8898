/// Recognizes numeric tokens.
///
/// This module defines the lexer gating every arithmetic conversion. A raw
/// line of user text is never treated as a number until it has passed
/// through `parse_number` or `is_numeric`.
///
/// # Responsibilities
/// - Defines the token patterns for integer and real literals.
/// - Validates that a whole trimmed line is exactly one numeric token.
/// - Converts validated tokens to `f64` without silent data loss.
pub mod lexer;
/// The arithmetic operations.
///
/// This module defines the fixed set of binary operations the session can
/// perform and evaluates them over raw operand tokens.
///
/// # Responsibilities
/// - Defines the `Operation` enum and its display symbols.
/// - Validates both operand tokens before any arithmetic.
/// - Reports divide-by-zero for the three division-like operations.
pub mod ops;
/// Result display formatting.
///
/// This module renders numeric results for the user, stripping the
/// redundant `.0` suffix from whole real numbers.
pub mod format;

pub use format::format_number;
pub use lexer::{is_numeric, parse_number};
pub use ops::{evaluate, CalcResult, Operation};
