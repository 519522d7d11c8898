/// Arithmetic errors.
///
/// Defines the error types that can occur while evaluating an arithmetic
/// operation. These cover operands that fail numeric validation and
/// divisions whose divisor is zero.
pub mod math_error;
/// Session errors.
///
/// Contains the error types that can cross the dispatcher boundary. These
/// only describe failures of the console streams themselves; every user
/// mistake is recovered by re-prompting and never becomes an error value.
pub mod session_error;

pub use math_error::MathError;
pub use session_error::SessionError;
