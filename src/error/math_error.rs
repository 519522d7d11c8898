#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an arithmetic
/// operation.
pub enum MathError {
    /// One or both operands failed numeric validation.
    InvalidInput,
    /// The divisor parsed to zero.
    DivisionByZero,
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Error. Invalid input numbers."),
            Self::DivisionByZero => write!(f, "Error. You cannot divide by zero."),
        }
    }
}

impl std::error::Error for MathError {}
