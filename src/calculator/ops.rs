use crate::{calculator::lexer::parse_number, error::MathError};

/// Result type used by the arithmetic engine.
///
/// Every operation returns either the computed value or a [`MathError`]
/// describing the failure.
pub type CalcResult = Result<f64, MathError>;

/// Represents a binary arithmetic operation.
///
/// The session exposes these under their command names; `modulus` and
/// `remainder` both resolve to [`Operation::Modulus`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Floored remainder (sign follows the divisor)
    Modulus,
    /// Exponentiation (`^`)
    Exponent,
    /// Division rounded toward negative infinity
    FloorDivision,
}

impl Operation {
    /// The infix symbol echoed back to the user for this operation.
    ///
    /// Modulus and floor division return `None`; they are reported with a
    /// generic answer line instead of a symbolic echo.
    ///
    /// # Example
    /// ```
    /// use confab::calculator::Operation;
    ///
    /// assert_eq!(Operation::Add.symbol(), Some("+"));
    /// assert_eq!(Operation::Modulus.symbol(), None);
    /// ```
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("+"),
            Self::Subtract => Some("-"),
            Self::Multiply => Some("*"),
            Self::Divide => Some("/"),
            Self::Exponent => Some("^"),
            Self::Modulus | Self::FloorDivision => None,
        }
    }
}

/// Evaluates an operation over two raw operand tokens.
///
/// Both tokens must pass numeric validation; if either fails, the result is
/// `MathError::InvalidInput` regardless of which one failed. Divide-by-zero
/// is checked only after both tokens validate, and only for division,
/// modulus and floor division. Exponentiation follows real-power semantics,
/// so invalid domains surface as a NaN result rather than an error.
///
/// # Parameters
/// - `op`: The operation to perform.
/// - `first`: Raw token for the left operand.
/// - `second`: Raw token for the right operand.
///
/// # Returns
/// A `CalcResult` with the computed value or the failure reason.
///
/// # Example
/// ```
/// use confab::{
///     calculator::{evaluate, Operation},
///     error::MathError,
/// };
///
/// assert_eq!(evaluate(Operation::Add, "3", "4"), Ok(7.0));
/// assert_eq!(evaluate(Operation::Divide, "5", "0"),
///            Err(MathError::DivisionByZero));
/// assert_eq!(evaluate(Operation::Multiply, "five", "4"),
///            Err(MathError::InvalidInput));
/// ```
pub fn evaluate(op: Operation, first: &str, second: &str) -> CalcResult {
    let (Some(a), Some(b)) = (parse_number(first), parse_number(second)) else {
        return Err(MathError::InvalidInput);
    };

    apply(op, a, b)
}

fn apply(op: Operation, a: f64, b: f64) -> CalcResult {
    use Operation::{Add, Divide, Exponent, FloorDivision, Modulus, Multiply, Subtract};

    match op {
        Add => Ok(a + b),
        Subtract => Ok(a - b),
        Multiply => Ok(a * b),
        Divide => {
            if b == 0.0 {
                Err(MathError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        },
        Modulus => {
            if b == 0.0 {
                Err(MathError::DivisionByZero)
            } else {
                Ok(a - b * (a / b).floor())
            }
        },
        Exponent => Ok(a.powf(b)),
        FloorDivision => {
            if b == 0.0 {
                Err(MathError::DivisionByZero)
            } else {
                Ok((a / b).floor())
            }
        },
    }
}
