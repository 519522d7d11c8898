use confab::{
    calculator::{evaluate, format_number, is_numeric, parse_number, CalcResult, Operation},
    error::MathError,
};

fn assert_close(result: CalcResult, expected: f64) {
    let value = result.expect("operation failed");
    assert!((value - expected).abs() < 1e-9,
            "expected {expected}, got {value}");
}

#[test]
fn basic_arithmetic() {
    assert_close(evaluate(Operation::Add, "3", "4"), 7.0);
    assert_close(evaluate(Operation::Subtract, "3", "4"), -1.0);
    assert_close(evaluate(Operation::Multiply, "7", "9"), 63.0);
    assert_close(evaluate(Operation::Divide, "10", "4"), 2.5);
}

#[test]
fn operands_are_order_sensitive() {
    assert_close(evaluate(Operation::Subtract, "10", "3"), 7.0);
    assert_close(evaluate(Operation::Subtract, "3", "10"), -7.0);
    assert_close(evaluate(Operation::Divide, "9", "3"), 3.0);
    assert_close(evaluate(Operation::Divide, "3", "9"), 1.0 / 3.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(evaluate(Operation::Divide, "5", "0"), Err(MathError::DivisionByZero));
    assert_eq!(evaluate(Operation::Modulus, "5", "0"), Err(MathError::DivisionByZero));
    assert_eq!(evaluate(Operation::FloorDivision, "5", "0.0"),
               Err(MathError::DivisionByZero));
}

#[test]
fn zero_divisor_is_fine_everywhere_else() {
    assert_close(evaluate(Operation::Add, "5", "0"), 5.0);
    assert_close(evaluate(Operation::Subtract, "5", "0"), 5.0);
    assert_close(evaluate(Operation::Multiply, "5", "0"), 0.0);
    assert_close(evaluate(Operation::Exponent, "5", "0"), 1.0);
}

#[test]
fn invalid_operands_are_errors() {
    for op in [Operation::Add,
               Operation::Subtract,
               Operation::Multiply,
               Operation::Divide,
               Operation::Modulus,
               Operation::Exponent,
               Operation::FloorDivision]
    {
        assert_eq!(evaluate(op, "abc", "5"), Err(MathError::InvalidInput));
        assert_eq!(evaluate(op, "5", "abc"), Err(MathError::InvalidInput));
        assert_eq!(evaluate(op, "", "5"), Err(MathError::InvalidInput));
        assert_eq!(evaluate(op, "  ", "5"), Err(MathError::InvalidInput));
    }
}

#[test]
fn modulus_sign_follows_divisor() {
    assert_close(evaluate(Operation::Modulus, "7", "3"), 1.0);
    assert_close(evaluate(Operation::Modulus, "-7", "3"), 2.0);
    assert_close(evaluate(Operation::Modulus, "7", "-3"), -2.0);
    assert_close(evaluate(Operation::Modulus, "7.5", "2"), 1.5);
}

#[test]
fn floor_division_rounds_toward_negative_infinity() {
    assert_close(evaluate(Operation::FloorDivision, "7", "2"), 3.0);
    assert_close(evaluate(Operation::FloorDivision, "-7", "2"), -4.0);
    assert_close(evaluate(Operation::FloorDivision, "7", "-2"), -4.0);
}

#[test]
fn exponent_follows_real_power_semantics() {
    assert_close(evaluate(Operation::Exponent, "2", "10"), 1024.0);
    assert_close(evaluate(Operation::Exponent, "4", "0.5"), 2.0);
    assert_close(evaluate(Operation::Exponent, "2", "-1"), 0.5);

    let value = evaluate(Operation::Exponent, "-1", "0.5").expect("operation failed");
    assert!(value.is_nan());
}

#[test]
fn symbols_skip_the_generic_answer_operations() {
    assert_eq!(Operation::Add.symbol(), Some("+"));
    assert_eq!(Operation::Subtract.symbol(), Some("-"));
    assert_eq!(Operation::Multiply.symbol(), Some("*"));
    assert_eq!(Operation::Divide.symbol(), Some("/"));
    assert_eq!(Operation::Exponent.symbol(), Some("^"));
    assert_eq!(Operation::Modulus.symbol(), None);
    assert_eq!(Operation::FloorDivision.symbol(), None);
}

#[test]
fn validator_accepts_real_notation() {
    for token in ["0", "42", "-7", "+5", "3.5", "-2.5", ".5", "3.", "1e3", "2.1e-10", " 4 "] {
        assert!(is_numeric(token), "{token:?} should be numeric");
    }
}

#[test]
fn validator_rejects_everything_else() {
    for token in ["", "   ", "abc", "four", "--5", "1.2.3", "1 2", "+", ".", "nan"] {
        assert!(!is_numeric(token), "{token:?} should not be numeric");
    }
}

#[test]
fn validator_is_idempotent() {
    for token in ["3.5", "abc", ""] {
        assert_eq!(is_numeric(token), is_numeric(token));
    }
}

#[test]
fn parse_number_trims_and_converts() {
    assert_eq!(parse_number("  -2.5  "), Some(-2.5));
    assert_eq!(parse_number("1e3"), Some(1000.0));
    assert_eq!(parse_number("17"), Some(17.0));
    assert_eq!(parse_number("seventeen"), None);
}

#[test]
fn whole_reals_format_as_integers() {
    assert_eq!(format_number(4.0), "4");
    assert_eq!(format_number(7.0), "7");
    assert_eq!(format_number(-3.0), "-3");
}

#[test]
fn fractional_results_keep_their_digits() {
    assert_eq!(format_number(4.5), "4.5");
    assert_eq!(format_number(-0.25), "-0.25");
    assert_eq!(format_number(1.0 / 3.0), (1.0f64 / 3.0).to_string());
}

#[test]
fn equal_zeros_format_identically() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
}
