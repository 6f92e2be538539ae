use tally::eval::{evaluate, EvalError};
use tally::parser::{to_postfix, ParseError};

/// Convert and evaluate in one go, as the expression mode does.
fn eval_str(expr: &str) -> f64 {
    let postfix = to_postfix(expr).expect("Conversion failed");
    evaluate(&postfix).expect("Evaluation failed")
}

fn postfix_str(expr: &str) -> String {
    to_postfix(expr).expect("Conversion failed").to_string()
}

#[test]
fn test_precedence_end_to_end() {
    assert_eq!(postfix_str("3 + 4 * 2"), "3 4 2 * +");
    assert_eq!(eval_str("3 + 4 * 2"), 11.0);

    assert_eq!(eval_str("10 + 2 * 6"), 22.0);
    assert_eq!(eval_str("100 * 2 + 12"), 212.0);
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(postfix_str("(3 + 4) * 2"), "3 4 + 2 *");
    assert_eq!(eval_str("(3 + 4) * 2"), 14.0);

    assert_eq!(eval_str("100 * ( 2 + 12 )"), 1400.0);
    assert_eq!(eval_str("100 * ( 2 + 12 ) / 14"), 100.0);
}

#[test]
fn test_left_associativity() {
    // A right-associative reading of 8 - 5 - 2 would give 5
    assert_eq!(postfix_str("8 - 5 - 2"), "8 5 - 2 -");
    assert_eq!(eval_str("8 - 5 - 2"), 1.0);

    assert_eq!(postfix_str("8 / 2 * 4"), "8 2 / 4 *");
    assert_eq!(eval_str("8 / 2 * 4"), 16.0);
}

#[test]
fn test_decimal_literals() {
    assert_eq!(eval_str("1.5 + 2.25"), 3.75);
    assert_eq!(eval_str("0.5 * 4"), 2.0);
}

#[test]
fn test_nested_parentheses() {
    assert_eq!(eval_str("((((5))))"), 5.0);
    assert_eq!(eval_str("2 * (3 + (4 - 1))"), 12.0);
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(eval_str("3+4*2"), eval_str("  3 +  4   * 2 "));
}

#[test]
fn test_mismatched_parentheses() {
    assert_eq!(
        to_postfix("(1 + 2").map(|p| p.to_string()),
        Err(ParseError::MismatchedParentheses)
    );
    assert_eq!(
        to_postfix("1 + 2)").map(|p| p.to_string()),
        Err(ParseError::MismatchedParentheses)
    );
}

#[test]
fn test_unrecognized_character() {
    let err = to_postfix("1 + x").expect_err("Conversion should fail");
    assert_eq!(
        err,
        ParseError::UnrecognizedCharacter { ch: 'x', column: 5 }
    );
    assert_eq!(err.to_string(), "Unrecognized character 'x' at column 5");
}

#[test]
fn test_division_by_zero_surfaces_from_evaluation() {
    let postfix = to_postfix("1 / (3 - 3)").expect("Conversion failed");
    assert_eq!(evaluate(&postfix), Err(EvalError::DivisionByZero));
}

#[test]
fn test_malformed_operator_counts() {
    let postfix = to_postfix("1 +").expect("Conversion failed");
    assert_eq!(evaluate(&postfix), Err(EvalError::InsufficientOperands));

    let postfix = to_postfix("1 2").expect("Conversion failed");
    assert_eq!(evaluate(&postfix), Err(EvalError::InsufficientOperands));
}

#[test]
fn test_reevaluation_is_stable() {
    let postfix = to_postfix("(8 - 5) * 2").expect("Conversion failed");
    let first = evaluate(&postfix).expect("Evaluation failed");
    let second = evaluate(&postfix).expect("Evaluation failed");
    assert_eq!(first, 6.0);
    assert_eq!(first, second);
}
