use std::fs;

use tinycalc::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate_line,
    interpreter::{evaluator::core::Context, lexer::TokenKind, value::Value},
};

fn eval_fresh(line: &str) -> Result<Option<Value>, EvalError> {
    let mut context = Context::new();
    evaluate_line(line, &mut context)
}

fn value_in(context: &mut Context, line: &str) -> Value {
    evaluate_line(line, context).unwrap_or_else(|e| panic!("'{line}' failed: {e}"))
                                .unwrap_or_else(|| panic!("'{line}' produced no value"))
}

fn assert_parse_failure(line: &str) {
    match eval_fresh(line) {
        Err(EvalError::Parse(_)) => {},
        Err(e) => panic!("'{line}' failed in the wrong phase: {e}"),
        Ok(_) => panic!("'{line}' was accepted but was expected to fail"),
    }
}

#[test]
fn integer_literals() {
    assert_eq!(eval_fresh("7").unwrap(), Some(Value::Integer(7)));
    assert_eq!(eval_fresh("0").unwrap(), Some(Value::Integer(0)));
    // Leading zeros are part of the same digit run.
    assert_eq!(eval_fresh("0007").unwrap(), Some(Value::Integer(7)));
    assert_eq!(eval_fresh("9223372036854775807").unwrap(),
               Some(Value::Integer(i64::MAX)));
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval_fresh("2 + 3 * 4").unwrap(), Some(Value::Integer(14)));
    assert_eq!(eval_fresh("(2 + 3) * 4").unwrap(), Some(Value::Integer(20)));
    assert_eq!(eval_fresh("7 - 2 * 3").unwrap(), Some(Value::Integer(1)));
    assert_eq!(eval_fresh("2 * 3 + 4 * 5").unwrap(), Some(Value::Integer(26)));
    assert_eq!(eval_fresh("((((1))))").unwrap(), Some(Value::Integer(1)));
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(eval_fresh("10 - 2 - 3").unwrap(), Some(Value::Integer(5)));
    assert_eq!(eval_fresh("2 - 3 + 4").unwrap(), Some(Value::Integer(3)));
    assert_eq!(eval_fresh("100 / 5 / 2").unwrap(), Some(Value::Real(10.0)));
}

#[test]
fn division_is_true_division() {
    assert_eq!(eval_fresh("5 / 2").unwrap(), Some(Value::Real(2.5)));
    // An integer-valued quotient is still a real.
    assert_eq!(eval_fresh("4 / 2").unwrap(), Some(Value::Real(2.0)));
    assert_eq!(eval_fresh("1 + 5 / 2").unwrap(), Some(Value::Real(3.5)));
}

#[test]
fn assignment_yields_no_value_and_persists() {
    let mut context = Context::new();

    assert_eq!(evaluate_line("x = 5", &mut context).unwrap(), None);
    assert_eq!(value_in(&mut context, "x + 1"), Value::Integer(6));

    // The right-hand side sees the old binding.
    assert_eq!(evaluate_line("x = x + 10", &mut context).unwrap(), None);
    assert_eq!(value_in(&mut context, "x"), Value::Integer(15));

    // Reassignment overwrites unconditionally, including across types.
    assert_eq!(evaluate_line("x = 9 / 2", &mut context).unwrap(), None);
    assert_eq!(value_in(&mut context, "x"), Value::Real(4.5));
}

#[test]
fn variable_assigned_zero_is_defined() {
    let mut context = Context::new();

    evaluate_line("x = 0", &mut context).unwrap();
    assert_eq!(value_in(&mut context, "x"), Value::Integer(0));
}

#[test]
fn variables_are_case_sensitive() {
    let mut context = Context::new();

    evaluate_line("a = 1", &mut context).unwrap();
    match evaluate_line("A", &mut context) {
        Err(EvalError::Runtime(RuntimeError::UnknownVariable { name, .. })) => {
            assert_eq!(name, "A");
        },
        other => panic!("expected an unknown-variable error, got {other:?}"),
    }
}

#[test]
fn unknown_variable_is_error() {
    match eval_fresh("y") {
        Err(EvalError::Runtime(RuntimeError::UnknownVariable { name, .. })) => {
            assert_eq!(name, "y");
        },
        other => panic!("expected an unknown-variable error, got {other:?}"),
    }
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(eval_fresh("1 / 0"),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert!(matches!(eval_fresh("1 / (2 - 2)"),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero { .. }))));

    // A variable holding zero divides like the literal.
    let mut context = Context::new();
    evaluate_line("z = 0", &mut context).unwrap();
    assert!(matches!(evaluate_line("5 / z", &mut context),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn failing_line_leaves_the_store_untouched() {
    let mut context = Context::new();

    evaluate_line("x = 5", &mut context).unwrap();
    assert!(evaluate_line("x = 1 / 0", &mut context).is_err());
    assert_eq!(value_in(&mut context, "x"), Value::Integer(5));

    // A failed first assignment must not create the variable either.
    assert!(evaluate_line("w = 1 / 0", &mut context).is_err());
    assert!(matches!(evaluate_line("w", &mut context),
                     Err(EvalError::Runtime(RuntimeError::UnknownVariable { .. }))));
}

#[test]
fn missing_operand_is_a_syntax_error() {
    match eval_fresh("2 +") {
        Err(EvalError::Parse(ParseError::UnexpectedToken { found, .. })) => {
            assert_eq!(found, TokenKind::EndOfInput);
        },
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn trailing_tokens_are_a_syntax_error() {
    match eval_fresh("2 2") {
        Err(EvalError::Parse(ParseError::UnexpectedToken { expected,
                                                           found,
                                                           offset, })) => {
            assert_eq!(expected, &[TokenKind::EndOfInput]);
            assert_eq!(found, TokenKind::Integer);
            assert_eq!(offset, 2);
        },
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn grammar_violations_are_syntax_errors() {
    // No unary minus: MINUS INTEGER is not a factor.
    assert_parse_failure("-5");
    assert_parse_failure("2 + -3");
    assert_parse_failure("(2 + 3");
    assert_parse_failure("()");
    assert_parse_failure("= 5");
    assert_parse_failure("2 + * 3");
    assert_parse_failure("x = = 1");
    assert_parse_failure("");
}

#[test]
fn unrecognized_character_is_reported_with_offset() {
    match eval_fresh("2 $ 2") {
        Err(EvalError::Parse(ParseError::UnrecognizedCharacter { character, offset })) => {
            assert_eq!(character, '$');
            assert_eq!(offset, 2);
        },
        other => panic!("expected a lexing error, got {other:?}"),
    }
}

#[test]
fn oversized_literal_is_reported() {
    // One past i64::MAX.
    assert!(matches!(eval_fresh("9223372036854775808"),
                     Err(EvalError::Parse(ParseError::LiteralTooLarge { .. }))));
}

#[test]
fn whitespace_is_insignificant() {
    let mut context = Context::new();

    evaluate_line("x=4", &mut context).unwrap();
    assert_eq!(value_in(&mut context, " x   +\t1 "), Value::Integer(5));
    assert_eq!(value_in(&mut context, "x\t*\t2"), Value::Integer(8));
}

#[test]
fn pure_expressions_are_idempotent() {
    let mut context = Context::new();

    evaluate_line("a = 6", &mut context).unwrap();
    let first = value_in(&mut context, "a * 7");
    let second = value_in(&mut context, "a * 7");
    assert_eq!(first, second);
}

#[test]
fn example_script_works() {
    let source = fs::read_to_string("tests/example.calc").expect("missing file");

    let mut context = Context::new();
    let mut printed = Vec::new();
    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(value) = evaluate_line(line, &mut context).expect("script line failed") {
            printed.push(value.to_string());
        }
    }

    assert_eq!(printed, ["40", "3"]);
}
