use super::{EvalError, Expr, ExpressionError};

fn var(name: char) -> Expr {
    Expr::variable(name)
}

#[test]
fn parses_single_variable() {
    assert_eq!(Expr::parse("a").unwrap(), var('a'));
}

#[test]
fn adjacency_is_conjunction() {
    let parsed = Expr::parse("ab").unwrap();
    assert_eq!(parsed, Expr::and(var('a'), var('b')));
}

#[test]
fn disjunction_binds_weaker_than_conjunction() {
    // ab+c groups as (ab) + c, a+bc as a + (bc)
    assert_eq!(
        Expr::parse("ab+c").unwrap(),
        Expr::or(Expr::and(var('a'), var('b')), var('c'))
    );
    assert_eq!(
        Expr::parse("a+bc").unwrap(),
        Expr::or(var('a'), Expr::and(var('b'), var('c')))
    );
}

#[test]
fn postfix_negation_applies_to_nearest_operand() {
    assert_eq!(
        Expr::parse("ab'").unwrap(),
        Expr::and(var('a'), Expr::negate(var('b')))
    );
}

#[test]
fn postfix_negation_applies_to_group() {
    assert_eq!(
        Expr::parse("(a+b)'").unwrap(),
        Expr::negate(Expr::or(var('a'), var('b')))
    );
}

#[test]
fn double_negation_parses() {
    assert_eq!(
        Expr::parse("a''").unwrap(),
        Expr::negate(Expr::negate(var('a')))
    );
}

#[test]
fn square_brackets_group_like_parentheses() {
    assert_eq!(
        Expr::parse("[a+b]c").unwrap(),
        Expr::parse("(a+b)c").unwrap()
    );
}

#[test]
fn normalization_ignores_case_and_whitespace() {
    assert_eq!(Expr::parse(" A B' + c ").unwrap(), Expr::parse("ab'+c").unwrap());
}

#[test]
fn rejects_invalid_character() {
    let err = Expr::parse("a&b").unwrap_err();
    assert_eq!(
        err,
        ExpressionError::InvalidCharacter {
            character: '&',
            position: 1,
        }
    );
}

#[test]
fn rejects_leading_and_trailing_disjunction() {
    assert!(matches!(
        Expr::parse("+ab").unwrap_err(),
        ExpressionError::MalformedOperator { .. }
    ));
    assert!(matches!(
        Expr::parse("ab+").unwrap_err(),
        ExpressionError::MalformedOperator { .. }
    ));
}

#[test]
fn rejects_unbalanced_brackets() {
    assert!(matches!(
        Expr::parse("(a+b").unwrap_err(),
        ExpressionError::MalformedOperator { .. }
    ));
    assert!(matches!(
        Expr::parse("a+b]").unwrap_err(),
        ExpressionError::MalformedOperator { .. }
    ));
}

#[test]
fn rejects_mismatched_bracket_kinds() {
    // Counts balance, so this reaches the parser and fails there
    assert!(matches!(
        Expr::parse("[a+b)(c]").unwrap_err(),
        ExpressionError::InvalidSyntax { .. }
    ));
}

#[test]
fn rejects_empty_input() {
    assert!(matches!(
        Expr::parse("  ").unwrap_err(),
        ExpressionError::MalformedOperator { .. }
    ));
}

#[test]
fn rejects_doubled_disjunction() {
    assert!(matches!(
        Expr::parse("a++b").unwrap_err(),
        ExpressionError::InvalidSyntax { .. }
    ));
}

#[test]
fn collects_variables_in_alphabetical_order() {
    let parsed = Expr::parse("db + ca'").unwrap();
    assert_eq!(parsed.variables(), ['a', 'b', 'c', 'd']);
}

#[test]
fn evaluates_exclusive_or() {
    let xor = Expr::parse("a'b + ab'").unwrap();
    let vars = ['a', 'b'];
    assert!(!xor.evaluate(&vars, &[false, false]).unwrap());
    assert!(xor.evaluate(&vars, &[false, true]).unwrap());
    assert!(xor.evaluate(&vars, &[true, false]).unwrap());
    assert!(!xor.evaluate(&vars, &[true, true]).unwrap());
}

#[test]
fn evaluates_negated_group() {
    let parsed = Expr::parse("(a'd + c)'").unwrap();
    let vars = ['a', 'c', 'd'];
    // a = 0, c = 0, d = 1 makes a'd true, so the negated group is false
    assert!(!parsed.evaluate(&vars, &[false, false, true]).unwrap());
    // a = 1, c = 0, d = 1 makes both summands false
    assert!(parsed.evaluate(&vars, &[true, false, true]).unwrap());
}

#[test]
fn evaluation_fails_on_unbound_variable() {
    let parsed = Expr::parse("ab").unwrap();
    assert_eq!(
        parsed.evaluate(&['a'], &[true]).unwrap_err(),
        EvalError::UnboundVariable { variable: 'b' }
    );
}

#[test]
fn display_round_trips_through_parser() {
    for input in ["a", "ab'c", "a + bc", "(a + b)'c", "a'b + ab'", "[ab + c']d"] {
        let parsed = Expr::parse(input).unwrap();
        let printed = parsed.to_string();
        assert_eq!(Expr::parse(&printed).unwrap(), parsed, "input {:?}", input);
    }
}
