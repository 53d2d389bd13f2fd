// tests/parser_tests.rs

use spoken_math::ast::{BinOp, Expr, Function};
use spoken_math::grammar::Rule;
use spoken_math::lexer::tokenize;
use spoken_math::parser::{ParseTree, Parser, SyntaxError, SyntaxErrorKind};
use spoken_math::{convert, ConvertError};

fn parse(input: &str) -> Result<ParseTree, SyntaxError> {
    Parser::new(tokenize(input).unwrap()).parse()
}

fn syntax_error(input: &str) -> SyntaxError {
    match convert(input) {
        Err(ConvertError::Syntax(e)) => e,
        other => panic!("Expected syntax error for {:?}, got {:?}", input, other),
    }
}

fn x() -> Expr {
    Expr::symbol("x")
}

// ============================================================================
// Simple tests
// ============================================================================

#[test]
fn test_single_number() {
    assert_eq!(convert("42").unwrap(), Expr::number(42));
}

#[test]
fn test_arithmetic() {
    let expr = convert("1 plus 2 times 3").unwrap();

    // Should be: Add(1, Mul(2, 3))
    match expr {
        Expr::BinaryOp {
            op: BinOp::Add,
            left,
            right,
        } => {
            assert_eq!(*left, Expr::number(1));
            match *right {
                Expr::BinaryOp {
                    op: BinOp::Mul,
                    left,
                    right,
                } => {
                    assert_eq!(*left, Expr::number(2));
                    assert_eq!(*right, Expr::number(3));
                }
                other => panic!("Expected multiplication, got {:?}", other),
            }
        }
        other => panic!("Expected addition, got {:?}", other),
    }
}

#[test]
fn test_parentheses() {
    let expr = convert("open parenthesis 1 plus 2 close parenthesis times 3").unwrap();

    // Should be: Mul(Add(1, 2), 3)
    match expr {
        Expr::BinaryOp {
            op: BinOp::Mul,
            left,
            right,
        } => {
            assert!(matches!(*left, Expr::BinaryOp { op: BinOp::Add, .. }));
            assert_eq!(*right, Expr::number(3));
        }
        other => panic!("Expected multiplication, got {:?}", other),
    }
}

// ============================================================================
// Associativity
// ============================================================================

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        convert("a minus b minus c").unwrap(),
        Expr::binary(
            BinOp::Sub,
            Expr::binary(BinOp::Sub, Expr::symbol("a"), Expr::symbol("b")),
            Expr::symbol("c"),
        )
    );
}

#[test]
fn test_division_is_left_associative() {
    assert_eq!(
        convert("a over b over c").unwrap(),
        Expr::binary(
            BinOp::Div,
            Expr::binary(BinOp::Div, Expr::symbol("a"), Expr::symbol("b")),
            Expr::symbol("c"),
        )
    );
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(
        convert("a to the power of b to the power of c").unwrap(),
        Expr::power(
            Expr::symbol("a"),
            Expr::power(Expr::symbol("b"), Expr::symbol("c")),
        )
    );
}

#[test]
fn test_power_binds_tighter_than_times() {
    assert_eq!(
        convert("2 times x hoch 2").unwrap(),
        Expr::binary(
            BinOp::Mul,
            Expr::number(2),
            Expr::power(x(), Expr::number(2)),
        )
    );
}

// ============================================================================
// Prefix operators
// ============================================================================

#[test]
fn test_function_takes_one_atom() {
    assert_eq!(
        convert("sine x times 2").unwrap(),
        Expr::binary(
            BinOp::Mul,
            Expr::function(Function::Sin, x()),
            Expr::number(2),
        )
    );
}

#[test]
fn test_function_binds_tighter_than_power() {
    assert_eq!(
        convert("sin x to the power of 2").unwrap(),
        Expr::power(Expr::function(Function::Sin, x()), Expr::number(2))
    );
}

#[test]
fn test_function_applied_to_group() {
    assert_eq!(
        convert("cos open bracket x plus 1 close bracket").unwrap(),
        Expr::function(
            Function::Cos,
            Expr::binary(BinOp::Add, x(), Expr::number(1)),
        )
    );
}

#[test]
fn test_nested_prefixes() {
    assert_eq!(
        convert("square root of abs sin x").unwrap(),
        Expr::function(
            Function::Sqrt,
            Expr::function(Function::Abs, Expr::function(Function::Sin, x())),
        )
    );
}

#[test]
fn test_power_exponent_may_be_a_function() {
    assert_eq!(
        convert("e hoch ln x").unwrap(),
        Expr::power(Expr::symbol("e"), Expr::function(Function::Log, x()))
    );
}

// ============================================================================
// Parse tree
// ============================================================================

#[test]
fn test_parse_tree_keeps_group_node() {
    let tree = parse("klammer auf x klammer zu").unwrap();
    match tree {
        ParseTree::Node {
            rule: Rule::Group,
            children,
        } => assert_eq!(children.len(), 3),
        other => panic!("Expected group, got {:?}", other),
    }
}

#[test]
fn test_parse_tree_positions() {
    let tree = parse("x plus y").unwrap();
    assert_eq!(tree.position(), 0);
    match tree {
        ParseTree::Node {
            rule: Rule::Add,
            children,
        } => assert_eq!(children[2].position(), 7),
        other => panic!("Expected addition, got {:?}", other),
    }
}

// ============================================================================
// Syntax errors
// ============================================================================

#[test]
fn test_empty_input() {
    let err = syntax_error("");
    assert_eq!(err.kind, SyntaxErrorKind::EmptyInput);
    assert_eq!(err.position, 0);
}

#[test]
fn test_unclosed_group_points_at_open() {
    let err = syntax_error("open parenthesis 1 plus 2");
    assert_eq!(err.kind, SyntaxErrorKind::UnbalancedParenthesis);
    assert_eq!(err.position, 0);
}

#[test]
fn test_inner_unclosed_group() {
    // the inner group is closed, the outer one is not
    let err = syntax_error("x times open parenthesis 1 plus open parenthesis 2 close parenthesis");
    assert_eq!(err.kind, SyntaxErrorKind::UnbalancedParenthesis);
    assert_eq!(err.position, 8);
}

#[test]
fn test_unmatched_close() {
    let err = syntax_error("1 plus 2 close parenthesis");
    assert_eq!(err.kind, SyntaxErrorKind::UnbalancedParenthesis);
    assert_eq!(err.position, 9);

    let err = syntax_error("close bracket");
    assert_eq!(err.kind, SyntaxErrorKind::UnbalancedParenthesis);
    assert_eq!(err.position, 0);
}

#[test]
fn test_open_group_at_end() {
    let err = syntax_error("2 times klammer auf");
    assert_eq!(err.kind, SyntaxErrorKind::UnbalancedParenthesis);
    assert_eq!(err.position, 8);
}

#[test]
fn test_missing_right_operand() {
    let err = syntax_error("1 plus");
    assert_eq!(err.kind, SyntaxErrorKind::MissingOperand);
    assert_eq!(err.position, 2);

    let err = syntax_error("1 plus close parenthesis");
    assert_eq!(err.kind, SyntaxErrorKind::MissingOperand);
    assert_eq!(err.position, 2);
}

#[test]
fn test_doubled_operator_points_at_second() {
    let err = syntax_error("x plus plus y");
    assert_eq!(err.kind, SyntaxErrorKind::MissingOperand);
    assert_eq!(err.position, 7);

    let err = syntax_error("1 times divided by 2");
    assert_eq!(err.kind, SyntaxErrorKind::MissingOperand);
    assert_eq!(err.position, 8);
}

#[test]
fn test_missing_left_operand() {
    let err = syntax_error("times 2");
    assert_eq!(err.kind, SyntaxErrorKind::MissingOperand);
    assert_eq!(err.position, 0);

    let err = syntax_error("open parenthesis divided by 2 close parenthesis");
    assert_eq!(err.kind, SyntaxErrorKind::MissingOperand);
    assert_eq!(err.position, 17);
}

#[test]
fn test_function_without_argument() {
    let err = syntax_error("sine");
    assert_eq!(err.kind, SyntaxErrorKind::MissingArgument);
    assert_eq!(err.position, 0);

    let err = syntax_error("1 plus square root of plus 2");
    assert_eq!(err.kind, SyntaxErrorKind::MissingArgument);
    assert_eq!(err.position, 7);

    let err = syntax_error("cos close parenthesis");
    assert_eq!(err.kind, SyntaxErrorKind::MissingArgument);
}

#[test]
fn test_trailing_tokens() {
    let err = syntax_error("x y");
    assert_eq!(err.kind, SyntaxErrorKind::TrailingTokens);
    assert_eq!(err.position, 2);

    let err = syntax_error("1 plus 2 3");
    assert_eq!(err.kind, SyntaxErrorKind::TrailingTokens);
    assert_eq!(err.position, 9);
}

#[test]
fn test_operand_after_operand_inside_group() {
    let err = syntax_error("open parenthesis x y close parenthesis");
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
    assert_eq!(err.position, 19);
}

#[test]
fn test_long_numeral_then_missing_operand() {
    let err = syntax_error("123456789012345678901234567890123 plus");
    assert_eq!(err.kind, SyntaxErrorKind::MissingOperand);
    assert_eq!(err.position, 34);
}
