//! Reduction of a [`ParseTree`] to an [`Expr`].
//!
//! Each grammar rule yields exactly one expression node; `Group` yields the
//! node of the grouped expression unchanged.

use std::fmt;
use std::str::FromStr;

use log::debug;
use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::{
    ast::{BinOp, Expr, Function, Number, Token},
    grammar::Rule,
    parser::ParseTree,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A `Number` lexeme that is not a well-formed numeral.
    NumberFormat { lexeme: String },
    /// A `Func` lexeme with no canonical function.
    UnknownFunction { name: String },
    /// The parse tree does not have the shape its rule requires.
    MalformedTree { rule: Rule },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::NumberFormat { lexeme } => write!(f, "Invalid number: '{}'", lexeme),
            BuildError::UnknownFunction { name } => write!(f, "Unknown function: '{}'", name),
            BuildError::MalformedTree { rule } => write!(f, "Malformed parse tree for {:?}", rule),
        }
    }
}

impl std::error::Error for BuildError {}

/// Parse a numeral exactly, however many digits it has.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use spoken_math::builder::parse_number;
/// use spoken_math::Number;
///
/// assert_eq!(parse_number("+2.50").unwrap(), Number::Decimal(Decimal::new(25, 1)));
/// assert_eq!(
///     parse_number("1234567890123456789012345678901234567890").unwrap().to_string(),
///     "1234567890123456789012345678901234567890"
/// );
/// assert!(parse_number("1.2.3").is_err());
/// ```
pub fn parse_number(lexeme: &str) -> Result<Number, BuildError> {
    let invalid = || BuildError::NumberFormat {
        lexeme: lexeme.to_string(),
    };

    let (negative, unsigned) = match lexeme.as_bytes().first() {
        Some(b'-') => (true, &lexeme[1..]),
        Some(b'+') => (false, &lexeme[1..]),
        _ => (false, lexeme),
    };
    let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(int) || (unsigned.contains('.') && !is_digits(frac)) {
        return Err(invalid());
    }

    let signed = if negative { lexeme } else { unsigned };
    if let Ok(value) = Decimal::from_str_exact(signed) {
        return Ok(Number::Decimal(value));
    }

    // Too many digits for a 96-bit mantissa.
    let magnitude = BigInt::from_str(&format!("{}{}", int, frac)).map_err(|_| invalid())?;
    let scale = u32::try_from(frac.len()).map_err(|_| invalid())?;
    debug!(
        "numeral {:?} exceeds decimal precision, keeping all {} digits",
        lexeme,
        int.len() + frac.len()
    );
    Ok(Number::Big {
        mantissa: if negative { -magnitude } else { magnitude },
        scale,
    })
}

/// Build the expression tree for `tree`.
pub fn build(tree: ParseTree) -> Result<Expr, BuildError> {
    let (rule, children) = match tree {
        ParseTree::Node { rule, children } => (rule, children),
        // A bare token only appears as a child of a node.
        ParseTree::Token(_) => return Err(BuildError::MalformedTree { rule: Rule::Inline }),
    };
    let malformed = || BuildError::MalformedTree { rule };

    let mut children = children.into_iter();
    match rule {
        Rule::Number => {
            let token = expect_token(children.next()).ok_or_else(malformed)?;
            parse_number(&token.lexeme).map(Expr::NumberLiteral)
        }
        Rule::Variable => {
            let token = expect_token(children.next()).ok_or_else(malformed)?;
            Ok(Expr::Symbol(token.lexeme))
        }
        Rule::Add | Rule::Sub | Rule::Mul | Rule::Div | Rule::Pow => {
            let (left, _op, right) = match (children.next(), children.next(), children.next()) {
                (Some(left), Some(op), Some(right)) => (left, op, right),
                _ => return Err(malformed()),
            };
            let left = build(left)?;
            let right = build(right)?;
            Ok(match rule {
                Rule::Add => Expr::binary(BinOp::Add, left, right),
                Rule::Sub => Expr::binary(BinOp::Sub, left, right),
                Rule::Mul => Expr::binary(BinOp::Mul, left, right),
                Rule::Div => Expr::binary(BinOp::Div, left, right),
                _ => Expr::power(left, right),
            })
        }
        Rule::Func => {
            let token = expect_token(children.next()).ok_or_else(malformed)?;
            let function =
                Function::from_name(&token.lexeme).ok_or_else(|| BuildError::UnknownFunction {
                    name: token.lexeme.clone(),
                })?;
            let argument = build(children.next().ok_or_else(malformed)?)?;
            Ok(Expr::function(function, argument))
        }
        Rule::Sqrt => {
            let argument = build(children.nth(1).ok_or_else(malformed)?)?;
            Ok(Expr::function(Function::Sqrt, argument))
        }
        Rule::Group => build(children.nth(1).ok_or_else(malformed)?),
        Rule::Inline => Err(malformed()),
    }
}

fn expect_token(tree: Option<ParseTree>) -> Option<Token> {
    match tree? {
        ParseTree::Token(token) => Some(token),
        ParseTree::Node { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TokenKind;

    fn leaf(rule: Rule, kind: TokenKind, lexeme: &str) -> ParseTree {
        ParseTree::Node {
            rule,
            children: vec![ParseTree::Token(Token::new(kind, lexeme, 0))],
        }
    }

    #[test]
    fn test_long_numerals_are_exact() {
        let tree = leaf(Rule::Number, TokenKind::Number, "1234567890123456789012345678901234567890");
        match build(tree).unwrap() {
            Expr::NumberLiteral(Number::Big { mantissa, scale }) => {
                assert_eq!(mantissa.to_string(), "1234567890123456789012345678901234567890");
                assert_eq!(scale, 0);
            }
            other => panic!("Expected a big numeral, got {:?}", other),
        }

        let fraction = parse_number("-0.123456789012345678901234567890").unwrap();
        assert_eq!(fraction.to_string(), "-0.123456789012345678901234567890");
        assert!(fraction.is_negative());
    }

    #[test]
    fn test_signed_numbers() {
        assert_eq!(parse_number("-5").unwrap(), Number::Decimal(Decimal::from(-5)));
        assert_eq!(parse_number("+5").unwrap(), Number::Decimal(Decimal::from(5)));
        assert!(parse_number("+").is_err());
        assert!(parse_number("").is_err());
        assert!(parse_number("1_000").is_err());
        assert!(parse_number("5.").is_err());
    }

    #[test]
    fn test_unknown_function_name() {
        let tree = ParseTree::Node {
            rule: Rule::Func,
            children: vec![
                ParseTree::Token(Token::new(TokenKind::Func, "sinh", 0)),
                leaf(Rule::Variable, TokenKind::Variable, "x"),
            ],
        };
        assert_eq!(
            build(tree),
            Err(BuildError::UnknownFunction {
                name: "sinh".to_string()
            })
        );
    }

    #[test]
    fn test_function_name_casing_is_ignored() {
        let tree = ParseTree::Node {
            rule: Rule::Func,
            children: vec![
                ParseTree::Token(Token::new(TokenKind::Func, "Sinus", 0)),
                leaf(Rule::Variable, TokenKind::Variable, "X"),
            ],
        };
        assert_eq!(
            build(tree).unwrap(),
            Expr::function(Function::Sin, Expr::symbol("X"))
        );
    }

    #[test]
    fn test_bare_token_is_malformed() {
        let tree = ParseTree::Token(Token::new(TokenKind::Plus, "plus", 0));
        assert!(matches!(build(tree), Err(BuildError::MalformedTree { .. })));
    }
}
