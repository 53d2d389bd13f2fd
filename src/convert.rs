//! End-to-end conversion: text → tokens → parse tree → expression tree.

use std::fmt;

use log::debug;

use crate::{
    ast::Expr,
    builder::{self, BuildError},
    lexer::{LexError, Lexer},
    parser::{Parser, SyntaxError},
};

/// Any failure of [`convert`]. Conversion stops at the first error; there is
/// no partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Unrecognized surface text
    Lex(LexError),
    /// Grammar violation
    Syntax(SyntaxError),
    /// Malformed numeral reaching the builder
    NumberFormat { lexeme: String },
    /// Function phrase with no canonical function
    UnknownFunction { name: String },
    /// Parse tree shape the builder does not accept
    Internal(String),
}

impl ConvertError {
    /// Byte offset into the input, when the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ConvertError::Lex(e) => Some(e.position),
            ConvertError::Syntax(e) => Some(e.position),
            _ => None,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Lex(e) => write!(f, "Lex error: {}", e),
            ConvertError::Syntax(e) => write!(f, "{}", e),
            ConvertError::NumberFormat { lexeme } => write!(f, "Invalid number: '{}'", lexeme),
            ConvertError::UnknownFunction { name } => write!(f, "Unknown function: '{}'", name),
            ConvertError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Lex(e) => Some(e),
            ConvertError::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ConvertError {
    fn from(e: LexError) -> Self {
        ConvertError::Lex(e)
    }
}

impl From<SyntaxError> for ConvertError {
    fn from(e: SyntaxError) -> Self {
        ConvertError::Syntax(e)
    }
}

impl From<BuildError> for ConvertError {
    fn from(e: BuildError) -> Self {
        match e {
            BuildError::NumberFormat { lexeme } => ConvertError::NumberFormat { lexeme },
            BuildError::UnknownFunction { name } => ConvertError::UnknownFunction { name },
            other @ BuildError::MalformedTree { .. } => ConvertError::Internal(other.to_string()),
        }
    }
}

/// Convert a spoken math phrase into an expression tree.
///
/// # Examples
///
/// ```
/// use spoken_math::{convert, BinOp, Expr};
///
/// let expr = convert("2 plus 3 times 4").unwrap();
/// assert_eq!(
///     expr,
///     Expr::binary(
///         BinOp::Add,
///         Expr::number(2),
///         Expr::binary(BinOp::Mul, Expr::number(3), Expr::number(4)),
///     )
/// );
///
/// // Only digit-form numerals are numbers; spelled-out words are symbols.
/// assert_eq!(
///     convert("two plus 1").unwrap(),
///     Expr::binary(BinOp::Add, Expr::symbol("two"), Expr::number(1))
/// );
/// ```
pub fn convert(input: &str) -> Result<Expr, ConvertError> {
    let tokens = Lexer::new(input).tokenize()?;
    let tree = Parser::new(tokens).parse()?;
    let expr = builder::build(tree)?;
    debug!("converted {:?} into {} nodes", input, expr.size());
    Ok(expr)
}
