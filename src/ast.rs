//! # Spoken Math - Abstract Syntax Tree
//!
//! Types shared by every stage of the conversion from a spoken phrase to an
//! expression tree.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Binary operators and the canonical function set
//! - **[expressions]** - Expression nodes handed to the evaluator
//! - **[number]** - Exact numeric literals of unbounded length
//!
//! ## Quick Start
//!
//! ```text
//! 2 plus 3 times 4
//! ```
//!
//! becomes
//!
//! ```text
//! BinaryOp(Add, 2, BinaryOp(Mul, 3, 4))
//! ```
//!
//! ## Core Concepts
//!
//! ### Precedence
//!
//! From loosest to tightest: `plus`/`minus`, `times`/`divided by`,
//! `to the power of` (right-associative), then function application and
//! `square root of`, which take exactly one following atom:
//!
//! ```text
//! sine x plus 1            // sin(x) + 1
//! sine open parenthesis x plus 1 close parenthesis   // sin(x + 1)
//! ```
//!
//! ### Synonyms
//!
//! English and German phrases map to the same tokens, and function synonyms
//! map to one canonical [`Function`]:
//!
//! ```text
//! sin x | sine x | sinus x   // UnaryFunction(Sin, x)
//! log x | ln x               // UnaryFunction(Log, x)
//! ```
pub mod tokens;
pub mod expressions;
pub mod number;
pub mod operators;

pub use tokens::{Token, TokenKind};
pub use expressions::Expr;
pub use number::Number;
pub use operators::{BinOp, Function};
