pub mod ast;
pub mod builder;
pub mod cli;
pub mod convert;
pub mod grammar;
pub mod lexer;
pub mod lexicon;
pub mod output;
pub mod parser;
pub mod transcript;

pub use ast::{BinOp, Expr, Function, Number, Token, TokenKind};
pub use builder::BuildError;
pub use convert::{convert, ConvertError};
pub use lexer::{tokenize, LexError, Lexer};
pub use output::{to_json, to_latex, to_spoken, to_tree};
pub use parser::{ParseTree, Parser, SyntaxError, SyntaxErrorKind};
pub use transcript::{normalize_utterance, Transcript, TranscriptWord};
