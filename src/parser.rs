use std::fmt;

use log::{debug, trace};

use crate::{
    ast::{Token, TokenKind},
    grammar::{Action, GRAMMAR, Grammar, Rule, Terminal},
};

/// Concrete parse tree, before any expression node is built.
///
/// Unit productions are inlined, so every `Node` corresponds to a rule that
/// builds (or, for [`Rule::Group`], passes through) exactly one expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseTree {
    Token(Token),
    Node { rule: Rule, children: Vec<ParseTree> },
}

impl ParseTree {
    /// Byte offset of the leftmost token in this subtree.
    pub fn position(&self) -> usize {
        match self {
            ParseTree::Token(token) => token.position,
            ParseTree::Node { children, .. } => {
                children.first().map(ParseTree::position).unwrap_or(0)
            }
        }
    }
}

/// What kind of grammar violation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Nothing to parse
    EmptyInput,
    /// An open group without a matching close, or the reverse
    UnbalancedParenthesis,
    /// A binary operator lacking its left or right operand
    MissingOperand,
    /// A function or square root not followed by an atom
    MissingArgument,
    /// Tokens left over after a complete expression
    TrailingTokens,
    /// A token that cannot follow a complete operand inside a group
    UnexpectedToken,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SyntaxErrorKind::EmptyInput => "empty input",
            SyntaxErrorKind::UnbalancedParenthesis => "unbalanced parenthesis",
            SyntaxErrorKind::MissingOperand => "missing operand",
            SyntaxErrorKind::MissingArgument => "function without argument",
            SyntaxErrorKind::TrailingTokens => "unexpected trailing input",
            SyntaxErrorKind::UnexpectedToken => "unexpected token",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Byte offset of the offending token
    pub position: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Syntax error: {} at position {}", self.kind, self.position)
    }
}

impl std::error::Error for SyntaxError {}

struct StackEntry {
    state: usize,
    tree: Option<ParseTree>,
}

/// Table-driven shift-reduce parser over a token stream.
pub struct Parser {
    tokens: Vec<Token>,
    grammar: &'static Grammar,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            grammar: &GRAMMAR,
        }
    }

    /// Parse the whole token stream into one tree.
    pub fn parse(self) -> Result<ParseTree, SyntaxError> {
        let grammar = self.grammar;
        let mut tokens = self.tokens.into_iter().peekable();
        let mut stack = vec![StackEntry {
            state: 0,
            tree: None,
        }];
        let mut reductions = 0usize;

        loop {
            let state = stack.last().map_or(0, |entry| entry.state);
            let lookahead = tokens
                .peek()
                .map_or(Terminal::End, |token| Terminal::Token(token.kind));

            match grammar.action(state, lookahead) {
                Some(Action::Shift(next)) => {
                    let token = tokens.next().expect("shift requires a lookahead token");
                    trace!("shift {:?} -> state {}", token.kind, next);
                    stack.push(StackEntry {
                        state: next,
                        tree: Some(ParseTree::Token(token)),
                    });
                }
                Some(Action::Reduce(index)) => {
                    let production = &grammar.productions[index];
                    let split = stack.len() - production.rhs.len();
                    let mut children: Vec<ParseTree> =
                        stack.drain(split..).filter_map(|entry| entry.tree).collect();

                    let tree = if production.rule == Rule::Inline {
                        children.remove(0)
                    } else {
                        ParseTree::Node {
                            rule: production.rule,
                            children,
                        }
                    };

                    let top = stack.last().map_or(0, |entry| entry.state);
                    let next = grammar
                        .goto(top, production.lhs)
                        .expect("goto defined after reduction");
                    trace!("reduce {:?} -> state {}", production.rule, next);
                    reductions += 1;
                    stack.push(StackEntry {
                        state: next,
                        tree: Some(tree),
                    });
                }
                Some(Action::Accept) => {
                    debug!("parse accepted after {} reductions", reductions);
                    return Ok(stack
                        .pop()
                        .and_then(|entry| entry.tree)
                        .expect("accept with a completed expression"));
                }
                None => {
                    let token = tokens.next();
                    return Err(diagnose(&stack, token.as_ref()));
                }
            }
        }
    }
}

/// Classify a parse failure from the stack contents and the lookahead.
fn diagnose(stack: &[StackEntry], lookahead: Option<&Token>) -> SyntaxError {
    let error = |kind, position| SyntaxError { kind, position };

    let top = stack.last().and_then(|entry| entry.tree.as_ref());
    let open_paren = innermost_open_paren(stack);

    match top {
        None => match lookahead {
            None => error(SyntaxErrorKind::EmptyInput, 0),
            Some(t) if t.kind == TokenKind::RParen => {
                error(SyntaxErrorKind::UnbalancedParenthesis, t.position)
            }
            Some(t) => error(SyntaxErrorKind::MissingOperand, t.position),
        },
        Some(ParseTree::Token(prev)) if prev.kind.is_binary_operator() => match lookahead {
            // Two operators in a row: the second one sits where the operand belongs.
            Some(t) if t.kind.is_binary_operator() => {
                error(SyntaxErrorKind::MissingOperand, t.position)
            }
            _ => error(SyntaxErrorKind::MissingOperand, prev.position),
        },
        Some(ParseTree::Token(prev)) if prev.kind.is_prefix() => {
            error(SyntaxErrorKind::MissingArgument, prev.position)
        }
        Some(ParseTree::Token(prev)) if prev.kind == TokenKind::LParen => match lookahead {
            None => error(SyntaxErrorKind::UnbalancedParenthesis, prev.position),
            Some(t) => error(SyntaxErrorKind::MissingOperand, t.position),
        },
        // A complete operand is on top of the stack.
        Some(_) => match (lookahead, open_paren) {
            (None, Some(position)) => error(SyntaxErrorKind::UnbalancedParenthesis, position),
            (Some(t), None) if t.kind == TokenKind::RParen => {
                error(SyntaxErrorKind::UnbalancedParenthesis, t.position)
            }
            (Some(t), None) => error(SyntaxErrorKind::TrailingTokens, t.position),
            (Some(t), Some(_)) => error(SyntaxErrorKind::UnexpectedToken, t.position),
            // Unreachable with a conflict-free table: a complete top-level
            // expression is always accepted at end of input.
            (None, None) => error(SyntaxErrorKind::TrailingTokens, 0),
        },
    }
}

/// Position of the innermost `LParen` on the stack that has no `RParen`
/// shifted after it.
fn innermost_open_paren(stack: &[StackEntry]) -> Option<usize> {
    let mut depth = 0usize;
    for entry in stack.iter().rev() {
        match &entry.tree {
            Some(ParseTree::Token(t)) if t.kind == TokenKind::RParen => depth += 1,
            Some(ParseTree::Token(t)) if t.kind == TokenKind::LParen => {
                if depth == 0 {
                    return Some(t.position);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// Parse a token stream.
pub fn parse(tokens: Vec<Token>) -> Result<ParseTree, SyntaxError> {
    Parser::new(tokens).parse()
}
