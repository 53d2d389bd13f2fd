//! Grammar productions and the shift-reduce tables derived from them.
//!
//! Precedence is encoded by layering the nonterminals:
//!
//! ```text
//! Start -> Expr
//! Expr  -> Expr Plus Term  | Expr Minus Term | Term
//! Term  -> Term Times Power | Term Div Power | Power
//! Power -> Atom Pow Power  | Atom
//! Atom  -> Func Atom | Sqrt Atom | Number | Variable | LParen Expr RParen
//! ```
//!
//! The ACTION/GOTO tables are built with the SLR(1) construction from the
//! LR(0) item sets. For this grammar the result coincides with the LALR(1)
//! tables. [`GRAMMAR`] is built on first use and never mutated afterwards.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use lazy_static::lazy_static;
use log::debug;

use crate::ast::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NonTerminal {
    Start,
    Expr,
    Term,
    Power,
    Atom,
}

/// A token kind, or the end-of-input marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terminal {
    Token(TokenKind),
    End,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Token(kind) => write!(f, "{}", kind),
            Terminal::End => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    T(Terminal),
    N(NonTerminal),
}

/// Tree-building action attached to a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Unit production: the single child is passed through unchanged.
    Inline,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Func,
    Sqrt,
    Number,
    Variable,
    Group,
}

#[derive(Debug, Clone, Copy)]
pub struct Production {
    pub lhs: NonTerminal,
    pub rhs: &'static [Symbol],
    pub rule: Rule,
}

const fn prod(lhs: NonTerminal, rhs: &'static [Symbol], rule: Rule) -> Production {
    Production { lhs, rhs, rule }
}

const EXPR: Symbol = Symbol::N(NonTerminal::Expr);
const TERM: Symbol = Symbol::N(NonTerminal::Term);
const POWER: Symbol = Symbol::N(NonTerminal::Power);
const ATOM: Symbol = Symbol::N(NonTerminal::Atom);
const PLUS: Symbol = Symbol::T(Terminal::Token(TokenKind::Plus));
const MINUS: Symbol = Symbol::T(Terminal::Token(TokenKind::Minus));
const TIMES: Symbol = Symbol::T(Terminal::Token(TokenKind::Times));
const DIV: Symbol = Symbol::T(Terminal::Token(TokenKind::Div));
const POW: Symbol = Symbol::T(Terminal::Token(TokenKind::Pow));
const FUNC: Symbol = Symbol::T(Terminal::Token(TokenKind::Func));
const SQRT: Symbol = Symbol::T(Terminal::Token(TokenKind::Sqrt));
const NUMBER: Symbol = Symbol::T(Terminal::Token(TokenKind::Number));
const VARIABLE: Symbol = Symbol::T(Terminal::Token(TokenKind::Variable));
const LPAREN: Symbol = Symbol::T(Terminal::Token(TokenKind::LParen));
const RPAREN: Symbol = Symbol::T(Terminal::Token(TokenKind::RParen));

use NonTerminal::{Atom, Expr, Power, Start, Term};

/// Production 0 is the augmented start rule.
pub const PRODUCTIONS: &[Production] = &[
    prod(Start, &[EXPR], Rule::Inline),
    prod(Expr, &[EXPR, PLUS, TERM], Rule::Add),
    prod(Expr, &[EXPR, MINUS, TERM], Rule::Sub),
    prod(Expr, &[TERM], Rule::Inline),
    prod(Term, &[TERM, TIMES, POWER], Rule::Mul),
    prod(Term, &[TERM, DIV, POWER], Rule::Div),
    prod(Term, &[POWER], Rule::Inline),
    prod(Power, &[ATOM, POW, POWER], Rule::Pow),
    prod(Power, &[ATOM], Rule::Inline),
    prod(Atom, &[FUNC, ATOM], Rule::Func),
    prod(Atom, &[SQRT, ATOM], Rule::Sqrt),
    prod(Atom, &[NUMBER], Rule::Number),
    prod(Atom, &[VARIABLE], Rule::Variable),
    prod(Atom, &[LPAREN, EXPR, RPAREN], Rule::Group),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Binding strength of each operator token, loosest first. Prefix operators
/// bind tighter than every infix operator.
pub const PRECEDENCE: &[(TokenKind, u8, Assoc)] = &[
    (TokenKind::Plus, 1, Assoc::Left),
    (TokenKind::Minus, 1, Assoc::Left),
    (TokenKind::Times, 2, Assoc::Left),
    (TokenKind::Div, 2, Assoc::Left),
    (TokenKind::Pow, 3, Assoc::Right),
    (TokenKind::Func, 4, Assoc::Right),
    (TokenKind::Sqrt, 4, Assoc::Right),
];

/// Binding power of atoms (numbers, variables, groups).
pub const ATOM_PRECEDENCE: u8 = 5;

pub fn precedence(kind: TokenKind) -> Option<(u8, Assoc)> {
    PRECEDENCE
        .iter()
        .find(|(k, _, _)| *k == kind)
        .map(|(_, prec, assoc)| (*prec, *assoc))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift(usize),
    Reduce(usize),
    Accept,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Two different actions for the same state and lookahead.
    Conflict {
        state: usize,
        terminal: Terminal,
        existing: Action,
        incoming: Action,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::Conflict {
                state,
                terminal,
                existing,
                incoming,
            } => write!(
                f,
                "conflict in state {} on {}: {:?} vs {:?}",
                state, terminal, existing, incoming
            ),
        }
    }
}

impl std::error::Error for GrammarError {}

/// LR(0) item: production index and dot position.
type Item = (usize, usize);
type ItemSet = BTreeSet<Item>;

pub struct Grammar {
    pub productions: &'static [Production],
    action: Vec<HashMap<Terminal, Action>>,
    goto: Vec<HashMap<NonTerminal, usize>>,
}

lazy_static! {
    pub static ref GRAMMAR: Grammar =
        Grammar::build(PRODUCTIONS).expect("built-in grammar is SLR(1)");
}

impl Grammar {
    /// Build the ACTION/GOTO tables for `productions`. Production 0 must be
    /// the augmented start rule, and no production may be empty.
    pub fn build(productions: &'static [Production]) -> Result<Grammar, GrammarError> {
        let first = first_sets(productions);
        let follow = follow_sets(productions, &first);

        let start = closure(productions, [(0, 0)].into_iter().collect());
        let mut states = vec![start.clone()];
        let mut index: HashMap<ItemSet, usize> = HashMap::new();
        index.insert(start, 0);
        let mut transitions: Vec<HashMap<Symbol, usize>> = vec![HashMap::new()];

        let mut next = 0;
        while next < states.len() {
            let symbols: BTreeSet<Symbol> = states[next]
                .iter()
                .filter_map(|&(p, dot)| productions[p].rhs.get(dot).copied())
                .collect();

            for symbol in symbols {
                let kernel: ItemSet = states[next]
                    .iter()
                    .filter(|&&(p, dot)| productions[p].rhs.get(dot) == Some(&symbol))
                    .map(|&(p, dot)| (p, dot + 1))
                    .collect();
                let target = closure(productions, kernel);
                let id = match index.get(&target) {
                    Some(&id) => id,
                    None => {
                        let id = states.len();
                        index.insert(target.clone(), id);
                        states.push(target);
                        transitions.push(HashMap::new());
                        id
                    }
                };
                transitions[next].insert(symbol, id);
            }
            next += 1;
        }

        let mut action = vec![HashMap::new(); states.len()];
        let mut goto = vec![HashMap::new(); states.len()];

        for (state, items) in states.iter().enumerate() {
            for (&symbol, &target) in &transitions[state] {
                match symbol {
                    Symbol::T(terminal) => {
                        insert_action(&mut action[state], state, terminal, Action::Shift(target))?
                    }
                    Symbol::N(nt) => {
                        goto[state].insert(nt, target);
                    }
                }
            }

            for &(p, dot) in items {
                let production = &productions[p];
                if dot < production.rhs.len() {
                    continue;
                }
                if p == 0 {
                    insert_action(&mut action[state], state, Terminal::End, Action::Accept)?;
                    continue;
                }
                for &terminal in &follow[&production.lhs] {
                    insert_action(&mut action[state], state, terminal, Action::Reduce(p))?;
                }
            }
        }

        debug!(
            "grammar tables built: {} productions, {} states",
            productions.len(),
            states.len()
        );

        Ok(Grammar {
            productions,
            action,
            goto,
        })
    }

    pub fn action(&self, state: usize, lookahead: Terminal) -> Option<Action> {
        self.action.get(state)?.get(&lookahead).copied()
    }

    pub fn goto(&self, state: usize, nt: NonTerminal) -> Option<usize> {
        self.goto.get(state)?.get(&nt).copied()
    }

    pub fn state_count(&self) -> usize {
        self.action.len()
    }

    /// Terminals with an action in `state`, for diagnostics.
    pub fn expected(&self, state: usize) -> Vec<Terminal> {
        let mut expected: Vec<Terminal> = self
            .action
            .get(state)
            .map(|row| row.keys().copied().collect())
            .unwrap_or_default();
        expected.sort();
        expected
    }
}

fn insert_action(
    row: &mut HashMap<Terminal, Action>,
    state: usize,
    terminal: Terminal,
    incoming: Action,
) -> Result<(), GrammarError> {
    match row.get(&terminal) {
        Some(&existing) if existing != incoming => Err(GrammarError::Conflict {
            state,
            terminal,
            existing,
            incoming,
        }),
        _ => {
            row.insert(terminal, incoming);
            Ok(())
        }
    }
}

fn closure(productions: &[Production], mut items: ItemSet) -> ItemSet {
    let mut pending: Vec<Item> = items.iter().copied().collect();
    while let Some((p, dot)) = pending.pop() {
        if let Some(Symbol::N(nt)) = productions[p].rhs.get(dot) {
            for (q, candidate) in productions.iter().enumerate() {
                if candidate.lhs == *nt && items.insert((q, 0)) {
                    pending.push((q, 0));
                }
            }
        }
    }
    items
}

fn first_sets(productions: &[Production]) -> HashMap<NonTerminal, BTreeSet<Terminal>> {
    let mut first: HashMap<NonTerminal, BTreeSet<Terminal>> = HashMap::new();
    let mut changed = true;
    while changed {
        changed = false;
        for production in productions {
            let additions: BTreeSet<Terminal> = match production.rhs[0] {
                Symbol::T(terminal) => [terminal].into_iter().collect(),
                Symbol::N(nt) => first.get(&nt).cloned().unwrap_or_default(),
            };
            let entry = first.entry(production.lhs).or_default();
            for terminal in additions {
                changed |= entry.insert(terminal);
            }
        }
    }
    first
}

fn follow_sets(
    productions: &[Production],
    first: &HashMap<NonTerminal, BTreeSet<Terminal>>,
) -> HashMap<NonTerminal, BTreeSet<Terminal>> {
    let mut follow: HashMap<NonTerminal, BTreeSet<Terminal>> = HashMap::new();
    follow.entry(productions[0].lhs).or_default().insert(Terminal::End);

    let mut changed = true;
    while changed {
        changed = false;
        for production in productions {
            for (i, symbol) in production.rhs.iter().enumerate() {
                let Symbol::N(nt) = *symbol else {
                    continue;
                };
                let additions: BTreeSet<Terminal> = match production.rhs.get(i + 1) {
                    Some(Symbol::T(terminal)) => [*terminal].into_iter().collect(),
                    Some(Symbol::N(next)) => first.get(next).cloned().unwrap_or_default(),
                    None => follow.get(&production.lhs).cloned().unwrap_or_default(),
                };
                let entry = follow.entry(nt).or_default();
                for terminal in additions {
                    changed |= entry.insert(terminal);
                }
            }
        }
    }
    follow
}
