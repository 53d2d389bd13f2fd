//! Printable forms of an expression tree.
//!
//! # Features
//!
//! - **Canonical spoken form** via [`to_spoken()`] (also `Display` for [`Expr`]) -
//!   English vocabulary only, parenthesized only where precedence requires, and
//!   accepted back by the lexer and parser as the same tree
//! - **LaTeX** via [`to_latex()`] - for rendering
//! - **Tree form** via [`to_tree()`] - compact S-expression for diagnostics
//! - **JSON** via [`to_json()`] - tagged objects for the symbolic evaluator, with
//!   numbers as exact decimal strings
//!
//! # Examples
//!
//! ```
//! use spoken_math::{convert, output};
//!
//! let expr = convert("open bracket 1 plus x close bracket mal 3").unwrap();
//!
//! assert_eq!(
//!     output::to_spoken(&expr),
//!     "open parenthesis 1 plus x close parenthesis times 3"
//! );
//! assert_eq!(output::to_tree(&expr), "(mul (add 1 x) 3)");
//! assert_eq!(output::to_latex(&expr), r"\left(1 + x\right) \cdot 3");
//! ```

use std::fmt;

use serde_json::json;

use crate::{
    ast::{BinOp, Expr, Function, TokenKind},
    grammar::{ATOM_PRECEDENCE, Assoc, precedence},
};

const OPEN: &str = "open parenthesis";
const CLOSE: &str = "close parenthesis";

fn operator_kind(op: BinOp) -> TokenKind {
    match op {
        BinOp::Add => TokenKind::Plus,
        BinOp::Sub => TokenKind::Minus,
        BinOp::Mul => TokenKind::Times,
        BinOp::Div => TokenKind::Div,
    }
}

/// Binding power and associativity of the operator at the root of `expr`.
fn binding(expr: &Expr) -> (u8, Assoc) {
    let kind = match expr {
        Expr::BinaryOp { op, .. } => operator_kind(*op),
        Expr::Power { .. } => TokenKind::Pow,
        Expr::UnaryFunction { .. } => TokenKind::Func,
        Expr::NumberLiteral(_) | Expr::Symbol(_) => return (ATOM_PRECEDENCE, Assoc::Left),
    };
    precedence(kind).unwrap_or((ATOM_PRECEDENCE, Assoc::Left))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Whether `child` must be grouped to keep its place under an operator of
/// the given binding power.
fn needs_group(child: &Expr, parent: (u8, Assoc), side: Side) -> bool {
    let (child_prec, _) = binding(child);
    let (prec, assoc) = parent;
    let min = match (assoc, side) {
        (Assoc::Left, Side::Left) | (Assoc::Right, Side::Right) => prec,
        // The base of a power must be an atom or a function application.
        (Assoc::Right, Side::Left) => prec + 1,
        (Assoc::Left, Side::Right) => prec + 1,
    };
    child_prec < min
}

pub struct SpokenPrinter;

impl SpokenPrinter {
    pub fn print(&self, expr: &Expr) -> String {
        let mut out = String::new();
        self.print_expr(expr, &mut out);
        out
    }

    fn print_child(&self, child: &Expr, grouped: bool, out: &mut String) {
        if grouped {
            out.push_str(OPEN);
            out.push(' ');
            self.print_expr(child, out);
            out.push(' ');
            out.push_str(CLOSE);
        } else {
            self.print_expr(child, out);
        }
    }

    fn print_expr(&self, expr: &Expr, out: &mut String) {
        match expr {
            Expr::NumberLiteral(value) => out.push_str(&value.to_string()),
            Expr::Symbol(name) => out.push_str(name),
            Expr::BinaryOp { op, left, right } => {
                let parent = binding(expr);
                self.print_child(left, needs_group(left, parent, Side::Left), out);
                out.push(' ');
                out.push_str(op.spoken());
                out.push(' ');
                self.print_child(right, needs_group(right, parent, Side::Right), out);
            }
            Expr::Power { base, exponent } => {
                let parent = binding(expr);
                self.print_child(base, needs_group(base, parent, Side::Left), out);
                out.push_str(" to the power of ");
                self.print_child(exponent, needs_group(exponent, parent, Side::Right), out);
            }
            Expr::UnaryFunction { function, argument } => {
                out.push_str(function.spoken());
                out.push(' ');
                let parent = binding(expr);
                self.print_child(argument, needs_group(argument, parent, Side::Right), out);
            }
        }
    }
}

pub struct LatexPrinter;

impl LatexPrinter {
    pub fn print(&self, expr: &Expr) -> String {
        match expr {
            Expr::NumberLiteral(value) => value.to_string(),
            Expr::Symbol(name) => self.symbol(name),
            Expr::BinaryOp { op, left, right } => {
                let parent = binding(expr);
                match op {
                    BinOp::Div => format!(r"\frac{{{}}}{{{}}}", self.print(left), self.print(right)),
                    _ => {
                        let sign = match op {
                            BinOp::Add => "+",
                            BinOp::Sub => "-",
                            _ => r"\cdot",
                        };
                        format!(
                            "{} {} {}",
                            self.child(left, needs_group(left, parent, Side::Left)),
                            sign,
                            self.child(
                                right,
                                needs_group(right, parent, Side::Right) || is_negative(right)
                            ),
                        )
                    }
                }
            }
            Expr::Power { base, exponent } => {
                let grouped = needs_group(base, binding(expr), Side::Left)
                    || is_negative(base)
                    || matches!(**base, Expr::UnaryFunction { .. });
                format!("{}^{{{}}}", self.child(base, grouped), self.print(exponent))
            }
            Expr::UnaryFunction { function, argument } => {
                let inner = self.print(argument);
                match function {
                    Function::Sqrt => format!(r"\sqrt{{{}}}", inner),
                    Function::Abs => format!(r"\left|{}\right|", inner),
                    Function::Exp => format!("e^{{{}}}", inner),
                    other => format!(r"\{}\left({}\right)", other.name(), inner),
                }
            }
        }
    }

    fn child(&self, expr: &Expr, grouped: bool) -> String {
        if grouped {
            format!(r"\left({}\right)", self.print(expr))
        } else {
            self.print(expr)
        }
    }

    fn symbol(&self, name: &str) -> String {
        if name.chars().count() == 1 {
            name.to_string()
        } else {
            format!(r"\mathit{{{}}}", name.replace('_', r"\_"))
        }
    }
}

fn is_negative(expr: &Expr) -> bool {
    matches!(expr, Expr::NumberLiteral(value) if value.is_negative())
}

/// Canonical spoken form.
pub fn to_spoken(expr: &Expr) -> String {
    SpokenPrinter.print(expr)
}

pub fn to_latex(expr: &Expr) -> String {
    LatexPrinter.print(expr)
}

/// S-expression form, e.g. `(add 2 (mul 3 4))`.
pub fn to_tree(expr: &Expr) -> String {
    match expr {
        Expr::NumberLiteral(value) => value.to_string(),
        Expr::Symbol(name) => name.clone(),
        Expr::BinaryOp { op, left, right } => {
            format!("({} {} {})", op.name(), to_tree(left), to_tree(right))
        }
        Expr::Power { base, exponent } => format!("(pow {} {})", to_tree(base), to_tree(exponent)),
        Expr::UnaryFunction { function, argument } => {
            format!("({} {})", function.name(), to_tree(argument))
        }
    }
}

/// Tagged JSON tree for the downstream evaluator.
pub fn to_json(expr: &Expr) -> serde_json::Value {
    match expr {
        Expr::NumberLiteral(value) => json!({ "type": "number", "value": value.to_string() }),
        Expr::Symbol(name) => json!({ "type": "symbol", "name": name }),
        Expr::BinaryOp { op, left, right } => json!({
            "type": "binary",
            "op": op.name(),
            "left": to_json(left),
            "right": to_json(right),
        }),
        Expr::Power { base, exponent } => json!({
            "type": "power",
            "base": to_json(base),
            "exponent": to_json(exponent),
        }),
        Expr::UnaryFunction { function, argument } => json!({
            "type": "function",
            "name": function.name(),
            "argument": to_json(argument),
        }),
    }
}

pub fn to_json_string(expr: &Expr, pretty: bool) -> Result<String, serde_json::Error> {
    let value = to_json(expr);
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_spoken(self))
    }
}
