use rust_decimal::Decimal;

use crate::ast::{BinOp, Function, Number};

/// Expression tree node handed to the symbolic evaluator.
///
/// Each node exclusively owns its children. Grouping parentheses never
/// appear here: a parenthesized phrase is represented by its inner node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Exact decimal literal, of any length
    ///
    /// # Example
    /// ```text
    /// 42
    /// 3.25
    /// 123456789012345678901234567890
    /// ```
    NumberLiteral(Number),

    /// Variable, with its name exactly as scanned
    Symbol(String),

    /// Addition, subtraction, multiplication or division
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `base` to the power of `exponent`
    Power {
        base: Box<Expr>,
        exponent: Box<Expr>,
    },

    /// Canonical function applied to one argument
    ///
    /// # Examples
    /// ```text
    /// sine x
    /// square root of two
    /// ```
    UnaryFunction {
        function: Function,
        argument: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: impl Into<Decimal>) -> Expr {
        Expr::NumberLiteral(Number::Decimal(value.into()))
    }

    pub fn symbol(name: impl Into<String>) -> Expr {
        Expr::Symbol(name.into())
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn power(base: Expr, exponent: Expr) -> Expr {
        Expr::Power {
            base: Box::new(base),
            exponent: Box::new(exponent),
        }
    }

    pub fn function(function: Function, argument: Expr) -> Expr {
        Expr::UnaryFunction {
            function,
            argument: Box::new(argument),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::NumberLiteral(_) | Expr::Symbol(_) => 1,
            Expr::BinaryOp { left, right, .. } => 1 + left.size() + right.size(),
            Expr::Power { base, exponent } => 1 + base.size() + exponent.size(),
            Expr::UnaryFunction { argument, .. } => 1 + argument.size(),
        }
    }

    /// Longest path from this node to a leaf, counting nodes.
    pub fn depth(&self) -> usize {
        match self {
            Expr::NumberLiteral(_) | Expr::Symbol(_) => 1,
            Expr::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Expr::Power { base, exponent } => 1 + base.depth().max(exponent.depth()),
            Expr::UnaryFunction { argument, .. } => 1 + argument.depth(),
        }
    }
}
