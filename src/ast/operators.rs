use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// Addition (`plus`, `und`)
    Add,
    /// Subtraction (`minus`, `abziehen`)
    Sub,
    /// Multiplication (`times`, `mal`)
    Mul,
    /// Division (`divided by`, `durch`)
    Div,
}

impl BinOp {
    /// Canonical spoken form, as accepted back by the lexer.
    pub fn spoken(self) -> &'static str {
        match self {
            BinOp::Add => "plus",
            BinOp::Sub => "minus",
            BinOp::Mul => "times",
            BinOp::Div => "divided by",
        }
    }

    /// Short lower-case name used in tree and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            BinOp::Add => "add",
            BinOp::Sub => "sub",
            BinOp::Mul => "mul",
            BinOp::Div => "div",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical unary functions understood by the downstream evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    ArcSin,
    ArcCos,
    ArcTan,
    /// Natural logarithm; no base argument is represented.
    Log,
    Exp,
    Abs,
    Sqrt,
}

/// Surface name to canonical function. Every `Func` phrase in the lexicon
/// has an entry here.
const SYNONYMS: &[(&str, Function)] = &[
    // English
    ("sin", Function::Sin),
    ("sine", Function::Sin),
    ("cos", Function::Cos),
    ("cosine", Function::Cos),
    ("tan", Function::Tan),
    ("tangent", Function::Tan),
    ("arcsin", Function::ArcSin),
    ("arccos", Function::ArcCos),
    ("arctan", Function::ArcTan),
    ("log", Function::Log),
    ("ln", Function::Log),
    ("exp", Function::Exp),
    ("abs", Function::Abs),
    // German
    ("sinus", Function::Sin),
    ("cosinus", Function::Cos),
];

impl Function {
    pub const ALL: [Function; 10] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::ArcSin,
        Function::ArcCos,
        Function::ArcTan,
        Function::Log,
        Function::Exp,
        Function::Abs,
        Function::Sqrt,
    ];

    /// Resolve a surface function name (any casing) to its canonical function.
    ///
    /// `sqrt` is not reachable by name; it only comes from the `Sqrt` token.
    ///
    /// # Examples
    ///
    /// ```
    /// use spoken_math::ast::Function;
    ///
    /// assert_eq!(Function::from_name("sinus"), Some(Function::Sin));
    /// assert_eq!(Function::from_name("LN"), Some(Function::Log));
    /// assert_eq!(Function::from_name("sqrt"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Function> {
        SYNONYMS
            .iter()
            .find(|(synonym, _)| synonym.eq_ignore_ascii_case(name))
            .map(|(_, func)| *func)
    }

    /// All surface names that resolve to a named function.
    pub fn synonyms() -> impl Iterator<Item = (&'static str, Function)> {
        SYNONYMS.iter().copied()
    }

    /// Canonical spoken form, as accepted back by the lexer.
    pub fn spoken(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::ArcSin => "arcsin",
            Function::ArcCos => "arccos",
            Function::ArcTan => "arctan",
            Function::Log => "log",
            Function::Exp => "exp",
            Function::Abs => "abs",
            Function::Sqrt => "square root of",
        }
    }

    /// Short lower-case name used in tree and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            other => other.spoken(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
