use std::fmt;

/// Token kinds produced by the lexer.
///
/// The set is closed: every lexicon phrase, numeral and identifier maps to
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Operators
    /// Addition
    ///
    /// # Examples
    /// ```text
    /// plus
    /// add
    /// und
    /// ```
    Plus,

    /// Subtraction
    ///
    /// # Examples
    /// ```text
    /// minus
    /// subtract
    /// abziehen
    /// ```
    Minus,

    /// Multiplication
    ///
    /// # Examples
    /// ```text
    /// times
    /// multiplied by
    /// mal
    /// ```
    Times,

    /// Division
    ///
    /// # Examples
    /// ```text
    /// divided by
    /// over
    /// geteilt durch
    /// ```
    Div,

    /// Exponentiation (right-associative)
    ///
    /// # Examples
    /// ```text
    /// to the power of
    /// hoch
    /// ```
    Pow,

    /// Square root prefix
    ///
    /// # Examples
    /// ```text
    /// square root of
    /// wurzel aus
    /// ```
    Sqrt,

    /// Named function prefix; the lexeme carries the surface name
    ///
    /// # Examples
    /// ```text
    /// sine
    /// cosinus
    /// ln
    /// ```
    Func,

    // Literals and identifiers
    /// Digit-form numeral with optional sign and decimal point
    Number,

    /// Identifier not matching any lexicon phrase
    Variable,

    // Grouping
    /// Opening group
    ///
    /// # Examples
    /// ```text
    /// open parenthesis
    /// klammer auf
    /// ```
    LParen,

    /// Closing group
    RParen,
}

impl TokenKind {
    /// True for the four infix operators and `Pow`.
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Times | TokenKind::Div | TokenKind::Pow
        )
    }

    /// True for prefix operators that take exactly one atom.
    pub fn is_prefix(self) -> bool {
        matches!(self, TokenKind::Func | TokenKind::Sqrt)
    }

    /// True for tokens that can begin an operand.
    pub fn starts_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Func
                | TokenKind::Sqrt
                | TokenKind::Number
                | TokenKind::Variable
                | TokenKind::LParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Times => "times",
            TokenKind::Div => "divided by",
            TokenKind::Pow => "to the power of",
            TokenKind::Sqrt => "square root of",
            TokenKind::Func => "function",
            TokenKind::Number => "number",
            TokenKind::Variable => "variable",
            TokenKind::LParen => "open parenthesis",
            TokenKind::RParen => "close parenthesis",
        };
        f.write_str(name)
    }
}

/// A classified unit of input.
///
/// `lexeme` is the exact slice of the input that was matched (original
/// casing and inner whitespace preserved); `position` is its byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }
}
