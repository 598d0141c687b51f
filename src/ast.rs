use crate::token::{Token, TokenType};

/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// Nodes are immutable once built and compared structurally: two trees
/// are equal when their variants, operator tokens and children are equal,
/// position by position. Binary nodes always have exactly two ordered
/// children and unary nodes exactly one.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal leaf.
    Value {
        /// The `Integer` or `Real` token holding the literal text.
        token: Token,
    },
    /// A unary application wrapping exactly one child.
    Term {
        /// The `+` or `-` operator token.
        op:    Token,
        /// The operand.
        child: Box<Self>,
    },
    /// A binary application with ordered operands.
    Op {
        /// The operator token: `+`, `-`, `*`, `/` or `**`.
        op:    Token,
        /// The left operand, evaluated first.
        left:  Box<Self>,
        /// The right operand.
        right: Box<Self>,
    },
    /// The top-level program.
    Program {
        /// The top-level expressions in source order; the grammar always
        /// yields exactly one.
        subs: Vec<Self>,
    },
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+`)
    Plus,
    /// Negation (`-`)
    Minus,
}

impl UnaryOperator {
    /// Maps a token to its corresponding unary operator.
    ///
    /// # Parameters
    /// - `token`: Token to convert.
    ///
    /// # Returns
    /// `Some(UnaryOperator)` if the token is a `+` or `-` operator,
    /// otherwise `None`.
    #[must_use]
    pub fn from_token(token: &Token) -> Option<Self> {
        if token.kind != TokenType::Operator {
            return None;
        }
        match token.code.as_str() {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

impl BinaryOperator {
    /// Maps a token to its corresponding binary operator.
    ///
    /// # Parameters
    /// - `token`: Token to convert.
    ///
    /// # Returns
    /// `Some(BinaryOperator)` if the token is one of the arithmetic
    /// operators, otherwise `None`.
    ///
    /// ## Example
    /// ```
    /// use calcvm::{
    ///     ast::BinaryOperator,
    ///     token::{Token, TokenType},
    /// };
    ///
    /// assert_eq!(BinaryOperator::from_token(&Token::new("**", TokenType::Operator)),
    ///            Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_token(&Token::new("(", TokenType::Paren)), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &Token) -> Option<Self> {
        if token.kind != TokenType::Operator {
            return None;
        }
        match token.code.as_str() {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "**" => Some(Self::Pow),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Pow => write!(f, "**"),
        }
    }
}
