#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum SyntaxError {
    /// The input contained no tokens at all.
    EmptyInput,
    /// Found a token that cannot appear at the current position.
    UnexpectedToken {
        /// The offending token text.
        token: String,
    },
    /// Reached the end of input where a token was required.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but the input ended.
    ExpectedClosingParen,
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first trailing token text.
        token: String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Empty input."),

            Self::UnexpectedToken { token } => write!(f, "Unexpected token: {token}."),

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::ExpectedClosingParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },

            Self::TrailingTokens { token } => {
                write!(f, "Extra tokens after expression. Check your input: {token}")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
