/// Lexical errors.
///
/// Defines the error raised during tokenization when a character does
/// not start any lexeme. Carries the offending character and its byte
/// offset for diagnostics.
pub mod lex_error;
/// Syntax errors.
///
/// Defines all error types that can occur while parsing a token
/// sequence against the grammar: unexpected or missing tokens,
/// unmatched parentheses, trailing input, empty input.
pub mod syntax_error;
/// Arithmetic errors.
///
/// Contains the error types that can be raised during evaluation, in
/// either the tree interpreter or the virtual machine.
pub mod arithmetic_error;

pub use arithmetic_error::ArithmeticError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;

/// Any error the expression pipeline can produce.
///
/// The text-level entry points return this umbrella so `?` propagates
/// each stage's error unchanged: stages never recover from or rewrap a
/// child stage's error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tokenizer rejected a character.
    Lex(LexError),
    /// The parser rejected the token sequence.
    Syntax(SyntaxError),
    /// Evaluation divided by an exactly-zero right operand.
    Arithmetic(ArithmeticError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => std::fmt::Display::fmt(error, f),
            Self::Syntax(error) => std::fmt::Display::fmt(error, f),
            Self::Arithmetic(error) => std::fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            Self::Syntax(error) => Some(error),
            Self::Arithmetic(error) => Some(error),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<ArithmeticError> for Error {
    fn from(error: ArithmeticError) -> Self {
        Self::Arithmetic(error)
    }
}
