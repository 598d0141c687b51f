use logos::Logos;

/// Classifies a lexical token.
///
/// The enum doubles as the scanner definition: `logos` derives a
/// longest-match table from the attached patterns, so `**` wins over `*`
/// and `03.1415` is a single `Real` rather than an `Integer` followed by
/// a stray dot. Whitespace separates tokens and produces none itself.
///
/// `Eof` and `None` carry no patterns and are never produced by the
/// scanner: `Eof` is the end-of-input sentinel consumed internally by the
/// parser, `None` classifies a token that has not been populated.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenType {
    /// Integer literal, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// Real literal with a fractional part, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+")]
    Real,
    /// Arithmetic operator: `+`, `-`, `*`, `/` or `**`.
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("**")]
    Operator,
    /// Grouping parenthesis: `(` or `)`.
    #[token("(")]
    #[token(")")]
    Paren,
    /// End-of-input sentinel.
    Eof,
    /// Placeholder classification for an unpopulated token.
    None,
}

/// One lexical unit: the exact lexeme text and its classification.
///
/// Tokens are immutable and compared structurally. The lexeme text is
/// kept verbatim so syntax trees can be compared for equality and so
/// literal values are parsed from the source text only at evaluation
/// time.
///
/// ## Example
/// ```
/// use calcvm::token::{Token, TokenType};
///
/// let token = Token::new("**", TokenType::Operator);
/// assert_eq!(token, Token::new("**", TokenType::Operator));
/// assert_ne!(token, Token::new("*", TokenType::Operator));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The exact lexeme text, e.g. `"10"`, `"**"` or `"("`.
    pub code: String,
    /// The classification of the lexeme.
    pub kind: TokenType,
}

impl Token {
    /// Creates a token from lexeme text and its classification.
    #[must_use]
    pub fn new(code: &str, kind: TokenType) -> Self {
        Self { code: code.to_string(), kind }
    }
}
