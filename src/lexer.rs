use logos::Logos;

use crate::{
    error::LexError,
    token::{Token, TokenType},
};

/// Splits raw expression text into an ordered token sequence.
///
/// Runs of spaces, tabs, carriage returns and line feeds separate tokens
/// and carry no token of their own. Lexemes are matched greedily: a
/// digit run followed by `.` and at least one further digit becomes one
/// `Real` token, and `**` is consumed as a single operator before `*` is
/// considered. Sign characters are never absorbed into a numeric
/// literal; `+` and `-` in front of a number always yield separate
/// operator tokens.
///
/// The end-of-input sentinel is not part of the returned sequence; the
/// parser supplies it internally.
///
/// # Parameters
/// - `text`: The expression text to scan.
///
/// # Returns
/// The tokens in source order.
///
/// # Errors
/// Returns `LexError::UnrecognizedCharacter` for the first character
/// that does not start any lexeme, together with its byte offset.
///
/// ## Example
/// ```
/// use calcvm::{
///     lexer::tokenize,
///     token::{Token, TokenType},
/// };
///
/// let tokens = tokenize("10**2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::new("10", TokenType::Integer),
///                 Token::new("**", TokenType::Operator),
///                 Token::new("2", TokenType::Integer)]);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenType::lexer(text);
    let mut tokens = Vec::new();

    while let Some(scanned) = lexer.next() {
        match scanned {
            Ok(kind) => tokens.push(Token::new(lexer.slice(), kind)),
            Err(()) => {
                let character = lexer
                    .slice()
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnrecognizedCharacter { character,
                                                             offset: lexer.span().start });
            },
        }
    }

    Ok(tokens)
}
