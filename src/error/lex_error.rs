#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// Found a character that does not start any lexeme.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The byte offset of the character in the input.
        offset:    usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, offset } => {
                write!(f, "Error at offset {offset}: Unrecognized character '{character}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
