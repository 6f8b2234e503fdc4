//! Token vocabulary shared by the classifier and the tree builder.
//!
//! [`TokenType`] doubles as the classifier's FSM state set: every lexeme is
//! tagged with the state the machine lands in after reading it, so the two
//! roles use one enumeration by construction.

use std::fmt;

/// Lexical categories, also used as classifier states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Start state; never assigned to an emitted token.
    Empty,
    Do,
    While,
    Identifier,
    HexNumber,
    LessEqual,    // <=
    GreaterEqual, // >=
    Equal,        // =
    Assignment,   // :=
    Semicolon,    // ;
    LeftParen,    // (
    RightParen,   // )
    /// Synthetic terminator appended after a successful classification.
    EndOfStream,
    /// Sink state; classification stops once it is reached.
    Invalid,
}

impl TokenType {
    /// Stable display name, one per variant.
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Empty => "Empty",
            TokenType::Do => "Do",
            TokenType::While => "While",
            TokenType::Identifier => "Identifier",
            TokenType::HexNumber => "HexNumber",
            TokenType::LessEqual => "LessEqual",
            TokenType::GreaterEqual => "GreaterEqual",
            TokenType::Equal => "Equal",
            TokenType::Assignment => "Assignment",
            TokenType::Semicolon => "Semicolon",
            TokenType::LeftParen => "LeftParen",
            TokenType::RightParen => "RightParen",
            TokenType::EndOfStream => "EndOfStream",
            TokenType::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexeme annotated with its lexical category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenType, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The synthetic end-of-stream marker (carries no text).
    pub fn end_of_stream() -> Self {
        Self::new(TokenType::EndOfStream, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

/// A token sequence is fit for tree building only when classification ran to
/// completion, i.e. the sequence is non-empty and ends with [`TokenType::EndOfStream`].
pub fn is_terminated(tokens: &[Token]) -> bool {
    tokens
        .last()
        .is_some_and(|token| token.kind == TokenType::EndOfStream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminated_sequence() {
        let tokens = vec![
            Token::new(TokenType::Do, "do"),
            Token::end_of_stream(),
        ];
        assert!(is_terminated(&tokens));
    }

    #[test]
    fn test_empty_sequence_is_not_terminated() {
        assert!(!is_terminated(&[]));
    }

    #[test]
    fn test_trailing_invalid_is_not_terminated() {
        let tokens = vec![
            Token::new(TokenType::Do, "do"),
            Token::new(TokenType::Invalid, ")"),
        ];
        assert!(!is_terminated(&tokens));
    }

    #[test]
    fn test_display_names_are_distinct() {
        let kinds = [
            TokenType::Empty,
            TokenType::Do,
            TokenType::While,
            TokenType::Identifier,
            TokenType::HexNumber,
            TokenType::LessEqual,
            TokenType::GreaterEqual,
            TokenType::Equal,
            TokenType::Assignment,
            TokenType::Semicolon,
            TokenType::LeftParen,
            TokenType::RightParen,
            TokenType::EndOfStream,
            TokenType::Invalid,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
