//! Lexical classifier for whitespace-delimited lexemes.
//!
//! A finite-state machine whose states are [`TokenType`] values. The machine
//! is driven by a transition table mapping each state to an ordered list of
//! (matcher, next-state) pairs; for each lexeme the first matcher that
//! accepts it decides the next state, and the lexeme is emitted as a token
//! tagged with that state. A lexeme no matcher accepts drives the machine
//! into the Invalid sink state, and the offending lexeme itself is recorded
//! with type Invalid.
//!
//! The table is read-only after construction, so one classifier can serve
//! any number of `classify` calls (concurrently, if desired): the per-call
//! state lives on the stack of the call.

use rustc_hash::FxHashMap;

use super::token::{Token, TokenType};

/// Predicate over a single lexeme.
///
/// Literal matchers compare the whole lexeme against fixed text; the two
/// structural matchers classify identifiers and `0x`-prefixed hexadecimal
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Literal(&'static str),
    Identifier,
    HexNumber,
}

impl Matcher {
    /// Whether this matcher accepts the given lexeme.
    pub fn matches(&self, lexeme: &str) -> bool {
        match self {
            Matcher::Literal(text) => lexeme == *text,
            Matcher::Identifier => is_identifier(lexeme),
            Matcher::HexNumber => is_hex_number(lexeme),
        }
    }
}

/// Non-empty, starts with a letter or underscore, and continues with
/// letters, digits, or underscores only.
fn is_identifier(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// A `0x` prefix followed by one or more hexadecimal digits. The bare
/// prefix `0x` is rejected.
fn is_hex_number(lexeme: &str) -> bool {
    match lexeme.strip_prefix("0x") {
        Some(digits) if !digits.is_empty() => {
            digits.chars().all(|ch| ch.is_ascii_hexdigit())
        }
        _ => false,
    }
}

/// Table-driven lexical classifier.
pub struct Classifier {
    transitions: FxHashMap<TokenType, Vec<(Matcher, TokenType)>>,
    initial: TokenType,
    invalid: TokenType,
}

impl Classifier {
    /// An empty machine with the given start and sink states.
    pub fn new(initial: TokenType, invalid: TokenType) -> Self {
        Self {
            transitions: FxHashMap::default(),
            initial,
            invalid,
        }
    }

    /// Append a transition to `from`'s list. Matchers are tried in
    /// insertion order and the first match wins.
    pub fn add_transition(&mut self, from: TokenType, matcher: Matcher, to: TokenType) {
        self.transitions.entry(from).or_default().push((matcher, to));
    }

    /// Classify an ordered sequence of lexemes.
    ///
    /// Emits one token per consumed lexeme, typed by the state reached
    /// after reading it. Consumption stops once the machine is in the
    /// Invalid state, so trailing lexemes after a failure are dropped.
    /// If the final state is not Invalid (true for empty input, which
    /// never leaves the start state), a single EndOfStream token is
    /// appended.
    pub fn classify(&self, lexemes: &[&str]) -> Vec<Token> {
        let mut state = self.initial;
        let mut tokens = Vec::with_capacity(lexemes.len() + 1);

        for &lexeme in lexemes {
            if state == self.invalid {
                break;
            }

            state = self
                .transitions
                .get(&state)
                .and_then(|rules| rules.iter().find(|(matcher, _)| matcher.matches(lexeme)))
                .map_or(self.invalid, |(_, to)| *to);

            tokens.push(Token::new(state, lexeme));
        }

        if state != self.invalid {
            tokens.push(Token::end_of_stream());
        }

        tokens
    }
}

/// The classifier for the supported statement shape:
///
/// ```text
/// do <identifier> <op> <hex> while ( <identifier> <op> <hex> ) ; ...
/// ```
///
/// The Semicolon → `do` transition re-enters the machine for the next
/// statement. Note that greater-equal is spelled `"=>"` in this table.
pub fn do_while_classifier() -> Classifier {
    use TokenType::*;

    let mut classifier = Classifier::new(Empty, Invalid);

    classifier.add_transition(Empty, Matcher::Literal("do"), Do);
    classifier.add_transition(Do, Matcher::Identifier, Identifier);
    classifier.add_transition(Identifier, Matcher::Literal("<="), LessEqual);
    classifier.add_transition(Identifier, Matcher::Literal("="), Equal);
    classifier.add_transition(Identifier, Matcher::Literal("=>"), GreaterEqual);
    classifier.add_transition(LessEqual, Matcher::HexNumber, HexNumber);
    classifier.add_transition(Equal, Matcher::HexNumber, HexNumber);
    classifier.add_transition(GreaterEqual, Matcher::HexNumber, HexNumber);
    classifier.add_transition(HexNumber, Matcher::Literal("while"), While);

    classifier.add_transition(While, Matcher::Literal("("), LeftParen);
    classifier.add_transition(LeftParen, Matcher::Identifier, Identifier);
    classifier.add_transition(Identifier, Matcher::Literal(":="), Assignment);
    classifier.add_transition(Assignment, Matcher::HexNumber, HexNumber);
    classifier.add_transition(HexNumber, Matcher::Literal(")"), RightParen);
    classifier.add_transition(RightParen, Matcher::Literal(";"), Semicolon);

    classifier.add_transition(Semicolon, Matcher::Literal("do"), Do);

    classifier
}
