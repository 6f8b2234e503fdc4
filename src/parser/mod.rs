//! Statement recognizer and AST builder
//!
//! This module turns one line of whitespace-tokenized input into an AST:
//! - [`token`]: the shared token vocabulary ([`token::TokenType`] doubles as
//!   the classifier's state set)
//! - [`classifier`]: FSM-driven lexical classification (lexemes → tokens)
//! - [`builder`]: recursive descent tree building (tokens → AST)
//! - [`ast`]: AST node definition and indented rendering
//!
//! # Supported grammar
//!
//! Exactly one statement shape, repeatable through the trailing semicolon:
//!
//! ```text
//! do a := 0x5 while ( a <= 0x4 ) ;
//! ```
//!
//! Lexeme boundaries are whatever the caller's whitespace split produced;
//! nothing here re-splits or trims.
//!
//! # Implementation
//!
//! The classifier is a data-driven transition table (first matching
//! predicate wins), the builder a hand-written predictive parser with one
//! token of lookahead. No parser generator dependencies.

pub mod ast;
pub mod builder;
pub mod classifier;
pub mod token;
