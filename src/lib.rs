//! # Introduction
//!
//! dwparse recognizes a single fixed statement grammar — a `do ... while (...)`
//! loop with one assignment/comparison expression form — and builds an AST
//! from it.
//!
//! ## Pipeline
//!
//! ```text
//! Input line → Lexemes → Classifier → Tokens → AstBuilder → AST
//! ```
//!
//! 1. The caller splits a line into whitespace-delimited lexemes.
//! 2. [`parser::classifier`] — a finite-state machine walks a transition
//!    table and tags each lexeme with a [`parser::token::TokenType`]; a
//!    lexeme with no matching transition ends classification in the Invalid
//!    state.
//! 3. [`parser::builder`] — a recursive descent parser consumes the typed
//!    tokens and produces the [`parser::ast::AstNode`] tree, reporting the
//!    first structural violation with position and expectation context.
//!
//! Classification failure is structural (the token sequence does not end in
//! EndOfStream), never a panic or an error value; tree building failure is a
//! [`parser::builder::BuildError`].

pub mod parser;
