//! Recursive descent tree builder over classified tokens.
//!
//! Grammar, one procedure per rule:
//!
//! ```text
//! Program    := (DoWhile ";")*            until EndOfStream
//! DoWhile    := "do" Expression "while" "(" Condition ")"
//! Condition  := Expression
//! Expression := Identifier Op (Identifier | HexNumber)
//! Op         := "<=" | "=>" | "=" | ":="
//! ```
//!
//! One token of lookahead, no backtracking, no recovery: the first
//! expectation that is not met aborts the whole build. Callers are expected
//! to verify the token sequence with [`is_terminated`] first; building from
//! an unterminated sequence fails on its first mismatched token rather than
//! being meaningful.
//!
//! [`is_terminated`]: super::token::is_terminated

use std::fmt;

use super::ast::AstNode;
use super::token::{Token, TokenType};

/// Tree builder error type.
///
/// Carries the cursor position of the offending token, the token kind that
/// was actually found there, and what the grammar expected instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    pub position: usize,
    pub found: TokenType,
    pub message: String,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AST error at token {}: found {}, {}",
            self.position, self.found, self.message
        )
    }
}

impl std::error::Error for BuildError {}

/// Recursive descent builder for the do-while statement grammar.
pub struct AstBuilder {
    tokens: Vec<Token>,
    position: usize,
}

impl AstBuilder {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Build the whole program tree.
    ///
    /// The root is always a "Program" node with one "DoWhile" child per
    /// statement; a terminated but empty token sequence yields a childless
    /// root.
    pub fn build_tree(&mut self) -> Result<AstNode, BuildError> {
        let mut root = AstNode::branch("Program");

        while !self.is_at_end() {
            root.children.push(self.parse_do_while()?);
            self.consume(TokenType::Semicolon, "expected ';' after do-while statement")?;
        }

        Ok(root)
    }

    /// DoWhile := "do" Expression "while" "(" Condition ")"
    fn parse_do_while(&mut self) -> Result<AstNode, BuildError> {
        self.consume(TokenType::Do, "expected 'do' at start of statement")?;

        let mut node = AstNode::branch("DoWhile");
        node.children.push(self.parse_expression()?);

        self.consume(TokenType::While, "expected 'while' after do body")?;
        self.consume(TokenType::LeftParen, "expected '(' after 'while'")?;
        node.children.push(self.parse_condition()?);
        self.consume(TokenType::RightParen, "expected ')' after while condition")?;

        Ok(node)
    }

    /// Condition := Expression, wrapped so the condition subtree is
    /// distinguishable from the loop body expression.
    fn parse_condition(&mut self) -> Result<AstNode, BuildError> {
        let mut node = AstNode::branch("Condition");
        node.children.push(self.parse_expression()?);
        Ok(node)
    }

    /// Expression := Identifier Op (Identifier | HexNumber)
    fn parse_expression(&mut self) -> Result<AstNode, BuildError> {
        let mut node = AstNode::branch("Expression");

        let lhs = self.consume(
            TokenType::Identifier,
            "expected identifier on the left-hand side",
        )?;
        node.children.push(AstNode::leaf("Identifier", lhs.text));

        let op = if self.check(TokenType::LessEqual)
            || self.check(TokenType::GreaterEqual)
            || self.check(TokenType::Equal)
            || self.check(TokenType::Assignment)
        {
            self.advance()
        } else {
            return Err(self.error("expected comparison or assignment operator"));
        };
        node.children.push(AstNode::leaf("Operator", op.text));

        let rhs = if self.check(TokenType::Identifier) || self.check(TokenType::HexNumber) {
            self.advance()
        } else {
            return Err(self.error(
                "expected identifier or hexadecimal number on the right-hand side",
            ));
        };
        let rhs_label = if rhs.kind == TokenType::Identifier {
            "Identifier"
        } else {
            "HexNumber"
        };
        node.children.push(AstNode::leaf(rhs_label, rhs.text));

        Ok(node)
    }

    // ===== Helper methods =====

    /// Advance past the expected token kind or fail with `message`.
    /// The sole error-raising point for the keyword/punctuation rules.
    fn consume(&mut self, kind: TokenType, message: &str) -> Result<Token, BuildError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(message))
        }
    }

    fn check(&self, kind: TokenType) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        self.position += 1;
        token
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn is_at_end(&self) -> bool {
        self.peek()
            .map_or(true, |token| token.kind == TokenType::EndOfStream)
    }

    fn error(&self, message: &str) -> BuildError {
        BuildError {
            position: self.position,
            found: self
                .peek()
                .map_or(TokenType::EndOfStream, |token| token.kind),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::classifier::do_while_classifier;

    fn classify(input: &str) -> Vec<Token> {
        let lexemes: Vec<&str> = input.split_whitespace().collect();
        do_while_classifier().classify(&lexemes)
    }

    #[test]
    fn test_build_single_statement() {
        let tokens = classify("do a := 0x5 while ( a <= 0x4 ) ;");
        let tree = AstBuilder::new(tokens).build_tree().unwrap();

        assert_eq!(tree.label, "Program");
        assert_eq!(tree.children.len(), 1);

        let do_while = &tree.children[0];
        assert_eq!(do_while.label, "DoWhile");
        assert_eq!(do_while.children.len(), 2);

        let body = &do_while.children[0];
        assert_eq!(body.label, "Expression");
        assert_eq!(body.children[0], AstNode::leaf("Identifier", "a"));
        assert_eq!(body.children[1], AstNode::leaf("Operator", ":="));
        assert_eq!(body.children[2], AstNode::leaf("HexNumber", "0x5"));

        let condition = &do_while.children[1];
        assert_eq!(condition.label, "Condition");
        assert_eq!(condition.children.len(), 1);
        let compare = &condition.children[0];
        assert_eq!(compare.children[0], AstNode::leaf("Identifier", "a"));
        assert_eq!(compare.children[1], AstNode::leaf("Operator", "<="));
        assert_eq!(compare.children[2], AstNode::leaf("HexNumber", "0x4"));
    }

    #[test]
    fn test_build_empty_sequence_yields_childless_program() {
        let tokens = classify("");
        let tree = AstBuilder::new(tokens).build_tree().unwrap();
        assert_eq!(tree.label, "Program");
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_missing_semicolon_reports_position() {
        // Classification of "do a := 0x5 while ( a <= 0x4 )" terminates
        // (RightParen is a legal final state), but the builder requires
        // the ';' that Program demands after each statement.
        let tokens = classify("do a := 0x5 while ( a <= 0x4 )");
        let err = AstBuilder::new(tokens).build_tree().unwrap_err();
        assert_eq!(err.position, 10);
        assert_eq!(err.found, TokenType::EndOfStream);
        assert!(err.message.contains("';'"));
    }

    #[test]
    fn test_unterminated_sequence_fails_on_first_consume() {
        let tokens = classify("do a := 0x5 ) ;");
        // Trailing Invalid token; builder is not obliged to be called on
        // this sequence, but if it is, the first mismatch aborts it.
        let err = AstBuilder::new(tokens).build_tree().unwrap_err();
        assert_eq!(err.found, TokenType::Invalid);
        assert_eq!(err.position, 4);
    }

    #[test]
    fn test_error_display_carries_context() {
        let err = BuildError {
            position: 3,
            found: TokenType::RightParen,
            message: "expected 'while' after do body".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("token 3"));
        assert!(rendered.contains("RightParen"));
        assert!(rendered.contains("expected 'while'"));
    }
}
