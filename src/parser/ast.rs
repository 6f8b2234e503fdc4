//! AST definitions for the do-while recognizer.

use std::fmt;

/// A labeled tree node.
///
/// Structural nodes ("Program", "DoWhile", "Condition", "Expression") carry
/// an empty value; leaf nodes ("Identifier", "Operator", "HexNumber") carry
/// the literal text of the token they came from. Each node exclusively owns
/// its children, so the tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    pub label: String,
    pub value: String,
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// A structural node with no value and no children yet.
    pub fn branch(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            children: Vec::new(),
        }
    }

    /// A leaf node carrying literal token text.
    pub fn leaf(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            children: Vec::new(),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}: {}", "", self.label, self.value, indent = depth * 2)?;
        for child in &self.children {
            child.render(f, depth + 1)?;
        }
        Ok(())
    }
}

/// One line per node, `label: value`, indented two spaces per depth level.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_indents_by_depth() {
        let mut expr = AstNode::branch("Expression");
        expr.children.push(AstNode::leaf("Identifier", "a"));
        expr.children.push(AstNode::leaf("Operator", ":="));
        expr.children.push(AstNode::leaf("HexNumber", "0x5"));

        let mut root = AstNode::branch("Program");
        root.children.push(expr);

        let rendered = root.to_string();
        let expected = concat!(
            "Program: \n",
            "  Expression: \n",
            "    Identifier: a\n",
            "    Operator: :=\n",
            "    HexNumber: 0x5\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_structural_equality() {
        let a = AstNode::leaf("Identifier", "x");
        let b = AstNode::leaf("Identifier", "x");
        assert_eq!(a, b);
        assert_ne!(a, AstNode::leaf("Identifier", "y"));
    }
}
