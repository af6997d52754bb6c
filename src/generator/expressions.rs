//! Expression rules
//!
//! Expressions render to a string that the calling statement places on its
//! own line. Operators and literals pass through with their C spelling.

use super::Generator;
use crate::parser::ast::{AstNode, BinOp};

/// Python name for a C library function, if it has one
fn builtin_alias(name: &str) -> &str {
    match name {
        "printf" => "print",
        _ => name,
    }
}

/// Binding strength of an infix expression as rendered, `None` for atoms.
/// Assignment binds loosest. Constructs rendered as an unhandled marker are
/// atoms, since parentheses would end up inside the comment.
fn binding(node: &AstNode) -> Option<u8> {
    match node {
        AstNode::BinaryOp { op, .. } => Some(op.precedence()),
        AstNode::Assignment { .. } => Some(0),
        _ => None,
    }
}

impl Generator {
    /// Render an expression. Constructs with no rule yield the inline marker.
    pub(crate) fn expression(&mut self, node: &AstNode) -> String {
        match node {
            AstNode::Variable(name, _) => name.clone(),
            AstNode::Literal { text, .. } => text.clone(),
            AstNode::Null { .. } => "None".to_string(),
            AstNode::Assignment { lhs, rhs, .. } => {
                format!("{} = {}", self.expression(lhs), self.expression(rhs))
            }
            AstNode::BinaryOp {
                op, left, right, ..
            } => {
                let left = self.child(*op, left, false);
                let right = self.child(*op, right, true);
                format!("{} {} {}", left, op.symbol(), right)
            }
            AstNode::UnaryOp { op, operand, .. } => {
                let text = self.operand(operand);
                // `-(-y)` must not collapse into `--y`
                if matches!(operand.as_ref(), AstNode::UnaryOp { .. })
                    && text.starts_with(op.symbol())
                {
                    format!("{}({})", op.symbol(), text)
                } else {
                    format!("{}{}", op.symbol(), text)
                }
            }
            AstNode::FunctionCall { name, args, .. } => {
                format!("{}({})", builtin_alias(name), self.arguments(args))
            }
            AstNode::ArrayAccess { array, index, .. } => {
                format!("{}[{}]", self.expression(array), self.expression(index))
            }
            AstNode::InitList { elements, .. } => format!("[{}]", self.arguments(elements)),
            _ => self.unhandled(node),
        }
    }

    /// Render an operand that sits next to a prefix operator or `*`;
    /// binary expressions and assignments keep their grouping.
    pub(crate) fn operand(&mut self, node: &AstNode) -> String {
        let text = self.expression(node);
        if binding(node).is_some() {
            format!("({})", text)
        } else {
            text
        }
    }

    /// Operand of a binary operator, parenthesized when C grouping would
    /// otherwise be lost. Operators are left-associative, so a right
    /// operand of equal strength needs parentheses too.
    fn child(&mut self, parent: BinOp, node: &AstNode, right: bool) -> String {
        let text = self.expression(node);
        match binding(node) {
            Some(strength)
                if strength < parent.precedence()
                    || (right && strength == parent.precedence()) =>
            {
                format!("({})", text)
            }
            _ => text,
        }
    }

    fn arguments(&mut self, args: &[AstNode]) -> String {
        args.iter()
            .map(|arg| self.expression(arg))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::generate;
    use crate::parser::frontend::parse;
    use pretty_assertions::assert_eq;

    /// Translate a single expression statement inside a function body
    fn expr(source: &str) -> String {
        let python = generate(&parse(&format!("void f() {{ {}; }}", source)).unwrap());
        python
            .strip_prefix("def f():\n    ")
            .map(str::to_string)
            .unwrap_or(python)
    }

    #[test]
    fn test_identifiers_and_literals_verbatim() {
        assert_eq!(expr("x"), "x");
        assert_eq!(expr("0x1F"), "0x1F");
        assert_eq!(expr("3.5f"), "3.5f");
        assert_eq!(expr("'a'"), "'a'");
        assert_eq!(expr("\"%d\\n\""), "\"%d\\n\"");
        assert_eq!(expr("NULL"), "None");
    }

    #[test]
    fn test_binary_operators_pass_through() {
        assert_eq!(expr("a + b * c"), "a + b * c");
        assert_eq!(expr("a && b || !c"), "a && b || !c");
        assert_eq!(expr("x << 2 == y"), "x << 2 == y");
    }

    #[test]
    fn test_grouping_is_preserved() {
        assert_eq!(expr("(a + b) * c"), "(a + b) * c");
        assert_eq!(expr("a - (b - c)"), "a - (b - c)");
        assert_eq!(expr("a - b - c"), "a - b - c");
        assert_eq!(expr("(a * b) + c"), "a * b + c");
        assert_eq!(expr("-(a + b)"), "-(a + b)");
    }

    #[test]
    fn test_nested_assignment_keeps_grouping() {
        assert_eq!(expr("x = (a = b) + 1"), "x = (a = b) + 1");
        assert_eq!(expr("y = 1 + (a = b)"), "y = 1 + (a = b)");
        assert_eq!(expr("-(a = b)"), "-(a = b)");
    }

    #[test]
    fn test_stacked_unary_stays_apart() {
        assert_eq!(expr("-(-y)"), "-(-y)");
        assert_eq!(expr("-(--y)"), "-(--y)");
        assert_eq!(expr("!(!y)"), "!(!y)");
        assert_eq!(expr("-(!y)"), "-!y");
    }

    #[test]
    fn test_unary_renders_prefix() {
        assert_eq!(expr("i++"), "++i");
        assert_eq!(expr("--i"), "--i");
        assert_eq!(expr("-x"), "-x");
        assert_eq!(expr("*p"), "*p");
    }

    #[test]
    fn test_assignment() {
        assert_eq!(expr("x = y = 0"), "x = y = 0");
        assert_eq!(expr("a[i] = a[i - 1] + 1"), "a[i] = a[i - 1] + 1");
    }

    #[test]
    fn test_calls() {
        assert_eq!(expr("printf(\"%d\\n\", x)"), "print(\"%d\\n\", x)");
        assert_eq!(expr("foo()"), "foo()");
        assert_eq!(expr("max(a, b + 1)"), "max(a, b + 1)");
    }

    #[test]
    fn test_unhandled_inline() {
        assert_eq!(expr("x += 1"), "# [Unhandled: CompoundAssignment]");
        assert_eq!(expr("y = c ? 1 : 2"), "y = # [Unhandled: TernaryOp]");
        assert_eq!(expr("n = sizeof(int)"), "n = # [Unhandled: Sizeof]");
        assert_eq!(expr("v = (float)n"), "v = # [Unhandled: Cast]");
        assert_eq!(expr("p.x"), "# [Unhandled: MemberAccess]");
    }
}
