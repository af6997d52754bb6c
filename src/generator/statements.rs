//! Statement rules
//!
//! Every statement writes its own lines straight into the emitter; nothing
//! here returns text. Block-shaped constructs go through
//! [`Generator::nested`], which owns the indent/dedent pairing.

use super::{Breakable, Generator, SwitchContext};
use crate::parser::ast::{AstNode, CaseNode, Param, Type};

impl Generator {
    /// Emit one statement (or top-level declaration) at the current depth
    pub(crate) fn visit_statement(&mut self, node: &AstNode) {
        match node {
            AstNode::FunctionDef {
                name, params, body, ..
            } => self.visit_function(name, params, body),
            AstNode::VarDecl {
                name,
                var_type,
                init,
                ..
            } => self.visit_declaration(node, name, var_type, init.as_deref()),
            AstNode::DeclList { declarations, .. } => self.visit_block(declarations),
            AstNode::Return { expr, .. } => {
                let line = match expr {
                    Some(expr) => format!("return {}", self.expression(expr)),
                    None => "return".to_string(),
                };
                self.out.line(&line);
            }
            AstNode::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                let condition = self.expression(condition);
                self.out.line(&format!("if {}:", condition));
                self.nested(then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.line("else:");
                    self.nested(else_branch);
                }
            }
            AstNode::While {
                condition, body, ..
            } => {
                let condition = self.expression(condition);
                self.out.line(&format!("while {}:", condition));
                self.loop_body(body);
            }
            AstNode::For {
                init,
                condition,
                body,
                ..
            } => self.visit_for(node, init.as_deref(), condition.as_deref(), body),
            AstNode::Switch { expr, cases, .. } => self.visit_switch(expr, cases),
            AstNode::Break { .. } if self.breakables.last() == Some(&Breakable::Loop) => {
                self.out.line("break");
            }
            AstNode::Continue { .. } if self.breakables.contains(&Breakable::Loop) => {
                self.out.line("continue");
            }
            AstNode::Block { statements, .. } => self.visit_block(statements),
            AstNode::ExpressionStatement { expr, .. } => {
                let line = self.expression(expr);
                self.out.line(&line);
            }
            _ => {
                let marker = self.unhandled(node);
                self.out.line(&marker);
            }
        }
    }

    /// Emit a statement sequence at the current depth
    pub(crate) fn visit_block(&mut self, statements: &[AstNode]) {
        for statement in statements {
            self.visit_statement(statement);
        }
    }

    fn visit_function(&mut self, name: &str, params: &[Param], body: &[AstNode]) {
        let params = params
            .iter()
            .enumerate()
            .map(|(index, param)| {
                param
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("_arg{}", index))
            })
            .collect::<Vec<_>>()
            .join(", ");

        self.out.line(&format!("def {}({}):", name, params));
        self.nested(body);
    }

    /// Scalars become `name = value`. A sized array is a `None`-filled list even
    /// when initialized; an unsized one takes its initializer.
    fn visit_declaration(
        &mut self,
        node: &AstNode,
        name: &str,
        var_type: &Type,
        init: Option<&AstNode>,
    ) {
        let value = if var_type.is_pointer() {
            None
        } else {
            match (var_type.array_dims.as_slice(), init) {
                ([Some(size)], _) => Some(format!("[None] * {}", self.operand(size))),
                ([] | [None], Some(init)) => Some(self.expression(init)),
                ([], None) => Some("None".to_string()),
                _ => None,
            }
        };

        let line = match value {
            Some(value) => format!("{} = {}", name, value),
            None => self.unhandled(node),
        };
        self.out.line(&line);
    }

    /// `for (v = a; v < b; ...)` becomes `for v in range(a, b):`.
    ///
    /// The increment clause is never consulted, so every loop steps by one.
    fn visit_for(
        &mut self,
        node: &AstNode,
        init: Option<&AstNode>,
        condition: Option<&AstNode>,
        body: &[AstNode],
    ) {
        match self.range_bounds(init, condition) {
            Some((var, start, end)) => {
                self.out
                    .line(&format!("for {} in range({}, {}):", var, start, end));
                self.loop_body(body);
            }
            None => {
                let marker = self.unhandled(node);
                self.out.line(&marker);
            }
        }
    }

    /// Loop variable, start and end of a canonical counting loop
    fn range_bounds(
        &mut self,
        init: Option<&AstNode>,
        condition: Option<&AstNode>,
    ) -> Option<(String, String, String)> {
        let end = match condition? {
            AstNode::BinaryOp { op, right, .. } if op.is_relational() => right.as_ref(),
            _ => return None,
        };

        let (var, start) = match init? {
            AstNode::Assignment { lhs, rhs, .. } => (self.expression(lhs), rhs.as_ref()),
            AstNode::VarDecl {
                name,
                var_type,
                init: Some(value),
                ..
            } if !var_type.is_pointer() && !var_type.is_array() => (name.clone(), value.as_ref()),
            _ => return None,
        };

        let start = self.expression(start);
        let end = self.expression(end);
        Some((var, start, end))
    }

    fn visit_switch(&mut self, expr: &AstNode, cases: &[CaseNode]) {
        let discriminant = self.expression(expr);
        self.out
            .line(&format!("# switch({}) equivalent", discriminant));

        let outer = self.switch.replace(SwitchContext::new(discriminant));
        self.breakables.push(Breakable::Switch);

        for case in cases {
            self.visit_case(case);
        }

        self.breakables.pop();
        self.switch = outer;
    }

    /// One arm of a switch. Arms never fall through; a trailing `break`
    /// only closes the arm.
    fn visit_case(&mut self, case: &CaseNode) {
        let (header, statements) = match case {
            CaseNode::Case {
                value, statements, ..
            } => {
                let value = self.expression(value);
                let header = match self.switch.as_mut() {
                    Some(ctx) => ctx.branch(&value),
                    // Case arms only exist inside a Switch node
                    None => format!("if {}:", value),
                };
                (header, statements)
            }
            CaseNode::Default { statements, .. } => ("else:".to_string(), statements),
        };

        let statements = match statements.split_last() {
            Some((AstNode::Break { .. }, rest)) => rest,
            _ => statements.as_slice(),
        };

        self.out.line(&header);
        self.nested(statements);
    }
}
