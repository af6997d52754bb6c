// AST (Abstract Syntax Tree) definitions for the C front end

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Base types accepted by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseType {
    Int,
    Char,
    Void,
    Float,
    Double,
    Long,
    Short,
    Struct(String), // Struct name
}

/// Type representation with qualifiers, pointers, and array dimensions.
///
/// Array dimensions keep the size *expression* rather than a folded
/// constant, since the generator reproduces it symbolically.
#[derive(Debug, Clone)]
pub struct Type {
    pub base: BaseType,
    pub is_const: bool,
    pub is_unsigned: bool,
    pub pointer_depth: usize, // 0 = not pointer, 1 = *, 2 = **, etc.
    pub array_dims: Vec<Option<AstNode>>, // None for unsized dimension
}

impl Type {
    pub fn new(base: BaseType) -> Self {
        Type {
            base,
            is_const: false,
            is_unsigned: false,
            pointer_depth: 0,
            array_dims: Vec::new(),
        }
    }

    pub fn with_pointer(mut self) -> Self {
        self.pointer_depth += 1;
        self
    }

    pub fn with_array(mut self, size: Option<AstNode>) -> Self {
        self.array_dims.push(size);
        self
    }

    pub fn is_pointer(&self) -> bool {
        self.pointer_depth > 0
    }

    pub fn is_array(&self) -> bool {
        !self.array_dims.is_empty()
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    BitShl,
    BitShr,
    // Compound assignment
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
}

impl BinOp {
    /// The C spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::BitShl => "<<",
            BinOp::BitShr => ">>",
            BinOp::AddAssign => "+=",
            BinOp::SubAssign => "-=",
            BinOp::MulAssign => "*=",
            BinOp::DivAssign => "/=",
            BinOp::ModAssign => "%=",
            BinOp::AndAssign => "&=",
            BinOp::OrAssign => "|=",
            BinOp::XorAssign => "^=",
            BinOp::ShlAssign => "<<=",
            BinOp::ShrAssign => ">>=",
        }
    }

    /// Binding strength in C, higher binds tighter. Assignment forms are 0.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Or => 1,
            BinOp::And => 2,
            BinOp::BitOr => 3,
            BinOp::BitXor => 4,
            BinOp::BitAnd => 5,
            BinOp::Eq | BinOp::Ne => 6,
            BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => 7,
            BinOp::BitShl | BinOp::BitShr => 8,
            BinOp::Add | BinOp::Sub => 9,
            BinOp::Mul | BinOp::Div | BinOp::Mod => 10,
            _ => 0,
        }
    }

    pub fn is_relational(self) -> bool {
        matches!(self, BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,     // -x
    Not,     // !x
    BitNot,  // ~x
    PreInc,  // ++x
    PreDec,  // --x
    PostInc, // x++
    PostDec, // x--
    Deref,   // *x
    AddrOf,  // &x
}

impl UnOp {
    /// Operator spelling; postfix forms share the prefix spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Neg => "-",
            UnOp::Not => "!",
            UnOp::BitNot => "~",
            UnOp::PreInc | UnOp::PostInc => "++",
            UnOp::PreDec | UnOp::PostDec => "--",
            UnOp::Deref => "*",
            UnOp::AddrOf => "&",
        }
    }
}

/// Literal category. The literal's text is always kept as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
    Char,
    String,
}

/// Function parameter. K&R style parameters carry no type and default to `int`;
/// prototype parameters may omit the name.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: Option<String>,
    pub param_type: Type,
}

/// Struct field
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub field_type: Type,
}

/// Switch case
#[derive(Debug, Clone)]
pub enum CaseNode {
    Case {
        value: Box<AstNode>,
        statements: Vec<AstNode>,
        location: SourceLocation,
    },
    Default {
        statements: Vec<AstNode>,
        location: SourceLocation,
    },
}

/// AST nodes representing statements and expressions
#[derive(Debug, Clone)]
pub enum AstNode {
    // Top-level declarations
    FunctionDef {
        name: String,
        params: Vec<Param>,
        body: Vec<AstNode>,
        return_type: Type,
        location: SourceLocation,
    },
    FunctionDecl {
        name: String,
        params: Vec<Param>,
        return_type: Type,
        location: SourceLocation,
    },
    StructDef {
        name: String,
        fields: Vec<Field>,
        location: SourceLocation,
    },

    // Statements
    VarDecl {
        name: String,
        var_type: Type,
        init: Option<Box<AstNode>>,
        location: SourceLocation,
    },
    DeclList {
        declarations: Vec<AstNode>,
        location: SourceLocation,
    },
    Return {
        expr: Option<Box<AstNode>>,
        location: SourceLocation,
    },
    If {
        condition: Box<AstNode>,
        then_branch: Vec<AstNode>,
        else_branch: Option<Vec<AstNode>>,
        location: SourceLocation,
    },
    While {
        condition: Box<AstNode>,
        body: Vec<AstNode>,
        location: SourceLocation,
    },
    DoWhile {
        body: Vec<AstNode>,
        condition: Box<AstNode>,
        location: SourceLocation,
    },
    For {
        init: Option<Box<AstNode>>,
        condition: Option<Box<AstNode>>,
        increment: Option<Box<AstNode>>,
        body: Vec<AstNode>,
        location: SourceLocation,
    },
    Switch {
        expr: Box<AstNode>,
        cases: Vec<CaseNode>,
        location: SourceLocation,
    },
    Break {
        location: SourceLocation,
    },
    Continue {
        location: SourceLocation,
    },
    Goto {
        label: String,
        location: SourceLocation,
    },
    Label {
        name: String,
        location: SourceLocation,
    },
    Block {
        statements: Vec<AstNode>,
        location: SourceLocation,
    },
    ExpressionStatement {
        expr: Box<AstNode>,
        location: SourceLocation,
    },

    // Expressions
    Assignment {
        lhs: Box<AstNode>,
        rhs: Box<AstNode>,
        location: SourceLocation,
    },
    CompoundAssignment {
        lhs: Box<AstNode>,
        op: BinOp,
        rhs: Box<AstNode>,
        location: SourceLocation,
    },
    Literal {
        kind: LiteralKind,
        text: String,
        location: SourceLocation,
    },
    Null {
        location: SourceLocation,
    },
    Variable(String, SourceLocation),
    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<AstNode>,
        location: SourceLocation,
    },
    TernaryOp {
        condition: Box<AstNode>,
        true_expr: Box<AstNode>,
        false_expr: Box<AstNode>,
        location: SourceLocation,
    },
    FunctionCall {
        name: String,
        args: Vec<AstNode>,
        location: SourceLocation,
    },
    ArrayAccess {
        array: Box<AstNode>,
        index: Box<AstNode>,
        location: SourceLocation,
    },
    MemberAccess {
        object: Box<AstNode>,
        member: String,
        location: SourceLocation,
    },
    PointerMemberAccess {
        object: Box<AstNode>,
        member: String,
        location: SourceLocation,
    },
    Cast {
        target_type: Type,
        expr: Box<AstNode>,
        location: SourceLocation,
    },
    SizeofType {
        target_type: Type,
        location: SourceLocation,
    },
    SizeofExpr {
        expr: Box<AstNode>,
        location: SourceLocation,
    },
    InitList {
        elements: Vec<AstNode>,
        location: SourceLocation,
    },
}

impl AstNode {
    /// Get the source location of this node
    pub fn location(&self) -> &SourceLocation {
        match self {
            AstNode::FunctionDef { location, .. } => location,
            AstNode::FunctionDecl { location, .. } => location,
            AstNode::StructDef { location, .. } => location,
            AstNode::VarDecl { location, .. } => location,
            AstNode::DeclList { location, .. } => location,
            AstNode::Return { location, .. } => location,
            AstNode::If { location, .. } => location,
            AstNode::While { location, .. } => location,
            AstNode::DoWhile { location, .. } => location,
            AstNode::For { location, .. } => location,
            AstNode::Switch { location, .. } => location,
            AstNode::Break { location } => location,
            AstNode::Continue { location } => location,
            AstNode::Goto { location, .. } => location,
            AstNode::Label { location, .. } => location,
            AstNode::Block { location, .. } => location,
            AstNode::ExpressionStatement { location, .. } => location,
            AstNode::Assignment { location, .. } => location,
            AstNode::CompoundAssignment { location, .. } => location,
            AstNode::Literal { location, .. } => location,
            AstNode::Null { location } => location,
            AstNode::Variable(_, loc) => loc,
            AstNode::BinaryOp { location, .. } => location,
            AstNode::UnaryOp { location, .. } => location,
            AstNode::TernaryOp { location, .. } => location,
            AstNode::FunctionCall { location, .. } => location,
            AstNode::ArrayAccess { location, .. } => location,
            AstNode::MemberAccess { location, .. } => location,
            AstNode::PointerMemberAccess { location, .. } => location,
            AstNode::Cast { location, .. } => location,
            AstNode::SizeofType { location, .. } => location,
            AstNode::SizeofExpr { location, .. } => location,
            AstNode::InitList { location, .. } => location,
        }
    }

    /// Human-readable node kind, used when a construct has no translation.
    ///
    /// Declarations report the shape of the declared type, so `int *p;`
    /// is a `PointerDeclaration` rather than a plain variable declaration.
    pub fn kind(&self) -> &'static str {
        match self {
            AstNode::FunctionDef { .. } => "FunctionDefinition",
            AstNode::FunctionDecl { .. } => "FunctionPrototype",
            AstNode::StructDef { .. } => "StructDefinition",
            AstNode::VarDecl { var_type, .. } => {
                if var_type.is_pointer() {
                    "PointerDeclaration"
                } else if var_type.array_dims.len() > 1 {
                    "MultiDimArrayDeclaration"
                } else if var_type.is_array() {
                    "ArrayDeclaration"
                } else {
                    "VariableDeclaration"
                }
            }
            AstNode::DeclList { .. } => "DeclarationList",
            AstNode::Return { .. } => "Return",
            AstNode::If { .. } => "If",
            AstNode::While { .. } => "While",
            AstNode::DoWhile { .. } => "DoWhile",
            AstNode::For { .. } => "For",
            AstNode::Switch { .. } => "Switch",
            AstNode::Break { .. } => "Break",
            AstNode::Continue { .. } => "Continue",
            AstNode::Goto { .. } => "Goto",
            AstNode::Label { .. } => "Label",
            AstNode::Block { .. } => "Block",
            AstNode::ExpressionStatement { .. } => "ExpressionStatement",
            AstNode::Assignment { .. } => "Assignment",
            AstNode::CompoundAssignment { .. } => "CompoundAssignment",
            AstNode::Literal { .. } => "Literal",
            AstNode::Null { .. } => "Null",
            AstNode::Variable(..) => "Identifier",
            AstNode::BinaryOp { .. } => "BinaryOp",
            AstNode::UnaryOp { .. } => "UnaryOp",
            AstNode::TernaryOp { .. } => "TernaryOp",
            AstNode::FunctionCall { .. } => "FunctionCall",
            AstNode::ArrayAccess { .. } => "ArrayIndex",
            AstNode::MemberAccess { .. } => "MemberAccess",
            AstNode::PointerMemberAccess { .. } => "PointerMemberAccess",
            AstNode::Cast { .. } => "Cast",
            AstNode::SizeofType { .. } | AstNode::SizeofExpr { .. } => "Sizeof",
            AstNode::InitList { .. } => "InitList",
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub nodes: Vec<AstNode>, // All top-level declarations
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> SourceLocation {
        SourceLocation::new(1, 1)
    }

    #[test]
    fn test_declaration_kind_follows_type_shape() {
        let int_ty = Type::new(BaseType::Int);
        let decl = |var_type: Type| AstNode::VarDecl {
            name: "v".to_string(),
            var_type,
            init: None,
            location: loc(),
        };

        assert_eq!(decl(int_ty.clone()).kind(), "VariableDeclaration");
        assert_eq!(decl(int_ty.clone().with_pointer()).kind(), "PointerDeclaration");
        assert_eq!(decl(int_ty.clone().with_array(None)).kind(), "ArrayDeclaration");
        assert_eq!(
            decl(int_ty.with_array(None).with_array(None)).kind(),
            "MultiDimArrayDeclaration"
        );
    }

    #[test]
    fn test_operator_precedence_order() {
        assert!(BinOp::Mul.precedence() > BinOp::Add.precedence());
        assert!(BinOp::Add.precedence() > BinOp::Lt.precedence());
        assert!(BinOp::And.precedence() > BinOp::Or.precedence());
        assert_eq!(BinOp::AddAssign.precedence(), 0);
        assert_eq!(UnOp::PostInc.symbol(), UnOp::PreInc.symbol());
    }
}
