use serde::Serialize;
use serde_json::Value;

use super::operators::{AssignOp, BinaryOp, LogicalOp, UnaryOp};

/// Syntax tree node.
///
/// Every construct of the language is one variant of this enum. A node owns
/// its children outright, so a tree is never shared and never cyclic.
///
/// Serializing a node produces an object whose `"type"` key names the
/// variant, with the variant's fields flattened next to it. `Option` slots
/// render as `null` when absent, `Vec` slots always render as an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "ProgramType")]
    Program { body: Vec<Node> },

    // LITERALS
    #[serde(rename = "StringLitType")]
    StringLit { value: String },
    #[serde(rename = "NumericLitType")]
    NumericLit { value: i64 },
    #[serde(rename = "BoolLitType")]
    BoolLit { value: bool },
    #[serde(rename = "NullLitType")]
    NullLit,

    // STATEMENTS
    #[serde(rename = "ExprStmtType")]
    ExprStmt { expr: Box<Node> },
    #[serde(rename = "BlockStmtType")]
    BlockStmt { body: Vec<Node> },
    #[serde(rename = "EmptyStmtType")]
    EmptyStmt,
    #[serde(rename = "VarStmtType")]
    VarStmt { decls: Vec<Node> },
    #[serde(rename = "VarDeclType")]
    VarDecl {
        id: Box<Node>,
        init: Option<Box<Node>>,
    },
    #[serde(rename = "IfStmtType")]
    IfStmt {
        cond: Box<Node>,
        cons: Box<Node>,
        alt: Option<Box<Node>>,
    },
    #[serde(rename = "WhileStmtType")]
    WhileStmt { cond: Box<Node>, body: Box<Node> },
    #[serde(rename = "DoWhileStmtType")]
    DoWhileStmt { cond: Box<Node>, body: Box<Node> },
    #[serde(rename = "ForStmtType")]
    ForStmt {
        init: Option<Box<Node>>,
        cond: Option<Box<Node>>,
        step: Option<Box<Node>>,
        body: Box<Node>,
    },
    /// `params` is `None` for an empty parameter list, which is not the
    /// same thing as `Some(vec![])`.
    #[serde(rename = "FuncDeclType")]
    FuncDecl {
        name: Box<Node>,
        params: Option<Vec<Node>>,
        body: Box<Node>,
    },
    #[serde(rename = "ReturnStmtType")]
    ReturnStmt { arg: Option<Box<Node>> },
    #[serde(rename = "ClassDeclType")]
    ClassDecl {
        id: Box<Node>,
        #[serde(rename = "super")]
        superclass: Option<Box<Node>>,
        body: Box<Node>,
    },

    // EXPRESSIONS
    #[serde(rename = "BinaryExprType")]
    BinaryExpr {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    #[serde(rename = "LogicalExprType")]
    LogicalExpr {
        op: LogicalOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    #[serde(rename = "UnaryExprType")]
    UnaryExpr { op: UnaryOp, arg: Box<Node> },
    #[serde(rename = "AssignExprType")]
    AssignExpr {
        op: AssignOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    #[serde(rename = "SeqExprType")]
    SeqExpr { body: Vec<Node> },
    #[serde(rename = "ThisExprType")]
    ThisExpr,
    #[serde(rename = "NewExprType")]
    NewExpr { callee: Box<Node>, args: Vec<Node> },
    #[serde(rename = "CallExprType")]
    CallExpr { callee: Box<Node>, args: Vec<Node> },
    #[serde(rename = "MemberExprType")]
    MemberExpr {
        computed: bool,
        obj: Box<Node>,
        prop: Box<Node>,
    },
    #[serde(rename = "IdentifierType")]
    Identifier { name: String },
    /// Callee of `super(...)`, never a standalone expression.
    #[serde(rename = "SuperCallType")]
    SuperCall,
}

impl Node {
    /// Returns the tag written under `"type"` when the node is serialized.
    pub fn get_type_name(&self) -> &'static str {
        match self {
            Node::Program { .. } => "ProgramType",
            Node::StringLit { .. } => "StringLitType",
            Node::NumericLit { .. } => "NumericLitType",
            Node::BoolLit { .. } => "BoolLitType",
            Node::NullLit => "NullLitType",
            Node::ExprStmt { .. } => "ExprStmtType",
            Node::BlockStmt { .. } => "BlockStmtType",
            Node::EmptyStmt => "EmptyStmtType",
            Node::VarStmt { .. } => "VarStmtType",
            Node::VarDecl { .. } => "VarDeclType",
            Node::IfStmt { .. } => "IfStmtType",
            Node::WhileStmt { .. } => "WhileStmtType",
            Node::DoWhileStmt { .. } => "DoWhileStmtType",
            Node::ForStmt { .. } => "ForStmtType",
            Node::FuncDecl { .. } => "FuncDeclType",
            Node::ReturnStmt { .. } => "ReturnStmtType",
            Node::ClassDecl { .. } => "ClassDeclType",
            Node::BinaryExpr { .. } => "BinaryExprType",
            Node::LogicalExpr { .. } => "LogicalExprType",
            Node::UnaryExpr { .. } => "UnaryExprType",
            Node::AssignExpr { .. } => "AssignExprType",
            Node::SeqExpr { .. } => "SeqExprType",
            Node::ThisExpr => "ThisExprType",
            Node::NewExpr { .. } => "NewExprType",
            Node::CallExpr { .. } => "CallExprType",
            Node::MemberExpr { .. } => "MemberExprType",
            Node::Identifier { .. } => "IdentifierType",
            Node::SuperCall => "SuperCallType",
        }
    }

    /// Whether the node may appear on the left of an assignment.
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Node::Identifier { .. } | Node::MemberExpr { .. })
    }

    /// Renders the node as a JSON document.
    ///
    /// Object keys come out sorted, which keeps the output stable between runs.
    pub fn to_document(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Renders the node as indented JSON followed by a newline.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut rendered = serde_json::to_string_pretty(&self.to_document()?)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
