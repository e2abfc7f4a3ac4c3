use super::{
    ast::Node,
    operators::{AssignOp, BinaryOp, LogicalOp, UnaryOp},
};

/// Node constructors, one per node kind.
///
/// The builder holds no state. It only checks what the type system checks,
/// making sure a node is well formed in context is the parser's job.
#[derive(Debug, Default, Clone, Copy)]
pub struct Builder;

impl Builder {
    pub fn program(&self, body: Vec<Node>) -> Node {
        Node::Program { body }
    }

    pub fn string_lit(&self, value: impl Into<String>) -> Node {
        Node::StringLit {
            value: value.into(),
        }
    }

    pub fn numeric_lit(&self, value: i64) -> Node {
        Node::NumericLit { value }
    }

    pub fn bool_lit(&self, value: bool) -> Node {
        Node::BoolLit { value }
    }

    pub fn null_lit(&self) -> Node {
        Node::NullLit
    }

    pub fn expr_stmt(&self, expr: Node) -> Node {
        Node::ExprStmt {
            expr: Box::new(expr),
        }
    }

    pub fn block_stmt(&self, body: Vec<Node>) -> Node {
        Node::BlockStmt { body }
    }

    pub fn empty_stmt(&self) -> Node {
        Node::EmptyStmt
    }

    pub fn binary_expr(&self, op: BinaryOp, left: Node, right: Node) -> Node {
        Node::BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn logical_expr(&self, op: LogicalOp, left: Node, right: Node) -> Node {
        Node::LogicalExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary_expr(&self, op: UnaryOp, arg: Node) -> Node {
        Node::UnaryExpr {
            op,
            arg: Box::new(arg),
        }
    }

    pub fn assign_expr(&self, op: AssignOp, left: Node, right: Node) -> Node {
        Node::AssignExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn seq_expr(&self, body: Vec<Node>) -> Node {
        Node::SeqExpr { body }
    }

    pub fn this_expr(&self) -> Node {
        Node::ThisExpr
    }

    pub fn new_expr(&self, callee: Node, args: Vec<Node>) -> Node {
        Node::NewExpr {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn call_expr(&self, callee: Node, args: Vec<Node>) -> Node {
        Node::CallExpr {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn identifier(&self, name: impl Into<String>) -> Node {
        Node::Identifier { name: name.into() }
    }

    pub fn var_stmt(&self, decls: Vec<Node>) -> Node {
        Node::VarStmt { decls }
    }

    pub fn var_decl(&self, id: Node, init: Option<Node>) -> Node {
        Node::VarDecl {
            id: Box::new(id),
            init: init.map(Box::new),
        }
    }

    pub fn if_stmt(&self, cond: Node, cons: Node, alt: Option<Node>) -> Node {
        Node::IfStmt {
            cond: Box::new(cond),
            cons: Box::new(cons),
            alt: alt.map(Box::new),
        }
    }

    pub fn while_stmt(&self, cond: Node, body: Node) -> Node {
        Node::WhileStmt {
            cond: Box::new(cond),
            body: Box::new(body),
        }
    }

    pub fn do_while_stmt(&self, cond: Node, body: Node) -> Node {
        Node::DoWhileStmt {
            cond: Box::new(cond),
            body: Box::new(body),
        }
    }

    pub fn for_stmt(
        &self,
        init: Option<Node>,
        cond: Option<Node>,
        step: Option<Node>,
        body: Node,
    ) -> Node {
        Node::ForStmt {
            init: init.map(Box::new),
            cond: cond.map(Box::new),
            step: step.map(Box::new),
            body: Box::new(body),
        }
    }

    pub fn func_decl(&self, name: Node, params: Option<Vec<Node>>, body: Node) -> Node {
        Node::FuncDecl {
            name: Box::new(name),
            params,
            body: Box::new(body),
        }
    }

    pub fn return_stmt(&self, arg: Option<Node>) -> Node {
        Node::ReturnStmt {
            arg: arg.map(Box::new),
        }
    }

    pub fn member_expr(&self, computed: bool, obj: Node, prop: Node) -> Node {
        Node::MemberExpr {
            computed,
            obj: Box::new(obj),
            prop: Box::new(prop),
        }
    }

    pub fn class_decl(&self, id: Node, superclass: Option<Node>, body: Node) -> Node {
        Node::ClassDecl {
            id: Box::new(id),
            superclass: superclass.map(Box::new),
            body: Box::new(body),
        }
    }

    pub fn super_call(&self) -> Node {
        Node::SuperCall
    }
}
