//! Operator enumerations carried by expression nodes.
//!
//! Each operator maps to its source symbol through a static array and back
//! through a static map. `from_symbol` returns `None` for a symbol the table
//! does not know, the parser reports that as an error.

use crate::MK_OPERATOR;

MK_OPERATOR!(BinaryOp, BINARY_OP_LOOKUP {
    Add => "+",
    Sub => "-",
    Mul => "*",
    Div => "/",
    Gt => ">",
    Lt => "<",
    Gte => ">=",
    Lte => "<=",
    Eq => "==",
    Neq => "!=",
});

MK_OPERATOR!(AssignOp, ASSIGN_OP_LOOKUP {
    Simple => "=",
    Add => "+=",
    Sub => "-=",
    Mul => "*=",
    Div => "/=",
});

MK_OPERATOR!(LogicalOp, LOGICAL_OP_LOOKUP {
    And => "&&",
    Or => "||",
});

MK_OPERATOR!(UnaryOp, UNARY_OP_LOOKUP {
    Not => "!",
    Neg => "-",
});
