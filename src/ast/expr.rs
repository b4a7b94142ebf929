//! `$(...)` dollar-expression node constructors.

use super::{Node, NodeKind, Pos};

pub fn dollar_expr(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::DollarExpr, kids, pos)
}

/// `expror`/`exprand`/`exprcmp`/`exprproduct`/`exprsum` all share the same
/// AST kind; a chain with a single operand collapses to that operand
/// instead of wrapping it (mirrors lark's `?rule` maybe-inline convention
/// for binary-chain productions with no operator present).
pub fn expr_node(mut kids: Vec<Node>, pos: Pos) -> Node {
    if kids.len() == 1 {
        kids.pop().unwrap()
    } else {
        Node::new(NodeKind::ExprNode, kids, pos)
    }
}

pub fn unary_expr_node(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::UnaryExprNode, kids, pos)
}
