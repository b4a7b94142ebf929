//! Boolean filter conditions and control-flow node constructors.

use super::{Node, NodeKind, Pos};

pub fn filt_oper(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::FiltOper, kids, pos)
}

pub fn and_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::AndCond, kids, pos)
}

pub fn or_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::OrCond, kids, pos)
}

pub fn not_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::NotCond, kids, pos)
}

pub fn subq_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::SubqCond, kids, pos)
}

pub fn has_abs_prop_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::HasAbsPropCond, kids, pos)
}

pub fn has_rel_prop_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::HasRelPropCond, kids, pos)
}

pub fn has_tag_prop_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::HasTagPropCond, kids, pos)
}

pub fn abs_prop_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::AbsPropCond, kids, pos)
}

pub fn rel_prop_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::RelPropCond, kids, pos)
}

pub fn if_stmt(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::IfStmt, kids, pos)
}

pub fn if_clause(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::IfClause, kids, pos)
}

pub fn for_loop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::ForLoop, kids, pos)
}

pub fn while_loop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::WhileLoop, kids, pos)
}

pub fn switch_case(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::SwitchCase, kids, pos)
}

pub fn case_entry(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::CaseEntry, kids, pos)
}
