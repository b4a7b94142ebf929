//! Root, sub-query, command, and generic-value constructors.

use super::{Node, NodeKind, Pos, Value};

pub fn query(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::Query, kids, pos)
}

pub fn sub_query(kids: Vec<Node>, pos: Pos, text: String, hasyield: bool) -> Node {
    Node::new(NodeKind::SubQuery, kids, pos)
        .with_text(text)
        .with_hasyield(hasyield)
}

pub fn cmd_oper(name: Node, args: Node, pos: Pos) -> Node {
    Node::new(NodeKind::CmdOper, vec![name, args], pos)
}

pub fn const_str(text: impl Into<String>, pos: Pos) -> Node {
    Node::leaf(NodeKind::Const, Value::Str(text.into()), pos)
}

pub fn const_int(n: i64, pos: Pos) -> Node {
    Node::leaf(NodeKind::Const, Value::Int(n), pos)
}

pub fn const_tuple(values: Vec<Value>, pos: Pos) -> Node {
    Node::leaf(NodeKind::Const, Value::Tuple(values), pos)
}

pub fn abs_prop(text: impl Into<String>, pos: Pos) -> Node {
    Node::leaf(NodeKind::AbsProp, Value::Str(text.into()), pos)
}

pub fn break_oper(pos: Pos) -> Node {
    Node::leaf(NodeKind::BreakOper, Value::None, pos)
}

pub fn continue_oper(pos: Pos) -> Node {
    Node::leaf(NodeKind::ContinueOper, Value::None, pos)
}

pub fn rel_prop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::RelProp, kids, pos)
}

pub fn univ_prop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::UnivProp, kids, pos)
}

pub fn rel_prop_value(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::RelPropValue, kids, pos)
}

pub fn univ_prop_value(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::UnivPropValue, kids, pos)
}

pub fn list(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::List, kids, pos)
}
