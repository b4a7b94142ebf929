//! Variable-assignment/evaluation node constructors.

use super::{Node, NodeKind, Pos};

pub fn var_set_oper(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::VarSetOper, kids, pos)
}

pub fn var_list_set_oper(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::VarListSetOper, kids, pos)
}

pub fn var_eval_oper(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::VarEvalOper, kids, pos)
}

pub fn var_deref(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::VarDeref, kids, pos)
}

pub fn var_value(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::VarValue, kids, pos)
}

pub fn var_list(values: Vec<String>, pos: Pos) -> Node {
    use super::Value;
    Node::leaf(NodeKind::VarList, Value::Tuple(values.into_iter().map(Value::Str).collect()), pos)
}
