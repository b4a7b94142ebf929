//! Function-call node constructors.

use super::{Node, NodeKind, Pos};

pub fn func_call(callee: Node, args: Node, kwargs: Node, pos: Pos) -> Node {
    Node::new(NodeKind::FuncCall, vec![callee, args, kwargs], pos)
}

pub fn call_args(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::CallArgs, kids, pos)
}

pub fn call_kwargs(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::CallKwargs, kids, pos)
}

pub fn call_kwarg(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::CallKwarg, kids, pos)
}
