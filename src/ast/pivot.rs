//! Pivot/join node constructors. Join variants are the same node kind as
//! their pivot twin with `isjoin = true`.

use super::{Node, NodeKind, Pos};

pub fn form_pivot(kids: Vec<Node>, pos: Pos, isjoin: bool) -> Node {
    Node::new(NodeKind::FormPivot, kids, pos).with_isjoin(isjoin)
}

pub fn pivot_out(kids: Vec<Node>, pos: Pos, isjoin: bool) -> Node {
    Node::new(NodeKind::PivotOut, kids, pos).with_isjoin(isjoin)
}

pub fn pivot_in(kids: Vec<Node>, pos: Pos, isjoin: bool) -> Node {
    Node::new(NodeKind::PivotIn, kids, pos).with_isjoin(isjoin)
}

pub fn pivot_in_from(kids: Vec<Node>, pos: Pos, isjoin: bool) -> Node {
    Node::new(NodeKind::PivotInFrom, kids, pos).with_isjoin(isjoin)
}

pub fn pivot_to_tags(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::PivotToTags, kids, pos)
}

pub fn prop_pivot(kids: Vec<Node>, pos: Pos, isjoin: bool) -> Node {
    Node::new(NodeKind::PropPivot, kids, pos).with_isjoin(isjoin)
}

pub fn prop_pivot_out(kids: Vec<Node>, pos: Pos, isjoin: bool) -> Node {
    Node::new(NodeKind::PropPivotOut, kids, pos).with_isjoin(isjoin)
}
