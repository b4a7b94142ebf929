//! Lift-operator node constructors (`LiftPropBy`, `LiftTag`, ...).

use super::{Node, NodeKind, Pos};

pub fn lift_prop_by(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::LiftPropBy, kids, pos)
}

pub fn lift_prop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::LiftProp, kids, pos)
}

pub fn lift_tag(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::LiftTag, kids, pos)
}

pub fn lift_form_tag(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::LiftFormTag, kids, pos)
}

pub fn lift_tag_tag(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::LiftTagTag, kids, pos)
}

pub fn lift_tag_prop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::LiftTagProp, kids, pos)
}

pub fn lift_form_tag_prop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::LiftFormTagProp, kids, pos)
}

pub fn lift_only_tag_prop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::LiftOnlyTagProp, kids, pos)
}
