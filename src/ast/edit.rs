//! `[ ... ]` edit-block node constructors.

use super::{Node, NodeKind, Pos};

pub fn edit_parens(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::EditParens, kids, pos)
}

pub fn edit_node_add(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::EditNodeAdd, kids, pos)
}

pub fn edit_prop_set(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::EditPropSet, kids, pos)
}

pub fn edit_prop_del(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::EditPropDel, kids, pos)
}

pub fn edit_univ_del(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::EditUnivDel, kids, pos)
}

pub fn edit_tag_add(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::EditTagAdd, kids, pos)
}

pub fn edit_tag_del(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::EditTagDel, kids, pos)
}

pub fn edit_tag_prop_set(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::EditTagPropSet, kids, pos)
}

pub fn edit_tag_prop_del(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::EditTagPropDel, kids, pos)
}
