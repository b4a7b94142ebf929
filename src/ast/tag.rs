//! Tag node constructors and the `tagsplit` interpolation helper.

use super::{Node, NodeKind, Pos, Value};

pub fn tag_name(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::TagName, kids, pos)
}

pub fn tag_match(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::TagMatch, kids, pos)
}

/// `ALLTAGS` lowers to an empty `TagMatch` -- the bare `#` wildcard.
pub fn tag_match_empty(pos: Pos) -> Node {
    Node::new(NodeKind::TagMatch, Vec::new(), pos)
}

pub fn tag_prop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::TagProp, kids, pos)
}

pub fn form_tag_prop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::FormTagProp, kids, pos)
}

pub fn only_tag_prop(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::OnlyTagProp, kids, pos)
}

pub fn tag_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::TagCond, kids, pos)
}

pub fn tag_valu_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::TagValuCond, kids, pos)
}

pub fn tag_prop_cond(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::TagPropCond, kids, pos)
}

pub fn tag_value(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::TagValue, kids, pos)
}

pub fn tag_prop_value(kids: Vec<Node>, pos: Pos) -> Node {
    Node::new(NodeKind::TagPropValue, kids, pos)
}

/// Splits a tag literal on `.` into one node per segment, turning
/// `$`-prefixed segments into `VarValue(Const(seg[1:]))` and everything
/// else into `Const(seg)`. Used for the plain `tagname` rule (spec.md
/// §4.4 item 7), which always reports one node per dotted segment:
/// `a.b.c` yields three nodes, not one.
pub fn tagname_segments(text: &str, pos: Pos) -> Vec<Node> {
    text.split('.').map(|seg| segment_node(seg, pos)).collect()
}

/// Same per-segment split as `tagname_segments`, but collapses to a
/// single `Const(text)` atom when no segment carries a `$` interpolation.
/// Used for `TAGMATCH` interpolation (spec.md §4.5): a literal tag-match
/// glob with no `$` is one opaque pattern, not a sequence of dotted
/// property names.
pub fn tagsplit(text: &str, pos: Pos) -> Vec<Node> {
    if !text.contains('$') {
        return vec![Node::leaf(NodeKind::Const, Value::Str(text.to_string()), pos)];
    }
    tagname_segments(text, pos)
}

fn segment_node(seg: &str, pos: Pos) -> Node {
    if let Some(rest) = seg.strip_prefix('$') {
        let inner = Node::leaf(NodeKind::Const, Value::Str(rest.to_string()), pos);
        super::var::var_value(vec![inner], pos)
    } else {
        Node::leaf(NodeKind::Const, Value::Str(seg.to_string()), pos)
    }
}
