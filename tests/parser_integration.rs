//! Integration tests for the complete `pest`-parse -> lowering pipeline.
//!
//! These drive only the public API (`storm_lang::parse_query` and
//! friends), the same way an external consumer would -- no access to
//! `Rule`, `lower`, or any other crate-internal item.

use storm_lang::{is_cmd_name, is_form_name, is_prop_name, is_univ_name, parse_cmd_string, parse_query, parse_stormcmdargs, Node, NodeKind, Value};

fn child<'a>(node: &'a Node, i: usize) -> &'a Node {
    &node.kids[i]
}

/// Walks the whole tree and checks invariant 2 (`s[sub.start:sub.end] ==
/// sub.text`) on every `SubQuery` node, wherever it appears.
fn assert_subquery_text_matches(node: &Node, source: &str) {
    if node.kind == NodeKind::SubQuery {
        let literal = &source[node.pos.0..node.pos.1];
        assert_eq!(Some(literal), node.text.as_deref());
    }
    for kid in &node.kids {
        assert_subquery_text_matches(kid, source);
    }
}

#[test]
fn scenario_lift_prop_by_comparison() {
    let text = "inet:fqdn=vertex.link";
    let query = parse_query(text).expect("valid query");

    assert_eq!(query.kind, NodeKind::Query);
    assert_eq!(query.text.as_deref(), Some(text));
    assert_eq!(query.kids.len(), 1);

    let lift = child(&query, 0);
    assert_eq!(lift.kind, NodeKind::LiftPropBy);
    assert_eq!(lift.kids.len(), 3);
    assert_eq!(child(lift, 0).kind, NodeKind::AbsProp);
    assert_eq!(child(lift, 0).value, Value::Str("inet:fqdn".to_string()));
    assert_eq!(child(lift, 1).value, Value::Str("=".to_string()));
    assert_eq!(child(lift, 2).value, Value::Str("vertex.link".to_string()));
}

#[test]
fn scenario_lift_tag() {
    let query = parse_query("#foo.bar").expect("valid query");
    let lift = child(&query, 0);

    assert_eq!(lift.kind, NodeKind::LiftTag);
    assert_eq!(lift.kids.len(), 1);

    let tagname = child(lift, 0);
    assert_eq!(tagname.kind, NodeKind::TagName);
    assert_eq!(tagname.kids.len(), 2);
    assert_eq!(child(tagname, 0).value, Value::Str("foo".to_string()));
    assert_eq!(child(tagname, 1).value, Value::Str("bar".to_string()));
}

#[test]
fn scenario_edit_parens_node_add_and_tag_add() {
    let text = "[ inet:ipv4=1.2.3.4 +#trusted ]";
    let query = parse_query(text).expect("valid query");
    let parens = child(&query, 0);

    assert_eq!(parens.kind, NodeKind::EditParens);
    assert_eq!(parens.kids.len(), 2);

    let node_add = child(parens, 0);
    assert_eq!(node_add.kind, NodeKind::EditNodeAdd);
    assert_eq!(child(node_add, 0).kind, NodeKind::AbsProp);
    assert_eq!(child(node_add, 0).value, Value::Str("inet:ipv4".to_string()));

    let tag_add = child(parens, 1);
    assert_eq!(tag_add.kind, NodeKind::EditTagAdd);
    assert_eq!(tag_add.kids.len(), 1);
    let tagname = child(tag_add, 0);
    assert_eq!(tagname.kind, NodeKind::TagName);
    assert_eq!(tagname.kids.len(), 1);
    assert_eq!(child(tagname, 0).value, Value::Str("trusted".to_string()));
}

#[test]
fn scenario_switch_case_with_default() {
    let text = "switch $x { foo: {[+#a]} *: {[+#b]} }";
    let query = parse_query(text).expect("valid query");
    let switch = child(&query, 0);

    assert_eq!(switch.kind, NodeKind::SwitchCase);
    assert_eq!(switch.kids.len(), 3);

    let var = child(switch, 0);
    assert_eq!(var.kind, NodeKind::VarValue);
    assert_eq!(var.kids[0].value, Value::Str("x".to_string()));

    let literal_case = child(switch, 1);
    assert_eq!(literal_case.kind, NodeKind::CaseEntry);
    assert_eq!(literal_case.kids.len(), 2);
    assert_eq!(child(literal_case, 0).value, Value::Str("foo".to_string()));
    assert_eq!(child(literal_case, 1).kind, NodeKind::SubQuery);

    let default_case = child(switch, 2);
    assert_eq!(default_case.kind, NodeKind::CaseEntry);
    assert_eq!(default_case.kids.len(), 1);
    assert_eq!(child(default_case, 0).kind, NodeKind::SubQuery);
}

#[test]
fn scenario_var_set_oper_func_call_with_kwarg() {
    let text = "$y=f(1, k=2)";
    let query = parse_query(text).expect("valid query");
    let set = child(&query, 0);

    assert_eq!(set.kind, NodeKind::VarSetOper);
    assert_eq!(set.kids.len(), 2);
    assert_eq!(child(set, 0).value, Value::Str("y".to_string()));

    let call = child(set, 1);
    assert_eq!(call.kind, NodeKind::FuncCall);
    assert_eq!(call.kids.len(), 3);

    let callee = child(call, 0);
    assert_eq!(callee.kind, NodeKind::VarValue);
    assert_eq!(callee.kids[0].value, Value::Str("f".to_string()));

    let args = child(call, 1);
    assert_eq!(args.kind, NodeKind::CallArgs);
    assert_eq!(args.kids.len(), 1);
    assert_eq!(args.kids[0].value, Value::Int(1));

    let kwargs = child(call, 2);
    assert_eq!(kwargs.kind, NodeKind::CallKwargs);
    assert_eq!(kwargs.kids.len(), 1);
    let kwarg = &kwargs.kids[0];
    assert_eq!(kwarg.kind, NodeKind::CallKwarg);
    assert_eq!(kwarg.kids[0].value, Value::Str("k".to_string()));
    assert_eq!(kwarg.kids[1].value, Value::Int(2));
}

#[test]
fn scenario_unexpected_end_of_input_reports_expecting_one_of() {
    let text = "inet:fqdn=";
    let err = parse_query(text).expect_err("missing value after = must fail");

    assert_eq!(err.at, text.len());
    assert!(err.mesg.contains("Expecting one of:"));
    assert!(!err.mesg.is_empty());
}

#[test]
fn scenario_unexpected_character_reports_expecting_one_of() {
    let text = "[ inet:ipv4=1.2.3.4 & ]";
    let err = parse_query(text).expect_err("'&' is not a valid edit-block operator");

    assert!(err.at <= text.len());
    assert!(err.mesg.contains("Expecting one of:"));
}

#[test]
fn query_text_field_is_the_trimmed_input() {
    let query = parse_query("  #foo  ").expect("valid query");
    assert_eq!(query.text.as_deref(), Some("#foo"));
}

#[test]
fn subquery_nodes_retain_exact_verbatim_text_wherever_they_occur() {
    let texts = [
        "if $x {[+#a]}",
        "for $v in $list {[+#seen]}",
        "while $x {[-#pending]}",
        "switch $x { foo: {[+#a]} *: {[+#b]} }",
        "help {inet:fqdn=vertex.link}",
    ];
    for text in texts {
        let query = parse_query(text).expect("valid query");
        assert_subquery_text_matches(&query, text);
    }
}

#[test]
fn funccall_children_are_always_callee_args_kwargs_in_order() {
    let query = parse_query("$x = foo(1, 2, a=3, b=4)").expect("valid query");
    let call = child(&query, 0).kids.last().expect("funccall child");

    assert_eq!(call.kind, NodeKind::FuncCall);
    assert_eq!(call.kids.len(), 3);
    assert_eq!(call.kids[1].kind, NodeKind::CallArgs);
    assert_eq!(call.kids[2].kind, NodeKind::CallKwargs);

    for kid in &call.kids[1].kids {
        assert_ne!(kid.kind, NodeKind::CallKwarg, "CallArgs must never contain a CallKwarg");
    }
    for kid in &call.kids[2].kids {
        assert_eq!(kid.kind, NodeKind::CallKwarg, "every CallKwargs child must be a CallKwarg");
    }
}

#[test]
fn pivot_and_join_variants_share_a_kind_but_differ_in_isjoin() {
    // The lift and the pivot are two separate top-level pipeline stages
    // (`query = (oper | VBAR)*`), so each parses to two `Query` children:
    // the `LiftProp` followed by the `FormPivot`/join.
    let pivot = parse_query("inet:fqdn -> inet:dns:a").unwrap();
    let join = parse_query("inet:fqdn -+> inet:dns:a").unwrap();

    assert_eq!(pivot.kids.len(), 2);
    assert_eq!(child(&pivot, 0).kind, NodeKind::LiftProp);
    assert_eq!(child(&pivot, 1).kind, NodeKind::FormPivot);
    assert!(!child(&pivot, 1).isjoin);

    assert_eq!(join.kids.len(), 2);
    assert_eq!(child(&join, 1).kind, NodeKind::FormPivot);
    assert!(child(&join, 1).isjoin);
}

#[test]
fn subquery_hasyield_reflects_the_yield_keyword() {
    let without_yield = parse_query("if $x {[+#a]}").unwrap();
    let with_yield = parse_query("if $x yield {[+#a]}").unwrap();

    // ifstmt -> [ifclause], ifclause -> [cond, subquery]
    let clause = &child(&without_yield, 0).kids[0];
    assert_eq!(clause.kind, NodeKind::IfClause);
    let sub = &clause.kids[1];
    assert_eq!(sub.kind, NodeKind::SubQuery);
    assert!(!sub.hasyield);

    let clause = &child(&with_yield, 0).kids[0];
    let sub = &clause.kids[1];
    assert_eq!(sub.kind, NodeKind::SubQuery);
    assert!(sub.hasyield);
}

#[test]
fn stormcmdargs_entry_point_mixes_const_and_subquery_literal_text() {
    let args = parse_stormcmdargs("foo \"bar baz\" {#sometag}").expect("valid cmdargs");
    assert_eq!(args.kind, NodeKind::Const);
    match &args.value {
        Value::Tuple(values) => {
            assert_eq!(values.len(), 3);
            assert_eq!(values[0], Value::Str("foo".to_string()));
            assert_eq!(values[1], Value::Str("bar baz".to_string()));
            assert_eq!(values[2], Value::Str("{#sometag}".to_string()));
        }
        other => panic!("expected a Const(Tuple), got {other:?}"),
    }
}

#[test]
fn cmd_string_parses_nested_lists_and_bare_integers() {
    let (value, offset) = parse_cmd_string("(1, (2, 3), four) rest", 0).expect("valid cmdstring");
    assert_eq!(
        value,
        Value::Tuple(vec![
            Value::Int(1),
            Value::Tuple(vec![Value::Int(2), Value::Int(3)]),
            Value::Str("four".to_string()),
        ])
    );
    assert_eq!(&"(1, (2, 3), four) rest"[offset..], " rest");
}

#[test]
fn diagnostic_offsets_always_lie_within_the_input() {
    for text in ["inet:fqdn=", "[ inet:ipv4=1.2.3.4 & ]", "switch $x { "] {
        let err = parse_query(text).expect_err("malformed input must fail");
        assert!(err.at <= text.len());
        assert_eq!(err.text, text);
    }
}

#[test]
fn name_classifiers_agree_with_the_grammar_terminals_they_mirror() {
    assert!(is_prop_name("inet:fqdn:zone"));
    assert!(is_form_name("inet:fqdn"));
    assert!(is_univ_name(".created"));
    assert!(is_cmd_name("help.storm"));

    assert!(!is_form_name("inet")); // a form name always has at least one `:segment`
    assert!(!is_prop_name("inet")); // ditto for a property name
}

#[test]
fn reparsing_a_querys_own_text_reproduces_a_structurally_equal_ast() {
    let text = "inet:fqdn=vertex.link [+#trusted]";
    let first = parse_query(text).expect("valid query");
    let second = parse_query(&first.text.clone().unwrap()).expect("re-parse of own text");
    assert_eq!(first.kind, second.kind);
    assert_eq!(first.kids, second.kids);
}
