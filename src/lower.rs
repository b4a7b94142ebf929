//! The lowering pass: a depth-first transform from pest's generic parse
//! tree into the typed `ast::Node` tree.
//!
//! `lower_pair` is a rule-keyed dispatch table, expressed as a single
//! `match` over pest's generated `Rule` enum rather than a runtime
//! `HashMap<Rule, fn(...)>` -- `Rule` is closed and known at compile time,
//! so the compiler checks exhaustiveness for us. Ten rules need custom
//! lowering (see the numbered helpers below); every other rule either
//! converts directly to a leaf (terminal map) or wraps its already-lowered
//! children in the matching `NodeKind` (rule map).

use pest::iterators::{Pair, Pairs};

use crate::ast::{cond, edit, expr, func, lift, pivot, query, tag, var, Node, NodeKind, Pos, Value};
use crate::number::parse_number;
use crate::strings::{strip_single_quoted, strip_var_token, unescape_double_quoted};
use crate::Rule;

pub fn lower_query(pairs: Pairs<Rule>, text: &str) -> Node {
    let query_pair = pairs
        .into_iter()
        .next()
        .expect("StormParser::parse(Rule::query, ..) always yields a query pair on success");
    let pos = pos_of(&query_pair);
    let kids = lower_children(query_pair, text);
    query::query(kids, pos).with_text(text.trim().to_string())
}

pub fn lower_stormcmdargs_entry(pairs: Pairs<Rule>, text: &str) -> Node {
    let pair = pairs
        .into_iter()
        .next()
        .expect("StormParser::parse(Rule::stormcmdargs, ..) always yields a pair on success");
    lower_pair(pair, text)
}

fn pos_of(pair: &Pair<Rule>) -> Pos {
    let span = pair.as_span();
    (span.start(), span.end())
}

/// Pure-syntax rules that carry no semantic value of their own: fixed
/// punctuation and keywords the grammar structure already encodes. These
/// never survive into a lowered `kids` list, mirroring the real grammar's
/// anonymous/filtered string-literal terminals.
fn is_noise(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::EOI
            | Rule::LPAR
            | Rule::RPAR
            | Rule::LBRACE
            | Rule::RBRACE
            | Rule::LSQB
            | Rule::RSQB
            | Rule::COMMA
            | Rule::COLON
            | Rule::DOT
            | Rule::EQUAL
            | Rule::VBAR
            | Rule::DOLLAR
            | Rule::AND
            | Rule::OR
            | Rule::NOT
            | Rule::IF
            | Rule::ELIF
            | Rule::ELSE
            | Rule::FOR
            | Rule::IN
            | Rule::WHILE
            | Rule::SWITCH
            | Rule::YIELD
    )
}

fn lower_children(pair: Pair<Rule>, text: &str) -> Vec<Node> {
    pair.into_inner()
        .filter(|p| !is_noise(p.as_rule()))
        .map(|p| lower_pair(p, text))
        .collect()
}

fn lower_pair(pair: Pair<Rule>, text: &str) -> Node {
    let pos = pos_of(&pair);
    let rule = pair.as_rule();

    log::trace!("lowering rule {:?} at {:?}", rule, pos);

    match rule {
        // -- terminal leaf rewrites --
        Rule::ABSPROP | Rule::ABSPROPNOUNIV => query::abs_prop(pair.as_str(), pos),
        Rule::ALLTAGS => tag::tag_match_empty(pos),
        Rule::DOUBLEQUOTEDSTRING => query::const_str(unescape_double_quoted(pair.as_str()), pos),
        Rule::SINGLEQUOTEDSTRING => query::const_str(strip_single_quoted(pair.as_str()), pos),
        Rule::NUMBER => Node::leaf(NodeKind::Const, parse_number(pair.as_str()), pos),
        Rule::TAGMATCH => tag::tag_match(tag::tagsplit(pair.as_str(), pos), pos),
        Rule::VARTOKN => query::const_str(strip_var_token(pair.as_str()), pos),
        Rule::BREAK => query::break_oper(pos),
        Rule::CONTINUE => query::continue_oper(pos),

        // -- ten rules requiring custom lowering --
        Rule::subquery => lower_subquery(pair, text),
        Rule::baresubquery => lower_baresubquery(pair, text),
        Rule::funccall => lower_funccall(pair, text),
        Rule::varlist => lower_varlist(pair),
        Rule::operrelprop_pivot => lower_operrelprop(pair, text, false),
        Rule::operrelprop_join => lower_operrelprop(pair, text, true),
        Rule::stormcmdargs => lower_stormcmdargs_rule(pair, text),
        Rule::tagname => lower_tagname(pair, text),
        Rule::switchcase => lower_switchcase(pair, text),
        Rule::casevalu => lower_casevalu(pair, text),
        Rule::stormcmd => lower_stormcmd(pair, text),

        // -- default rule dispatch: wrap lowered children --
        Rule::query => query::query(lower_children(pair, text), pos),

        Rule::editparens => edit::edit_parens(lower_children(pair, text), pos),
        Rule::editnodeadd => edit::edit_node_add(lower_children(pair, text), pos),
        Rule::editpropset | Rule::editunivset => edit::edit_prop_set(lower_children(pair, text), pos),
        Rule::editpropdel => edit::edit_prop_del(lower_children(pair, text), pos),
        Rule::editunivdel => edit::edit_univ_del(lower_children(pair, text), pos),
        Rule::edittagadd => edit::edit_tag_add(lower_children(pair, text), pos),
        Rule::edittagdel => edit::edit_tag_del(lower_children(pair, text), pos),
        Rule::edittagpropset => edit::edit_tag_prop_set(lower_children(pair, text), pos),
        Rule::edittagpropdel => edit::edit_tag_prop_del(lower_children(pair, text), pos),

        Rule::liftpropby => lift::lift_prop_by(lower_children(pair, text), pos),
        Rule::liftprop => lift::lift_prop(lower_children(pair, text), pos),
        Rule::liftbytag => lift::lift_tag(lower_children(pair, text), pos),
        Rule::liftformtag => lift::lift_form_tag(lower_children(pair, text), pos),
        Rule::lifttagtag => lift::lift_tag_tag(lower_children(pair, text), pos),
        Rule::liftbytagprop => lift::lift_tag_prop(lower_children(pair, text), pos),
        Rule::liftbyformtagprop => lift::lift_form_tag_prop(lower_children(pair, text), pos),
        Rule::liftbyonlytagprop => lift::lift_only_tag_prop(lower_children(pair, text), pos),

        Rule::tagprop => tag::tag_prop(lower_children(pair, text), pos),
        Rule::formtagprop => tag::form_tag_prop(lower_children(pair, text), pos),
        Rule::onlytagprop => tag::only_tag_prop(lower_children(pair, text), pos),

        Rule::formpivot_ => pivot::form_pivot(lower_children(pair, text), pos, false),
        Rule::formpivot_pivotout => pivot::pivot_out(lower_children(pair, text), pos, false),
        Rule::formpivot_pivottotags => pivot::pivot_to_tags(lower_children(pair, text), pos),
        Rule::formpivotin_ => pivot::pivot_in(lower_children(pair, text), pos, false),
        Rule::formpivotin_pivotinfrom => pivot::pivot_in_from(lower_children(pair, text), pos, false),
        Rule::formjoin_formpivot => pivot::form_pivot(lower_children(pair, text), pos, true),
        Rule::formjoin_pivotout => pivot::pivot_out(lower_children(pair, text), pos, true),
        Rule::formjoinin_pivotin => pivot::pivot_in(lower_children(pair, text), pos, true),
        Rule::formjoinin_pivotinfrom => pivot::pivot_in_from(lower_children(pair, text), pos, true),

        Rule::relprop => query::rel_prop(lower_children(pair, text), pos),
        Rule::univprop => query::univ_prop(lower_children(pair, text), pos),
        Rule::relpropvalu | Rule::relpropvalue => query::rel_prop_value(lower_children(pair, text), pos),
        Rule::univpropvalu => query::univ_prop_value(lower_children(pair, text), pos),
        Rule::valulist => query::list(lower_children(pair, text), pos),

        Rule::filtoper => cond::filt_oper(lower_children(pair, text), pos),
        Rule::andexpr => cond::and_cond(lower_children(pair, text), pos),
        Rule::orexpr => cond::or_cond(lower_children(pair, text), pos),
        Rule::notcond => cond::not_cond(lower_children(pair, text), pos),
        Rule::condsubq => cond::subq_cond(lower_children(pair, text), pos),
        Rule::hasabspropcond => cond::has_abs_prop_cond(lower_children(pair, text), pos),
        Rule::hasrelpropcond => cond::has_rel_prop_cond(lower_children(pair, text), pos),
        Rule::hastagpropcond => cond::has_tag_prop_cond(lower_children(pair, text), pos),
        Rule::abspropcond => cond::abs_prop_cond(lower_children(pair, text), pos),
        Rule::relpropcond => cond::rel_prop_cond(lower_children(pair, text), pos),
        Rule::tagcond => tag::tag_cond(lower_children(pair, text), pos),
        Rule::tagvalucond => tag::tag_valu_cond(lower_children(pair, text), pos),
        Rule::tagpropcond => tag::tag_prop_cond(lower_children(pair, text), pos),

        Rule::ifstmt => cond::if_stmt(lower_children(pair, text), pos),
        Rule::ifclause => cond::if_clause(lower_children(pair, text), pos),
        Rule::forloop => cond::for_loop(lower_children(pair, text), pos),
        Rule::whileloop => cond::while_loop(lower_children(pair, text), pos),

        Rule::opervarlist => var::var_list_set_oper(lower_children(pair, text), pos),
        Rule::valuvar => var::var_set_oper(lower_children(pair, text), pos),
        Rule::vareval => var::var_eval_oper(lower_children(pair, text), pos),
        Rule::varderef => var::var_deref(lower_children(pair, text), pos),
        Rule::varvalue => var::var_value(lower_children(pair, text), pos),
        Rule::barecallee => var::var_value(vec![query::const_str(pair.as_str(), pos)], pos),

        Rule::kwarg => func::call_kwarg(lower_children(pair, text), pos),

        Rule::dollarexpr => expr::dollar_expr(lower_children(pair, text), pos),
        Rule::exprnot => expr::unary_expr_node(lower_children(pair, text), pos),
        Rule::exprproduct | Rule::exprsum | Rule::exprcmp | Rule::exprand | Rule::expror => {
            expr::expr_node(lower_children(pair, text), pos)
        }

        Rule::tagvalu => tag::tag_value(lower_children(pair, text), pos),
        Rule::tagpropvalu => tag::tag_prop_value(lower_children(pair, text), pos),

        // -- any other terminal not given an explicit rewrite defaults to a
        // raw Const --
        Rule::CMPR
        | Rule::EXPRCMPR
        | Rule::SETOPER
        | Rule::FILTPREFIX
        | Rule::EXPRPLUS
        | Rule::EXPRMINUS
        | Rule::EXPRTIMES
        | Rule::EXPRDIVIDE
        | Rule::BASEPROP
        | Rule::RELNAME
        | Rule::UNIVNAME
        | Rule::CMDNAME
        | Rule::TAG
        | Rule::NONCMDQUOTE
        | Rule::NONQUOTEWORD
        | Rule::PROPNAME
        | Rule::PROPS
        | Rule::CASEVALU => query::const_str(pair.as_str(), pos),

        other => {
            log::error!("no lowering rule registered for grammar rule {:?}", other);
            unreachable!("grammar/dispatch-table desync for rule {:?}", other);
        }
    }
}

/// Item 1: exactly one or two children. If two, the first is `yield`;
/// lower the last (a `baresubquery`) and set `hasyield` accordingly.
fn lower_subquery(pair: Pair<Rule>, text: &str) -> Node {
    let children: Vec<Pair<Rule>> = pair.into_inner().collect();
    let hasyield = children.len() == 2;
    let last = children
        .into_iter()
        .last()
        .expect("subquery requires at least a baresubquery child");
    let mut node = lower_pair(last, text);
    node.hasyield = hasyield;
    node
}

/// Item 2: wrap lowered children in `SubQuery`, retaining the verbatim
/// source text of the rule's own span.
fn lower_baresubquery(pair: Pair<Rule>, text: &str) -> Node {
    let pos = pos_of(&pair);
    let literal = text[pos.0..pos.1].to_string();
    let kids = lower_children(pair, text);
    query::sub_query(kids, pos, literal, false)
}

/// Item 3: partition `[callee, arg1, ...]` into positional/keyword groups.
fn lower_funccall(pair: Pair<Rule>, text: &str) -> Node {
    let pos = pos_of(&pair);
    let mut inner = pair.into_inner().filter(|p| !is_noise(p.as_rule()));
    let callee_pair = inner.next().expect("funccall requires a callee");
    let callee = lower_pair(callee_pair, text);

    let mut positional = Vec::new();
    let mut keyword = Vec::new();
    for child in inner {
        let lowered = lower_pair(child, text);
        if lowered.kind == NodeKind::CallKwarg {
            keyword.push(lowered);
        } else {
            positional.push(lowered);
        }
    }

    let args = func::call_args(positional, pos);
    let kwargs = func::call_kwargs(keyword, pos);
    func::func_call(callee, args, kwargs, pos)
}

/// Item 4: flatten to a list of string values.
fn lower_varlist(pair: Pair<Rule>) -> Node {
    let pos = pos_of(&pair);
    let values: Vec<String> = pair
        .into_inner()
        .filter(|p| !is_noise(p.as_rule()))
        .map(|p| p.as_str().to_string())
        .collect();
    var::var_list(values, pos)
}

/// Item 5: `[relprop, ...rest]`; empty rest -> `PropPivotOut`, else wrap
/// the relprop in `RelPropValue` and emit `PropPivot`.
fn lower_operrelprop(pair: Pair<Rule>, text: &str, isjoin: bool) -> Node {
    let pos = pos_of(&pair);
    let mut children: Vec<Pair<Rule>> = pair.into_inner().filter(|p| !is_noise(p.as_rule())).collect();
    let relprop_pair = children.remove(0);
    let relprop_node = lower_pair(relprop_pair, text);
    let rest: Vec<Node> = children.into_iter().map(|p| lower_pair(p, text)).collect();

    if rest.is_empty() {
        pivot::prop_pivot_out(vec![relprop_node], pos, isjoin)
    } else {
        let wrapped = query::rel_prop_value(vec![relprop_node], pos);
        let mut kids = vec![wrapped];
        kids.extend(rest);
        pivot::prop_pivot(kids, pos, isjoin)
    }
}

/// Item 6: mix of `Const`/`SubQuery` children -> a single `Const(tuple)`.
fn lower_stormcmdargs_rule(pair: Pair<Rule>, text: &str) -> Node {
    let pos = pos_of(&pair);
    let values: Vec<Value> = pair
        .into_inner()
        .filter(|p| !is_noise(p.as_rule()))
        .map(|p| {
            let lowered = lower_pair(p, text);
            match lowered.kind {
                NodeKind::SubQuery => Value::Str(lowered.text.unwrap_or_default()),
                _ => lowered.value,
            }
        })
        .collect();
    query::const_tuple(values, pos)
}

/// Item 7: pass through an already-lowered `TAGMATCH` child, else split the
/// plain `TAG` text on `.` and wrap the segments in `TagName`.
fn lower_tagname(pair: Pair<Rule>, text: &str) -> Node {
    let pos = pos_of(&pair);
    let child = pair
        .into_inner()
        .next()
        .expect("tagname requires a TAG or TAGMATCH child");
    match child.as_rule() {
        Rule::TAGMATCH => lower_pair(child, text),
        Rule::TAG => tag::tag_name(tag::tagname_segments(child.as_str(), pos), pos),
        _ => lower_pair(child, text),
    }
}

/// Item 8: `[varvalu, key0, body0, key1, body1, ...]` -> `SwitchCase`.
fn lower_switchcase(pair: Pair<Rule>, text: &str) -> Node {
    let pos = pos_of(&pair);
    let inner: Vec<Pair<Rule>> = pair.into_inner().filter(|p| !is_noise(p.as_rule())).collect();
    let mut iter = inner.into_iter();
    let varvalu_pair = iter.next().expect("switchcase requires a variable expression");
    let mut kids = vec![lower_pair(varvalu_pair, text)];

    let rest: Vec<Pair<Rule>> = iter.collect();
    for chunk in rest.chunks(2) {
        let key_pos = pos_of(&chunk[0]);
        let key = lower_pair(chunk[0].clone(), text);
        let body = lower_pair(
            chunk.get(1).expect("switchcase case missing its subquery body").clone(),
            text,
        );
        if key.value == Value::Str("*".to_string()) {
            kids.push(cond::case_entry(vec![body], key_pos));
        } else {
            kids.push(cond::case_entry(vec![key, body], key_pos));
        }
    }

    cond::switch_case(kids, pos)
}

/// Item 9: unescape a quoted key, or drop the trailing `:` from a bare one.
fn lower_casevalu(pair: Pair<Rule>, text: &str) -> Node {
    let pos = pos_of(&pair);
    let child = pair.into_inner().next().expect("casevalu requires a child");
    match child.as_rule() {
        Rule::DOUBLEQUOTEDSTRING => lower_pair(child, text),
        Rule::CASEVALU => {
            let raw = child.as_str();
            let trimmed = raw.strip_suffix(':').unwrap_or(raw);
            query::const_str(trimmed.to_string(), pos)
        }
        _ => lower_pair(child, text),
    }
}

/// Item 10: `(name, args)` or, for a bare command, `(name, Const(()))`.
fn lower_stormcmd(pair: Pair<Rule>, text: &str) -> Node {
    let pos = pos_of(&pair);
    let mut inner = pair.into_inner().filter(|p| !is_noise(p.as_rule()));
    let name_pair = inner.next().expect("stormcmd requires a command name");
    let name = lower_pair(name_pair, text);

    match inner.next() {
        Some(args_pair) => {
            let args = lower_pair(args_pair, text);
            query::cmd_oper(name, args, pos)
        }
        None => {
            let args = query::const_tuple(Vec::new(), pos);
            query::cmd_oper(name, args, pos)
        }
    }
}
