//! Parser and AST lowerer for the Storm graph query language.
//!
//! A pest-derived grammar struct plus a thin `parse_*` wrapper that
//! converts `pest`'s error type at the boundary instead of letting it
//! leak to callers.

extern crate pest;
#[macro_use]
extern crate pest_derive;

pub mod ast;
mod classify;
mod error;
mod lower;
mod number;
mod strings;

use pest::Parser;

pub use ast::{Node, NodeKind, Value};
pub use classify::{is_cmd_name, is_form_name, is_prop_name, is_univ_name};
pub use error::BadSyntax;

// Two independent grammars live in this crate (the storm query language
// itself, and the small auxiliary grammar a handful of commands use for
// their argument strings). Each needs its own module so pest_derive's
// generated `Rule` enum doesn't collide.
mod storm_grammar {
    #[derive(pest_derive::Parser)]
    #[grammar = "storm.pest"]
    pub struct StormParser;
}

mod cmdstring_grammar {
    #[derive(pest_derive::Parser)]
    #[grammar = "cmdstring.pest"]
    pub struct CmdStringParser;
}

pub use storm_grammar::{Rule, StormParser};
use cmdstring_grammar::{CmdStringParser, Rule as CmdRule};

/// Parses a full Storm query into a `Query` AST node.
pub fn parse_query(text: &str) -> Result<Node, BadSyntax> {
    let pairs = StormParser::parse(Rule::query, text).map_err(|err| BadSyntax::from_pest(err, text))?;
    Ok(lower::lower_query(pairs, text))
}

/// Parses the argument tail of a storm command (everything after the
/// command name) into a single `Const(Tuple)` node.
pub fn parse_stormcmdargs(text: &str) -> Result<Node, BadSyntax> {
    let pairs =
        StormParser::parse(Rule::stormcmdargs, text).map_err(|err| BadSyntax::from_pest(err, text))?;
    Ok(lower::lower_stormcmdargs_entry(pairs, text))
}

/// Parses a single command-string argument starting at `offset`: a
/// parenthesized comma-separated list, a quoted string, or a bare token.
/// Returns the parsed value and the offset (within `text`) just past it --
/// whatever follows is left for the caller to interpret.
pub fn parse_cmd_string(text: &str, offset: usize) -> Result<(Value, usize), BadSyntax> {
    let slice = &text[offset..];
    let mut pairs = CmdStringParser::parse(CmdRule::cmdstring, slice)
        .map_err(|err| BadSyntax::from_pest_cmd(err, text, offset))?;
    let cmdstring_pair = pairs.next().expect("cmdstring rule always produces a pair on success");
    let mut inner = cmdstring_pair.into_inner();
    let valu_pair = inner.next().expect("cmdstring requires a valu child");

    let new_offset = offset + valu_pair.as_span().end();
    let value = lower_cmdstring_valu(valu_pair);
    Ok((value, new_offset))
}

fn lower_cmdstring_valu(pair: pest::iterators::Pair<CmdRule>) -> Value {
    let child = pair
        .into_inner()
        .next()
        .expect("cmdstring valu always wraps exactly one child");
    match child.as_rule() {
        CmdRule::alist => Value::Tuple(child.into_inner().map(lower_cmdstring_valu).collect()),
        CmdRule::DOUBLEQUOTEDSTRING => Value::Str(strings::unescape_double_quoted(child.as_str())),
        CmdRule::SINGLEQUOTEDSTRING => Value::Str(strings::strip_single_quoted(child.as_str())),
        CmdRule::JUSTCHARS => {
            let text = child.as_str();
            text.parse::<i64>().map(Value::Int).unwrap_or_else(|_| Value::Str(text.to_string()))
        }
        other => unreachable!("cmdstring grammar/dispatch desync for {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_lift_by_tag() {
        let query = parse_query("#foo.bar").expect("valid query");
        assert_eq!(query.kind, NodeKind::Query);
        assert_eq!(query.kids.len(), 1);
        assert_eq!(query.kids[0].kind, NodeKind::LiftTag);
    }

    #[test]
    fn rejects_unbalanced_edit_block() {
        let err = parse_query("inet:fqdn=vertex.link [").unwrap_err();
        assert!(!err.mesg.is_empty());
    }

    #[test]
    fn parses_cmd_string_tuple() {
        let text = "(1, 2) trailing";
        let (value, new_offset) = parse_cmd_string(text, 0).expect("valid cmdstring");
        assert_eq!(value, Value::Tuple(vec![Value::Int(1), Value::Int(2)]));
        assert_eq!(&text[new_offset..], " trailing");
    }

    #[test]
    fn parses_cmd_string_bare_integer() {
        let (value, _) = parse_cmd_string("42", 0).expect("valid cmdstring");
        assert_eq!(value, Value::Int(42));
    }

    #[test]
    fn parses_cmd_string_at_an_offset() {
        let text = "skip 'quoted value' rest";
        let (value, new_offset) = parse_cmd_string(text, 5).expect("valid cmdstring");
        assert_eq!(value, Value::Str("quoted value".to_string()));
        assert_eq!(&text[new_offset..], " rest");
    }
}
