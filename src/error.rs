//! The single public error type: a small struct with a hand-written
//! `Display`/`std::error::Error` impl wrapping `pest::error::Error<Rule>`,
//! rather than a `thiserror`-derived one.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use pest::error::{ErrorVariant, InputLocation};

use crate::Rule;

/// The only error surfaced to callers of the public parse entry points.
/// All lower-level `pest` errors are converted at the boundary; none leak.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadSyntax {
    pub text: String,
    pub at: usize,
    pub mesg: String,
}

impl fmt::Display for BadSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}: {}", self.at, self.mesg)
    }
}

impl std::error::Error for BadSyntax {}

impl BadSyntax {
    pub(crate) fn from_pest(err: pest::error::Error<Rule>, text: &str) -> Self {
        let at = match err.location {
            InputLocation::Pos(p) => p,
            InputLocation::Span((_, end)) => end,
        };

        let base = truncate_message(&err.variant.message());

        let mesg = match &err.variant {
            ErrorVariant::ParsingError { positives, negatives } => {
                let mut names: Vec<&'static str> = positives
                    .iter()
                    .chain(negatives.iter())
                    .filter_map(|rule| terminal_english(*rule))
                    .collect();
                names.sort_unstable();
                names.dedup();
                if names.is_empty() {
                    base
                } else {
                    format!("{}. Expecting one of: {}", base, names.join(", "))
                }
            }
            ErrorVariant::CustomError { .. } => base,
        };

        BadSyntax {
            text: text.to_string(),
            at,
            mesg,
        }
    }

    /// Same conversion for the auxiliary command-string grammar, whose
    /// terminals aren't in the English map below -- the message is
    /// truncated the same way but never gains an "Expecting one of" tail.
    /// `offset` is where the parsed slice started within the caller's full
    /// text, so `at` comes out relative to that text rather than the slice.
    pub(crate) fn from_pest_cmd<R: std::fmt::Debug>(
        err: pest::error::Error<R>,
        text: &str,
        offset: usize,
    ) -> Self {
        let at = offset
            + match err.location {
                InputLocation::Pos(p) => p,
                InputLocation::Span((_, end)) => end,
            };
        let mesg = truncate_message(&err.variant.message());

        BadSyntax {
            text: text.to_string(),
            at,
            mesg,
        }
    }
}

fn truncate_message(mesg: &str) -> String {
    let cut = mesg
        .find('\n')
        .into_iter()
        .chain(mesg.find('!'))
        .min()
        .unwrap_or(mesg.len());
    mesg[..cut].to_string()
}

/// Maps a grammar rule back to the terminal name used in the English
/// map below. `None` for rules that aren't leaf terminals (structural
/// rules never show up in `positives`/`negatives` as anything but
/// themselves, and have no English text of their own).
fn terminal_english(rule: Rule) -> Option<&'static str> {
    TERMINAL_ENGLISH.get(rule_key(rule)?).copied()
}

fn rule_key(rule: Rule) -> Option<&'static str> {
    use Rule::*;
    Some(match rule {
        ABSPROP => "ABSPROP",
        ABSPROPNOUNIV => "ABSPROPNOUNIV",
        ALLTAGS => "ALLTAGS",
        AND => "AND",
        BREAK => "BREAK",
        CASEVALU => "CASEVALU",
        CCOMMENT => "CCOMMENT",
        CMDNAME => "CMDNAME",
        CMPR => "CMPR",
        COLON => "COLON",
        COMMA => "COMMA",
        CONTINUE => "CONTINUE",
        CPPCOMMENT => "CPPCOMMENT",
        DOLLAR => "DOLLAR",
        DOT => "DOT",
        DOUBLEQUOTEDSTRING => "DOUBLEQUOTEDSTRING",
        ELIF => "ELIF",
        ELSE => "ELSE",
        EQUAL => "EQUAL",
        EXPRCMPR => "EXPRCMPR",
        EXPRDIVIDE => "EXPRDIVIDE",
        EXPRMINUS => "EXPRMINUS",
        EXPRPLUS => "EXPRPLUS",
        EXPRTIMES => "EXPRTIMES",
        FILTPREFIX => "FILTPREFIX",
        FOR => "FOR",
        IF => "IF",
        IN => "IN",
        LBRACE => "LBRACE",
        LPAR => "LPAR",
        LSQB => "LSQB",
        NONCMDQUOTE => "NONCMDQUOTE",
        NONQUOTEWORD => "NONQUOTEWORD",
        NOT => "NOT",
        NUMBER => "NUMBER",
        OR => "OR",
        PROPNAME => "PROPNAME",
        PROPS => "PROPS",
        BASEPROP => "BASEPROP",
        RBRACE => "RBRACE",
        RELNAME => "RELNAME",
        RPAR => "RPAR",
        RSQB => "RSQB",
        SETOPER => "SETOPER",
        SINGLEQUOTEDSTRING => "SINGLEQUOTEDSTRING",
        SWITCH => "SWITCH",
        TAG => "TAG",
        TAGMATCH => "TAGMATCH",
        UNIVNAME => "UNIVNAME",
        VARTOKN => "VARTOKN",
        VBAR => "VBAR",
        WHILE => "WHILE",
        YIELD => "YIELD",
        _DEREF => "_DEREF",
        _EXPRSTART => "_EXPRSTART",
        _LEFTJOIN => "_LEFTJOIN",
        _LEFTPIVOT => "_LEFTPIVOT",
        _ONLYTAGPROP => "_ONLYTAGPROP",
        _RIGHTJOIN => "_RIGHTJOIN",
        _RIGHTPIVOT => "_RIGHTPIVOT",
        _WS => "_WS",
        _WSCOMM => "_WSCOMM",
        _ => return None,
    })
}

/// The terminal-to-English mapping, data rather than logic.
static TERMINAL_ENGLISH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ABSPROP", "absolute or universal property"),
        ("ABSPROPNOUNIV", "absolute property"),
        ("ALLTAGS", "#"),
        ("AND", "and"),
        ("BREAK", "break"),
        ("CASEVALU", "case value"),
        ("CCOMMENT", "C comment"),
        ("CMDNAME", "command name"),
        ("CMPR", "comparison operator"),
        ("COLON", ":"),
        ("COMMA", ","),
        ("CONTINUE", "continue"),
        ("CPPCOMMENT", "c++ comment"),
        ("DOLLAR", "$"),
        ("DOT", "."),
        ("DOUBLEQUOTEDSTRING", "double-quoted string"),
        ("ELIF", "elif"),
        ("ELSE", "else"),
        ("EQUAL", "="),
        ("EXPRCMPR", "expression comparison operator"),
        ("EXPRDIVIDE", "/"),
        ("EXPRMINUS", "-"),
        ("EXPRPLUS", "+"),
        ("EXPRTIMES", "*"),
        ("FILTPREFIX", "+ or -"),
        ("FOR", "for"),
        ("IF", "if"),
        ("IN", "in"),
        ("LBRACE", "["),
        ("LPAR", "("),
        ("LSQB", "{"),
        ("NONCMDQUOTE", "unquoted command argument"),
        ("NONQUOTEWORD", "unquoted value"),
        ("NOT", "not"),
        ("NUMBER", "number"),
        ("OR", "or"),
        ("PROPNAME", "property name"),
        ("PROPS", "absolute property name"),
        ("BASEPROP", "base property name"),
        ("RBRACE", "]"),
        ("RELNAME", "relative property"),
        ("RPAR", ")"),
        ("RSQB", "}"),
        ("SETOPER", "= or ?="),
        ("SINGLEQUOTEDSTRING", "single-quoted string"),
        ("SWITCH", "switch"),
        ("TAG", "plain tag name"),
        ("TAGMATCH", "tag name with asterisks"),
        ("UNIVNAME", "universal property"),
        ("VARTOKN", "variable"),
        ("VBAR", "|"),
        ("WHILE", "while"),
        ("YIELD", "yield"),
        ("_DEREF", "*"),
        ("_EXPRSTART", "$("),
        ("_LEFTJOIN", "<+-"),
        ("_LEFTPIVOT", "<-"),
        ("_ONLYTAGPROP", "#:"),
        ("_RIGHTJOIN", "-+>"),
        ("_RIGHTPIVOT", "->"),
        ("_WS", "whitespace"),
        ("_WSCOMM", "whitespace or comment"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_terminal_key_has_english_text() {
        assert_eq!(TERMINAL_ENGLISH.get("LPAR"), Some(&"("));
        assert_eq!(TERMINAL_ENGLISH.get("AND"), Some(&"and"));
    }

    #[test]
    fn base_message_truncates_at_bang_or_newline() {
        assert_eq!(truncate_message("boom! rest"), "boom");
        assert_eq!(truncate_message("boom\nrest"), "boom");
        assert_eq!(truncate_message("plain"), "plain");
    }
}
