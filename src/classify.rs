//! Name-classification predicates for property, form, universal-property,
//! and command names. Patterns compiled once via `once_cell::sync::Lazy`.

use once_cell::sync::Lazy;
use regex::Regex;

static CMD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9.]+$").unwrap());
static PROP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z_][a-z0-9]*(:[a-z0-9]+)+([:.][a-z_ ][a-z0-9]+)*$").unwrap());
static UNIV_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.[a-z_][a-z0-9]*([:.][a-z0-9]+)*$").unwrap());
static FORM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(:[a-z0-9]+)+$").unwrap());

pub fn is_cmd_name(name: &str) -> bool {
    CMD_RE.is_match(name)
}

pub fn is_prop_name(name: &str) -> bool {
    PROP_RE.is_match(name)
}

pub fn is_univ_name(name: &str) -> bool {
    UNIV_RE.is_match(name)
}

pub fn is_form_name(name: &str) -> bool {
    FORM_RE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_names() {
        assert!(is_cmd_name("help.storm"));
        assert!(!is_cmd_name("Help"));
    }

    #[test]
    fn prop_names() {
        assert!(is_prop_name("inet:fqdn:zone"));
        assert!(!is_prop_name("inet"));
    }

    #[test]
    fn univ_names() {
        assert!(is_univ_name(".created"));
        assert!(!is_univ_name("created"));
    }

    #[test]
    fn form_names() {
        assert!(is_form_name("inet:fqdn"));
        assert!(!is_form_name("inet"));
    }
}
