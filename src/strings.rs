//! Escape decoding for `DOUBLEQUOTEDSTRING` terminals.
//!
//! Supports the standard C-like escape set (`\n \t \r \\ \" \' \xHH \uHHHH
//! \u{HHHHHH}`), decoded by hand here rather than through the `unescape`
//! crate -- see DESIGN.md for why.

/// Strips the surrounding quotes from a `DOUBLEQUOTEDSTRING` token's raw
/// text and decodes its escape sequences.
pub fn unescape_double_quoted(raw: &str) -> String {
    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    decode_escapes(inner)
}

/// Strips the surrounding quotes from a `SINGLEQUOTEDSTRING` token's raw
/// text. No escape processing: the grammar forbids interior quotes.
pub fn strip_single_quoted(raw: &str) -> String {
    raw.strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(raw)
        .to_string()
}

/// Strips the `$` sigil and any quotes from a `VARTOKN` token's raw text.
pub fn strip_var_token(raw: &str) -> String {
    let raw = raw.strip_prefix('$').unwrap_or(raw);
    if (raw.starts_with('"') && raw.ends_with('"') && raw.len() >= 2)
        || (raw.starts_with('\'') && raw.ends_with('\'') && raw.len() >= 2)
    {
        raw[1..raw.len() - 1].to_string()
    } else {
        raw.to_string()
    }
}

fn decode_escapes(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('x') => push_hex_escape(&mut chars, &mut out, 2),
            Some('u') if chars.peek() == Some(&'{') => {
                chars.next();
                let mut digits = String::new();
                for d in chars.by_ref() {
                    if d == '}' {
                        break;
                    }
                    digits.push(d);
                }
                push_code_point(&digits, &mut out);
            }
            Some('u') => push_hex_escape(&mut chars, &mut out, 4),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn push_hex_escape(chars: &mut std::iter::Peekable<std::str::Chars>, out: &mut String, width: usize) {
    let mut digits = String::with_capacity(width);
    for _ in 0..width {
        match chars.peek() {
            Some(d) if d.is_ascii_hexdigit() => {
                digits.push(*d);
                chars.next();
            }
            _ => break,
        }
    }
    push_code_point(&digits, out);
}

fn push_code_point(digits: &str, out: &mut String) {
    if let Ok(n) = u32::from_str_radix(digits, 16) {
        if let Some(ch) = char::from_u32(n) {
            out.push(ch);
            return;
        }
    }
    out.push_str("\\u{");
    out.push_str(digits);
    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_round_trips() {
        assert_eq!(unescape_double_quoted("\"vertex.link\""), "vertex.link");
    }

    #[test]
    fn standard_escapes() {
        assert_eq!(unescape_double_quoted("\"a\\nb\\tc\""), "a\nb\tc");
        assert_eq!(unescape_double_quoted("\"\\\"q\\\"\""), "\"q\"");
    }

    #[test]
    fn hex_and_unicode_escapes() {
        assert_eq!(unescape_double_quoted("\"\\x41\""), "A");
        assert_eq!(unescape_double_quoted("\"\\u0041\""), "A");
        assert_eq!(unescape_double_quoted("\"\\u{1F600}\""), "\u{1F600}");
    }

    #[test]
    fn single_quoted_has_no_escapes() {
        assert_eq!(strip_single_quoted("'a\\nb'"), "a\\nb");
    }

    #[test]
    fn var_token_strips_sigil_and_quotes() {
        assert_eq!(strip_var_token("$foo"), "foo");
        assert_eq!(strip_var_token("$\"my var\""), "my var");
    }
}
