//! Field normalization utilities.

use regex::Regex;
use std::sync::LazyLock;

/// Removes leading and trailing whitespace.
pub fn trim(text: &str) -> &str {
    text.trim()
}

/// Strips one pair of surrounding double quotes.
///
/// Text that is not wholly wrapped in quotes is returned unchanged. Escaped
/// quotes inside the text are not interpreted.
///
/// # Examples
///
/// ```
/// use format1_parser::parser::unquote;
///
/// assert_eq!(unquote("\"Intel i7\""), "Intel i7");
/// assert_eq!(unquote("Intel"), "Intel");
/// assert_eq!(unquote("\""), "\"");
/// ```
pub fn unquote(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Normalizes a size token such as `16GB` or `1 gb`.
///
/// Tokens made of digits, optional whitespace and an optional `kB`, `MB`,
/// `GB` or `TB` unit (any casing) come back as digits followed by the unit
/// exactly as written. Anything else is returned verbatim.
///
/// # Examples
///
/// ```
/// use format1_parser::parser::parse_size;
///
/// assert_eq!(parse_size("500"), "500");
/// assert_eq!(parse_size("2TB"), "2TB");
/// assert_eq!(parse_size("1 gb"), "1gb");
/// assert_eq!(parse_size("abc"), "abc");
/// ```
pub fn parse_size(token: &str) -> String {
    // SAFETY: This regex is a compile-time constant and is validated by tests.
    static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)^([0-9]+)\s*([kmgt]b)?$").expect("static regex must compile")
    });

    match SIZE_RE.captures(token) {
        Some(caps) => {
            let digits = caps.get(1).map_or("", |m| m.as_str());
            let unit = caps.get(2).map_or("", |m| m.as_str());
            format!("{digits}{unit}")
        }
        None => token.to_string(),
    }
}

/// Splits off the first whitespace-delimited token.
///
/// Returns the token and the remainder (untrimmed), or `None` for a line
/// with no tokens.
pub(crate) fn split_first_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    match text.find(char::is_whitespace) {
        Some(end) => Some((&text[..end], &text[end..])),
        None => Some((text, "")),
    }
}
