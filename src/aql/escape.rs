//! String escaping utilities for AQL string literals.

/// Escape a string for use in an AQL string literal.
///
/// # Arguments
/// * `s` - The string to escape
/// * `quote_char` - The quote character to escape ('"' for double-quoted, '\'' for single-quoted)
pub fn escape_string_for_quote(s: &str, quote_char: char) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            c if c == quote_char => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}

/// Escape a string for use in a double-quoted AQL string literal
#[inline]
pub fn escape_string(s: &str) -> String {
    escape_string_for_quote(s, '"')
}

/// Wrap a string in double quotes, escaping its content.
///
/// Used for bracketed attribute access (`doc["1970-2000"]`) and object keys.
pub fn quote_string(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}
