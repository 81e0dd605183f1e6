/// Quote `s` as a double-quoted TypeScript string literal.
///
/// Line breaks (`\r\n`, `\n`, `\r`) become a single space first. Backslashes,
/// double quotes and any remaining control characters are then escaped,
/// along with U+2028/U+2029 which older JavaScript parsers treat as line
/// terminators. Everything else, including non-ASCII text, is kept literal.
pub fn ts_string_literal(s: &str) -> String {
    let flattened = s.replace("\r\n", " ").replace(['\n', '\r'], " ");

    let mut out = String::with_capacity(flattened.len() + 2);
    out.push('"');
    for ch in flattened.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_quoted() {
        assert_eq!(ts_string_literal("Steady Alliance"), r#""Steady Alliance""#);
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(ts_string_literal(r#"the "quiet" one"#), r#""the \"quiet\" one""#);
    }

    #[test]
    fn backslashes_are_escaped() {
        assert_eq!(ts_string_literal(r"either\or"), r#""either\\or""#);
        assert_eq!(ts_string_literal(r#"\""#), r#""\\\"""#);
    }

    #[test]
    fn newlines_become_single_spaces() {
        assert_eq!(ts_string_literal("one\ntwo"), r#""one two""#);
        assert_eq!(ts_string_literal("one\r\ntwo"), r#""one two""#);
        assert_eq!(ts_string_literal("one\rtwo"), r#""one two""#);
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(ts_string_literal("a\tb"), r#""a\tb""#);
        assert_eq!(ts_string_literal("bell\u{7}"), r#""bell\u0007""#);
        assert_eq!(ts_string_literal("nul\0"), r#""nul\u0000""#);
    }

    #[test]
    fn line_separators_are_escaped() {
        assert_eq!(ts_string_literal("a\u{2028}b\u{2029}"), r#""a\u2028b\u2029""#);
    }

    #[test]
    fn non_ascii_is_literal() {
        assert_eq!(
            ts_string_literal("Rat × Ox — Café"),
            "\"Rat × Ox — Café\""
        );
    }
}
