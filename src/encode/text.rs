//! Lexical rules of the DOT attribute syntax: numerals, identifiers,
//! quoting and escaping.

/// DOT keywords; an identifier spelled like one must be quoted.
const KEYWORDS: &[&str] = &["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Format a real with the fewest digits that round-trip.
///
/// Integral values drop the decimal point, negative zero becomes `0`, and
/// no exponent is ever produced.
pub fn format_real(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Largest useful rounding precision; an `f64` carries at most 17
/// significant decimal digits.
pub const MAX_FRACTION_DIGITS: usize = 17;

/// Format a real rounded to at most `digits` fractional digits, then
/// trimmed of trailing zeros. `digits` is capped at [`MAX_FRACTION_DIGITS`].
pub fn format_real_with(value: f64, digits: Option<usize>) -> String {
    let Some(digits) = digits else {
        return format_real(value);
    };
    let digits = digits.min(MAX_FRACTION_DIGITS);
    let fixed = format!("{value:.digits$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`, excluding the DOT keywords.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(s))
}

/// `-?(.[0-9]+ | [0-9]+(.[0-9]*)?)`
pub fn is_numeral(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() {
        return false;
    }
    let (whole, fraction) = match digits.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (digits, None),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match fraction {
        None => all_digits(whole),
        Some(f) if whole.is_empty() => !f.is_empty() && all_digits(f),
        Some(f) => all_digits(whole) && all_digits(f),
    }
}

/// Text that may appear without quotes on the right-hand side of `=`.
pub fn is_bare(s: &str) -> bool {
    is_identifier(s) || is_numeral(s)
}

/// Colors and color lists: identifiers or numerals joined by `:`.
pub fn is_bare_color(s: &str) -> bool {
    s.split(':').all(is_bare)
}

/// Escape `\` and `"` for use inside a quoted string.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Wrap in double quotes, escaping the contents.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape(s))
}

pub fn quote_if_needed(s: &str) -> String {
    if is_bare(s) { s.to_owned() } else { quote(s) }
}

/// Escape label text.
///
/// Backslash sequences the renderer interprets (`\n`, `\l`, `\r`, `\N`,
/// `\G`, `\E`, `\T`, `\H`, `\L`, `\\`, `\"`) are kept verbatim. Any other
/// backslash is doubled, a raw newline becomes `\n`, a carriage return is
/// dropped and an unescaped `"` becomes `\"`.
pub fn escape_label(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next @ ('n' | 'l' | 'r' | 'N' | 'G' | 'E' | 'T' | 'H' | 'L' | '\\' | '"')) => {
                    out.push('\\');
                    out.push(next);
                    chars.next();
                }
                _ => out.push_str("\\\\"),
            },
            '\n' => out.push_str("\\n"),
            '\r' => {}
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_real_minimal_digits() {
        assert_eq!(format_real(11.0), "11");
        assert_eq!(format_real(8.5), "8.5");
        assert_eq!(format_real(-0.0), "0");
        assert_eq!(format_real(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_real(1e21), "1000000000000000000000");
        assert_eq!(format_real(1.5e-7), "0.00000015");
    }

    #[test]
    fn test_format_real_with_precision() {
        assert_eq!(format_real_with(0.1 + 0.2, Some(4)), "0.3");
        assert_eq!(format_real_with(2.0, Some(3)), "2");
        assert_eq!(format_real_with(-0.00001, Some(2)), "0");
        assert_eq!(format_real_with(1.25, None), "1.25");
    }

    #[test]
    fn test_format_real_with_caps_precision() {
        assert_eq!(format_real_with(8.5, Some(100_000)), "8.5");
        assert_eq!(format_real_with(0.25, Some(usize::MAX)), "0.25");
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("red"));
        assert!(is_identifier("_x9"));
        assert!(!is_identifier("9x"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("Node"));
        assert!(!is_identifier("subgraph"));
    }

    #[test]
    fn test_numerals() {
        for ok in ["0", "42", "-3", ".5", "-.5", "1.", "1.25"] {
            assert!(is_numeral(ok), "{ok}");
        }
        for bad in ["", "-", ".", "1.2.3", "1e5", "+1", "0x10"] {
            assert!(!is_numeral(bad), "{bad}");
        }
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("Helvetica"), "Helvetica");
        assert_eq!(quote_if_needed("http://x"), "\"http://x\"");
        assert_eq!(quote_if_needed("a \"b\""), "\"a \\\"b\\\"\"");
        assert_eq!(quote_if_needed("C:\\dir"), "\"C:\\\\dir\"");
        assert_eq!(quote_if_needed(""), "\"\"");
        assert_eq!(quote_if_needed("graph"), "\"graph\"");
    }

    #[test]
    fn test_bare_color() {
        assert!(is_bare_color("red:blue"));
        assert!(is_bare_color("red"));
        assert!(!is_bare_color("#ff0000"));
        assert!(!is_bare_color("red;0.3:blue"));
        assert!(!is_bare_color(":red"));
        assert!(!is_bare_color("red:"));
        assert!(!is_bare_color(""));
    }

    #[test]
    fn test_bare_color_elements_must_be_identifiers_or_numerals() {
        assert!(!is_bare_color("9abc"));
        assert!(!is_bare_color("red:9abc"));
        assert!(!is_bare_color("node"));
        assert!(is_bare_color("_x9:0"));
        assert!(is_bare_color("gray50"));
    }

    #[test]
    fn test_escape_label_preserves_alignment_markers() {
        assert_eq!(escape_label("left\\lright\\r"), "left\\lright\\r");
        assert_eq!(escape_label("a\nb"), "a\\nb");
        assert_eq!(escape_label("a\r\nb"), "a\\nb");
        assert_eq!(escape_label("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_label("already \\\"quoted\\\""), "already \\\"quoted\\\"");
        assert_eq!(escape_label("path\\x"), "path\\\\x");
        assert_eq!(escape_label("trailing\\"), "trailing\\\\");
        assert_eq!(escape_label("\\N in \\G"), "\\N in \\G");
    }

    #[test]
    fn test_escape_label_is_stable_on_its_output() {
        let once = escape_label("x\ny \"z\" \\q");
        assert_eq!(escape_label(&once), once);
    }
}
