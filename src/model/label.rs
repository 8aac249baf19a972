//! Label strings.

use serde::{Deserialize, Serialize};

use super::ValueError;
use crate::encode::{text, EncodeContext, QuotePolicy};

/// A node, edge or graph label.
///
/// The encoder never parses the record or HTML sub-grammars; it only
/// decides how the whole string is delimited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelString {
    /// Escaped text. Alignment markers (`\n`, `\l`, `\r`) and the other
    /// renderer escapes (`\N`, `\G`, ...) pass through untouched.
    Plain(String),
    /// Record-shape field syntax (`{a|<p>b}`), quoted verbatim.
    Record(String),
    /// HTML-like label, emitted between `<` and `>`.
    Html(String),
}

impl LabelString {
    pub fn plain(s: impl Into<String>) -> Self {
        LabelString::Plain(s.into())
    }

    pub fn record(s: impl Into<String>) -> Self {
        LabelString::Record(s.into())
    }

    pub fn html(s: impl Into<String>) -> Self {
        LabelString::Html(s.into())
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        match self {
            LabelString::Plain(_) => Ok(()),
            LabelString::Record(fields) => check_record(fields),
            LabelString::Html(markup) => check_html(markup),
        }
    }

    pub fn encode(&self, ctx: &EncodeContext) -> String {
        match self {
            LabelString::Plain(s) => {
                let escaped = text::escape_label(s);
                if ctx.quote == QuotePolicy::AsNeeded && text::is_bare(&escaped) {
                    escaped
                } else {
                    format!("\"{escaped}\"")
                }
            }
            LabelString::Record(s) => format!("\"{s}\""),
            LabelString::Html(s) => format!("<{s}>"),
        }
    }
}

/// Record text is emitted verbatim inside quotes: every `"` must already be
/// escaped and a trailing backslash must not swallow the closing quote.
fn check_record(fields: &str) -> Result<(), ValueError> {
    let mut chars = fields.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return Err(ValueError::invalid("record label ends with a lone backslash"));
                }
            }
            '"' => return Err(ValueError::invalid("record label contains an unescaped '\"'")),
            _ => {}
        }
    }
    Ok(())
}

fn check_html(markup: &str) -> Result<(), ValueError> {
    let mut depth: usize = 0;
    for c in markup.chars() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    ValueError::invalid("HTML label closes an unopened '<'")
                })?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(ValueError::invalid("HTML label has unbalanced '<'"))
    }
}

impl From<&str> for LabelString {
    fn from(s: &str) -> Self {
        LabelString::plain(s)
    }
}

impl From<String> for LabelString {
    fn from(s: String) -> Self {
        LabelString::Plain(s)
    }
}
