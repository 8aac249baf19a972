//! Drawing layers: the graph's layer list and per-element layer ranges.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ValueError;

/// Separator used when the graph does not set `layersep`.
pub const DEFAULT_LAYER_SEPARATOR: char = ':';

fn check_layer_name(name: &str) -> Result<(), ValueError> {
    if name.is_empty() {
        return Err(ValueError::invalid("layer name is empty"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, ':' | ',' | '"'))
    {
        return Err(ValueError::invalid(format!(
            "layer name '{name}' contains '{}'",
            c.escape_default()
        )));
    }
    Ok(())
}

/// Ordered layer names declared on the graph (`layers`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerList(pub SmallVec<[String; 4]>);

impl LayerList {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        LayerList(names.into_iter().map(Into::into).collect())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        if self.0.is_empty() {
            return Err(ValueError::invalid("layer list is empty; unset the attribute instead"));
        }
        self.names().try_for_each(check_layer_name)
    }

    /// Reject names that contain any character of the graph's `layersep`;
    /// every one of them splits layer names.
    pub fn check_separators(&self, separators: &str) -> Result<(), ValueError> {
        for name in self.names() {
            if let Some(c) = name.chars().find(|c| separators.contains(*c)) {
                return Err(ValueError::invalid(format!(
                    "layer name '{name}' contains the layer separator '{}'",
                    c.escape_default()
                )));
            }
        }
        Ok(())
    }

    pub fn to_text(&self, separator: char) -> String {
        let mut out = String::new();
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(name);
        }
        out
    }
}

/// One endpoint of a layer range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerId {
    All,
    Name(String),
    /// 1-based layer number.
    Index(u32),
}

impl LayerId {
    fn validate(&self) -> Result<(), ValueError> {
        match self {
            LayerId::All => Ok(()),
            LayerId::Name(name) if name == "all" => Err(ValueError::invalid(
                "use LayerId::All for the 'all' layer",
            )),
            LayerId::Name(name) => check_layer_name(name),
            LayerId::Index(0) => Err(ValueError::invalid("layer numbers start at 1")),
            LayerId::Index(_) => Ok(()),
        }
    }

    fn to_text(&self) -> String {
        match self {
            LayerId::All => "all".to_owned(),
            LayerId::Name(name) => name.clone(),
            LayerId::Index(i) => i.to_string(),
        }
    }
}

impl From<&str> for LayerId {
    fn from(name: &str) -> Self {
        if name == "all" { LayerId::All } else { LayerId::Name(name.to_owned()) }
    }
}

impl From<u32> for LayerId {
    fn from(index: u32) -> Self {
        LayerId::Index(index)
    }
}

/// Layers an element is drawn in: one layer or an inclusive span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerRange {
    Single(LayerId),
    Span(LayerId, LayerId),
}

impl LayerRange {
    pub const fn all() -> Self {
        LayerRange::Single(LayerId::All)
    }

    pub fn single(id: impl Into<LayerId>) -> Self {
        LayerRange::Single(id.into())
    }

    pub fn span(from: impl Into<LayerId>, to: impl Into<LayerId>) -> Self {
        LayerRange::Span(from.into(), to.into())
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        match self {
            LayerRange::Single(id) => id.validate(),
            LayerRange::Span(from, to) => {
                from.validate()?;
                to.validate()
            }
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            LayerRange::Single(id) => id.to_text(),
            LayerRange::Span(from, to) => {
                format!("{}{DEFAULT_LAYER_SEPARATOR}{}", from.to_text(), to.to_text())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_list_joins_with_separator() {
        let layers = LayerList::new(["back", "mid", "front"]);
        assert!(layers.validate().is_ok());
        assert_eq!(layers.to_text(':'), "back:mid:front");
        assert_eq!(layers.to_text('|'), "back|mid|front");
    }

    #[test]
    fn test_layer_list_rejects_bad_names() {
        assert!(LayerList::new(Vec::<String>::new()).validate().is_err());
        assert!(LayerList::new(["ok", ""]).validate().is_err());
        assert!(LayerList::new(["a b"]).validate().is_err());
        assert!(LayerList::new(["a:b"]).validate().is_err());
    }

    #[test]
    fn test_check_separators() {
        let layers = LayerList::new(["a|b", "c"]);
        assert!(layers.check_separators(":").is_ok());
        assert!(layers.check_separators("|").is_err());
    }

    #[test]
    fn test_every_separator_character_counts() {
        let layers = LayerList::new(["a+b"]);
        assert!(layers.check_separators("|+").is_err());
        assert!(layers.check_separators("+|").is_err());
        assert!(layers.check_separators("|;").is_ok());
    }

    #[test]
    fn test_layer_range_text() {
        assert_eq!(LayerRange::all().to_text(), "all");
        assert_eq!(LayerRange::single("front").to_text(), "front");
        assert_eq!(LayerRange::span(1u32, 3u32).to_text(), "1:3");
        assert_eq!(LayerRange::span("back", "all").to_text(), "back:all");
    }

    #[test]
    fn test_layer_range_validation() {
        assert!(LayerRange::single(0u32).validate().is_err());
        assert!(LayerRange::Single(LayerId::Name("all".into())).validate().is_err());
        assert!(LayerRange::span("a", "b c").validate().is_err());
        assert!(LayerRange::span(2u32, "top").validate().is_ok());
    }
}
