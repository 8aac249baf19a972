//! Style lists (`style="filled,rounded"`).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tokens::Style;
use super::ValueError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleList(pub SmallVec<[Style; 2]>);

impl StyleList {
    pub fn new(styles: impl IntoIterator<Item = Style>) -> Self {
        StyleList(styles.into_iter().collect())
    }

    pub fn contains(&self, style: Style) -> bool {
        self.0.contains(&style)
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        if self.0.is_empty() {
            Err(ValueError::invalid("style list is empty; unset the attribute instead"))
        } else {
            Ok(())
        }
    }

    pub fn to_text(&self) -> String {
        self.0.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(",")
    }
}

impl From<Style> for StyleList {
    fn from(style: Style) -> Self {
        StyleList::new([style])
    }
}

impl From<Vec<Style>> for StyleList {
    fn from(styles: Vec<Style>) -> Self {
        StyleList::new(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_list_text() {
        let styles = StyleList::new([Style::Filled, Style::Rounded]);
        assert_eq!(styles.to_text(), "filled,rounded");
        assert!(styles.contains(Style::Rounded));
        assert!(!styles.contains(Style::Dashed));
    }

    #[test]
    fn test_empty_style_list_is_invalid() {
        assert!(StyleList::new([] as [Style; 0]).validate().is_err());
    }
}
