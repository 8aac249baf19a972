//! # Encoder
//!
//! Turns a populated [`AttributeSet`] into ordered `name=value` text pairs.
//!
//! ```text
//! AttributeSet ─ snapshot() ─▶ (name, Value)* ─ Value::encode ─▶ "name=text"*
//! ```
//!
//! Output order is the registry's declaration order for the set's owner.
//! Joining the pairs into a statement (`[a=1, b=2]`, `a=1;`) is left to the
//! document assembler.

pub mod text;

use serde::{Deserialize, Serialize};

use crate::attrs::AttributeSet;
use crate::model::{Value, DEFAULT_LAYER_SEPARATOR};
use crate::schema::{registry, OwnerKind};
use crate::{Error, Result};

// ============================================================================
// Configuration
// ============================================================================

/// When to wrap values in double quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotePolicy {
    /// Quote only what is not a bare identifier or numeral.
    #[default]
    AsNeeded,
    /// Quote every textual value. Numbers, booleans and HTML labels stay bare.
    Always,
}

/// Encoder settings.
///
/// ```rust
/// use dot_attrs::encode::{EncoderConfig, QuotePolicy};
///
/// let config = EncoderConfig::from_json(r#"{"quote": "always"}"#).unwrap();
/// assert_eq!(config.quote, QuotePolicy::Always);
/// assert_eq!(config.max_fraction_digits, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub quote: QuotePolicy,
    /// Round reals to at most this many fractional digits. `None` keeps
    /// the shortest round-trip form.
    pub max_fraction_digits: Option<usize>,
}

impl EncoderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.max_fraction_digits {
            Some(digits) if digits > text::MAX_FRACTION_DIGITS => Err(Error::Config(format!(
                "max_fraction_digits must be at most {}, got {digits}",
                text::MAX_FRACTION_DIGITS
            ))),
            _ => Ok(()),
        }
    }
}

/// Per-call formatting state handed to the value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeContext {
    pub quote: QuotePolicy,
    pub max_fraction_digits: Option<usize>,
    /// Joins the graph's `layers`; taken from `layersep` when set.
    pub layer_separator: char,
}

impl Default for EncodeContext {
    fn default() -> Self {
        Self::from_config(&EncoderConfig::default())
    }
}

impl EncodeContext {
    pub fn from_config(config: &EncoderConfig) -> Self {
        Self {
            quote: config.quote,
            max_fraction_digits: config.max_fraction_digits,
            layer_separator: DEFAULT_LAYER_SEPARATOR,
        }
    }

    pub fn real(&self, value: f64) -> String {
        text::format_real_with(value, self.max_fraction_digits)
    }

    pub fn quote_text(&self, s: &str) -> String {
        match self.quote {
            QuotePolicy::AsNeeded => text::quote_if_needed(s),
            QuotePolicy::Always => text::quote(s),
        }
    }

    pub fn quote_color(&self, s: &str) -> String {
        match self.quote {
            QuotePolicy::AsNeeded if text::is_bare_color(s) => s.to_owned(),
            _ => text::quote(s),
        }
    }
}

// ============================================================================
// Encoder
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    fn context_for(&self, set: &AttributeSet) -> EncodeContext {
        let mut ctx = EncodeContext::from_config(&self.config);
        if set.owner() == OwnerKind::Graph {
            if let Some(sep) = set.layer_separator() {
                ctx.layer_separator = sep;
            }
        }
        ctx
    }

    /// Encode every set attribute as `(canonical name, value text)`.
    ///
    /// Fails as a whole if any stored value disagrees with its declared
    /// kind; that can only happen through a programming error.
    pub fn encode_pairs(&self, set: &AttributeSet) -> Result<Vec<(&'static str, String)>> {
        let ctx = self.context_for(set);
        let reg = registry();
        let snapshot = set.snapshot();
        let mut pairs = Vec::with_capacity(snapshot.len());
        for (name, value) in snapshot {
            let def = reg.lookup(set.owner(), name)?;
            if !def.kind.accepts(value) {
                tracing::warn!(owner = %set.owner(), attribute = name, "stored value disagrees with registry");
                return Err(Error::Encode {
                    name: name.to_owned(),
                    reason: format!("stored {} where {} is declared", value.type_name(), def.kind),
                });
            }
            let text = value.encode(&ctx);
            tracing::trace!(owner = %set.owner(), attribute = name, %text, "encoded");
            pairs.push((name, text));
        }
        Ok(pairs)
    }

    /// Encode every set attribute as `name=text`, in canonical order.
    pub fn encode(&self, set: &AttributeSet) -> Result<Vec<String>> {
        Ok(self
            .encode_pairs(set)?
            .into_iter()
            .map(|(name, text)| format!("{name}={text}"))
            .collect())
    }

    /// Encode a single value the way it would appear after `=`.
    pub fn encode_value(&self, value: &Value) -> String {
        value.encode(&EncodeContext::from_config(&self.config))
    }
}

/// Encode with the default configuration.
pub fn encode(set: &AttributeSet) -> Result<Vec<String>> {
    Encoder::default().encode(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, LayerList, Point};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_empty_set() {
        assert!(encode(&AttributeSet::node()).unwrap().is_empty());
    }

    #[test]
    fn test_encode_uses_canonical_order() {
        let mut set = AttributeSet::node();
        set.set("URL", "http://x").unwrap();
        set.set("color", Color::named("red")).unwrap();
        assert_eq!(encode(&set).unwrap(), vec!["color=red", "URL=\"http://x\""]);
    }

    #[test]
    fn test_always_quote_policy() {
        let encoder = Encoder::new(EncoderConfig { quote: QuotePolicy::Always, ..Default::default() });
        let mut set = AttributeSet::node();
        set.set("fontname", "Helvetica").unwrap();
        set.set("fontsize", 12.0).unwrap();
        set.set("fixedsize", true).unwrap();
        assert_eq!(
            encoder.encode(&set).unwrap(),
            vec!["fixedsize=true", "fontname=\"Helvetica\"", "fontsize=12"]
        );
    }

    #[test]
    fn test_fraction_digit_limit() {
        let encoder = Encoder::new(EncoderConfig { max_fraction_digits: Some(2), ..Default::default() });
        let mut set = AttributeSet::graph();
        set.set("size", Point::new(8.333333, 11.0)).unwrap();
        assert_eq!(encoder.encode(&set).unwrap(), vec!["size=\"8.33,11\""]);
    }

    #[test]
    fn test_graph_layersep_drives_layer_list() {
        let mut set = AttributeSet::graph();
        set.set("layers", LayerList::new(["a", "b", "c"])).unwrap();
        assert_eq!(encode(&set).unwrap(), vec!["layers=\"a:b:c\""]);
        set.set("layersep", "|").unwrap();
        assert_eq!(encode(&set).unwrap(), vec!["layers=\"a|b|c\"", "layersep=\"|\""]);
    }

    #[test]
    fn test_encode_pairs_names_are_canonical() {
        let mut set = AttributeSet::edge();
        set.set("href", "a.html").unwrap();
        let pairs = Encoder::default().encode_pairs(&set).unwrap();
        assert_eq!(pairs, vec![("URL", "\"a.html\"".to_owned())]);
    }

    #[test]
    fn test_config_from_json() {
        let config = EncoderConfig::from_json(r#"{"max_fraction_digits": 3}"#).unwrap();
        assert_eq!(config.quote, QuotePolicy::AsNeeded);
        assert_eq!(config.max_fraction_digits, Some(3));
        assert!(matches!(EncoderConfig::from_json("{\"quote\": 1}"), Err(Error::Config(_))));
        assert_eq!(EncoderConfig::from_json("{}").unwrap(), EncoderConfig::default());
    }

    #[test]
    fn test_config_rejects_excessive_precision() {
        let err = EncoderConfig::from_json(r#"{"max_fraction_digits": 100000}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(EncoderConfig::from_json(r#"{"max_fraction_digits": 17}"#).is_ok());
    }

    #[test]
    fn test_excessive_precision_built_directly_is_capped() {
        let encoder = Encoder::new(EncoderConfig { max_fraction_digits: Some(100_000), ..Default::default() });
        let mut set = AttributeSet::graph();
        set.set("size", Point::new(8.5, 11.0)).unwrap();
        assert_eq!(encoder.encode(&set).unwrap(), vec!["size=\"8.5,11\""]);
    }
}
