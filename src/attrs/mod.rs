//! # Attribute Set
//!
//! The attributes attached to one graph element, keyed by the registry of
//! its owner kind. Every stored value has passed validation for its
//! attribute's kind, so reading or encoding a set never fails on content.
//!
//! ```rust
//! use dot_attrs::attrs::AttributeSet;
//! use dot_attrs::model::{Color, Shape};
//!
//! let mut node = AttributeSet::node();
//! node.set("shape", Shape::Box)?.set("color", Color::named("red"))?;
//! assert_eq!(node.len(), 2);
//! assert!(node.set("rank", "same").is_err());
//! # Ok::<(), dot_attrs::Error>(())
//! ```

use crate::model::{Value, ValueError};
use crate::schema::{registry, OwnerKind, Resolved};
use crate::Result;

/// Owner-scoped mapping from canonical attribute to optional value.
///
/// One slot per canonical attribute; synonyms write through to their
/// target's slot. Unset and set-to-falsy are different states.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSet {
    owner: OwnerKind,
    slots: Vec<Option<Value>>,
}

impl AttributeSet {
    pub fn new(owner: OwnerKind) -> Self {
        Self {
            owner,
            slots: vec![None; registry().slot_count(owner)],
        }
    }

    pub fn graph() -> Self {
        Self::new(OwnerKind::Graph)
    }

    pub fn node() -> Self {
        Self::new(OwnerKind::Node)
    }

    pub fn edge() -> Self {
        Self::new(OwnerKind::Edge)
    }

    pub fn subgraph() -> Self {
        Self::new(OwnerKind::Subgraph)
    }

    pub fn owner(&self) -> OwnerKind {
        self.owner
    }

    fn resolve(&self, name: &str) -> Result<Resolved> {
        registry().resolve(self.owner, name)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Validate `value` for `name` and store it, replacing any previous value.
    ///
    /// Synonyms are resolved first, so `href` and `URL` share one slot. On
    /// error nothing changes.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<&mut Self> {
        match self.try_set(name, value.into()) {
            Ok(slot) => {
                tracing::debug!(owner = %self.owner, attribute = name, slot, "attribute set");
                Ok(self)
            }
            Err(e) => {
                tracing::debug!(owner = %self.owner, attribute = name, error = %e, "attribute rejected");
                Err(e)
            }
        }
    }

    fn try_set(&mut self, name: &str, value: Value) -> Result<usize> {
        let Resolved { slot, def } = self.resolve(name)?;
        let value = value.validate(def.kind).map_err(|e| e.for_attribute(name))?;
        if self.owner == OwnerKind::Graph {
            self.check_layers(def.name, &value).map_err(|e| e.for_attribute(name))?;
        }
        self.slots[slot] = Some(value);
        Ok(slot)
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Clear `name`, returning the value it held.
    ///
    /// Unsetting an attribute that was never set is a no-op.
    pub fn unset(&mut self, name: &str) -> Result<Option<Value>> {
        let Resolved { slot, .. } = self.resolve(name)?;
        let previous = self.slots[slot].take();
        if previous.is_some() {
            tracing::debug!(owner = %self.owner, attribute = name, slot, "attribute unset");
        }
        Ok(previous)
    }

    // ========================================================================
    // Cross-attribute rules (graph only)
    // ========================================================================

    /// `layers` names must not contain any `layersep` character, whichever
    /// of the two attributes is written last.
    fn check_layers(&self, canonical: &str, value: &Value) -> std::result::Result<(), ValueError> {
        match (canonical, value) {
            ("layersep", Value::Text(sep)) => {
                if sep.is_empty() {
                    return Err(ValueError::invalid("layer separator is empty"));
                }
                match self.get("layers") {
                    Some(Value::LayerList(layers)) => layers.check_separators(sep),
                    _ => Ok(()),
                }
            }
            // Without a `layersep`, the default `:` is already banned from names.
            ("layers", Value::LayerList(layers)) => match self.get("layersep").and_then(Value::as_str) {
                Some(sep) => layers.check_separators(sep),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    /// First character of a stored `layersep`, if any.
    pub fn layer_separator(&self) -> Option<char> {
        self.get("layersep")
            .and_then(Value::as_str)
            .and_then(|s| s.chars().next())
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// The stored value for `name` or its synonym. Unknown names read as unset.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let Resolved { slot, .. } = self.resolve(name).ok()?;
        self.slots[slot].as_ref()
    }

    /// Like [`get`](Self::get), but unknown names are an error.
    pub fn try_get(&self, name: &str) -> Result<Option<&Value>> {
        let Resolved { slot, .. } = self.resolve(name)?;
        Ok(self.slots[slot].as_ref())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Set attributes as `(canonical name, value)` in registry order.
    pub fn snapshot(&self) -> Vec<(&'static str, &Value)> {
        registry()
            .canonical(self.owner)
            .iter()
            .zip(&self.slots)
            .filter_map(|(def, slot)| slot.as_ref().map(|v| (def.name, v)))
            .collect()
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}

impl From<OwnerKind> for AttributeSet {
    fn from(owner: OwnerKind) -> Self {
        Self::new(owner)
    }
}
