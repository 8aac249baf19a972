//! # Attribute Registry
//!
//! For each owner kind, the legal attribute names, the value kind each is
//! bound to, and the synonyms that write through to another attribute.
//!
//! The registry is built once from the `const` tables in [`catalog`] and is
//! read-only afterwards, so it can be shared freely across threads.
//!
//! ```rust
//! use dot_attrs::schema::{registry, OwnerKind};
//!
//! let reg = registry();
//! assert_eq!(reg.resolve_synonym(OwnerKind::Edge, "headhref").unwrap(), "headURL");
//! assert!(reg.lookup(OwnerKind::Node, "rank").is_err());
//! ```

pub mod catalog;

use std::fmt;
use std::sync::LazyLock;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::ValueKind;
use crate::{Error, Result};

// ============================================================================
// Owner kinds
// ============================================================================

/// The element an attribute set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnerKind {
    Graph,
    Node,
    Edge,
    /// Subgraphs and clusters share one namespace.
    Subgraph,
}

impl OwnerKind {
    pub const ALL: [OwnerKind; 4] = [
        OwnerKind::Graph,
        OwnerKind::Node,
        OwnerKind::Edge,
        OwnerKind::Subgraph,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            OwnerKind::Graph => "graph",
            OwnerKind::Node => "node",
            OwnerKind::Edge => "edge",
            OwnerKind::Subgraph => "subgraph",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// The declaration table for this owner.
    pub const fn table(self) -> &'static [AttributeDef] {
        match self {
            OwnerKind::Graph => catalog::GRAPH_ATTRIBUTES,
            OwnerKind::Node => catalog::NODE_ATTRIBUTES,
            OwnerKind::Edge => catalog::EDGE_ATTRIBUTES,
            OwnerKind::Subgraph => catalog::SUBGRAPH_ATTRIBUTES,
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Attribute definitions
// ============================================================================

/// One registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDef {
    pub name: &'static str,
    pub kind: ValueKind,
    /// Set for synonyms: the canonical attribute this name writes through to.
    pub synonym_of: Option<&'static str>,
}

impl AttributeDef {
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self { name, kind, synonym_of: None }
    }

    pub const fn synonym(name: &'static str, target: &'static str, kind: ValueKind) -> Self {
        Self { name, kind, synonym_of: Some(target) }
    }

    pub const fn is_synonym(&self) -> bool {
        self.synonym_of.is_some()
    }
}

/// A name resolved to its canonical attribute and storage slot.
#[derive(Debug, Clone, Copy)]
pub struct Resolved {
    pub slot: usize,
    pub def: &'static AttributeDef,
}

// ============================================================================
// Registry
// ============================================================================

#[derive(Debug)]
struct OwnerTable {
    /// name → index into the declaration table, synonyms included.
    by_name: HashMap<&'static str, usize>,
    /// canonical name → slot.
    slots: HashMap<&'static str, usize>,
    canonical: Vec<&'static AttributeDef>,
}

impl OwnerTable {
    fn build(owner: OwnerKind) -> Self {
        let defs = owner.table();
        let mut by_name = HashMap::with_capacity(defs.len());
        let mut slots = HashMap::new();
        let mut canonical = Vec::new();
        for (i, def) in defs.iter().enumerate() {
            let previous = by_name.insert(def.name, i);
            debug_assert!(previous.is_none(), "duplicate {owner} attribute '{}'", def.name);
            if !def.is_synonym() {
                slots.insert(def.name, canonical.len());
                canonical.push(def);
            }
        }
        Self { by_name, slots, canonical }
    }

    fn def(&self, owner: OwnerKind, index: usize) -> &'static AttributeDef {
        &owner.table()[index]
    }
}

/// Process-wide attribute schema.
#[derive(Debug)]
pub struct Registry {
    tables: [OwnerTable; 4],
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

/// The shared registry, built on first use.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    fn build() -> Self {
        let tables = OwnerKind::ALL.map(OwnerTable::build);
        tracing::debug!(
            graph = tables[0].canonical.len(),
            node = tables[1].canonical.len(),
            edge = tables[2].canonical.len(),
            subgraph = tables[3].canonical.len(),
            "attribute registry built"
        );
        Self { tables }
    }

    fn table(&self, owner: OwnerKind) -> &OwnerTable {
        &self.tables[owner.index()]
    }

    /// The entry registered under `name` for `owner`, synonym or not.
    pub fn lookup(&self, owner: OwnerKind, name: &str) -> Result<&'static AttributeDef> {
        let table = self.table(owner);
        table
            .by_name
            .get(name)
            .map(|&i| table.def(owner, i))
            .ok_or_else(|| Error::UnknownAttribute { owner, name: name.to_owned() })
    }

    /// The canonical name `name` writes through to.
    pub fn resolve_synonym(&self, owner: OwnerKind, name: &str) -> Result<&'static str> {
        self.resolve(owner, name).map(|r| r.def.name)
    }

    /// Resolve synonyms and locate the storage slot.
    pub fn resolve(&self, owner: OwnerKind, name: &str) -> Result<Resolved> {
        let entry = self.lookup(owner, name)?;
        let canonical = match entry.synonym_of {
            Some(target) => self.lookup(owner, target)?,
            None => entry,
        };
        let slot = self
            .table(owner)
            .slots
            .get(canonical.name)
            .copied()
            .ok_or_else(|| Error::UnknownAttribute { owner, name: name.to_owned() })?;
        Ok(Resolved { slot, def: canonical })
    }

    /// Storage slot of a canonical attribute.
    pub fn slot(&self, owner: OwnerKind, canonical_name: &str) -> Option<usize> {
        self.table(owner).slots.get(canonical_name).copied()
    }

    /// Canonical attributes of `owner` in declaration order.
    pub fn canonical(&self, owner: OwnerKind) -> &[&'static AttributeDef] {
        &self.table(owner).canonical
    }

    pub fn slot_count(&self, owner: OwnerKind) -> usize {
        self.table(owner).canonical.len()
    }

    /// Every owner kind that accepts `name`.
    pub fn owners_of(&self, name: &str) -> Vec<OwnerKind> {
        OwnerKind::ALL
            .into_iter()
            .filter(|&owner| self.table(owner).by_name.contains_key(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TokenKind;

    #[test]
    fn test_names_unique_per_owner() {
        for owner in OwnerKind::ALL {
            let table = owner.table();
            let unique: std::collections::HashSet<_> = table.iter().map(|d| d.name).collect();
            assert_eq!(unique.len(), table.len(), "{owner} has duplicate names");
        }
    }

    #[test]
    fn test_synonyms_point_at_canonical_entries_of_same_kind() {
        for owner in OwnerKind::ALL {
            for def in owner.table().iter().filter(|d| d.is_synonym()) {
                let target = registry().lookup(owner, def.synonym_of.unwrap()).unwrap();
                assert!(!target.is_synonym(), "{} chains to another synonym", def.name);
                assert_eq!(target.kind, def.kind, "{} kind differs from its target", def.name);
            }
        }
    }

    #[test]
    fn test_tables_are_in_case_insensitive_order() {
        for owner in OwnerKind::ALL {
            let names: Vec<String> = owner.table().iter().map(|d| d.name.to_lowercase()).collect();
            let mut sorted = names.clone();
            sorted.sort();
            assert_eq!(names, sorted, "{owner} table out of order");
        }
    }

    #[test]
    fn test_lookup_and_unknown() {
        let reg = registry();
        let shape = reg.lookup(OwnerKind::Node, "shape").unwrap();
        assert_eq!(shape.kind, ValueKind::Token(TokenKind::Shape));
        assert!(matches!(
            reg.lookup(OwnerKind::Node, "rank"),
            Err(Error::UnknownAttribute { owner: OwnerKind::Node, .. })
        ));
        assert!(reg.lookup(OwnerKind::Node, "colour").is_err());
        assert!(reg.lookup(OwnerKind::Node, "Shape").is_err());
    }

    #[test]
    fn test_resolve_synonym() {
        let reg = registry();
        assert_eq!(reg.resolve_synonym(OwnerKind::Edge, "headhref").unwrap(), "headURL");
        assert_eq!(reg.resolve_synonym(OwnerKind::Edge, "headURL").unwrap(), "headURL");
        assert_eq!(reg.resolve_synonym(OwnerKind::Node, "href").unwrap(), "URL");
        assert_eq!(reg.resolve_synonym(OwnerKind::Graph, "resolution").unwrap(), "dpi");
        assert!(reg.resolve_synonym(OwnerKind::Node, "headhref").is_err());
    }

    #[test]
    fn test_synonyms_have_no_slot() {
        let reg = registry();
        assert!(reg.slot(OwnerKind::Edge, "href").is_none());
        assert!(reg.slot(OwnerKind::Edge, "URL").is_some());
        assert!(reg.canonical(OwnerKind::Edge).iter().all(|d| !d.is_synonym()));
    }

    #[test]
    fn test_slots_follow_declaration_order() {
        let reg = registry();
        let canonical = reg.canonical(OwnerKind::Node);
        for (i, def) in canonical.iter().enumerate() {
            assert_eq!(reg.slot(OwnerKind::Node, def.name), Some(i));
        }
        assert_eq!(reg.slot_count(OwnerKind::Node), canonical.len());
        let color = reg.slot(OwnerKind::Node, "color").unwrap();
        let url = reg.slot(OwnerKind::Node, "URL").unwrap();
        assert!(color < url);
    }

    #[test]
    fn test_owners_of() {
        let reg = registry();
        assert_eq!(reg.owners_of("rank"), vec![OwnerKind::Subgraph]);
        assert_eq!(reg.owners_of("shape"), vec![OwnerKind::Node]);
        assert_eq!(reg.owners_of("URL"), OwnerKind::ALL.to_vec());
        assert!(reg.owners_of("nonexistent").is_empty());
    }

    #[test]
    fn test_shared_names_keep_their_kind_across_owners() {
        let reg = registry();
        for name in ["color", "label", "style", "fontsize", "lp"] {
            let kinds: Vec<ValueKind> = reg
                .owners_of(name)
                .into_iter()
                .map(|owner| reg.lookup(owner, name).unwrap().kind)
                .collect();
            assert!(kinds.windows(2).all(|w| w[0] == w[1]), "{name} kinds differ");
        }
    }
}
