//! # dot-attrs — Typed Graphviz Attribute Schema
//!
//! The DOT attribute catalogue as Rust types, plus a deterministic encoder
//! that renders attribute values as canonical `name=value` text.
//!
//! ## Design Principles
//!
//! 1. **Registry-first**: every attribute name is checked against the owner's catalogue
//! 2. **Validate once**: values are checked when set; encoding never fails on content
//! 3. **Canonical order**: output follows the catalogue's declaration order, not insertion order
//! 4. **No topology**: node/edge construction and statement assembly live elsewhere
//!
//! ## Quick Start
//!
//! ```rust
//! use dot_attrs::{encode, AttributeSet, Color, ColorList, Point};
//!
//! # fn example() -> dot_attrs::Result<()> {
//! let mut node = AttributeSet::node();
//! node.set("URL", "http://x")?;
//! node.set("color", Color::named("red"))?;
//! assert_eq!(encode(&node)?, vec!["color=red", "URL=\"http://x\""]);
//!
//! let mut edge = AttributeSet::edge();
//! edge.set("color", ColorList::new([Color::named("red"), Color::named("blue")]))?;
//! assert_eq!(encode(&edge)?, vec!["color=red:blue"]);
//!
//! let graph = AttributeSet::graph().with("size", Point::new(8.5, 11.0))?;
//! assert_eq!(encode(&graph)?, vec!["size=\"8.5,11\""]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Owner Kinds
//!
//! | Owner | Scope |
//! |-------|-------|
//! | `Graph` | Root graph statement (`graph [...]`) |
//! | `Node` | Node statements and `node [...]` defaults |
//! | `Edge` | Edge statements and `edge [...]` defaults |
//! | `Subgraph` | Subgraphs and clusters |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod schema;
pub mod attrs;
pub mod encode;

// ============================================================================
// Re-exports: Model (the value kinds)
// ============================================================================

pub use model::{
    Color, ColorList, LabelString, LayerList, LayerRange, Point, PointList, PortPos, Rect,
    Spline, StyleList, Value, ValueKind, Viewport,
};

// ============================================================================
// Re-exports: Schema, sets and encoding
// ============================================================================

pub use schema::{registry, AttributeDef, OwnerKind, Registry};
pub use attrs::AttributeSet;
pub use encode::{encode, Encoder, EncoderConfig, QuotePolicy};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown attribute '{name}' for {owner}")]
    UnknownAttribute { owner: OwnerKind, name: String },

    #[error("Kind mismatch for '{name}': expected {expected}, got {got}")]
    KindMismatch { name: String, expected: ValueKind, got: &'static str },

    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("Encode error for '{name}': {reason}")]
    Encode { name: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// The attribute name the error is about, if any.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Error::UnknownAttribute { name, .. }
            | Error::KindMismatch { name, .. }
            | Error::InvalidValue { name, .. }
            | Error::Encode { name, .. } => Some(name),
            Error::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
