//! # Value-Kind Library
//!
//! Immutable attribute values and the kinds the registry binds them to.
//! Each kind carries its own validation and text rule; values are checked
//! once when stored, after which encoding cannot fail.
//!
//! Design rule: no registry lookups and no owner knowledge here.
//! This module is pure data plus formatting.

pub mod color;
pub mod geometry;
pub mod label;
pub mod layer;
pub mod style;
pub mod tokens;
pub mod value;

pub use color::{Color, ColorList, WeightedColor};
pub use geometry::{Point, PointList, PortPos, Rect, Spline, SplineList, Viewport, ViewportCenter};
pub use label::LabelString;
pub use layer::{LayerId, LayerList, LayerRange, DEFAULT_LAYER_SEPARATOR};
pub use style::StyleList;
pub use tokens::{
    ArrowType, ClusterMode, CompassPoint, DirType, OutputMode, PackMode, PageDir, RankDir,
    RankType, Shape, StartType, Style, TokenKind, UnknownToken,
};
pub use value::{Value, ValueError, ValueKind};
