//! Closed token catalogues: shapes, arrow types, directions, modes.
//!
//! Every catalogue is a plain Rust enum whose variants map one-to-one onto
//! the literal tokens Graphviz accepts. Attribute values carry the token as
//! text (`Value::Token`) and the registry decides which catalogue applies,
//! so `validate` can reject a token at set-time instead of emitting output
//! that the layout engine silently ignores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A token that is not part of the catalogue it was checked against.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{token}' is not a valid {catalogue}")]
pub struct UnknownToken {
    pub catalogue: &'static str,
    pub token: String,
}

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($label:literal) {
            $( $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $token)] $variant, )+
        }

        impl $name {
            /// Every token of the catalogue, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok($name::$variant), )+
                    _ => Err(UnknownToken { catalogue: $label, token: s.to_owned() }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Node shapes.
    pub enum Shape ("shape") {
        Box => "box",
        Polygon => "polygon",
        Ellipse => "ellipse",
        Oval => "oval",
        Circle => "circle",
        Point => "point",
        Egg => "egg",
        Triangle => "triangle",
        PlainText => "plaintext",
        Plain => "plain",
        Diamond => "diamond",
        Trapezium => "trapezium",
        Parallelogram => "parallelogram",
        House => "house",
        Pentagon => "pentagon",
        Septagon => "septagon",
        Octagon => "octagon",
        DoubleCircle => "doublecircle",
        DoubleOctagon => "doubleoctagon",
        TripleOctagon => "tripleoctagon",
        InvTriangle => "invtriangle",
        InvTrapezium => "invtrapezium",
        InvHouse => "invhouse",
        MDiamond => "Mdiamond",
        MSquare => "Msquare",
        MCircle => "Mcircle",
        Rect => "rect",
        Rectangle => "rectangle",
        Square => "square",
        Star => "star",
        None => "none",
        Underline => "underline",
        Cylinder => "cylinder",
        Note => "note",
        Tab => "tab",
        Folder => "folder",
        Box3d => "box3d",
        Component => "component",
        Record => "record",
        MRecord => "Mrecord",
    }
}

token_enum! {
    /// Arrowhead and arrowtail shapes.
    pub enum ArrowType ("arrow type") {
        Normal => "normal",
        Inv => "inv",
        Dot => "dot",
        InvDot => "invdot",
        ODot => "odot",
        InvODot => "invodot",
        None => "none",
        Tee => "tee",
        Empty => "empty",
        InvEmpty => "invempty",
        Diamond => "diamond",
        ODiamond => "odiamond",
        EDiamond => "ediamond",
        Crow => "crow",
        Box => "box",
        OBox => "obox",
        Open => "open",
        HalfOpen => "halfopen",
        Vee => "vee",
        Curve => "curve",
        ICurve => "icurve",
    }
}

token_enum! {
    /// Which ends of an edge get arrowheads.
    pub enum DirType ("edge direction") {
        Forward => "forward",
        Back => "back",
        Both => "both",
        None => "none",
    }
}

token_enum! {
    pub enum RankDir ("rank direction") {
        TopToBottom => "TB",
        LeftToRight => "LR",
        BottomToTop => "BT",
        RightToLeft => "RL",
    }
}

token_enum! {
    /// Rank constraint on the nodes of a subgraph.
    pub enum RankType ("rank type") {
        Same => "same",
        Min => "min",
        Source => "source",
        Max => "max",
        Sink => "sink",
    }
}

token_enum! {
    pub enum ClusterMode ("cluster mode") {
        Local => "local",
        Global => "global",
        None => "none",
    }
}

token_enum! {
    /// Order in which nodes and edges are emitted by the renderer.
    pub enum OutputMode ("output order") {
        BreadthFirst => "breadthfirst",
        NodesFirst => "nodesfirst",
        EdgesFirst => "edgesfirst",
    }
}

token_enum! {
    pub enum PackMode ("pack mode") {
        Node => "node",
        Cluster => "clust",
        Graph => "graph",
        Array => "array",
    }
}

token_enum! {
    /// Page traversal order for multi-page output.
    pub enum PageDir ("page direction") {
        BottomLeft => "BL",
        BottomRight => "BR",
        TopLeft => "TL",
        TopRight => "TR",
        RightBottom => "RB",
        RightTop => "RT",
        LeftBottom => "LB",
        LeftTop => "LT",
    }
}

token_enum! {
    /// Initial node placement for the force-directed layouts.
    pub enum StartType ("start type") {
        Regular => "regular",
        SelfPlacement => "self",
        Random => "random",
    }
}

token_enum! {
    /// A single style token; attributes hold a list of these.
    pub enum Style ("style") {
        Solid => "solid",
        Dashed => "dashed",
        Dotted => "dotted",
        Bold => "bold",
        Invis => "invis",
        Filled => "filled",
        Diagonals => "diagonals",
        Rounded => "rounded",
        Radial => "radial",
        Striped => "striped",
        Wedged => "wedged",
        Tapered => "tapered",
    }
}

token_enum! {
    /// Compass point of a port position.
    pub enum CompassPoint ("compass point") {
        North => "n",
        NorthEast => "ne",
        East => "e",
        SouthEast => "se",
        South => "s",
        SouthWest => "sw",
        West => "w",
        NorthWest => "nw",
        Center => "c",
        Any => "_",
    }
}

/// Selects which catalogue an enumerated attribute draws its tokens from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Shape,
    ArrowType,
    DirType,
    RankDir,
    RankType,
    ClusterMode,
    OutputMode,
    PackMode,
    PageDir,
    StartType,
}

impl TokenKind {
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Shape => "shape",
            TokenKind::ArrowType => "arrow type",
            TokenKind::DirType => "edge direction",
            TokenKind::RankDir => "rank direction",
            TokenKind::RankType => "rank type",
            TokenKind::ClusterMode => "cluster mode",
            TokenKind::OutputMode => "output order",
            TokenKind::PackMode => "pack mode",
            TokenKind::PageDir => "page direction",
            TokenKind::StartType => "start type",
        }
    }

    /// Check `token` against the catalogue and return its canonical spelling.
    pub fn parse(self, token: &str) -> Result<&'static str, UnknownToken> {
        Ok(match self {
            TokenKind::Shape => token.parse::<Shape>()?.as_str(),
            TokenKind::ArrowType => token.parse::<ArrowType>()?.as_str(),
            TokenKind::DirType => token.parse::<DirType>()?.as_str(),
            TokenKind::RankDir => token.parse::<RankDir>()?.as_str(),
            TokenKind::RankType => token.parse::<RankType>()?.as_str(),
            TokenKind::ClusterMode => token.parse::<ClusterMode>()?.as_str(),
            TokenKind::OutputMode => token.parse::<OutputMode>()?.as_str(),
            TokenKind::PackMode => token.parse::<PackMode>()?.as_str(),
            TokenKind::PageDir => token.parse::<PageDir>()?.as_str(),
            TokenKind::StartType => token.parse::<StartType>()?.as_str(),
        })
    }

    pub fn allows(self, token: &str) -> bool {
        self.parse(token).is_ok()
    }

    /// All tokens of the catalogue.
    pub fn tokens(self) -> Vec<&'static str> {
        fn strs<T: Copy>(all: &[T], f: fn(T) -> &'static str) -> Vec<&'static str> {
            all.iter().copied().map(f).collect()
        }
        match self {
            TokenKind::Shape => strs(Shape::ALL, Shape::as_str),
            TokenKind::ArrowType => strs(ArrowType::ALL, ArrowType::as_str),
            TokenKind::DirType => strs(DirType::ALL, DirType::as_str),
            TokenKind::RankDir => strs(RankDir::ALL, RankDir::as_str),
            TokenKind::RankType => strs(RankType::ALL, RankType::as_str),
            TokenKind::ClusterMode => strs(ClusterMode::ALL, ClusterMode::as_str),
            TokenKind::OutputMode => strs(OutputMode::ALL, OutputMode::as_str),
            TokenKind::PackMode => strs(PackMode::ALL, PackMode::as_str),
            TokenKind::PageDir => strs(PageDir::ALL, PageDir::as_str),
            TokenKind::StartType => strs(StartType::ALL, StartType::as_str),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_round_trips_through_str() {
        for shape in Shape::ALL {
            assert_eq!(shape.as_str().parse::<Shape>(), Ok(*shape));
        }
    }

    #[test]
    fn test_shape_catalogue_is_case_sensitive() {
        assert_eq!("Mdiamond".parse::<Shape>(), Ok(Shape::MDiamond));
        assert!("mdiamond".parse::<Shape>().is_err());
        assert!("BOX".parse::<Shape>().is_err());
    }

    #[test]
    fn test_hexagon_is_not_a_shape() {
        let err = "hexagon".parse::<Shape>().unwrap_err();
        assert_eq!(err.catalogue, "shape");
        assert_eq!(err.to_string(), "'hexagon' is not a valid shape");
    }

    #[test]
    fn test_token_kind_parse_returns_canonical_token() {
        assert_eq!(TokenKind::RankDir.parse("LR"), Ok("LR"));
        assert_eq!(TokenKind::PackMode.parse("clust"), Ok("clust"));
        assert!(TokenKind::RankDir.parse("lr").is_err());
    }

    #[test]
    fn test_catalogues_overlap_independently() {
        // "box" is both a shape and an arrow type; "dot" only an arrow type.
        assert!(TokenKind::Shape.allows("box"));
        assert!(TokenKind::ArrowType.allows("box"));
        assert!(TokenKind::ArrowType.allows("dot"));
        assert!(!TokenKind::Shape.allows("dot"));
    }

    #[test]
    fn test_tokens_lists_every_variant() {
        assert_eq!(TokenKind::DirType.tokens(), vec!["forward", "back", "both", "none"]);
        assert_eq!(TokenKind::Shape.tokens().len(), Shape::ALL.len());
    }
}
