//! The fixed attribute catalogue, one table per owner kind.
//!
//! Declaration order is the canonical output order. Tables are kept in
//! case-insensitive name order; synonyms sit where their own name sorts
//! and never occupy a storage slot.

use super::AttributeDef;
use crate::model::{TokenKind, ValueKind};

use ValueKind::{
    Bool, Color, ColorList, Double, Int, Label, LayerList, LayerRange, Point, PointList, Port,
    Rect, Spline, Style, Text, Token, Viewport,
};

const fn attr(name: &'static str, kind: ValueKind) -> AttributeDef {
    AttributeDef::new(name, kind)
}

const fn alias(name: &'static str, target: &'static str, kind: ValueKind) -> AttributeDef {
    AttributeDef::synonym(name, target, kind)
}

pub const GRAPH_ATTRIBUTES: &[AttributeDef] = &[
    attr("bb", Rect),
    attr("bgcolor", Color),
    attr("center", Bool),
    attr("charset", Text),
    attr("clusterrank", Token(TokenKind::ClusterMode)),
    attr("colorscheme", Text),
    attr("comment", Text),
    attr("compound", Bool),
    attr("concentrate", Bool),
    attr("Damping", Double),
    attr("defaultdist", Double),
    attr("dim", Int),
    attr("diredgeconstraints", Text),
    attr("dpi", Double),
    attr("epsilon", Double),
    attr("esep", Double),
    attr("fontcolor", Color),
    attr("fontname", Text),
    attr("fontnames", Text),
    attr("fontpath", Text),
    attr("fontsize", Double),
    alias("href", "URL", Text),
    attr("imagepath", Text),
    attr("K", Double),
    attr("label", Label),
    attr("labeljust", Text),
    attr("labelloc", Text),
    attr("landscape", Bool),
    attr("layers", LayerList),
    attr("layersep", Text),
    attr("layout", Text),
    attr("levelsgap", Double),
    attr("lp", Point),
    attr("margin", Point),
    attr("maxiter", Int),
    attr("mclimit", Double),
    attr("mindist", Double),
    attr("mode", Text),
    attr("model", Text),
    attr("mosek", Bool),
    attr("nodesep", Double),
    attr("nojustify", Bool),
    attr("normalize", Bool),
    attr("nslimit", Double),
    attr("ordering", Text),
    attr("outputorder", Token(TokenKind::OutputMode)),
    attr("overlap", Text),
    attr("pack", Text),
    attr("packmode", Token(TokenKind::PackMode)),
    attr("pad", Point),
    attr("page", Point),
    attr("pagedir", Token(TokenKind::PageDir)),
    attr("quantum", Double),
    attr("rankdir", Token(TokenKind::RankDir)),
    attr("ranksep", Double),
    attr("ratio", Text),
    attr("remincross", Bool),
    alias("resolution", "dpi", Double),
    attr("root", Text),
    attr("rotate", Int),
    attr("searchsize", Int),
    attr("sep", Point),
    attr("showboxes", Int),
    attr("size", Point),
    attr("splines", Text),
    attr("start", Token(TokenKind::StartType)),
    attr("stylesheet", Text),
    attr("target", Text),
    attr("truecolor", Bool),
    attr("URL", Text),
    attr("viewport", Viewport),
    attr("voro_margin", Double),
];

pub const NODE_ATTRIBUTES: &[AttributeDef] = &[
    attr("color", ColorList),
    attr("colorscheme", Text),
    attr("comment", Text),
    attr("distortion", Double),
    attr("fillcolor", Color),
    attr("fixedsize", Bool),
    attr("fontcolor", Color),
    attr("fontname", Text),
    attr("fontsize", Double),
    attr("group", Text),
    attr("height", Double),
    alias("href", "URL", Text),
    attr("image", Text),
    attr("imagescale", Text),
    attr("label", Label),
    attr("layer", LayerRange),
    attr("margin", Point),
    attr("nojustify", Bool),
    attr("peripheries", Int),
    attr("pin", Bool),
    attr("pos", Spline),
    attr("rects", Rect),
    attr("regular", Bool),
    attr("root", Text),
    attr("samplepoints", Int),
    attr("shape", Token(TokenKind::Shape)),
    attr("shapefile", Text),
    attr("showboxes", Int),
    attr("sides", Int),
    attr("skew", Double),
    attr("style", Style),
    attr("target", Text),
    attr("tooltip", Text),
    attr("URL", Text),
    attr("vertices", PointList),
    attr("width", Double),
    attr("z", Double),
];

pub const EDGE_ATTRIBUTES: &[AttributeDef] = &[
    attr("arrowhead", Token(TokenKind::ArrowType)),
    attr("arrowsize", Double),
    attr("arrowtail", Token(TokenKind::ArrowType)),
    attr("color", ColorList),
    attr("colorscheme", Text),
    attr("comment", Text),
    attr("constraint", Bool),
    attr("decorate", Bool),
    attr("dir", Token(TokenKind::DirType)),
    alias("edgehref", "edgeURL", Text),
    attr("edgetarget", Text),
    attr("edgetooltip", Text),
    attr("edgeURL", Text),
    attr("fontcolor", Color),
    attr("fontname", Text),
    attr("fontsize", Double),
    attr("headclip", Bool),
    alias("headhref", "headURL", Text),
    attr("headlabel", Label),
    attr("headport", Port),
    attr("headtarget", Text),
    attr("headtooltip", Text),
    attr("headURL", Text),
    alias("href", "URL", Text),
    attr("label", Label),
    attr("labelangle", Double),
    attr("labeldistance", Double),
    attr("labelfloat", Bool),
    attr("labelfontcolor", Color),
    attr("labelfontname", Text),
    attr("labelfontsize", Double),
    alias("labelhref", "labelURL", Text),
    attr("labeltarget", Text),
    attr("labeltooltip", Text),
    attr("labelURL", Text),
    attr("layer", LayerRange),
    attr("len", Double),
    attr("lhead", Text),
    attr("lp", Point),
    attr("ltail", Text),
    attr("minlen", Int),
    attr("nojustify", Bool),
    attr("pos", Spline),
    attr("samehead", Text),
    attr("sametail", Text),
    attr("showboxes", Int),
    attr("style", Style),
    attr("tailclip", Bool),
    alias("tailhref", "tailURL", Text),
    attr("taillabel", Label),
    attr("tailport", Port),
    attr("tailtarget", Text),
    attr("tailtooltip", Text),
    attr("tailURL", Text),
    attr("target", Text),
    attr("tooltip", Text),
    attr("URL", Text),
    attr("weight", Double),
];

pub const SUBGRAPH_ATTRIBUTES: &[AttributeDef] = &[
    attr("bgcolor", Color),
    attr("color", ColorList),
    attr("colorscheme", Text),
    attr("fillcolor", Color),
    attr("fixedsize", Bool),
    attr("fontcolor", Color),
    attr("fontname", Text),
    attr("fontsize", Double),
    alias("href", "URL", Text),
    attr("K", Double),
    attr("label", Label),
    attr("labeljust", Text),
    attr("labelloc", Text),
    attr("lp", Point),
    attr("nojustify", Bool),
    attr("pencolor", Color),
    attr("rank", Token(TokenKind::RankType)),
    attr("style", Style),
    attr("target", Text),
    attr("tooltip", Text),
    attr("URL", Text),
];
