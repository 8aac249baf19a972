//! Attribute values and the value kinds the registry binds them to.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorList};
use super::geometry::{Point, PointList, PortPos, Rect, Spline, SplineList, Viewport};
use super::label::LabelString;
use super::layer::{LayerList, LayerRange};
use super::tokens::{
    ArrowType, ClusterMode, DirType, OutputMode, PackMode, PageDir, RankDir, RankType, Shape,
    StartType, Style, TokenKind,
};
use super::style::StyleList;
use crate::encode::EncodeContext;
use crate::Error;

/// The semantic type an attribute's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Text,
    Bool,
    Int,
    Double,
    Token(TokenKind),
    Color,
    ColorList,
    Point,
    PointList,
    Rect,
    LayerRange,
    Label,
    LayerList,
    Viewport,
    Style,
    Spline,
    Port,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Text => "TEXT",
            ValueKind::Bool => "BOOL",
            ValueKind::Int => "INT",
            ValueKind::Double => "DOUBLE",
            ValueKind::Token(_) => "TOKEN",
            ValueKind::Color => "COLOR",
            ValueKind::ColorList => "COLOR_LIST",
            ValueKind::Point => "POINT",
            ValueKind::PointList => "POINT_LIST",
            ValueKind::Rect => "RECT",
            ValueKind::LayerRange => "LAYER_RANGE",
            ValueKind::Label => "LABEL",
            ValueKind::LayerList => "LAYER_LIST",
            ValueKind::Viewport => "VIEWPORT",
            ValueKind::Style => "STYLE",
            ValueKind::Spline => "SPLINE",
            ValueKind::Port => "PORT",
        }
    }

    /// Whether `value` is an admissible stored form for this kind.
    ///
    /// Stored values are always normalized, so this is stricter than
    /// what [`Value::validate`] accepts as input.
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ValueKind::Text, Value::Text(_))
                | (ValueKind::Bool, Value::Bool(_))
                | (ValueKind::Int, Value::Int(_))
                | (ValueKind::Double, Value::Double(_))
                | (ValueKind::Token(_), Value::Token(_))
                | (ValueKind::Color, Value::Color(_))
                | (ValueKind::ColorList, Value::ColorList(_))
                | (ValueKind::Point, Value::Point(_))
                | (ValueKind::PointList, Value::PointList(_))
                | (ValueKind::Rect, Value::Rect(_))
                | (ValueKind::LayerRange, Value::LayerRange(_))
                | (ValueKind::Label, Value::Label(_))
                | (ValueKind::LayerList, Value::LayerList(_))
                | (ValueKind::Viewport, Value::Viewport(_))
                | (ValueKind::Style, Value::Style(_))
                | (ValueKind::Spline, Value::Spline(_) | Value::Point(_))
                | (ValueKind::Port, Value::Port(_))
        ) && match (self, value) {
            (ValueKind::Token(kind), Value::Token(token)) => kind.allows(token),
            _ => true,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Token(kind) => write!(f, "TOKEN({kind})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Why a value was refused for a kind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("expected {expected}, got {got}")]
    Mismatch { expected: ValueKind, got: &'static str },

    #[error("{0}")]
    Invalid(String),
}

impl ValueError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ValueError::Invalid(reason.into())
    }

    /// Attach the attribute name, producing the crate-level error.
    pub fn for_attribute(self, name: &str) -> Error {
        match self {
            ValueError::Mismatch { expected, got } => Error::KindMismatch {
                name: name.to_owned(),
                expected,
                got,
            },
            ValueError::Invalid(reason) => Error::InvalidValue {
                name: name.to_owned(),
                reason,
            },
        }
    }
}

/// An attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Text(String),
    Bool(bool),
    Int(i64),
    Double(f64),
    /// Enumerated token, checked against the attribute's catalogue.
    Token(String),
    Color(Color),
    ColorList(ColorList),
    Point(Point),
    PointList(PointList),
    Rect(Rect),
    LayerRange(LayerRange),
    Label(LabelString),
    LayerList(LayerList),
    Viewport(Viewport),
    Style(StyleList),
    Spline(SplineList),
    Port(PortPos),
}

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.name(),
            None => "TOKEN",
        }
    }

    /// The kind this value naturally belongs to.
    ///
    /// `None` for tokens: a bare token carries no catalogue, the attribute
    /// it is assigned to decides which one it is checked against.
    pub fn kind(&self) -> Option<ValueKind> {
        Some(match self {
            Value::Text(_) => ValueKind::Text,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::Token(_) => return None,
            Value::Color(_) => ValueKind::Color,
            Value::ColorList(_) => ValueKind::ColorList,
            Value::Point(_) => ValueKind::Point,
            Value::PointList(_) => ValueKind::PointList,
            Value::Rect(_) => ValueKind::Rect,
            Value::LayerRange(_) => ValueKind::LayerRange,
            Value::Label(_) => ValueKind::Label,
            Value::LayerList(_) => ValueKind::LayerList,
            Value::Viewport(_) => ValueKind::Viewport,
            Value::Style(_) => ValueKind::Style,
            Value::Spline(_) => ValueKind::Spline,
            Value::Port(_) => ValueKind::Port,
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Token(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

impl Value {
    /// Check this value against `kind` and return its normalized form.
    ///
    /// Coercions: `Int` → `Double` for real-valued attributes, a single
    /// `Color` → one-element list for color-list attributes, and tokens
    /// are respelled to their canonical catalogue form.
    pub fn validate(self, kind: ValueKind) -> Result<Value, ValueError> {
        let value = match (kind, self) {
            (ValueKind::Text, v @ Value::Text(_)) => v,
            (ValueKind::Bool, v @ Value::Bool(_)) => v,
            (ValueKind::Int, v @ Value::Int(_)) => v,
            (ValueKind::Double, Value::Int(i)) => Value::Double(i as f64),
            (ValueKind::Double, Value::Double(d)) => {
                if !d.is_finite() {
                    return Err(ValueError::invalid(format!("{d} is not a finite number")));
                }
                Value::Double(d)
            }
            (ValueKind::Token(catalogue), Value::Token(token)) => {
                let canonical = catalogue
                    .parse(&token)
                    .map_err(|e| ValueError::invalid(e.to_string()))?;
                Value::Token(canonical.to_owned())
            }
            (ValueKind::Color, Value::Color(c)) => {
                c.validate()?;
                Value::Color(c)
            }
            (ValueKind::ColorList, Value::Color(c)) => {
                c.validate()?;
                Value::ColorList(ColorList::single(c))
            }
            (ValueKind::ColorList, Value::ColorList(list)) => {
                list.validate()?;
                Value::ColorList(list)
            }
            (ValueKind::Point, Value::Point(p)) | (ValueKind::Spline, Value::Point(p)) => {
                p.validate()?;
                Value::Point(p)
            }
            (ValueKind::PointList, Value::PointList(list)) => {
                list.validate()?;
                Value::PointList(list)
            }
            (ValueKind::Rect, Value::Rect(r)) => {
                r.validate()?;
                Value::Rect(r)
            }
            (ValueKind::LayerRange, Value::LayerRange(r)) => {
                r.validate()?;
                Value::LayerRange(r)
            }
            (ValueKind::Label, Value::Label(l)) => {
                l.validate()?;
                Value::Label(l)
            }
            (ValueKind::LayerList, Value::LayerList(l)) => {
                l.validate()?;
                Value::LayerList(l)
            }
            (ValueKind::Viewport, Value::Viewport(v)) => {
                v.validate()?;
                Value::Viewport(v)
            }
            (ValueKind::Style, Value::Style(s)) => {
                s.validate()?;
                Value::Style(s)
            }
            (ValueKind::Spline, Value::Spline(s)) => {
                s.validate()?;
                Value::Spline(s)
            }
            (ValueKind::Port, Value::Port(p)) => {
                p.validate()?;
                Value::Port(p)
            }
            (expected, other) => {
                return Err(ValueError::Mismatch { expected, got: other.type_name() });
            }
        };
        Ok(value)
    }
}

// ============================================================================
// Encoding
// ============================================================================

impl Value {
    /// Render the right-hand side of `name=value`.
    ///
    /// Pure and total for any value that passed [`Value::validate`].
    pub fn encode(&self, ctx: &EncodeContext) -> String {
        match self {
            Value::Text(s) | Value::Token(s) => ctx.quote_text(s),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Double(d) => ctx.real(*d),
            Value::Color(c) => ctx.quote_color(&c.to_text(ctx)),
            Value::ColorList(list) => ctx.quote_color(&list.to_text(ctx)),
            Value::Point(p) => ctx.quote_text(&p.to_text(ctx)),
            Value::PointList(list) => ctx.quote_text(&list.to_text(ctx)),
            Value::Rect(r) => ctx.quote_text(&r.to_text(ctx)),
            Value::LayerRange(r) => ctx.quote_text(&r.to_text()),
            Value::Label(l) => l.encode(ctx),
            Value::LayerList(l) => ctx.quote_text(&l.to_text(ctx.layer_separator)),
            Value::Viewport(v) => ctx.quote_text(&v.to_text(ctx)),
            Value::Style(s) => ctx.quote_text(&s.to_text()),
            Value::Spline(s) => ctx.quote_text(&s.to_text(ctx)),
            Value::Port(p) => ctx.quote_text(&p.to_text()),
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Int(v as i64) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Double(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::Text(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::Text(v.to_owned()) } }
impl From<Color> for Value { fn from(v: Color) -> Self { Value::Color(v) } }
impl From<ColorList> for Value { fn from(v: ColorList) -> Self { Value::ColorList(v) } }
impl From<Point> for Value { fn from(v: Point) -> Self { Value::Point(v) } }
impl From<PointList> for Value { fn from(v: PointList) -> Self { Value::PointList(v) } }
impl From<Rect> for Value { fn from(v: Rect) -> Self { Value::Rect(v) } }
impl From<LayerRange> for Value { fn from(v: LayerRange) -> Self { Value::LayerRange(v) } }
impl From<LabelString> for Value { fn from(v: LabelString) -> Self { Value::Label(v) } }
impl From<LayerList> for Value { fn from(v: LayerList) -> Self { Value::LayerList(v) } }
impl From<Viewport> for Value { fn from(v: Viewport) -> Self { Value::Viewport(v) } }
impl From<StyleList> for Value { fn from(v: StyleList) -> Self { Value::Style(v) } }
impl From<Style> for Value { fn from(v: Style) -> Self { Value::Style(StyleList::from(v)) } }
impl From<SplineList> for Value { fn from(v: SplineList) -> Self { Value::Spline(v) } }
impl From<Spline> for Value { fn from(v: Spline) -> Self { Value::Spline(SplineList::from(v)) } }
impl From<PortPos> for Value { fn from(v: PortPos) -> Self { Value::Port(v) } }

macro_rules! token_into_value {
    ($($t:ty),+) => {
        $( impl From<$t> for Value { fn from(v: $t) -> Self { Value::Token(v.as_str().to_owned()) } } )+
    };
}

token_into_value!(
    Shape, ArrowType, DirType, RankDir, RankType, ClusterMode, OutputMode, PackMode, PageDir,
    StartType
);

impl Value {
    /// An enumerated token, checked when the value is set.
    pub fn token(token: impl Into<String>) -> Self {
        Value::Token(token.into())
    }

    pub fn label(text: impl Into<String>) -> Self {
        Value::Label(LabelString::plain(text))
    }

    pub fn color(name: impl Into<String>) -> Self {
        Value::Color(Color::named(name))
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(&EncodeContext::default()))
    }
}
