//! Points, point lists, rectangles, splines, ports and viewports.

use serde::{Deserialize, Serialize};

use super::tokens::CompassPoint;
use super::ValueError;
use crate::encode::EncodeContext;

fn finite(what: &str, values: &[f64]) -> Result<(), ValueError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(ValueError::invalid(format!("{what} coordinate {v} is not finite"))),
        None => Ok(()),
    }
}

/// A 2D (optionally 3D) point. `pinned` appends `!`, fixing the position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub pinned: bool,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None, pinned: false }
    }

    pub const fn new3(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z), pinned: false }
    }

    pub const fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        finite("point", &[self.x, self.y, self.z.unwrap_or(0.0)])
    }

    pub fn to_text(&self, ctx: &EncodeContext) -> String {
        let mut text = format!("{},{}", ctx.real(self.x), ctx.real(self.y));
        if let Some(z) = self.z {
            text.push(',');
            text.push_str(&ctx.real(z));
        }
        if self.pinned {
            text.push('!');
        }
        text
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Polygon or geometry vertices; order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointList(pub Vec<Point>);

impl PointList {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        PointList(points.into_iter().collect())
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        if self.0.is_empty() {
            return Err(ValueError::invalid("point list is empty; unset the attribute instead"));
        }
        self.0.iter().try_for_each(Point::validate)
    }

    pub fn to_text(&self, ctx: &EncodeContext) -> String {
        self.0.iter().map(|p| p.to_text(ctx)).collect::<Vec<_>>().join(" ")
    }
}

impl From<Vec<(f64, f64)>> for PointList {
    fn from(points: Vec<(f64, f64)>) -> Self {
        PointList::new(points.into_iter().map(Point::from))
    }
}

/// `llx,lly,urx,ury`. Corner ordering is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub llx: f64,
    pub lly: f64,
    pub urx: f64,
    pub ury: f64,
}

impl Rect {
    pub const fn new(llx: f64, lly: f64, urx: f64, ury: f64) -> Self {
        Self { llx, lly, urx, ury }
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        finite("rect", &[self.llx, self.lly, self.urx, self.ury])
    }

    pub fn to_text(&self, ctx: &EncodeContext) -> String {
        format!(
            "{},{},{},{}",
            ctx.real(self.llx),
            ctx.real(self.lly),
            ctx.real(self.urx),
            ctx.real(self.ury)
        )
    }
}

/// One piecewise Bézier curve: `1 + 3n` control points plus optional
/// arrow endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spline {
    pub end: Option<Point>,
    pub start: Option<Point>,
    pub points: Vec<Point>,
}

impl Spline {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self { end: None, start: None, points: points.into_iter().collect() }
    }

    pub fn with_start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: Point) -> Self {
        self.end = Some(end);
        self
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        let n = self.points.len();
        if n < 4 || (n - 1) % 3 != 0 {
            return Err(ValueError::invalid(format!(
                "spline needs 1 + 3n control points (n >= 1), got {n}"
            )));
        }
        self.end.iter().chain(&self.start).chain(&self.points).try_for_each(Point::validate)
    }

    pub fn to_text(&self, ctx: &EncodeContext) -> String {
        let mut parts = Vec::with_capacity(self.points.len() + 2);
        if let Some(end) = &self.end {
            parts.push(format!("e,{}", end.to_text(ctx)));
        }
        if let Some(start) = &self.start {
            parts.push(format!("s,{}", start.to_text(ctx)));
        }
        parts.extend(self.points.iter().map(|p| p.to_text(ctx)));
        parts.join(" ")
    }
}

/// Edge routing (`pos`): splines separated by `;`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineList(pub Vec<Spline>);

impl SplineList {
    pub fn validate(&self) -> Result<(), ValueError> {
        if self.0.is_empty() {
            return Err(ValueError::invalid("spline list is empty; unset the attribute instead"));
        }
        self.0.iter().try_for_each(Spline::validate)
    }

    pub fn to_text(&self, ctx: &EncodeContext) -> String {
        self.0.iter().map(|s| s.to_text(ctx)).collect::<Vec<_>>().join(";")
    }
}

impl From<Spline> for SplineList {
    fn from(spline: Spline) -> Self {
        SplineList(vec![spline])
    }
}

/// Where an edge attaches to a node: `port`, `compass`, or `port:compass`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortPos {
    pub port: Option<String>,
    pub compass: Option<CompassPoint>,
}

impl PortPos {
    pub fn port(name: impl Into<String>) -> Self {
        Self { port: Some(name.into()), compass: None }
    }

    pub const fn compass(point: CompassPoint) -> Self {
        Self { port: None, compass: Some(point) }
    }

    pub fn at(mut self, point: CompassPoint) -> Self {
        self.compass = Some(point);
        self
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        match (&self.port, self.compass) {
            (None, None) => Err(ValueError::invalid("port position needs a port name or a compass point")),
            (Some(name), _) if name.is_empty() || name.contains(':') => {
                Err(ValueError::invalid(format!("invalid port name '{name}'")))
            }
            _ => Ok(()),
        }
    }

    pub fn to_text(&self) -> String {
        match (&self.port, self.compass) {
            (Some(port), Some(c)) => format!("{port}:{c}"),
            (Some(port), None) => port.clone(),
            (None, Some(c)) => c.as_str().to_owned(),
            (None, None) => String::new(),
        }
    }
}

/// What the viewport is centered on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewportCenter {
    Point { x: f64, y: f64 },
    Node(String),
}

/// Clipping window of the final drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    pub center: Option<ViewportCenter>,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, zoom: f64) -> Self {
        Self { width, height, zoom, center: None }
    }

    pub fn centered_at(mut self, x: f64, y: f64) -> Self {
        self.center = Some(ViewportCenter::Point { x, y });
        self
    }

    pub fn centered_on(mut self, node: impl Into<String>) -> Self {
        self.center = Some(ViewportCenter::Node(node.into()));
        self
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        for (field, v) in [("width", self.width), ("height", self.height), ("zoom", self.zoom)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ValueError::invalid(format!("viewport {field} must be positive, got {v}")));
            }
        }
        match &self.center {
            Some(ViewportCenter::Point { x, y }) => finite("viewport center", &[*x, *y]),
            Some(ViewportCenter::Node(name)) if name.is_empty() || name.contains(char::is_whitespace) => {
                Err(ValueError::invalid(format!("viewport node '{name}' must be a non-empty name without whitespace")))
            }
            _ => Ok(()),
        }
    }

    /// Fields in fixed order, whitespace-separated: `W H Z [x y | node]`.
    pub fn to_text(&self, ctx: &EncodeContext) -> String {
        let mut fields = vec![ctx.real(self.width), ctx.real(self.height), ctx.real(self.zoom)];
        match &self.center {
            Some(ViewportCenter::Point { x, y }) => {
                fields.push(ctx.real(*x));
                fields.push(ctx.real(*y));
            }
            Some(ViewportCenter::Node(name)) => fields.push(name.clone()),
            None => {}
        }
        fields.join(" ")
    }
}
