//! Colors and weighted color lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ValueError;
use crate::encode::EncodeContext;

/// A single color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Color {
    /// X11/SVG color name, optionally scheme-qualified (`/blues9/3`).
    Named(String),
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: u8 },
    /// Hue, saturation and value, each in `[0, 1]`.
    Hsv { h: f64, s: f64, v: f64 },
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn hsv(h: f64, s: f64, v: f64) -> Self {
        Color::Hsv { h, s, v }
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        match self {
            Color::Named(name) => {
                if name.is_empty() {
                    return Err(ValueError::invalid("color name is empty"));
                }
                if let Some(c) = name
                    .chars()
                    .find(|c| c.is_whitespace() || matches!(c, '"' | ':' | ';' | ',' | '\\'))
                {
                    return Err(ValueError::invalid(format!(
                        "color name '{name}' contains '{}'",
                        c.escape_default()
                    )));
                }
                Ok(())
            }
            Color::Rgb { .. } | Color::Rgba { .. } => Ok(()),
            Color::Hsv { h, s, v } => {
                if [h, s, v].iter().all(|c| c.is_finite() && (0.0..=1.0).contains(*c)) {
                    Ok(())
                } else {
                    Err(ValueError::invalid(format!(
                        "HSV components must lie in [0, 1], got {h},{s},{v}"
                    )))
                }
            }
        }
    }

    pub fn to_text(&self, ctx: &EncodeContext) -> String {
        match self {
            Color::Named(name) => name.clone(),
            Color::Rgb { r, g, b } => format!("#{r:02x}{g:02x}{b:02x}"),
            Color::Rgba { r, g, b, a } => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
            Color::Hsv { h, s, v } => {
                format!("{},{},{}", ctx.real(*h), ctx.real(*s), ctx.real(*v))
            }
        }
    }
}

fn hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

impl FromStr for Color {
    type Err = ValueError;

    /// Parses `#rrggbb`, `#rrggbbaa` or a color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(hex) = s.strip_prefix('#') else {
            let color = Color::named(s);
            color.validate()?;
            return Ok(color);
        };
        let bad = || ValueError::invalid(format!("malformed hex color '{s}'"));
        if !hex.is_ascii() {
            return Err(bad());
        }
        let byte = |i: usize| hex.get(i..i + 2).and_then(hex_byte).ok_or_else(bad);
        match hex.len() {
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(bad()),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::named(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&EncodeContext::default()))
    }
}

/// One element of a color list, with an optional fraction of the fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedColor {
    pub color: Color,
    pub weight: Option<f64>,
}

impl WeightedColor {
    pub fn new(color: Color) -> Self {
        Self { color, weight: None }
    }

    pub fn weighted(color: Color, weight: f64) -> Self {
        Self { color, weight: Some(weight) }
    }
}

/// An ordered, non-empty sequence of colors joined by `:` on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorList(pub SmallVec<[WeightedColor; 2]>);

impl ColorList {
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        ColorList(colors.into_iter().map(WeightedColor::new).collect())
    }

    pub fn single(color: Color) -> Self {
        Self::new([color])
    }

    pub fn with_weight(mut self, color: Color, weight: f64) -> Self {
        self.0.push(WeightedColor::weighted(color, weight));
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightedColor> {
        self.0.iter()
    }

    pub fn validate(&self) -> Result<(), ValueError> {
        if self.0.is_empty() {
            return Err(ValueError::invalid("color list is empty; unset the attribute instead"));
        }
        let mut total = 0.0;
        for item in &self.0 {
            item.color.validate()?;
            if let Some(w) = item.weight {
                if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                    return Err(ValueError::invalid(format!(
                        "color weight {w} is outside [0, 1]"
                    )));
                }
                total += w;
            }
        }
        if total > 1.0 + 1e-9 {
            return Err(ValueError::invalid(format!(
                "color weights sum to {total}, more than 1"
            )));
        }
        Ok(())
    }

    pub fn to_text(&self, ctx: &EncodeContext) -> String {
        self.0
            .iter()
            .map(|item| match item.weight {
                Some(w) => format!("{};{}", item.color.to_text(ctx), ctx.real(w)),
                None => item.color.to_text(ctx),
            })
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl From<Color> for ColorList {
    fn from(color: Color) -> Self {
        ColorList::single(color)
    }
}

impl From<Vec<Color>> for ColorList {
    fn from(colors: Vec<Color>) -> Self {
        ColorList::new(colors)
    }
}

impl FromStr for ColorList {
    type Err = ValueError;

    /// Parses `red:blue` and the weighted form `red;0.3:blue`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut items = SmallVec::new();
        for part in s.split(':') {
            let item = match part.split_once(';') {
                Some((color, weight)) => {
                    let weight = weight.parse::<f64>().map_err(|_| {
                        ValueError::invalid(format!("malformed color weight '{weight}'"))
                    })?;
                    WeightedColor::weighted(color.parse()?, weight)
                }
                None => WeightedColor::new(part.parse()?),
            };
            items.push(item);
        }
        let list = ColorList(items);
        list.validate()?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EncodeContext {
        EncodeContext::default()
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!("#ff0080".parse::<Color>().unwrap(), Color::rgb(255, 0, 128));
        assert_eq!("#FF008040".parse::<Color>().unwrap(), Color::rgba(255, 0, 128, 64));
        assert!("#ff00".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert_eq!(Color::rgb(255, 0, 128).to_text(&ctx()), "#ff0080");
    }

    #[test]
    fn test_named_color_validation() {
        assert!(Color::named("red").validate().is_ok());
        assert!(Color::named("/blues9/3").validate().is_ok());
        assert!(Color::named("").validate().is_err());
        assert!(Color::named("dark red").validate().is_err());
        assert!(Color::named("red:blue").validate().is_err());
    }

    #[test]
    fn test_hsv_range() {
        assert!(Color::hsv(0.5, 1.0, 0.0).validate().is_ok());
        assert!(Color::hsv(1.5, 0.0, 0.0).validate().is_err());
        assert!(Color::hsv(f64::NAN, 0.0, 0.0).validate().is_err());
        assert_eq!(Color::hsv(0.5, 1.0, 0.25).to_text(&ctx()), "0.5,1,0.25");
    }

    #[test]
    fn test_color_list_text() {
        let list = ColorList::new([Color::named("red"), Color::named("blue")]);
        assert_eq!(list.to_text(&ctx()), "red:blue");
        let weighted = ColorList::single(Color::named("red")).with_weight(Color::named("green"), 0.25);
        assert_eq!(weighted.to_text(&ctx()), "red:green;0.25");
    }

    #[test]
    fn test_single_element_list_matches_single_color() {
        let list = ColorList::single(Color::named("red"));
        assert_eq!(list.to_text(&ctx()), Color::named("red").to_text(&ctx()));
    }

    #[test]
    fn test_color_list_rejects_empty_and_overweight() {
        assert!(ColorList::new([] as [Color; 0]).validate().is_err());
        let heavy = ColorList::new([] as [Color; 0])
            .with_weight(Color::named("red"), 0.7)
            .with_weight(Color::named("blue"), 0.5);
        assert!(heavy.validate().is_err());
        let negative = ColorList::new([] as [Color; 0]).with_weight(Color::named("red"), -0.1);
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_parse_color_list() {
        let list: ColorList = "red;0.3:#0000ff".parse().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.0[0], WeightedColor::weighted(Color::named("red"), 0.3));
        assert_eq!(list.0[1], WeightedColor::new(Color::rgb(0, 0, 255)));
        assert!("red::blue".parse::<ColorList>().is_err());
        assert!("red;x".parse::<ColorList>().is_err());
    }
}
