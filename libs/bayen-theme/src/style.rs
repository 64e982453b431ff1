//! Typed style values and declarations
//!
//! Everything the theme produces is data. Values render to CSS text through
//! `Display`; the JSON export carries the same text so a web renderer can
//! apply it verbatim. Animations are described, never driven, here.

use crate::colors::to_css;
use iced::Color;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// One color stop of a gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    /// Position in percent; `None` lets the renderer spread stops evenly
    pub position: Option<f32>,
}

impl GradientStop {
    /// Stop without an explicit position
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            position: None,
        }
    }

    /// Stop at a position in percent
    pub const fn at(color: Color, position: f32) -> Self {
        Self {
            color,
            position: Some(position),
        }
    }
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_css(self.color))?;
        if let Some(position) = self.position {
            write!(f, " {}%", position)?;
        }
        Ok(())
    }
}

/// Gradient image
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gradient {
    /// Linear gradient along `angle` degrees
    Linear {
        angle: f32,
        stops: &'static [GradientStop],
    },
    /// Elliptical radial gradient; `size` in px, `center` in percent
    Radial {
        size: (f32, f32),
        center: (f32, f32),
        stops: &'static [GradientStop],
    },
}

impl Gradient {
    pub const fn linear(angle: f32, stops: &'static [GradientStop]) -> Self {
        Self::Linear { angle, stops }
    }

    pub fn stops(&self) -> &'static [GradientStop] {
        match self {
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => *stops,
        }
    }

    /// Stop offsets normalized to `0.0..=1.0`
    ///
    /// Unpositioned stops are spread evenly, the way a CSS renderer does for
    /// stop lists without explicit positions.
    pub fn offsets(&self) -> Vec<(f32, Color)> {
        let stops = self.stops();
        let last = stops.len().saturating_sub(1).max(1) as f32;

        stops
            .iter()
            .enumerate()
            .map(|(i, stop)| {
                let offset = stop.position.map(|p| p / 100.0).unwrap_or(i as f32 / last);
                (offset.clamp(0.0, 1.0), stop.color)
            })
            .collect()
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear { angle, stops } => {
                write!(f, "linear-gradient({}deg, {})", angle, join(stops, ", "))
            }
            Self::Radial {
                size,
                center,
                stops,
            } => write!(
                f,
                "radial-gradient({}px {}px at {}% {}%, {})",
                size.0,
                size.1,
                center.0,
                center.1,
                join(stops, ", ")
            ),
        }
    }
}

/// Drop shadow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

impl BoxShadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color,
        }
    }
}

impl From<BoxShadow> for iced::Shadow {
    fn from(shadow: BoxShadow) -> Self {
        iced::Shadow {
            color: shadow.color,
            offset: iced::Vector::new(shadow.offset_x, shadow.offset_y),
            blur_radius: shadow.blur,
        }
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            px(self.offset_x),
            px(self.offset_y),
            px(self.blur),
            to_css(self.color)
        )
    }
}

/// Property transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub property: &'static str,
    pub duration_ms: u32,
    pub easing: &'static str,
}

impl Transition {
    pub const fn ease(property: &'static str, duration_ms: u32) -> Self {
        Self {
            property,
            duration_ms,
            easing: "ease",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.property,
            duration(self.duration_ms),
            self.easing
        )
    }
}

/// 2D transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Vertical translation in px
    TranslateY(f32),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TranslateY(y) => write!(f, "translateY({})", px(*y)),
        }
    }
}

/// How often an animation repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iteration {
    Count(u32),
    Infinite,
}

/// Reference to a keyframe animation with its timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// Name of the [`Keyframes`] definition
    pub name: &'static str,
    pub duration_ms: u32,
    pub easing: &'static str,
    pub iteration: Iteration,
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, duration(self.duration_ms), self.easing)?;
        match self.iteration {
            Iteration::Infinite => write!(f, " infinite"),
            Iteration::Count(n) => write!(f, " {}", n),
        }
    }
}

/// One step of a keyframe animation
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    /// Offset in percent of the period
    pub offset: f32,
    pub declarations: Vec<Declaration>,
}

/// Named keyframe animation definition
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    pub name: &'static str,
    pub frames: Vec<Keyframe>,
}

impl fmt::Display for Keyframes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@keyframes {} {{", self.name)?;
        for frame in &self.frames {
            writeln!(f, "  {}% {{ {} }}", frame.offset, join(&frame.declarations, " "))?;
        }
        writeln!(f, "}}")
    }
}

/// A typed style value
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Px(f32),
    Rem(f32),
    Number(f32),
    Keyword(&'static str),
    Gradient(Gradient),
    /// Stacked background images, first on top
    Layers(Vec<Gradient>),
    Shadow(BoxShadow),
    Transitions(Vec<Transition>),
    Transform(Transform),
    /// Two percentages, e.g. a background position or size
    Percents(f32, f32),
    /// Ordered font family preference list
    Fonts(&'static [&'static str]),
    /// Blur filter radius in px
    Blur(f32),
    Animation(Animation),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => f.write_str(&to_css(*color)),
            Self::Px(v) => f.write_str(&px(*v)),
            Self::Rem(v) => write!(f, "{}rem", v),
            Self::Number(v) => write!(f, "{}", v),
            Self::Keyword(k) => f.write_str(k),
            Self::Gradient(g) => write!(f, "{}", g),
            Self::Layers(layers) => f.write_str(&join(layers, ", ")),
            Self::Shadow(s) => write!(f, "{}", s),
            Self::Transitions(ts) => f.write_str(&join(ts, ", ")),
            Self::Transform(t) => write!(f, "{}", t),
            Self::Percents(x, y) => write!(f, "{}% {}%", x, y),
            Self::Fonts(families) => f.write_str(&font_list(families)),
            Self::Blur(r) => write!(f, "blur({})", px(*r)),
            Self::Animation(a) => write!(f, "{}", a),
        }
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Gradient> for StyleValue {
    fn from(gradient: Gradient) -> Self {
        Self::Gradient(gradient)
    }
}

impl From<BoxShadow> for StyleValue {
    fn from(shadow: BoxShadow) -> Self {
        Self::Shadow(shadow)
    }
}

impl From<Transform> for StyleValue {
    fn from(transform: Transform) -> Self {
        Self::Transform(transform)
    }
}

impl From<Animation> for StyleValue {
    fn from(animation: Animation) -> Self {
        Self::Animation(animation)
    }
}

/// `property: value` pair
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// CSS property name (kebab-case)
    pub property: &'static str,
    pub value: StyleValue,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<StyleValue>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Look up a property in a declaration list
pub fn find<'a>(declarations: &'a [Declaration], property: &str) -> Option<&'a StyleValue> {
    declarations
        .iter()
        .find(|d| d.property == property)
        .map(|d| &d.value)
}

/// Serializes a declaration list as an ordered `property -> css` map
pub(crate) struct DeclarationMap<'a>(pub &'a [Declaration]);

impl Serialize for DeclarationMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for declaration in self.0 {
            map.serialize_entry(declaration.property, &declaration.value)?;
        }
        map.end()
    }
}

/// Format a px length, writing zero without a unit
pub(crate) fn px(v: f32) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", v)
    }
}

/// Format a CSS font-family list, quoting names with spaces
pub(crate) fn font_list(families: &[&str]) -> String {
    families
        .iter()
        .map(|family| {
            if family.contains(' ') {
                format!("'{}'", family)
            } else {
                family.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn duration(ms: u32) -> String {
    if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{}ms", ms)
    }
}

fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
