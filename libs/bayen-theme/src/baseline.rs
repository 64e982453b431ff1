//! Global baseline styles
//!
//! Page-level rules applied once by the renderer: font import, root sizing,
//! body reset and colors, color fades, the gradient text helper class and, in
//! light mode only, a faint decorative overlay.

use crate::colors::{BayenColors, PaletteTokens, BRAND_STOPS};
use crate::fonts::{FontResource, UI_FONTS};
use crate::spacing::Motion;
use crate::style::{Declaration, DeclarationMap, Gradient, GradientStop, StyleValue, Transition};
use crate::theme::ThemeMode;
use iced::Color;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt::Write;

/// Helper class that fills text with the brand gradient
pub const ACCENT_CLASS: &str = ".brand-accent";

const OVERLAY_STOPS_TOP: &[GradientStop] = &[
    GradientStop::new(Color::from_rgba(79.0 / 255.0, 91.0 / 255.0, 213.0 / 255.0, 0.04)),
    GradientStop::at(BayenColors::TRANSPARENT, 10.0),
];

const OVERLAY_STOPS_BOTTOM: &[GradientStop] = &[
    GradientStop::new(Color::from_rgba(214.0 / 255.0, 41.0 / 255.0, 118.0 / 255.0, 0.03)),
    GradientStop::at(BayenColors::TRANSPARENT, 12.0),
];

/// Selector plus declarations
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineRule {
    pub selector: &'static str,
    pub declarations: Vec<Declaration>,
}

impl BaselineRule {
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        crate::style::find(&self.declarations, property)
    }

    fn write_css(&self, out: &mut String) {
        let _ = writeln!(out, "{} {{", self.selector);
        for declaration in &self.declarations {
            let _ = writeln!(out, "  {}", declaration);
        }
        let _ = writeln!(out, "}}");
    }
}

impl Serialize for BaselineRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rule = serializer.serialize_struct("BaselineRule", 2)?;
        rule.serialize_field("selector", self.selector)?;
        rule.serialize_field("declarations", &DeclarationMap(&self.declarations))?;
        rule.end()
    }
}

/// Global baseline for one mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalBaseline {
    /// Web font stylesheet the page imports
    #[serde(rename = "fontImport", serialize_with = "font_url")]
    pub font_import: FontResource,
    /// Root sizing, body reset, color fades and helper classes
    pub rules: Vec<BaselineRule>,
    /// Decorative page overlay; only ever present in light mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<BaselineRule>,
}

impl GlobalBaseline {
    /// Derive the baseline for a mode from its resolved palette
    pub fn derive(mode: ThemeMode, palette: &PaletteTokens) -> Self {
        let rules = vec![
            BaselineRule {
                selector: "html, body, #root",
                declarations: vec![Declaration::new("height", StyleValue::Keyword("100%"))],
            },
            BaselineRule {
                selector: "body",
                declarations: vec![
                    Declaration::new("margin", StyleValue::Px(0.0)),
                    Declaration::new("padding", StyleValue::Px(0.0)),
                    Declaration::new(
                        "-webkit-font-smoothing",
                        StyleValue::Keyword("antialiased"),
                    ),
                    Declaration::new("-moz-osx-font-smoothing", StyleValue::Keyword("grayscale")),
                    Declaration::new("background-color", palette.background.default),
                    Declaration::new("color", palette.text.primary),
                ],
            },
            BaselineRule {
                selector: "*",
                declarations: vec![Declaration::new(
                    "transition",
                    StyleValue::Transitions(vec![
                        Transition::ease("background-color", Motion::COLOR_FADE_MS),
                        Transition::ease("color", Motion::COLOR_FADE_MS),
                        Transition::ease("box-shadow", Motion::COLOR_FADE_MS),
                    ]),
                )],
            },
            BaselineRule {
                selector: ACCENT_CLASS,
                declarations: vec![
                    Declaration::new("background", Gradient::linear(90.0, BRAND_STOPS)),
                    Declaration::new("-webkit-background-clip", StyleValue::Keyword("text")),
                    Declaration::new("background-clip", StyleValue::Keyword("text")),
                    Declaration::new("-webkit-text-fill-color", StyleValue::Keyword("transparent")),
                ],
            },
        ];

        let overlay = match mode {
            ThemeMode::Light => Some(light_overlay()),
            ThemeMode::Dark => None,
        };

        Self {
            font_import: UI_FONTS,
            rules,
            overlay,
        }
    }

    /// Find a rule by selector, including the overlay
    pub fn rule(&self, selector: &str) -> Option<&BaselineRule> {
        self.rules
            .iter()
            .chain(self.overlay.iter())
            .find(|rule| rule.selector == selector)
    }

    /// Render as a stylesheet
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.font_import.import_rule());

        // Overlay sits directly after the body rule.
        for rule in &self.rules {
            out.push('\n');
            rule.write_css(&mut out);
            if rule.selector == "body" {
                if let Some(overlay) = &self.overlay {
                    out.push('\n');
                    overlay.write_css(&mut out);
                }
            }
        }
        out
    }
}

fn light_overlay() -> BaselineRule {
    BaselineRule {
        selector: "body::after",
        declarations: vec![
            Declaration::new("content", StyleValue::Keyword("\"\"")),
            Declaration::new("position", StyleValue::Keyword("fixed")),
            Declaration::new("inset", StyleValue::Px(0.0)),
            Declaration::new("pointer-events", StyleValue::Keyword("none")),
            Declaration::new(
                "background",
                StyleValue::Layers(vec![
                    Gradient::Radial {
                        size: (1200.0, 600.0),
                        center: (10.0, 10.0),
                        stops: OVERLAY_STOPS_TOP,
                    },
                    Gradient::Radial {
                        size: (800.0, 400.0),
                        center: (90.0, 90.0),
                        stops: OVERLAY_STOPS_BOTTOM,
                    },
                ]),
            ),
            Declaration::new("z-index", StyleValue::Number(0.0)),
        ],
    }
}

fn font_url<S: Serializer>(font: &FontResource, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(font.url)
}
