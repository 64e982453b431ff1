//! BayenTV brand mark
//!
//! The logo is a link to the home route whose label is filled with a slowly
//! cycling five-color gradient in the brand script font. Rendering produces an
//! element description; the font and keyframes it depends on are registered
//! once per rendering session in an [`AssetRegistry`].

use crate::colors::BayenColors;
use crate::fonts::{FontChain, FontResource, HeadingLevel, BRAND_FONT};
use crate::spacing::Motion;
use crate::style::{
    find, Animation, Declaration, Gradient, GradientStop, Iteration, Keyframe, Keyframes,
    StyleValue,
};
use std::fmt::Write;
use tracing::debug;

const LOGO_STOPS: &[GradientStop] = &[
    GradientStop::new(BayenColors::SUNRISE),
    GradientStop::new(BayenColors::EMBER),
    GradientStop::new(BayenColors::MAGENTA),
    GradientStop::new(BayenColors::ORCHID),
    GradientStop::new(BayenColors::ROYAL),
];

/// Name of the gradient sweep keyframes
pub const GRADIENT_KEYFRAMES: &str = "gradientMove";

/// Gradient sweep timing for the label
pub const ANIMATION: Animation = Animation {
    name: GRADIENT_KEYFRAMES,
    duration_ms: Motion::BRAND_CYCLE_MS,
    easing: "ease",
    iteration: Iteration::Infinite,
};

/// Keyframes sweeping the background from left to right and back
pub fn gradient_keyframes() -> Keyframes {
    let frame = |offset: f32, x: f32| Keyframe {
        offset,
        declarations: vec![Declaration::new(
            "background-position",
            StyleValue::Percents(x, 50.0),
        )],
    };

    Keyframes {
        name: GRADIENT_KEYFRAMES,
        frames: vec![frame(0.0, 0.0), frame(50.0, 100.0), frame(100.0, 0.0)],
    }
}

/// Assets registered by rendered components
///
/// Owned by the rendering session. Registering the same font or keyframes
/// again is a no-op.
#[derive(Debug, Default, Clone)]
pub struct AssetRegistry {
    fonts: Vec<FontResource>,
    keyframes: Vec<Keyframes>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font stylesheet; returns `false` if it was already present
    pub fn ensure_font(&mut self, font: FontResource) -> bool {
        if self.fonts.iter().any(|f| f.url == font.url) {
            return false;
        }
        debug!("Registering font resource {}", font.url);
        self.fonts.push(font);
        true
    }

    /// Register keyframes; returns `false` if a definition with the same name
    /// was already present
    pub fn ensure_keyframes(&mut self, keyframes: Keyframes) -> bool {
        if self.keyframes.iter().any(|k| k.name == keyframes.name) {
            return false;
        }
        debug!("Registering keyframes {}", keyframes.name);
        self.keyframes.push(keyframes);
        true
    }

    pub fn fonts(&self) -> &[FontResource] {
        &self.fonts
    }

    pub fn keyframes(&self) -> &[Keyframes] {
        &self.keyframes
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty() && self.keyframes.is_empty()
    }

    /// Render registered assets: imports first, then keyframes, each in
    /// registration order
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for font in &self.fonts {
            let _ = writeln!(out, "{}", font.import_rule());
        }
        for keyframes in &self.keyframes {
            out.push('\n');
            let _ = write!(out, "{}", keyframes);
        }
        out
    }
}

/// The brand logo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrandMark;

impl BrandMark {
    pub const LABEL: &'static str = "BayenTV";
    /// Home route
    pub const TARGET: &'static str = "/";

    pub fn new() -> Self {
        Self
    }

    /// Label gradient
    pub fn gradient() -> Gradient {
        Gradient::linear(45.0, LOGO_STOPS)
    }

    /// Render the mark, registering the assets it needs
    pub fn render(&self, assets: &mut AssetRegistry) -> BrandMarkElement {
        assets.ensure_font(BRAND_FONT);
        assets.ensure_keyframes(gradient_keyframes());

        BrandMarkElement {
            heading: HeadingLevel::H6,
            heading_style: vec![
                Declaration::new("font-weight", StyleValue::Keyword("bold")),
                Declaration::new("font-size", StyleValue::Rem(2.0)),
            ],
            href: Self::TARGET,
            link_style: vec![Declaration::new(
                "text-decoration",
                StyleValue::Keyword("none"),
            )],
            label: Self::LABEL,
            label_style: vec![
                Declaration::new("background", Self::gradient()),
                Declaration::new("-webkit-background-clip", StyleValue::Keyword("text")),
                Declaration::new("-webkit-text-fill-color", StyleValue::Keyword("transparent")),
                Declaration::new("display", StyleValue::Keyword("inline-block")),
                Declaration::new("background-size", StyleValue::Percents(300.0, 300.0)),
                Declaration::new("animation", ANIMATION),
                Declaration::new("font-family", StyleValue::Fonts(FontChain::BRAND.families())),
            ],
        }
    }
}

/// Rendered brand mark: heading > link > gradient label
#[derive(Debug, Clone, PartialEq)]
pub struct BrandMarkElement {
    pub heading: HeadingLevel,
    pub heading_style: Vec<Declaration>,
    /// Navigation target
    pub href: &'static str,
    pub link_style: Vec<Declaration>,
    pub label: &'static str,
    pub label_style: Vec<Declaration>,
}

impl BrandMarkElement {
    /// Look up a label style property
    pub fn label_property(&self, property: &str) -> Option<&StyleValue> {
        find(&self.label_style, property)
    }

    /// Render as markup with inline styles
    pub fn to_html(&self) -> String {
        let tag = self.heading.name();
        format!(
            "<{tag} style=\"{}\"><a href=\"{}\" style=\"{}\"><span style=\"{}\">{}</span></a></{tag}>",
            inline(&self.heading_style),
            self.href,
            inline(&self.link_style),
            inline(&self.label_style),
            self.label,
        )
    }
}

fn inline(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_link_and_label() {
        let mut assets = AssetRegistry::new();
        let element = BrandMark::new().render(&mut assets);
        assert_eq!(element.href, "/");
        assert_eq!(element.label, "BayenTV");
        assert_eq!(element.heading, HeadingLevel::H6);
    }

    #[test]
    fn test_label_style() {
        let element = BrandMark.render(&mut AssetRegistry::new());
        assert_eq!(
            element.label_property("background").map(ToString::to_string).as_deref(),
            Some("linear-gradient(45deg, #feda75, #fa7e1e, #d62976, #962fbf, #4f5bd5)")
        );
        assert_eq!(
            element.label_property("animation").map(ToString::to_string).as_deref(),
            Some("gradientMove 4s ease infinite")
        );
        assert_eq!(
            element.label_property("background-size"),
            Some(&StyleValue::Percents(300.0, 300.0))
        );
        assert_eq!(
            element.label_property("font-family").map(ToString::to_string).as_deref(),
            Some("'Grand Hotel', cursive")
        );
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut assets = AssetRegistry::new();
        for _ in 0..3 {
            BrandMark.render(&mut assets);
        }
        assert_eq!(assets.fonts().len(), 1);
        assert_eq!(assets.keyframes().len(), 1);
        assert!(!assets.ensure_font(BRAND_FONT));
        assert!(!assets.ensure_keyframes(gradient_keyframes()));
    }

    #[test]
    fn test_keyframes_css() {
        assert_eq!(
            gradient_keyframes().to_string(),
            "@keyframes gradientMove {\n  \
             0% { background-position: 0% 50%; }\n  \
             50% { background-position: 100% 50%; }\n  \
             100% { background-position: 0% 50%; }\n}\n"
        );
    }

    #[test]
    fn test_registry_css_order() {
        let mut assets = AssetRegistry::new();
        assert!(assets.is_empty());
        BrandMark.render(&mut assets);
        let css = assets.to_css();
        let import = css.find("@import").unwrap();
        let keyframes = css.find("@keyframes gradientMove").unwrap();
        assert!(import < keyframes);
        assert!(css.contains("Grand+Hotel"));
    }

    #[test]
    fn test_html() {
        let html = BrandMark.render(&mut AssetRegistry::new()).to_html();
        assert!(html.starts_with("<h6 style=\"font-weight: bold; font-size: 2rem;\">"));
        assert!(html.contains("<a href=\"/\" style=\"text-decoration: none;\">"));
        assert!(html.contains(">BayenTV</span></a></h6>"));
    }
}
