//! Typography definitions for the BayenTV theme
//!
//! Font families are preference chains: the renderer uses the first family it
//! has loaded and falls back toward the generic family at the end. Web fonts
//! are declared as [`FontResource`]s and fetched by the renderer, so a missing
//! one is never an error.

use crate::style::font_list;
use iced::font::{Family, Weight};
use iced::Font;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Externally hosted web font stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontResource {
    /// Stylesheet URL imported by the renderer
    pub url: &'static str,
    /// Families the stylesheet provides
    pub families: &'static [&'static str],
}

impl FontResource {
    /// `@import` rule for this resource
    pub fn import_rule(&self) -> String {
        format!("@import url('{}');", self.url)
    }
}

/// UI font plus the brand script font, imported by the global baseline
pub const UI_FONTS: FontResource = FontResource {
    url: "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600;700&family=Grand+Hotel&display=swap",
    families: &["Inter", "Grand Hotel"],
};

/// Brand script font only, registered by the brand mark
pub const BRAND_FONT: FontResource = FontResource {
    url: "https://fonts.googleapis.com/css2?family=Grand+Hotel&display=swap",
    families: &["Grand Hotel"],
};

/// Ordered font family preference list, ending in a generic family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontChain(pub &'static [&'static str]);

impl FontChain {
    /// UI text chain
    pub const UI: FontChain = FontChain(&[
        "Inter",
        "system-ui",
        "-apple-system",
        "Segoe UI",
        "Roboto",
        "Helvetica",
        "Arial",
        "sans-serif",
    ]);

    /// Brand mark chain
    pub const BRAND: FontChain = FontChain(&["Grand Hotel", "cursive"]);

    pub fn families(&self) -> &'static [&'static str] {
        self.0
    }

    /// Generic family used when nothing else is available
    pub fn generic(&self) -> &'static str {
        self.0.last().copied().unwrap_or("sans-serif")
    }

    /// Pick the family a renderer would use given what it has available
    ///
    /// The generic family always resolves, whether or not it is listed as
    /// available.
    pub fn resolve(&self, available: &[&str]) -> &'static str {
        let generic = self.generic();
        for &family in self.0 {
            if family == generic {
                break;
            }
            if available.iter().any(|a| a.eq_ignore_ascii_case(family)) {
                return family;
            }
            tracing::debug!("Font '{}' unavailable, trying next in chain", family);
        }
        generic
    }

    /// CSS `font-family` value
    pub fn css(&self) -> String {
        font_list(self.0)
    }
}

impl Serialize for FontChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css())
    }
}

/// Heading levels `h1` through `h6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Variant name as used by the component library (`h1`..`h6`)
    pub fn name(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

/// Typography tokens
///
/// Mode independent: both themes carry the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypographyTokens {
    pub font_family: FontChain,
    /// Weights indexed by heading level
    pub heading_weights: [u16; 6],
}

impl TypographyTokens {
    /// Semibold, shared by every heading level
    pub const HEADING_WEIGHT: u16 = 600;

    pub const fn standard() -> Self {
        Self {
            font_family: FontChain::UI,
            heading_weights: [Self::HEADING_WEIGHT; 6],
        }
    }

    pub fn heading_weight(&self, level: HeadingLevel) -> u16 {
        self.heading_weights[level as usize]
    }

    /// Family a renderer with the given fonts loaded would use for UI text
    pub fn resolve_family(&self, available: &[&str]) -> &'static str {
        self.font_family.resolve(available)
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self::standard()
    }
}

impl Serialize for TypographyTokens {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Heading {
            font_weight: u16,
        }

        let mut map = serializer.serialize_map(Some(1 + HeadingLevel::ALL.len()))?;
        map.serialize_entry("fontFamily", &self.font_family)?;
        for level in HeadingLevel::ALL {
            map.serialize_entry(
                level.name(),
                &Heading {
                    font_weight: self.heading_weight(level),
                },
            )?;
        }
        map.end()
    }
}

/// Native fonts for iced renderers
pub struct Typography;

impl Typography {
    /// Body text
    pub const BODY: Font = Font {
        family: Family::Name("Inter"),
        weight: Weight::Normal,
        stretch: iced::font::Stretch::Normal,
        style: iced::font::Style::Normal,
    };

    /// Headings, semibold to match [`TypographyTokens::HEADING_WEIGHT`]
    pub const HEADING: Font = Font {
        family: Family::Name("Inter"),
        weight: Weight::Semibold,
        stretch: iced::font::Stretch::Normal,
        style: iced::font::Style::Normal,
    };

    /// Brand script
    pub const BRAND: Font = Font {
        family: Family::Name("Grand Hotel"),
        weight: Weight::Bold,
        stretch: iced::font::Stretch::Normal,
        style: iced::font::Style::Normal,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_available_family_wins() {
        assert_eq!(FontChain::UI.resolve(&["Roboto", "Inter"]), "Inter");
        assert_eq!(FontChain::UI.resolve(&["Arial", "Roboto"]), "Roboto");
    }

    #[test]
    fn test_missing_fonts_fall_back_to_generic() {
        assert_eq!(FontChain::UI.resolve(&[]), "sans-serif");
        assert_eq!(FontChain::BRAND.resolve(&["Inter"]), "cursive");
    }

    #[test]
    fn test_resolve_ignores_case() {
        assert_eq!(FontChain::BRAND.resolve(&["grand hotel"]), "Grand Hotel");
    }

    #[test]
    fn test_ui_chain_css() {
        assert_eq!(
            FontChain::UI.css(),
            "Inter, system-ui, -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif"
        );
    }

    #[test]
    fn test_all_headings_semibold() {
        let typography = TypographyTokens::standard();
        for level in HeadingLevel::ALL {
            assert_eq!(typography.heading_weight(level), 600);
        }
    }

    #[test]
    fn test_typography_serializes_heading_variants() {
        let json = serde_json::to_value(TypographyTokens::standard()).unwrap();
        assert_eq!(json["h1"]["fontWeight"], 600);
        assert_eq!(json["h6"]["fontWeight"], 600);
        assert!(json["fontFamily"].as_str().unwrap().starts_with("Inter"));
    }

    #[test]
    fn test_import_rule() {
        assert_eq!(
            BRAND_FONT.import_rule(),
            "@import url('https://fonts.googleapis.com/css2?family=Grand+Hotel&display=swap');"
        );
    }

    #[test]
    fn test_native_fonts_follow_chains() {
        assert_eq!(Typography::BODY.family, Family::Name(FontChain::UI.families()[0]));
        assert_eq!(Typography::BRAND.family, Family::Name(FontChain::BRAND.families()[0]));
        assert_eq!(Typography::HEADING.weight, Weight::Semibold);
    }
}
