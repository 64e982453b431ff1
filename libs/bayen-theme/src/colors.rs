//! Color tokens for the BayenTV theme
//!
//! Exactly two palettes exist. Light mode is a white page with a saturated
//! indigo accent; dark mode is near-black with a desaturated violet accent.
//! Both are fully materialized statics and are picked by [`PaletteTokens::for_mode`].

use crate::error::{Result, ThemeError};
use crate::style::{BoxShadow, GradientStop};
use crate::theme::ThemeMode;
use iced::Color;
use palette::{LinSrgb, Srgb};
use serde::{Serialize, Serializer};

macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        Color::from_rgb($r as f32 / 255.0, $g as f32 / 255.0, $b as f32 / 255.0)
    };
}

macro_rules! rgba {
    ($r:expr, $g:expr, $b:expr, $a:expr) => {
        Color::from_rgba($r as f32 / 255.0, $g as f32 / 255.0, $b as f32 / 255.0, $a)
    };
}

/// Named BayenTV colors
pub struct BayenColors;

impl BayenColors {
    // ═══════════════════════════════════════════════════════════════════════════
    // ACCENTS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Indigo - light mode primary
    pub const INDIGO: Color = rgb!(0x40, 0x5D, 0xE6);
    /// Violet - dark mode primary
    pub const VIOLET: Color = rgb!(0x9A, 0x7C, 0xFF);
    /// Lavender - dark mode secondary
    pub const LAVENDER: Color = rgb!(0xD1, 0xC4, 0xFF);
    /// Graphite - light mode secondary
    pub const GRAPHITE: Color = rgb!(0x26, 0x26, 0x26);

    // ═══════════════════════════════════════════════════════════════════════════
    // BRAND GRADIENT STOPS
    // ═══════════════════════════════════════════════════════════════════════════

    pub const SUNRISE: Color = rgb!(0xFE, 0xDA, 0x75);
    pub const EMBER: Color = rgb!(0xFA, 0x7E, 0x1E);
    pub const MAGENTA: Color = rgb!(0xD6, 0x29, 0x76);
    pub const ORCHID: Color = rgb!(0x96, 0x2F, 0xBF);
    pub const ROYAL: Color = rgb!(0x4F, 0x5B, 0xD5);

    // ═══════════════════════════════════════════════════════════════════════════
    // NEUTRALS
    // ═══════════════════════════════════════════════════════════════════════════

    pub const WHITE: Color = rgb!(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = rgb!(0x00, 0x00, 0x00);
    /// Page background in dark mode
    pub const INK: Color = rgb!(0x0B, 0x0B, 0x0B);
    /// Bars and cards in dark mode
    pub const CARBON: Color = rgb!(0x0F, 0x0F, 0x0F);
    /// Paper in dark mode
    pub const COAL: Color = rgb!(0x11, 0x11, 0x11);
    /// Tooltip in dark mode
    pub const SLATE: Color = rgb!(0x22, 0x22, 0x22);

    /// Transparent
    pub const TRANSPARENT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.0);
}

/// Brand gradient used for the light-mode primary action and badges
pub const BRAND_STOPS: &[GradientStop] = &[
    GradientStop::at(BayenColors::SUNRISE, 0.0),
    GradientStop::at(BayenColors::EMBER, 25.0),
    GradientStop::at(BayenColors::MAGENTA, 50.0),
    GradientStop::at(BayenColors::ORCHID, 75.0),
    GradientStop::at(BayenColors::ROYAL, 100.0),
];

const DARK_ACTION_STOPS: &[GradientStop] = &[
    GradientStop::new(rgba!(154, 124, 255, 0.95)),
    GradientStop::new(rgba!(79, 91, 213, 0.95)),
];

const DARK_BADGE_STOPS: &[GradientStop] = &[
    GradientStop::new(BayenColors::VIOLET),
    GradientStop::new(BayenColors::ROYAL),
];

/// A color role with its readable foreground
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRole {
    #[serde(serialize_with = "css_color")]
    pub main: Color,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "css_color_opt"
    )]
    pub contrast_text: Option<Color>,
}

/// Page and surface backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundRole {
    /// Page background
    #[serde(serialize_with = "css_color")]
    pub default: Color,
    /// Paper surfaces
    #[serde(serialize_with = "css_color")]
    pub paper: Color,
}

/// Text colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextRole {
    #[serde(serialize_with = "css_color")]
    pub primary: Color,
    #[serde(serialize_with = "css_color")]
    pub secondary: Color,
}

/// Semantic color roles for one mode
///
/// The roles mirror what a component library palette expects. The remaining
/// fields are the resolved per-mode tones the component rules read, so that no
/// rule has to branch on the mode itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteTokens {
    pub primary: ColorRole,
    pub secondary: ColorRole,
    pub background: BackgroundRole,
    pub text: TextRole,

    /// Surface bar and card background
    #[serde(skip)]
    pub surface: Color,
    /// Surface bar drop shadow
    #[serde(skip)]
    pub bar_shadow: BoxShadow,
    /// Card drop shadow
    #[serde(skip)]
    pub card_shadow: BoxShadow,
    /// Text input fill
    #[serde(skip)]
    pub input_fill: Color,
    /// Text input outline at rest
    #[serde(skip)]
    pub input_border: Color,
    /// Text input outline on hover
    #[serde(skip)]
    pub input_border_hover: Color,
    /// Tooltip background
    #[serde(skip)]
    pub tooltip: Color,
    /// Primary action gradient
    #[serde(skip)]
    pub action_gradient: &'static [GradientStop],
    /// Badge gradient
    #[serde(skip)]
    pub badge_gradient: &'static [GradientStop],
}

/// Light palette
pub static LIGHT_PALETTE: PaletteTokens = PaletteTokens {
    primary: ColorRole {
        main: BayenColors::INDIGO,
        contrast_text: Some(BayenColors::WHITE),
    },
    secondary: ColorRole {
        main: BayenColors::GRAPHITE,
        contrast_text: None,
    },
    background: BackgroundRole {
        default: BayenColors::WHITE,
        paper: BayenColors::WHITE,
    },
    text: TextRole {
        primary: BayenColors::BLACK,
        secondary: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
    },

    surface: BayenColors::WHITE,
    bar_shadow: BoxShadow::new(0.0, 1.0, 6.0, rgba!(16, 24, 40, 0.08)),
    card_shadow: BoxShadow::new(0.0, 6.0, 18.0, rgba!(16, 24, 40, 0.06)),
    input_fill: BayenColors::WHITE,
    input_border: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
    input_border_hover: Color::from_rgba(0.0, 0.0, 0.0, 0.16),
    tooltip: rgb!(0x11, 0x11, 0x11),
    action_gradient: BRAND_STOPS,
    badge_gradient: BRAND_STOPS,
};

/// Dark palette
pub static DARK_PALETTE: PaletteTokens = PaletteTokens {
    primary: ColorRole {
        main: BayenColors::VIOLET,
        contrast_text: Some(BayenColors::WHITE),
    },
    secondary: ColorRole {
        main: BayenColors::LAVENDER,
        contrast_text: Some(BayenColors::BLACK),
    },
    background: BackgroundRole {
        default: BayenColors::INK,
        paper: BayenColors::COAL,
    },
    text: TextRole {
        primary: BayenColors::WHITE,
        secondary: Color::from_rgba(1.0, 1.0, 1.0, 0.7),
    },

    surface: BayenColors::CARBON,
    bar_shadow: BoxShadow::new(0.0, 1.0, 12.0, Color::from_rgba(0.0, 0.0, 0.0, 0.6)),
    card_shadow: BoxShadow::new(0.0, 6.0, 18.0, Color::from_rgba(0.0, 0.0, 0.0, 0.6)),
    input_fill: Color::from_rgba(1.0, 1.0, 1.0, 0.02),
    input_border: Color::from_rgba(1.0, 1.0, 1.0, 0.06),
    input_border_hover: Color::from_rgba(1.0, 1.0, 1.0, 0.12),
    tooltip: BayenColors::SLATE,
    action_gradient: DARK_ACTION_STOPS,
    badge_gradient: DARK_BADGE_STOPS,
};

impl PaletteTokens {
    /// Get the palette for a mode
    pub fn for_mode(mode: ThemeMode) -> &'static PaletteTokens {
        match mode {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }
}

/// Parse a hex color (`#rgb`, `#rrggbb` or `#rrggbbaa`, leading `#` optional)
pub fn parse_hex_color(hex: &str) -> Result<Color> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || ThemeError::InvalidColor(hex.to_string());

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

    match digits.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(digits.chars()) {
                let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                *slot = v * 16 + v;
            }
            Ok(from_rgba8(rgb[0], rgb[1], rgb[2], 1.0))
        }
        6 => Ok(from_rgba8(channel(0)?, channel(2)?, channel(4)?, 1.0)),
        8 => {
            let a = channel(6)?;
            Ok(from_rgba8(channel(0)?, channel(2)?, channel(4)?, a as f32 / 255.0))
        }
        _ => Err(invalid()),
    }
}

fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Color {
    Color::from_rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
}

/// Convert a color to a lowercase `#rrggbb` hex string, ignoring alpha
pub fn color_to_hex(color: Color) -> String {
    let [r, g, b] = channels(color);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Render a color as a CSS value
///
/// Opaque colors render as hex, fully transparent as `transparent`, anything
/// else as `rgba(..)`.
pub fn to_css(color: Color) -> String {
    if color.a >= 1.0 {
        color_to_hex(color)
    } else if color.a <= 0.0 {
        "transparent".to_string()
    } else {
        let [r, g, b] = channels(color);
        format!("rgba({}, {}, {}, {})", r, g, b, color.a)
    }
}

fn channels(color: Color) -> [u8; 3] {
    [color.r, color.g, color.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// WCAG relative luminance of a color (alpha ignored)
pub fn relative_luminance(color: Color) -> f32 {
    let linear: LinSrgb = Srgb::new(color.r, color.g, color.b).into_linear();
    0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
}

/// WCAG contrast ratio between two opaque colors, in `1.0..=21.0`
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (hi, lo) = if la > lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Adjust alpha of a color
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::from_rgba(color.r, color.g, color.b, alpha)
}

pub(crate) fn css_color<S: Serializer>(
    color: &Color,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_css(*color))
}

pub(crate) fn css_color_opt<S: Serializer>(
    color: &Option<Color>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match color {
        Some(color) => css_color(color, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_primary_is_indigo() {
        assert_eq!(color_to_hex(LIGHT_PALETTE.primary.main), "#405de6");
        assert_eq!(LIGHT_PALETTE.primary.main, parse_hex_color("#405DE6").unwrap());
    }

    #[test]
    fn test_dark_primary_is_violet() {
        assert!(color_to_hex(DARK_PALETTE.primary.main).eq_ignore_ascii_case("#9a7cff"));
    }

    #[test]
    fn test_dark_palette_has_dark_background() {
        assert!(relative_luminance(DARK_PALETTE.background.default) < 0.05);
        assert!(relative_luminance(DARK_PALETTE.background.paper) < 0.05);
    }

    #[test]
    fn test_light_palette_background_is_white() {
        assert_eq!(LIGHT_PALETTE.background.default, Color::WHITE);
        assert!((relative_luminance(LIGHT_PALETTE.background.default) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for palette in [&LIGHT_PALETTE, &DARK_PALETTE] {
            let ratio = contrast_ratio(palette.text.primary, palette.background.default);
            assert!(ratio > 15.0, "ratio was {ratio}");
        }
    }

    #[test]
    fn test_light_accent_is_more_saturated_than_dark() {
        let spread = |c: Color| c.r.max(c.g).max(c.b) - c.r.min(c.g).min(c.b);
        assert!(spread(LIGHT_PALETTE.primary.main) > spread(DARK_PALETTE.primary.main));
    }

    #[test]
    fn test_for_mode_lookup() {
        assert_eq!(PaletteTokens::for_mode(ThemeMode::Light), &LIGHT_PALETTE);
        assert_eq!(PaletteTokens::for_mode(ThemeMode::Dark), &DARK_PALETTE);
    }

    #[test]
    fn test_parse_hex_color_short_form() {
        let color = parse_hex_color("#222").unwrap();
        assert_eq!(color, BayenColors::SLATE);
    }

    #[test]
    fn test_parse_hex_color_with_alpha() {
        let color = parse_hex_color("#FF000080").unwrap();
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.a - 0.5).abs() < 0.02);
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(matches!(parse_hex_color("invalid"), Err(ThemeError::InvalidColor(_))));
        assert!(parse_hex_color("#GGG").is_err());
        assert!(parse_hex_color("#12345").is_err());
    }

    #[test]
    fn test_to_css_forms() {
        assert_eq!(to_css(BayenColors::INK), "#0b0b0b");
        assert_eq!(to_css(BayenColors::TRANSPARENT), "transparent");
        assert_eq!(to_css(DARK_PALETTE.text.secondary), "rgba(255, 255, 255, 0.7)");
    }

    #[test]
    fn test_palette_serializes_role_names() {
        let json = serde_json::to_value(LIGHT_PALETTE).unwrap();
        assert_eq!(json["primary"]["main"], "#405de6");
        assert_eq!(json["primary"]["contrastText"], "#ffffff");
        assert!(json["secondary"].get("contrastText").is_none());
        assert_eq!(json["background"]["default"], "#ffffff");
        assert!(json.get("surface").is_none());
    }
}
