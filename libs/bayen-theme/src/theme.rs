//! Theme configuration for BayenTV
//!
//! [`ThemeFactory::build`] turns a [`ThemeMode`] into a complete
//! [`ThemeConfig`]. The result depends on nothing but the mode, so callers
//! can cache it per mode or use [`ThemeFactory::cached`].

use crate::baseline::GlobalBaseline;
use crate::colors::PaletteTokens;
use crate::components::{component_rules, ComponentKind, ComponentStyleRule};
use crate::error::{Result, ThemeError};
use crate::fonts::TypographyTokens;
use iced::theme::Palette;
use iced::Theme;
use once_cell::sync::Lazy;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Theme mode (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// White page, indigo accent
    #[default]
    Light,
    /// Near-black page, violet accent
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    /// Parse exactly `light` or `dark`; anything else is rejected rather
    /// than defaulted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeError::InvalidMode(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ThemeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mode = String::deserialize(deserializer)?;
        mode.parse().map_err(de::Error::custom)
    }
}

/// Complete style configuration for one mode
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub palette: PaletteTokens,
    pub typography: TypographyTokens,
    pub baseline: GlobalBaseline,
    /// One rule per [`ComponentKind`], in [`ComponentKind::ALL`] order
    pub components: Vec<ComponentStyleRule>,
}

impl ThemeConfig {
    /// Rule for a component category
    pub fn component(&self, kind: ComponentKind) -> Option<&ComponentStyleRule> {
        self.components.iter().find(|rule| rule.kind == kind)
    }

    /// Whether the light-mode decorative overlay is part of this theme
    pub fn has_overlay(&self) -> bool {
        self.baseline.overlay.is_some()
    }

    /// Global baseline as a stylesheet
    pub fn global_css(&self) -> String {
        self.baseline.to_css()
    }

    /// Export for a JS theme provider
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed [`ThemeConfig::to_json`]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to an iced theme for native renderers
    pub fn to_iced_theme(&self) -> Theme {
        let base = match self.mode {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        };

        let palette = Palette {
            background: self.palette.background.default,
            text: self.palette.text.primary,
            primary: self.palette.primary.main,
            ..base
        };

        let name = match self.mode {
            ThemeMode::Light => "BayenTV Light",
            ThemeMode::Dark => "BayenTV Dark",
        };

        Theme::custom(name.to_string(), palette)
    }
}

impl Serialize for ThemeConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        struct Components<'a>(&'a [ComponentStyleRule]);

        impl Serialize for Components<'_> {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for rule in self.0 {
                    map.serialize_entry(rule.kind.key(), rule)?;
                }
                map.end()
            }
        }

        #[derive(Serialize)]
        struct PaletteWithMode<'a> {
            mode: ThemeMode,
            #[serde(flatten)]
            tokens: &'a PaletteTokens,
        }

        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(
            "palette",
            &PaletteWithMode {
                mode: self.mode,
                tokens: &self.palette,
            },
        )?;
        map.serialize_entry("typography", &self.typography)?;
        map.serialize_entry("baseline", &self.baseline)?;
        map.serialize_entry("components", &Components(&self.components))?;
        map.end()
    }
}

static LIGHT_THEME: Lazy<ThemeConfig> = Lazy::new(|| {
    debug!("Caching light theme");
    ThemeFactory::build(ThemeMode::Light)
});

static DARK_THEME: Lazy<ThemeConfig> = Lazy::new(|| {
    debug!("Caching dark theme");
    ThemeFactory::build(ThemeMode::Dark)
});

/// Builds theme configurations
pub struct ThemeFactory;

impl ThemeFactory {
    /// Build the complete theme for a mode
    ///
    /// Every call starts from scratch; nothing is inherited from a previous
    /// theme.
    pub fn build(mode: ThemeMode) -> ThemeConfig {
        debug!("Building {} theme", mode);

        let palette = *PaletteTokens::for_mode(mode);
        let typography = TypographyTokens::standard();
        let baseline = GlobalBaseline::derive(mode, &palette);
        let components = component_rules(&palette);

        ThemeConfig {
            mode,
            palette,
            typography,
            baseline,
            components,
        }
    }

    /// Build from a mode name such as `"dark"`
    ///
    /// Fails with [`ThemeError::InvalidMode`] for anything other than light or
    /// dark.
    pub fn build_named(mode: &str) -> Result<ThemeConfig> {
        let mode = mode.parse::<ThemeMode>()?;
        Ok(Self::build(mode))
    }

    /// Shared, lazily built theme for a mode
    pub fn cached(mode: ThemeMode) -> &'static ThemeConfig {
        match mode {
            ThemeMode::Light => &LIGHT_THEME,
            ThemeMode::Dark => &DARK_THEME,
        }
    }
}
