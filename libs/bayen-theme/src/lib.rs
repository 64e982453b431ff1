//! # BayenTV Theme
//!
//! Design system for the BayenTV client.
//!
//! This library provides:
//! - Light and dark palettes with semantic color roles
//! - Typography tokens and font fallback chains
//! - The global page baseline and per-component style overrides
//! - The animated BayenTV brand mark
//! - JSON and CSS export for web renderers, iced styles for native ones
//!
//! ```
//! use bayen_theme::{ThemeFactory, ThemeMode};
//!
//! let theme = ThemeFactory::build(ThemeMode::Dark);
//! assert!(!theme.has_overlay());
//! ```

pub mod baseline;
pub mod brand;
pub mod colors;
pub mod components;
pub mod config;
pub mod error;
pub mod fonts;
pub mod spacing;
pub mod style;
pub mod theme;

pub use baseline::GlobalBaseline;
pub use brand::{AssetRegistry, BrandMark, BrandMarkElement};
pub use colors::{BayenColors, PaletteTokens};
pub use components::{ComponentKind, ComponentStyleRule};
pub use config::ThemeSettings;
pub use error::{Result, ThemeError};
pub use fonts::{FontChain, Typography, TypographyTokens};
pub use spacing::{Motion, Spacing};
pub use theme::{ThemeConfig, ThemeFactory, ThemeMode};

/// Build the theme for a mode
pub fn build(mode: ThemeMode) -> ThemeConfig {
    ThemeFactory::build(mode)
}

/// Convenience function for the dark theme
pub fn dark_theme() -> ThemeConfig {
    build(ThemeMode::Dark)
}

/// Convenience function for the light theme
pub fn light_theme() -> ThemeConfig {
    build(ThemeMode::Light)
}

/// Common imports
pub mod prelude {
    pub use crate::brand::{AssetRegistry, BrandMark};
    pub use crate::components::{ButtonVariant, ComponentKind};
    pub use crate::error::{Result, ThemeError};
    pub use crate::theme::{ThemeConfig, ThemeFactory, ThemeMode};
}
