//! Surface bar, card and panel styles

use super::{ComponentKind, ComponentStyleRule, StyleBlock};
use crate::colors::PaletteTokens;
use crate::spacing::Spacing;
use crate::style::StyleValue;
use iced::widget::container::Style;
use iced::{Background, Border, Color, Shadow};

/// Surface bar rule (top application bar)
pub fn surface_bar_rule(palette: &PaletteTokens) -> ComponentStyleRule {
    ComponentStyleRule::new(ComponentKind::SurfaceBar).block(
        StyleBlock::new("root")
            .with("background-color", palette.surface)
            .with("color", palette.text.primary)
            .with("box-shadow", palette.bar_shadow)
            .with("backdrop-filter", StyleValue::Blur(Spacing::BAR_BLUR)),
    )
}

/// Card rule
pub fn card_rule(palette: &PaletteTokens) -> ComponentStyleRule {
    ComponentStyleRule::new(ComponentKind::Card).block(
        StyleBlock::new("root")
            .with("border-radius", StyleValue::Px(Spacing::RADIUS_LG))
            .with("box-shadow", palette.card_shadow)
            .with("background", palette.surface),
    )
}

/// Panel rule; shape only, colors come from the palette's paper tone
pub fn panel_rule() -> ComponentStyleRule {
    ComponentStyleRule::new(ComponentKind::Panel)
        .block(StyleBlock::new("root").with("border-radius", StyleValue::Px(Spacing::RADIUS_MD)))
}

/// Surface bar container style
pub fn surface_bar_style(palette: &PaletteTokens) -> impl Fn(&iced::Theme) -> Style {
    let palette = *palette;
    move |_theme| Style {
        background: Some(Background::Color(palette.surface)),
        text_color: Some(palette.text.primary),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        shadow: palette.bar_shadow.into(),
    }
}

/// Card container style
pub fn card_style(palette: &PaletteTokens) -> impl Fn(&iced::Theme) -> Style {
    let palette = *palette;
    move |_theme| Style {
        background: Some(Background::Color(palette.surface)),
        text_color: Some(palette.text.primary),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Spacing::RADIUS_LG.into(),
        },
        shadow: palette.card_shadow.into(),
    }
}

/// Panel container style
pub fn panel_style(palette: &PaletteTokens) -> impl Fn(&iced::Theme) -> Style {
    let palette = *palette;
    move |_theme| Style {
        background: Some(Background::Color(palette.background.paper)),
        text_color: Some(palette.text.primary),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Spacing::RADIUS_MD.into(),
        },
        shadow: Shadow::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BayenColors, DARK_PALETTE, LIGHT_PALETTE};

    #[test]
    fn test_surface_bar_light_is_white_with_soft_shadow() {
        let rule = surface_bar_rule(&LIGHT_PALETTE);
        let root = rule.slot("root").unwrap();
        assert_eq!(root.get("background-color"), Some(&StyleValue::Color(BayenColors::WHITE)));
        assert_eq!(
            root.get("box-shadow").map(ToString::to_string).as_deref(),
            Some("0 1px 6px rgba(16, 24, 40, 0.08)")
        );
        assert_eq!(
            root.get("backdrop-filter").map(ToString::to_string).as_deref(),
            Some("blur(6px)")
        );
    }

    #[test]
    fn test_card_dark_surface() {
        let rule = card_rule(&DARK_PALETTE);
        let root = rule.slot("root").unwrap();
        assert_eq!(root.get("background"), Some(&StyleValue::Color(BayenColors::CARBON)));
        assert_eq!(root.get("border-radius"), Some(&StyleValue::Px(16.0)));
    }

    #[test]
    fn test_iced_card_matches_rule() {
        let style = card_style(&DARK_PALETTE)(&iced::Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(BayenColors::CARBON)));
        assert_eq!(style.shadow.blur_radius, 18.0);
        assert_eq!(style.shadow.offset.y, 6.0);
    }

    #[test]
    fn test_iced_surface_bar() {
        let style = surface_bar_style(&LIGHT_PALETTE)(&iced::Theme::Light);
        assert_eq!(style.background, Some(Background::Color(BayenColors::WHITE)));
        assert_eq!(style.text_color, Some(LIGHT_PALETTE.text.primary));
        assert_eq!(style.shadow.blur_radius, 6.0);
    }

    #[test]
    fn test_iced_panel_uses_paper() {
        let style = panel_style(&DARK_PALETTE)(&iced::Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(DARK_PALETTE.background.paper)));
    }
}
