//! Avatar, badge and tooltip styles

use super::{ComponentKind, ComponentStyleRule, StyleBlock};
use crate::colors::{BayenColors, PaletteTokens};
use crate::spacing::Spacing;
use crate::style::{BoxShadow, Gradient, StyleValue};
use iced::widget::container::Style;
use iced::{Background, Border, Color, Radians, Shadow};

const BADGE_SHADOW: BoxShadow = BoxShadow::new(0.0, 2.0, 6.0, Color::from_rgba(0.0, 0.0, 0.0, 0.12));

/// Avatar rule: rounded square instead of a circle
pub fn avatar_rule() -> ComponentStyleRule {
    ComponentStyleRule::new(ComponentKind::Avatar)
        .block(StyleBlock::new("root").with("border-radius", StyleValue::Px(Spacing::RADIUS_MD)))
}

/// Badge rule
pub fn badge_rule(palette: &PaletteTokens) -> ComponentStyleRule {
    ComponentStyleRule::new(ComponentKind::Badge).block(
        StyleBlock::new("badge")
            .with("background", Gradient::linear(90.0, palette.badge_gradient))
            .with("color", BayenColors::WHITE)
            .with("box-shadow", BADGE_SHADOW),
    )
}

/// Tooltip rule
pub fn tooltip_rule(palette: &PaletteTokens) -> ComponentStyleRule {
    ComponentStyleRule::new(ComponentKind::Tooltip).block(
        StyleBlock::new("tooltip")
            .with("border-radius", StyleValue::Px(Spacing::RADIUS_SM))
            .with("background-color", palette.tooltip)
            .with("color", BayenColors::WHITE)
            .with("font-size", StyleValue::Rem(0.85)),
    )
}

/// Badge container style
pub fn badge_style(palette: &PaletteTokens) -> impl Fn(&iced::Theme) -> Style {
    let gradient = Gradient::linear(90.0, palette.badge_gradient);
    move |_theme| {
        let linear = gradient.offsets().into_iter().fold(
            iced::gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2)),
            |linear, (offset, color)| linear.add_stop(offset, color),
        );

        Style {
            background: Some(Background::Gradient(iced::Gradient::Linear(linear))),
            text_color: Some(BayenColors::WHITE),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: Spacing::RADIUS_MD.into(),
            },
            shadow: BADGE_SHADOW.into(),
        }
    }
}

/// Tooltip container style
pub fn tooltip_style(palette: &PaletteTokens) -> impl Fn(&iced::Theme) -> Style {
    let background = palette.tooltip;
    move |_theme| Style {
        background: Some(Background::Color(background)),
        text_color: Some(BayenColors::WHITE),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Spacing::RADIUS_SM.into(),
        },
        shadow: Shadow::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{DARK_PALETTE, LIGHT_PALETTE};

    #[test]
    fn test_tooltip_background_per_mode() {
        let css = |palette: &PaletteTokens| {
            tooltip_rule(palette)
                .slot("tooltip")
                .and_then(|b| b.get("background-color"))
                .map(ToString::to_string)
                .unwrap()
        };
        assert_eq!(css(&LIGHT_PALETTE), "#111111");
        assert_eq!(css(&DARK_PALETTE), "#222222");
    }

    #[test]
    fn test_tooltip_font_size() {
        let rule = tooltip_rule(&LIGHT_PALETTE);
        assert_eq!(
            rule.slot("tooltip").and_then(|b| b.get("font-size")),
            Some(&StyleValue::Rem(0.85))
        );
    }

    #[test]
    fn test_dark_badge_gradient() {
        let rule = badge_rule(&DARK_PALETTE);
        let background = rule.slot("badge").and_then(|b| b.get("background")).unwrap();
        assert_eq!(background.to_string(), "linear-gradient(90deg, #9a7cff, #4f5bd5)");
    }

    #[test]
    fn test_iced_tooltip_style() {
        let style = tooltip_style(&DARK_PALETTE)(&iced::Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(BayenColors::SLATE)));
        assert_eq!(style.text_color, Some(BayenColors::WHITE));
    }

    #[test]
    fn test_iced_badge_is_gradient() {
        let style = badge_style(&LIGHT_PALETTE)(&iced::Theme::Light);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
    }
}
