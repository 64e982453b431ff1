//! Button styles
//!
//! The contained primary action is the only rule with an interaction state:
//! on hover its oversized gradient slides to the far end and the button lifts
//! by a pixel. Both are declarative transitions the renderer plays.

use super::{ComponentKind, ComponentStyleRule, InteractionState, PropValue, StyleBlock};
use crate::colors::{with_alpha, BayenColors, PaletteTokens};
use crate::spacing::{Motion, Spacing};
use crate::style::{Gradient, StyleValue, Transform, Transition};
use iced::gradient::Linear;
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Radians, Shadow, Vector};

/// Button variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Contained primary action with the accent gradient
    #[default]
    Primary,
    /// Outlined secondary action
    Outlined,
}

/// Button rule
pub fn button_rule(palette: &PaletteTokens) -> ComponentStyleRule {
    ComponentStyleRule::new(ComponentKind::Button)
        .block(
            StyleBlock::new("root")
                .with("border-radius", StyleValue::Px(Spacing::RADIUS_MD))
                .with("text-transform", StyleValue::Keyword("none"))
                .with("padding-left", StyleValue::Px(Spacing::BUTTON_PADDING_X))
                .with("padding-right", StyleValue::Px(Spacing::BUTTON_PADDING_X))
                .with("box-shadow", StyleValue::Keyword("none")),
        )
        .block(
            StyleBlock::new("containedPrimary")
                .with(
                    "background-image",
                    Gradient::linear(90.0, palette.action_gradient),
                )
                .with("color", BayenColors::WHITE)
                .with("background-size", StyleValue::Percents(200.0, 200.0))
                .with(
                    "transition",
                    StyleValue::Transitions(vec![
                        Transition::ease("background-position", Motion::GRADIENT_SWEEP_MS),
                        Transition::ease("transform", Motion::LIFT_MS),
                    ]),
                ),
        )
        .block(
            StyleBlock::new("containedPrimary")
                .on(InteractionState::Hover)
                .with("background-position", StyleValue::Percents(100.0, 0.0))
                .with("transform", Transform::TranslateY(-Spacing::HOVER_LIFT)),
        )
        .block(StyleBlock::new("outlined").with("border-radius", StyleValue::Px(Spacing::RADIUS_MD)))
        .default_prop("disableElevation", PropValue::Bool(true))
}

/// Create a button style function for the given variant
pub fn button_style(
    palette: &PaletteTokens,
    variant: ButtonVariant,
) -> impl Fn(&iced::Theme, Status) -> Style {
    let palette = *palette;
    move |_theme, status| match variant {
        ButtonVariant::Primary => primary_style(&palette, status),
        ButtonVariant::Outlined => outlined_style(&palette, status),
    }
}

fn primary_style(palette: &PaletteTokens, status: Status) -> Style {
    // The CSS gradient is twice the button's width; a native button shows the
    // half that is currently in view.
    let (shift, shadow, text) = match status {
        Status::Active | Status::Pressed => (0.0, Shadow::default(), BayenColors::WHITE),
        Status::Hovered => (
            0.5,
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                offset: Vector::new(0.0, Spacing::HOVER_LIFT),
                blur_radius: 4.0,
            },
            BayenColors::WHITE,
        ),
        Status::Disabled => (0.0, Shadow::default(), with_alpha(BayenColors::WHITE, 0.5)),
    };

    let mut background = visible_half(palette, shift);
    if status == Status::Disabled {
        background = background.scale_alpha(0.4);
    }

    Style {
        background: Some(background),
        text_color: text,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Spacing::RADIUS_MD.into(),
        },
        shadow,
    }
}

fn outlined_style(palette: &PaletteTokens, status: Status) -> Style {
    let accent = palette.primary.main;
    let (background, border_color, text) = match status {
        Status::Active => (Color::TRANSPARENT, with_alpha(accent, 0.5), accent),
        Status::Hovered => (with_alpha(accent, 0.08), accent, accent),
        Status::Pressed => (with_alpha(accent, 0.16), accent, accent),
        Status::Disabled => (
            Color::TRANSPARENT,
            with_alpha(palette.text.primary, 0.12),
            with_alpha(palette.text.primary, 0.38),
        ),
    };

    Style {
        background: Some(Background::Color(background)),
        text_color: text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: Spacing::RADIUS_MD.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Half of the action gradient starting at `shift` (0.0 or 0.5)
fn visible_half(palette: &PaletteTokens, shift: f32) -> Background {
    let stops = Gradient::linear(90.0, palette.action_gradient).offsets();
    let linear = (0..5).fold(
        Linear::new(Radians(std::f32::consts::FRAC_PI_2)),
        |linear, i| {
            let t = i as f32 / 4.0;
            linear.add_stop(t, sample(&stops, shift + t * 0.5))
        },
    );
    Background::Gradient(iced::Gradient::Linear(linear))
}

/// Color of a stop list at `t`, interpolating linearly between stops
fn sample(stops: &[(f32, Color)], t: f32) -> Color {
    let Some(&(first_offset, first)) = stops.first() else {
        return Color::TRANSPARENT;
    };
    if t <= first_offset {
        return first;
    }

    for pair in stops.windows(2) {
        let (a_offset, a) = pair[0];
        let (b_offset, b) = pair[1];
        if t <= b_offset {
            let span = (b_offset - a_offset).max(f32::EPSILON);
            let k = (t - a_offset) / span;
            return Color::from_rgba(
                a.r + (b.r - a.r) * k,
                a.g + (b.g - a.g) * k,
                a.b + (b.b - a.b) * k,
                a.a + (b.a - a.a) * k,
            );
        }
    }

    stops.last().map(|&(_, c)| c).unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{DARK_PALETTE, LIGHT_PALETTE};

    #[test]
    fn test_hover_shifts_gradient_and_lifts() {
        let rule = button_rule(&LIGHT_PALETTE);
        let hover = rule
            .find("containedPrimary", Some(InteractionState::Hover), None)
            .expect("hover block");
        assert_eq!(
            hover.get("background-position"),
            Some(&StyleValue::Percents(100.0, 0.0))
        );
        assert_eq!(
            hover.get("transform").map(ToString::to_string).as_deref(),
            Some("translateY(-1px)")
        );
    }

    #[test]
    fn test_primary_gradient_follows_palette() {
        let light = button_rule(&LIGHT_PALETTE);
        let dark = button_rule(&DARK_PALETTE);
        let image = |rule: &ComponentStyleRule| {
            rule.slot("containedPrimary")
                .and_then(|b| b.get("background-image"))
                .map(ToString::to_string)
                .unwrap()
        };
        assert!(image(&light).contains("#feda75 0%"));
        assert_eq!(
            image(&dark),
            "linear-gradient(90deg, rgba(154, 124, 255, 0.95), rgba(79, 91, 213, 0.95))"
        );
    }

    #[test]
    fn test_only_primary_has_state_block() {
        let rule = button_rule(&DARK_PALETTE);
        let stateful: Vec<_> = rule.blocks.iter().filter(|b| b.state.is_some()).collect();
        assert_eq!(stateful.len(), 1);
        assert_eq!(stateful[0].slot, "containedPrimary");
    }

    #[test]
    fn test_sample_interpolates() {
        let stops = [(0.0, Color::BLACK), (1.0, Color::WHITE)];
        let mid = sample(&stops, 0.5);
        assert!((mid.r - 0.5).abs() < 0.001);
        assert_eq!(sample(&stops, 2.0), Color::WHITE);
    }

    #[test]
    fn test_iced_primary_hover_lifts() {
        let style = button_style(&LIGHT_PALETTE, ButtonVariant::Primary);
        let theme = iced::Theme::Light;
        let rest = style(&theme, Status::Active);
        let hovered = style(&theme, Status::Hovered);
        assert_eq!(rest.shadow.offset.y, 0.0);
        assert!(hovered.shadow.offset.y > 0.0);
        assert_ne!(rest.background, hovered.background);
    }

    #[test]
    fn test_iced_outlined_uses_accent() {
        let style = button_style(&DARK_PALETTE, ButtonVariant::Outlined);
        let hovered = style(&iced::Theme::Dark, Status::Hovered);
        assert_eq!(hovered.border.color, DARK_PALETTE.primary.main);
        assert_eq!(hovered.text_color, DARK_PALETTE.primary.main);
    }
}
