//! Text input styles

use super::{ComponentKind, ComponentStyleRule, InteractionState, PropValue, StyleBlock};
use crate::colors::{with_alpha, PaletteTokens};
use crate::spacing::Spacing;
use crate::style::StyleValue;
use iced::widget::text_input::{Status, Style};
use iced::{Background, Border};

/// Outline element drawn around an outlined input
pub const OUTLINE_PART: &str = "notched-outline";

/// Text input rule
///
/// The outline color steps up on hover and switches to the primary accent
/// while the input has focus.
pub fn text_input_rule(palette: &PaletteTokens) -> ComponentStyleRule {
    ComponentStyleRule::new(ComponentKind::TextInput)
        .block(
            StyleBlock::new("root")
                .with("border-radius", StyleValue::Px(Spacing::RADIUS_INPUT))
                .with("background-color", palette.input_fill),
        )
        .block(
            StyleBlock::new("root")
                .part(OUTLINE_PART)
                .with("border-color", palette.input_border),
        )
        .block(
            StyleBlock::new("root")
                .on(InteractionState::Hover)
                .part(OUTLINE_PART)
                .with("border-color", palette.input_border_hover),
        )
        .block(
            StyleBlock::new("root")
                .on(InteractionState::Focus)
                .part(OUTLINE_PART)
                .with("border-color", palette.primary.main),
        )
        .default_prop("variant", PropValue::Text("outlined"))
}

/// Create a text input style function
pub fn text_input_style(palette: &PaletteTokens) -> impl Fn(&iced::Theme, Status) -> Style {
    let palette = *palette;
    move |_theme, status| {
        let border_color = match status {
            Status::Active => palette.input_border,
            Status::Hovered => palette.input_border_hover,
            Status::Focused => palette.primary.main,
            Status::Disabled => with_alpha(palette.input_border, palette.input_border.a * 0.5),
        };

        Style {
            background: Background::Color(palette.input_fill),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: Spacing::RADIUS_INPUT.into(),
            },
            icon: palette.text.secondary,
            placeholder: palette.text.secondary,
            value: palette.text.primary,
            selection: with_alpha(palette.primary.main, 0.3),
        }
    }
}
