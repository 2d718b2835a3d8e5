// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Tab buttons, toolbar toggles, and node cards share the same translucent
//! surface language: a faint tint at rest, a stronger tint plus border when
//! active, derived from the active Iced theme so both light and dark modes
//! stay readable.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn surface(theme: &Theme, alpha: f32) -> Color {
    let base = theme.extended_palette().background.base.text;
    Color { a: alpha, ..base }
}

/// Style for tab-strip and toolbar toggle buttons.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let alpha = match (active, status) {
            (true, _) => opacity::SURFACE_ACTIVE,
            (false, button::Status::Hovered | button::Status::Pressed) => opacity::SURFACE_ACTIVE,
            (false, _) => opacity::SURFACE_FAINT,
        };
        let border_color = if active {
            Color {
                a: 0.7,
                ..palette::INDIGO_400
            }
        } else {
            surface(theme, opacity::LINE_FAINT / 2.0)
        };

        button::Style {
            background: Some(Background::Color(surface(theme, alpha))),
            text_color: extended.background.base.text,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: if active { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Style for the clickable node cards inside scenes.
pub fn node(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let alpha = match (active, status) {
            (true, _) => opacity::SURFACE_ACTIVE,
            (false, button::Status::Hovered | button::Status::Pressed) => opacity::SURFACE_ACTIVE,
            (false, _) => opacity::SURFACE_FAINT,
        };
        let border_color = if active {
            Color {
                a: 0.7,
                ..palette::INDIGO_400
            }
        } else {
            surface(theme, opacity::LINE_FAINT / 2.0)
        };

        button::Style {
            background: Some(Background::Color(surface(theme, alpha))),
            text_color: extended.background.base.text,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: if active { shadow::MD } else { shadow::NONE },
            snap: true,
        }
    }
}
