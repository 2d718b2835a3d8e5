// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for node hover hints.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Style for the tooltip container with good contrast and shadow.
///
/// Automatically adapts to light/dark theme for optimal visibility.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color, border_color) = if is_dark {
        (
            Color {
                a: 0.95,
                ..palette::GRAY_900
            },
            palette::GRAY_100,
            Color {
                a: 0.1,
                ..palette::WHITE
            },
        )
    } else {
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
            Color {
                a: 0.3,
                ..palette::GRAY_700
            },
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: border_color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` with a styled tooltip shown below it.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_container_has_background_and_text_color() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = tooltip_container(&theme);
            assert!(style.background.is_some());
            assert!(style.text_color.is_some());
        }
    }

    #[test]
    fn dark_theme_tooltip_stays_dark() {
        let style = tooltip_container(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("expected color background")
        };
        assert!(bg.r < 0.5);
    }
}
