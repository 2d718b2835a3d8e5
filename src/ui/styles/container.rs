// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn surface(theme: &Theme, alpha: f32) -> Color {
    let base = theme.extended_palette().background.base.text;
    Color { a: alpha, ..base }
}

/// Scene card surface: faint tint, large radius, soft shadow.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme, opacity::SURFACE_FAINT))),
        border: Border {
            color: surface(theme, opacity::LINE_FAINT / 2.0),
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Darker inset panel used for the "Computer System" banner and the
/// API/Kernel callouts.
pub fn callout(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..Color {
                r: base.r * 0.5,
                g: base.g * 0.5,
                b: base.b * 0.5,
                a: 1.0,
            }
        })),
        border: Border {
            color: surface(theme, opacity::LINE_FAINT / 2.0),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Rounded pill outline for badges and status chips.
pub fn pill(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let alpha = if active {
            opacity::SURFACE_ACTIVE
        } else {
            opacity::SURFACE_FAINT
        };
        let border_color = if active {
            Color {
                a: 0.7,
                ..palette::INDIGO_400
            }
        } else {
            surface(theme, opacity::LINE_FAINT / 2.0)
        };

        container::Style {
            background: Some(Background::Color(surface(theme, alpha))),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_has_background_and_border() {
        let style = card(&Theme::Dark);
        assert!(style.background.is_some());
        assert!(style.border.width > 0.0);
    }

    #[test]
    fn active_pill_is_stronger() {
        let alpha = |style: container::Style| match style.background {
            Some(Background::Color(c)) => c.a,
            _ => panic!("expected color background"),
        };
        assert!(alpha(pill(true)(&Theme::Dark)) > alpha(pill(false)(&Theme::Dark)));
    }
}
