// SPDX-License-Identifier: MPL-2.0
//! Header controls: the Animate and Auto toggles, the Clear button, and the
//! status pills.

use crate::i18n::fluent::I18n;
use crate::ui::components::pill;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment::Vertical, Element};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub animate: bool,
    pub auto_play: bool,
    pub has_selection: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    SetAnimate(bool),
    SetAutoPlay(bool),
    ClearPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    AnimateChanged(bool),
    AutoPlayChanged(bool),
    ClearSelection,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::SetAnimate(enabled) => Event::AnimateChanged(enabled),
        Message::SetAutoPlay(enabled) => Event::AutoPlayChanged(enabled),
        Message::ClearPressed => Event::ClearSelection,
    }
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let animate_key = if ctx.animate {
        "toolbar-animate-on"
    } else {
        "toolbar-animate-off"
    };
    let animate_button = button(Text::new(ctx.i18n.tr(animate_key)))
        .on_press(Message::SetAnimate(!ctx.animate))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::toggle(ctx.animate));

    // Distinct keys per state so the on/off labels translate separately.
    let auto_key = if ctx.auto_play {
        "toolbar-auto-on"
    } else {
        "toolbar-auto-off"
    };
    let auto_button = button(Text::new(ctx.i18n.tr(auto_key)))
        .on_press(Message::SetAutoPlay(!ctx.auto_play))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::toggle(ctx.auto_play));

    let clear_button = button(Text::new(ctx.i18n.tr("toolbar-clear")))
        .on_press(Message::ClearPressed)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::toggle(false));

    let selected_pill = pill::view(ctx.i18n.tr("status-selected"), ctx.has_selection);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(animate_button)
        .push(auto_button)
        .push(clear_button)
        .push(selected_pill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_propagate_requested_state() {
        assert!(matches!(
            update(Message::SetAnimate(false)),
            Event::AnimateChanged(false)
        ));
        assert!(matches!(
            update(Message::SetAutoPlay(true)),
            Event::AutoPlayChanged(true)
        ));
    }

    #[test]
    fn clear_emits_clear_selection() {
        assert!(matches!(
            update(Message::ClearPressed),
            Event::ClearSelection
        ));
    }

    #[test]
    fn toolbar_view_renders_in_every_state() {
        let i18n = I18n::default();
        for animate in [false, true] {
            for auto_play in [false, true] {
                let _element = view(ViewContext {
                    i18n: &i18n,
                    animate,
                    auto_play,
                    has_selection: animate,
                });
            }
        }
    }
}
