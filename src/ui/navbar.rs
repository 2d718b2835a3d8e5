// SPDX-License-Identifier: MPL-2.0
//! Tab strip for switching between the four illustration scenes.

use crate::i18n::fluent::I18n;
use crate::scene::Tab;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::Element;

/// Contextual data needed to render the tab strip.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active_tab: Tab,
}

/// Messages emitted by the tab strip.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    TabPressed(Tab),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    TabSelected(Tab),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::TabPressed(tab) => Event::TabSelected(tab),
    }
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for tab in Tab::ALL {
        let label = Text::new(ctx.i18n.tr(tab.label_key()));
        let is_active = tab == ctx.active_tab;
        row = row.push(
            button(label)
                .on_press(Message::TabPressed(tab))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::toggle(is_active)),
        );
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_press_emits_selection_event() {
        let Event::TabSelected(tab) = update(Message::TabPressed(Tab::Hardware));
        assert_eq!(tab, Tab::Hardware);
    }

    #[test]
    fn navbar_view_renders_for_every_active_tab() {
        let i18n = I18n::default();
        for tab in Tab::ALL {
            let _element = view(ViewContext {
                i18n: &i18n,
                active_tab: tab,
            });
        }
    }
}
