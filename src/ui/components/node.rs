// SPDX-License-Identifier: MPL-2.0
//! Clickable node card: title, optional badge and description, hover tooltip.

use crate::i18n::fluent::I18n;
use crate::scene::NodeId;
use crate::ui::components::pill;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Column, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render a node.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: bool,
}

/// Renders one node as a full-width clickable card. Pressing it emits
/// `on_press`, which the app routes to the selection holder.
pub fn view<'a, Message: Clone + 'a>(
    ctx: ViewContext<'_>,
    id: NodeId,
    on_press: Message,
) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr(&id.title_key())).size(typography::TITLE_SM);
    let badge = pill::view(ctx.i18n.tr(&id.badge_key()), ctx.active);

    let header = Row::new()
        .spacing(spacing::SM)
        .push(title)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(badge);

    let body = Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(Text::new(ctx.i18n.tr(&id.desc_key())).size(typography::BODY_SM));

    let card = button(body)
        .on_press(on_press)
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .style(styles::button::node(ctx.active));

    styles::tooltip::styled(card, ctx.i18n.tr(&id.tooltip_key()), tooltip::Position::Bottom).into()
}
