// SPDX-License-Identifier: MPL-2.0
//! Scene 2: the elements of a computer system.

use super::{node_card, Message, ViewContext};
use crate::scene::NodeId;
use crate::ui::components::card;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let banner = Container::new(
        Text::new(ctx.i18n.tr("elements-banner")).size(typography::TITLE_SM),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::callout);

    let triple_row = Row::new()
        .spacing(spacing::SM)
        .push(node_card(ctx, NodeId::Data))
        .push(node_card(ctx, NodeId::SoftwareElement))
        .push(node_card(ctx, NodeId::HardwareElement));

    let content = Column::new()
        .spacing(spacing::SM)
        .push(banner)
        .push(triple_row)
        .push(node_card(ctx, NodeId::Communication));

    card::view(
        ctx.i18n.tr("scene-elements-title"),
        ctx.i18n.tr("scene-elements-subtitle"),
        content.into(),
    )
}
