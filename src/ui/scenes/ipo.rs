// SPDX-License-Identifier: MPL-2.0
//! Scene 1: the Input-Process-Output model, with storage fed from Process.

use super::{node_card, Message, ViewContext};
use crate::scene::NodeId;
use crate::ui::components::{card, connector};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let fixed = |content: Element<'a, Message>| {
        Container::new(content).width(Length::Fixed(sizing::NODE_WIDTH))
    };

    // Input -> Process -> Output across the top.
    let flow_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(fixed(node_card(ctx, NodeId::Input)))
        .push(connector::right(ctx.pulse))
        .push(fixed(node_card(ctx, NodeId::Process)))
        .push(connector::right(ctx.pulse))
        .push(fixed(node_card(ctx, NodeId::Output)));

    // Storage hangs under Process and feeds back into it.
    let storage_column = Column::new()
        .width(Length::Fixed(sizing::NODE_WIDTH))
        .align_x(iced::alignment::Horizontal::Center)
        .push(connector::down(ctx.pulse))
        .push(node_card(ctx, NodeId::Storage))
        .push(
            Container::new(
                Text::new(ctx.i18n.tr("ipo-storage-caption"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .padding([spacing::XXS, 0.0]),
        );

    let storage_row = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fixed(
            sizing::NODE_WIDTH + sizing::CONNECTOR + spacing::SM,
        )))
        .push(storage_column);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(flow_row)
        .push(storage_row);

    card::view(
        ctx.i18n.tr("scene-ipo-title"),
        ctx.i18n.tr("scene-ipo-subtitle"),
        content.into(),
    )
}
