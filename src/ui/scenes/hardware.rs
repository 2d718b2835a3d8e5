// SPDX-License-Identifier: MPL-2.0
//! Scene 3: hardware components grouped by role.
//!
//! Unlike the other scenes, a hardware "node" is a whole group box listing
//! its member devices, with a count badge. The display order (input, output,
//! processing, primary, secondary) intentionally differs from the auto-play
//! order, which follows the data path instead.

use super::{Message, ViewContext};
use crate::i18n::fluent::I18n;
use crate::scene::NodeId;
use crate::ui::components::{card, pill};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Space, Text};
use iced::{Element, Length};

const DISPLAY_ORDER: [NodeId; 5] = [
    NodeId::InputDevices,
    NodeId::OutputDevices,
    NodeId::Cpu,
    NodeId::PrimaryStorage,
    NodeId::SecondaryStorage,
];

/// i18n keys of the devices listed inside each group.
fn group_items(id: NodeId) -> &'static [&'static str] {
    match id {
        NodeId::InputDevices => &["hardware-item-keyboard", "hardware-item-mouse"],
        NodeId::OutputDevices => &["hardware-item-monitor", "hardware-item-printer"],
        NodeId::Cpu => &["hardware-item-cpu"],
        NodeId::PrimaryStorage => &["hardware-item-ram", "hardware-item-cache"],
        NodeId::SecondaryStorage => &[
            "hardware-item-hdd",
            "hardware-item-ssd",
            "hardware-item-flash",
        ],
        _ => &[],
    }
}

fn group<'a>(i18n: &I18n, id: NodeId, active: bool) -> Element<'a, Message> {
    let items = group_items(id);

    let header = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr(&id.title_key())).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(pill::view(items.len().to_string(), active));

    let mut list = Column::new().spacing(spacing::XXS);
    for item in items {
        list = list.push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new("•").size(typography::BODY_SM))
                .push(Text::new(i18n.tr(item)).size(typography::BODY_SM)),
        );
    }

    let body = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(list);

    button(body)
        .on_press(Message::NodePressed(id))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::button::node(active))
        .into()
}

pub fn view<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::SM);

    // Two groups per row.
    for pair in DISPLAY_ORDER.chunks(2) {
        let mut row = Row::new().spacing(spacing::SM);
        for id in pair {
            row = row.push(group(ctx.i18n, *id, ctx.selection.is_selected(*id)));
        }
        grid = grid.push(row);
    }

    card::view(
        ctx.i18n.tr("scene-hardware-title"),
        ctx.i18n.tr("scene-hardware-subtitle"),
        grid.into(),
    )
}
