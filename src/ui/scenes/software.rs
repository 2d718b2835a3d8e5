// SPDX-License-Identifier: MPL-2.0
//! Scene 4: application software layered over system software.

use super::{node_card, Message, ViewContext};
use crate::i18n::fluent::I18n;
use crate::scene::NodeId;
use crate::ui::components::{card, connector, pill};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

fn callout<'a>(i18n: &I18n, title_key: &str, desc_key: &str) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr(title_key)).size(typography::BODY_SM))
        .push(Text::new(i18n.tr(desc_key)).size(typography::CAPTION));

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::callout)
        .into()
}

pub fn view<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let application_layer = Column::new()
        .spacing(spacing::XS)
        .push(node_card(ctx, NodeId::ApplicationSoftware))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(pill::view(ctx.i18n.tr("software-pill-browser"), false)),
        );

    let down_arrow = Container::new(connector::down(ctx.pulse))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let system_pills = Row::new()
        .spacing(spacing::XS)
        .push(pill::view(ctx.i18n.tr("software-pill-os"), false))
        .push(pill::view(ctx.i18n.tr("software-pill-api"), false))
        .push(pill::view(ctx.i18n.tr("software-pill-kernel"), false));

    let callouts = Row::new()
        .spacing(spacing::SM)
        .push(callout(ctx.i18n, "callout-api-title", "callout-api-desc"))
        .push(callout(ctx.i18n, "callout-kernel-title", "callout-kernel-desc"));

    let system_layer = Column::new()
        .spacing(spacing::XS)
        .push(node_card(ctx, NodeId::SystemSoftware))
        .push(system_pills)
        .push(callouts);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(application_layer)
        .push(down_arrow)
        .push(system_layer);

    card::view(
        ctx.i18n.tr("scene-software-title"),
        ctx.i18n.tr("scene-software-subtitle"),
        content.into(),
    )
}
