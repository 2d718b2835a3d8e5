// SPDX-License-Identifier: MPL-2.0
//! Scene card: titled surface each scene renders into.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(
    title: String,
    subtitle: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(Text::new(subtitle).size(typography::BODY));

    let body = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(content);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
