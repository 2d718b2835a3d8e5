// SPDX-License-Identifier: MPL-2.0
//! Small rounded badge used for node badges and status chips.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::Element;

pub fn view<'a, Message: 'a>(label: String, active: bool) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS + 2.0])
        .style(styles::container::pill(active))
        .into()
}
