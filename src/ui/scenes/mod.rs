// SPDX-License-Identifier: MPL-2.0
//! The four illustration scenes.
//!
//! Each scene is a pure view function of the current selection, the animate
//! flag, and the connector pulse phase. Scenes hold no state of their own;
//! clicking a node emits [`Message::NodePressed`] and everything else flows
//! back down from the application state.

pub mod elements;
pub mod hardware;
pub mod ipo;
pub mod software;

use crate::i18n::fluent::I18n;
use crate::scene::{NodeId, Selection, Tab};
use crate::ui::components::node;
use iced::Element;

/// Contextual data shared by all scene renderers.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: &'a Selection,
    /// Connector pulse phase in `0.0..1.0`; `None` renders static arrows.
    pub pulse: Option<f32>,
}

/// Messages emitted by any scene.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    NodePressed(NodeId),
}

/// Renders the scene for the currently active tab.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    match ctx.selection.tab() {
        Tab::Ipo => ipo::view(&ctx),
        Tab::Elements => elements::view(&ctx),
        Tab::Hardware => hardware::view(&ctx),
        Tab::Software => software::view(&ctx),
    }
}

/// Shared node-card shorthand for the scene renderers.
fn node_card<'a>(ctx: &ViewContext<'_>, id: NodeId) -> Element<'a, Message> {
    node::view(
        node::ViewContext {
            i18n: ctx.i18n,
            active: ctx.selection.is_selected(id),
        },
        id,
        Message::NodePressed(id),
    )
}
