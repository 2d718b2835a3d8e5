// SPDX-License-Identifier: MPL-2.0
//! The selection state holder: active tab plus highlighted node.
//!
//! `set_tab` is the only operation with a coupled effect: it atomically
//! replaces the tab and resets the node to that tab's default, which is what
//! keeps the "selected node belongs to the active tab" invariant without the
//! holder validating membership on `set_node`.

use super::{NodeId, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    tab: Tab,
    node: Option<NodeId>,
}

impl Default for Selection {
    fn default() -> Self {
        let tab = Tab::default();
        Self {
            tab,
            node: Some(tab.default_node()),
        }
    }
}

impl Selection {
    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn is_selected(&self, node: NodeId) -> bool {
        self.node == Some(node)
    }

    /// Replaces the active tab and resets the node to the tab's default.
    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.node = Some(tab.default_node());
    }

    /// Sets the highlighted node. Callers are responsible for passing nodes
    /// that belong to the active tab.
    pub fn set_node(&mut self, node: Option<NodeId>) {
        self.node = node;
    }

    /// Clears the highlight without touching the active tab.
    pub fn clear(&mut self) {
        self.node = None;
    }
}
