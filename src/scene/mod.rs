// SPDX-License-Identifier: MPL-2.0
//! Scene vocabulary: the four illustration tabs, their selectable nodes,
//! default selections, and the fixed auto-play sequence tables.
//!
//! Everything here is static data fixed at build time. The interactive state
//! built on top of it lives in [`selection`] and [`playback`].

pub mod playback;
pub mod selection;

pub use playback::Playback;
pub use selection::Selection;

/// One of the four top-level illustration scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Ipo,
    Elements,
    Hardware,
    Software,
}

/// A selectable, labeled region within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    // IPO model
    Input,
    Process,
    Storage,
    Output,
    // System elements
    Data,
    SoftwareElement,
    HardwareElement,
    Communication,
    // Hardware groups
    InputDevices,
    Cpu,
    PrimaryStorage,
    SecondaryStorage,
    OutputDevices,
    // Software layers
    ApplicationSoftware,
    SystemSoftware,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Ipo, Tab::Elements, Tab::Hardware, Tab::Software];

    /// Stable identifier used for CLI parsing and i18n key derivation.
    pub fn slug(self) -> &'static str {
        match self {
            Tab::Ipo => "ipo",
            Tab::Elements => "elements",
            Tab::Hardware => "hardware",
            Tab::Software => "software",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.slug() == slug)
    }

    /// i18n key for the tab button label.
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Ipo => "tab-ipo",
            Tab::Elements => "tab-elements",
            Tab::Hardware => "tab-hardware",
            Tab::Software => "tab-software",
        }
    }

    /// Node highlighted when the tab is first selected.
    pub fn default_node(self) -> NodeId {
        match self {
            Tab::Ipo => NodeId::Process,
            Tab::Elements => NodeId::SoftwareElement,
            Tab::Hardware => NodeId::Cpu,
            Tab::Software => NodeId::SystemSoftware,
        }
    }

    /// Ordered node list the auto-play sequencer cycles through.
    pub fn sequence(self) -> &'static [NodeId] {
        match self {
            Tab::Ipo => &[NodeId::Input, NodeId::Process, NodeId::Storage, NodeId::Output],
            Tab::Elements => &[
                NodeId::Data,
                NodeId::SoftwareElement,
                NodeId::HardwareElement,
                NodeId::Communication,
            ],
            Tab::Hardware => &[
                NodeId::InputDevices,
                NodeId::Cpu,
                NodeId::PrimaryStorage,
                NodeId::SecondaryStorage,
                NodeId::OutputDevices,
            ],
            Tab::Software => &[NodeId::ApplicationSoftware, NodeId::SystemSoftware],
        }
    }

    /// Whether `node` belongs to this tab's vocabulary.
    pub fn contains(self, node: NodeId) -> bool {
        self.sequence().contains(&node)
    }
}

impl NodeId {
    /// Stable identifier used for i18n key derivation.
    pub fn slug(self) -> &'static str {
        match self {
            NodeId::Input => "input",
            NodeId::Process => "process",
            NodeId::Storage => "storage",
            NodeId::Output => "output",
            NodeId::Data => "data",
            NodeId::SoftwareElement => "software",
            NodeId::HardwareElement => "hardware",
            NodeId::Communication => "communication",
            NodeId::InputDevices => "input-devices",
            NodeId::Cpu => "cpu",
            NodeId::PrimaryStorage => "primary-storage",
            NodeId::SecondaryStorage => "secondary-storage",
            NodeId::OutputDevices => "output-devices",
            NodeId::ApplicationSoftware => "app-software",
            NodeId::SystemSoftware => "system-software",
        }
    }

    /// The tab whose vocabulary this node belongs to.
    pub fn tab(self) -> Tab {
        match self {
            NodeId::Input | NodeId::Process | NodeId::Storage | NodeId::Output => Tab::Ipo,
            NodeId::Data
            | NodeId::SoftwareElement
            | NodeId::HardwareElement
            | NodeId::Communication => Tab::Elements,
            NodeId::InputDevices
            | NodeId::Cpu
            | NodeId::PrimaryStorage
            | NodeId::SecondaryStorage
            | NodeId::OutputDevices => Tab::Hardware,
            NodeId::ApplicationSoftware | NodeId::SystemSoftware => Tab::Software,
        }
    }

    pub fn title_key(self) -> String {
        format!("node-{}-title", self.slug())
    }

    pub fn desc_key(self) -> String {
        format!("node-{}-desc", self.slug())
    }

    pub fn badge_key(self) -> String {
        format!("node-{}-badge", self.slug())
    }

    pub fn tooltip_key(self) -> String {
        format!("node-{}-tip", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sequence_is_non_empty() {
        for tab in Tab::ALL {
            assert!(!tab.sequence().is_empty(), "{:?} has an empty sequence", tab);
        }
    }

    #[test]
    fn default_node_belongs_to_its_tab() {
        for tab in Tab::ALL {
            assert!(tab.contains(tab.default_node()));
        }
    }

    #[test]
    fn sequences_partition_the_vocabulary() {
        for tab in Tab::ALL {
            for node in tab.sequence() {
                assert_eq!(node.tab(), tab);
            }
        }
    }

    #[test]
    fn sequences_have_no_duplicates() {
        for tab in Tab::ALL {
            let seq = tab.sequence();
            for (i, node) in seq.iter().enumerate() {
                assert!(!seq[i + 1..].contains(node));
            }
        }
    }

    #[test]
    fn slug_round_trips() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_slug(tab.slug()), Some(tab));
        }
        assert_eq!(Tab::from_slug("unknown"), None);
    }

    #[test]
    fn initial_tab_is_ipo_with_process_default() {
        assert_eq!(Tab::default(), Tab::Ipo);
        assert_eq!(Tab::default().default_node(), NodeId::Process);
    }

    #[test]
    fn hardware_sequence_starts_with_input_devices_then_cpu() {
        let seq = Tab::Hardware.sequence();
        assert_eq!(seq[0], NodeId::InputDevices);
        assert_eq!(seq[1], NodeId::Cpu);
        assert_eq!(*seq.last().unwrap(), NodeId::OutputDevices);
    }
}
