// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::NodeId;

/// What the viewer is currently focused on.
///
/// Node selection and an active utility panel are mutually exclusive by
/// construction; there is no state in which both exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Node(NodeId),
    Panel(PanelKey),
}

impl Selection {
    pub fn selected_node(&self) -> Option<&NodeId> {
        match self {
            Self::Node(node_id) => Some(node_id),
            _ => None,
        }
    }

    pub fn active_panel(&self) -> Option<PanelKey> {
        match self {
            Self::Panel(key) => Some(*key),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// One of the fixed static informational panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PanelKey {
    About,
    Contact,
    References,
    Help,
}

impl PanelKey {
    pub const ALL: [PanelKey; 4] = [
        PanelKey::About,
        PanelKey::Contact,
        PanelKey::References,
        PanelKey::Help,
    ];

    /// Stable key used in tracking paths (`panel/<key>`).
    pub fn key(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Contact => "contact",
            Self::References => "references",
            Self::Help => "help",
        }
    }

    /// Short label shown on the tab strip.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Contact => "Contact",
            Self::References => "References",
            Self::Help => "Help",
        }
    }

    /// Title shown when the panel is open.
    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About This Project",
            Self::Contact => "Contact & Collaborate",
            Self::References => "References",
            Self::Help => "How to Use",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|panel| panel.key() == key)
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::{PanelKey, Selection};
    use crate::model::NodeId;

    #[test]
    fn selection_variants_are_mutually_exclusive() {
        let node_id = NodeId::new("a").expect("node id");

        let selection = Selection::Node(node_id.clone());
        assert_eq!(selection.selected_node(), Some(&node_id));
        assert_eq!(selection.active_panel(), None);

        let selection = Selection::Panel(PanelKey::Help);
        assert_eq!(selection.selected_node(), None);
        assert_eq!(selection.active_panel(), Some(PanelKey::Help));

        assert!(Selection::None.is_none());
    }

    #[test]
    fn panel_keys_round_trip() {
        for panel in PanelKey::ALL {
            assert_eq!(PanelKey::from_key(panel.key()), Some(panel));
        }
        assert_eq!(PanelKey::from_key("nope"), None);
    }
}
