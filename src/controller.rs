// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection and walkthrough navigation.
//!
//! The controller owns the single [`Selection`] value and the tracker, and is
//! the only place selection transitions happen. Navigation follows the
//! authored walkthrough order, which may diverge from visual layout.

use crate::model::{ContentGraph, Node, NodeId, PanelKey, Selection};
use crate::track::Tracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

pub struct SelectionController {
    selection: Selection,
    tracker: Box<dyn Tracker>,
}

impl SelectionController {
    pub fn new(tracker: Box<dyn Tracker>) -> Self {
        Self {
            selection: Selection::None,
            tracker,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selects a node, replacing any panel. Re-selecting the already selected
    /// node neither changes state nor emits a count. Unknown ids are ignored.
    /// Returns whether the selection changed.
    pub fn select_node(&mut self, graph: &ContentGraph, node_id: &NodeId) -> bool {
        let Some(node) = graph.node(node_id) else {
            return false;
        };
        if self.selection.selected_node() == Some(node_id) {
            return false;
        }
        self.tracker
            .count(&format!("node/{node_id}"), &format!("Node: {}", node.title()));
        self.selection = Selection::Node(node_id.clone());
        true
    }

    /// Opens a utility panel, replacing any node selection. Unlike node
    /// selection this always emits, re-open included.
    pub fn open_panel(&mut self, key: PanelKey) {
        self.tracker
            .count(&format!("panel/{key}"), &format!("Panel: {}", key.label()));
        self.selection = Selection::Panel(key);
    }

    /// Clears whatever is selected or open.
    pub fn close(&mut self) {
        self.selection = Selection::None;
    }

    /// Steps the walkthrough order from the selected node. No-op without a
    /// node selection; at either end of the order the selection stays put,
    /// with no wraparound. The nav count is emitted on every attempt with a
    /// node selected, boundary attempts included.
    pub fn navigate(&mut self, graph: &ContentGraph, direction: NavDirection) -> bool {
        if self.selection.selected_node().is_none() {
            return false;
        }
        let (path, title) = match direction {
            NavDirection::Next => ("nav/next", "Next node"),
            NavDirection::Previous => ("nav/prev", "Previous node"),
        };
        self.tracker.count(path, title);

        let Some(target) = self.neighbor(graph, direction) else {
            return false;
        };
        let target = target.node_id().clone();
        self.select_node(graph, &target)
    }

    /// The node one step away in the walkthrough order, if any. `None` when
    /// nothing is selected or the order ends there. A selected node outside
    /// the order sits before its start, so stepping forward enters at the
    /// first entry and stepping back goes nowhere.
    pub fn neighbor<'a>(
        &self,
        graph: &'a ContentGraph,
        direction: NavDirection,
    ) -> Option<&'a Node> {
        let current = self.selection.selected_node()?;
        let order = graph.node_order();
        let position = order.iter().position(|node_id| node_id == current);
        let target = match (position, direction) {
            (Some(idx), NavDirection::Next) => order.get(idx + 1),
            (Some(idx), NavDirection::Previous) => {
                idx.checked_sub(1).and_then(|idx| order.get(idx))
            }
            (None, NavDirection::Next) => order.first(),
            (None, NavDirection::Previous) => None,
        }?;
        graph.node(target)
    }

    /// Emits a count outside the selection lifecycle (contact links,
    /// reference clicks).
    pub fn track(&self, path: &str, title: &str) {
        self.tracker.count(path, title);
    }
}
