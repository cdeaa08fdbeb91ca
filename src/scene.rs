// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scene construction.
//!
//! [`build_scene`] converts the content graph into a description of visual
//! primitives with no rendering surface attached. The TUI rasterizes the scene
//! separately (`render` module), so geometry and highlighting stay testable
//! headless.
//!
//! The scene is built once per content load. Selection changes only go through
//! [`Scene::apply_highlight`], an idempotent pass over the node outlines.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::geometry::{self, EdgeLabelAnchor, EdgePath, NodeRect};
use crate::model::{ContentGraph, LaneId, NodeId, Selection};

/// Horizontal padding of a lane band beyond its nodes' extent.
const BAND_PAD_X: f64 = 16.0;
/// Fixed vertical bounds of every lane band.
const BAND_TOP: f64 = 10.0;
const BAND_HEIGHT: f64 = 490.0;
/// Distance of a lane label above the lane's topmost node.
const LANE_LABEL_LIFT: f64 = 18.0;
/// Vertical spacing of stacked edge label lines.
pub const EDGE_LABEL_LINE_SPACING: f64 = 18.0;
/// Label baseline for a single-line node label, from the node top.
const NODE_LABEL_SINGLE_Y: f64 = 40.0;
/// First baseline for a multi-line node label, from the node top.
const NODE_LABEL_FIRST_Y: f64 = 26.0;
/// Vertical spacing of stacked node label lines.
const NODE_LABEL_LINE_SPACING: f64 = 21.0;
/// Left inset of node label text.
const NODE_LABEL_INSET_X: f64 = 14.0;
/// Accent stripe geometry on the node's left edge.
const ACCENT_WIDTH: f64 = 3.5;
const ACCENT_INSET_Y: f64 = 3.0;

/// Default node outline when not selected.
pub const DEFAULT_OUTLINE_COLOR: &str = "#1e2d3d";
/// Edge stroke color.
pub const EDGE_COLOR: &str = "#334155";
/// Edge label text color.
pub const EDGE_LABEL_COLOR: &str = "#475569";

#[derive(Debug, Clone, PartialEq)]
pub struct LaneBand {
    pub lane_id: LaneId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaneLabel {
    pub lane_id: LaneId,
    /// Horizontal center of the band.
    pub center_x: f64,
    pub y: f64,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub anchor: EdgeLabelAnchor,
    pub lines: Vec<String>,
}

/// A routed edge with an arrowhead at the target end.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCurve {
    pub path: EdgePath,
    pub label: Option<EdgeLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeOutline {
    pub color: String,
    pub emphasized: bool,
}

impl NodeOutline {
    fn default_outline() -> Self {
        Self {
            color: DEFAULT_OUTLINE_COLOR.to_owned(),
            emphasized: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub node_id: NodeId,
    pub rect: NodeRect,
    pub accent_color: String,
    pub label_lines: SmallVec<[String; 2]>,
    pub outline: NodeOutline,
}

impl NodeBox {
    /// Accent stripe rectangle `(x, y, width, height)` on the left edge.
    pub fn accent_rect(&self) -> (f64, f64, f64, f64) {
        (
            self.rect.x,
            self.rect.y + ACCENT_INSET_Y,
            ACCENT_WIDTH,
            geometry::NODE_HEIGHT - 2.0 * ACCENT_INSET_Y,
        )
    }

    /// Baselines of the label lines relative to the diagram, top to bottom.
    pub fn label_baselines(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let first = if self.label_lines.len() == 1 {
            NODE_LABEL_SINGLE_Y
        } else {
            NODE_LABEL_FIRST_Y
        };
        self.label_lines.iter().enumerate().map(move |(idx, _)| {
            (
                self.rect.x + NODE_LABEL_INSET_X,
                self.rect.y + first + idx as f64 * NODE_LABEL_LINE_SPACING,
            )
        })
    }
}

/// The full set of visual primitives for one content graph, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub bands: Vec<LaneBand>,
    pub lane_labels: Vec<LaneLabel>,
    pub edges: Vec<EdgeCurve>,
    pub nodes: Vec<NodeBox>,
}

impl Scene {
    /// Resets every node outline to the default, then applies one emphasized
    /// lane-colored outline to the selected node. Idempotent; an active
    /// utility panel (or no selection) highlights nothing.
    pub fn apply_highlight(&mut self, selection: &Selection) {
        for node in &mut self.nodes {
            node.outline = NodeOutline::default_outline();
        }
        let Some(node_id) = selection.selected_node() else {
            return;
        };
        if let Some(node) = self.nodes.iter_mut().find(|node| &node.node_id == node_id) {
            node.outline = NodeOutline {
                color: node.accent_color.clone(),
                emphasized: true,
            };
        }
    }

    pub fn node_box(&self, node_id: &NodeId) -> Option<&NodeBox> {
        self.nodes.iter().find(|node| &node.node_id == node_id)
    }
}

/// Builds the scene for a content graph.
///
/// Edges with a dangling endpoint are skipped, never an error.
pub fn build_scene(graph: &ContentGraph) -> Scene {
    let mut lane_extents = BTreeMap::<&LaneId, (f64, f64, f64)>::new();
    for node in graph.nodes() {
        let left = node.x();
        let right = node.x() + geometry::NODE_WIDTH;
        lane_extents
            .entry(node.lane_id())
            .and_modify(|(min_x, max_x, min_y)| {
                *min_x = min_x.min(left);
                *max_x = max_x.max(right);
                *min_y = min_y.min(node.y());
            })
            .or_insert((left, right, node.y()));
    }

    let mut bands = Vec::with_capacity(lane_extents.len());
    let mut lane_labels = Vec::with_capacity(lane_extents.len());
    for (&lane_id, &(min_x, max_x, min_y)) in &lane_extents {
        let lane = graph
            .lane(lane_id)
            .expect("lane exists (validated at graph construction)");
        bands.push(LaneBand {
            lane_id: lane_id.clone(),
            x: min_x - BAND_PAD_X,
            y: BAND_TOP,
            width: (max_x - min_x) + 2.0 * BAND_PAD_X,
            height: BAND_HEIGHT,
            color: lane.color().to_owned(),
        });
        lane_labels.push(LaneLabel {
            lane_id: lane_id.clone(),
            center_x: (min_x + max_x) / 2.0,
            y: min_y - LANE_LABEL_LIFT,
            text: lane.label().to_owned(),
            color: lane.color().to_owned(),
        });
    }

    let mut edges = Vec::with_capacity(graph.edges().len());
    for edge in graph.edges() {
        let (Some(from), Some(to)) = (graph.node(edge.from()), graph.node(edge.to())) else {
            continue;
        };
        let a = NodeRect::new(from.x(), from.y());
        let b = NodeRect::new(to.x(), to.y());
        let label = edge.label().map(|text| EdgeLabel {
            anchor: geometry::edge_label_anchor(a, b),
            lines: text.split('\n').map(str::to_owned).collect(),
        });
        edges.push(EdgeCurve {
            path: geometry::edge_path(a, b),
            label,
        });
    }

    let nodes = graph
        .nodes()
        .iter()
        .map(|node| NodeBox {
            node_id: node.node_id().clone(),
            rect: NodeRect::new(node.x(), node.y()),
            accent_color: graph.lane_of(node).color().to_owned(),
            label_lines: node.label_lines().map(str::to_owned).collect(),
            outline: NodeOutline::default_outline(),
        })
        .collect();

    Scene {
        bands,
        lane_labels,
        edges,
        nodes,
    }
}
