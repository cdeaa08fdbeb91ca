// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::ids::{LaneId, NodeId};

/// A node of the authored map. Positions are authored, never computed.
///
/// Labels may contain a single `\n` marking an explicit two-line break; blurbs
/// are one or more paragraphs separated by blank lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_id: NodeId,
    label: String,
    lane_id: LaneId,
    x: f64,
    y: f64,
    blurb: String,
}

impl Node {
    pub fn new(
        node_id: NodeId,
        label: impl Into<String>,
        lane_id: LaneId,
        x: f64,
        y: f64,
        blurb: impl Into<String>,
    ) -> Self {
        Self {
            node_id,
            label: label.into(),
            lane_id,
            x,
            y,
            blurb: blurb.into(),
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The label with explicit line breaks collapsed to spaces, for titles.
    pub fn title(&self) -> String {
        self.label.replace('\n', " ")
    }

    pub fn label_lines(&self) -> std::str::Split<'_, char> {
        self.label.split('\n')
    }

    pub fn lane_id(&self) -> &LaneId {
        &self.lane_id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn blurb(&self) -> &str {
        &self.blurb
    }

    pub fn blurb_paragraphs(&self) -> impl Iterator<Item = &str> {
        paragraphs(&self.blurb)
    }
}

/// Splits authored paragraph text on blank lines, trimming each paragraph.
pub(crate) fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    label: Option<String>,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            label: None,
        }
    }

    pub fn new_with(from: NodeId, to: NodeId, label: Option<String>) -> Self {
        Self { from, to, label }
    }

    pub fn from(&self) -> &NodeId {
        &self.from
    }

    pub fn to(&self) -> &NodeId {
        &self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A horizontal/thematic grouping of nodes sharing a color identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    label: String,
    color: String,
}

impl Lane {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Hex color (`#rrggbb`) used for the band, label tint, accent stripe and
    /// selection outline.
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Per-node detail text authored independently of graph topology.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotation {
    relevance: Option<String>,
}

impl Annotation {
    pub fn new<T: Into<String>>(relevance: Option<T>) -> Self {
        Self {
            relevance: relevance.map(Into::into),
        }
    }

    /// The relevance text, or `None` when absent or blank.
    pub fn relevance(&self) -> Option<&str> {
        match self.relevance.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(text) => Some(text),
        }
    }
}

/// Free-form descriptive fields consumed only by the static utility panels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Meta {
    pub title: String,
    pub thesis: String,
    pub institution: String,
    pub program: String,
    pub cta: String,
    pub contact_name: String,
    pub contact_email: String,
    pub profile_url: String,
    pub reference_sections: Vec<ReferenceSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSection {
    pub title: String,
    pub entries: Vec<ReferenceEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub text: String,
    pub url: String,
}

/// The immutable authored content the viewer runs against.
///
/// Constructed once at load time. Edges with dangling endpoints are legal
/// content (skipped at render time); unknown lane references and unknown
/// walkthrough-order ids are authoring errors and rejected here.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentGraph {
    nodes: Vec<Node>,
    node_index: BTreeMap<NodeId, usize>,
    edges: Vec<Edge>,
    lanes: BTreeMap<LaneId, Lane>,
    annotations: BTreeMap<NodeId, Annotation>,
    node_order: Vec<NodeId>,
    meta: Meta,
}

impl ContentGraph {
    pub fn new(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        lanes: BTreeMap<LaneId, Lane>,
        annotations: BTreeMap<NodeId, Annotation>,
        node_order: Vec<NodeId>,
        meta: Meta,
    ) -> Result<Self, GraphError> {
        let mut node_index = BTreeMap::new();
        for (idx, node) in nodes.iter().enumerate() {
            if node_index.insert(node.node_id().clone(), idx).is_some() {
                return Err(GraphError::DuplicateNode {
                    node_id: node.node_id().clone(),
                });
            }
            if !lanes.contains_key(node.lane_id()) {
                return Err(GraphError::UnknownLane {
                    node_id: node.node_id().clone(),
                    lane_id: node.lane_id().clone(),
                });
            }
        }

        for node_id in &node_order {
            if !node_index.contains_key(node_id) {
                return Err(GraphError::UnknownOrderNode {
                    node_id: node_id.clone(),
                });
            }
        }

        Ok(Self {
            nodes,
            node_index,
            edges,
            lanes,
            annotations,
            node_order,
            meta,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.node_index.get(node_id).map(|&idx| &self.nodes[idx])
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn lanes(&self) -> &BTreeMap<LaneId, Lane> {
        &self.lanes
    }

    pub fn lane(&self, lane_id: &LaneId) -> Option<&Lane> {
        self.lanes.get(lane_id)
    }

    /// The lane of a node. Always resolves for nodes of this graph (checked at
    /// construction).
    pub fn lane_of(&self, node: &Node) -> &Lane {
        self.lanes
            .get(node.lane_id())
            .expect("node lane exists (validated at construction)")
    }

    pub fn annotation(&self, node_id: &NodeId) -> Option<&Annotation> {
        self.annotations.get(node_id)
    }

    /// The authored walkthrough order. Independent of visual layout by design;
    /// divergence between this order and x/y positions is valid input.
    pub fn node_order(&self) -> &[NodeId] {
        &self.node_order
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    DuplicateNode { node_id: NodeId },
    UnknownLane { node_id: NodeId, lane_id: LaneId },
    UnknownOrderNode { node_id: NodeId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode { node_id } => {
                write!(f, "duplicate node id: {node_id}")
            }
            Self::UnknownLane { node_id, lane_id } => {
                write!(f, "node {node_id} references unknown lane {lane_id}")
            }
            Self::UnknownOrderNode { node_id } => {
                write!(f, "node order references unknown node {node_id}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
