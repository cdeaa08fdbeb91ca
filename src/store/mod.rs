// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Map file loading.
//!
//! A map is a single JSON document with the lanes, nodes, edges, annotations,
//! walkthrough order and panel metadata. Wire field names are camelCase; the
//! wire types live here as private DTOs and never leak into the model.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{
    Annotation, ContentGraph, Edge, GraphError, IdError, Lane, LaneId, Meta, Node, NodeId,
    ReferenceEntry, ReferenceSection,
};

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    Id {
        path: PathBuf,
        source: IdError,
    },
    Graph {
        path: PathBuf,
        source: GraphError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read map {}: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid JSON in map {}: {source}", path.display())
            }
            Self::Id { path, source } => {
                write!(f, "invalid id in map {}: {source}", path.display())
            }
            Self::Graph { path, source } => {
                write!(f, "inconsistent map {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Id { source, .. } => Some(source),
            Self::Graph { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapFile {
    #[serde(default)]
    meta: MetaFile,
    lanes: BTreeMap<String, LaneFile>,
    nodes: Vec<NodeFile>,
    #[serde(default)]
    edges: Vec<EdgeFile>,
    #[serde(default)]
    annotations: BTreeMap<String, AnnotationFile>,
    #[serde(default)]
    node_order: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LaneFile {
    label: String,
    color: String,
}

#[derive(Debug, Deserialize)]
struct NodeFile {
    id: String,
    label: String,
    lane: String,
    x: f64,
    y: f64,
    #[serde(default)]
    blurb: String,
}

#[derive(Debug, Deserialize)]
struct EdgeFile {
    from: String,
    to: String,
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnnotationFile {
    #[serde(default)]
    relevance: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetaFile {
    #[serde(default)]
    title: String,
    #[serde(default)]
    thesis: String,
    #[serde(default)]
    institution: String,
    #[serde(default)]
    program: String,
    #[serde(default)]
    cta: String,
    #[serde(default)]
    contact_name: String,
    #[serde(default)]
    contact_email: String,
    #[serde(default)]
    profile_url: String,
    #[serde(default)]
    reference_sections: Vec<ReferenceSectionFile>,
}

#[derive(Debug, Deserialize)]
struct ReferenceSectionFile {
    title: String,
    #[serde(default)]
    entries: Vec<ReferenceEntryFile>,
}

#[derive(Debug, Deserialize)]
struct ReferenceEntryFile {
    text: String,
    #[serde(default)]
    url: String,
}

/// Loads and validates a map file.
pub fn load_map(path: &Path) -> Result<ContentGraph, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_owned(),
        source,
    })?;
    let file: MapFile = serde_json::from_str(&text).map_err(|source| StoreError::Json {
        path: path.to_owned(),
        source,
    })?;
    graph_from_file(path, file)
}

fn graph_from_file(path: &Path, file: MapFile) -> Result<ContentGraph, StoreError> {
    let id_err = |source: IdError| StoreError::Id {
        path: path.to_owned(),
        source,
    };

    let mut lanes = BTreeMap::new();
    for (key, lane) in file.lanes {
        lanes.insert(
            LaneId::new(&key).map_err(id_err)?,
            Lane::new(lane.label, lane.color),
        );
    }

    let mut nodes = Vec::with_capacity(file.nodes.len());
    for node in file.nodes {
        nodes.push(Node::new(
            NodeId::new(&node.id).map_err(id_err)?,
            node.label,
            LaneId::new(&node.lane).map_err(id_err)?,
            node.x,
            node.y,
            node.blurb,
        ));
    }

    let mut edges = Vec::with_capacity(file.edges.len());
    for edge in file.edges {
        edges.push(Edge::new_with(
            NodeId::new(&edge.from).map_err(id_err)?,
            NodeId::new(&edge.to).map_err(id_err)?,
            edge.label,
        ));
    }

    let mut annotations = BTreeMap::new();
    for (key, annotation) in file.annotations {
        annotations.insert(
            NodeId::new(&key).map_err(id_err)?,
            Annotation::new(annotation.relevance),
        );
    }

    let mut node_order = Vec::with_capacity(file.node_order.len());
    for id in file.node_order {
        node_order.push(NodeId::new(&id).map_err(id_err)?);
    }

    let meta = Meta {
        title: file.meta.title,
        thesis: file.meta.thesis,
        institution: file.meta.institution,
        program: file.meta.program,
        cta: file.meta.cta,
        contact_name: file.meta.contact_name,
        contact_email: file.meta.contact_email,
        profile_url: file.meta.profile_url,
        reference_sections: file
            .meta
            .reference_sections
            .into_iter()
            .map(|section| ReferenceSection {
                title: section.title,
                entries: section
                    .entries
                    .into_iter()
                    .map(|entry| ReferenceEntry {
                        text: entry.text,
                        url: entry.url,
                    })
                    .collect(),
            })
            .collect(),
    };

    ContentGraph::new(nodes, edges, lanes, annotations, node_order, meta).map_err(|source| {
        StoreError::Graph {
            path: path.to_owned(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{load_map, StoreError};
    use crate::model::{GraphError, NodeId};
    use rstest::rstest;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn write_map(json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "proteus-map-{}-{}.json",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::write(&path, json).expect("write temp map");
        path
    }

    const GOOD_MAP: &str = r##"{
        "meta": {
            "title": "Research Map",
            "thesis": "One line.",
            "contactName": "R. Author",
            "contactEmail": "author@example.org",
            "profileUrl": "https://example.org/a",
            "referenceSections": [
                {"title": "Methods", "entries": [{"text": "Doe 2024", "url": "https://doi.org/x"}]}
            ]
        },
        "lanes": {
            "problem": {"label": "PROBLEM", "color": "#60a5fa"}
        },
        "nodes": [
            {"id": "a", "label": "Alpha", "lane": "problem", "x": 40, "y": 130, "blurb": "Text."},
            {"id": "b", "label": "Beta", "lane": "problem", "x": 40, "y": 310}
        ],
        "edges": [
            {"from": "a", "to": "b", "label": "then"}
        ],
        "annotations": {
            "a": {"relevance": "Because."}
        },
        "nodeOrder": ["a", "b"]
    }"##;

    #[test]
    fn loads_a_complete_map() {
        let path = write_map(GOOD_MAP);
        let graph = load_map(&path).expect("map loads");

        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.node_order().len(), 2);
        assert_eq!(graph.meta().contact_email, "author@example.org");
        assert_eq!(graph.meta().reference_sections[0].title, "Methods");

        let a = NodeId::new("a").expect("id");
        let annotation = graph.annotation(&a).expect("annotation");
        assert_eq!(annotation.relevance(), Some("Because."));

        // Unlisted fields default.
        let b = graph.node(&NodeId::new("b").expect("id")).expect("node");
        assert_eq!(b.blurb(), "");
    }

    #[test]
    fn missing_file_reports_the_path() {
        let path = std::env::temp_dir().join("proteus-definitely-missing.json");
        let err = load_map(&path).expect_err("should fail");
        let StoreError::Io { path: reported, .. } = err else {
            panic!("expected Io error, got {err}");
        };
        assert_eq!(reported, path);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let path = write_map("{not json");
        assert!(matches!(
            load_map(&path).expect_err("should fail"),
            StoreError::Json { .. }
        ));
    }

    #[rstest]
    #[case::slash_in_node_id(r#"{"lanes": {}, "nodes": [{"id": "a/b", "label": "A", "lane": "l", "x": 0, "y": 0}]}"#)]
    #[case::empty_lane_key(r##"{"lanes": {"": {"label": "L", "color": "#fff"}}, "nodes": []}"##)]
    fn bad_ids_are_id_errors(#[case] json: &str) {
        let path = write_map(json);
        assert!(matches!(
            load_map(&path).expect_err("should fail"),
            StoreError::Id { .. }
        ));
    }

    #[test]
    fn unknown_lane_reference_is_a_graph_error() {
        let path = write_map(
            r#"{"lanes": {}, "nodes": [{"id": "a", "label": "A", "lane": "nope", "x": 0, "y": 0}]}"#,
        );
        let err = load_map(&path).expect_err("should fail");
        let StoreError::Graph { source, .. } = err else {
            panic!("expected Graph error, got {err}");
        };
        assert!(matches!(source, GraphError::UnknownLane { .. }));
    }
}
