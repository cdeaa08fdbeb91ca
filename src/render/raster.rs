// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scene rasterization.
//!
//! Turns a [`Scene`] into a character grid plus a paint index: for every
//! visual class (lane band, edge, node body, ...) the cell spans it occupies.
//! The TUI colors the grid from the index instead of re-rasterizing, so a
//! selection change never touches the text.

use std::collections::BTreeMap;

use crate::geometry::{self, EdgeRoute};
use crate::model::{LaneId, NodeId};
use crate::scene::{Scene, EDGE_LABEL_LINE_SPACING};

use super::canvas::{Canvas, CanvasError};

/// Layout units per canvas column and row. The defaults map the 1380x520
/// diagram onto a 230x52 grid.
pub const UNITS_PER_COL: f64 = 6.0;
pub const UNITS_PER_ROW: f64 = 10.0;

/// Curve samples per edge.
const EDGE_SAMPLES: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    pub units_per_col: f64,
    pub units_per_row: f64,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            units_per_col: UNITS_PER_COL,
            units_per_row: UNITS_PER_ROW,
        }
    }
}

/// A visual class the TUI styles independently.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScenePaint {
    LaneBand(LaneId),
    LaneLabel(LaneId),
    Edges,
    EdgeLabels,
    NodeBody(NodeId),
    NodeAccent(NodeId),
    NodeOutline(NodeId),
}

/// `(line, start_col, end_col)`, end exclusive.
pub type LineSpan = (usize, usize, usize);

/// A node's footprint on the grid, for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CellRect {
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col >= self.x && col < self.x + self.width && row >= self.y && row < self.y + self.height
    }
}

/// The rasterized scene: text rows plus the paint index over them.
#[derive(Debug, Clone)]
pub struct SceneRaster {
    lines: Vec<String>,
    width: usize,
    paint_index: BTreeMap<ScenePaint, Vec<LineSpan>>,
    node_cells: Vec<(NodeId, CellRect)>,
}

impl SceneRaster {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn spans(&self, paint: &ScenePaint) -> &[LineSpan] {
        self.paint_index
            .get(paint)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn paints(&self) -> impl Iterator<Item = (&ScenePaint, &[LineSpan])> {
        self.paint_index
            .iter()
            .map(|(paint, spans)| (paint, spans.as_slice()))
    }

    /// The topmost node under a grid cell. Nodes never overlap in authored
    /// content, so first match wins.
    pub fn node_hit(&self, col: usize, row: usize) -> Option<&NodeId> {
        self.node_cells
            .iter()
            .find(|(_, rect)| rect.contains(col, row))
            .map(|(node_id, _)| node_id)
    }

    pub fn node_cell(&self, node_id: &NodeId) -> Option<CellRect> {
        self.node_cells
            .iter()
            .find(|(id, _)| id == node_id)
            .map(|(_, rect)| *rect)
    }
}

struct Painter {
    canvas: Canvas,
    index: BTreeMap<ScenePaint, Vec<LineSpan>>,
}

impl Painter {
    fn span(&mut self, paint: ScenePaint, line: usize, start: usize, end: usize) {
        if start >= end {
            return;
        }
        self.index.entry(paint).or_default().push((line, start, end));
    }

    fn plot(&mut self, paint: ScenePaint, x: isize, y: isize, ch: char) {
        self.canvas.plot(x, y, ch);
        if x >= 0 && y >= 0 && self.canvas.contains(x as usize, y as usize) {
            self.span(paint, y as usize, x as usize, x as usize + 1);
        }
    }

    fn write(&mut self, paint: ScenePaint, x: isize, y: isize, text: &str) {
        if let Some((start, end)) = self.canvas.write_clipped(x, y, text) {
            self.span(paint, y as usize, start, end);
        }
    }
}

/// Coalesces overlapping or adjacent spans on the same line.
fn coalesce(spans: &mut Vec<LineSpan>) {
    spans.sort_unstable();
    let mut merged: Vec<LineSpan> = Vec::with_capacity(spans.len());
    for &(line, start, end) in spans.iter() {
        match merged.last_mut() {
            Some((last_line, _, last_end)) if *last_line == line && start <= *last_end => {
                *last_end = (*last_end).max(end);
            }
            _ => merged.push((line, start, end)),
        }
    }
    *spans = merged;
}

pub fn rasterize(scene: &Scene, options: RasterOptions) -> Result<SceneRaster, CanvasError> {
    let width = (geometry::DIAGRAM_WIDTH / options.units_per_col).ceil() as usize;
    let height = (geometry::DIAGRAM_HEIGHT / options.units_per_row).ceil() as usize;
    let to_col = |x: f64| (x / options.units_per_col).round() as isize;
    let to_row = |y: f64| (y / options.units_per_row).round() as isize;

    let mut painter = Painter {
        canvas: Canvas::new(width, height)?,
        index: BTreeMap::new(),
    };

    // Bands are pure background; they only contribute index spans.
    for band in &scene.bands {
        let left = to_col(band.x).max(0) as usize;
        let right = (to_col(band.x + band.width).max(0) as usize).min(width);
        let top = to_row(band.y).max(0) as usize;
        let bottom = (to_row(band.y + band.height).max(0) as usize).min(height);
        for row in top..bottom {
            painter.span(ScenePaint::LaneBand(band.lane_id.clone()), row, left, right);
        }
    }

    for label in &scene.lane_labels {
        let col = to_col(label.center_x) - label.text.chars().count() as isize / 2;
        painter.write(
            ScenePaint::LaneLabel(label.lane_id.clone()),
            col,
            to_row(label.y),
            &label.text,
        );
    }

    for edge in &scene.edges {
        for step in 0..=EDGE_SAMPLES {
            let t = step as f64 / EDGE_SAMPLES as f64;
            let point = edge.path.point_at(t);
            painter.plot(ScenePaint::Edges, to_col(point.x), to_row(point.y), '·');
        }
        // Arrowhead one cell short of the target so the node border keeps it
        // visible once nodes paint over the curve.
        let end = edge.path.end;
        match edge.path.route {
            EdgeRoute::SameColumn => {
                painter.plot(ScenePaint::Edges, to_col(end.x), to_row(end.y) - 1, 'v');
            }
            EdgeRoute::CrossLane => {
                painter.plot(ScenePaint::Edges, to_col(end.x) - 1, to_row(end.y), '>');
            }
        }

        if let Some(label) = &edge.label {
            for (idx, line) in label.lines.iter().enumerate() {
                let y = label.anchor.y + idx as f64 * EDGE_LABEL_LINE_SPACING;
                let col = match label.anchor.align {
                    geometry::LabelAlign::Start => to_col(label.anchor.x),
                    geometry::LabelAlign::Middle => {
                        to_col(label.anchor.x) - line.chars().count() as isize / 2
                    }
                };
                painter.write(ScenePaint::EdgeLabels, col, to_row(y), line);
            }
        }
    }

    let mut node_cells = Vec::with_capacity(scene.nodes.len());
    for node in &scene.nodes {
        let left = to_col(node.rect.x);
        let top = to_row(node.rect.y);
        let box_width = (geometry::NODE_WIDTH / options.units_per_col).round() as usize;
        let box_height = (geometry::NODE_HEIGHT / options.units_per_row).round() as usize;
        painter.canvas.draw_box(left, top, box_width, box_height);

        let right = left + box_width as isize - 1;
        let bottom = top + box_height as isize - 1;
        let outline = ScenePaint::NodeOutline(node.node_id.clone());
        if top >= 0 && (top as usize) < height {
            let start = left.max(0) as usize;
            let end = ((right + 1).max(0) as usize).min(width);
            painter.span(outline.clone(), top as usize, start, end);
        }
        if bottom >= 0 && (bottom as usize) < height {
            let start = left.max(0) as usize;
            let end = ((right + 1).max(0) as usize).min(width);
            painter.span(outline.clone(), bottom as usize, start, end);
        }
        for row in top + 1..bottom {
            if row < 0 || row as usize >= height {
                continue;
            }
            if left >= 0 && (left as usize) < width {
                painter.span(outline.clone(), row as usize, left as usize, left as usize + 1);
            }
            if right >= 0 && (right as usize) < width {
                painter.span(
                    outline.clone(),
                    row as usize,
                    right as usize,
                    right as usize + 1,
                );
            }
            // Interior body span, accent stripe at its left edge.
            let body_start = (left + 1).max(0) as usize;
            let body_end = (right.max(0) as usize).min(width);
            painter.span(
                ScenePaint::NodeBody(node.node_id.clone()),
                row as usize,
                body_start,
                body_end,
            );
            painter.plot(
                ScenePaint::NodeAccent(node.node_id.clone()),
                left + 1,
                row,
                '▌',
            );
        }

        // Labels are indexed with the body so they inherit the body style.
        for ((label_x, label_y), line) in node.label_baselines().zip(node.label_lines.iter()) {
            painter.write(
                ScenePaint::NodeBody(node.node_id.clone()),
                to_col(label_x),
                to_row(label_y),
                line,
            );
        }

        let cell_left = left.max(0) as usize;
        let cell_top = top.max(0) as usize;
        node_cells.push((
            node.node_id.clone(),
            CellRect {
                x: cell_left,
                y: cell_top,
                width: box_width.min(width.saturating_sub(cell_left)),
                height: box_height.min(height.saturating_sub(cell_top)),
            },
        ));
    }

    let Painter { canvas, mut index } = painter;
    for spans in index.values_mut() {
        coalesce(spans);
    }

    Ok(SceneRaster {
        lines: canvas.rows().collect(),
        width,
        paint_index: index,
        node_cells,
    })
}

#[cfg(test)]
mod tests {
    use super::{coalesce, rasterize, CellRect, RasterOptions, ScenePaint};
    use crate::model::{ContentGraph, Edge, Lane, LaneId, Meta, Node, NodeId};
    use crate::scene::build_scene;
    use std::collections::BTreeMap;

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn lid(value: &str) -> LaneId {
        LaneId::new(value).expect("lane id")
    }

    fn sample_graph() -> ContentGraph {
        let mut lanes = BTreeMap::new();
        lanes.insert(lid("problem"), Lane::new("PROBLEM", "#60a5fa"));
        let nodes = vec![
            Node::new(nid("a"), "Alpha", lid("problem"), 40.0, 130.0, ""),
            Node::new(nid("b"), "Beta", lid("problem"), 40.0, 310.0, ""),
        ];
        let edges = vec![Edge::new_with(nid("a"), nid("b"), Some("then".to_owned()))];
        ContentGraph::new(
            nodes,
            edges,
            lanes,
            BTreeMap::new(),
            vec![nid("a"), nid("b")],
            Meta::default(),
        )
        .expect("graph")
    }

    #[test]
    fn default_grid_covers_whole_diagram() {
        let scene = build_scene(&sample_graph());
        let raster = rasterize(&scene, RasterOptions::default()).expect("raster");
        assert_eq!(raster.width(), 230);
        assert_eq!(raster.height(), 52);
        assert!(raster.lines().iter().all(|line| line.chars().count() == 230));
    }

    #[test]
    fn node_footprint_hits_its_node() {
        let scene = build_scene(&sample_graph());
        let raster = rasterize(&scene, RasterOptions::default()).expect("raster");

        // Node `a` is authored at (40, 130): cells (7, 13), 35x7.
        let cell = raster.node_cell(&nid("a")).expect("cell rect");
        assert_eq!(
            cell,
            CellRect {
                x: 7,
                y: 13,
                width: 35,
                height: 7
            }
        );
        assert_eq!(raster.node_hit(8, 14), Some(&nid("a")));
        assert_eq!(raster.node_hit(8, 40), None);
    }

    #[test]
    fn band_spans_cover_full_band_rows() {
        let scene = build_scene(&sample_graph());
        let raster = rasterize(&scene, RasterOptions::default()).expect("raster");
        let spans = raster.spans(&ScenePaint::LaneBand(lid("problem")));
        // Band y=10..500 maps to rows 1..50.
        assert_eq!(spans.len(), 49);
        assert!(spans.iter().all(|&(_, start, end)| start == 4 && end == 44));
        assert_eq!(spans.first(), Some(&(1, 4, 44)));
    }

    #[test]
    fn same_column_edge_gets_vertical_arrowhead() {
        let scene = build_scene(&sample_graph());
        let raster = rasterize(&scene, RasterOptions::default()).expect("raster");
        // Edge ends at (145, 310) -> cell (24, 31); arrow sits one row above.
        let row = &raster.lines()[30];
        assert_eq!(row.chars().nth(24), Some('v'));
    }

    #[test]
    fn edge_label_is_written_between_the_nodes() {
        let scene = build_scene(&sample_graph());
        let raster = rasterize(&scene, RasterOptions::default()).expect("raster");
        let spans = raster.spans(&ScenePaint::EdgeLabels);
        assert!(!spans.is_empty());
        let &(line, start, end) = &spans[0];
        let text: String = raster.lines()[line]
            .chars()
            .skip(start)
            .take(end - start)
            .collect();
        assert_eq!(text, "then");
    }

    #[test]
    fn coalesce_merges_adjacent_spans() {
        let mut spans = vec![(3, 5, 7), (3, 7, 9), (3, 12, 13), (4, 5, 7)];
        coalesce(&mut spans);
        assert_eq!(spans, vec![(3, 5, 9), (3, 12, 13), (4, 5, 7)]);
    }
}
