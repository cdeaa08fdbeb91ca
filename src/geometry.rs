// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Edge curve and label anchor computation.
//!
//! All positions are authored, never computed or relaxed; every function here
//! is pure and deterministic for identical inputs. Coordinates are abstract
//! layout units with a fixed node size.

/// Node box width in layout units.
pub const NODE_WIDTH: f64 = 210.0;
/// Node box height in layout units.
pub const NODE_HEIGHT: f64 = 72.0;
/// Node box corner radius in layout units.
pub const NODE_CORNER_RADIUS: f64 = 10.0;
/// Total authored diagram width, the basis for viewport scaling.
pub const DIAGRAM_WIDTH: f64 = 1380.0;
/// Total authored diagram height.
pub const DIAGRAM_HEIGHT: f64 = 520.0;

/// Two nodes whose x-centers differ by less than this share a column and get
/// a vertical route.
const SAME_COLUMN_THRESHOLD: f64 = 80.0;
/// Control point offset for vertical routes, as a fraction of the vertical gap.
const VERTICAL_CONTROL_FRACTION: f64 = 0.38;
/// Control point offset for horizontal routes, as a fraction of the
/// horizontal gap.
const HORIZONTAL_CONTROL_FRACTION: f64 = 0.42;
/// Rightward nudge of same-column edge labels off the curve.
const SAME_COLUMN_LABEL_NUDGE: f64 = 10.0;
/// Upward nudge of cross-lane edge labels off the curve midpoint.
const CROSS_LANE_LABEL_LIFT: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The authored top-left corner of a node box; width and height are fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRect {
    pub x: f64,
    pub y: f64,
}

impl NodeRect {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn center_x(self) -> f64 {
        self.x + NODE_WIDTH / 2.0
    }

    pub fn right(self) -> f64 {
        self.x + NODE_WIDTH
    }

    pub fn bottom(self) -> f64 {
        self.y + NODE_HEIGHT
    }

    pub fn top_center(self) -> Point {
        Point::new(self.center_x(), self.y)
    }

    pub fn bottom_center(self) -> Point {
        Point::new(self.center_x(), self.bottom())
    }

    pub fn left_center(self) -> Point {
        Point::new(self.x, self.y + NODE_HEIGHT / 2.0)
    }

    pub fn right_center(self) -> Point {
        Point::new(self.right(), self.y + NODE_HEIGHT / 2.0)
    }
}

/// How an edge between two node boxes is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRoute {
    /// Vertical S-curve between vertically stacked nodes in the same column.
    SameColumn,
    /// Horizontal curve between nodes in different lanes.
    CrossLane,
}

/// A cubic Bézier from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePath {
    pub route: EdgeRoute,
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl EdgePath {
    /// Evaluates the curve at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point::new(
            b0 * self.start.x + b1 * self.control1.x + b2 * self.control2.x + b3 * self.end.x,
            b0 * self.start.y + b1 * self.control1.y + b2 * self.control2.y + b3 * self.end.y,
        )
    }
}

fn same_column(a: NodeRect, b: NodeRect) -> bool {
    (a.x - b.x).abs() < SAME_COLUMN_THRESHOLD
}

/// Computes the curve for an edge from `a` to `b`.
pub fn edge_path(a: NodeRect, b: NodeRect) -> EdgePath {
    if same_column(a, b) {
        let start = a.bottom_center();
        let end = b.top_center();
        let gap = (end.y - start.y) * VERTICAL_CONTROL_FRACTION;
        return EdgePath {
            route: EdgeRoute::SameColumn,
            start,
            control1: Point::new(start.x, start.y + gap),
            control2: Point::new(end.x, end.y - gap),
            end,
        };
    }

    let start = a.right_center();
    let end = b.left_center();
    let gap = (end.x - start.x) * HORIZONTAL_CONTROL_FRACTION;
    EdgePath {
        route: EdgeRoute::CrossLane,
        start,
        control1: Point::new(start.x + gap, start.y),
        control2: Point::new(end.x - gap, end.y),
        end,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    Start,
    Middle,
}

/// Where an edge label is anchored, and how its text aligns to that anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLabelAnchor {
    pub x: f64,
    pub y: f64,
    pub align: LabelAlign,
}

/// Computes the label anchor for an edge from `a` to `b`.
pub fn edge_label_anchor(a: NodeRect, b: NodeRect) -> EdgeLabelAnchor {
    if same_column(a, b) {
        return EdgeLabelAnchor {
            x: a.center_x() + SAME_COLUMN_LABEL_NUDGE,
            y: (a.bottom() + b.y) / 2.0,
            align: LabelAlign::Start,
        };
    }

    let start = a.right_center();
    let end = b.left_center();
    EdgeLabelAnchor {
        x: (start.x + end.x) / 2.0,
        y: (start.y + end.y) / 2.0 - CROSS_LANE_LABEL_LIFT,
        align: LabelAlign::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        edge_label_anchor, edge_path, EdgeRoute, LabelAlign, NodeRect, Point, NODE_HEIGHT,
        NODE_WIDTH,
    };

    #[test]
    fn same_column_route_runs_bottom_center_to_top_center() {
        let a = NodeRect::new(40.0, 130.0);
        let b = NodeRect::new(40.0, 310.0);
        let path = edge_path(a, b);

        assert_eq!(path.route, EdgeRoute::SameColumn);
        assert_eq!(path.start, Point::new(40.0 + NODE_WIDTH / 2.0, 130.0 + NODE_HEIGHT));
        assert_eq!(path.end, Point::new(40.0 + NODE_WIDTH / 2.0, 310.0));

        // Control points sit 38% of the vertical gap inside the span.
        let gap = (310.0 - (130.0 + NODE_HEIGHT)) * 0.38;
        assert_eq!(path.control1, Point::new(path.start.x, path.start.y + gap));
        assert_eq!(path.control2, Point::new(path.end.x, path.end.y - gap));
    }

    #[test]
    fn near_column_offset_below_threshold_still_routes_vertically() {
        let a = NodeRect::new(40.0, 130.0);
        let b = NodeRect::new(119.9, 310.0);
        assert_eq!(edge_path(a, b).route, EdgeRoute::SameColumn);
    }

    #[test]
    fn cross_lane_route_runs_right_center_to_left_center() {
        let a = NodeRect::new(40.0, 130.0);
        let b = NodeRect::new(310.0, 130.0);
        let path = edge_path(a, b);

        assert_eq!(path.route, EdgeRoute::CrossLane);
        assert_eq!(path.start, Point::new(40.0 + NODE_WIDTH, 130.0 + NODE_HEIGHT / 2.0));
        assert_eq!(path.end, Point::new(310.0, 130.0 + NODE_HEIGHT / 2.0));

        let gap = (310.0 - (40.0 + NODE_WIDTH)) * 0.42;
        assert_eq!(path.control1, Point::new(path.start.x + gap, path.start.y));
        assert_eq!(path.control2, Point::new(path.end.x - gap, path.end.y));
    }

    #[test]
    fn threshold_offset_routes_horizontally() {
        let a = NodeRect::new(40.0, 130.0);
        let b = NodeRect::new(120.0, 310.0);
        assert_eq!(edge_path(a, b).route, EdgeRoute::CrossLane);
    }

    #[test]
    fn curve_endpoints_match_evaluation() {
        let path = edge_path(NodeRect::new(40.0, 130.0), NodeRect::new(580.0, 130.0));
        let start = path.point_at(0.0);
        let end = path.point_at(1.0);
        assert!((start.x - path.start.x).abs() < 1e-9);
        assert!((start.y - path.start.y).abs() < 1e-9);
        assert!((end.x - path.end.x).abs() < 1e-9);
        assert!((end.y - path.end.y).abs() < 1e-9);
    }

    #[test]
    fn same_column_label_sits_right_of_curve_midpoint() {
        let a = NodeRect::new(40.0, 130.0);
        let b = NodeRect::new(40.0, 310.0);
        let anchor = edge_label_anchor(a, b);

        assert_eq!(anchor.align, LabelAlign::Start);
        assert_eq!(anchor.x, 40.0 + NODE_WIDTH / 2.0 + 10.0);
        assert_eq!(anchor.y, ((130.0 + NODE_HEIGHT) + 310.0) / 2.0);
    }

    #[test]
    fn cross_lane_label_sits_at_lifted_midpoint() {
        let a = NodeRect::new(40.0, 130.0);
        let b = NodeRect::new(580.0, 310.0);
        let anchor = edge_label_anchor(a, b);

        assert_eq!(anchor.align, LabelAlign::Middle);
        assert_eq!(anchor.x, ((40.0 + NODE_WIDTH) + 580.0) / 2.0);
        assert_eq!(
            anchor.y,
            ((130.0 + NODE_HEIGHT / 2.0) + (310.0 + NODE_HEIGHT / 2.0)) / 2.0 - 7.0
        );
    }
}
