// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viewport scaling and scroll synchronization.
//!
//! The diagram renders at some width; everything here converts between
//! authored layout units and rendered units so selection can center the
//! selected node in the visible window.

use crate::geometry::{NodeRect, DIAGRAM_WIDTH};

/// Viewports narrower than this (in rendered units) use the stacked layout
/// with a bottom-sheet drawer instead of a side-by-side split.
pub const NARROW_VIEWPORT_THRESHOLD: f64 = 860.0;

pub fn is_narrow(viewport_width: f64) -> bool {
    viewport_width < NARROW_VIEWPORT_THRESHOLD
}

/// Rendered units per layout unit for a diagram rendered `rendered_width`
/// wide.
pub fn scale(rendered_width: f64) -> f64 {
    rendered_width / DIAGRAM_WIDTH
}

/// The horizontal scroll offset that centers `node` in a window
/// `visible_width` wide over a diagram rendered `rendered_width` wide.
/// Clamped so the window never scrolls past either diagram edge.
pub fn scroll_target(node: NodeRect, rendered_width: f64, visible_width: f64) -> f64 {
    let center = node.center_x() * scale(rendered_width);
    let max_offset = (rendered_width - visible_width).max(0.0);
    (center - visible_width / 2.0).clamp(0.0, max_offset)
}

#[cfg(test)]
mod tests {
    use super::{is_narrow, scale, scroll_target, NARROW_VIEWPORT_THRESHOLD};
    use crate::geometry::NodeRect;

    #[test]
    fn scale_is_proportional_to_rendered_width() {
        assert_eq!(scale(1380.0), 1.0);
        assert_eq!(scale(690.0), 0.5);
    }

    #[test]
    fn scroll_centers_the_node() {
        // Node centered at x=800 in layout units, rendered 1:1.
        let node = NodeRect::new(695.0, 130.0);
        let offset = scroll_target(node, 1380.0, 400.0);
        assert_eq!(offset, 800.0 - 200.0);
    }

    #[test]
    fn scroll_clamps_at_the_left_edge() {
        let node = NodeRect::new(40.0, 130.0);
        assert_eq!(scroll_target(node, 1380.0, 800.0), 0.0);
    }

    #[test]
    fn scroll_clamps_at_the_right_edge() {
        let node = NodeRect::new(1380.0 - 210.0, 130.0);
        assert_eq!(scroll_target(node, 1380.0, 400.0), 980.0);
    }

    #[test]
    fn window_wider_than_diagram_never_scrolls() {
        let node = NodeRect::new(695.0, 130.0);
        assert_eq!(scroll_target(node, 1380.0, 2000.0), 0.0);
    }

    #[test]
    fn scroll_accounts_for_rendered_scale() {
        let node = NodeRect::new(695.0, 130.0);
        // Rendered at half size the node center sits at 400 rendered units.
        assert_eq!(scroll_target(node, 690.0, 200.0), 300.0);
    }

    #[test]
    fn narrow_threshold_is_exclusive() {
        assert!(is_narrow(NARROW_VIEWPORT_THRESHOLD - 1.0));
        assert!(!is_narrow(NARROW_VIEWPORT_THRESHOLD));
    }
}
