// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawer resize gesture.
//!
//! An explicit state machine over drag events on the drawer's handle, in
//! pixel-like units. Dragging up grows the drawer; a release with the drawer
//! squeezed below a fraction of the viewport closes it instead of committing.

/// Smallest height the drawer can be dragged to while the drag is live.
pub const MIN_SHEET_HEIGHT: f64 = 80.0;
/// Largest drawer height, as a fraction of the viewport height.
pub const MAX_SHEET_RATIO: f64 = 0.92;
/// Releasing below this fraction of the viewport height closes the drawer.
pub const CLOSE_RATIO: f64 = 0.2;

/// What a finished drag asks the owner to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Keep the drawer open at this height.
    Commit(f64),
    /// Close the drawer; no height is retained.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetDrag {
    #[default]
    Idle,
    Dragging { start_y: f64, start_height: f64 },
}

impl SheetDrag {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Starts a drag at pointer position `y` with the drawer currently
    /// `height` tall. A second begin while dragging restarts from the new
    /// anchor.
    pub fn begin(&mut self, y: f64, height: f64) {
        *self = Self::Dragging {
            start_y: y,
            start_height: height,
        };
    }

    /// The live drawer height for pointer position `y`, clamped to the legal
    /// range. Moving the pointer up (smaller `y`) grows the drawer. `None`
    /// when no drag is active.
    pub fn update(&self, y: f64, viewport_height: f64) -> Option<f64> {
        let Self::Dragging {
            start_y,
            start_height,
        } = *self
        else {
            return None;
        };
        let height = start_height + (start_y - y);
        Some(height.clamp(MIN_SHEET_HEIGHT, viewport_height * MAX_SHEET_RATIO))
    }

    /// Ends the drag and decides its outcome. `None` when no drag is active.
    pub fn finish(&mut self, y: f64, viewport_height: f64) -> Option<DragOutcome> {
        let height = self.update(y, viewport_height)?;
        *self = Self::Idle;
        if height < viewport_height * CLOSE_RATIO {
            Some(DragOutcome::Close)
        } else {
            Some(DragOutcome::Commit(height))
        }
    }

    /// Abandons the drag without an outcome; the pre-drag height stands.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::{DragOutcome, SheetDrag, MIN_SHEET_HEIGHT};

    const VIEWPORT: f64 = 1000.0;

    #[test]
    fn upward_drag_grows_the_drawer() {
        let mut drag = SheetDrag::default();
        drag.begin(900.0, 400.0);
        assert_eq!(drag.update(800.0, VIEWPORT), Some(500.0));
        assert_eq!(drag.update(950.0, VIEWPORT), Some(350.0));
    }

    #[test]
    fn live_height_clamps_to_legal_range() {
        let mut drag = SheetDrag::default();
        drag.begin(900.0, 400.0);
        assert_eq!(drag.update(2000.0, VIEWPORT), Some(MIN_SHEET_HEIGHT));
        assert_eq!(drag.update(-2000.0, VIEWPORT), Some(920.0));
    }

    #[test]
    fn release_at_half_viewport_commits() {
        let mut drag = SheetDrag::default();
        drag.begin(900.0, 400.0);
        let outcome = drag.finish(800.0, VIEWPORT);
        assert_eq!(outcome, Some(DragOutcome::Commit(500.0)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_below_close_ratio_closes() {
        let mut drag = SheetDrag::default();
        drag.begin(600.0, 400.0);
        // Dragged down to 150, under 20% of a 1000-unit viewport.
        let outcome = drag.finish(850.0, VIEWPORT);
        assert_eq!(outcome, Some(DragOutcome::Close));
    }

    #[test]
    fn release_exactly_at_close_ratio_commits() {
        let mut drag = SheetDrag::default();
        drag.begin(600.0, 400.0);
        let outcome = drag.finish(800.0, VIEWPORT);
        assert_eq!(outcome, Some(DragOutcome::Commit(200.0)));
    }

    #[test]
    fn cancel_discards_the_drag() {
        let mut drag = SheetDrag::default();
        drag.begin(900.0, 400.0);
        drag.cancel();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(800.0, VIEWPORT), None);
        assert_eq!(drag.finish(800.0, VIEWPORT), None);
    }

    #[test]
    fn events_without_a_drag_are_ignored() {
        let mut drag = SheetDrag::default();
        assert_eq!(drag.update(500.0, VIEWPORT), None);
        assert_eq!(drag.finish(500.0, VIEWPORT), None);
    }
}
