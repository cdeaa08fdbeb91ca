// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus, a terminal viewer for authored research diagrams.
//!
//! A map is a fixed directed graph of labeled nodes grouped into colored
//! lanes, walked node by node through a detail drawer. Geometry, scene
//! construction, selection and gestures are all headless; the `tui` module is
//! the only terminal-facing surface.

pub mod controller;
pub mod geometry;
pub mod gesture;
pub mod model;
pub mod panel;
pub mod render;
pub mod scene;
pub mod store;
pub mod track;
pub mod tui;
pub mod viewport;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
