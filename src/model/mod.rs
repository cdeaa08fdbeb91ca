// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model for the authored content graph.
//!
//! Everything here is authored once and immutable for the process lifetime;
//! the only mutable viewer state is [`Selection`].

pub mod graph;
pub mod ids;
pub mod selection;

pub use graph::{
    Annotation, ContentGraph, Edge, GraphError, Lane, Meta, Node, ReferenceEntry, ReferenceSection,
};
pub use ids::{Id, IdError, LaneId, NodeId};
pub use selection::{PanelKey, Selection};
