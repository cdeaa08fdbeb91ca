// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interaction counting.
//!
//! Every user interaction emits a path/title pair to a [`Tracker`]. Paths are
//! hierarchical (`node/<id>`, `nav/next`, `panel/<key>`, `contact/email`,
//! `contact/profile`, `ref/link-click`); failures in the sink must never
//! surface to the user, so the interface is infallible by contract.

/// Sink for interaction counts. Implementations swallow their own errors.
pub trait Tracker {
    fn count(&self, path: &str, title: &str);
}

/// Discards every event. Used when no counting backend is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracker;

impl Tracker for NoopTracker {
    fn count(&self, _path: &str, _title: &str) {}
}
