// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Detail drawer content.
//!
//! Builds the block list shown in the drawer for a selected node or an open
//! utility panel. Blocks are surface-independent; the TUI decides typography.

use crate::model::{Annotation, ContentGraph, Meta, Node, PanelKey};

/// Default drawer height as a fraction of the viewport height.
pub const DEFAULT_SHEET_RATIO: f64 = 0.85;

/// Heading above the per-node relevance text.
const RELEVANCE_HEADING: &str = "Relevance to this project";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    Profile,
    Reference,
}

impl LinkKind {
    /// Tracking path emitted when the link is activated.
    pub fn track_path(self) -> &'static str {
        match self {
            Self::Email => "contact/email",
            Self::Profile => "contact/profile",
            Self::Reference => "ref/link-click",
        }
    }

    pub fn track_title(self) -> &'static str {
        match self {
            Self::Email => "Contact: Email",
            Self::Profile => "Contact: Profile",
            Self::Reference => "Reference: Link Click",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub kind: LinkKind,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerBlock {
    Paragraph(String),
    /// Section heading within the drawer body.
    Label(String),
    Link(Link),
    KeyHint { keys: String, action: String },
}

/// Hints for the previous/next walkthrough controls under a node's detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControls {
    previous: Option<String>,
    next: Option<String>,
}

impl NavControls {
    pub fn previous_hint(&self) -> String {
        match &self.previous {
            Some(title) => format!("Previous: {title}"),
            None => "No previous node".to_owned(),
        }
    }

    pub fn next_hint(&self) -> String {
        match &self.next {
            Some(title) => format!("Next: {title}"),
            None => "No next node".to_owned(),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Everything the drawer renders for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerContent {
    pub title: String,
    /// Lane color for node detail; `None` for utility panels.
    pub accent_color: Option<String>,
    pub blocks: Vec<DrawerBlock>,
    pub nav: Option<NavControls>,
}

impl DrawerContent {
    /// The activatable links in block order, for number-key binding.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.blocks.iter().filter_map(|block| match block {
            DrawerBlock::Link(link) => Some(link),
            _ => None,
        })
    }
}

/// Builds the drawer content for a selected node.
pub fn node_detail(
    graph: &ContentGraph,
    node: &Node,
    previous: Option<&Node>,
    next: Option<&Node>,
) -> DrawerContent {
    let mut blocks = Vec::new();
    for paragraph in node.blurb_paragraphs() {
        blocks.push(DrawerBlock::Paragraph(paragraph.to_owned()));
    }
    if let Some(relevance) = graph
        .annotation(node.node_id())
        .and_then(Annotation::relevance)
    {
        blocks.push(DrawerBlock::Label(RELEVANCE_HEADING.to_owned()));
        blocks.push(DrawerBlock::Paragraph(relevance.to_owned()));
    }

    DrawerContent {
        title: node.title(),
        accent_color: Some(graph.lane_of(node).color().to_owned()),
        blocks,
        nav: Some(NavControls {
            previous: previous.map(Node::title),
            next: next.map(Node::title),
        }),
    }
}

/// Builds the drawer content for a utility panel.
pub fn panel_detail(key: PanelKey, meta: &Meta) -> DrawerContent {
    let blocks = match key {
        PanelKey::About => about_blocks(meta),
        PanelKey::Contact => contact_blocks(meta),
        PanelKey::References => reference_blocks(meta),
        PanelKey::Help => help_blocks(),
    };
    DrawerContent {
        title: key.title().to_owned(),
        accent_color: None,
        blocks,
        nav: None,
    }
}

fn about_blocks(meta: &Meta) -> Vec<DrawerBlock> {
    let mut blocks = Vec::new();
    if !meta.title.is_empty() {
        blocks.push(DrawerBlock::Label(meta.title.clone()));
    }
    for paragraph in crate::model::graph::paragraphs(&meta.thesis) {
        blocks.push(DrawerBlock::Paragraph(paragraph.to_owned()));
    }
    if !meta.institution.is_empty() {
        blocks.push(DrawerBlock::Paragraph(meta.institution.clone()));
    }
    if !meta.program.is_empty() {
        blocks.push(DrawerBlock::Paragraph(meta.program.clone()));
    }
    blocks
}

fn contact_blocks(meta: &Meta) -> Vec<DrawerBlock> {
    let mut blocks = Vec::new();
    if !meta.cta.is_empty() {
        blocks.push(DrawerBlock::Paragraph(meta.cta.clone()));
    }
    if !meta.contact_name.is_empty() {
        blocks.push(DrawerBlock::Label(meta.contact_name.clone()));
    }
    if !meta.contact_email.is_empty() {
        blocks.push(DrawerBlock::Link(Link {
            kind: LinkKind::Email,
            text: meta.contact_email.clone(),
            url: format!("mailto:{}", meta.contact_email),
        }));
    }
    if !meta.profile_url.is_empty() {
        blocks.push(DrawerBlock::Link(Link {
            kind: LinkKind::Profile,
            text: "Profile".to_owned(),
            url: meta.profile_url.clone(),
        }));
    }
    blocks
}

fn reference_blocks(meta: &Meta) -> Vec<DrawerBlock> {
    let mut blocks = Vec::new();
    for section in &meta.reference_sections {
        blocks.push(DrawerBlock::Label(section.title.clone()));
        for entry in &section.entries {
            blocks.push(DrawerBlock::Link(Link {
                kind: LinkKind::Reference,
                text: entry.text.clone(),
                url: entry.url.clone(),
            }));
        }
    }
    blocks
}

fn help_blocks() -> Vec<DrawerBlock> {
    [
        ("click", "select a node and open its detail"),
        ("Enter", "select the first node of the walkthrough"),
        ("← / →", "step the walkthrough while a node is open"),
        ("h j k l", "pan the diagram"),
        ("a c r", "open About, Contact, References"),
        ("Tab", "cycle the utility panels"),
        ("1-9", "follow a numbered link in the open panel"),
        ("Esc", "close the drawer"),
        ("q", "quit"),
    ]
    .into_iter()
    .map(|(keys, action)| DrawerBlock::KeyHint {
        keys: keys.to_owned(),
        action: action.to_owned(),
    })
    .collect()
}

/// Drawer height policy. The user override survives selection changes and is
/// dropped only when the drawer closes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetHeight {
    #[default]
    Auto,
    User(f64),
}

impl SheetHeight {
    /// Resolves to a concrete height for the given viewport height.
    pub fn resolve(self, viewport_height: f64) -> f64 {
        match self {
            Self::Auto => viewport_height * DEFAULT_SHEET_RATIO,
            Self::User(height) => height,
        }
    }

    pub fn commit(&mut self, height: f64) {
        *self = Self::User(height);
    }

    pub fn reset(&mut self) {
        *self = Self::Auto;
    }
}
