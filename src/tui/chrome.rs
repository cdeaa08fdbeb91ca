// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Diagram styling, drawer, tab strip, and footer helpers used by TUI
/// rendering.
fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// The full raster as styled text. The text itself is selection-independent;
/// only the styles change, driven by the paint index and the scene outlines.
fn diagram_text(app: &App) -> Text<'static> {
    let raster = &app.raster;
    let width = raster.width();
    let mut styles = vec![Style::default(); width * raster.height()];
    for (paint, spans) in raster.paints() {
        let patch = paint_patch(app, paint);
        for &(line, start, end) in spans {
            for col in start..end.min(width) {
                let cell = &mut styles[line * width + col];
                *cell = cell.patch(patch);
            }
        }
    }

    let mut lines = Vec::with_capacity(raster.height());
    for (row, text) in raster.lines().iter().enumerate() {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut buf = String::new();
        let mut current = styles[row * width];
        for (col, ch) in text.chars().enumerate() {
            let style = styles[row * width + col];
            if style != current {
                if !buf.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut buf), current));
                }
                current = style;
            }
            buf.push(ch);
        }
        if !buf.is_empty() {
            spans.push(Span::styled(buf, current));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

fn paint_patch(app: &App, paint: &ScenePaint) -> Style {
    match paint {
        ScenePaint::LaneBand(lane_id) => app
            .graph
            .lane(lane_id)
            .map(|lane| app.theme.band_style(lane.color()))
            .unwrap_or_default(),
        ScenePaint::LaneLabel(lane_id) => app
            .graph
            .lane(lane_id)
            .map(|lane| {
                app.theme
                    .lane_style(lane.color())
                    .add_modifier(Modifier::BOLD)
            })
            .unwrap_or_default(),
        ScenePaint::Edges => app.theme.edge_style(),
        ScenePaint::EdgeLabels => app.theme.edge_label_style(),
        ScenePaint::NodeBody(_) => app.theme.node_style(),
        ScenePaint::NodeAccent(node_id) => app
            .scene
            .node_box(node_id)
            .map(|node| app.theme.lane_style(&node.accent_color))
            .unwrap_or_default(),
        ScenePaint::NodeOutline(node_id) => app
            .scene
            .node_box(node_id)
            .map(|node| {
                app.theme
                    .outline_style(&node.outline.color, node.outline.emphasized)
            })
            .unwrap_or_default(),
    }
}

fn render_drawer(
    frame: &mut Frame<'_>,
    app: &App,
    content: &DrawerContent,
    area: Rect,
    narrow: bool,
) {
    let title = format!(" {} ", content.title);
    let block = if narrow {
        // Top border doubles as the drag handle.
        Block::default()
            .borders(Borders::TOP)
            .border_style(app.theme.hint_style())
            .title(Span::styled(
                title,
                app.theme.drawer_title_style(content.accent_color.as_deref()),
            ))
    } else {
        Block::default()
            .borders(Borders::LEFT)
            .border_style(app.theme.hint_style())
            .title(Span::styled(
                title,
                app.theme.drawer_title_style(content.accent_color.as_deref()),
            ))
    };

    let body = Paragraph::new(Text::from(drawer_lines(app, content)))
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .scroll((app.drawer_scroll, 0))
        .block(block);
    frame.render_widget(body, area);
}

fn drawer_lines(app: &App, content: &DrawerContent) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let mut lines = Vec::new();

    if content.nav.is_none() {
        lines.push(tabs_line(app));
        lines.push(Line::default());
    }

    let mut link_number = 0usize;
    for block in &content.blocks {
        match block {
            DrawerBlock::Paragraph(text) => {
                for part in text.split('\n') {
                    lines.push(Line::from(Span::raw(part.to_owned())));
                }
                lines.push(Line::default());
            }
            DrawerBlock::Label(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    theme.heading_style(),
                )));
            }
            DrawerBlock::Link(link) => {
                link_number += 1;
                lines.push(Line::from(vec![
                    Span::styled(format!("[{link_number}] "), theme.hint_style()),
                    Span::styled(link.text.clone(), theme.link_style()),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("    {}", link.url),
                    theme.hint_style(),
                )));
            }
            DrawerBlock::KeyHint { keys, action } => {
                lines.push(Line::from(vec![
                    Span::styled(format!("{keys:>8}  "), theme.heading_style()),
                    Span::raw(action.clone()),
                ]));
            }
        }
    }

    if let Some(nav) = &content.nav {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("← {}", nav.previous_hint()),
            theme.hint_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!("→ {}", nav.next_hint()),
            theme.hint_style(),
        )));
    }

    lines
}

fn tabs_line(app: &App) -> Line<'static> {
    let active = app.controller.selection().active_panel();
    let mut spans = Vec::with_capacity(PanelKey::ALL.len() * 2);
    for panel in PanelKey::ALL {
        let style = if active == Some(panel) {
            app.theme.heading_style().add_modifier(Modifier::REVERSED)
        } else {
            app.theme.hint_style()
        };
        spans.push(Span::styled(format!(" {} ", panel.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn footer_line(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = &[
        ("q", "quit"),
        ("enter", "start"),
        ("←/→", "walk"),
        ("a c r ?", "panels"),
        ("tab", "cycle"),
        ("esc", "close"),
    ];
    let mut spans = Vec::with_capacity(hints.len() * 2 + 1);
    for (keys, label) in hints {
        spans.push(Span::styled(
            format!(" {keys}"),
            Style::default().fg(FOOTER_KEY_COLOR),
        ));
        spans.push(Span::styled(
            format!(" {label} "),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    if let Some(message) = app.toast_suffix() {
        spans.push(Span::styled(format!(" {message} "), app.theme.toast_style()));
    }
    Line::from(spans)
}
