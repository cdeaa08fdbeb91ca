// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

/// Terminal color scheme.
///
/// Lane colors come from the map file as `#rrggbb`; the optional env override
/// replaces the base foreground/background for terminals with unusual
/// palettes.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    base: Option<(Color, Color)>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        Ok(Self {
            base: base_override_from_env()?,
        })
    }

    pub(crate) fn base_style(&self) -> Style {
        match self.base {
            Some((fg, bg)) => Style::default().fg(fg).bg(bg),
            None => Style::default(),
        }
    }

    // The remaining styles are patches layered onto the base with
    // `Style::patch`, so each sets only the fields it owns.

    /// Text drawn in a lane's authored color.
    pub(crate) fn lane_style(&self, hex: &str) -> Style {
        Style::default().fg(lane_color(hex))
    }

    /// Background tint for a lane band. The authored color, heavily dimmed.
    pub(crate) fn band_style(&self, hex: &str) -> Style {
        Style::default().bg(dim(lane_color(hex), 8))
    }

    pub(crate) fn edge_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub(crate) fn edge_label_style(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub(crate) fn node_style(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Outline style for a node box. Selected nodes use the lane color bold.
    pub(crate) fn outline_style(&self, hex: &str, emphasized: bool) -> Style {
        let style = Style::default().fg(lane_color(hex));
        if emphasized {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub(crate) fn drawer_title_style(&self, accent: Option<&str>) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        match accent {
            Some(hex) => style.fg(lane_color(hex)),
            None => style,
        }
    }

    pub(crate) fn heading_style(&self) -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn link_style(&self) -> Style {
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub(crate) fn hint_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub(crate) fn toast_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}

/// Parses an authored `#rrggbb` color, falling back to the default foreground
/// on malformed input. Map colors are authored, never user input.
pub(crate) fn lane_color(hex: &str) -> Color {
    parse_hex_color(hex).unwrap_or(Color::Reset)
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let rgb = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

/// Scales an RGB color down to `numerator/64` of its brightness.
fn dim(color: Color, numerator: u16) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as u16 * numerator / 64) as u8,
            (g as u16 * numerator / 64) as u8,
            (b as u16 * numerator / 64) as u8,
        ),
        other => other,
    }
}

fn base_override_from_env() -> Result<Option<(Color, Color)>, ThemeError> {
    let (name, value) = match env::var("PROTEUS_TUI_PALETTE") {
        Ok(value) => ("PROTEUS_TUI_PALETTE", value),
        Err(env::VarError::NotPresent) => match env::var("PROTEUS_PALETTE") {
            Ok(value) => ("PROTEUS_PALETTE", value),
            Err(env::VarError::NotPresent) => return Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: "PROTEUS_PALETTE".to_string(),
                    value: "<non-unicode>".to_string(),
                });
            }
        },
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ThemeError::InvalidEnv {
                name: "PROTEUS_TUI_PALETTE".to_string(),
                value: "<non-unicode>".to_string(),
            });
        }
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(ThemeError::InvalidEnv {
            name: name.to_string(),
            value: format!("{trimmed} (expected fg,bg)"),
        });
    }
    let mut colors = parts.iter().map(|part| {
        parse_hex_color(part).ok_or_else(|| ThemeError::InvalidEnv {
            name: name.to_string(),
            value: format!("{part} (expected #RRGGBB)"),
        })
    });
    let fg = colors.next().transpose()?.unwrap_or(Color::Reset);
    let bg = colors.next().transpose()?.unwrap_or(Color::Reset);
    Ok(Some((fg, bg)))
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}

#[cfg(test)]
mod tests {
    use super::{dim, lane_color, parse_hex_color};
    use ratatui::style::Color;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#60a5fa"), Some(Color::Rgb(0x60, 0xa5, 0xfa)));
        assert_eq!(parse_hex_color(" #FFffFF "), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("60a5fa"), None);
        assert_eq!(parse_hex_color("#60a5f"), None);
        assert_eq!(parse_hex_color("#60a5fg"), None);
    }

    #[test]
    fn malformed_lane_color_falls_back() {
        assert_eq!(lane_color("oops"), Color::Reset);
    }

    #[test]
    fn dim_scales_rgb_only() {
        assert_eq!(dim(Color::Rgb(64, 128, 255), 8), Color::Rgb(8, 16, 31));
        assert_eq!(dim(Color::Cyan, 8), Color::Cyan);
    }
}
