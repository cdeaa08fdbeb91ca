// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Upper bound on canvas cells, guarding against degenerate dimensions.
const MAX_CANVAS_AREA: usize = 4_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas {width}x{height} exceeds maximum area")
            }
            Self::OutOfBounds { x, y } => write!(f, "cell ({x}, {y}) outside canvas"),
        }
    }
}

impl std::error::Error for CanvasError {}

/// A fixed-size character grid the scene is rasterized onto.
///
/// Rows are y, columns are x, origin top-left. Cells start as spaces.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let area = width
            .checked_mul(height)
            .filter(|&area| area <= MAX_CANVAS_AREA)
            .ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![' '; area],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        if !self.contains(x, y) {
            return Err(CanvasError::OutOfBounds { x, y });
        }
        self.cells[y * self.width + x] = ch;
        Ok(())
    }

    /// Sets a cell, silently dropping anything outside the grid. Curves and
    /// labels near the diagram margin clip rather than fail.
    pub fn plot(&mut self, x: isize, y: isize, ch: char) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if self.contains(x, y) {
            self.cells[y * self.width + x] = ch;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Writes `text` starting at `(x, y)`, clipping at the canvas edges.
    /// Returns the half-open column range actually written, if any.
    pub fn write_clipped(&mut self, x: isize, y: isize, text: &str) -> Option<(usize, usize)> {
        if y < 0 || y as usize >= self.height {
            return None;
        }
        let y = y as usize;
        let mut first = None;
        let mut last = 0usize;
        for (offset, ch) in text.chars().enumerate() {
            let col = x + offset as isize;
            if col < 0 {
                continue;
            }
            let col = col as usize;
            if col >= self.width {
                break;
            }
            self.cells[y * self.width + col] = ch;
            first.get_or_insert(col);
            last = col;
        }
        first.map(|start| (start, last + 1))
    }

    /// Draws a box with rounded corners, clipping at the canvas edges.
    pub fn draw_box(&mut self, x: isize, y: isize, width: usize, height: usize) {
        if width < 2 || height < 2 {
            return;
        }
        let right = x + width as isize - 1;
        let bottom = y + height as isize - 1;
        for col in x + 1..right {
            self.plot(col, y, '─');
            self.plot(col, bottom, '─');
        }
        for row in y + 1..bottom {
            self.plot(x, row, '│');
            self.plot(right, row, '│');
        }
        self.plot(x, y, '╭');
        self.plot(right, y, '╮');
        self.plot(x, bottom, '╰');
        self.plot(right, bottom, '╯');
    }

    /// Extracts row `y` as a string, trailing spaces included.
    pub fn row(&self, y: usize) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(self.cells[start..start + self.width].iter().collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(move |y| {
            let start = y * self.width;
            self.cells[start..start + self.width].iter().collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, CanvasError};

    #[test]
    fn new_rejects_oversized_grid() {
        let err = Canvas::new(10_000, 10_000).unwrap_err();
        assert_eq!(
            err,
            CanvasError::AreaOverflow {
                width: 10_000,
                height: 10_000
            }
        );
    }

    #[test]
    fn set_rejects_out_of_bounds() {
        let mut canvas = Canvas::new(4, 2).expect("canvas");
        assert!(canvas.set(3, 1, 'x').is_ok());
        assert_eq!(
            canvas.set(4, 0, 'x').unwrap_err(),
            CanvasError::OutOfBounds { x: 4, y: 0 }
        );
        assert_eq!(canvas.get(3, 1), Some('x'));
    }

    #[test]
    fn plot_drops_out_of_bounds_silently() {
        let mut canvas = Canvas::new(4, 2).expect("canvas");
        canvas.plot(-1, 0, 'x');
        canvas.plot(0, 5, 'x');
        canvas.plot(1, 1, 'x');
        assert_eq!(canvas.row(0).expect("row"), "    ");
        assert_eq!(canvas.row(1).expect("row"), " x  ");
    }

    #[test]
    fn write_clipped_reports_written_range() {
        let mut canvas = Canvas::new(6, 1).expect("canvas");
        assert_eq!(canvas.write_clipped(-2, 0, "hello!"), Some((0, 4)));
        assert_eq!(canvas.row(0).expect("row"), "llo!  ");
        assert_eq!(canvas.write_clipped(4, 0, "abcd"), Some((4, 6)));
        assert_eq!(canvas.row(0).expect("row"), "llo!ab");
        assert_eq!(canvas.write_clipped(9, 0, "zz"), None);
        assert_eq!(canvas.write_clipped(0, 3, "zz"), None);
    }

    #[test]
    fn draw_box_uses_rounded_corners() {
        let mut canvas = Canvas::new(5, 3).expect("canvas");
        canvas.draw_box(0, 0, 5, 3);
        assert_eq!(canvas.row(0).expect("row"), "╭───╮");
        assert_eq!(canvas.row(1).expect("row"), "│   │");
        assert_eq!(canvas.row(2).expect("row"), "╰───╯");
    }
}
