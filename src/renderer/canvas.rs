//! Character-cell canvas
//!
//! Terminal cells are roughly twice as tall as they are wide, so shapes are drawn in
//! row units with the x axis stretched by `CELL_ASPECT`.

use std::fmt::Write;

use crate::sim::Color;

/// Horizontal cells per vertical cell for round shapes
pub const CELL_ASPECT: f64 = 2.0;

/// Theme colors for the terminal front end
pub mod colors {
    use crate::sim::Color;

    pub const BACKGROUND: Color = Color::new(0x34, 0x49, 0x5e);
    pub const EMPTY_WHEEL: Color = Color::new(0x7f, 0x8c, 0x8d);
    pub const HUB: Color = Color::new(0x2c, 0x3e, 0x50);
    pub const POINTER: Color = Color::new(0xe7, 0x4c, 0x3c);
    pub const TEXT: Color = Color::new(0xec, 0xf0, 0xf1);
}

/// A single terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
        }
    }
}

/// A fixed-size grid of cells, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    /// Canvas filled with a background color
    pub fn filled(width: usize, height: usize, bg: Color) -> Self {
        let mut canvas = Self::new(width, height);
        for cell in &mut canvas.cells {
            cell.bg = Some(bg);
        }
        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.width && row < self.height {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        if col < self.width && row < self.height {
            self.cells.get_mut(row * self.width + col)
        } else {
            None
        }
    }

    /// Overwrite a cell (out-of-bounds writes are dropped)
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if let Some(c) = self.get_mut(col, row) {
            *c = cell;
        }
    }

    /// Write text starting at a (possibly negative) column, keeping each cell's background
    pub fn put_str(&mut self, col: isize, row: usize, text: &str, fg: Option<Color>) {
        for (i, ch) in text.chars().enumerate() {
            let x = col + i as isize;
            if x < 0 {
                continue;
            }
            if let Some(cell) = self.get_mut(x as usize, row) {
                cell.ch = ch;
                cell.fg = fg;
            }
        }
    }

    /// Write text centered on a column
    pub fn put_centered(&mut self, center_col: f64, row: usize, text: &str, fg: Option<Color>) {
        let len = text.chars().count() as f64;
        let start = (center_col - len / 2.0).round() as isize;
        self.put_str(start, row, text, fg);
    }

    /// Characters of one row (trailing spaces kept)
    pub fn row_text(&self, row: usize) -> String {
        (0..self.width)
            .filter_map(|col| self.get(col, row))
            .map(|c| c.ch)
            .collect()
    }

    /// Plain text, one line per row, trailing spaces trimmed
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            out.push_str(self.row_text(row).trim_end());
            out.push('\n');
        }
        out
    }

    /// Text with 24-bit ANSI color escapes
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            let mut style: (Option<Color>, Option<Color>) = (None, None);
            for col in 0..self.width {
                let Some(cell) = self.get(col, row) else {
                    continue;
                };
                if (cell.fg, cell.bg) != style {
                    out.push_str("\x1b[0m");
                    if let Some(fg) = cell.fg {
                        let _ = write!(out, "\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b);
                    }
                    if let Some(bg) = cell.bg {
                        let _ = write!(out, "\x1b[48;2;{};{};{}m", bg.r, bg.g, bg.b);
                    }
                    style = (cell.fg, cell.bg);
                }
                out.push(cell.ch);
            }
            out.push_str("\x1b[0m\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut canvas = Canvas::new(3, 2);
        canvas.set(5, 5, Cell::default());
        assert!(canvas.get(3, 0).is_none());
        assert!(canvas.get(0, 2).is_none());
        canvas.put_str(-2, 0, "abcde", None);
        assert_eq!(canvas.row_text(0), "cde");
    }

    #[test]
    fn test_put_centered() {
        let mut canvas = Canvas::new(9, 1);
        canvas.put_centered(4.5, 0, "abc", None);
        assert_eq!(canvas.row_text(0), "   abc   ");
    }

    #[test]
    fn test_put_str_keeps_background() {
        let mut canvas = Canvas::filled(4, 1, colors::BACKGROUND);
        canvas.put_str(1, 0, "hi", Some(colors::TEXT));
        let cell = canvas.get(1, 0).unwrap();
        assert_eq!(cell.ch, 'h');
        assert_eq!(cell.fg, Some(colors::TEXT));
        assert_eq!(cell.bg, Some(colors::BACKGROUND));
    }

    #[test]
    fn test_plain_output_trims_rows() {
        let mut canvas = Canvas::new(5, 2);
        canvas.put_str(0, 1, "ok", None);
        assert_eq!(canvas.to_plain(), "\nok\n");
    }

    #[test]
    fn test_ansi_output_emits_colors_once_per_run() {
        let canvas = Canvas::filled(3, 1, Color::new(1, 2, 3));
        let ansi = canvas.to_ansi();
        assert_eq!(ansi.matches("\x1b[48;2;1;2;3m").count(), 1);
        assert!(ansi.ends_with("   \x1b[0m\n"));
    }
}
