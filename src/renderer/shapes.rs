//! Shape rasterization for the wheel
//!
//! Every shape works in wheel space: offsets from the wheel center in row units,
//! y pointing down, angles in the wheel frame.

use glam::DVec2;

use super::canvas::{CELL_ASPECT, Canvas, Cell};
use crate::screen_to_polar;
use crate::sim::{Color, Segment, segment_at};

/// Glyphs used to tell segments apart when colors are off
const SEGMENT_GLYPHS: &[char] = &['#', '%', '+', '=', '@', '*', 'o', '~', ':', '&'];

/// Placement of a round shape on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    /// Center in cell coordinates (a cell's center is at col + 0.5, row + 0.5)
    pub center: DVec2,
    /// Radius in rows
    pub radius: f64,
}

impl Disc {
    /// Wheel-space offset of a cell's center
    pub fn offset_of(&self, col: usize, row: usize) -> DVec2 {
        DVec2::new(
            (col as f64 + 0.5 - self.center.x) / CELL_ASPECT,
            row as f64 + 0.5 - self.center.y,
        )
    }

    /// Cell containing a wheel-space offset
    pub fn cell_at(&self, offset: DVec2) -> (isize, usize) {
        let col = (self.center.x + offset.x * CELL_ASPECT).floor() as isize;
        let row = (self.center.y + offset.y).floor().max(0.0) as usize;
        (col, row)
    }

    /// Visit each cell inside the radius with its polar position (r, degrees)
    fn for_each_cell(&self, canvas: &mut Canvas, mut f: impl FnMut(&mut Cell, f64, f64)) {
        for row in 0..canvas.height() {
            for col in 0..canvas.width() {
                let (r, degrees) = screen_to_polar(self.offset_of(col, row));
                if r > self.radius {
                    continue;
                }
                if let Some(cell) = canvas.get_mut(col, row) {
                    f(cell, r, degrees);
                }
            }
        }
    }
}

/// Fill a disc with one color
pub fn disc(canvas: &mut Canvas, disc: &Disc, color: Color, glyph: char) {
    disc.for_each_cell(canvas, |cell, _, _| {
        *cell = Cell {
            ch: glyph,
            fg: None,
            bg: Some(color),
        };
    });
}

/// Fill the wheel with its segments
///
/// With `use_color` off each segment gets its own glyph instead of a background.
pub fn wheel_segments(
    canvas: &mut Canvas,
    disc: &Disc,
    segments: &[Segment],
    colors: &[Color],
    use_color: bool,
) {
    disc.for_each_cell(canvas, |cell, _, degrees| {
        let Some(segment) = segment_at(segments, degrees) else {
            return;
        };
        let index = segment.option_index;
        cell.fg = None;
        if use_color {
            cell.ch = ' ';
            cell.bg = colors.get(index).copied();
        } else {
            cell.ch = SEGMENT_GLYPHS[index % SEGMENT_GLYPHS.len()];
            cell.bg = None;
        }
    });
}

/// Draw the pointer just above the top of the wheel
pub fn pointer(canvas: &mut Canvas, disc: &Disc, color: Color, use_color: bool) {
    let col = disc.center.x.floor() as usize;
    let row = (disc.center.y - disc.radius - 1.0).floor().max(0.0) as usize;
    let ch = if use_color { '▼' } else { 'v' };
    if let Some(cell) = canvas.get_mut(col, row) {
        cell.ch = ch;
        cell.fg = Some(color);
    }
}

/// Write a label centered on a wheel-space point, truncated to `max_chars`
pub fn label(
    canvas: &mut Canvas,
    disc: &Disc,
    at: DVec2,
    text: &str,
    max_chars: usize,
    fg: Option<Color>,
) {
    let text = truncate(text, max_chars);
    let (_, row) = disc.cell_at(at);
    let center_col = disc.center.x + at.x * CELL_ASPECT;
    canvas.put_centered(center_col, row, &text, fg);
}

/// Shorten text to `max_chars`, marking the cut with an ellipsis
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
