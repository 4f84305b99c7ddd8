//! Terminal rendering
//!
//! Rasterizes the wheel into a character canvas. The pointer is drawn at the top of the
//! wheel, which is `POINTER_ANGLE` in the wheel frame, so the segment under it is the
//! one the resolver picks.

pub mod canvas;
pub mod shapes;

pub use canvas::{CELL_ASPECT, Canvas, Cell};
pub use shapes::Disc;

use glam::DVec2;

use crate::consts::POINTER_ANGLE;
use crate::polar_to_screen;
use crate::sim::{Session, text_tone_for};
use canvas::colors;

/// Hub radius as a fraction of the wheel radius
const HUB_RATIO: f64 = 0.1;
/// Labels sit this far out from the center (fraction of the radius)
const LABEL_RATIO: f64 = 2.0 / 3.0;

/// Fixed wheel placement for a given radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelView {
    pub disc: Disc,
    width: usize,
    height: usize,
}

impl WheelView {
    /// Layout for a wheel `radius` rows tall (pointer row above, margin row below)
    pub fn new(radius: u16) -> Self {
        let radius = radius.max(1) as f64;
        let width = (4.0 * radius) as usize + 3;
        let height = (2.0 * radius) as usize + 3;
        Self {
            disc: Disc {
                center: DVec2::new(width as f64 / 2.0, radius + 1.5),
                radius,
            },
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Canvas cell sitting directly under the pointer on the wheel's rim
    pub fn pointer_cell(&self) -> (usize, usize) {
        let (col, row) = self
            .disc
            .cell_at(polar_to_screen(self.disc.radius - 1.0, POINTER_ANGLE));
        (col.max(0) as usize, row)
    }

    /// Draw the session's wheel at its current rotation
    pub fn render(&self, session: &Session, use_color: bool) -> Canvas {
        let mut canvas = if use_color {
            Canvas::filled(self.width, self.height, colors::BACKGROUND)
        } else {
            Canvas::new(self.width, self.height)
        };

        if session.options().is_empty() {
            self.draw_empty(&mut canvas, use_color);
        } else {
            self.draw_segments(&mut canvas, session, use_color);
        }

        shapes::pointer(&mut canvas, &self.disc, colors::POINTER, use_color);
        canvas
    }

    fn draw_empty(&self, canvas: &mut Canvas, use_color: bool) {
        let (glyph, text_fg) = if use_color {
            (' ', Some(colors::TEXT))
        } else {
            ('.', None)
        };
        shapes::disc(canvas, &self.disc, colors::EMPTY_WHEEL, glyph);
        if !use_color {
            clear_backgrounds(canvas);
        }

        let center = self.disc.center;
        let row = center.y.floor() as usize;
        canvas.put_centered(center.x, row.saturating_sub(1), "Add choices to", text_fg);
        canvas.put_centered(center.x, row, "create the wheel!", text_fg);
    }

    fn draw_segments(&self, canvas: &mut Canvas, session: &Session, use_color: bool) {
        let segments = session.segments();
        let colors_for_options = session.colors();
        shapes::wheel_segments(canvas, &self.disc, &segments, colors_for_options, use_color);

        let hub = Disc {
            center: self.disc.center,
            radius: (self.disc.radius * HUB_RATIO).max(0.5),
        };
        shapes::disc(canvas, &hub, colors::HUB, if use_color { ' ' } else { 'O' });
        if !use_color {
            clear_backgrounds(canvas);
        }

        let max_chars = (self.disc.radius as usize).max(4);
        for segment in &segments {
            let index = segment.option_index;
            let Some(text) = session.options().get(index) else {
                continue;
            };
            let fg = if use_color {
                colors_for_options
                    .get(index)
                    .map(|c| text_tone_for(*c).color())
            } else {
                None
            };
            let at = polar_to_screen(self.disc.radius * LABEL_RATIO, segment.mid_angle());
            shapes::label(canvas, &self.disc, at, text, max_chars, fg);
        }
    }
}

fn clear_backgrounds(canvas: &mut Canvas) {
    for row in 0..canvas.height() {
        for col in 0..canvas.width() {
            if let Some(cell) = canvas.get_mut(col, row) {
                cell.bg = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spun_session(labels: &[&str], seed: u64) -> Session {
        let mut session = Session::new(seed);
        for label in labels {
            session.add_option(label).unwrap();
        }
        session.start_spin().unwrap();
        while session.tick().is_none() {}
        session
    }

    #[test]
    fn test_view_dimensions() {
        let view = WheelView::new(10);
        assert_eq!(view.width(), 43);
        assert_eq!(view.height(), 23);
        assert_eq!(view.pointer_cell(), (21, 2));
    }

    #[test]
    fn test_empty_wheel_message() {
        let view = WheelView::new(8);
        let text = view.render(&Session::new(1), false).to_plain();
        assert!(text.contains("Add choices to"));
        assert!(text.contains("create the wheel!"));
        assert!(text.lines().next().unwrap().contains('v'));
    }

    #[test]
    fn test_pointer_cell_shows_winner_color() {
        let view = WheelView::new(10);
        for seed in [1, 2, 3, 4, 5, 6] {
            let session = spun_session(&["A", "B", "C", "D", "E"], seed);
            let winner = session.last_winner().unwrap();
            let canvas = view.render(&session, true);
            let (col, row) = view.pointer_cell();
            assert_eq!(canvas.get(col, row).unwrap().bg, Some(winner.color));
        }
    }

    #[test]
    fn test_labels_are_drawn() {
        let view = WheelView::new(10);
        let mut session = Session::new(1);
        for label in ["Pizza", "Sushi", "Tacos"] {
            session.add_option(label).unwrap();
        }
        let text = view.render(&session, false).to_plain();
        for label in ["Pizza", "Sushi", "Tacos"] {
            assert!(text.contains(label), "missing {label}:\n{text}");
        }
    }

    #[test]
    fn test_label_tone_contrasts_with_segment() {
        let view = WheelView::new(10);
        let mut session = Session::new(1);
        session.add_option("Solo").unwrap();
        let canvas = view.render(&session, true);
        let cell = (0..canvas.height())
            .flat_map(|row| (0..canvas.width()).map(move |col| (col, row)))
            .filter_map(|(col, row)| canvas.get(col, row))
            .find(|c| c.ch == 'S')
            .unwrap();
        let bg = cell.bg.unwrap();
        assert_eq!(cell.fg, Some(text_tone_for(bg).color()));
    }
}
