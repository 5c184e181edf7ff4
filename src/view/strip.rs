//! One unit row: blits a drawer's retained surface into the frame.
//!
//! The surface speaks abstract pixels; this widget maps them onto terminal
//! cells. Text mode maps one pixel to one column on a single line. Glyph
//! mode maps pixels to braille dots (2 per column, 4 per row), multiplied
//! by the configured scale, via ratatui's canvas widget.

use crate::clock::{RenderMode, MARKER_X};
use crate::surface::{DrawOp, StripSurface};
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Widget,
    },
};

/// Widget rendering one drawer's surface ops plus the fixed marker line.
pub struct StripView<'a> {
    surface: &'a StripSurface,
    mode: RenderMode,
    palette: Palette,
    scale: u32,
}

impl<'a> StripView<'a> {
    /// Create a view over one drawer's surface.
    pub fn new(surface: &'a StripSurface, mode: RenderMode, palette: Palette, scale: u32) -> Self {
        Self {
            surface,
            mode,
            palette,
            scale,
        }
    }

    /// Paint text ops directly into buffer cells, one pixel per column.
    ///
    /// Slots scrolling out on the left arrive with negative x; those
    /// columns are clipped, as is anything wider than the row.
    fn render_text(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(
            area,
            Style::default().bg(self.palette.light()).fg(self.palette.dark()),
        );
        let row = area.y;
        for op in self.surface.ops() {
            let DrawOp::Text { text, x, ink, .. } = op else {
                // Strokes have no cell-resolution representation.
                continue;
            };
            for (i, ch) in text.chars().enumerate() {
                let col = x + i as i32;
                if col < 0 || col >= i32::from(area.width) {
                    continue;
                }
                let cell = &mut buf[(area.x + col as u16, row)];
                cell.set_char(ch);
                cell.set_fg(self.palette.ink(*ink));
            }
        }
        if MARKER_X < i32::from(area.width) {
            let cell = &mut buf[(area.x + MARKER_X as u16, row)];
            cell.set_char('│');
            cell.set_fg(self.palette.marker());
        }
    }

    /// Paint stroke ops onto a braille canvas.
    ///
    /// The canvas y axis points up while surface pixels grow downward, so
    /// y coordinates are flipped against the visible pixel height.
    fn render_glyphs(self, area: Rect, buf: &mut Buffer) {
        let scale = f64::from(self.scale.max(1));
        let width_px = f64::from(area.width) * 2.0 / scale;
        let height_px = f64::from(area.height) * 4.0 / scale;
        let palette = self.palette;
        let ops = self.surface.ops();
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(palette.light())
            .x_bounds([0.0, width_px])
            .y_bounds([0.0, height_px])
            .paint(|ctx| {
                for op in ops {
                    match op {
                        DrawOp::Stroke { segments, ink } => {
                            let color = palette.ink(*ink);
                            for seg in segments {
                                ctx.draw(&CanvasLine::new(
                                    f64::from(seg.x1),
                                    height_px - f64::from(seg.y1),
                                    f64::from(seg.x2),
                                    height_px - f64::from(seg.y2),
                                    color,
                                ));
                            }
                        }
                        DrawOp::Text { text, x, y, ink } => {
                            ctx.print(
                                f64::from(*x),
                                height_px - f64::from(*y),
                                Line::styled(
                                    text.clone(),
                                    Style::default().fg(palette.ink(*ink)),
                                ),
                            );
                        }
                    }
                }
                ctx.draw(&CanvasLine::new(
                    f64::from(MARKER_X),
                    0.0,
                    f64::from(MARKER_X),
                    height_px,
                    palette.marker(),
                ));
            })
            .render(area, buf);
    }
}

impl Widget for StripView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        match self.mode {
            RenderMode::Text => self.render_text(area, buf),
            RenderMode::Glyphs => self.render_glyphs(area, buf),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::UnitDrawer;
    use crate::config::ResolvedConfig;
    use crate::model::UnitKind;
    use crate::view::styles::ColorConfig;
    use chrono::{TimeZone, Utc};

    fn palette() -> Palette {
        Palette::new(&ResolvedConfig::default(), ColorConfig::from_env_and_args(false))
    }

    fn minute_drawer_at(mi: u32, s: u32) -> UnitDrawer {
        let mut drawer = UnitDrawer::new(UnitKind::Minute, RenderMode::Text);
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 13, mi, s).unwrap();
        drawer.draw(&now);
        drawer
    }

    #[test]
    fn text_mode_places_current_value_at_slot_zero() {
        let drawer = minute_drawer_at(42, 0);
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StripView::new(drawer.surface(), RenderMode::Text, palette(), 1).render(area, &mut buf);
        assert_eq!(buf[(5, 0)].symbol(), "4");
        assert_eq!(buf[(6, 0)].symbol(), "2");
        assert_eq!(buf[(25, 0)].symbol(), "4");
        assert_eq!(buf[(26, 0)].symbol(), "3");
    }

    #[test]
    fn text_mode_draws_the_marker_line() {
        let drawer = minute_drawer_at(42, 0);
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StripView::new(drawer.surface(), RenderMode::Text, palette(), 1).render(area, &mut buf);
        assert_eq!(buf[(40, 0)].symbol(), "│");
    }

    #[test]
    fn text_mode_clips_slots_scrolled_off_the_left() {
        // 59 seconds in: delta is 20, slot 0 starts at x = -15.
        let drawer = minute_drawer_at(42, 59);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        // Must not panic on negative or overflowing columns.
        StripView::new(drawer.surface(), RenderMode::Text, palette(), 1).render(area, &mut buf);
    }

    #[test]
    fn empty_area_is_a_no_op() {
        let drawer = minute_drawer_at(42, 0);
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        StripView::new(drawer.surface(), RenderMode::Text, palette(), 1).render(area, &mut buf);
    }

    #[test]
    fn glyph_mode_rasterizes_braille_dots() {
        let mut drawer = UnitDrawer::new(UnitKind::Minute, RenderMode::Glyphs);
        drawer.draw(&Utc.with_ymd_and_hms(2024, 3, 15, 13, 42, 0).unwrap());
        let area = Rect::new(0, 0, 110, 5);
        let mut buf = Buffer::empty(area);
        StripView::new(drawer.surface(), RenderMode::Glyphs, palette(), 1).render(area, &mut buf);

        let has_dots = (0..area.width).any(|x| {
            (0..area.height).any(|y| {
                buf[(x, y)]
                    .symbol()
                    .chars()
                    .any(|c| ('\u{2800}'..='\u{28ff}').contains(&c) && c != '\u{2800}')
            })
        });
        assert!(has_dots, "expected braille dots in the rendered strip");
    }
}
