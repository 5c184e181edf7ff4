//! Frame layout: title bar, six labelled unit rows, status bar.

use crate::clock::{Cascade, RenderMode, MARKER_X, ROW_HEIGHT};
use crate::view::strip::StripView;
use crate::view::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Columns reserved for the row label to the left of each strip.
pub const LABEL_WIDTH: u16 = 8;

/// Terminal rows one unit strip occupies.
///
/// Text mode is a single line. Glyph mode maps pixels onto braille dots,
/// four per terminal row, multiplied by the scale.
pub fn row_height(mode: RenderMode, scale: u32) -> u16 {
    match mode {
        RenderMode::Text => 1,
        RenderMode::Glyphs => (ROW_HEIGHT * scale.max(1)).div_ceil(4) as u16,
    }
}

/// Minimum `(width, height)` the clock needs.
///
/// Height covers the title bar, six rows and the status bar. Width keeps
/// the marker line on screen; strips wider than the terminal simply clip on
/// the right.
pub fn required_size(mode: RenderMode, scale: u32) -> (u16, u16) {
    let height = 2 + 6 * row_height(mode, scale);
    let marker_cols = match mode {
        RenderMode::Text => MARKER_X as u16 + 1,
        RenderMode::Glyphs => (MARKER_X as u32 * scale.max(1)).div_ceil(2) as u16 + 1,
    };
    (LABEL_WIDTH + marker_cols, height)
}

/// Render the whole frame.
///
/// A terminal that shrank below the required size after startup gets a
/// notice instead of a truncated clock.
pub fn render_layout(
    frame: &mut Frame,
    cascade: &Cascade,
    mode: RenderMode,
    palette: Palette,
    scale: u32,
) {
    let area = frame.area();
    let (req_w, req_h) = required_size(mode, scale);
    if area.width < req_w || area.height < req_h {
        render_too_small(frame, area, req_w, req_h);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Unit rows
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_rows(frame, chunks[1], cascade, mode, palette, scale);
    render_status(frame, chunks[2]);
}

/// Render the six unit rows, slowest on top.
fn render_rows(
    frame: &mut Frame,
    area: Rect,
    cascade: &Cascade,
    mode: RenderMode,
    palette: Palette,
    scale: u32,
) {
    let height = row_height(mode, scale);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height); 6])
        .split(area);

    for (drawer, row) in cascade.drawers().zip(rows.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
            .split(*row);

        let label = Paragraph::new(format!("{} ", drawer.kind().label()))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(label, cols[0]);
        frame.render_widget(StripView::new(drawer.surface(), mode, palette, scale), cols[1]);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = format!(" odoclock {}", env!("CARGO_PKG_VERSION"));
    let paragraph = Paragraph::new(title).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(" q: quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

fn render_too_small(frame: &mut Frame, area: Rect, req_w: u16, req_h: u16) {
    let message = format!(
        "terminal too small: need {req_w}x{req_h}, have {}x{}",
        area.width, area.height
    );
    frame.render_widget(Paragraph::new(message), area);
}

// ===== Tests =====
