//! One drawer per calendar unit.

use chrono::{DateTime, TimeZone};

use crate::clock::{RenderMode, CELL_WIDTH, ROW_HEIGHT, SLOT_COUNT, STRIP_WIDTH, TEXT_BASELINE_Y, TEXT_INSET_X};
use crate::glyph;
use crate::model::{RenderFrame, UnitKind};
use crate::surface::{Ink, StripSurface};

/// Fire-and-forget notification that a unit's current value just changed.
///
/// No payload beyond the unit's identity; consumers re-derive whatever they
/// need from the timestamp of their own next draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSignal {
    /// The unit whose value changed.
    pub kind: UnitKind,
}

/// Renders one calendar unit's strip of consecutive values.
///
/// The drawer exclusively owns its [`StripSurface`] and is the only thing
/// that mutates it. Its observed-value state doubles as the refresh state
/// machine: `None` until the first draw, then always the value computed on
/// the most recent draw.
#[derive(Debug)]
pub struct UnitDrawer {
    kind: UnitKind,
    mode: RenderMode,
    surface: StripSurface,
    last_rendered: Option<i64>,
}

impl UnitDrawer {
    /// Create a drawer with a fresh surface and no observed value.
    pub fn new(kind: UnitKind, mode: RenderMode) -> Self {
        Self {
            kind,
            mode,
            surface: StripSurface::new(STRIP_WIDTH, ROW_HEIGHT),
            last_rendered: None,
        }
    }

    /// The unit this drawer renders.
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// The drawer's surface, for the view to blit and tests to inspect.
    pub fn surface(&self) -> &StripSurface {
        &self.surface
    }

    /// Value observed on the most recent draw, `None` before the first.
    pub fn last_rendered(&self) -> Option<i64> {
        self.last_rendered
    }

    /// Derive the ephemeral frame for a timestamp without painting.
    pub fn frame_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> RenderFrame {
        RenderFrame {
            current: self.kind.current_value(now),
            delta: self.kind.delta_offset(now),
        }
    }

    /// Repaint the strip for `now`.
    ///
    /// Clears the surface, then paints every slot's zero-padded value at
    /// `slot * cell_width - delta` so the strip appears to slide rather
    /// than jump. Returns a [`RefreshSignal`] when the current value
    /// differs from the previously observed one (or none was observed);
    /// the observed value is updated before the signal is handed out.
    pub fn draw<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Option<RefreshSignal> {
        self.surface.clear();
        let frame = self.frame_at(now);

        for slot in 0..SLOT_COUNT {
            let x = CELL_WIDTH * slot as i32 - frame.delta as i32;
            let value = self.kind.display_value(self.kind.value_at(now, slot as i64));
            let text = format!("{value:02}");
            match self.mode {
                RenderMode::Text => {
                    self.surface
                        .fill_text(text, x + TEXT_INSET_X, TEXT_BASELINE_Y, Ink::Dark);
                }
                RenderMode::Glyphs => {
                    glyph::draw_number(&mut self.surface, &text, x, 0, Ink::Dark);
                }
            }
        }

        let changed = self.last_rendered != Some(frame.current);
        self.last_rendered = Some(frame.current);
        changed.then_some(RefreshSignal { kind: self.kind })
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "drawer_tests.rs"]
mod tests;
