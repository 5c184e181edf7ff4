//! Cascading refresh: redraw a unit only when its faster neighbour rolls.
//!
//! Subscriptions are wired once at construction: every unit listens for the
//! value-change signal of the unit one step below it. The timer drives only
//! the seconds strip (its sub-second scroll needs continuous repainting);
//! everything slower repaints exactly when its trigger fires. Signals are
//! delivered within the same tick, strictly after the emitting drawer has
//! updated its own observed value.

use std::collections::VecDeque;

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::clock::{RenderMode, UnitDrawer};
use crate::model::UnitKind;

/// The six unit drawers plus the subscription table between them.
#[derive(Debug)]
pub struct Cascade {
    // Indexed by declaration order of UnitKind (Year = 0 .. Second = 5).
    drawers: [UnitDrawer; 6],
    subscribers: [Vec<UnitKind>; 6],
}

impl Cascade {
    /// Build the drawers and wire each unit to its faster neighbour.
    pub fn new(mode: RenderMode) -> Self {
        let drawers = UnitKind::ALL.map(|kind| UnitDrawer::new(kind, mode));
        let mut subscribers: [Vec<UnitKind>; 6] = Default::default();
        for kind in UnitKind::ALL {
            if let Some(trigger) = kind.faster() {
                subscribers[trigger as usize].push(kind);
            }
        }
        Self {
            drawers,
            subscribers,
        }
    }

    /// Advance the clock to `now`.
    ///
    /// Draws the seconds strip, then delivers any resulting signals until
    /// the cascade drains. On the very first tick every drawer is in its
    /// unobserved state, so the cascade seeds all six strips. Returns the
    /// units drawn, in draw order; tests and the bench assert on it, the
    /// view ignores it.
    pub fn tick<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Vec<UnitKind> {
        let mut drawn = Vec::new();
        let mut queue = VecDeque::from([UnitKind::Second]);
        while let Some(kind) = queue.pop_front() {
            let signal = self.drawers[kind as usize].draw(now);
            drawn.push(kind);
            if let Some(signal) = signal {
                debug!(unit = signal.kind.label(), "value changed, cascading refresh");
                queue.extend(self.subscribers[signal.kind as usize].iter().copied());
            }
        }
        drawn
    }

    /// The drawer for one unit.
    pub fn drawer(&self, kind: UnitKind) -> &UnitDrawer {
        &self.drawers[kind as usize]
    }

    /// All drawers in declared (slowest-first) order, for row layout.
    pub fn drawers(&self) -> impl Iterator<Item = &UnitDrawer> {
        self.drawers.iter()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod tests;
