//! Calendar unit kinds and their per-unit rendering policy.
//!
//! Rather than one drawer type per unit, the variation lives in data:
//! [`UnitKind`] carries the modulus, the current-value extraction, the
//! sub-unit delta scaling and the display transform, and a single drawer
//! type consumes them.

use chrono::{DateTime, Datelike, Months, TimeDelta, TimeZone, Timelike};
use std::fmt;

/// Milliseconds in one whole day, used for calendar-correct day slot offsets.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// One calendar unit of the clock, ordered slowest to fastest.
///
/// The declared order is also the top-to-bottom row order on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitKind {
    /// Calendar year, displayed as its final two digits. Unbounded.
    Year,
    /// Month of year; zero-based internally, one-based on screen.
    Month,
    /// Day of month. No fixed modulus; slots use real calendar arithmetic.
    Day,
    /// Hour of day, wrapping at 24.
    Hour,
    /// Minute of hour, wrapping at 60.
    Minute,
    /// Second of minute, wrapping at 60.
    Second,
}

impl UnitKind {
    /// All unit kinds in declared (slowest-first) order.
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Year,
        UnitKind::Month,
        UnitKind::Day,
        UnitKind::Hour,
        UnitKind::Minute,
        UnitKind::Second,
    ];

    /// Wraparound modulus for bounded units; `None` for Year and Day.
    ///
    /// Day is unbounded here because month lengths vary: day slots are
    /// computed by real date arithmetic in [`UnitKind::value_at`], not by a
    /// modular increment.
    pub fn modulus(self) -> Option<i64> {
        match self {
            UnitKind::Year | UnitKind::Day => None,
            UnitKind::Month => Some(12),
            UnitKind::Hour => Some(24),
            UnitKind::Minute | UnitKind::Second => Some(60),
        }
    }

    /// The next-faster unit, whose value changes drive this unit's redraw.
    ///
    /// Seconds have no faster neighbour; they are driven by the timer.
    pub fn faster(self) -> Option<UnitKind> {
        match self {
            UnitKind::Year => Some(UnitKind::Month),
            UnitKind::Month => Some(UnitKind::Day),
            UnitKind::Day => Some(UnitKind::Hour),
            UnitKind::Hour => Some(UnitKind::Minute),
            UnitKind::Minute => Some(UnitKind::Second),
            UnitKind::Second => None,
        }
    }

    /// Row label shown to the left of the strip.
    pub fn label(self) -> &'static str {
        match self {
            UnitKind::Year => "YEARS",
            UnitKind::Month => "MONTHS",
            UnitKind::Day => "DAYS",
            UnitKind::Hour => "HOURS",
            UnitKind::Minute => "MINUTES",
            UnitKind::Second => "SECONDS",
        }
    }

    /// Extract this unit's field from a timestamp.
    ///
    /// Pure; months come back zero-based and years as the full year. Use
    /// [`UnitKind::display_value`] before formatting.
    pub fn current_value<Tz: TimeZone>(self, now: &DateTime<Tz>) -> i64 {
        match self {
            UnitKind::Year => i64::from(now.year()),
            UnitKind::Month => i64::from(now.month0()),
            UnitKind::Day => i64::from(now.day()),
            UnitKind::Hour => i64::from(now.hour()),
            UnitKind::Minute => i64::from(now.minute()),
            UnitKind::Second => i64::from(now.second()),
        }
    }

    /// Sub-unit scroll offset in pixels.
    ///
    /// Each unit derives its offset from the next-smaller unit's progress,
    /// scaled so a full sub-unit cycle spans one cell width. The divisors
    /// are tuned for visual smoothness, not derived.
    pub fn delta_offset<Tz: TimeZone>(self, now: &DateTime<Tz>) -> i64 {
        let scaled = |n: f64, divisor: f64| (n / divisor).round() as i64;
        match self {
            UnitKind::Second => scaled(f64::from(now.timestamp_subsec_millis()), 50.0),
            UnitKind::Minute => scaled(f64::from(now.second()), 3.0),
            UnitKind::Hour => scaled(f64::from(now.minute()), 3.0),
            UnitKind::Day => scaled(f64::from(now.hour()), 1.2),
            UnitKind::Month => scaled(f64::from(now.day() - 1), 1.5),
            UnitKind::Year => scaled(f64::from(now.month0() * 30 + now.day()), 18.0),
        }
    }

    /// Value shown `index_offset` slots away from the current one.
    ///
    /// Bounded units wrap modularly. Day adds whole days to the actual
    /// timestamp and reads the resulting day-of-month, which rolls over
    /// month boundaries correctly (Jan 31 + 1 is Feb 1, not Jan 32). Year
    /// shifts the date by whole calendar years.
    pub fn value_at<Tz: TimeZone>(self, now: &DateTime<Tz>, index_offset: i64) -> i64 {
        if let Some(modulus) = self.modulus() {
            return (self.current_value(now) + index_offset).rem_euclid(modulus);
        }
        match self {
            UnitKind::Day => {
                let shifted = now.clone() + TimeDelta::milliseconds(index_offset * MILLIS_PER_DAY);
                i64::from(shifted.day())
            }
            UnitKind::Year => shift_years(now, index_offset),
            // Bounded kinds were handled above.
            _ => unreachable!("bounded unit fell through modulus arm"),
        }
    }

    /// Transform an internal slot value into the number painted on screen.
    ///
    /// Months shift from zero-based to one-based; years keep their final
    /// two digits. Everything else passes through.
    pub fn display_value(self, value: i64) -> i64 {
        match self {
            UnitKind::Month => value + 1,
            UnitKind::Year => value.rem_euclid(100),
            _ => value,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Year of `now` shifted by `offset` whole calendar years.
///
/// Goes through month arithmetic so leap days clamp instead of producing an
/// invalid date. The fallback arm is unreachable for on-screen offsets but
/// keeps the function total.
fn shift_years<Tz: TimeZone>(now: &DateTime<Tz>, offset: i64) -> i64 {
    let months = offset.unsigned_abs().saturating_mul(12);
    let months = u32::try_from(months).unwrap_or(u32::MAX);
    let shifted = if offset >= 0 {
        now.clone().checked_add_months(Months::new(months))
    } else {
        now.clone().checked_sub_months(Months::new(months))
    };
    match shifted {
        Some(date) => i64::from(date.year()),
        None => i64::from(now.year()) + offset,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
