//! Property-based tests for slot arithmetic invariants.
//!
//! Tests validate:
//! 1. Bounded units obey modular wraparound
//! 2. Month display values stay one-based and in range
//! 3. Day slots follow real calendar arithmetic
//! 4. Delta offsets stay within one cell width
//! 5. Painted slot values are always two characters

use chrono::{Datelike, TimeDelta, TimeZone, Utc};
use odoclock::clock::{RenderMode, UnitDrawer};
use odoclock::model::{UnitKind, MILLIS_PER_DAY};
use proptest::prelude::*;

// ===== Property 1: Modular Wraparound =====

proptest! {
    #[test]
    fn minute_slots_obey_modular_wraparound(minute in 0u32..60, offset in 0i64..60) {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 13, minute, 0).unwrap();
        let value = UnitKind::Minute.value_at(&now, offset);
        prop_assert_eq!(value, (i64::from(minute) + offset).rem_euclid(60));
    }

    #[test]
    fn hour_slots_obey_modular_wraparound(hour in 0u32..24, offset in 0i64..24) {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, hour, 0, 0).unwrap();
        let value = UnitKind::Hour.value_at(&now, offset);
        prop_assert_eq!(value, (i64::from(hour) + offset).rem_euclid(24));
    }

    #[test]
    fn second_slots_stay_in_range(second in 0u32..60, offset in 0i64..11) {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 13, 42, second).unwrap();
        let value = UnitKind::Second.value_at(&now, offset);
        prop_assert!((0..60).contains(&value));
    }
}

#[test]
fn wraparound_at_fifty_eight_plus_three() {
    // valueAt(58, 3) with a modulus of 60 lands on 1.
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 13, 58, 0).unwrap();
    assert_eq!(UnitKind::Minute.value_at(&now, 3), 1);
}

// ===== Property 2: Month Display Range =====

proptest! {
    #[test]
    fn month_display_is_one_based_and_in_range(month in 1u32..=12, offset in 0i64..24) {
        let now = Utc.with_ymd_and_hms(2024, month, 15, 0, 0, 0).unwrap();
        let internal = UnitKind::Month.value_at(&now, offset);
        let display = UnitKind::Month.display_value(internal);
        prop_assert_eq!(display, internal + 1);
        prop_assert!((1..=12).contains(&display), "display {} out of range", display);
    }
}

// ===== Property 3: Day Calendar Arithmetic =====

proptest! {
    #[test]
    fn day_slots_match_shifted_calendar_dates(
        month in 1u32..=12,
        day in 1u32..=28,
        offset in 0i64..11,
    ) {
        let now = Utc.with_ymd_and_hms(2024, month, day, 12, 0, 0).unwrap();
        let expected = (now + TimeDelta::milliseconds(offset * MILLIS_PER_DAY)).day();
        prop_assert_eq!(UnitKind::Day.value_at(&now, offset), i64::from(expected));
    }

    #[test]
    fn day_slots_are_valid_days_of_month(month in 1u32..=12, offset in 0i64..11) {
        // Start at the end of the month so the window crosses the boundary.
        let now = Utc.with_ymd_and_hms(2024, month, 28, 0, 0, 0).unwrap();
        let value = UnitKind::Day.value_at(&now, offset);
        prop_assert!((1..=31).contains(&value), "day {} impossible", value);
    }
}

// ===== Property 4: Delta Offset Bounds =====

proptest! {
    #[test]
    fn deltas_stay_within_one_cell(
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
        millis in 0i64..1000,
    ) {
        let now = Utc.with_ymd_and_hms(2024, month, day, hour, minute, second).unwrap()
            + TimeDelta::milliseconds(millis);
        for kind in UnitKind::ALL {
            let delta = kind.delta_offset(&now);
            prop_assert!(
                (0..=20).contains(&delta),
                "{:?} delta {} escaped its cell",
                kind,
                delta
            );
        }
    }
}

// ===== Property 5: Zero Padding =====

proptest! {
    #[test]
    fn painted_slots_are_always_two_characters(
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, hour, minute, second).unwrap();
        for kind in UnitKind::ALL {
            let mut drawer = UnitDrawer::new(kind, RenderMode::Text);
            drawer.draw(&now);
            for (text, _) in drawer.surface().texts() {
                prop_assert_eq!(text.len(), 2, "{:?} painted {:?}", kind, text);
            }
        }
    }

    #[test]
    fn single_digit_values_gain_a_leading_zero(second in 0u32..10) {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 13, 42, second).unwrap();
        let mut drawer = UnitDrawer::new(UnitKind::Second, RenderMode::Text);
        drawer.draw(&now);
        let (text, _) = drawer.surface().texts()[0];
        prop_assert!(text.starts_with('0'), "expected leading zero, got {:?}", text);
    }
}
