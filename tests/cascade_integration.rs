//! Acceptance tests for the cascading refresh protocol and slot contents.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use odoclock::clock::{Cascade, RenderMode};
use odoclock::model::UnitKind;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn slot_texts(cascade: &Cascade, kind: UnitKind) -> Vec<String> {
    cascade
        .drawer(kind)
        .surface()
        .texts()
        .iter()
        .map(|(t, _)| t.to_string())
        .collect()
}

// ===== End-to-end slot contents =====

#[test]
fn march_first_lines_up_month_and_day_slots() {
    let mut cascade = Cascade::new(RenderMode::Text);
    cascade.tick(&at(2024, 3, 1, 0, 0, 0));

    let months = slot_texts(&cascade, UnitKind::Month);
    assert_eq!(months[0], "03");

    let days = slot_texts(&cascade, UnitKind::Day);
    assert_eq!(days[0], "01");
    assert_eq!(days[1], "02");
}

#[test]
fn year_strip_shows_two_digit_years() {
    let mut cascade = Cascade::new(RenderMode::Text);
    cascade.tick(&at(1999, 6, 1, 0, 0, 0));
    let years = slot_texts(&cascade, UnitKind::Year);
    assert_eq!(years[0], "99");
    assert_eq!(years[1], "00", "century rolls over to 00");
    assert_eq!(years[2], "01");
}

#[test]
fn month_strip_wraps_december_to_january() {
    let mut cascade = Cascade::new(RenderMode::Text);
    cascade.tick(&at(2024, 11, 15, 0, 0, 0));
    let months = slot_texts(&cascade, UnitKind::Month);
    assert_eq!(months[0], "11");
    assert_eq!(months[1], "12");
    assert_eq!(months[2], "01", "January follows December, not month 13");
}

// ===== Cascade semantics over a simulated run =====

#[test]
fn simulated_minute_emits_each_cascade_level_once() {
    let mut cascade = Cascade::new(RenderMode::Text);
    let base = at(2024, 3, 15, 13, 42, 58);
    cascade.tick(&base);

    // Poll every 250 ms for two minutes and count per-unit redraws.
    let mut minute_draws = 0usize;
    let mut hour_draws = 0usize;
    let steps = 2 * 60 * 4;
    for step in 1..=steps {
        let now = base + TimeDelta::milliseconds(step * 250);
        let drawn = cascade.tick(&now);
        minute_draws += drawn.iter().filter(|k| **k == UnitKind::Minute).count();
        hour_draws += drawn.iter().filter(|k| **k == UnitKind::Hour).count();
    }

    // Seconds rolled 120 times, so the minute strip repainted 120 times;
    // the minute rolled twice (42:58 -> 44:58), the hour never did.
    assert_eq!(minute_draws, 120);
    assert_eq!(hour_draws, 2);
}

#[test]
fn observed_value_always_matches_last_tick() {
    let mut cascade = Cascade::new(RenderMode::Text);
    let base = at(2024, 12, 31, 23, 59, 55);
    for step in 0..400 {
        let now = base + TimeDelta::milliseconds(step * 50);
        cascade.tick(&now);
        // Seconds repaint every tick; their observed value must track now.
        assert_eq!(
            cascade.drawer(UnitKind::Second).last_rendered(),
            Some(UnitKind::Second.current_value(&now))
        );
    }
    // The run crossed midnight into the new year.
    assert_eq!(cascade.drawer(UnitKind::Year).last_rendered(), Some(2025));
    assert_eq!(cascade.drawer(UnitKind::Month).last_rendered(), Some(0));
    assert_eq!(cascade.drawer(UnitKind::Day).last_rendered(), Some(1));
}

#[test]
fn glyph_mode_cascade_paints_strokes() {
    let mut cascade = Cascade::new(RenderMode::Glyphs);
    cascade.tick(&at(2024, 3, 1, 0, 0, 0));
    for kind in UnitKind::ALL {
        let ops = cascade.drawer(kind).surface().ops();
        assert!(!ops.is_empty(), "{kind:?} strip is empty");
        assert!(
            cascade.drawer(kind).surface().texts().is_empty(),
            "{kind:?} used text ops in glyph mode"
        );
    }
}
