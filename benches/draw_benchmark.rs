//! Benchmarks for the cascade tick and full-frame rendering.
//!
//! The tick path runs twenty times per second for as long as the clock is
//! on screen, so regressions here show up as idle CPU burn.

use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use odoclock::clock::{Cascade, RenderMode};
use odoclock::config::ResolvedConfig;
use odoclock::view::ClockApp;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn bench_cascade_tick(c: &mut Criterion) {
    let base = Utc.with_ymd_and_hms(2024, 3, 15, 13, 42, 58).unwrap();

    c.bench_function("cascade_tick_sub_second", |b| {
        let mut cascade = Cascade::new(RenderMode::Glyphs);
        cascade.tick(&base);
        let mut millis: i64 = 0;
        b.iter(|| {
            // Stay inside one second so only the seconds strip repaints,
            // matching the steady-state cost of the 50 ms timer.
            millis = (millis + 50) % 950;
            cascade.tick(&(base + TimeDelta::milliseconds(millis)))
        });
    });

    c.bench_function("cascade_tick_minute_rollover", |b| {
        let mut cascade = Cascade::new(RenderMode::Glyphs);
        let before = Utc.with_ymd_and_hms(2024, 3, 15, 13, 42, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 3, 15, 13, 43, 0).unwrap();
        b.iter(|| {
            cascade.tick(&before);
            cascade.tick(&after)
        });
    });
}

fn bench_full_frame(c: &mut Criterion) {
    c.bench_function("full_frame_render_glyphs", |b| {
        let backend = TestBackend::new(120, 40);
        let terminal = Terminal::new(backend).unwrap();
        let config = ResolvedConfig {
            glyphs: true,
            ..ResolvedConfig::default()
        };
        let mut app = ClockApp::new(terminal, &config).unwrap();
        app.tick_at(&Utc.with_ymd_and_hms(2024, 3, 15, 13, 42, 58).unwrap());
        b.iter(|| app.draw().unwrap());
    });

    c.bench_function("full_frame_render_text", |b| {
        let backend = TestBackend::new(80, 24);
        let terminal = Terminal::new(backend).unwrap();
        let config = ResolvedConfig {
            glyphs: false,
            ..ResolvedConfig::default()
        };
        let mut app = ClockApp::new(terminal, &config).unwrap();
        app.tick_at(&Utc.with_ymd_and_hms(2024, 3, 15, 13, 42, 58).unwrap());
        b.iter(|| app.draw().unwrap());
    });
}

criterion_group!(benches, bench_cascade_tick, bench_full_frame);
criterion_main!(benches);
