//! Benchmark: per-event cost of the swipe state machine and render frame.
//!
//! Run with: `cargo bench -p swipeout-widgets --bench swipe_bench`
//!
//! A gesture delivers one move per display frame, so `track` and
//! `RowFrame::compute` sit on the hot path of every drag.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use swipeout_core::{Delta, Duration, Instant, Measurement};
use swipeout_widgets::{ActionButton, RowFrame, SwipeMachine, SwipeoutConfig};

fn config() -> SwipeoutConfig {
    SwipeoutConfig::builder()
        .left(vec![ActionButton::label("Pin")])
        .right(vec![ActionButton::label("More"), ActionButton::label("Delete")])
        .right_background_color("#d00")
        .build()
        .unwrap_or_default()
}

// ===========================================================================
// Full gesture
// ===========================================================================

fn bench_gesture(c: &mut Criterion) {
    let cfg = config();
    let measured = Some(Measurement::from_size(375.0, 56.0));
    let mut group = c.benchmark_group("gesture");

    group.bench_function("grant_60_moves_release", |b| {
        let t0 = Instant::now();
        b.iter(|| {
            let mut m = SwipeMachine::new(&cfg);
            m.begin_drag(&cfg, measured, t0);
            for i in 0..60u16 {
                let dx = -f32::from(i) * 4.0;
                let at = t0 + Duration::from_millis(u64::from(i) * 16);
                black_box(m.track(&cfg, Delta::new(dx, 2.0), at));
            }
            black_box(m.release(&cfg, Delta::horizontal(-240.0), t0 + Duration::from_millis(1_000)))
        });
    });

    group.finish();
}

// ===========================================================================
// Render frame
// ===========================================================================

fn bench_frame(c: &mut Criterion) {
    let cfg = config();
    let t0 = Instant::now();
    let mut m = SwipeMachine::new(&cfg);
    m.begin_drag(&cfg, Some(Measurement::from_size(375.0, 56.0)), t0);
    m.track(&cfg, Delta::horizontal(-200.0), t0);

    c.bench_function("row_frame_dragging", |b| {
        b.iter(|| black_box(RowFrame::compute(black_box(&m), &cfg, t0)));
    });
}

criterion_group!(benches, bench_gesture, bench_frame);
criterion_main!(benches);
