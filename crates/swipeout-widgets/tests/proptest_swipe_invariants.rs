//! Property-based invariant tests for the swipe state machine.
//!
//! These tests drive `SwipeMachine` with arbitrary operation sequences and
//! check, after every step:
//!
//! 1. Exactly one coarse phase holds, and an open side is never "both"
//! 2. Outside a drag, the offset sign agrees with the open side
//! 3. An open row rests exactly at its panel edge
//! 4. `close()` on a row at rest emits nothing
//! 5. Small slow drags from a closed row return to closed
//! 6. No panics on arbitrary (including out-of-order) lifecycle calls

use proptest::prelude::*;
use swipeout_core::{Delta, Duration, Instant, Measurement, Side};
use swipeout_widgets::{
    ActionButton, OpenSide, SwipeEvent, SwipeMachine, SwipePhase, SwipeoutConfig,
};

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Grant(Option<f32>),
    Move(f32, f32),
    Release(f32),
    Cancel(f32),
    Open(Side, f32),
    Close,
    Preview(Side),
    Hide(Side),
    Wait(u64),
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Left), Just(Side::Right)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        proptest::option::of(0.0f32..800.0).prop_map(Op::Grant),
        (-600.0f32..600.0, -120.0f32..120.0).prop_map(|(dx, dy)| Op::Move(dx, dy)),
        (-600.0f32..600.0).prop_map(Op::Release),
        (-600.0f32..600.0).prop_map(Op::Cancel),
        (side_strategy(), 0.0f32..800.0).prop_map(|(s, w)| Op::Open(s, w)),
        Just(Op::Close),
        side_strategy().prop_map(Op::Preview),
        side_strategy().prop_map(Op::Hide),
        (0u64..400).prop_map(Op::Wait),
    ]
}

fn config_strategy() -> impl Strategy<Value = SwipeoutConfig> {
    (0usize..4, 0usize..4, any::<bool>(), 0.0f32..160.0).prop_map(
        |(left, right, cta, button_width)| {
            let buttons = |n: usize| -> Vec<ActionButton> {
                (0..n).map(|i| ActionButton::label(format!("{i}"))).collect()
            };
            SwipeoutConfig::builder()
                .left(buttons(left))
                .right(buttons(right))
                .drag_to_cta(cta)
                .on_cta(|| {})
                .button_width(button_width)
                .build()
                .expect("generated config is valid")
        },
    )
}

fn measure(width: f32) -> Option<Measurement> {
    Some(Measurement::from_size(width, 50.0))
}

/// Apply one operation; returns the emitted events.
fn apply(
    m: &mut SwipeMachine,
    cfg: &SwipeoutConfig,
    op: &Op,
    now: &mut Instant,
) -> Vec<SwipeEvent> {
    match *op {
        Op::Grant(w) => m.begin_drag(cfg, w.and_then(measure), *now),
        Op::Move(dx, dy) => m.track(cfg, Delta::new(dx, dy), *now),
        Op::Release(dx) => m.release(cfg, Delta::horizontal(dx), *now),
        Op::Cancel(dx) => m.cancel(cfg, Delta::horizontal(dx), *now),
        Op::Open(side, w) => m.open(cfg, side, measure(w), *now),
        Op::Close => m.close(*now),
        Op::Preview(side) => {
            m.show_preview(cfg, side, *now);
            Vec::new()
        }
        Op::Hide(side) => {
            m.hide_preview(side, *now);
            Vec::new()
        }
        Op::Wait(n) => {
            *now += Duration::from_millis(n);
            Vec::new()
        }
    }
}

fn check_rest_invariants(m: &SwipeMachine) -> Result<(), TestCaseError> {
    let s = m.state();
    prop_assert_eq!(s.dragging, s.gesture_started_at.is_some());
    prop_assert!(s.content_offset.is_finite());
    if s.dragging {
        prop_assert_eq!(m.phase(), SwipePhase::Dragging);
        return Ok(());
    }
    prop_assert!(s.sign_consistent(), "offset {} vs {:?}", s.content_offset, s.open_side);
    match s.open_side {
        OpenSide::Right => {
            prop_assert_eq!(m.phase(), SwipePhase::OpenRight);
            prop_assert_eq!(s.content_offset, -s.panels.right_width);
        }
        OpenSide::Left => {
            prop_assert_eq!(m.phase(), SwipePhase::OpenLeft);
            prop_assert_eq!(s.content_offset, s.panels.left_width);
        }
        OpenSide::None => prop_assert_eq!(m.phase(), SwipePhase::Closed),
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// 1-3, 6. Structural invariants over arbitrary sequences
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn invariants_hold_after_every_step(
        cfg in config_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..60),
    ) {
        let mut m = SwipeMachine::new(&cfg);
        let mut now = Instant::now();
        for op in &ops {
            apply(&mut m, &cfg, op, &mut now);
            check_rest_invariants(&m)?;
        }
    }

    #[test]
    fn at_most_one_open_notification_per_settle(
        cfg in config_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..60),
    ) {
        let mut m = SwipeMachine::new(&cfg);
        let mut now = Instant::now();
        for op in &ops {
            let events = apply(&mut m, &cfg, op, &mut now);
            let opened = events.iter().filter(|e| matches!(e, SwipeEvent::Opened(_))).count();
            let closed = events.iter().filter(|e| matches!(e, SwipeEvent::Closed(_))).count();
            prop_assert!(opened + closed <= 1, "events {:?}", events);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. close() idempotence
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn close_twice_is_silent(
        cfg in config_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut m = SwipeMachine::new(&cfg);
        let mut now = Instant::now();
        for op in &ops {
            apply(&mut m, &cfg, op, &mut now);
        }
        m.close(now);
        prop_assert!(m.state().is_at_rest());
        prop_assert!(m.close(now).is_empty());
        prop_assert_eq!(m.phase(), SwipePhase::Closed);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Small slow drags never open a closed row
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn small_slow_drag_stays_closed(
        cfg in config_strategy(),
        width in 1.0f32..800.0,
        frac in -0.999f32..0.999,
        hold_ms in 200u64..2_000,
    ) {
        let mut m = SwipeMachine::new(&cfg);
        let t = Instant::now();
        let threshold = width * cfg.tuning().open_ratio;
        let dx = frac * threshold / 10.0;

        m.begin_drag(&cfg, measure(width), t);
        m.track(&cfg, Delta::horizontal(dx), t + Duration::from_millis(hold_ms / 2));
        let events = m.release(&cfg, Delta::horizontal(dx), t + Duration::from_millis(hold_ms));

        prop_assert_eq!(m.phase(), SwipePhase::Closed);
        prop_assert_eq!(m.state().content_offset, 0.0);
        prop_assert!(!events.iter().any(|e| matches!(e, SwipeEvent::Opened(_))));
    }
}
