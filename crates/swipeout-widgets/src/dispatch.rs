#![forbid(unsafe_code)]

//! Button press dispatch with the auto-close policy.
//!
//! With `auto_close` on, the row runs its close transition and hands the
//! resulting events to the caller's notifier before the button's callback
//! runs, so the callback observes a closed row and listeners hear about the
//! close first. Disabled
//! buttons and out-of-range indices are ignored. CTA never passes through
//! here: it fires straight from the drag.

use swipeout_core::{Instant, Side};

use crate::config::SwipeoutConfig;
use crate::machine::SwipeMachine;
use crate::state::SwipeEvent;

/// What a press did.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PressOutcome {
    /// Events from the auto-close transition, if it ran.
    pub events: Vec<SwipeEvent>,
    /// Whether the button had a callback and it ran.
    pub invoked: bool,
}

/// Press button `index` on `side`.
///
/// Returns `None` when the button does not exist or is disabled, and
/// `notify` is not called. Otherwise `notify` receives the auto-close
/// events (possibly none) before the button callback runs.
pub fn press_button(
    machine: &mut SwipeMachine,
    config: &SwipeoutConfig,
    side: Side,
    index: usize,
    now: Instant,
    notify: impl FnOnce(&[SwipeEvent]),
) -> Option<PressOutcome> {
    let button = config.actions(side).get(index)?;
    if button.disabled {
        tracing::debug!(target: "swipeout.machine", side = %side, index, "press on disabled button ignored");
        return None;
    }

    let events = if config.auto_close() {
        machine.close(now)
    } else {
        Vec::new()
    };
    notify(&events);
    let invoked = button.invoke();
    Some(PressOutcome { events, invoked })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionButton;
    use crate::state::SwipePhase;
    use std::cell::RefCell;
    use std::rc::Rc;
    use swipeout_core::Measurement;

    fn open_machine(config: &SwipeoutConfig, t: Instant) -> SwipeMachine {
        let mut m = SwipeMachine::new(config);
        m.open(config, Side::Right, Some(Measurement::from_size(500.0, 50.0)), t);
        m
    }

    #[test]
    fn auto_close_closes_and_invokes() {
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        let config = SwipeoutConfig::builder()
            .auto_close(true)
            .right(vec![ActionButton::label("Delete").on_press(move || {
                *h.borrow_mut() += 1;
            })])
            .build()
            .unwrap();
        let t = Instant::now();
        let mut m = open_machine(&config, t);

        let outcome = press_button(&mut m, &config, Side::Right, 0, t, |_| {}).unwrap();
        assert_eq!(outcome.events, vec![SwipeEvent::Closed(Side::Right)]);
        assert!(outcome.invoked);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(m.phase(), SwipePhase::Closed);
    }

    #[test]
    fn close_events_are_notified_before_callback() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let o = Rc::clone(&order);
        let config = SwipeoutConfig::builder()
            .auto_close(true)
            .right(vec![ActionButton::label("Delete").on_press(move || {
                o.borrow_mut().push("press".to_owned());
            })])
            .build()
            .unwrap();
        let t = Instant::now();
        let mut m = open_machine(&config, t);

        press_button(&mut m, &config, Side::Right, 0, t, |events| {
            order.borrow_mut().push(format!("{events:?}"));
        })
        .unwrap();
        assert_eq!(
            *order.borrow(),
            vec!["[Closed(Right)]".to_owned(), "press".to_owned()]
        );
    }

    #[test]
    fn missing_button_skips_notify() {
        let config = SwipeoutConfig::builder().auto_close(true).build().unwrap();
        let mut m = SwipeMachine::new(&config);
        let mut notified = false;
        let outcome = press_button(&mut m, &config, Side::Right, 0, Instant::now(), |_| {
            notified = true;
        });
        assert!(outcome.is_none());
        assert!(!notified);
    }

    #[test]
    fn without_auto_close_row_stays_open() {
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        let config = SwipeoutConfig::builder()
            .right(vec![ActionButton::label("Archive").on_press(move || {
                *h.borrow_mut() += 1;
            })])
            .build()
            .unwrap();
        let t = Instant::now();
        let mut m = open_machine(&config, t);

        let outcome = press_button(&mut m, &config, Side::Right, 0, t, |_| {}).unwrap();
        assert!(outcome.events.is_empty());
        assert!(outcome.invoked);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(m.phase(), SwipePhase::OpenRight);
    }

    #[test]
    fn disabled_and_missing_buttons_ignored() {
        let config = SwipeoutConfig::builder()
            .auto_close(true)
            .right(vec![ActionButton::label("Nope").disabled(true)])
            .build()
            .unwrap();
        let t = Instant::now();
        let mut m = open_machine(&config, t);
        assert!(press_button(&mut m, &config, Side::Right, 0, t, |_| {}).is_none());
        assert!(press_button(&mut m, &config, Side::Right, 3, t, |_| {}).is_none());
        assert!(press_button(&mut m, &config, Side::Left, 0, t, |_| {}).is_none());
        assert_eq!(m.phase(), SwipePhase::OpenRight);
    }

    #[test]
    fn button_without_callback_still_closes() {
        let config = SwipeoutConfig::builder()
            .auto_close(true)
            .right(vec![ActionButton::label("Plain")])
            .build()
            .unwrap();
        let t = Instant::now();
        let mut m = open_machine(&config, t);
        let outcome = press_button(&mut m, &config, Side::Right, 0, t, |_| {}).unwrap();
        assert!(!outcome.invoked);
        assert_eq!(m.phase(), SwipePhase::Closed);
    }
}
