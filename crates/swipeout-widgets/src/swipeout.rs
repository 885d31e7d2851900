#![forbid(unsafe_code)]

//! The swipe-to-reveal row widget.
//!
//! [`Swipeout`] ties a [`SwipeoutConfig`] and a [`SwipeMachine`] to the
//! host: it forwards gesture lifecycle calls, measures content through a
//! [`ContentMeasure`], suspends ancestor scrolling through a
//! [`ScrollParent`], owns the auto-open timers, and turns machine events
//! into user callbacks.
//!
//! Time is passed in explicitly on every gesture and timer call; the
//! programmatic `open_left`/`open_right`/`close` helpers read the clock
//! themselves and have `*_at` variants for deterministic use.
//!
//! # Invariants
//!
//! 1. Timers only fire between `mount` and `unmount`; polling an unmounted
//!    row is a no-op.
//! 2. Callbacks run in the order the machine emitted their events.
//!
//! # Failure Modes
//!
//! - No measurer attached: grants and explicit opens see no measurement,
//!   so the row stays inert.
//! - No scroll parent attached: scroll suspension requests are dropped.

use std::fmt;

use swipeout_core::{Delta, Instant, Measurement, Side, TimerQueue};

use crate::action::ActionButton;
use crate::config::SwipeoutConfig;
use crate::dispatch::{PressOutcome, press_button};
use crate::frame::RowFrame;
use crate::machine::SwipeMachine;
use crate::state::{RowState, SwipeEvent, SwipePhase};

// ---------------------------------------------------------------------------
// Host collaborators
// ---------------------------------------------------------------------------

/// Measures the row content on screen.
pub trait ContentMeasure {
    /// Current frame of the content, or `None` if it is not laid out.
    fn measure(&self) -> Option<Measurement>;
}

impl<F> ContentMeasure for F
where
    F: Fn() -> Option<Measurement>,
{
    fn measure(&self) -> Option<Measurement> {
        self()
    }
}

/// The scrollable ancestor whose scrolling is suspended during a drag.
pub trait ScrollParent {
    fn set_scroll_enabled(&mut self, enabled: bool);
}

// ---------------------------------------------------------------------------
// Auto-open steps
// ---------------------------------------------------------------------------

/// One scheduled auto-open step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoOpenStep {
    /// Snap to the half-open preview.
    Show(Side),
    /// Snap back to closed.
    Hide(Side),
}

// ---------------------------------------------------------------------------
// Swipeout
// ---------------------------------------------------------------------------

/// A swipe-to-reveal row.
pub struct Swipeout {
    config: SwipeoutConfig,
    machine: SwipeMachine,
    timers: TimerQueue<AutoOpenStep>,
    measurer: Option<Box<dyn ContentMeasure>>,
    scroll_parent: Option<Box<dyn ScrollParent>>,
    mounted: bool,
}

impl fmt::Debug for Swipeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Swipeout")
            .field("config", &self.config)
            .field("machine", &self.machine)
            .field("pending_timers", &self.timers.len())
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl Swipeout {
    /// Create an unmounted row.
    #[must_use]
    pub fn new(config: SwipeoutConfig) -> Self {
        let machine = SwipeMachine::new(&config);
        Self {
            config,
            machine,
            timers: TimerQueue::new(),
            measurer: None,
            scroll_parent: None,
            mounted: false,
        }
    }

    /// Attach the content measurer (builder pattern).
    #[must_use]
    pub fn with_measure(mut self, measurer: impl ContentMeasure + 'static) -> Self {
        self.measurer = Some(Box::new(measurer));
        self
    }

    /// Attach the scrollable ancestor (builder pattern).
    #[must_use]
    pub fn with_scroll_parent(mut self, parent: impl ScrollParent + 'static) -> Self {
        self.scroll_parent = Some(Box::new(parent));
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SwipeoutConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &RowState {
        self.machine.state()
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> SwipePhase {
        self.machine.phase()
    }

    #[inline]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Earliest pending timer deadline, for the host's scheduler.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.mounted {
            self.timers.next_deadline()
        } else {
            None
        }
    }

    /// Render snapshot at `now`.
    #[must_use]
    pub fn frame(&self, now: Instant) -> RowFrame {
        RowFrame::compute(&self.machine, &self.config, now)
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Attach the row and schedule auto-open steps.
    ///
    /// Each enabled side shows its preview after the auto-open delay and
    /// hides it at `timeout`, both measured from mount. Nothing is
    /// scheduled for a disabled row or a zero `button_width`.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let eligible = !self.config.disabled() && self.config.button_width() > 0.0;
        for side in [Side::Right, Side::Left] {
            if !(eligible && self.config.auto_open(side)) {
                continue;
            }
            self.timers.schedule_after(
                now,
                self.config.tuning().auto_open_delay(),
                AutoOpenStep::Show(side),
            );
            self.timers
                .schedule_after(now, self.config.timeout(), AutoOpenStep::Hide(side));
            tracing::debug!(target: "swipeout.widget", side = %side, "auto-open scheduled");
        }
    }

    /// Detach the row. Cancels every timer and drops all row state.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.timers.cancel_all();
        self.machine.reset();
        self.mounted = false;
        tracing::debug!(target: "swipeout.widget", row = ?self.config.row_id(), "unmounted");
    }

    /// Run every timer step due at `now`. Returns how many ran.
    pub fn poll_timers(&mut self, now: Instant) -> usize {
        if !self.mounted {
            return 0;
        }
        let due = self.timers.poll(now);
        for step in &due {
            let applied = match *step {
                AutoOpenStep::Show(side) => self.machine.show_preview(&self.config, side, now),
                AutoOpenStep::Hide(side) => self.machine.hide_preview(side, now),
            };
            tracing::debug!(target: "swipeout.widget", ?step, applied, "auto-open step");
        }
        due.len()
    }

    /// The host's layout pass reported a new content size.
    ///
    /// An open row re-derives its panels so it stays at the panel edge.
    pub fn on_layout(&mut self, width: f32, height: f32) {
        let previous = self.machine.state().content_width;
        self.machine.set_content_size(width, height);
        let resized = self.machine.state().content_width != previous;
        if resized && self.machine.state().open_side.is_open() {
            let events = self.machine.refresh_panels(&self.config, Instant::now());
            self.dispatch(events);
        }
    }

    // -----------------------------------------------------------------------
    // Gesture capture
    // -----------------------------------------------------------------------

    /// Whether to claim a gesture at touch start.
    #[must_use]
    pub fn should_claim_start(&self) -> bool {
        self.machine.classifier().should_claim_start()
    }

    /// Whether to capture at touch start ahead of children.
    #[must_use]
    pub fn should_capture_start(&self) -> bool {
        self.machine
            .classifier()
            .should_capture_start(self.machine.state().open_side.is_open())
    }

    /// Whether a move with cumulative `delta` is a horizontal swipe to capture.
    /// A disabled row never captures.
    #[must_use]
    pub fn should_capture_move(&self, delta: Delta) -> bool {
        !self.config.disabled() && self.machine.classifier().should_capture_move(delta)
    }

    /// Whether to hand the gesture over when another responder asks.
    #[must_use]
    pub fn grants_termination(&self) -> bool {
        self.machine.classifier().grants_termination()
    }

    // -----------------------------------------------------------------------
    // Gesture lifecycle
    // -----------------------------------------------------------------------

    pub fn on_grant(&mut self, now: Instant) {
        let measured = self.measure();
        let events = self.machine.begin_drag(&self.config, measured, now);
        self.dispatch(events);
    }

    pub fn on_move(&mut self, delta: Delta, now: Instant) {
        let events = self.machine.track(&self.config, delta, now);
        self.dispatch(events);
    }

    pub fn on_release(&mut self, delta: Delta, now: Instant) {
        let events = self.machine.release(&self.config, delta, now);
        self.dispatch(events);
    }

    pub fn on_cancel(&mut self, delta: Delta, now: Instant) {
        let events = self.machine.cancel(&self.config, delta, now);
        self.dispatch(events);
    }

    // -----------------------------------------------------------------------
    // Programmatic control
    // -----------------------------------------------------------------------

    pub fn open_left(&mut self) {
        self.open_at(Side::Left, Instant::now());
    }

    pub fn open_right(&mut self) {
        self.open_at(Side::Right, Instant::now());
    }

    pub fn close(&mut self) {
        self.close_at(Instant::now());
    }

    /// Open `side` at `now`. Needs a measurement and at least one button.
    pub fn open_at(&mut self, side: Side, now: Instant) {
        let measured = self.measure();
        let events = self.machine.open(&self.config, side, measured, now);
        self.dispatch(events);
    }

    /// Close at `now`; silent on a row already at rest.
    pub fn close_at(&mut self, now: Instant) {
        let events = self.machine.close(now);
        self.dispatch(events);
    }

    /// Host-driven close flag; `true` closes the row.
    pub fn set_close_requested(&mut self, close: bool) {
        if close {
            self.close();
        }
    }

    /// Press button `index` on `side`. Returns `None` if nothing was pressed.
    ///
    /// With `auto_close` on, close notifications go out before the button's
    /// own callback runs.
    pub fn press(&mut self, side: Side, index: usize, now: Instant) -> Option<PressOutcome> {
        let config = &self.config;
        let scroll_parent = &mut self.scroll_parent;
        press_button(&mut self.machine, config, side, index, now, |events| {
            notify(config, scroll_parent, events);
        })
    }

    /// Replace the buttons on `side` and re-derive panel widths.
    pub fn set_actions(&mut self, side: Side, buttons: Vec<ActionButton>, now: Instant) {
        self.config.set_actions(side, buttons);
        let events = self.machine.refresh_panels(&self.config, now);
        self.dispatch(events);
    }

    /// Enable or disable gestures. A drag already granted finishes normally.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.set_disabled(disabled);
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn measure(&self) -> Option<Measurement> {
        self.measurer.as_ref().and_then(|m| m.measure())
    }

    fn dispatch(&mut self, events: Vec<SwipeEvent>) {
        notify(&self.config, &mut self.scroll_parent, &events);
    }
}

/// Turn machine events into user callbacks and scroll-parent requests.
fn notify(
    config: &SwipeoutConfig,
    scroll_parent: &mut Option<Box<dyn ScrollParent>>,
    events: &[SwipeEvent],
) {
    let id = config.row_id();
    for event in events {
        match *event {
            SwipeEvent::Opening => {
                if let Some(f) = &config.on_open {
                    f(id, None);
                }
            }
            SwipeEvent::Closing => {
                if let Some(f) = &config.on_close {
                    f(id, None);
                }
            }
            SwipeEvent::Opened(side) => {
                tracing::debug!(target: "swipeout.widget", row = ?id, side = %side, "row opened");
                if let Some(f) = &config.on_open {
                    f(id, Some(side));
                }
            }
            SwipeEvent::Closed(side) => {
                tracing::debug!(target: "swipeout.widget", row = ?id, side = %side, "row closed");
                if let Some(f) = &config.on_close {
                    f(id, Some(side));
                }
            }
            SwipeEvent::ScrollEnabled(enabled) => {
                if let Some(parent) = scroll_parent.as_mut() {
                    parent.set_scroll_enabled(enabled);
                }
            }
            SwipeEvent::CallToAction(side) => {
                tracing::debug!(target: "swipeout.widget", row = ?id, side = %side, "call to action");
                if let Some(f) = &config.on_cta {
                    f();
                }
            }
        }
    }
}
