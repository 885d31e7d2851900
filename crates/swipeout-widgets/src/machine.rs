#![forbid(unsafe_code)]

//! The swipe state machine.
//!
//! [`SwipeMachine`] owns one row's [`RowState`] and turns gesture lifecycle
//! calls, explicit open/close requests, and auto-open steps into state
//! transitions plus a list of [`SwipeEvent`]s for the caller to dispatch.
//! It never calls user callbacks itself.
//!
//! # State Machine
//!
//! ```text
//!            grant                       release / cancel
//! Closed ───────────▶ Dragging ──────────────────────────▶ Closed
//! OpenLeft ─────────▶ Dragging ──────────────────────────▶ OpenLeft
//! OpenRight ────────▶ Dragging ──────────────────────────▶ OpenRight
//!
//! open_left / open_right / close: direct snaps from any state
//! ```
//!
//! While dragging, `open_side` keeps the side the gesture started from so
//! moves are measured relative to the already-shifted content.
//!
//! # Invariants
//!
//! 1. Outside `Dragging`, the offset sign agrees with `open_side`, and an
//!    open row rests exactly at `±panel_width`.
//! 2. Rubber-band easing is never written into `content_offset`.
//! 3. `Closed(side)` is emitted only when a side was open before the snap.
//! 4. At most one `CallToAction` per debounce window.
//! 5. A gesture that fired CTA never settles open on that side.
//!
//! # Failure Modes
//!
//! - Missing measurement at grant: panels collapse to zero width and the
//!   drag has no visible effect.
//! - Out-of-order lifecycle calls are dropped by the gesture classifier.

use swipeout_core::easing::{ease_out, lerp};
use swipeout_core::gesture::is_horizontal;
use swipeout_core::layout::{PreviewGeometry, open_threshold};
use swipeout_core::{
    Debounce, Delta, GestureClassifier, GestureEvent, Instant, Measurement, PanelMetrics, Side,
};

use crate::config::SwipeoutConfig;
use crate::state::{OpenSide, RowState, SwipeEvent, SwipePhase};

/// A snap in progress, for the rendered settle tween.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Settle {
    from: f32,
    at: Instant,
}

/// Swipe state machine for one row.
#[derive(Debug, Clone)]
pub struct SwipeMachine {
    state: RowState,
    classifier: GestureClassifier,
    cta_debounce: Debounce,
    settle: Option<Settle>,
}

impl SwipeMachine {
    /// Create a closed machine for `config`.
    #[must_use]
    pub fn new(config: &SwipeoutConfig) -> Self {
        Self {
            state: RowState::default(),
            classifier: GestureClassifier::new(config.gesture_config()),
            cta_debounce: Debounce::new(config.tuning().cta_debounce()),
            settle: None,
        }
    }

    /// Read-only view of the row state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &RowState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> SwipePhase {
        self.state.phase()
    }

    /// The capture predicates for this row.
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    /// Record the content size reported by the host's layout pass.
    pub fn set_content_size(&mut self, width: f32, height: f32) {
        self.state.content_width = swipeout_core::geometry::sanitize_extent(width);
        self.state.content_height = swipeout_core::geometry::sanitize_extent(height);
    }

    // -----------------------------------------------------------------------
    // Gesture lifecycle
    // -----------------------------------------------------------------------

    /// Gesture granted. Re-measures panels and starts the drag.
    pub fn begin_drag(
        &mut self,
        config: &SwipeoutConfig,
        measured: Option<Measurement>,
        now: Instant,
    ) -> Vec<SwipeEvent> {
        if config.disabled() || !self.classifier.accept(&GestureEvent::Grant) {
            return Vec::new();
        }

        let notice = if self.state.open_side.is_open() {
            SwipeEvent::Closing
        } else {
            SwipeEvent::Opening
        };

        self.remeasure(config, measured);
        self.state.dragging = true;
        self.state.gesture_started_at = Some(now);
        self.state.cta_fired = false;
        self.settle = None;

        tracing::debug!(
            target: "swipeout.machine",
            open_side = ?self.state.open_side,
            left_width = self.state.panels.left_width,
            right_width = self.state.panels.right_width,
            "drag granted"
        );
        vec![notice]
    }

    /// Cumulative move since grant.
    pub fn track(
        &mut self,
        config: &SwipeoutConfig,
        delta: Delta,
        now: Instant,
    ) -> Vec<SwipeEvent> {
        if !self.classifier.accept(&GestureEvent::Move(delta)) {
            return Vec::new();
        }

        let panels = self.state.panels;
        let pos_x = match self.state.open_side {
            OpenSide::Right => delta.dx - panels.right_width,
            OpenSide::Left => delta.dx + panels.left_width,
            OpenSide::None => delta.dx,
        };

        let mut events = vec![SwipeEvent::ScrollEnabled(!is_horizontal(pos_x, delta.dy))];

        let side = if pos_x < 0.0 {
            Side::Right
        } else if pos_x > 0.0 {
            Side::Left
        } else {
            return events;
        };
        if !config.has_actions(side) {
            return events;
        }

        self.state.highlight = config.tint(side).map(str::to_owned);

        if config.cta_enabled(side) && self.past_cta_threshold(config, side, pos_x) {
            self.state.cta_fired = true;
            if self.cta_debounce.trigger(now) {
                tracing::debug!(target: "swipeout.machine", side = %side, pos_x, "call to action");
                events.push(SwipeEvent::CallToAction(side));
            }
            return events;
        }

        self.state.content_offset = match side {
            Side::Right => pos_x.min(0.0),
            Side::Left => pos_x.max(0.0),
        };
        events
    }

    /// Finger lifted: decide where the row settles.
    pub fn release(
        &mut self,
        config: &SwipeoutConfig,
        delta: Delta,
        now: Instant,
    ) -> Vec<SwipeEvent> {
        self.settle_gesture(config, GestureEvent::Release(delta), now)
    }

    /// Host cancelled the gesture; settles exactly like a release.
    pub fn cancel(
        &mut self,
        config: &SwipeoutConfig,
        delta: Delta,
        now: Instant,
    ) -> Vec<SwipeEvent> {
        self.settle_gesture(config, GestureEvent::Cancel(delta), now)
    }

    fn settle_gesture(
        &mut self,
        config: &SwipeoutConfig,
        event: GestureEvent,
        now: Instant,
    ) -> Vec<SwipeEvent> {
        if !self.classifier.accept(&event) {
            return Vec::new();
        }
        let dx = event.delta().unwrap_or_default().dx;
        let tuning = config.tuning();
        let panels = self.state.panels;
        let open_side = self.state.open_side;
        let threshold = open_threshold(self.state.content_width, tuning.open_ratio);

        let mut open_left = dx > threshold || dx > panels.left_width / 2.0;
        let mut open_right = dx < -threshold || dx < -panels.right_width / 2.0;

        // An open row needs a drag back past the threshold to close.
        match open_side {
            OpenSide::Right => open_right = (dx - threshold) < -threshold,
            OpenSide::Left => open_left = (dx + threshold) > threshold,
            OpenSide::None => {}
        }

        let elapsed = self
            .state
            .gesture_started_at
            .map(|start| now.saturating_duration_since(start));
        let flick = elapsed.is_some_and(|e| e < tuning.flick_window());
        if flick {
            open_right = dx < -threshold / 10.0 && open_side != OpenSide::Left;
            open_left = dx > threshold / 10.0 && open_side != OpenSide::Right;
        }

        if self.state.cta_fired {
            // CTA replaces opening on the side it fired for.
            if dx < 0.0 {
                open_right = false;
            } else {
                open_left = false;
            }
        }

        self.state.dragging = false;
        self.state.gesture_started_at = None;
        self.state.cta_fired = false;

        let offset = self.state.content_offset;
        tracing::debug!(
            target: "swipeout.machine",
            dx,
            offset,
            threshold,
            flick,
            open_left,
            open_right,
            "release"
        );

        let mut events = Vec::with_capacity(2);
        // A zero-width panel has nothing to reveal; such a row behaves as closed.
        if open_right && offset < 0.0 && dx < 0.0 && panels.right_width > 0.0 {
            self.snap_open(Side::Right, now, &mut events);
        } else if open_left && offset > 0.0 && dx > 0.0 && panels.left_width > 0.0 {
            self.snap_open(Side::Left, now, &mut events);
        } else {
            self.snap_closed(now, &mut events);
        }
        events.push(SwipeEvent::ScrollEnabled(true));
        events
    }

    // -----------------------------------------------------------------------
    // Programmatic control
    // -----------------------------------------------------------------------

    /// Open `side` without a gesture.
    ///
    /// Does nothing when the content cannot be measured or the side has no
    /// buttons.
    pub fn open(
        &mut self,
        config: &SwipeoutConfig,
        side: Side,
        measured: Option<Measurement>,
        now: Instant,
    ) -> Vec<SwipeEvent> {
        let Some(m) = measured else {
            tracing::debug!(target: "swipeout.machine", side = %side, "open skipped: no measurement");
            return Vec::new();
        };
        if !config.has_actions(side) {
            return Vec::new();
        }
        let mut panels = self.state.panels;
        panels.remeasure_side(
            m.usable_width(),
            config.tuning().button_slots,
            side,
            config.actions(side).len(),
        );
        if panels.width(side) <= 0.0 {
            return Vec::new();
        }
        self.abort_drag();
        self.set_content_size(m.width, m.height);
        self.state.panels = panels;
        let mut events = Vec::with_capacity(1);
        self.snap_open(side, now, &mut events);
        events
    }

    /// Close the row. A no-op on a row already at rest.
    pub fn close(&mut self, now: Instant) -> Vec<SwipeEvent> {
        if self.state.is_at_rest() {
            return Vec::new();
        }
        self.abort_drag();
        let mut events = Vec::with_capacity(1);
        self.snap_closed(now, &mut events);
        events
    }

    /// Show the half-open auto-open preview for `side`.
    ///
    /// Skipped while dragging or open so a preview never fights the user.
    pub fn show_preview(&mut self, config: &SwipeoutConfig, side: Side, now: Instant) -> bool {
        if self.state.dragging || self.state.open_side.is_open() {
            return false;
        }
        let preview =
            PreviewGeometry::for_side(side, config.button_width(), config.actions(side).len());
        self.begin_settle(now);
        self.state.panels.set_width(side, preview.panel_width);
        self.state.content_offset = preview.offset;
        tracing::debug!(target: "swipeout.machine", side = %side, offset = preview.offset, "preview shown");
        true
    }

    /// Hide the auto-open preview for `side`.
    pub fn hide_preview(&mut self, side: Side, now: Instant) -> bool {
        if self.state.dragging || self.state.open_side.is_open() {
            return false;
        }
        self.begin_settle(now);
        self.state.panels.set_width(side, 0.0);
        self.state.content_offset = 0.0;
        tracing::debug!(target: "swipeout.machine", side = %side, "preview hidden");
        true
    }

    /// Re-derive panel widths after an action set changed.
    ///
    /// Uses the last known content size. An open row stays open at the new
    /// panel edge, or closes if its side lost every button. A drag in
    /// progress keeps its widths until release.
    pub fn refresh_panels(&mut self, config: &SwipeoutConfig, now: Instant) -> Vec<SwipeEvent> {
        if self.state.dragging {
            return Vec::new();
        }
        self.state.panels = PanelMetrics::derive(
            self.state.content_width,
            config.tuning().button_slots,
            config.actions(Side::Left).len(),
            config.actions(Side::Right).len(),
        );
        let mut events = Vec::new();
        if let Some(side) = self.state.open_side.side() {
            if self.state.panels.width(side) > 0.0 {
                self.state.content_offset = self.state.panels.open_offset(side);
            } else {
                self.snap_closed(now, &mut events);
            }
        }
        events
    }

    /// Drop all state, as on unmount.
    pub fn reset(&mut self) {
        self.state = RowState {
            content_width: self.state.content_width,
            content_height: self.state.content_height,
            ..RowState::default()
        };
        self.classifier.reset();
        self.cta_debounce.reset();
        self.settle = None;
    }

    // -----------------------------------------------------------------------
    // Rendering support
    // -----------------------------------------------------------------------

    /// Offset to draw at `now`: the authoritative offset, or the settle
    /// tween toward it right after a snap.
    #[must_use]
    pub fn rendered_offset(&self, config: &SwipeoutConfig, now: Instant) -> f32 {
        let target = self.state.content_offset;
        let Some(settle) = self.settle else {
            return target;
        };
        let tween = config.tuning().tween();
        if tween.is_zero() {
            return target;
        }
        let elapsed = now.saturating_duration_since(settle.at);
        if elapsed >= tween {
            return target;
        }
        let t = elapsed.as_secs_f32() / tween.as_secs_f32();
        lerp(settle.from, target, ease_out(t))
    }

    // -----------------------------------------------------------------------
    // Named transitions
    // -----------------------------------------------------------------------

    /// Pre: not dragging. Post: `open_side == side`, offset at panel edge.
    fn snap_open(&mut self, side: Side, now: Instant, events: &mut Vec<SwipeEvent>) {
        self.begin_settle(now);
        self.state.content_offset = self.state.panels.open_offset(side);
        self.state.open_side = side.into();
        tracing::debug!(
            target: "swipeout.machine",
            side = %side,
            offset = self.state.content_offset,
            "opened"
        );
        events.push(SwipeEvent::Opened(side));
    }

    /// Pre: not dragging. Post: closed at zero offset, highlight cleared.
    fn snap_closed(&mut self, now: Instant, events: &mut Vec<SwipeEvent>) {
        let previous = self.state.open_side;
        self.begin_settle(now);
        self.state.content_offset = 0.0;
        self.state.open_side = OpenSide::None;
        self.state.highlight = None;
        if let Some(side) = previous.side() {
            tracing::debug!(target: "swipeout.machine", side = %side, "closed");
            events.push(SwipeEvent::Closed(side));
        }
    }

    fn begin_settle(&mut self, now: Instant) {
        self.settle = Some(Settle {
            from: self.state.content_offset,
            at: now,
        });
    }

    fn abort_drag(&mut self) {
        self.classifier.reset();
        self.state.dragging = false;
        self.state.gesture_started_at = None;
        self.state.cta_fired = false;
    }

    fn remeasure(&mut self, config: &SwipeoutConfig, measured: Option<Measurement>) {
        self.state.panels = match measured {
            Some(m) => {
                self.set_content_size(m.width, m.height);
                PanelMetrics::derive(
                    m.usable_width(),
                    config.tuning().button_slots,
                    config.actions(Side::Left).len(),
                    config.actions(Side::Right).len(),
                )
            }
            None => {
                tracing::debug!(target: "swipeout.machine", "measurement unavailable; panels collapsed");
                PanelMetrics::EMPTY
            }
        };
    }

    fn past_cta_threshold(&self, config: &SwipeoutConfig, side: Side, pos_x: f32) -> bool {
        let edge = self.state.panels.width(side) + config.tuning().cta_extend(side);
        match side {
            Side::Right => pos_x <= -edge,
            Side::Left => pos_x >= edge,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
