#![forbid(unsafe_code)]

//! Gesture classification: decides whether a row claims a touch sequence.
//!
//! The host's gesture system asks a set of capture predicates before it
//! routes a touch to the row instead of an ancestor scroll container.
//! [`GestureClassifier`] answers those predicates and also guards the
//! lifecycle ordering of the events it is fed.
//!
//! # Capture rules
//!
//! - **Start**: a row is always eligible to begin tracking.
//! - **Start, capture phase**: an open row claims any new touch
//!   immediately so it can be closed or re-dragged.
//! - **Move, capture phase**: claim once `|dx| > sensitivity` and
//!   `|dy| <= sensitivity`. The asymmetric test lets vertical jitter fall
//!   through to the scroll container.
//! - **Termination**: never yielded once granted.
//!
//! # Invariants
//!
//! 1. Every accepted sequence is well-formed:
//!    `Grant` → zero or more `Move` → exactly one `Release` or `Cancel`.
//! 2. A `Move`, `Release`, or `Cancel` without a prior `Grant` is rejected.
//! 3. A second `Grant` while active is rejected (capture is exclusive).
//!
//! # Failure Modes
//!
//! - Out-of-order events from the host are dropped, not reordered.

use crate::geometry::Delta;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Default capture sensitivity in pixels.
pub const DEFAULT_SENSITIVITY: f32 = 50.0;

/// Thresholds for gesture capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Horizontal travel required before a move is claimed, and the
    /// vertical travel tolerated while claiming (default: 50px).
    pub sensitivity: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Lifecycle events delivered by the host for a single gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The row was granted the gesture.
    Grant,
    /// Cumulative displacement since grant.
    Move(Delta),
    /// The finger lifted.
    Release(Delta),
    /// The host cancelled the gesture.
    Cancel(Delta),
}

impl GestureEvent {
    /// Whether this event ends the gesture.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Release(_) | Self::Cancel(_))
    }

    /// Displacement carried by the event, if any.
    #[must_use]
    pub const fn delta(&self) -> Option<Delta> {
        match self {
            Self::Grant => None,
            Self::Move(d) | Self::Release(d) | Self::Cancel(d) => Some(*d),
        }
    }
}

/// Where a gesture currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in flight.
    #[default]
    Idle,
    /// Granted and receiving moves.
    Active,
}

// ---------------------------------------------------------------------------
// GestureClassifier
// ---------------------------------------------------------------------------

/// Capture predicates plus lifecycle ordering for one row.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    config: GestureConfig,
    phase: GesturePhase,
}

impl GestureClassifier {
    /// Create a classifier with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
        }
    }

    /// Bubble-phase start predicate: always eligible.
    #[inline]
    #[must_use]
    pub fn should_claim_start(&self) -> bool {
        true
    }

    /// Capture-phase start predicate: an open row takes priority.
    #[inline]
    #[must_use]
    pub fn should_capture_start(&self, row_is_open: bool) -> bool {
        row_is_open
    }

    /// Capture-phase move predicate: clear horizontal intent.
    #[must_use]
    pub fn should_capture_move(&self, delta: Delta) -> bool {
        let s = self.config.sensitivity;
        delta.dx.abs() > s && delta.dy.abs() <= s
    }

    /// Whether the row yields the gesture when the host asks. Never.
    #[inline]
    #[must_use]
    pub fn grants_termination(&self) -> bool {
        false
    }

    /// Feed a lifecycle event; returns `false` if it is out of order and
    /// must be dropped.
    pub fn accept(&mut self, event: &GestureEvent) -> bool {
        match (self.phase, event) {
            (GesturePhase::Idle, GestureEvent::Grant) => {
                self.phase = GesturePhase::Active;
                true
            }
            (GesturePhase::Active, GestureEvent::Move(_)) => true,
            (GesturePhase::Active, e) if e.is_terminal() => {
                self.phase = GesturePhase::Idle;
                true
            }
            _ => {
                tracing::trace!(
                    target: "swipeout.gesture",
                    phase = ?self.phase,
                    event = ?event,
                    "dropping out-of-order gesture event"
                );
                false
            }
        }
    }

    /// Current lifecycle phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Forget any in-flight gesture.
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

/// Whether a drag reads as horizontal: `|pos_x| > |dy|`.
#[inline]
#[must_use]
pub fn is_horizontal(pos_x: f32, dy: f32) -> bool {
    pos_x.abs() > dy.abs()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> GestureClassifier {
        GestureClassifier::default()
    }

    #[test]
    fn start_always_claimed() {
        assert!(classifier().should_claim_start());
    }

    #[test]
    fn open_row_captures_start() {
        let c = classifier();
        assert!(c.should_capture_start(true));
        assert!(!c.should_capture_start(false));
    }

    #[test]
    fn move_capture_requires_horizontal_intent() {
        let c = classifier();
        assert!(c.should_capture_move(Delta::new(51.0, 0.0)));
        assert!(c.should_capture_move(Delta::new(-51.0, 50.0)));
        assert!(!c.should_capture_move(Delta::new(50.0, 0.0)));
        assert!(!c.should_capture_move(Delta::new(80.0, 51.0)));
        assert!(!c.should_capture_move(Delta::new(0.0, 120.0)));
    }

    #[test]
    fn custom_sensitivity() {
        let c = GestureClassifier::new(GestureConfig { sensitivity: 10.0 });
        assert!(c.should_capture_move(Delta::new(11.0, -10.0)));
        assert!(!c.should_capture_move(Delta::new(11.0, 10.5)));
    }

    #[test]
    fn termination_refused() {
        assert!(!classifier().grants_termination());
    }

    #[test]
    fn well_formed_sequence_accepted() {
        let mut c = classifier();
        assert!(c.accept(&GestureEvent::Grant));
        assert_eq!(c.phase(), GesturePhase::Active);
        assert!(c.accept(&GestureEvent::Move(Delta::horizontal(-5.0))));
        assert!(c.accept(&GestureEvent::Move(Delta::horizontal(-9.0))));
        assert!(c.accept(&GestureEvent::Release(Delta::horizontal(-9.0))));
        assert_eq!(c.phase(), GesturePhase::Idle);
    }

    #[test]
    fn stray_events_rejected() {
        let mut c = classifier();
        assert!(!c.accept(&GestureEvent::Move(Delta::ZERO)));
        assert!(!c.accept(&GestureEvent::Release(Delta::ZERO)));
        assert!(c.accept(&GestureEvent::Grant));
        assert!(!c.accept(&GestureEvent::Grant));
        assert!(c.accept(&GestureEvent::Cancel(Delta::ZERO)));
        assert!(!c.accept(&GestureEvent::Cancel(Delta::ZERO)));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut c = classifier();
        c.accept(&GestureEvent::Grant);
        c.reset();
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert!(c.accept(&GestureEvent::Grant));
    }

    #[test]
    fn horizontal_test() {
        assert!(is_horizontal(-30.0, 10.0));
        assert!(!is_horizontal(10.0, -10.0));
        assert!(!is_horizontal(0.0, 0.0));
    }

    #[test]
    fn event_helpers() {
        assert!(GestureEvent::Cancel(Delta::ZERO).is_terminal());
        assert!(!GestureEvent::Grant.is_terminal());
        assert_eq!(GestureEvent::Grant.delta(), None);
        assert_eq!(
            GestureEvent::Move(Delta::new(1.0, 2.0)).delta(),
            Some(Delta::new(1.0, 2.0))
        );
    }

    #[test]
    fn config_getter_and_setter() {
        let mut c = classifier();
        assert_eq!(c.config().sensitivity, DEFAULT_SENSITIVITY);
        c.set_config(GestureConfig { sensitivity: 5.0 });
        assert_eq!(c.config().sensitivity, 5.0);
    }
}
