#![forbid(unsafe_code)]

//! Row state and the events its transitions emit.
//!
//! # Invariants
//!
//! 1. Exactly one of `OpenSide::{None, Left, Right}` holds.
//! 2. `OpenSide::Right` implies `content_offset <= 0`; `OpenSide::Left`
//!    implies `content_offset >= 0`.
//! 3. `gesture_started_at.is_some()` iff `dragging`.
//! 4. Panel widths are finite and non-negative.

use swipeout_core::{Instant, PanelMetrics, Side};

/// Which panel, if any, the row rests open on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenSide {
    #[default]
    None,
    Left,
    Right,
}

impl OpenSide {
    /// The open side, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::None => None,
            Self::Left => Some(Side::Left),
            Self::Right => Some(Side::Right),
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl From<Side> for OpenSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}

/// Coarse state of the row as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipePhase {
    Closed,
    Dragging,
    OpenLeft,
    OpenRight,
}

/// Notifications produced by transitions, in emission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    /// Gesture granted on a closed row.
    Opening,
    /// Gesture granted on an open row.
    Closing,
    /// The row settled open on a side.
    Opened(Side),
    /// The row settled closed after being open on a side.
    Closed(Side),
    /// Ancestor scrolling should be enabled (`true`) or suspended.
    ScrollEnabled(bool),
    /// The drag crossed the extended threshold on a single-button side.
    CallToAction(Side),
}

/// Mutable state of one row.
#[derive(Debug, Clone, Default)]
pub struct RowState {
    /// Authoritative horizontal translation of the content.
    pub content_offset: f32,
    pub open_side: OpenSide,
    pub dragging: bool,
    pub gesture_started_at: Option<Instant>,
    pub panels: PanelMetrics,
    pub content_width: f32,
    pub content_height: f32,
    /// Tint under the revealed panel while dragging.
    pub highlight: Option<String>,
    /// Set once CTA fires during the current gesture.
    pub cta_fired: bool,
}

impl RowState {
    /// Current coarse phase.
    #[must_use]
    pub fn phase(&self) -> SwipePhase {
        if self.dragging {
            return SwipePhase::Dragging;
        }
        match self.open_side {
            OpenSide::None => SwipePhase::Closed,
            OpenSide::Left => SwipePhase::OpenLeft,
            OpenSide::Right => SwipePhase::OpenRight,
        }
    }

    /// Whether the offset sign agrees with the open side.
    #[must_use]
    pub fn sign_consistent(&self) -> bool {
        match self.open_side {
            OpenSide::None => true,
            OpenSide::Left => self.content_offset >= 0.0,
            OpenSide::Right => self.content_offset <= 0.0,
        }
    }

    /// Whether the row is fully at rest: closed, not dragging, zero offset.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        !self.dragging && self.open_side == OpenSide::None && self.content_offset == 0.0
    }
}
