#![forbid(unsafe_code)]

//! Core: geometry, easing, panel layout, gesture capture, and timers for
//! swipe-to-reveal rows.
//!
//! # Role in swipeout
//! `swipeout-core` holds the pure, host-independent pieces. Nothing in this
//! crate owns row state; `swipeout-widgets` composes these leaves into the
//! swipe state machine and the widget facade.
//!
//! # Primary responsibilities
//! - **Easing**: rubber-band softening for rendered overshoot.
//! - **Layout**: per-button and per-panel widths, open threshold.
//! - **Gesture**: capture predicates and lifecycle ordering.
//! - **Timer**: cancelable per-instance deadlines and debounce windows.

pub mod easing;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod logging;
pub mod timer;

pub use easing::{EasingFn, ease_out, rubber_band};
pub use geometry::{Delta, Measurement, Side};
pub use gesture::{GestureClassifier, GestureConfig, GestureEvent, GesturePhase};
pub use layout::{PanelMetrics, PreviewGeometry};
pub use timer::{Debounce, TimerId, TimerQueue};

/// Monotonic time used throughout the crate family (wasm compatible).
pub use web_time::{Duration, Instant};
