#![forbid(unsafe_code)]

//! Swipe-to-reveal rows.
//!
//! This crate is the stable surface for applications. It re-exports the
//! row widget and the types needed to configure it, and offers a prelude
//! for day-to-day usage.
//!
//! ```
//! use swipeout::prelude::*;
//!
//! let config = SwipeoutConfig::builder()
//!     .right(vec![ActionButton::label("Delete").style(ButtonStyle::Delete)])
//!     .build()
//!     .expect("valid config");
//! let mut row = Swipeout::new(config)
//!     .with_measure(|| Some(Measurement::from_size(320.0, 48.0)));
//!
//! let t0 = Instant::now();
//! row.on_grant(t0);
//! row.on_move(Delta::horizontal(-120.0), t0 + Duration::from_millis(100));
//! row.on_release(Delta::horizontal(-120.0), t0 + Duration::from_millis(400));
//! assert_eq!(row.phase(), SwipePhase::OpenRight);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use swipeout_core::{Delta, Duration, Instant, Measurement, Side};

// --- Widget re-exports -----------------------------------------------------

pub use swipeout_widgets::{
    ActionButton, ButtonAppearance, ButtonContent, ButtonStyle, ConfigError, ContentMeasure,
    PanelFrame, PressOutcome, RowFrame, RowId, ScrollParent, SwipePhase, SwipeTuning, Swipeout,
    SwipeoutConfig, SwipeoutConfigBuilder,
};

/// Standard result type for configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;

pub mod prelude {
    pub use crate::{
        ActionButton, ButtonStyle, Delta, Duration, Instant, Measurement, Result, RowId,
        ScrollParent, Side, SwipePhase, Swipeout, SwipeoutConfig,
    };

    pub use crate::{core, widgets};
}

pub use swipeout_core as core;
pub use swipeout_widgets as widgets;
