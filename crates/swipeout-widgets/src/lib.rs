#![forbid(unsafe_code)]

//! Swipe-to-reveal row widget.
//!
//! A row whose content can be dragged horizontally to reveal a panel of
//! action buttons on either side. [`Swipeout`] is the entry point; the
//! [`machine`] module holds the gesture state machine it drives and can be
//! used directly by hosts that dispatch events themselves.

pub mod action;
pub mod config;
pub mod dispatch;
pub mod frame;
pub mod machine;
pub mod state;
pub mod swipeout;

pub use action::{ActionButton, ActionSet, ButtonAppearance, ButtonContent, ButtonStyle};
pub use config::{ConfigError, RowId, SwipeTuning, SwipeoutConfig, SwipeoutConfigBuilder};
pub use dispatch::{PressOutcome, press_button};
pub use frame::{PanelFrame, RowFrame};
pub use machine::SwipeMachine;
pub use state::{OpenSide, RowState, SwipeEvent, SwipePhase};
pub use swipeout::{AutoOpenStep, ContentMeasure, ScrollParent, Swipeout};
