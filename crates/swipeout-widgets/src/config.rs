#![forbid(unsafe_code)]

//! Row configuration: the consumer-facing option set and its validation.
//!
//! [`SwipeoutConfig`] is built through [`SwipeoutConfigBuilder`], which
//! rejects values that cannot describe a working row (negative or non-finite
//! sizes, degenerate tuning) and normalizes combinations that are merely
//! inconsistent:
//!
//! - `drag_to_cta` with more than one button on a side disables CTA for
//!   that side only.
//! - `drag_to_cta` without an `on_cta` callback disables CTA entirely.
//! - An auto-open `timeout` shorter than the preview delay is raised to the
//!   delay so the preview is hidden right after it is shown.
//!
//! Numeric constants live in [`SwipeTuning`]; its defaults reproduce the
//! classic widget's behavior exactly.

use std::fmt;
use std::rc::Rc;

use swipeout_core::gesture::DEFAULT_SENSITIVITY;
use swipeout_core::layout::DEFAULT_BUTTON_SLOTS;
use swipeout_core::{GestureConfig, Side};
use thiserror::Error;
use web_time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::action::{ActionButton, ActionSet};

/// Open/close notification: row identity plus the side, when known.
///
/// Grant-time notifications carry `None`; settle-time ones carry the side.
pub type NotifyFn = Rc<dyn Fn(RowId, Option<Side>)>;

/// Call-to-action callback.
pub type CtaFn = Rc<dyn Fn()>;

/// Default auto-open restore timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Configuration rejected at build time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sensitivity must be finite and >= 0, got {0}")]
    InvalidSensitivity(f32),

    #[error("button width must be finite and >= 0, got {0}")]
    InvalidButtonWidth(f32),

    #[error("button slots must be > 0")]
    ZeroButtonSlots,

    #[error("open ratio must be in (0, 1], got {0}")]
    InvalidOpenRatio(f32),

    #[error("{side} CTA extend must be finite and >= 0, got {value}")]
    InvalidCtaExtend { side: Side, value: f32 },

    #[cfg(feature = "serde")]
    #[error("tuning JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// RowId
// ---------------------------------------------------------------------------

/// Identity of a row inside a sectioned list, echoed to notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId {
    pub section: i32,
    pub row: i32,
}

impl RowId {
    /// Sentinel for rows outside any list.
    pub const DETACHED: Self = Self {
        section: -1,
        row: -1,
    };

    #[must_use]
    pub const fn new(section: i32, row: i32) -> Self {
        Self { section, row }
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::DETACHED
    }
}

// ---------------------------------------------------------------------------
// SwipeTuning
// ---------------------------------------------------------------------------

/// Numeric constants of the swipe model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeTuning {
    /// Button slots spanning the content width (default: 5).
    pub button_slots: u32,
    /// Fraction of content width a slow release must travel (default: 0.33).
    pub open_ratio: f32,
    /// Releases sooner than this after grant are flicks (default: 200ms).
    pub flick_window_ms: u64,
    /// Extra travel past the left panel that fires CTA (default: 70px).
    pub cta_extend_left: f32,
    /// Extra travel past the right panel that fires CTA (default: 150px).
    pub cta_extend_right: f32,
    /// CTA debounce window (default: 300ms).
    pub cta_debounce_ms: u64,
    /// Delay before the auto-open preview appears (default: 500ms).
    pub auto_open_delay_ms: u64,
    /// Duration of the rendered settle tween after a snap (default: 160ms).
    pub tween_ms: u64,
}

impl Default for SwipeTuning {
    fn default() -> Self {
        Self {
            button_slots: DEFAULT_BUTTON_SLOTS,
            open_ratio: 0.33,
            flick_window_ms: 200,
            cta_extend_left: 70.0,
            cta_extend_right: 150.0,
            cta_debounce_ms: 300,
            auto_open_delay_ms: 500,
            tween_ms: 160,
        }
    }
}

impl SwipeTuning {
    #[inline]
    #[must_use]
    pub fn flick_window(&self) -> Duration {
        Duration::from_millis(self.flick_window_ms)
    }

    #[inline]
    #[must_use]
    pub fn cta_debounce(&self) -> Duration {
        Duration::from_millis(self.cta_debounce_ms)
    }

    #[inline]
    #[must_use]
    pub fn auto_open_delay(&self) -> Duration {
        Duration::from_millis(self.auto_open_delay_ms)
    }

    #[inline]
    #[must_use]
    pub fn tween(&self) -> Duration {
        Duration::from_millis(self.tween_ms)
    }

    /// Extra travel past the panel edge that fires CTA on `side`.
    #[inline]
    #[must_use]
    pub fn cta_extend(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.cta_extend_left,
            Side::Right => self.cta_extend_right,
        }
    }

    /// Load from a JSON string; missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(s)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every constant is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.button_slots == 0 {
            return Err(ConfigError::ZeroButtonSlots);
        }
        if !(self.open_ratio.is_finite() && self.open_ratio > 0.0 && self.open_ratio <= 1.0) {
            return Err(ConfigError::InvalidOpenRatio(self.open_ratio));
        }
        for side in [Side::Left, Side::Right] {
            let value = self.cta_extend(side);
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidCtaExtend { side, value });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SwipeoutConfig
// ---------------------------------------------------------------------------

/// Validated configuration of one row.
#[derive(Clone)]
pub struct SwipeoutConfig {
    pub(crate) auto_close: bool,
    pub(crate) sensitivity: f32,
    pub(crate) button_width: f32,
    pub(crate) disabled: bool,
    pub(crate) auto_open_left: bool,
    pub(crate) auto_open_right: bool,
    pub(crate) timeout: Duration,
    pub(crate) drag_to_cta: bool,
    pub(crate) left: ActionSet,
    pub(crate) right: ActionSet,
    pub(crate) row_id: RowId,
    pub(crate) left_background_color: Option<String>,
    pub(crate) right_background_color: Option<String>,
    pub(crate) button_background_color: Option<String>,
    pub(crate) on_open: Option<NotifyFn>,
    pub(crate) on_close: Option<NotifyFn>,
    pub(crate) on_cta: Option<CtaFn>,
    pub(crate) tuning: SwipeTuning,
}

impl fmt::Debug for SwipeoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeoutConfig")
            .field("auto_close", &self.auto_close)
            .field("sensitivity", &self.sensitivity)
            .field("button_width", &self.button_width)
            .field("disabled", &self.disabled)
            .field("timeout", &self.timeout)
            .field("drag_to_cta", &self.drag_to_cta)
            .field("left", &self.left.len())
            .field("right", &self.right.len())
            .field("row_id", &self.row_id)
            .field("tuning", &self.tuning)
            .finish_non_exhaustive()
    }
}

impl Default for SwipeoutConfig {
    fn default() -> Self {
        Self {
            auto_close: false,
            sensitivity: DEFAULT_SENSITIVITY,
            button_width: 0.0,
            disabled: false,
            auto_open_left: false,
            auto_open_right: false,
            timeout: DEFAULT_TIMEOUT,
            drag_to_cta: false,
            left: ActionSet::empty(Side::Left),
            right: ActionSet::empty(Side::Right),
            row_id: RowId::DETACHED,
            left_background_color: None,
            right_background_color: None,
            button_background_color: None,
            on_open: None,
            on_close: None,
            on_cta: None,
            tuning: SwipeTuning::default(),
        }
    }
}

impl SwipeoutConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> SwipeoutConfigBuilder {
        SwipeoutConfigBuilder::default()
    }

    /// Action set for `side`.
    #[must_use]
    pub fn actions(&self, side: Side) -> &ActionSet {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Whether `side` has any buttons.
    #[must_use]
    pub fn has_actions(&self, side: Side) -> bool {
        !self.actions(side).is_empty()
    }

    /// Replace the buttons of one side.
    pub fn set_actions(&mut self, side: Side, buttons: Vec<ActionButton>) {
        let set = ActionSet::new(side, buttons);
        match side {
            Side::Left => self.left = set,
            Side::Right => self.right = set,
        }
        self.warn_cta_misconfig();
    }

    /// Whether dragging past the extended threshold on `side` fires CTA.
    ///
    /// Requires `drag_to_cta`, exactly one button on that side, and an
    /// `on_cta` callback.
    #[must_use]
    pub fn cta_enabled(&self, side: Side) -> bool {
        self.drag_to_cta && self.on_cta.is_some() && self.actions(side).len() == 1
    }

    /// Highlight tint shown while dragging toward `side`'s panel.
    #[must_use]
    pub fn tint(&self, side: Side) -> Option<&str> {
        match side {
            Side::Left => self.left_background_color.as_deref(),
            Side::Right => self.right_background_color.as_deref(),
        }
    }

    /// Whether auto-open is requested for `side`.
    #[must_use]
    pub fn auto_open(&self, side: Side) -> bool {
        match side {
            Side::Left => self.auto_open_left,
            Side::Right => self.auto_open_right,
        }
    }

    /// Capture thresholds for the gesture classifier.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            sensitivity: self.sensitivity,
        }
    }

    #[inline]
    #[must_use]
    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    #[inline]
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[inline]
    #[must_use]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    #[inline]
    #[must_use]
    pub fn button_width(&self) -> f32 {
        self.button_width
    }

    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[inline]
    #[must_use]
    pub fn row_id(&self) -> RowId {
        self.row_id
    }

    #[inline]
    #[must_use]
    pub fn button_background_color(&self) -> Option<&str> {
        self.button_background_color.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn tuning(&self) -> &SwipeTuning {
        &self.tuning
    }

    fn warn_cta_misconfig(&self) {
        if !self.drag_to_cta {
            return;
        }
        if self.on_cta.is_none() {
            tracing::warn!(
                target: "swipeout.config",
                row = ?self.row_id,
                "drag_to_cta without on_cta callback; CTA disabled"
            );
            return;
        }
        for side in [Side::Left, Side::Right] {
            let count = self.actions(side).len();
            if count > 1 {
                tracing::warn!(
                    target: "swipeout.config",
                    row = ?self.row_id,
                    side = %side,
                    buttons = count,
                    "drag_to_cta needs exactly one button; CTA disabled for this side"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`SwipeoutConfig`].
#[derive(Default)]
pub struct SwipeoutConfigBuilder {
    config: SwipeoutConfig,
}

impl SwipeoutConfigBuilder {
    /// Close the row before running a button's callback.
    #[must_use]
    pub fn auto_close(mut self, on: bool) -> Self {
        self.config.auto_close = on;
        self
    }

    /// Capture sensitivity in pixels.
    #[must_use]
    pub fn sensitivity(mut self, px: f32) -> Self {
        self.config.sensitivity = px;
        self
    }

    /// Button width used by the auto-open preview.
    #[must_use]
    pub fn button_width(mut self, px: f32) -> Self {
        self.config.button_width = px;
        self
    }

    /// Ignore all gestures.
    #[must_use]
    pub fn disabled(mut self, on: bool) -> Self {
        self.config.disabled = on;
        self
    }

    #[must_use]
    pub fn auto_open_left(mut self, on: bool) -> Self {
        self.config.auto_open_left = on;
        self
    }

    #[must_use]
    pub fn auto_open_right(mut self, on: bool) -> Self {
        self.config.auto_open_right = on;
        self
    }

    /// When the auto-open preview is hidden, measured from mount.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    #[must_use]
    pub fn drag_to_cta(mut self, on: bool) -> Self {
        self.config.drag_to_cta = on;
        self
    }

    #[must_use]
    pub fn left(mut self, buttons: Vec<ActionButton>) -> Self {
        self.config.left = ActionSet::new(Side::Left, buttons);
        self
    }

    #[must_use]
    pub fn right(mut self, buttons: Vec<ActionButton>) -> Self {
        self.config.right = ActionSet::new(Side::Right, buttons);
        self
    }

    #[must_use]
    pub fn row_id(mut self, id: RowId) -> Self {
        self.config.row_id = id;
        self
    }

    #[must_use]
    pub fn left_background_color(mut self, color: impl Into<String>) -> Self {
        self.config.left_background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn right_background_color(mut self, color: impl Into<String>) -> Self {
        self.config.right_background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn button_background_color(mut self, color: impl Into<String>) -> Self {
        self.config.button_background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn on_open(mut self, f: impl Fn(RowId, Option<Side>) + 'static) -> Self {
        self.config.on_open = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn on_close(mut self, f: impl Fn(RowId, Option<Side>) + 'static) -> Self {
        self.config.on_close = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn on_cta(mut self, f: impl Fn() + 'static) -> Self {
        self.config.on_cta = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn tuning(mut self, tuning: SwipeTuning) -> Self {
        self.config.tuning = tuning;
        self
    }

    /// Validate and normalize.
    pub fn build(self) -> Result<SwipeoutConfig, ConfigError> {
        let mut config = self.config;

        if !(config.sensitivity.is_finite() && config.sensitivity >= 0.0) {
            return Err(ConfigError::InvalidSensitivity(config.sensitivity));
        }
        if !(config.button_width.is_finite() && config.button_width >= 0.0) {
            return Err(ConfigError::InvalidButtonWidth(config.button_width));
        }
        config.tuning.validate()?;

        let delay = config.tuning.auto_open_delay();
        if (config.auto_open_left || config.auto_open_right) && config.timeout < delay {
            tracing::warn!(
                target: "swipeout.config",
                row = ?config.row_id,
                timeout_ms = config.timeout.as_millis() as u64,
                delay_ms = delay.as_millis() as u64,
                "auto-open timeout shorter than preview delay; raised to delay"
            );
            config.timeout = delay;
        }

        config.warn_cta_misconfig();
        Ok(config)
    }
}
