#![forbid(unsafe_code)]

//! Action buttons and the ordered sets that fill each side panel.
//!
//! An [`ActionSet`] lists its buttons in left-to-right display order. The
//! panel renders them edge to edge, each one `per_button_width` wide, so
//! the first button of a left set sits at the row's outer edge and the
//! first button of a right set sits next to the content.
//!
//! [`ActionButton::appearance`] resolves colors and size the same way for
//! every renderer: an explicit background wins over the style variant,
//! which wins over the row-wide default.

use std::fmt;
use std::rc::Rc;

use swipeout_core::Side;

/// Callback run when a button is pressed.
pub type PressFn = Rc<dyn Fn()>;

/// Default label color.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Pressed-state opacity when no underlay color is configured.
pub const DEFAULT_ACTIVE_OPACITY: f32 = 0.85;

// ---------------------------------------------------------------------------
// ButtonStyle / ButtonContent
// ---------------------------------------------------------------------------

/// Predefined color variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonStyle {
    #[default]
    None,
    Delete,
    Primary,
    Secondary,
}

impl ButtonStyle {
    /// Background color implied by the variant.
    #[must_use]
    pub const fn background(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Delete => Some("red"),
            Self::Primary => Some("blue"),
            Self::Secondary => Some("gray"),
        }
    }

    /// Parse the variant names used by declarative row descriptions.
    ///
    /// Unknown names map to [`ButtonStyle::None`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "delete" => Self::Delete,
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            _ => Self::None,
        }
    }
}

/// What a button displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonContent {
    /// A text label.
    Label(String),
    /// Host-rendered content identified by an opaque key.
    Custom(String),
}

impl Default for ButtonContent {
    fn default() -> Self {
        Self::Label(String::new())
    }
}

// ---------------------------------------------------------------------------
// ActionButton
// ---------------------------------------------------------------------------

/// One button in a side panel.
#[derive(Clone, Default)]
pub struct ActionButton {
    pub content: ButtonContent,
    pub style: ButtonStyle,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    /// Pressed-state underlay; when set the button stays fully opaque.
    pub underlay_color: Option<String>,
    pub disabled: bool,
    on_press: Option<PressFn>,
}

impl fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButton")
            .field("content", &self.content)
            .field("style", &self.style)
            .field("background_color", &self.background_color)
            .field("disabled", &self.disabled)
            .field("has_on_press", &self.on_press.is_some())
            .finish_non_exhaustive()
    }
}

impl ActionButton {
    /// A text button.
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            content: ButtonContent::Label(text.into()),
            ..Self::default()
        }
    }

    /// A button whose content the host renders.
    #[must_use]
    pub fn custom(key: impl Into<String>) -> Self {
        Self {
            content: ButtonContent::Custom(key.into()),
            ..Self::default()
        }
    }

    /// Set the style variant (builder pattern).
    #[must_use]
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Set an explicit background (builder pattern).
    #[must_use]
    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the label color (builder pattern).
    #[must_use]
    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Set the pressed-state underlay (builder pattern).
    #[must_use]
    pub fn underlay(mut self, color: impl Into<String>) -> Self {
        self.underlay_color = Some(color.into());
        self
    }

    /// Mark the button disabled (builder pattern).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the press callback (builder pattern).
    #[must_use]
    pub fn on_press(mut self, f: impl Fn() + 'static) -> Self {
        self.on_press = Some(Rc::new(f));
        self
    }

    /// Run the press callback, if any. Returns `true` if one ran.
    pub(crate) fn invoke(&self) -> bool {
        match &self.on_press {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    /// Resolve colors and size for rendering.
    #[must_use]
    pub fn appearance(&self, width: f32, height: f32, row_default: Option<&str>) -> ButtonAppearance {
        let background = self
            .background_color
            .clone()
            .or_else(|| self.style.background().map(str::to_owned))
            .or_else(|| row_default.map(str::to_owned));
        ButtonAppearance {
            background,
            text_color: self
                .text_color
                .clone()
                .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_owned()),
            width,
            height,
            active_opacity: if self.underlay_color.is_some() {
                1.0
            } else {
                DEFAULT_ACTIVE_OPACITY
            },
            disabled: self.disabled,
        }
    }
}

/// Resolved visual properties of one button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonAppearance {
    pub background: Option<String>,
    pub text_color: String,
    pub width: f32,
    pub height: f32,
    pub active_opacity: f32,
    pub disabled: bool,
}

// ---------------------------------------------------------------------------
// ActionSet
// ---------------------------------------------------------------------------

/// Ordered buttons for one side of the row.
#[derive(Debug, Clone)]
pub struct ActionSet {
    side: Side,
    buttons: Vec<ActionButton>,
}

impl ActionSet {
    /// Create a set for `side`.
    #[must_use]
    pub fn new(side: Side, buttons: Vec<ActionButton>) -> Self {
        Self { side, buttons }
    }

    /// An empty set; its panel is never rendered.
    #[must_use]
    pub fn empty(side: Side) -> Self {
        Self::new(side, Vec::new())
    }

    /// Which side this set belongs to.
    #[inline]
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Button at `index` in display order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ActionButton> {
        self.buttons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionButton> {
        self.buttons.iter()
    }

    /// Horizontal position of button `index` inside its panel.
    #[must_use]
    pub fn button_x(&self, index: usize, per_button_width: f32) -> Option<f32> {
        (index < self.buttons.len()).then(|| index as f32 * per_button_width)
    }
}
