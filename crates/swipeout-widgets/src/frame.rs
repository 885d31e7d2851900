#![forbid(unsafe_code)]

//! Render snapshot of one row.
//!
//! [`RowFrame`] is what a renderer needs to draw the row at a given
//! instant: the eased content translation, the geometry of each side
//! panel, and fully resolved button appearances. It is derived, never
//! stored; the machine's authoritative offset is untouched.
//!
//! # Invariants
//!
//! 1. At most one panel is visible, and only on the side the content has
//!    moved away from.
//! 2. Panel widths are finite and never exceed the panel's open width.
//! 3. `content_translate` equals the raw offset while the offset is within
//!    the open panel's width.

use swipeout_core::easing::rubber_band;
use swipeout_core::{Instant, Side};

use crate::action::ButtonAppearance;
use crate::config::SwipeoutConfig;
use crate::machine::SwipeMachine;

/// Geometry of one side panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelFrame {
    pub visible: bool,
    /// Left edge of the panel in row coordinates.
    pub x: f32,
    pub width: f32,
    /// Buttons in display order.
    pub buttons: Vec<ButtonAppearance>,
}

/// Everything needed to draw the row at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowFrame {
    /// Horizontal translation of the content, rubber-banded past the panel.
    pub content_translate: f32,
    /// Drag highlight behind the row.
    pub background: Option<String>,
    pub left: PanelFrame,
    pub right: PanelFrame,
}

impl RowFrame {
    /// Build the frame for `machine` at `now`.
    #[must_use]
    pub fn compute(machine: &SwipeMachine, config: &SwipeoutConfig, now: Instant) -> Self {
        let state = machine.state();
        let pos = machine.rendered_offset(config, now);
        let panels = state.panels;
        let limit = if pos > 0.0 {
            panels.left_width
        } else {
            -panels.right_width
        };

        let buttons = |side: Side| -> Vec<ButtonAppearance> {
            config
                .actions(side)
                .iter()
                .map(|b| {
                    b.appearance(
                        panels.per_button_width,
                        state.content_height,
                        config.button_background_color(),
                    )
                })
                .collect()
        };

        let left = if pos > 0.0 && config.has_actions(Side::Left) {
            PanelFrame {
                visible: true,
                x: 0.0,
                width: pos.min(panels.left_width),
                buttons: buttons(Side::Left),
            }
        } else {
            PanelFrame::default()
        };

        let right = if pos < 0.0 && config.has_actions(Side::Right) {
            let x = (state.content_width + limit.max(pos)).abs();
            PanelFrame {
                visible: true,
                x,
                width: (state.content_width - x).max(0.0),
                buttons: buttons(Side::Right),
            }
        } else {
            PanelFrame::default()
        };

        Self {
            content_translate: rubber_band(pos, limit),
            background: state.highlight.clone(),
            left,
            right,
        }
    }

    /// The visible panel, if any.
    #[must_use]
    pub fn visible_side(&self) -> Option<Side> {
        if self.left.visible {
            Some(Side::Left)
        } else if self.right.visible {
            Some(Side::Right)
        } else {
            None
        }
    }
}
