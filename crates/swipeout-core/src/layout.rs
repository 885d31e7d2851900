#![forbid(unsafe_code)]

//! Panel sizing and open/close thresholds.
//!
//! Panels are sized as if a fixed number of button slots (five by default)
//! spanned the content width, regardless of how many buttons a side holds.
//! A side with three buttons on a 250px row therefore gets a 150px panel.
//!
//! # Invariants
//!
//! 1. Every width is finite and non-negative.
//! 2. A side with no buttons has a zero-width panel.
//! 3. `left_width == per_button_width * left_count` (same for right).

use crate::geometry::{Side, sanitize_extent};

/// Number of button slots that span the content width.
pub const DEFAULT_BUTTON_SLOTS: u32 = 5;

/// Derived panel widths for one row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelMetrics {
    /// Width of a single action button.
    pub per_button_width: f32,
    /// Width of the left panel (revealed by dragging right).
    pub left_width: f32,
    /// Width of the right panel (revealed by dragging left).
    pub right_width: f32,
}

impl PanelMetrics {
    /// All-zero metrics: an inert row.
    pub const EMPTY: Self = Self {
        per_button_width: 0.0,
        left_width: 0.0,
        right_width: 0.0,
    };

    /// Derive metrics from a measured content width and button counts.
    ///
    /// `slots` of zero is treated as one.
    #[must_use]
    pub fn derive(content_width: f32, slots: u32, left_count: usize, right_count: usize) -> Self {
        let per_button_width = per_button_width(content_width, slots);
        Self {
            per_button_width,
            left_width: panel_width(per_button_width, left_count),
            right_width: panel_width(per_button_width, right_count),
        }
    }

    /// Width of the panel on `side`.
    #[inline]
    #[must_use]
    pub fn width(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_width,
            Side::Right => self.right_width,
        }
    }

    /// Replace the width of one side, leaving the other untouched.
    pub fn set_width(&mut self, side: Side, width: f32) {
        let width = sanitize_extent(width);
        match side {
            Side::Left => self.left_width = width,
            Side::Right => self.right_width = width,
        }
    }

    /// Recompute a single side from a fresh content width.
    ///
    /// Updates `per_button_width` as well, as an explicit open does.
    pub fn remeasure_side(&mut self, content_width: f32, slots: u32, side: Side, count: usize) {
        self.per_button_width = per_button_width(content_width, slots);
        let width = panel_width(self.per_button_width, count);
        self.set_width(side, width);
    }

    /// Resting offset that fully reveals `side`.
    #[inline]
    #[must_use]
    pub fn open_offset(&self, side: Side) -> f32 {
        side.reveal_sign() * self.width(side)
    }
}

/// Width of a single button for the given content width.
#[inline]
#[must_use]
pub fn per_button_width(content_width: f32, slots: u32) -> f32 {
    sanitize_extent(content_width) / slots.max(1) as f32
}

/// Width of a panel holding `count` buttons.
#[inline]
#[must_use]
pub fn panel_width(per_button_width: f32, count: usize) -> f32 {
    sanitize_extent(per_button_width * count as f32)
}

/// Release distance beyond which a slow drag opens a panel.
#[inline]
#[must_use]
pub fn open_threshold(content_width: f32, ratio: f32) -> f32 {
    sanitize_extent(content_width) * ratio
}

/// Geometry of the half-open preview shown by auto-open.
///
/// The content shifts by half a button. The right panel is a flat half
/// button wide; the left panel shows half of each of its button slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewGeometry {
    pub offset: f32,
    pub panel_width: f32,
}

impl PreviewGeometry {
    /// Preview for `side` given the configured button width and count.
    #[must_use]
    pub fn for_side(side: Side, button_width: f32, count: usize) -> Self {
        let half = sanitize_extent(button_width) / 2.0;
        let panel_width = match side {
            Side::Left => panel_width(half, count),
            Side::Right => half,
        };
        Self {
            offset: side.reveal_sign() * half,
            panel_width,
        }
    }
}
